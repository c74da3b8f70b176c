//! Integration tests for the chat assistant
//!
//! Covers keyword routing, reply contents and the session flow

use rand::SeedableRng;
use rand::rngs::StdRng;
use std::time::Duration;
use wukirtech::assistant::{
    ChatSession, FALLBACK_TEXT, HISTORY_TEXT, Intent, LOCATION_TEXT, PanelState, UMKM_TEXT,
    WEATHER_TEXT, WELCOME_ID, classify, resolve, resolve_with, respond,
};
use wukirtech::types::Destination;

fn destination(id: &str, name: &str, description: &str) -> Destination {
    Destination {
        id: id.to_string(),
        name: name.to_string(),
        description: Some(description.to_string()),
        maps_url: Some(format!("https://maps.google.com/?q={id}")),
        ..Default::default()
    }
}

fn four_destinations() -> Vec<Destination> {
    vec![
        destination("a", "Alpha", "Pertama"),
        destination("b", "Bravo", "Kedua"),
        destination("c", "Charlie", "Ketiga"),
        destination("d", "Delta", "Keempat"),
    ]
}

mod routing_tests {
    use super::*;

    #[test]
    fn test_keywords_are_case_insensitive() {
        assert_eq!(classify("Ada WISATA apa?"), Intent::Tourism);
        assert_eq!(classify("DIMANA lokasinya"), Intent::Location);
        assert_eq!(classify("Produk Batik"), Intent::Umkm);
        assert_eq!(classify("SUHU hari ini"), Intent::Weather);
    }

    #[test]
    fn test_tourism_wins_over_umkm() {
        // "wisata" and "kerajinan" both match; tourism comes first
        assert_eq!(classify("wisata kerajinan"), Intent::Tourism);
    }

    #[test]
    fn test_location_wins_over_history() {
        assert_eq!(classify("dimana desa ini"), Intent::Location);
    }

    #[test]
    fn test_weather_is_checked_last() {
        assert_eq!(classify("rekomendasi saat hujan"), Intent::Recommendation);
        assert_eq!(classify("apakah akan hujan"), Intent::Weather);
    }

    #[test]
    fn test_unmatched_input_gets_fallback() {
        let reply = resolve("halo", &four_destinations());
        assert_eq!(reply.intent, Intent::Unknown);
        assert_eq!(reply.text, FALLBACK_TEXT);
        assert!(reply.recommendation.is_none());
        assert!(!reply.show_map);
    }

    #[test]
    fn test_static_replies() {
        let list = four_destinations();

        assert_eq!(resolve("peta wisata", &[]).intent, Intent::Tourism);

        let location = resolve("tunjukkan peta", &list);
        assert_eq!(location.text, LOCATION_TEXT);
        assert!(location.show_map);

        let umkm = resolve("ada oleh-oleh?", &list);
        assert_eq!(umkm.text, UMKM_TEXT);
        assert!(!umkm.show_map);

        let history = resolve("asal usul", &list);
        assert_eq!(history.text, HISTORY_TEXT);

        let weather = resolve("bagaimana cuaca", &list);
        assert_eq!(weather.text, WEATHER_TEXT);
        assert!(!weather.show_map);
    }
}

mod reply_tests {
    use super::*;

    #[test]
    fn test_tourism_reply_recommends_a_loaded_destination() {
        let list = vec![
            destination("nglinggo", "Kebun Teh Nglinggo", "Kebun teh di perbukitan"),
            destination("becici", "Puncak Becici", "Hutan pinus"),
        ];
        let mut rng = StdRng::seed_from_u64(42);
        let reply = resolve_with("ada wisata apa", &list, &mut rng);

        assert_eq!(reply.intent, Intent::Tourism);
        assert!(reply.show_map);
        let rec = reply.recommendation.expect("recommendation");
        assert!(list.iter().any(|d| d.name == rec.name));
        assert!(rec.maps_url.is_some());
    }

    #[test]
    fn test_tourism_reply_with_single_destination() {
        let list = vec![destination("nglinggo", "Kebun Teh Nglinggo", "Kebun teh")];
        let reply = resolve("ada wisata apa", &list);
        let rec = reply.recommendation.expect("recommendation");
        assert_eq!(rec.name, "Kebun Teh Nglinggo");
        assert_eq!(rec.description, "Kebun teh");
    }

    #[test]
    fn test_tourism_reply_without_destinations() {
        let reply = resolve("ada wisata apa", &[]);
        assert!(reply.recommendation.is_none());
        assert!(reply.show_map);
    }

    #[test]
    fn test_recommendation_lists_first_three() {
        let reply = resolve("kasih rekomendasi dong", &four_destinations());
        assert_eq!(reply.intent, Intent::Recommendation);
        assert!(reply.show_map);
        assert!(reply.recommendation.is_none());

        let alpha = reply.text.find("Alpha").expect("Alpha listed");
        let bravo = reply.text.find("Bravo").expect("Bravo listed");
        let charlie = reply.text.find("Charlie").expect("Charlie listed");
        assert!(alpha < bravo && bravo < charlie);
        assert!(!reply.text.contains("Delta"));
        assert!(reply.text.contains("Pertama"));
    }

    #[test]
    fn test_recommendation_without_destinations() {
        let reply = resolve("rekomendasi", &[]);
        assert!(reply.show_map);
        assert!(!reply.text.contains("**"));
    }
}

mod session_tests {
    use super::*;

    #[test]
    fn test_panel_transitions() {
        let mut session = ChatSession::new();
        session.toggle_minimized();
        assert_eq!(session.panel(), PanelState::Closed);

        session.open();
        session.toggle_minimized();
        assert_eq!(session.panel(), PanelState::Minimized);
        session.toggle_minimized();
        assert_eq!(session.panel(), PanelState::Open);

        session.close();
        assert_eq!(session.panel(), PanelState::Closed);
        // Closing keeps the conversation
        assert_eq!(session.messages()[0].id, WELCOME_ID);
    }

    #[test]
    fn test_blank_input_is_ignored() {
        let mut session = ChatSession::new();
        assert!(session.submit("   ").is_none());
        assert_eq!(session.messages().len(), 1);
        assert!(!session.is_waiting());
    }

    #[test]
    fn test_submit_trims_and_waits() {
        let mut session = ChatSession::new();
        let pending = session.submit("  sejarah desa  ").expect("accepted");
        assert_eq!(pending.input, "sejarah desa");
        assert!(session.is_waiting());

        let last = session.messages().last().expect("user message");
        assert!(last.is_user);
        assert_eq!(last.text, "sejarah desa");

        session.receive(resolve(&pending.input, &[]));
        assert!(!session.is_waiting());
        assert_eq!(session.messages().len(), 3);
        assert_eq!(session.messages()[2].text, HISTORY_TEXT);
    }

    #[test]
    fn test_message_ids_are_distinct() {
        let mut session = ChatSession::new();
        for text in ["a", "b", "c"] {
            let pending = session.submit(text).expect("accepted");
            session.receive(resolve(&pending.input, &[]));
        }
        let mut ids = session
            .messages()
            .iter()
            .map(|m| m.id.clone())
            .collect::<Vec<_>>();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 7);
    }

    #[test]
    fn test_marker_click_adds_card_without_map() {
        let mut session = ChatSession::new();
        let list = four_destinations();
        session.describe_destination(&list[1]);

        let last = session.messages().last().expect("assistant message");
        assert!(!last.is_user);
        assert!(!last.show_map);
        assert!(last.text.contains("Bravo"));
        assert_eq!(
            last.recommendation.as_ref().map(|r| r.name.as_str()),
            Some("Bravo")
        );
    }

    #[tokio::test]
    async fn test_respond_uses_the_snapshot() {
        let list = four_destinations();
        let reply = respond("rekomendasi".to_string(), list, Duration::ZERO).await;
        assert!(reply.text.contains("Alpha"));
    }

    #[tokio::test]
    async fn test_concurrent_replies_both_arrive() {
        let mut session = ChatSession::new();
        let first = session.submit("cuaca").expect("accepted");
        let second = session.submit("umkm").expect("accepted");
        assert!(session.is_waiting());

        let (a, b) = tokio::join!(
            respond(first.input, Vec::new(), Duration::from_millis(5)),
            respond(second.input, Vec::new(), Duration::ZERO),
        );
        session.receive(b);
        assert!(session.is_waiting());
        session.receive(a);
        assert!(!session.is_waiting());

        let texts = session
            .messages()
            .iter()
            .skip(3)
            .map(|m| m.text.as_str())
            .collect::<Vec<_>>();
        assert_eq!(texts, vec![UMKM_TEXT, WEATHER_TEXT]);
    }
}
