use super::resolver::Reply;
use crate::types::{ChatMessage, Destination, Recommendation};
use time::OffsetDateTime;

pub const WELCOME_ID: &str = "welcome";
pub const WELCOME_TEXT: &str = "Halo! Saya asisten wisata WukirTech. Tanya saya tentang destinasi wisata, peta lokasi, produk UMKM, atau sejarah Desa Wukirsari!";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PanelState {
    #[default]
    Closed,
    Open,
    Minimized,
}

/// Input accepted by [`ChatSession::submit`]; hand it to the reply task.
#[derive(Clone, Debug, PartialEq)]
pub struct PendingReply {
    pub input: String,
}

/// State of the floating chat widget.
///
/// The message list is append-only. Replies are appended in the order they
/// complete, which is not necessarily the order the questions were sent.
#[derive(Clone, Debug, PartialEq)]
pub struct ChatSession {
    panel: PanelState,
    messages: Vec<ChatMessage>,
    in_flight: usize,
}

impl Default for ChatSession {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatSession {
    pub fn new() -> Self {
        Self {
            panel: PanelState::Closed,
            messages: vec![welcome_message()],
            in_flight: 0,
        }
    }

    pub fn panel(&self) -> PanelState {
        self.panel
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// True while at least one reply is still on its way.
    pub fn is_waiting(&self) -> bool {
        self.in_flight > 0
    }

    pub fn open(&mut self) {
        self.panel = PanelState::Open;
    }

    pub fn close(&mut self) {
        self.panel = PanelState::Closed;
    }

    /// Open <-> Minimized. Does nothing while the panel is closed.
    pub fn toggle_minimized(&mut self) {
        self.panel = match self.panel {
            PanelState::Open => PanelState::Minimized,
            PanelState::Minimized => PanelState::Open,
            PanelState::Closed => PanelState::Closed,
        };
    }

    /// Append the user's message and hand back the input for resolution.
    /// Blank input is ignored.
    pub fn submit(&mut self, text: &str) -> Option<PendingReply> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return None;
        }
        self.messages.push(ChatMessage::user(trimmed));
        self.in_flight += 1;
        Some(PendingReply {
            input: trimmed.to_string(),
        })
    }

    pub fn receive(&mut self, reply: Reply) {
        self.in_flight = self.in_flight.saturating_sub(1);
        self.messages.push(ChatMessage::assistant(
            reply.text,
            reply.recommendation,
            reply.show_map,
        ));
    }

    /// A marker was clicked on the map embedded in the conversation.
    pub fn describe_destination(&mut self, destination: &Destination) {
        let text = format!("📍 {}", destination.name);
        self.messages.push(ChatMessage::assistant(
            text,
            Some(Recommendation::from(destination)),
            false,
        ));
    }
}

fn welcome_message() -> ChatMessage {
    ChatMessage {
        id: WELCOME_ID.to_string(),
        text: WELCOME_TEXT.to_string(),
        is_user: false,
        timestamp: OffsetDateTime::now_utc(),
        recommendation: None,
        show_map: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assistant::resolver::Intent;

    fn reply(text: &str) -> Reply {
        Reply {
            intent: Intent::Unknown,
            text: text.to_string(),
            recommendation: None,
            show_map: false,
        }
    }

    #[test]
    fn starts_closed_with_welcome() {
        let session = ChatSession::new();
        assert_eq!(session.panel(), PanelState::Closed);
        assert_eq!(session.messages().len(), 1);
        assert_eq!(session.messages()[0].id, WELCOME_ID);
        assert!(!session.is_waiting());
    }

    #[test]
    fn minimize_toggles_only_when_open() {
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
    }

    #[test]
    fn blank_input_is_rejected() {
        let mut session = ChatSession::new();
        assert!(session.submit("   ").is_none());
        assert_eq!(session.messages().len(), 1);
    }

    #[test]
    fn replies_append_in_completion_order() {
        let mut session = ChatSession::new();
        let first = session.submit(" pertama ").expect("accepted");
        let second = session.submit("kedua").expect("accepted");
        assert_eq!(first.input, "pertama");
        assert_eq!(second.input, "kedua");
        assert!(session.is_waiting());

        session.receive(reply("jawaban kedua"));
        assert!(session.is_waiting());
        session.receive(reply("jawaban pertama"));
        assert!(!session.is_waiting());

        let texts = session
            .messages()
            .iter()
            .map(|m| m.text.as_str())
            .collect::<Vec<_>>();
        assert_eq!(
            texts[1..],
            ["pertama", "kedua", "jawaban kedua", "jawaban pertama"]
        );
    }

    #[test]
    fn describing_a_destination_appends_a_message() {
        let mut session = ChatSession::new();
        let destination = Destination {
            id: "d1".into(),
            name: "Bukit Panguk".into(),
            description: Some("Negeri di atas awan".into()),
            ..Default::default()
        };
        session.describe_destination(&destination);
        let last = session.messages().last().expect("message");
        assert!(!last.is_user);
        assert!(last.text.contains("Bukit Panguk"));
        let rec = last.recommendation.as_ref().expect("recommendation");
        assert_eq!(rec.description, "Negeri di atas awan");
    }
}
