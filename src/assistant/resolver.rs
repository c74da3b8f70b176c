use crate::types::{Destination, Recommendation};
use rand::RngCore;
use rand::seq::SliceRandom;

/// Topic a piece of user text was routed to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Intent {
    Tourism,
    Location,
    Umkm,
    History,
    Recommendation,
    Weather,
    Unknown,
}

/// What the assistant says back.
#[derive(Clone, Debug, PartialEq)]
pub struct Reply {
    pub intent: Intent,
    pub text: String,
    pub recommendation: Option<Recommendation>,
    pub show_map: bool,
}

impl Reply {
    fn text(intent: Intent, text: &str) -> Self {
        Self {
            intent,
            text: text.to_string(),
            recommendation: None,
            show_map: false,
        }
    }

    fn with_map(mut self) -> Self {
        self.show_map = true;
        self
    }
}

pub const TOURISM_INTRO: &str =
    "Desa Wukirsari memiliki banyak destinasi wisata menarik! Berikut rekomendasi saya:";
pub const TOURISM_FALLBACK: &str = "Desa Wukirsari memiliki banyak destinasi wisata menarik, seperti kebun teh, bukit, dan sentra batik. Data destinasi sedang dimuat, silakan lihat peta di bawah ini.";
pub const LOCATION_TEXT: &str = "Berikut peta destinasi wisata di Desa Wukirsari. Geser peta untuk menjelajah, gunakan tombol + dan - untuk memperbesar, lalu klik marker untuk melihat detail destinasi.";
pub const UMKM_TEXT: &str = "Desa Wukirsari terkenal dengan produk UMKM berkualitas! Kami memiliki berbagai kategori seperti kuliner tradisional, kerajinan tangan, dan produk pertanian organik. Anda bisa melihat katalog lengkapnya di bagian Produk UMKM di website ini.";
pub const HISTORY_TEXT: &str = "Desa Wukirsari adalah salah satu Desa Wisata Terbaik yang diakui UNWTO (United Nations World Tourism Organization). Desa ini terletak di Imogiri, Bantul, Yogyakarta, dan dikenal dengan keindahan alamnya, budaya yang kaya, serta masyarakat yang ramah dan gotong royong.";
pub const RECOMMENDATION_INTRO: &str =
    "Berikut beberapa destinasi yang saya rekomendasikan di Desa Wukirsari:";
pub const RECOMMENDATION_OUTRO: &str = "Klik marker di peta untuk melihat detail destinasi.";
pub const RECOMMENDATION_FALLBACK: &str = "Saat ini belum ada data destinasi untuk direkomendasikan. Silakan lihat peta wisata di bawah ini atau coba lagi nanti.";
pub const WEATHER_TEXT: &str = "Untuk informasi cuaca terkini di Desa Wukirsari, Anda bisa melihat widget cuaca di bagian atas website ini. Kami menampilkan suhu, kondisi cuaca, dan kelembapan udara.";
pub const FALLBACK_TEXT: &str = "Terima kasih atas pertanyaannya! Saya dapat membantu Anda dengan informasi tentang wisata, peta lokasi, produk UMKM, sejarah desa, dan rekomendasi destinasi di Desa Wukirsari. Ada yang ingin Anda ketahui lebih lanjut?";

pub const TOURISM_KEYWORDS: &[&str] = &[
    "wisata",
    "destinasi",
    "tempat",
    "liburan",
    "jalan-jalan",
    "tour",
];
pub const LOCATION_KEYWORDS: &[&str] = &[
    "peta",
    "lokasi",
    "map",
    "rute",
    "petunjuk arah",
    "di mana",
    "dimana",
];
pub const UMKM_KEYWORDS: &[&str] = &[
    "umkm",
    "produk",
    "oleh-oleh",
    "kerajinan",
    "kuliner",
    "belanja",
];
pub const HISTORY_KEYWORDS: &[&str] = &["sejarah", "desa", "budaya", "asal usul"];
pub const RECOMMENDATION_KEYWORDS: &[&str] = &["rekomendasi", "rekomen", "saran", "recommend"];
pub const WEATHER_KEYWORDS: &[&str] = &["cuaca", "iklim", "hujan", "suhu"];

/// Number of destinations listed by the recommendation rule.
pub const RECOMMENDATION_LIMIT: usize = 3;

type Builder = fn(&[Destination], &mut dyn RngCore) -> Reply;

/// One row of the rule table: a keyword predicate and the reply it produces.
pub struct Rule {
    pub intent: Intent,
    pub keywords: &'static [&'static str],
    build: Builder,
}

impl Rule {
    /// `lowered` must already be lower-cased.
    pub fn matches(&self, lowered: &str) -> bool {
        self.keywords.iter().any(|keyword| lowered.contains(keyword))
    }
}

/// Evaluated top to bottom; the first match wins.
pub static RULES: &[Rule] = &[
    Rule {
        intent: Intent::Tourism,
        keywords: TOURISM_KEYWORDS,
        build: tourism_reply,
    },
    Rule {
        intent: Intent::Location,
        keywords: LOCATION_KEYWORDS,
        build: location_reply,
    },
    Rule {
        intent: Intent::Umkm,
        keywords: UMKM_KEYWORDS,
        build: umkm_reply,
    },
    Rule {
        intent: Intent::History,
        keywords: HISTORY_KEYWORDS,
        build: history_reply,
    },
    Rule {
        intent: Intent::Recommendation,
        keywords: RECOMMENDATION_KEYWORDS,
        build: recommendation_reply,
    },
    Rule {
        intent: Intent::Weather,
        keywords: WEATHER_KEYWORDS,
        build: weather_reply,
    },
];

fn tourism_reply(destinations: &[Destination], rng: &mut dyn RngCore) -> Reply {
    match destinations.choose(rng) {
        Some(pick) => Reply {
            intent: Intent::Tourism,
            text: TOURISM_INTRO.to_string(),
            recommendation: Some(Recommendation::from(pick)),
            show_map: true,
        },
        None => Reply::text(Intent::Tourism, TOURISM_FALLBACK).with_map(),
    }
}

fn location_reply(_: &[Destination], _: &mut dyn RngCore) -> Reply {
    Reply::text(Intent::Location, LOCATION_TEXT).with_map()
}

fn umkm_reply(_: &[Destination], _: &mut dyn RngCore) -> Reply {
    Reply::text(Intent::Umkm, UMKM_TEXT)
}

fn history_reply(_: &[Destination], _: &mut dyn RngCore) -> Reply {
    Reply::text(Intent::History, HISTORY_TEXT)
}

fn weather_reply(_: &[Destination], _: &mut dyn RngCore) -> Reply {
    Reply::text(Intent::Weather, WEATHER_TEXT)
}

fn recommendation_reply(destinations: &[Destination], _rng: &mut dyn RngCore) -> Reply {
    if destinations.is_empty() {
        return Reply::text(Intent::Recommendation, RECOMMENDATION_FALLBACK).with_map();
    }

    let mut text = String::from(RECOMMENDATION_INTRO);
    text.push_str("\n\n");
    for destination in destinations.iter().take(RECOMMENDATION_LIMIT) {
        text.push_str("- **");
        text.push_str(&destination.name);
        text.push_str("**");
        let description = destination.description_text().trim();
        if !description.is_empty() {
            text.push_str(": ");
            text.push_str(description);
        }
        text.push('\n');
    }
    text.push('\n');
    text.push_str(RECOMMENDATION_OUTRO);

    Reply::text(Intent::Recommendation, &text).with_map()
}

/// Classify `input` without building a reply.
pub fn classify(input: &str) -> Intent {
    let lowered = input.to_lowercase();
    RULES
        .iter()
        .find(|rule| rule.matches(&lowered))
        .map(|rule| rule.intent)
        .unwrap_or(Intent::Unknown)
}

/// Resolve with an explicit random source (used by tests).
pub fn resolve_with(input: &str, destinations: &[Destination], rng: &mut dyn RngCore) -> Reply {
    let lowered = input.to_lowercase();
    match RULES.iter().find(|rule| rule.matches(&lowered)) {
        Some(rule) => (rule.build)(destinations, rng),
        None => Reply::text(Intent::Unknown, FALLBACK_TEXT),
    }
}

pub fn resolve(input: &str, destinations: &[Destination]) -> Reply {
    resolve_with(input, destinations, &mut rand::thread_rng())
}
