use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};
use time::OffsetDateTime;

pub const TABLE_DESTINATIONS: &str = "tourist_destinations";
pub const TABLE_PRODUCTS: &str = "umkm_products";
pub const TABLE_CATEGORIES: &str = "umkm_categories";
pub const TABLE_VISITORS: &str = "weekly_visitors";
pub const TABLE_VILLAGE_INFO: &str = "village_info";

/// A tourist destination row. Owned by the data store; the site only reads it
/// outside the admin panel.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Destination {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub maps_url: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
}

impl Destination {
    pub fn description_text(&self) -> &str {
        self.description.as_deref().unwrap_or_default()
    }
}

/// Read-only projection of a [`Destination`] attached to an assistant reply.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub name: String,
    pub description: String,
    pub maps_url: Option<String>,
    pub image_url: Option<String>,
}

impl From<&Destination> for Recommendation {
    fn from(destination: &Destination) -> Self {
        Self {
            name: destination.name.clone(),
            description: destination.description_text().to_string(),
            maps_url: destination
                .maps_url
                .clone()
                .filter(|url| !url.trim().is_empty()),
            image_url: destination.image_url.clone(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ChatMessage {
    pub id: String,
    pub text: String,
    pub is_user: bool,
    pub timestamp: OffsetDateTime,
    pub recommendation: Option<Recommendation>,
    pub show_map: bool,
}

static MESSAGE_SEQUENCE: Lazy<AtomicU64> = Lazy::new(|| AtomicU64::new(1));

/// Ids are `<unix-millis>-<sequence>`: unique within the process and ordered
/// by creation.
pub fn next_message_id() -> String {
    let millis = OffsetDateTime::now_utc().unix_timestamp_nanos() / 1_000_000;
    let seq = MESSAGE_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    format!("{millis}-{seq}")
}

impl ChatMessage {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            id: next_message_id(),
            text: text.into(),
            is_user: true,
            timestamp: OffsetDateTime::now_utc(),
            recommendation: None,
            show_map: false,
        }
    }

    pub fn assistant(
        text: impl Into<String>,
        recommendation: Option<Recommendation>,
        show_map: bool,
    ) -> Self {
        Self {
            id: next_message_id(),
            text: text.into(),
            is_user: false,
            timestamp: OffsetDateTime::now_utc(),
            recommendation,
            show_map,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub color: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub whatsapp_number: Option<String>,
    #[serde(default)]
    pub category_id: Option<String>,
}

/// A product joined with the category it belongs to.
#[derive(Clone, Debug, PartialEq)]
pub struct ProductListing {
    pub product: Product,
    pub category_name: String,
    pub category_color: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct CategoryShare {
    pub id: String,
    pub name: String,
    pub color: String,
    pub count: u64,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct WeeklyVisitors {
    pub id: String,
    /// ISO date (`YYYY-MM-DD`) of the first day of the week.
    pub week_start: String,
    #[serde(default)]
    pub visitor_count: Option<i64>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct VillageInfo {
    pub id: String,
    pub key: String,
    #[serde(default)]
    pub value: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContactInfo {
    pub phone: String,
    pub email: String,
    pub address: String,
    pub instagram: String,
    pub facebook: String,
}

impl ContactInfo {
    pub const KEYS: [&'static str; 5] = [
        "contact_phone",
        "contact_email",
        "address",
        "instagram",
        "facebook",
    ];

    pub fn from_rows(rows: &[VillageInfo]) -> Self {
        let mut info = Self::default();
        for row in rows {
            let value = row.value.clone().unwrap_or_default();
            match row.key.as_str() {
                "contact_phone" => info.phone = value,
                "contact_email" => info.email = value,
                "address" => info.address = value,
                "instagram" => info.instagram = value,
                "facebook" => info.facebook = value,
                _ => {}
            }
        }
        info
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_ids_are_unique() {
        let a = ChatMessage::user("halo");
        let b = ChatMessage::user("halo");
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn recommendation_drops_blank_maps_url() {
        let destination = Destination {
            id: "d1".into(),
            name: "Puncak Becici".into(),
            description: None,
            maps_url: Some("  ".into()),
            ..Default::default()
        };
        let rec = Recommendation::from(&destination);
        assert_eq!(rec.description, "");
        assert!(rec.maps_url.is_none());
    }

    #[test]
    fn contact_info_ignores_unknown_keys_and_nulls() {
        let rows = vec![
            VillageInfo {
                id: "1".into(),
                key: "contact_phone".into(),
                value: Some("0274-123".into()),
            },
            VillageInfo {
                id: "2".into(),
                key: "instagram".into(),
                value: None,
            },
            VillageInfo {
                id: "3".into(),
                key: "history".into(),
                value: Some("...".into()),
            },
        ];
        let info = ContactInfo::from_rows(&rows);
        assert_eq!(info.phone, "0274-123");
        assert_eq!(info.instagram, "");
        assert_eq!(info.email, "");
    }
}
