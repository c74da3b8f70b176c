//! Admin panel model: tab metadata, form state to row payloads, and the toast
//! messages each outcome produces.

use crate::store::Row;
use crate::theme::DEFAULT_CATEGORY_COLOR;
use crate::types::{
    Category, Destination, ProductListing, TABLE_CATEGORIES, TABLE_DESTINATIONS, TABLE_PRODUCTS,
    TABLE_VILLAGE_INFO, TABLE_VISITORS, VillageInfo, WeeklyVisitors,
};
use serde_json::{Value, json};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AdminSection {
    Destinations,
    Products,
    Categories,
    Visitors,
    VillageInfo,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AdminAction {
    Load,
    Save,
    Delete,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Created,
    Updated,
    Deleted,
}

impl AdminSection {
    pub const ALL: [AdminSection; 5] = [
        AdminSection::Destinations,
        AdminSection::Products,
        AdminSection::Categories,
        AdminSection::Visitors,
        AdminSection::VillageInfo,
    ];

    pub fn label(self) -> &'static str {
        match self {
            AdminSection::Destinations => "Destinasi Wisata",
            AdminSection::Products => "Produk UMKM",
            AdminSection::Categories => "Kategori UMKM",
            AdminSection::Visitors => "Data Pengunjung",
            AdminSection::VillageInfo => "Info Desa",
        }
    }

    pub fn table(self) -> &'static str {
        match self {
            AdminSection::Destinations => TABLE_DESTINATIONS,
            AdminSection::Products => TABLE_PRODUCTS,
            AdminSection::Categories => TABLE_CATEGORIES,
            AdminSection::Visitors => TABLE_VISITORS,
            AdminSection::VillageInfo => TABLE_VILLAGE_INFO,
        }
    }

    /// (subject of success messages, object in "Gagal menyimpan ...",
    /// object in "Gagal memuat ...")
    fn nouns(self) -> (&'static str, &'static str, &'static str) {
        match self {
            AdminSection::Destinations => ("Destinasi", "destinasi", "data destinasi"),
            AdminSection::Products => ("Produk", "produk", "data produk"),
            AdminSection::Categories => ("Kategori", "kategori", "data kategori"),
            AdminSection::Visitors => ("Data pengunjung", "data pengunjung", "data pengunjung"),
            AdminSection::VillageInfo => ("Informasi desa", "informasi desa", "informasi desa"),
        }
    }

    pub fn delete_prompt(self) -> &'static str {
        match self {
            AdminSection::Destinations => "Yakin ingin menghapus destinasi ini?",
            AdminSection::Products => "Yakin ingin menghapus produk ini?",
            AdminSection::Categories => {
                "Yakin ingin menghapus kategori ini? Ini akan mempengaruhi produk yang terkait."
            }
            AdminSection::Visitors => "Yakin ingin menghapus data pengunjung ini?",
            AdminSection::VillageInfo => "Yakin ingin menghapus informasi ini?",
        }
    }

    pub fn success_message(self, outcome: Outcome) -> String {
        let verb = match outcome {
            Outcome::Created => "ditambahkan",
            Outcome::Updated => "diperbarui",
            Outcome::Deleted => "dihapus",
        };
        format!("{} berhasil {}", self.nouns().0, verb)
    }

    pub fn error_message(self, action: AdminAction) -> String {
        let (_, object, listing) = self.nouns();
        match action {
            AdminAction::Load => format!("Gagal memuat {listing}"),
            AdminAction::Save => format!("Gagal menyimpan {object}"),
            AdminAction::Delete => format!("Gagal menghapus {object}"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

impl Toast {
    pub fn title(&self) -> &'static str {
        match self.kind {
            ToastKind::Success => "Berhasil",
            ToastKind::Error => "Error",
        }
    }
}

/// JavaScript `parseFloat`: longest numeric prefix after leading whitespace,
/// `None` where it would produce `NaN`.
pub fn parse_float_prefix(input: &str) -> Option<f64> {
    let s = input.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }
    let int_start = end;
    while bytes.get(end).is_some_and(u8::is_ascii_digit) {
        end += 1;
    }
    let mut digits = end - int_start;
    if bytes.get(end) == Some(&b'.') {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while bytes.get(frac_end).is_some_and(u8::is_ascii_digit) {
            frac_end += 1;
        }
        digits += frac_end - frac_start;
        if digits > 0 {
            end = frac_end;
        }
    }
    if digits == 0 {
        return None;
    }
    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while bytes.get(exp_end).is_some_and(u8::is_ascii_digit) {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }
    s[..end].parse::<f64>().ok().filter(|v| v.is_finite())
}

/// JavaScript `parseInt(s, 10)`: optional sign then leading decimal digits.
pub fn parse_int_prefix(input: &str) -> Option<i64> {
    let s = input.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let digits = rest
        .find(|c: char| !c.is_ascii_digit())
        .map_or(rest, |end| &rest[..end]);
    if digits.is_empty() {
        return None;
    }
    let value = digits.parse::<i64>().ok()?;
    Some(if negative { -value } else { value })
}

fn optional_text(value: &str) -> Value {
    if value.is_empty() {
        Value::Null
    } else {
        Value::String(value.to_string())
    }
}

fn object(value: Value) -> Row {
    match value {
        Value::Object(map) => map,
        _ => Row::new(),
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct DestinationForm {
    pub name: String,
    pub description: String,
    pub maps_url: String,
    pub image_url: String,
}

impl DestinationForm {
    pub fn from_record(destination: &Destination) -> Self {
        Self {
            name: destination.name.clone(),
            description: destination.description.clone().unwrap_or_default(),
            maps_url: destination.maps_url.clone().unwrap_or_default(),
            image_url: destination.image_url.clone().unwrap_or_default(),
        }
    }

    pub fn payload(&self) -> Row {
        object(json!({
            "name": self.name,
            "description": optional_text(&self.description),
            "maps_url": optional_text(&self.maps_url),
            "image_url": optional_text(&self.image_url),
        }))
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProductForm {
    pub name: String,
    pub description: String,
    pub price: String,
    pub image_url: String,
    pub whatsapp_number: String,
    pub category_id: String,
}

impl ProductForm {
    pub fn from_record(listing: &ProductListing) -> Self {
        let product = &listing.product;
        Self {
            name: product.name.clone(),
            description: product.description.clone().unwrap_or_default(),
            price: product.price.map(|p| p.to_string()).unwrap_or_default(),
            image_url: product.image_url.clone().unwrap_or_default(),
            whatsapp_number: product.whatsapp_number.clone().unwrap_or_default(),
            category_id: product.category_id.clone().unwrap_or_default(),
        }
    }

    pub fn payload(&self) -> Row {
        object(json!({
            "name": self.name,
            "description": optional_text(&self.description),
            "price": parse_float_prefix(&self.price),
            "image_url": optional_text(&self.image_url),
            "whatsapp_number": optional_text(&self.whatsapp_number),
            "category_id": optional_text(&self.category_id),
        }))
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct CategoryForm {
    pub name: String,
    pub color: String,
}

impl Default for CategoryForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            color: DEFAULT_CATEGORY_COLOR.to_string(),
        }
    }
}

impl CategoryForm {
    pub fn from_record(category: &Category) -> Self {
        Self {
            name: category.name.clone(),
            color: category
                .color
                .clone()
                .unwrap_or_else(|| DEFAULT_CATEGORY_COLOR.to_string()),
        }
    }

    pub fn payload(&self) -> Row {
        object(json!({ "name": self.name, "color": self.color }))
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct VisitorForm {
    pub week_start: String,
    pub visitor_count: String,
}

impl VisitorForm {
    pub fn from_record(row: &WeeklyVisitors) -> Self {
        Self {
            week_start: row.week_start.clone(),
            visitor_count: row.visitor_count.map(|c| c.to_string()).unwrap_or_default(),
        }
    }

    pub fn payload(&self) -> Row {
        object(json!({
            "week_start": self.week_start,
            "visitor_count": parse_int_prefix(&self.visitor_count),
        }))
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct VillageInfoForm {
    pub key: String,
    pub value: String,
}

impl VillageInfoForm {
    pub fn from_record(info: &VillageInfo) -> Self {
        Self {
            key: info.key.clone(),
            value: info.value.clone().unwrap_or_default(),
        }
    }

    pub fn payload(&self) -> Row {
        object(json!({ "key": self.key, "value": self.value }))
    }
}
