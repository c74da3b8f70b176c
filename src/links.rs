use crate::types::{Destination, Recommendation};
use url::form_urlencoded;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LinkError {
    #[error("Link {0} belum tersedia")]
    Unavailable(&'static str),
}

const NBSP: char = '\u{a0}';

/// Rupiah amount the way `Intl.NumberFormat('id-ID', { currency: 'IDR' })`
/// prints it with no fraction digits, e.g. `Rp 15.000` (non-breaking space).
pub fn format_rupiah(amount: f64) -> String {
    if !amount.is_finite() {
        return format!("Rp{NBSP}-");
    }
    let rounded = amount.round();
    let digits = format!("{:.0}", rounded.abs());
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }
    let sign = if rounded < 0.0 { "-" } else { "" };
    format!("{sign}Rp{NBSP}{grouped}")
}

/// Same escaping as JavaScript's `encodeURIComponent` for the characters that
/// matter here: spaces become `%20`, never `+`.
pub fn encode_component(text: &str) -> String {
    form_urlencoded::byte_serialize(text.as_bytes())
        .collect::<String>()
        .replace('+', "%20")
}

pub fn whatsapp_order_message(product_name: &str, price: Option<f64>) -> String {
    format!(
        "Halo, saya tertarik dengan produk {} seharga {}. Mohon informasi lebih lanjut.",
        product_name,
        format_rupiah(price.unwrap_or(0.0))
    )
}

pub fn whatsapp_order_url(
    number: Option<&str>,
    product_name: &str,
    price: Option<f64>,
) -> Result<String, LinkError> {
    let number = number
        .map(str::trim)
        .filter(|n| !n.is_empty())
        .ok_or(LinkError::Unavailable("WhatsApp"))?;
    let message = whatsapp_order_message(product_name, price);
    Ok(format!(
        "https://wa.me/{}?text={}",
        number,
        encode_component(&message)
    ))
}

pub fn coordinates_search_url(latitude: f64, longitude: f64) -> String {
    format!("https://www.google.com/maps/search/?api=1&query={latitude},{longitude}")
}

/// Prefer the stored maps link; fall back to a coordinate search when the row
/// only carries latitude/longitude.
pub fn destination_maps_url(destination: &Destination) -> Result<String, LinkError> {
    if let Some(url) = non_blank(destination.maps_url.as_deref()) {
        return Ok(url.to_string());
    }
    match (destination.latitude, destination.longitude) {
        (Some(lat), Some(lng)) => Ok(coordinates_search_url(lat, lng)),
        _ => Err(LinkError::Unavailable("Google Maps")),
    }
}

pub fn recommendation_maps_url(recommendation: &Recommendation) -> Result<String, LinkError> {
    non_blank(recommendation.maps_url.as_deref())
        .map(str::to_string)
        .ok_or(LinkError::Unavailable("Google Maps"))
}

pub fn phone_link(phone: &str) -> String {
    format!("tel:{}", phone.trim())
}

pub fn email_link(email: &str) -> String {
    format!("mailto:{}", email.trim())
}

pub fn instagram_url(handle: &str) -> String {
    format!("https://instagram.com/{}", handle.trim().replace('@', ""))
}

pub fn facebook_url(page: &str) -> String {
    format!("https://facebook.com/{}", page.trim())
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
