use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const DEFAULT_WEATHER_DELAY: Duration = Duration::from_millis(1000);

pub const WEATHER_TITLE: &str = "Cuaca Desa Wukirsari";
pub const WEATHER_UNAVAILABLE: &str = "Data cuaca tidak tersedia";
pub const WEATHER_LOCATION: &str = "Wukirsari, Imogiri, Bantul, Yogyakarta";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Condition {
    Sunny,
    Cloudy,
    Rainy,
}

impl Condition {
    pub fn icon(self) -> &'static str {
        match self {
            Condition::Sunny => "☀️",
            Condition::Cloudy => "☁️",
            Condition::Rainy => "🌧️",
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            Condition::Sunny => "weather-icon sunny",
            Condition::Cloudy => "weather-icon cloudy",
            Condition::Rainy => "weather-icon rainy",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WeatherReport {
    pub temperature_c: i32,
    pub condition: Condition,
    pub humidity_pct: u8,
    pub wind_kmh: u16,
    pub description: String,
}

impl WeatherReport {
    pub fn wukirsari() -> Self {
        Self {
            temperature_c: 28,
            condition: Condition::Sunny,
            humidity_pct: 65,
            wind_kmh: 12,
            description: "Cerah berawan".to_string(),
        }
    }
}

/// There is no weather provider behind the widget: after `delay` this
/// returns the same fixed report for the village every time.
pub async fn fetch_weather(delay: Duration) -> Option<WeatherReport> {
    crate::clock::sleep(delay).await;
    let report = WeatherReport::wukirsari();
    tracing::debug!(condition = ?report.condition, "weather report ready");
    Some(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn simulated_report_matches_the_village_defaults() {
        let report = fetch_weather(Duration::ZERO).await.expect("report");
        assert_eq!(report.temperature_c, 28);
        assert_eq!(report.condition, Condition::Sunny);
        assert_eq!(report.humidity_pct, 65);
        assert_eq!(report.wind_kmh, 12);
        assert_eq!(report.description, "Cerah berawan");
    }

    #[test]
    fn condition_serializes_lowercase() {
        let json = serde_json::to_string(&Condition::Rainy).unwrap();
        assert_eq!(json, "\"rainy\"");
    }
}
