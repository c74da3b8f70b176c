use crate::ui::AppContext;
use crate::views::shared::Loading;
use crate::weather::{WEATHER_LOCATION, WEATHER_TITLE, WEATHER_UNAVAILABLE, fetch_weather};
use dioxus::prelude::*;

#[component]
pub fn WeatherWidget() -> Element {
    let ctx = use_context::<AppContext>();
    let delay = ctx.config.weather_delay;
    let report = use_resource(move || fetch_weather(delay));

    rsx! {
        section { class: "card weather-card",
            h3 { class: "card-title", "🌡 {WEATHER_TITLE}" }
            match &*report.read_unchecked() {
                None => rsx! { Loading {} },
                Some(None) => rsx! {
                    div { class: "text-muted text-center", "{WEATHER_UNAVAILABLE}" }
                },
                Some(Some(weather)) => rsx! {
                    div { class: "weather-main",
                        span { class: weather.condition.css_class(), "{weather.condition.icon()}" }
                        div {
                            div { class: "weather-temp", "{weather.temperature_c}°C" }
                            div { class: "text-muted", "{weather.description}" }
                        }
                    }
                    div { class: "weather-stats",
                        span { "💧 Kelembaban: {weather.humidity_pct}%" }
                        span { "💨 Angin: {weather.wind_kmh} km/h" }
                    }
                    div { class: "weather-location text-muted", "{WEATHER_LOCATION}" }
                },
            }
        }
    }
}
