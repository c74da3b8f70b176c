use crate::store::{fetch_destinations, fetch_village_history, or_log_default};
use crate::theme::ThemeMode;
use crate::ui::{AppContext, Page, Wordmark};
use crate::views::catalog::ProductCatalog;
use crate::views::charts::{UmkmChart, VisitorsChart};
use crate::views::chat::ChatAssistant;
use crate::views::footer::Footer;
use crate::views::map::DestinationMap;
use crate::views::shared::{Loading, SectionHeading, scroll_to_section};
use crate::views::weather::WeatherWidget;
use dioxus::prelude::*;

#[component]
pub fn HomeView() -> Element {
    let ctx = use_context::<AppContext>();
    let store = ctx.store.clone();
    let destinations = use_resource(move || {
        let store = store.clone();
        async move { or_log_default(fetch_destinations(store.as_ref()).await, "destinations") }
    });
    let loaded = destinations.read().as_ref().cloned().unwrap_or_default();

    rsx! {
        Hero {}
        main { class: "home-main",
            div { class: "grid-two",
                VisitorsChart {}
                WeatherWidget {}
            }
            UmkmChart {}
            if destinations.read().is_none() {
                section { id: "destinations", class: "section card",
                    SectionHeading { title: "Jelajahi Peta Destinasi Wisata" }
                    Loading {}
                }
            } else {
                DestinationMap { destinations: loaded.clone() }
            }
            ProductCatalog {}
        }
        VillageHistory {}
        Footer {}
        ChatAssistant { destinations: loaded }
    }
}

#[component]
fn Hero() -> Element {
    let ctx = use_context::<AppContext>();
    rsx! {
        section { class: "hero",
            div { class: "hero-inner",
                div { class: "hero-topbar",
                    Wordmark { theme: ThemeMode::Village }
                    button {
                        class: "btn btn-glass btn-small",
                        r#type: "button",
                        onclick: move |_| ctx.navigate(Page::Admin),
                        "⚙ Admin"
                    }
                }
                div { class: "hero-badge", "🏆 UNWTO Best Tourism Village" }
                h1 { class: "hero-title",
                    "WukirTech"
                    span { class: "hero-subtitle", "Jelajahi Keindahan Desa Wisata Wukirsari" }
                }
                p { class: "hero-lead",
                    "Temukan pesona desa wisata terbaik di Yogyakarta dengan kekayaan budaya, wisata alam yang menawan, dan produk UMKM berkualitas tinggi."
                }
                div { class: "hero-actions",
                    button {
                        class: "btn btn-light",
                        r#type: "button",
                        onclick: move |_| scroll_to_section("destinations"),
                        "Jelajahi Wisata →"
                    }
                    button {
                        class: "btn btn-glass",
                        r#type: "button",
                        onclick: move |_| scroll_to_section("products"),
                        "Lihat Produk UMKM"
                    }
                }
            }
        }
    }
}

#[component]
fn VillageHistory() -> Element {
    let ctx = use_context::<AppContext>();
    let history = use_resource(move || {
        let store = ctx.store.clone();
        async move { or_log_default(fetch_village_history(store.as_ref()).await, "village history") }
    });

    rsx! {
        section { class: "section history",
            SectionHeading { title: "📖 Sejarah Desa Wukirsari" }
            match &*history.read_unchecked() {
                None => rsx! { Loading {} },
                Some(text) => rsx! {
                    div { class: "card history-card",
                        p { class: "history-text", "{text.clone().unwrap_or_default()}" }
                    }
                },
            }
        }
    }
}
