use crate::links::{email_link, facebook_url, instagram_url, phone_link};
use crate::store::{fetch_contact_info, or_log_default};
use crate::ui::{AppContext, Page};
use crate::views::shared::scroll_to_section;
use dioxus::prelude::*;

#[component]
pub fn Footer() -> Element {
    let ctx = use_context::<AppContext>();
    let store = ctx.store.clone();
    let contact = use_resource(move || {
        let store = store.clone();
        async move { or_log_default(fetch_contact_info(store.as_ref()).await, "contact info") }
    });
    let info = contact.read().as_ref().cloned().unwrap_or_default();

    rsx! {
        footer { class: "footer",
            div { class: "footer-grid",
                div {
                    h3 { class: "footer-brand", "WukirTech" }
                    p {
                        "Portal digital resmi Desa Wisata Wukirsari, menyajikan informasi lengkap tentang destinasi wisata dan produk UMKM terbaik."
                    }
                    small { "Diakui sebagai Best Tourism Village oleh UNWTO" }
                }
                div {
                    h4 { "Kontak" }
                    if !info.address.is_empty() {
                        p { "📍 {info.address}" }
                    }
                    if !info.phone.is_empty() {
                        a { href: phone_link(&info.phone), "📞 {info.phone}" }
                    }
                    if !info.email.is_empty() {
                        a { href: email_link(&info.email), "✉ {info.email}" }
                    }
                }
                div {
                    h4 { "Sosial Media" }
                    if !info.instagram.is_empty() {
                        a {
                            href: instagram_url(&info.instagram),
                            target: "_blank",
                            rel: "noopener noreferrer",
                            "Instagram {info.instagram}"
                        }
                    }
                    if !info.facebook.is_empty() {
                        a {
                            href: facebook_url(&info.facebook),
                            target: "_blank",
                            rel: "noopener noreferrer",
                            "Facebook {info.facebook}"
                        }
                    }
                    h5 { "Navigasi Cepat" }
                    button {
                        class: "link-button", r#type: "button",
                        onclick: move |_| scroll_to_section("destinations"),
                        "Destinasi Wisata"
                    }
                    button {
                        class: "link-button", r#type: "button",
                        onclick: move |_| scroll_to_section("products"),
                        "Produk UMKM"
                    }
                    button {
                        class: "link-button admin-link", r#type: "button",
                        onclick: move |_| ctx.navigate(Page::Admin),
                        "🔒 Admin Panel"
                    }
                }
            }
            div { class: "footer-bottom",
                p { "© 2024 WukirTech - Desa Wisata Wukirsari. All rights reserved." }
                p { class: "footer-note", "Dikembangkan dengan ❤️ untuk kemajuan Desa Wukirsari" }
            }
        }
    }
}
