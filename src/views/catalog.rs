use crate::links::{format_rupiah, whatsapp_order_url};
use crate::store::{fetch_products, or_log_default};
use crate::types::ProductListing;
use crate::ui::AppContext;
use crate::views::shared::{Loading, SectionHeading, open_external};
use dioxus::prelude::*;

#[component]
pub fn ProductCatalog() -> Element {
    let ctx = use_context::<AppContext>();
    let products = use_resource(move || {
        let store = ctx.store.clone();
        async move { or_log_default(fetch_products(store.as_ref()).await, "products") }
    });

    rsx! {
        section { id: "products", class: "section",
            SectionHeading {
                title: "Katalog Produk UMKM",
                subtitle: "Dukung produk lokal berkualitas dari UMKM Desa Wukirsari. Produk-produk unggulan yang dibuat dengan cinta dan tradisi turun temurun.",
            }
            match &*products.read_unchecked() {
                None => rsx! { Loading {} },
                Some(listings) if listings.is_empty() => rsx! {
                    div { class: "empty-state",
                        div { class: "empty-icon", "📦" }
                        h3 { "Belum Ada Produk" }
                        p { class: "text-muted", "Produk UMKM akan segera ditampilkan di sini." }
                    }
                },
                Some(listings) => rsx! {
                    div { class: "product-grid",
                        for listing in listings.iter() {
                            ProductCard { key: "{listing.product.id}", listing: listing.clone() }
                        }
                    }
                },
            }
        }
    }
}

#[component]
fn ProductCard(listing: ProductListing) -> Element {
    let ctx = use_context::<AppContext>();
    let product = listing.product.clone();
    let price = format_rupiah(product.price.unwrap_or(0.0));
    let description = product.description.clone().unwrap_or_default();

    let order = move |_: MouseEvent| {
        match whatsapp_order_url(
            product.whatsapp_number.as_deref(),
            &product.name,
            product.price,
        ) {
            Ok(url) => open_external(&url),
            Err(err) => ctx.error(err.to_string()),
        }
    };

    rsx! {
        article { class: "card product-card",
            div { class: "product-media",
                if let Some(image) = listing.product.image_url.clone() {
                    img { src: "{image}", alt: "{listing.product.name}", loading: "lazy" }
                } else {
                    div { class: "product-placeholder", "📦" }
                }
                span {
                    class: "badge",
                    style: "background-color: {listing.category_color};",
                    "{listing.category_name}"
                }
            }
            div { class: "product-body",
                h3 { class: "product-name", "{listing.product.name}" }
                p { class: "product-desc text-muted", "{description}" }
                div { class: "product-price", "{price}" }
                button {
                    class: "btn btn-whatsapp btn-block",
                    r#type: "button",
                    onclick: order,
                    "Pesan via WhatsApp"
                }
            }
        }
    }
}
