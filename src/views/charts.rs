use crate::charts::{PlotArea, donut_path, donut_segments, total_products, visitor_series};
use crate::store::{fetch_category_distribution, fetch_weekly_visitors, or_log_default};
use crate::ui::AppContext;
use crate::views::shared::Loading;
use dioxus::prelude::*;

#[component]
pub fn VisitorsChart() -> Element {
    let ctx = use_context::<AppContext>();
    let rows = use_resource(move || {
        let store = ctx.store.clone();
        async move { or_log_default(fetch_weekly_visitors(store.as_ref(), true).await, "visitor data") }
    });

    rsx! {
        section { class: "card chart-card",
            h3 { class: "card-title", "📈 Grafik Pengunjung Mingguan" }
            match &*rows.read_unchecked() {
                None => rsx! { Loading {} },
                Some(rows) => {
                    let series = visitor_series(rows);
                    let area = PlotArea::default();
                    let plotted = area.plot(&series);
                    let polyline = area.polyline(&series);
                    let view_box = format!("0 0 {} {}", area.width, area.height);
                    rsx! {
                        svg {
                            class: "line-chart",
                            view_box: "{view_box}",
                            line {
                                class: "axis",
                                x1: "{area.padding}", y1: "{area.baseline()}",
                                x2: "{area.width - area.padding}", y2: "{area.baseline()}",
                            }
                            polyline { class: "series", points: "{polyline}" }
                            for (point, (x, y)) in series.iter().zip(plotted.iter()) {
                                g { key: "{point.label}",
                                    circle { class: "series-dot", cx: "{x}", cy: "{y}", r: "4",
                                        title { "{point.label}: {point.count} orang" }
                                    }
                                    text {
                                        class: "axis-label",
                                        x: "{x}", y: "{area.height - 8.0}",
                                        text_anchor: "middle",
                                        "{point.label}"
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn UmkmChart() -> Element {
    let ctx = use_context::<AppContext>();
    let shares = use_resource(move || {
        let store = ctx.store.clone();
        async move {
            or_log_default(fetch_category_distribution(store.as_ref()).await, "category data")
        }
    });

    rsx! {
        section { class: "card chart-card",
            h3 { class: "card-title", "🛍 Sebaran UMKM Berdasarkan Kategori" }
            match &*shares.read_unchecked() {
                None => rsx! { Loading {} },
                Some(shares) => {
                    let total = total_products(shares);
                    let segments = donut_segments(shares);
                    rsx! {
                        div { class: "donut-wrap",
                            svg { class: "donut-chart", view_box: "0 0 260 260",
                                for segment in segments.iter() {
                                    path {
                                        key: "{segment.name}",
                                        d: donut_path(130.0, 130.0, 120.0, 60.0, segment),
                                        fill: "{segment.color}",
                                        title { "{segment.name}: {segment.count} produk" }
                                    }
                                }
                            }
                        }
                        div { class: "category-list",
                            h4 { class: "text-muted", "Detail Kategori:" }
                            for segment in segments.iter() {
                                div { key: "{segment.name}", class: "category-row",
                                    span { class: "category-name",
                                        span { class: "swatch", style: "background-color: {segment.color};" }
                                        "{segment.name}"
                                    }
                                    span { class: "text-muted", "{segment.count} unit ({segment.percent}%)" }
                                }
                            }
                        }
                        div { class: "category-total",
                            strong { "{total}" }
                            span { class: "text-muted", " Total UMKM Terdaftar" }
                        }
                    }
                }
            }
        }
    }
}
