use crate::links::destination_maps_url;
use crate::map::{MapPoint, MapViewState, layout_markers};
use crate::types::Destination;
use crate::ui::AppContext;
use crate::views::shared::{SectionHeading, open_external};
use dioxus::prelude::*;

fn pointer(evt: &Event<MouseData>) -> MapPoint {
    let client = evt.client_coordinates();
    MapPoint::new(client.x, client.y)
}

/// Draggable, zoomable decorative map. Each instance keeps its own view state.
#[component]
pub fn PseudoMap(
    destinations: Vec<Destination>,
    selected: Option<String>,
    compact: bool,
    on_select: EventHandler<Destination>,
) -> Element {
    let mut view = use_signal(MapViewState::default);
    let state = view();
    let markers = layout_markers(&destinations)
        .into_iter()
        .map(|(destination, position)| {
            let active = selected.as_deref() == Some(destination.id.as_str());
            (destination.id.clone(), active, position.style(), destination.clone())
        })
        .collect::<Vec<_>>();
    let container_class = format!(
        "pseudo-map{}{}",
        if compact { " compact" } else { "" },
        if state.is_dragging() { " dragging" } else { "" }
    );

    rsx! {
        div {
            class: "{container_class}",
            onmousedown: move |evt| view.with_mut(|v| v.pointer_down(pointer(&evt))),
            onmousemove: move |evt| {
                if view.peek().is_dragging() {
                    view.with_mut(|v| v.pointer_move(pointer(&evt)));
                }
            },
            onmouseup: move |_| view.with_mut(MapViewState::pointer_up),
            onmouseleave: move |_| view.with_mut(MapViewState::pointer_leave),
            div { class: "map-layer", style: "{state.transform()}",
                div { class: "map-grid" }
                for (id, active, style, destination) in markers {
                    MapMarker { key: "{id}", destination, active, style, on_select }
                }
            }
            if !compact {
                div { class: "map-title",
                    h3 { "Peta Wisata Wukirsari" }
                    p { "Klik marker untuk detail" }
                }
            }
            div { class: "map-controls",
                onmousedown: move |evt| evt.stop_propagation(),
                button {
                    class: "map-btn", r#type: "button", title: "Perbesar",
                    onclick: move |_| view.with_mut(MapViewState::zoom_in),
                    "+"
                }
                button {
                    class: "map-btn", r#type: "button", title: "Perkecil",
                    onclick: move |_| view.with_mut(MapViewState::zoom_out),
                    "−"
                }
                button {
                    class: "map-btn", r#type: "button", title: "Atur ulang",
                    onclick: move |_| view.with_mut(MapViewState::reset),
                    "⟲"
                }
            }
            div { class: "map-zoom-label", "{(state.zoom() * 100.0).round()}%" }
        }
    }
}

#[component]
fn MapMarker(
    destination: Destination,
    active: bool,
    style: String,
    on_select: EventHandler<Destination>,
) -> Element {
    let class = if active { "map-marker active" } else { "map-marker" };
    let label = destination.name.clone();
    rsx! {
        button {
            class: "{class}",
            r#type: "button",
            style: "{style}",
            title: "{label}",
            onmousedown: move |evt| evt.stop_propagation(),
            onclick: move |_| on_select.call(destination.clone()),
            span { class: "marker-pin", "📍" }
            span { class: "marker-label", "{label}" }
        }
    }
}

pub fn open_destination(ctx: &AppContext, destination: &Destination) {
    match destination_maps_url(destination) {
        Ok(url) => open_external(&url),
        Err(err) => ctx.error(err.to_string()),
    }
}

#[component]
pub fn DestinationMap(destinations: Vec<Destination>) -> Element {
    let ctx = use_context::<AppContext>();
    let mut selected = use_signal(|| Option::<Destination>::None);
    let selected_id = selected().map(|d| d.id);
    let detail = selected().map(|destination| {
        let name = destination.name.clone();
        let description = destination.description_text().to_string();
        (name, description, destination)
    });

    rsx! {
        section { id: "destinations", class: "section card",
            SectionHeading { title: "Jelajahi Peta Destinasi Wisata" }
            PseudoMap {
                destinations: destinations.clone(),
                selected: selected_id.clone(),
                compact: false,
                on_select: move |destination| selected.set(Some(destination)),
            }
            if let Some((name, description, destination)) = detail {
                div { class: "destination-detail",
                    h3 { class: "destination-name", "{name}" }
                    p { class: "destination-desc", "{description}" }
                    button {
                        class: "btn btn-primary btn-block",
                        r#type: "button",
                        onclick: move |_| open_destination(&ctx, &destination),
                        "Lihat di Google Maps"
                    }
                }
            } else {
                div { class: "destination-empty text-muted",
                    p { "Klik marker di peta untuk melihat detail destinasi wisata" }
                }
            }
            div { class: "destination-list",
                h4 { "Destinasi Wisata Unggulan:" }
                for destination in destinations {
                    DestinationItem {
                        key: "{destination.id}",
                        active: selected_id.as_deref() == Some(destination.id.as_str()),
                        destination: destination.clone(),
                        on_select: move |destination| selected.set(Some(destination)),
                    }
                }
            }
        }
    }
}

#[component]
fn DestinationItem(destination: Destination, active: bool, on_select: EventHandler<Destination>) -> Element {
    let name = destination.name.clone();
    let description = destination.description_text().to_string();
    rsx! {
        button {
            class: format_args!("destination-item {}", if active { "active" } else { "" }),
            r#type: "button",
            onclick: move |_| on_select.call(destination.clone()),
            div { class: "destination-name", "{name}" }
            div { class: "destination-desc", "{description}" }
        }
    }
}
