use crate::assistant::{ChatSession, PanelState, respond};
use crate::links::recommendation_maps_url;
use crate::types::{ChatMessage, Destination, Recommendation};
use crate::ui::AppContext;
use crate::views::map::PseudoMap;
use crate::views::shared::{format_message_time, markdown_to_html, open_external};
use dioxus::events::Key;
use dioxus::prelude::*;

const CHAT_LIST_ID: &str = "chat-list";

fn scroll_chat_to_bottom() {
    let _ = document::eval(&format!(
        "const el = document.getElementById('{CHAT_LIST_ID}'); if (el) {{ el.scrollTop = el.scrollHeight; }}"
    ));
}

/// Floating assistant widget. `destinations` is whatever the page has loaded;
/// each question is answered against the list as it was when sent.
#[component]
pub fn ChatAssistant(destinations: ReadOnlySignal<Vec<Destination>>) -> Element {
    let ctx = use_context::<AppContext>();
    let mut session = use_signal(ChatSession::new);
    let mut input = use_signal(String::new);
    let reply_delay = ctx.config.reply_delay;

    use_effect(move || {
        let count = session.read().messages().len();
        if count > 1 {
            scroll_chat_to_bottom();
        }
    });

    let mut send_message = move |text: String| {
        if session.peek().is_waiting() {
            return;
        }
        let Some(pending) = session.with_mut(|s| s.submit(&text)) else {
            return;
        };
        input.set(String::new());
        let snapshot = destinations.peek().clone();
        spawn(async move {
            let reply = respond(pending.input, snapshot, reply_delay).await;
            session.with_mut(|s| s.receive(reply));
        });
    };

    let panel = session.read().panel();
    let waiting = session.read().is_waiting();
    let messages = session.read().messages().to_vec();

    if panel == PanelState::Closed {
        return rsx! {
            div { class: "chat-launcher",
                button {
                    class: "btn btn-primary chat-launcher-button",
                    r#type: "button",
                    onclick: move |_| session.with_mut(ChatSession::open),
                    "💬 Chat AI"
                }
            }
        };
    }

    let minimized = panel == PanelState::Minimized;
    let (toggle_title, toggle_icon) = if minimized {
        ("Perbesar", "▢")
    } else {
        ("Perkecil", "▁")
    };

    rsx! {
        div { class: format_args!("chat-panel {}", if minimized { "minimized" } else { "" }),
            div { class: "chat-header",
                span { class: "chat-title", "💬 Asisten Wisata AI" }
                div { class: "chat-header-actions",
                    button {
                        class: "btn-ghost", r#type: "button",
                        title: toggle_title,
                        onclick: move |_| session.with_mut(ChatSession::toggle_minimized),
                        "{toggle_icon}"
                    }
                    button {
                        class: "btn-ghost", r#type: "button", title: "Tutup",
                        onclick: move |_| session.with_mut(ChatSession::close),
                        "✕"
                    }
                }
            }
            if !minimized {
                div { id: CHAT_LIST_ID, class: "chat-list",
                    for message in messages.iter() {
                        MessageRow {
                            key: "{message.id}",
                            message: message.clone(),
                            destinations: destinations(),
                            session,
                        }
                    }
                    if waiting {
                        div { class: "message-row assistant",
                            div { class: "bubble assistant typing",
                                span { class: "dot" }
                                span { class: "dot" }
                                span { class: "dot" }
                            }
                        }
                    }
                }
                div { class: "composer",
                    input {
                        r#type: "text",
                        placeholder: "Tanya tentang wisata Wukirsari...",
                        value: "{input}",
                        disabled: waiting,
                        oninput: move |ev| input.set(ev.value()),
                        onkeydown: move |ev| {
                            if ev.key() == Key::Enter {
                                ev.prevent_default();
                                send_message(input());
                            }
                        },
                    }
                    button {
                        class: "btn btn-primary", r#type: "button",
                        disabled: waiting || input().trim().is_empty(),
                        onclick: move |_| send_message(input()),
                        "Kirim"
                    }
                }
            }
        }
    }
}

#[component]
fn MessageRow(
    message: ChatMessage,
    destinations: Vec<Destination>,
    session: Signal<ChatSession>,
) -> Element {
    let mut session = session;
    let side = if message.is_user { "user" } else { "assistant" };
    let time = format_message_time(message.timestamp);

    rsx! {
        div { class: "message-row {side}",
            div { class: "message-stack",
                div { class: "bubble {side}",
                    if message.is_user {
                        "{message.text}"
                    } else {
                        div { class: "md", dangerous_inner_html: markdown_to_html(&message.text) }
                    }
                    if let Some(recommendation) = message.recommendation.clone() {
                        RecommendationCard { recommendation }
                    }
                    if message.show_map {
                        PseudoMap {
                            destinations,
                            selected: None,
                            compact: true,
                            on_select: move |destination: Destination| {
                                session.with_mut(|s| s.describe_destination(&destination));
                            },
                        }
                    }
                }
                span { class: "message-timestamp", "{time}" }
            }
        }
    }
}

#[component]
fn RecommendationCard(recommendation: Recommendation) -> Element {
    let ctx = use_context::<AppContext>();
    let name = recommendation.name.clone();
    let description = recommendation.description.clone();
    let image_url = recommendation.image_url.clone();
    rsx! {
        div { class: "recommendation-card",
            if let Some(image) = image_url {
                img { class: "recommendation-image", src: "{image}", alt: "{name}" }
            }
            h4 { "{name}" }
            p { "{description}" }
            button {
                class: "btn btn-outline btn-small",
                r#type: "button",
                onclick: move |_| match recommendation_maps_url(&recommendation) {
                    Ok(url) => open_external(&url),
                    Err(err) => ctx.error(err.to_string()),
                },
                "📍 Lihat Lokasi"
            }
        }
    }
}
