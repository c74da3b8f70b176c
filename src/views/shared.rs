use comrak::{Options, markdown_to_html as render_markdown};
use dioxus::prelude::*;
use once_cell::sync::Lazy;
use time::{OffsetDateTime, UtcOffset, format_description::FormatItem, macros::format_description};

static MARKDOWN_OPTIONS: Lazy<Options> = Lazy::new(|| {
    let mut options = Options::default();
    options.extension.strikethrough = true;
    options.extension.autolink = true;
    options.render.hardbreaks = true;
    options
});

const MESSAGE_TIME_FORMAT: &[FormatItem<'static>] =
    format_description!("[hour padding:zero].[minute padding:zero]");

pub fn markdown_to_html(md: &str) -> String {
    render_markdown(md, &MARKDOWN_OPTIONS)
}

/// `14.05` style, in local time when the offset can be determined.
pub fn format_message_time(timestamp: OffsetDateTime) -> String {
    let mut datetime = timestamp;
    if let Ok(offset) = UtcOffset::current_local_offset() {
        datetime = datetime.to_offset(offset);
    }
    datetime.format(MESSAGE_TIME_FORMAT).unwrap_or_default()
}

fn js_string(value: &str) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| "\"\"".to_string())
}

/// Open `url` in a new browsing context.
pub fn open_external(url: &str) {
    tracing::debug!(url, "opening external link");
    let _ = document::eval(&format!("window.open({}, '_blank');", js_string(url)));
}

pub fn scroll_to_section(id: &str) {
    let _ = document::eval(&format!(
        "document.getElementById({})?.scrollIntoView({{ behavior: 'smooth' }});",
        js_string(id)
    ));
}

/// Native confirm dialog; any failure to show it counts as "cancel".
pub async fn confirm(prompt: &str) -> bool {
    document::eval(&format!("return window.confirm({});", js_string(prompt)))
        .join::<bool>()
        .await
        .unwrap_or(false)
}

#[component]
pub fn SectionHeading(title: String, subtitle: Option<String>) -> Element {
    rsx! {
        div { class: "section-heading",
            h2 { class: "section-title", "{title}" }
            if let Some(subtitle) = subtitle {
                p { class: "section-subtitle", "{subtitle}" }
            }
        }
    }
}

#[component]
pub fn Loading() -> Element {
    rsx! {
        div { class: "loading-block",
            span { class: "shimmer-text", "Memuat…" }
        }
    }
}
