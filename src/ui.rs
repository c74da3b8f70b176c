use crate::admin::{Toast, ToastKind};
use crate::config::AppConfig;
use crate::store::DataStore;
use crate::theme::{ThemeMode, theme_definition};
use crate::views::{AdminView, HomeView};
use dioxus::prelude::*;
use once_cell::sync::Lazy;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

const WUKIRTECH_CSS: Asset = asset!("/assets/wukirtech.css");
const TOAST_LIFETIME: Duration = Duration::from_secs(4);

static TOAST_SEQUENCE: Lazy<AtomicU64> = Lazy::new(|| AtomicU64::new(1));

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Page {
    Home,
    Admin,
}

/// Shared by every view through the Dioxus context.
#[derive(Clone)]
pub struct AppContext {
    pub store: Arc<dyn DataStore>,
    pub config: AppConfig,
    pub page: Signal<Page>,
    pub toasts: Signal<Vec<Toast>>,
}

impl AppContext {
    pub fn navigate(&self, page: Page) {
        let mut signal = self.page;
        signal.set(page);
        let _ = document::eval("window.scrollTo({ top: 0 });");
    }

    pub fn success(&self, message: impl Into<String>) {
        self.push_toast(ToastKind::Success, message.into());
    }

    pub fn error(&self, message: impl Into<String>) {
        self.push_toast(ToastKind::Error, message.into());
    }

    fn push_toast(&self, kind: ToastKind, message: String) {
        let id = TOAST_SEQUENCE.fetch_add(1, Ordering::Relaxed);
        let mut toasts = self.toasts;
        toasts.with_mut(|list| list.push(Toast { id, kind, message }));
        spawn(async move {
            crate::clock::sleep(TOAST_LIFETIME).await;
            toasts.with_mut(|list| list.retain(|toast| toast.id != id));
        });
    }
}

#[component]
pub fn App() -> Element {
    let page = use_signal(|| Page::Home);
    let toasts = use_signal(Vec::<Toast>::new);
    use_context_provider(|| {
        let config = AppConfig::load();
        AppContext {
            store: config.build_store(),
            config,
            page,
            toasts,
        }
    });

    let theme = match page() {
        Page::Home => ThemeMode::Village,
        Page::Admin => ThemeMode::Admin,
    };

    rsx! {
        ThemeStyles { theme }
        match page() {
            Page::Home => rsx! { HomeView {} },
            Page::Admin => rsx! { AdminView {} },
        }
        ToastStack { toasts }
    }
}

#[component]
fn ThemeStyles(theme: ThemeMode) -> Element {
    let definition = theme_definition(theme);
    rsx! {
        document::Link { rel: "stylesheet", href: WUKIRTECH_CSS }
        style { dangerous_inner_html: "{definition.css}" }
    }
}

#[component]
pub fn Wordmark(theme: ThemeMode) -> Element {
    let definition = theme_definition(theme);
    rsx! {
        span { class: "{definition.wordmark_class}",
            span { class: "wordmark-accent", "Wukir" }
            "Tech"
        }
    }
}

#[component]
fn ToastStack(toasts: Signal<Vec<Toast>>) -> Element {
    rsx! {
        div { class: "toast-stack", aria_live: "polite",
            for toast in toasts() {
                ToastCard { key: "{toast.id}", toast, toasts }
            }
        }
    }
}

#[component]
fn ToastCard(toast: Toast, toasts: Signal<Vec<Toast>>) -> Element {
    let mut toasts = toasts;
    let id = toast.id;
    let kind = match toast.kind {
        ToastKind::Success => "success",
        ToastKind::Error => "error",
    };
    rsx! {
        div {
            class: "toast {kind}",
            onclick: move |_| toasts.with_mut(|list| list.retain(|t| t.id != id)),
            strong { "{toast.title()}" }
            p { "{toast.message}" }
        }
    }
}
