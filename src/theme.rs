/// Badge colour and label for products whose category is missing.
pub const UNCATEGORIZED_NAME: &str = "Lainnya";
pub const UNCATEGORIZED_COLOR: &str = "#6B7280";

/// Donut slice colour for categories stored without one.
pub const CHART_FALLBACK_COLOR: &str = "#10B981";

/// Colour pre-filled in the admin category form.
pub const DEFAULT_CATEGORY_COLOR: &str = "#3B82F6";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ThemeMode {
    /// Public landing page.
    Village,
    /// Admin panel: same variables, quieter surfaces.
    Admin,
}

pub struct ThemeDefinition {
    pub css: &'static str,
    pub wordmark_class: &'static str,
}

pub fn theme_definition(mode: ThemeMode) -> ThemeDefinition {
    match mode {
        ThemeMode::Village => ThemeDefinition {
            css: VILLAGE_THEME,
            wordmark_class: "header-wordmark",
        },
        ThemeMode::Admin => ThemeDefinition {
            css: ADMIN_THEME,
            wordmark_class: "header-wordmark header-wordmark-admin",
        },
    }
}

const VILLAGE_THEME: &str = r#"
:root {
    --color-bg-primary: #f7faf5;
    --color-bg-secondary: #ecf4e8;
    --color-bg-overlay: rgba(247, 250, 245, 0.92);
    --color-text-primary: #1f2a1c;
    --color-text-muted: #5b6b57;
    --color-border: #d3e0cc;
    --color-primary: #2f7d32;
    --color-primary-contrast: #ffffff;
    --color-accent: #d97706;
    --color-surface: #ffffff;
    --color-chat-user-bg: #2f7d32;
    --color-chat-user-text: #ffffff;
    --color-chat-assistant-bg: #ecf4e8;
    --color-chat-assistant-text: #1f2a1c;
    --color-map-bg: linear-gradient(135deg, #d8ecd0 0%, #b9dcae 50%, #cfe6f2 100%);
    --color-marker: #c0392b;
    --color-timestamp: #7b8a77;
}
body { background: var(--color-bg-primary); color: var(--color-text-primary); }
.header { background: var(--color-bg-overlay); }
.hero { background: linear-gradient(160deg, #2f7d32 0%, #4caf50 60%, #81c784 100%); color: #fff; }
"#;

const ADMIN_THEME: &str = r#"
:root {
    --color-bg-primary: #f4f5f7;
    --color-bg-secondary: #e9ebef;
    --color-bg-overlay: rgba(244, 245, 247, 0.95);
    --color-text-primary: #111827;
    --color-text-muted: #4b5563;
    --color-border: #d1d5db;
    --color-primary: #2f7d32;
    --color-primary-contrast: #ffffff;
    --color-accent: #b45309;
    --color-surface: #ffffff;
    --color-danger: #b91c1c;
    --color-timestamp: #6b7280;
}
body { background: var(--color-bg-primary); color: var(--color-text-primary); }
.header { background: var(--color-surface); border-bottom: 1px solid var(--color-border); }
"#;
