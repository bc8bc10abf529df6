//! Modal and toast string bundles
//!
//! The interaction layer asks for its strings through [`Translate`]. When no
//! localizer is available it gets the English defaults below instead, so a
//! missing localizer can never break a dialog.

use super::resolver::{Resolved, TranslationParams};

/// Read access to resolved strings
pub trait Translate {
    fn translate(&self, key: &str, params: &TranslationParams) -> Resolved;

    /// Resolved display text; the key itself when nothing displayable resolves
    fn text(&self, key: &str, params: &TranslationParams) -> String {
        self.translate(key, params)
            .into_text()
            .unwrap_or_else(|| key.to_string())
    }
}

/// Strings for the store download prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadBundle {
    pub title: String,
    pub description: String,
    pub go_to: String,
    pub cancel: String,
}

/// Strings for the keyboard shortcut dialog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortcutsBundle {
    pub title: String,
    pub activate: String,
    pub expand: String,
    pub prev_page: String,
    pub next_page: String,
}

/// Strings for the hidden features dialog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HiddenFeaturesBundle {
    pub title: String,
    pub description: String,
    pub note: String,
    pub features: Vec<String>,
}

impl DownloadBundle {
    pub fn resolve(translator: Option<&dyn Translate>, params: &TranslationParams) -> Self {
        let Some(t) = translator else {
            return Self::defaults(params);
        };
        let none = TranslationParams::new();
        Self {
            title: t.text("modal.download.title", params),
            description: t.text("modal.download.description", params),
            go_to: t.text("modal.download.goTo", params),
            cancel: t.text("modal.download.cancel", &none),
        }
    }

    fn defaults(params: &TranslationParams) -> Self {
        let browser = params.get("browser").map(String::as_str).unwrap_or("your browser");
        let store = params.get("store").map(String::as_str).unwrap_or("the extension store");
        Self {
            title: format!("Download for {}", browser),
            description: format!("You will be redirected to {} to install Multi⁺LLM.", store),
            go_to: format!("Go to {}", store),
            cancel: "Cancel".to_string(),
        }
    }
}

impl ShortcutsBundle {
    pub fn resolve(translator: Option<&dyn Translate>) -> Self {
        let Some(t) = translator else {
            return Self {
                title: "Keyboard Shortcuts".to_string(),
                activate: "Activate extension".to_string(),
                expand: "Open comparison and expand dock".to_string(),
                prev_page: "Previous page in comparison".to_string(),
                next_page: "Next page in comparison".to_string(),
            };
        };
        let none = TranslationParams::new();
        Self {
            title: t.text("modal.shortcuts.title", &none),
            activate: t.text("modal.shortcuts.activate", &none),
            expand: t.text("modal.shortcuts.expand", &none),
            prev_page: t.text("modal.shortcuts.prevPage", &none),
            next_page: t.text("modal.shortcuts.nextPage", &none),
        }
    }
}

impl HiddenFeaturesBundle {
    pub fn resolve(translator: Option<&dyn Translate>) -> Self {
        let Some(t) = translator else {
            return Self {
                title: "🎉 Hidden Features Unlocked!".to_string(),
                description: "You discovered some advanced features of Multi⁺LLM:".to_string(),
                note: "These features are available in the full extension!".to_string(),
                features: [
                    "Omnibox integration with \"ml\" keyword",
                    "Context menu support for quick access",
                    "Web navigation integration",
                    "Offline mode support",
                    "Advanced layout customization",
                    "Batch processing capabilities",
                ]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            };
        };
        let none = TranslationParams::new();
        Self {
            title: t.text("modal.easter.title", &none),
            description: t.text("modal.easter.description", &none),
            note: t.text("modal.easter.note", &none),
            features: t.translate("modal.easter.features", &none).into_list(),
        }
    }
}

/// Toast text under `toast.<key>`, or `default` without a translator
pub fn toast_message(translator: Option<&dyn Translate>, key: &str, default: &str) -> String {
    match translator {
        Some(t) => t.text(&format!("toast.{}", key), &TranslationParams::new()),
        None => default.to_string(),
    }
}
