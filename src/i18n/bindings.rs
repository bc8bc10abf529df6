//! Document text bound to translation keys
//!
//! Every entry rewrites the text of the elements carrying its
//! `data-i18n` marker. Download buttons keep their icon markup, so their
//! label and store name go into the `span` and `small` children instead.

/// Where the resolved text is written
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BindingTarget {
    /// The element carrying `data-i18n="<key>"`
    Marker,
    /// A child tag inside the element carrying `data-i18n="<marker>"`
    Child { marker: &'static str, tag: &'static str },
}

/// A translation key and its target
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextBinding {
    pub key: &'static str,
    pub target: BindingTarget,
}

impl TextBinding {
    const fn marker(key: &'static str) -> Self {
        Self { key, target: BindingTarget::Marker }
    }

    const fn child(marker: &'static str, tag: &'static str, key: &'static str) -> Self {
        Self { key, target: BindingTarget::Child { marker, tag } }
    }

    pub fn selector(&self) -> String {
        match self.target {
            BindingTarget::Marker => format!(r#"[data-i18n="{}"]"#, self.key),
            BindingTarget::Child { marker, tag } => format!(r#"[data-i18n="{}"] {}"#, marker, tag),
        }
    }
}

pub const TEXT_BINDINGS: &[TextBinding] = &[
    TextBinding::marker("nav.features"),
    TextBinding::marker("nav.download"),
    TextBinding::marker("nav.howToUse"),
    TextBinding::marker("nav.about"),
    TextBinding::marker("hero.title"),
    TextBinding::marker("hero.subtitle"),
    TextBinding::marker("hero.description"),
    TextBinding::marker("hero.downloadNow"),
    TextBinding::marker("hero.learnMore"),
    TextBinding::marker("features.title"),
    TextBinding::marker("features.sideByComparison.title"),
    TextBinding::marker("features.sideByComparison.description"),
    TextBinding::marker("features.batchQA.title"),
    TextBinding::marker("features.batchQA.description"),
    TextBinding::marker("features.dragDrop.title"),
    TextBinding::marker("features.dragDrop.description"),
    TextBinding::marker("features.responsive.title"),
    TextBinding::marker("features.responsive.description"),
    TextBinding::marker("features.shortcuts.title"),
    TextBinding::marker("features.shortcuts.description"),
    TextBinding::marker("features.customization.title"),
    TextBinding::marker("features.customization.description"),
    TextBinding::marker("models.title"),
    TextBinding::marker("models.note"),
    TextBinding::marker("download.title"),
    TextBinding::marker("download.description"),
    TextBinding::marker("download.chrome.title"),
    TextBinding::marker("download.chrome.description"),
    TextBinding::marker("download.edge.title"),
    TextBinding::marker("download.edge.description"),
    TextBinding::marker("download.firefox.title"),
    TextBinding::marker("download.firefox.description"),
    TextBinding::child("download.chrome.button", "span", "download.chrome.button"),
    TextBinding::child("download.chrome.button", "small", "download.chrome.store"),
    TextBinding::child("download.edge.button", "span", "download.edge.button"),
    TextBinding::child("download.edge.button", "small", "download.edge.store"),
    TextBinding::child("download.firefox.button", "span", "download.firefox.button"),
    TextBinding::child("download.firefox.button", "small", "download.firefox.store"),
    TextBinding::marker("howToUse.title"),
    TextBinding::marker("howToUse.step1.title"),
    TextBinding::marker("howToUse.step1.description"),
    TextBinding::marker("howToUse.step2.title"),
    TextBinding::marker("howToUse.step2.description"),
    TextBinding::marker("howToUse.step3.title"),
    TextBinding::marker("howToUse.step3.description"),
    TextBinding::marker("howToUse.step4.title"),
    TextBinding::marker("howToUse.step4.description"),
    TextBinding::marker("about.title"),
    TextBinding::marker("about.description1"),
    TextBinding::marker("about.description2"),
    TextBinding::marker("about.builtWith"),
    TextBinding::marker("about.stats.models"),
    TextBinding::marker("about.stats.browsers"),
    TextBinding::marker("about.stats.languages"),
    TextBinding::marker("about.stats.more"),
    TextBinding::marker("footer.github"),
    TextBinding::marker("footer.privacy"),
    TextBinding::marker("footer.support"),
];
