//! Localizer state machine
//!
//! Owns the active language, the per-language table cache and the switcher
//! widget. Lifecycle: `Uninitialized → Detecting → Loading → Ready`, with
//! `Ready` re-entered after every switch. No path leaves the page without a
//! usable localizer: the worst case is `Ready` with empty tables, where every
//! lookup shows its own key.

use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, error, info, warn};
use crate::config::I18nConfig;
use crate::page::{Document, ElementId, Page};
use crate::utils::errors::Result;
use crate::utils::logging::{log_language_switch, log_load_failure};
use super::bindings::TEXT_BINDINGS;
use super::bundles::{toast_message, DownloadBundle, HiddenFeaturesBundle, ShortcutsBundle, Translate};
use super::detect::{detect_language, Detection, DetectionInput};
use super::languages::SupportedLanguages;
use super::loader::{count_keys, LanguageStats, TableFetcher, TranslationStats, TranslationTable};
use super::resolver::{resolve, Resolved, TranslationParams};
use super::switcher::{LanguageSwitcher, SwitcherAction};

/// Lifecycle of the localizer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolverState {
    Uninitialized,
    Detecting,
    Loading,
    Ready,
}

/// What happened when a table was requested
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// Fetched and cached
    Loaded,
    /// Already cached for this session
    Cached,
    /// The requested table failed; the fallback table is now active
    FellBack,
    /// Nothing could be loaded
    Failed,
}

/// Result of a switch request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SwitchOutcome {
    /// Already the active language
    Unchanged,
    /// Not a supported code
    Unsupported,
    /// Switch performed; `active` differs from `requested` when loading fell back
    Switched { requested: String, active: String },
}

/// Main internationalization manager for the page
pub struct Localizer {
    current_lang: String,
    fallback_lang: String,
    languages: SupportedLanguages,
    translations: HashMap<String, TranslationTable>,
    state: ResolverState,
    fetcher: Arc<dyn TableFetcher>,
    storage_key: String,
    query_param: String,
    switcher: Option<LanguageSwitcher>,
}

impl Localizer {
    /// Create a localizer; nothing is detected or loaded until [`init`](Self::init)
    pub fn new(config: &I18nConfig, fetcher: Arc<dyn TableFetcher>) -> Self {
        Self {
            current_lang: config.default_language.clone(),
            fallback_lang: config.default_language.clone(),
            languages: SupportedLanguages::new(&config.supported_languages),
            translations: HashMap::new(),
            state: ResolverState::Uninitialized,
            fetcher,
            storage_key: config.storage_key.clone(),
            query_param: config.query_param.clone(),
            switcher: None,
        }
    }

    /// Detect, load, render and mount the switcher
    ///
    /// Any failure clamps the page to the fallback language with an empty
    /// table.
    pub async fn init(&mut self, page: &mut Page) {
        if let Err(e) = self.try_init(page).await {
            error!(error = %e, "Failed to initialize i18n");
            self.current_lang = self.fallback_lang.clone();
            self.translations
                .insert(self.fallback_lang.clone(), TranslationTable::new());
            self.state = ResolverState::Ready;
        }
    }

    async fn try_init(&mut self, page: &mut Page) -> Result<()> {
        self.state = ResolverState::Detecting;
        let detection = self.detect_language(page);
        self.current_lang = detection.code;
        info!(language = %self.current_lang, source = ?detection.source, "Detected language");

        self.state = ResolverState::Loading;
        let lang = self.current_lang.clone();
        self.load_language(&lang).await;
        self.ensure_fallback_loaded().await;

        self.apply_translations(&mut page.document)?;
        self.switcher = LanguageSwitcher::mount(&mut page.document, &self.languages, &self.current_lang)?;

        self.state = ResolverState::Ready;
        info!(language = %self.current_lang, "Language initialized successfully");
        Ok(())
    }

    /// Detect the visit's language, persisting a URL override
    pub fn detect_language(&self, page: &mut Page) -> Detection {
        let url_lang = page.window.location.query_param(&self.query_param);
        let stored = page.storage.get_item(&self.storage_key);
        let input = DetectionInput {
            url_lang: url_lang.as_deref(),
            stored: stored.as_deref(),
            browser_locale: &page.navigator.language,
        };

        let detection = detect_language(input, &self.languages, &self.fallback_lang);
        if detection.should_persist() {
            page.storage.set_item(&self.storage_key, &detection.code);
            debug!(language = %detection.code, "Persisted language from URL");
        }
        detection
    }

    /// Make sure a table for `lang` is cached, falling back on failure
    pub async fn load_language(&mut self, lang: &str) -> LoadOutcome {
        if self.translations.contains_key(lang) {
            debug!(language = lang, "Translation table already cached");
            return LoadOutcome::Cached;
        }

        let error = match self.fetcher.fetch(lang).await {
            Ok(table) => {
                debug!(language = lang, keys = count_keys(&table), "Language loaded successfully");
                self.translations.insert(lang.to_string(), table);
                return LoadOutcome::Loaded;
            }
            Err(e) => e,
        };

        if lang == self.fallback_lang {
            log_load_failure(lang, &error, None);
            return LoadOutcome::Failed;
        }
        log_load_failure(lang, &error, Some(&self.fallback_lang));

        let fallback = self.fallback_lang.clone();
        if !self.translations.contains_key(&fallback) {
            match self.fetcher.fetch(&fallback).await {
                Ok(table) => {
                    self.translations.insert(fallback.clone(), table);
                }
                Err(e) => {
                    error!(language = %fallback, error = %e, "Failed to load fallback language");
                    return LoadOutcome::Failed;
                }
            }
        }

        self.current_lang = fallback;
        LoadOutcome::FellBack
    }

    /// Keep the fallback table around so single missing keys can fall back
    async fn ensure_fallback_loaded(&mut self) {
        if self.current_lang == self.fallback_lang || self.translations.contains_key(&self.fallback_lang) {
            return;
        }
        match self.fetcher.fetch(&self.fallback_lang).await {
            Ok(table) => {
                self.translations.insert(self.fallback_lang.clone(), table);
            }
            Err(e) => {
                warn!(language = %self.fallback_lang, error = %e, "Fallback table unavailable, missing keys will show as keys");
            }
        }
    }

    /// Resolve a key against the active and fallback tables
    pub fn translate(&self, key: &str, params: &TranslationParams) -> Resolved {
        debug!(key = key, language = %self.current_lang, "Translating key");
        let resolved = resolve(
            self.translations.get(&self.current_lang),
            self.translations.get(&self.fallback_lang),
            key,
            params,
        );
        if resolved.is_key() {
            warn!(key = key, language = %self.current_lang, "Translation key not found, returning key");
        }
        resolved
    }

    /// Get a translated message as display text
    pub fn t(&self, key: &str, params: Option<&TranslationParams>) -> String {
        let empty = TranslationParams::new();
        self.text(key, params.unwrap_or(&empty))
    }

    /// Rewrite title, root language, meta description and every bound element
    ///
    /// Returns how many elements received text.
    pub fn apply_translations(&self, doc: &mut Document) -> Result<usize> {
        debug!(language = %self.current_lang, "Applying translations");

        doc.title = format!("{} - {}", self.t("hero.title", None), self.t("hero.subtitle", None));
        let root = doc.root();
        doc.set_attribute(root, "lang", &self.current_lang)?;

        if let Some(meta) = doc.query_selector(r#"meta[name="description"]"#)? {
            doc.set_attribute(meta, "content", &self.t("hero.description", None))?;
        }

        let empty = TranslationParams::new();
        let mut updated = 0;
        for binding in TEXT_BINDINGS {
            let text = self.translate(binding.key, &empty).into_text();
            updated += update_element(doc, &binding.selector(), text.as_deref())?;
        }

        debug!(updated = updated, "Translations applied successfully");
        Ok(updated)
    }

    /// Switch to `lang`, persisting it and rewriting the URL in place
    pub async fn switch_language(&mut self, page: &mut Page, lang: &str) -> SwitchOutcome {
        if lang == self.current_lang {
            debug!(language = lang, "Language not changed");
            return SwitchOutcome::Unchanged;
        }
        if !self.languages.is_supported(lang) {
            debug!(language = lang, "Language not supported");
            return SwitchOutcome::Unsupported;
        }

        let previous = self.current_lang.clone();
        page.storage.set_item(&self.storage_key, lang);

        self.state = ResolverState::Loading;
        self.load_language(lang).await;
        self.ensure_fallback_loaded().await;

        // A cached table for `lang` is the only condition checked here
        if self.translations.contains_key(lang) {
            self.current_lang = lang.to_string();
        }

        if let Err(e) = self.apply_translations(&mut page.document) {
            warn!(error = %e, "Failed to apply translations after switch");
        }
        if let Err(e) = self.refresh_switcher(&mut page.document) {
            warn!(error = %e, "Failed to update language switcher");
        }

        page.window.location.replace_query_param(&self.query_param, lang);
        self.state = ResolverState::Ready;

        log_language_switch(&previous, lang, &self.current_lang);
        SwitchOutcome::Switched {
            requested: lang.to_string(),
            active: self.current_lang.clone(),
        }
    }

    /// Route a page click to the switcher widget
    pub fn handle_click(&self, doc: &mut Document, target: ElementId) -> Result<SwitcherAction> {
        match &self.switcher {
            Some(switcher) => switcher.handle_click(doc, target),
            None => Ok(SwitcherAction::Ignored),
        }
    }

    fn refresh_switcher(&self, doc: &mut Document) -> Result<()> {
        debug!("Updating language switcher");
        match &self.switcher {
            Some(switcher) => switcher.refresh(doc, &self.languages, &self.current_lang),
            None => Ok(()),
        }
    }

    pub fn download_bundle(&self, params: &TranslationParams) -> DownloadBundle {
        DownloadBundle::resolve(Some(self), params)
    }

    pub fn shortcuts_bundle(&self) -> ShortcutsBundle {
        ShortcutsBundle::resolve(Some(self))
    }

    pub fn hidden_features_bundle(&self) -> HiddenFeaturesBundle {
        HiddenFeaturesBundle::resolve(Some(self))
    }

    pub fn toast_message(&self, key: &str) -> String {
        toast_message(Some(self), key, key)
    }

    pub fn current_language(&self) -> &str {
        &self.current_lang
    }

    pub fn fallback_language(&self) -> &str {
        &self.fallback_lang
    }

    pub fn state(&self) -> ResolverState {
        self.state
    }

    pub fn languages(&self) -> &SupportedLanguages {
        &self.languages
    }

    pub fn has_table(&self, lang: &str) -> bool {
        self.translations.contains_key(lang)
    }

    pub fn switcher(&self) -> Option<&LanguageSwitcher> {
        self.switcher.as_ref()
    }

    /// Get translation statistics
    pub fn stats(&self) -> TranslationStats {
        let mut stats = TranslationStats {
            languages: Vec::new(),
            total_keys: 0,
        };

        for (lang, translations) in &self.translations {
            let key_count = count_keys(translations);
            stats.languages.push(LanguageStats {
                code: lang.clone(),
                key_count,
            });
            if lang == &self.fallback_lang {
                stats.total_keys = key_count;
            }
        }
        stats.languages.sort_by(|a, b| a.code.cmp(&b.code));

        stats
    }
}

impl Translate for Localizer {
    fn translate(&self, key: &str, params: &TranslationParams) -> Resolved {
        Localizer::translate(self, key, params)
    }
}

impl std::fmt::Debug for Localizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Localizer")
            .field("current_lang", &self.current_lang)
            .field("fallback_lang", &self.fallback_lang)
            .field("loaded", &self.translations.keys().collect::<Vec<_>>())
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

/// Overwrite the text of every element matching `selector`
fn update_element(doc: &mut Document, selector: &str, text: Option<&str>) -> Result<usize> {
    let elements = doc.query_selector_all(selector)?;
    match text {
        Some(text) if !elements.is_empty() => {
            debug!(selector = selector, count = elements.len(), text = text, "Updating elements");
            for element in &elements {
                doc.set_text(*element, text)?;
            }
            Ok(elements.len())
        }
        _ => {
            if elements.is_empty() {
                warn!(selector = selector, "No elements found for selector");
            }
            if text.is_none() {
                warn!(selector = selector, "Text is absent for selector");
            }
            Ok(0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use url::Url;
    use crate::i18n::loader::MemoryTableFetcher;
    use crate::page::{skeleton, MemoryStorage};

    fn page(url: &str, locale: &str) -> Page {
        Page::new(skeleton::landing_document().unwrap(), Url::parse(url).unwrap(), 800.0)
            .with_navigator_language(locale)
    }

    fn fetcher() -> Arc<MemoryTableFetcher> {
        Arc::new(
            MemoryTableFetcher::new()
                .with_table("en", json!({
                    "hero": {"title": "Multi⁺LLM", "subtitle": "Compare answers", "description": "Ask once"},
                    "nav": {"features": "Features"},
                    "toast": {"copied": "Copied to clipboard!"}
                }))
                .with_table("ja", json!({
                    "hero": {"title": "マルチ", "subtitle": "比較"},
                    "nav": {"features": "機能"}
                })),
        )
    }

    #[tokio::test]
    async fn test_init_reaches_ready() {
        let mut page = page("https://multillm.example/", "ja-JP");
        let mut localizer = Localizer::new(&I18nConfig::default(), fetcher());
        assert_eq!(localizer.state(), ResolverState::Uninitialized);

        localizer.init(&mut page).await;
        assert_eq!(localizer.state(), ResolverState::Ready);
        assert_eq!(localizer.current_language(), "ja");
        assert_eq!(page.document.title, "マルチ - 比較");
        assert_eq!(page.document.attribute(page.document.root(), "lang"), Some("ja"));
        // Missing in ja, present in en
        let meta = page.document.query_selector(r#"meta[name="description"]"#).unwrap().unwrap();
        assert_eq!(page.document.attribute(meta, "content"), Some("Ask once"));
        assert!(localizer.switcher().is_some());
        // Browser detection does not persist
        assert_eq!(page.storage.get_item("preferred-language"), None);
    }

    #[tokio::test]
    async fn test_load_failure_falls_back() {
        let mut page = page("https://multillm.example/?lang=zh-CN", "en-US");
        let fetcher = fetcher();
        let mut localizer = Localizer::new(&I18nConfig::default(), fetcher.clone());
        localizer.init(&mut page).await;

        assert_eq!(localizer.current_language(), "en");
        assert!(!localizer.has_table("zh-CN"));
        assert_eq!(fetcher.requests(), vec!["zh-CN".to_string(), "en".to_string()]);
        assert_eq!(page.storage.get_item("preferred-language").as_deref(), Some("zh-CN"));
    }

    #[tokio::test]
    async fn test_everything_missing_shows_keys() {
        let mut page = page("https://multillm.example/", "en-US");
        let mut localizer = Localizer::new(&I18nConfig::default(), Arc::new(MemoryTableFetcher::new()));
        localizer.init(&mut page).await;

        assert_eq!(localizer.state(), ResolverState::Ready);
        assert_eq!(localizer.t("nav.about", None), "nav.about");
        assert_eq!(page.document.title, "hero.title - hero.subtitle");
    }

    #[tokio::test]
    async fn test_load_language_uses_cache() {
        let fetcher = fetcher();
        let mut localizer = Localizer::new(&I18nConfig::default(), fetcher.clone());
        assert_eq!(localizer.load_language("ja").await, LoadOutcome::Loaded);
        assert_eq!(localizer.load_language("ja").await, LoadOutcome::Cached);
        assert_eq!(fetcher.requests().len(), 1);
    }

    #[tokio::test]
    async fn test_switch_guard_cases() {
        let mut page = page("https://multillm.example/", "en-US")
            .with_storage(MemoryStorage::with_item("preferred-language", "en"));
        let mut localizer = Localizer::new(&I18nConfig::default(), fetcher());
        localizer.init(&mut page).await;

        assert_eq!(localizer.switch_language(&mut page, "en").await, SwitchOutcome::Unchanged);
        assert_eq!(localizer.switch_language(&mut page, "ko").await, SwitchOutcome::Unsupported);
        assert_eq!(page.window.location.query_param("lang"), None);

        let outcome = localizer.switch_language(&mut page, "ja").await;
        assert_eq!(
            outcome,
            SwitchOutcome::Switched { requested: "ja".to_string(), active: "ja".to_string() }
        );
        assert_eq!(localizer.t("nav.features", None), "機能");
    }

    #[tokio::test]
    async fn test_stats_count_leaves() {
        let mut localizer = Localizer::new(&I18nConfig::default(), fetcher());
        localizer.load_language("en").await;
        localizer.load_language("ja").await;
        let stats = localizer.stats();
        assert_eq!(stats.total_keys, 5);
        assert_eq!(stats.languages[1].code, "ja");
        assert_eq!(stats.languages[1].key_count, 3);
    }

    #[tokio::test]
    async fn test_bundles_through_localizer() {
        let mut localizer = Localizer::new(&I18nConfig::default(), fetcher());
        localizer.load_language("en").await;
        assert_eq!(localizer.toast_message("copied"), "Copied to clipboard!");
        assert_eq!(localizer.toast_message("unknown"), "toast.unknown");
        assert_eq!(localizer.shortcuts_bundle().title, "modal.shortcuts.title");
    }
}
