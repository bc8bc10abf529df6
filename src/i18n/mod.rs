//! Internationalization module
//!
//! This module handles the landing page's display language: detection from
//! the URL, stored preference and browser locale, translation table loading
//! with fallback, key-path resolution, rendering into the document and the
//! language switcher widget.

pub mod bindings;
pub mod bundles;
pub mod detect;
pub mod languages;
pub mod loader;
pub mod localizer;
pub mod resolver;
pub mod switcher;

// Re-export commonly used i18n components
pub use bundles::{DownloadBundle, HiddenFeaturesBundle, ShortcutsBundle, Translate};
pub use detect::{detect_language, Detection, DetectionInput, DetectionSource};
pub use languages::SupportedLanguages;
pub use loader::{
    fetcher_for, DirectoryTableFetcher, HttpTableFetcher, LanguageStats, MemoryTableFetcher,
    TableFetcher, TranslationStats, TranslationTable,
};
pub use localizer::{LoadOutcome, Localizer, ResolverState, SwitchOutcome};
pub use resolver::{resolve, Resolved, TranslationParams};
pub use switcher::{LanguageSwitcher, SwitcherAction};
