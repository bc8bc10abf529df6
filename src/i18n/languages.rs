//! Supported display languages

use crate::config::LanguageConfig;

/// Ordered code → display name table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SupportedLanguages {
    languages: Vec<LanguageConfig>,
}

impl SupportedLanguages {
    pub fn new(languages: &[LanguageConfig]) -> Self {
        Self { languages: languages.to_vec() }
    }

    /// Check if a language is supported (exact, case-sensitive code match)
    pub fn is_supported(&self, code: &str) -> bool {
        self.languages.iter().any(|l| l.code == code)
    }

    pub fn display_name(&self, code: &str) -> Option<&str> {
        self.languages
            .iter()
            .find(|l| l.code == code)
            .map(|l| l.name.as_str())
    }

    /// `(code, display name)` pairs in configuration order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.languages.iter().map(|l| (l.code.as_str(), l.name.as_str()))
    }

    pub fn codes(&self) -> Vec<&str> {
        self.iter().map(|(code, _)| code).collect()
    }

    pub fn len(&self) -> usize {
        self.languages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.languages.is_empty()
    }
}

impl Default for SupportedLanguages {
    fn default() -> Self {
        Self::new(&crate::config::I18nConfig::default().supported_languages)
    }
}
