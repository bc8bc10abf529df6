//! Display language detection
//!
//! Precedence: `?lang=` URL parameter, then the stored preference, then the
//! browser locale, then the fallback. Detection never fails.

use super::languages::SupportedLanguages;

/// Environment facts detection looks at
#[derive(Debug, Clone, Copy, Default)]
pub struct DetectionInput<'a> {
    pub url_lang: Option<&'a str>,
    pub stored: Option<&'a str>,
    pub browser_locale: &'a str,
}

/// Where the detected language came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetectionSource {
    Url,
    Storage,
    Browser,
    Fallback,
}

/// Result of language detection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Detection {
    pub code: String,
    pub source: DetectionSource,
}

impl Detection {
    fn new(code: &str, source: DetectionSource) -> Self {
        Self { code: code.to_string(), source }
    }

    /// Only a URL override is written back to storage
    pub fn should_persist(&self) -> bool {
        self.source == DetectionSource::Url
    }
}

/// Pick the display language for a visit
pub fn detect_language(input: DetectionInput<'_>, supported: &SupportedLanguages, fallback: &str) -> Detection {
    if let Some(lang) = input.url_lang.filter(|l| supported.is_supported(l)) {
        return Detection::new(lang, DetectionSource::Url);
    }

    if let Some(lang) = input.stored.filter(|l| supported.is_supported(l)) {
        return Detection::new(lang, DetectionSource::Storage);
    }

    match map_browser_locale(input.browser_locale, supported) {
        Some(code) => Detection::new(code, DetectionSource::Browser),
        None => Detection::new(fallback, DetectionSource::Fallback),
    }
}

/// Map a browser locale such as `zh-HK` or `ja-JP` onto a supported code
pub fn map_browser_locale<'a>(locale: &str, supported: &'a SupportedLanguages) -> Option<&'a str> {
    let pick = |code: &str| supported.iter().map(|(c, _)| c).find(|c| *c == code);

    if let Some(code) = pick(locale) {
        return Some(code);
    }

    let lowered = locale.to_lowercase();
    if lowered.starts_with("zh") {
        let traditional = ["tw", "hk", "mo"].iter().any(|region| lowered.contains(region));
        return pick(if traditional { "zh-TW" } else { "zh-CN" });
    }

    let primary = lowered.split('-').next().unwrap_or_default();
    match primary {
        "ja" => pick("ja"),
        "zh" => pick("zh-CN"),
        _ => None,
    }
}
