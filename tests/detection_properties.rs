//! Property tests for display language detection

use proptest::prelude::*;
use MultiLLMLanding::i18n::detect::map_browser_locale;
use MultiLLMLanding::i18n::{detect_language, DetectionInput, DetectionSource, SupportedLanguages};

const SUPPORTED: [&str; 4] = ["en", "ja", "zh-CN", "zh-TW"];

fn supported_code() -> impl Strategy<Value = &'static str> {
    prop::sample::select(SUPPORTED.to_vec())
}

proptest! {
    #[test]
    fn url_parameter_overrides_everything(
        url in supported_code(),
        stored in proptest::option::of(supported_code()),
        browser in "[a-zA-Z]{2}(-[a-zA-Z]{2})?",
    ) {
        let input = DetectionInput { url_lang: Some(url), stored, browser_locale: &browser };
        let detection = detect_language(input, &SupportedLanguages::default(), "en");
        prop_assert_eq!(detection.code.as_str(), url);
        prop_assert_eq!(detection.source, DetectionSource::Url);
        prop_assert!(detection.should_persist());
    }

    #[test]
    fn detection_always_yields_a_supported_code(
        url in proptest::option::of("[a-zA-Z-]{0,8}"),
        stored in proptest::option::of("[a-zA-Z-]{0,8}"),
        browser in "[a-zA-Z-]{0,12}",
    ) {
        let languages = SupportedLanguages::default();
        let input = DetectionInput {
            url_lang: url.as_deref(),
            stored: stored.as_deref(),
            browser_locale: &browser,
        };
        let detection = detect_language(input, &languages, "en");
        prop_assert!(languages.is_supported(&detection.code));
    }

    #[test]
    fn chinese_locales_never_fall_back(region in "[A-Z]{2}") {
        let languages = SupportedLanguages::default();
        let locale = format!("zh-{}", region);
        let mapped = map_browser_locale(&locale, &languages);
        prop_assert!(mapped == Some("zh-CN") || mapped == Some("zh-TW"));
    }

    #[test]
    fn unsupported_primary_languages_fall_back(primary in "(fr|de|es|pt|ko|ru|it)", region in "[A-Z]{2}") {
        let locale = format!("{}-{}", primary, region);
        let input = DetectionInput { browser_locale: &locale, ..Default::default() };
        let detection = detect_language(input, &SupportedLanguages::default(), "en");
        prop_assert_eq!(detection.code.as_str(), "en");
        prop_assert_eq!(detection.source, DetectionSource::Fallback);
    }
}

#[test]
fn documented_locale_examples() {
    let languages = SupportedLanguages::default();
    assert_eq!(map_browser_locale("zh-HK", &languages), Some("zh-TW"));
    assert_eq!(map_browser_locale("zh-SG", &languages), Some("zh-CN"));
    assert_eq!(map_browser_locale("ja-JP", &languages), Some("ja"));
    assert_eq!(map_browser_locale("fr-FR", &languages), None);
}
