//! Test context for unified test setup
//!
//! This module provides a unified test context that starts the mock locale
//! server and builds sites pointed at it.

use std::sync::Once;
use MultiLLMLanding::config::Settings;
use MultiLLMLanding::page::{ElementId, MemoryStorage, Page};
use MultiLLMLanding::site::Site;

use super::locale_mock::LocaleMockServer;

static INIT: Once = Once::new();

/// Initialize logging for tests (called once)
pub fn init_test_logging() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter("debug")
            .with_test_writer()
            .try_init();
    });
}

/// Unified test context that manages all test components
pub struct TestContext {
    pub locale_mock: LocaleMockServer,
    pub settings: Settings,
}

impl TestContext {
    /// Mock server with the fixture tables mounted
    pub async fn new() -> Self {
        let ctx = Self::empty().await;
        ctx.locale_mock.setup_default_mocks().await;
        ctx
    }

    /// Mock server without any mounted tables
    pub async fn empty() -> Self {
        init_test_logging();
        let locale_mock = LocaleMockServer::new().await;

        let mut settings = Settings::default();
        settings.site.locales_base = locale_mock.base_url.clone();
        settings.site.request_timeout_seconds = 2;

        Self { locale_mock, settings }
    }

    pub fn with_page_url(mut self, url: &str) -> Self {
        self.settings.site.page_url = url.to_string();
        self
    }

    /// A site for a visitor with the given browser locale, not yet started
    pub fn site(&self, browser_locale: &str) -> Site {
        Site::from_settings(&self.settings, browser_locale).expect("Failed to build site")
    }

    /// A started site with a stored language preference
    pub async fn started_site_with_stored(&self, browser_locale: &str, stored: Option<&str>) -> Site {
        let mut site = self.site(browser_locale);
        if let Some(lang) = stored {
            let key = self.settings.i18n.storage_key.clone();
            site.page_mut().storage = Box::new(MemoryStorage::with_item(&key, lang));
        }
        site.start().await.expect("Failed to start site");
        site
    }

    pub async fn started_site(&self, browser_locale: &str) -> Site {
        self.started_site_with_stored(browser_locale, None).await
    }
}

/// Text of the first element bound to `key`
pub fn bound_text(page: &Page, key: &str) -> String {
    let selector = format!(r#"[data-i18n="{}"]"#, key);
    page.document
        .query_selector(&selector)
        .expect("valid selector")
        .map(|id| page.document.text_content(id))
        .unwrap_or_default()
}

/// First element matching a selector
pub fn find(page: &Page, selector: &str) -> ElementId {
    page.document
        .query_selector(selector)
        .expect("valid selector")
        .unwrap_or_else(|| panic!("no element matches {}", selector))
}
