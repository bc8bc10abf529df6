//! Site runtime
//!
//! Owns the page, the optional localizer and the interaction layer, and
//! routes page events between them. The language switcher sees clicks
//! first; clicks it consumes never reach the rest of the page.

use std::sync::Arc;
use std::time::Duration;
use tracing::info;
use url::Url;
use crate::config::{InteractionConfig, Settings};
use crate::i18n::{fetcher_for, Localizer, SwitchOutcome, SwitcherAction, TableFetcher, Translate};
use crate::interaction::{EventResponse, InteractionLayer, PageEvent};
use crate::page::{skeleton, ElementId, Page};
use crate::utils::errors::Result;

/// A running landing page
#[derive(Debug)]
pub struct Site {
    page: Page,
    localizer: Option<Localizer>,
    interaction: InteractionLayer,
}

impl Site {
    pub fn new(page: Page, localizer: Option<Localizer>, config: InteractionConfig) -> Self {
        Self {
            page,
            localizer,
            interaction: InteractionLayer::new(config),
        }
    }

    /// Build the landing page from settings with the given browser locale
    pub fn from_settings(settings: &Settings, browser_locale: &str) -> Result<Self> {
        let fetcher: Arc<dyn TableFetcher> = Arc::from(fetcher_for(&settings.site)?);
        Self::with_fetcher(settings, browser_locale, fetcher)
    }

    /// Like [`Site::from_settings`] with an explicit table source
    pub fn with_fetcher(settings: &Settings, browser_locale: &str, fetcher: Arc<dyn TableFetcher>) -> Result<Self> {
        let url = Url::parse(&settings.site.page_url)?;
        let page = Page::new(
            skeleton::landing_document()?,
            url,
            settings.interaction.viewport_height,
        )
        .with_navigator_language(browser_locale);
        let localizer = Localizer::new(&settings.i18n, fetcher);

        Ok(Self::new(page, Some(localizer), settings.interaction.clone()))
    }

    /// Attach the interaction layer, then localize the page
    ///
    /// The mobile menu is built first so its links are translated too.
    pub async fn start(&mut self) -> Result<()> {
        self.interaction.attach(&mut self.page)?;
        if let Some(localizer) = self.localizer.as_mut() {
            localizer.init(&mut self.page).await;
        }
        info!(
            language = self.localizer.as_ref().map(Localizer::current_language),
            "Site started"
        );
        Ok(())
    }

    /// Deliver one page event
    pub async fn dispatch(&mut self, event: PageEvent) -> Result<EventResponse> {
        if let (PageEvent::Click { target }, Some(localizer)) = (&event, self.localizer.as_mut()) {
            let action = localizer.handle_click(&mut self.page.document, *target)?;
            if let SwitcherAction::Select(code) = &action {
                localizer.switch_language(&mut self.page, code).await;
            }
            if action.stops_propagation() {
                return Ok(EventResponse::default());
            }
        }

        let translator = self.localizer.as_ref().map(|l| l as &dyn Translate);
        self.interaction.handle_event(&mut self.page, &event, translator)
    }

    pub async fn click(&mut self, target: ElementId) -> Result<EventResponse> {
        self.dispatch(PageEvent::Click { target }).await
    }

    /// Explicit language switch; `None` without a localizer
    pub async fn switch_language(&mut self, lang: &str) -> Option<SwitchOutcome> {
        let localizer = self.localizer.as_mut()?;
        Some(localizer.switch_language(&mut self.page, lang).await)
    }

    pub async fn copy_to_clipboard(&mut self, text: &str) -> Result<Option<ElementId>> {
        let translator = self.localizer.as_ref().map(|l| l as &dyn Translate);
        self.interaction
            .copy_to_clipboard(&mut self.page, text, translator)
            .await
    }

    /// Let virtual time pass
    pub fn advance(&mut self, elapsed: Duration) -> Result<usize> {
        self.interaction.advance(&mut self.page, elapsed)
    }

    pub fn page(&self) -> &Page {
        &self.page
    }

    pub fn page_mut(&mut self) -> &mut Page {
        &mut self.page
    }

    pub fn localizer(&self) -> Option<&Localizer> {
        self.localizer.as_ref()
    }

    pub fn interaction(&self) -> &InteractionLayer {
        &self.interaction
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use crate::i18n::MemoryTableFetcher;
    use crate::interaction::{KeyPress, ModalKind};

    fn tables() -> MemoryTableFetcher {
        MemoryTableFetcher::new()
            .with_table("en", json!({
                "nav": {"features": "Features"},
                "modal": {"easter": {"title": "Secrets", "features": ["Omnibox"]}},
                "toast": {"copied": "Copied!"}
            }))
            .with_table("ja", json!({
                "nav": {"features": "機能"},
                "toast": {"copied": "コピーしました"}
            }))
    }

    async fn started() -> Site {
        let settings = Settings::default();
        let mut site = Site::with_fetcher(&settings, "en-US", Arc::new(tables())).unwrap();
        site.start().await.unwrap();
        site
    }

    #[tokio::test]
    async fn test_switcher_click_stops_at_widget() {
        let mut site = started().await;
        let option = site.localizer().unwrap().switcher().unwrap().option("ja").unwrap();
        site.click(option).await.unwrap();

        assert_eq!(site.localizer().unwrap().current_language(), "ja");
        let menu_link = site.interaction().mobile_menu().unwrap().links()[0];
        assert_eq!(site.page().document.text_content(menu_link), "機能");
        assert_eq!(site.page().window.scroll_log().len(), 0);
    }

    #[tokio::test]
    async fn test_dialogs_use_localizer_strings() {
        let mut site = started().await;
        for c in "multillm".chars() {
            site.dispatch(PageEvent::KeyDown(KeyPress::new(&c.to_string()))).await.unwrap();
        }
        let modals = site.interaction().open_modals();
        assert_eq!(modals.len(), 1);
        assert_eq!(modals[0].kind(), ModalKind::HiddenFeatures);
        let title = site.page().document.query_selector(".download-modal h3").unwrap().unwrap();
        assert_eq!(site.page().document.text_content(title), "Secrets");
    }

    #[tokio::test]
    async fn test_toast_follows_active_language() {
        let mut site = started().await;
        site.switch_language("ja").await;
        let toast = site.copy_to_clipboard("npm i multillm").await.unwrap().unwrap();
        assert_eq!(site.page().document.text_content(toast), "コピーしました");
        assert_eq!(site.advance(Duration::from_secs(3)).unwrap(), 3);
    }

    #[tokio::test]
    async fn test_without_localizer_uses_defaults() {
        let settings = Settings::default();
        let page = Page::new(
            skeleton::landing_document().unwrap(),
            Url::parse(&settings.site.page_url).unwrap(),
            800.0,
        );
        let mut site = Site::new(page, None, settings.interaction.clone());
        site.start().await.unwrap();

        assert!(site.switch_language("ja").await.is_none());
        let toast = site.copy_to_clipboard("x").await.unwrap().unwrap();
        assert_eq!(site.page().document.text_content(toast), "Copied to clipboard!");
    }
}
