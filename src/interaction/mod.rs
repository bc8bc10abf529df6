//! Page interaction layer
//!
//! Cosmetic behavior of the landing page, driven by explicit events:
//! - Logo and in-page anchor navigation with smooth scrolling
//! - The mobile navigation drawer
//! - Header styling and fire-once viewport observers on scroll
//! - Clipboard copy with a toast
//! - Keyboard shortcut, hidden feature and download prompt dialogs
//!
//! User-facing strings come from an optional [`Translate`] implementation;
//! without one every dialog falls back to its English defaults.

pub mod easter_egg;
pub mod events;
pub mod mobile_menu;
pub mod modal;
pub mod navigation;
pub mod observer;
pub mod toast;

use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};
use crate::config::InteractionConfig;
use crate::i18n::bundles::toast_message;
use crate::i18n::{DownloadBundle, HiddenFeaturesBundle, ShortcutsBundle, Translate, TranslationParams};
use crate::page::{ElementId, Page, TimerQueue, TimerTask};
use crate::utils::errors::{LandingError, Result};
use crate::utils::logging::log_page_event;

pub use easter_egg::{KeySequence, KEY_BUFFER_LEN};
pub use events::{EventResponse, KeyPress, PageEvent};
pub use mobile_menu::MobileMenu;
pub use modal::{Modal, ModalKind};
pub use navigation::NavigationTarget;
pub use observer::ViewportObserver;

/// Elements that animate in the first time they scroll into view
pub const REVEAL_SELECTOR: &str = ".feature-card, .model-item, .download-card, .step";
/// Images whose `src` is deferred until they scroll into view
pub const LAZY_IMAGE_SELECTOR: &str = "img[data-src]";

const REVEAL_THRESHOLD: f64 = 0.1;
const REVEAL_BOTTOM_MARGIN: f64 = 50.0;

/// Interaction state for one page
#[derive(Debug)]
pub struct InteractionLayer {
    config: InteractionConfig,
    timers: TimerQueue,
    mobile_menu: Option<MobileMenu>,
    reveal: ViewportObserver,
    lazy_images: ViewportObserver,
    modals: Vec<Modal>,
    keys: KeySequence,
    attached: bool,
}

impl InteractionLayer {
    pub fn new(config: InteractionConfig) -> Self {
        let keys = KeySequence::new(&config.easter_egg_trigger);
        Self {
            config,
            timers: TimerQueue::new(),
            mobile_menu: None,
            reveal: ViewportObserver::new(REVEAL_THRESHOLD, REVEAL_BOTTOM_MARGIN),
            lazy_images: ViewportObserver::new(0.0, 0.0),
            modals: Vec::new(),
            keys,
            attached: false,
        }
    }

    /// Build the mobile menu, start observing and sync with the current viewport
    pub fn attach(&mut self, page: &mut Page) -> Result<()> {
        if self.attached {
            warn!("Interaction layer already attached");
            return Ok(());
        }

        self.mobile_menu = MobileMenu::create(&mut page.document)?;
        for id in page.document.query_selector_all(REVEAL_SELECTOR)? {
            self.reveal.observe(id);
        }
        for id in page.document.query_selector_all(LAZY_IMAGE_SELECTOR)? {
            self.lazy_images.observe(id);
        }
        self.attached = true;

        info!(
            reveal = self.reveal.len(),
            lazy_images = self.lazy_images.len(),
            mobile_menu = self.mobile_menu.is_some(),
            "Interaction layer attached"
        );

        self.refresh_viewport(page)
    }

    /// Handle one page event
    pub fn handle_event(
        &mut self,
        page: &mut Page,
        event: &PageEvent,
        translator: Option<&dyn Translate>,
    ) -> Result<EventResponse> {
        log_page_event(event.name(), event.target().map(ElementId::index), None);

        match event {
            PageEvent::Click { target } => self.on_click(page, *target, translator),
            PageEvent::Scroll { y } => {
                page.window.scroll_y = y.max(0.0);
                self.refresh_viewport(page)?;
                Ok(EventResponse::default())
            }
            PageEvent::KeyDown(key) => self.on_key_down(page, key, translator),
        }
    }

    fn on_click(
        &mut self,
        page: &mut Page,
        target: ElementId,
        translator: Option<&dyn Translate>,
    ) -> Result<EventResponse> {
        if let Some(index) = self
            .modals
            .iter()
            .rposition(|modal| modal.is_dismiss_click(&page.document, target))
        {
            let modal = self.modals.remove(index);
            let exit_transition = self.exit_transition();
            modal.close(&mut page.document, &mut self.timers, exit_transition)?;
            return Ok(EventResponse::default());
        }

        if let Some(button) = page.document.closest(target, "[data-download-browser]")? {
            self.open_download_prompt(page, button, translator)?;
            return Ok(EventResponse::prevented());
        }

        let mut response = EventResponse::default();
        if let Some(destination) = navigation::navigation_target(page, target, self.config.header_height)? {
            navigation::navigate(page, destination);
            self.refresh_viewport(page)?;
            response = EventResponse::prevented();
        }

        if let Some(menu) = &self.mobile_menu {
            menu.handle_click(&mut page.document, target)?;
        }

        Ok(response)
    }

    fn on_key_down(
        &mut self,
        page: &mut Page,
        key: &KeyPress,
        translator: Option<&dyn Translate>,
    ) -> Result<EventResponse> {
        let mut response = EventResponse::default();

        if key.alt && key.shift && key.key == "M" {
            self.open_shortcuts(page, translator)?;
            response = EventResponse::prevented();
        }

        if self.keys.push(&key.key) {
            info!("Hidden feature sequence entered");
            self.open_hidden_features(page, translator)?;
        }

        Ok(response)
    }

    /// Header styling plus the fire-once observers for the current viewport
    fn refresh_viewport(&mut self, page: &mut Page) -> Result<()> {
        if let Some(header) = page.document.query_selector(".header")? {
            if page.window.scroll_y > self.config.scroll_threshold {
                page.document.add_class(header, "scrolled")?;
            } else {
                page.document.remove_class(header, "scrolled")?;
            }
        }

        for id in self.reveal.take_intersecting(&page.document, &page.window) {
            page.document.add_class(id, "animate-in")?;
            debug!(element = id.index(), "Revealed element");
        }

        for id in self.lazy_images.take_intersecting(&page.document, &page.window) {
            if let Some(src) = page.document.attribute(id, "data-src").map(str::to_string) {
                page.document.set_attribute(id, "src", &src)?;
            }
            page.document.remove_class(id, "lazy")?;
            debug!(element = id.index(), "Loaded lazy image");
        }

        Ok(())
    }

    pub fn open_shortcuts(&mut self, page: &mut Page, translator: Option<&dyn Translate>) -> Result<&Modal> {
        let strings = ShortcutsBundle::resolve(translator);
        let modal = modal::open_shortcuts(&mut page.document, &strings)?;
        Ok(self.push_modal(modal))
    }

    pub fn open_hidden_features(&mut self, page: &mut Page, translator: Option<&dyn Translate>) -> Result<&Modal> {
        let strings = HiddenFeaturesBundle::resolve(translator);
        let modal = modal::open_hidden_features(&mut page.document, &strings)?;
        Ok(self.push_modal(modal))
    }

    /// Prompt before leaving for a browser's extension store
    pub fn open_download_prompt(
        &mut self,
        page: &mut Page,
        button: ElementId,
        translator: Option<&dyn Translate>,
    ) -> Result<&Modal> {
        let doc = &page.document;
        let mut params = TranslationParams::new();
        if let Some(browser) = doc.attribute(button, "data-download-browser") {
            params.insert("browser".to_string(), browser.to_string());
        }
        if let Some(store) = doc.attribute(button, "data-store") {
            params.insert("store".to_string(), store.to_string());
        }
        let store_url = doc.attribute(button, "href").unwrap_or("#").to_string();

        let strings = DownloadBundle::resolve(translator, &params);
        let modal = modal::open_download_prompt(&mut page.document, &strings, &store_url)?;
        Ok(self.push_modal(modal))
    }

    fn push_modal(&mut self, modal: Modal) -> &Modal {
        self.modals.push(modal);
        &self.modals[self.modals.len() - 1]
    }

    /// Write to the clipboard and confirm with a toast
    ///
    /// A rejected write is logged and shows no toast.
    pub async fn copy_to_clipboard(
        &mut self,
        page: &mut Page,
        text: &str,
        translator: Option<&dyn Translate>,
    ) -> Result<Option<ElementId>> {
        let clipboard = Arc::clone(&page.clipboard);
        if let Err(e) = clipboard.write_text(text).await {
            warn!(error = %e, "Clipboard write failed");
            return Ok(None);
        }

        let message = toast_message(translator, "copied", "Copied to clipboard!");
        let toast = toast::show_toast(&mut page.document, &mut self.timers, &self.config, &message)?;
        Ok(Some(toast))
    }

    /// Advance the virtual clock, running timers in due order
    ///
    /// Returns the number of timer tasks that ran.
    pub fn advance(&mut self, page: &mut Page, elapsed: Duration) -> Result<usize> {
        let mut remaining = elapsed;
        let mut ran = 0;

        loop {
            let step = match self.timers.next_due_in() {
                Some(due) if due <= remaining => due,
                _ => {
                    self.timers.advance(remaining);
                    return Ok(ran);
                }
            };
            remaining -= step;
            for task in self.timers.advance(step) {
                self.run_task(page, task)?;
                ran += 1;
            }
        }
    }

    fn run_task(&mut self, page: &mut Page, task: TimerTask) -> Result<()> {
        let outcome = match task {
            TimerTask::ShowToast(id) => page.document.add_class(id, "show"),
            TimerTask::HideToast(id) => {
                let hidden = page.document.remove_class(id, "show");
                if hidden.is_ok() {
                    self.timers.schedule(self.exit_transition(), TimerTask::RemoveElement(id));
                }
                hidden
            }
            TimerTask::RemoveElement(id) => page.document.remove(id),
        };

        match outcome {
            Err(LandingError::DetachedElement(index)) => {
                debug!(element = index, task = ?task, "Timer target already removed");
                Ok(())
            }
            other => other,
        }
    }

    fn exit_transition(&self) -> Duration {
        Duration::from_millis(self.config.exit_transition_ms)
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }

    pub fn open_modals(&self) -> &[Modal] {
        &self.modals
    }

    pub fn mobile_menu(&self) -> Option<&MobileMenu> {
        self.mobile_menu.as_ref()
    }

    pub fn timers(&self) -> &TimerQueue {
        &self.timers
    }

    pub fn pending_reveals(&self) -> usize {
        self.reveal.len()
    }

    pub fn pending_lazy_images(&self) -> usize {
        self.lazy_images.len()
    }
}
