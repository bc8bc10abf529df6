//! Page model
//!
//! The document tree plus the browser environment it lives in. Both the
//! localizer and the interaction layer receive a `&mut Page` explicitly
//! instead of reaching for globals.

pub mod document;
pub mod environment;
pub mod selector;
pub mod skeleton;
pub mod timers;

use std::sync::Arc;
use url::Url;

pub use document::{Document, Element, ElementId};
pub use environment::{
    Clipboard, MemoryClipboard, MemoryStorage, Navigator, PageLocation, ScrollBehavior,
    ScrollRequest, Storage, Window,
};
pub use selector::Selector;
pub use timers::{TimerQueue, TimerTask};

/// A loaded page and its environment
pub struct Page {
    pub document: Document,
    pub window: Window,
    pub storage: Box<dyn Storage>,
    pub navigator: Navigator,
    pub clipboard: Arc<dyn Clipboard>,
}

impl Page {
    /// Create a page with empty storage, an `en-US` navigator and an in-memory clipboard
    pub fn new(document: Document, url: Url, viewport_height: f64) -> Self {
        Self {
            document,
            window: Window::new(PageLocation::new(url), viewport_height),
            storage: Box::new(MemoryStorage::new()),
            navigator: Navigator::new("en-US"),
            clipboard: Arc::new(MemoryClipboard::new()),
        }
    }

    pub fn with_storage(mut self, storage: impl Storage + 'static) -> Self {
        self.storage = Box::new(storage);
        self
    }

    pub fn with_navigator_language(mut self, language: &str) -> Self {
        self.navigator = Navigator::new(language);
        self
    }

    pub fn with_clipboard(mut self, clipboard: Arc<dyn Clipboard>) -> Self {
        self.clipboard = clipboard;
        self
    }
}

impl std::fmt::Debug for Page {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Page")
            .field("url", &self.window.location.url().as_str())
            .field("scroll_y", &self.window.scroll_y)
            .field("navigator", &self.navigator.language)
            .finish_non_exhaustive()
    }
}
