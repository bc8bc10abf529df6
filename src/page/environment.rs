//! Browser environment around the document
//!
//! Window state (scroll position, location, history), local storage,
//! the navigator locale and the system clipboard.

use std::collections::HashMap;
use std::sync::Mutex;
use async_trait::async_trait;
use tracing::debug;
use url::Url;
use crate::utils::errors::{LandingError, Result};

/// How a scroll request should be animated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollBehavior {
    Smooth,
    Instant,
}

/// A recorded `scrollTo` call
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollRequest {
    pub top: f64,
    pub behavior: ScrollBehavior,
}

/// The page URL plus a session history counter
#[derive(Debug, Clone)]
pub struct PageLocation {
    url: Url,
    history_length: usize,
}

impl PageLocation {
    pub fn new(url: Url) -> Self {
        Self { url, history_length: 1 }
    }

    pub fn parse(url: &str) -> Result<Self> {
        Ok(Self::new(Url::parse(url)?))
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    pub fn history_length(&self) -> usize {
        self.history_length
    }

    /// First value of a query parameter
    pub fn query_param(&self, name: &str) -> Option<String> {
        self.url
            .query_pairs()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.into_owned())
    }

    /// Set a query parameter in place, like `history.replaceState`
    ///
    /// An existing parameter keeps its position and later duplicates are
    /// dropped. A new one is appended.
    pub fn replace_query_param(&mut self, name: &str, value: &str) {
        let mut replaced = false;
        let mut updated: Vec<(String, String)> = Vec::new();
        for (key, current) in self.url.query_pairs() {
            if key != name {
                updated.push((key.into_owned(), current.into_owned()));
            } else if !replaced {
                updated.push((name.to_string(), value.to_string()));
                replaced = true;
            }
        }
        if !replaced {
            updated.push((name.to_string(), value.to_string()));
        }
        {
            let mut pairs = self.url.query_pairs_mut();
            pairs.clear();
            for (k, v) in &updated {
                pairs.append_pair(k, v);
            }
        }
        debug!(url = %self.url, "Replaced history state");
    }

    /// Drop the fragment with a new history entry, like `history.pushState`
    pub fn clear_fragment(&mut self) {
        self.url.set_fragment(None);
        self.history_length += 1;
        debug!(url = %self.url, "Pushed history state");
    }
}

/// Window-level state
#[derive(Debug, Clone)]
pub struct Window {
    pub location: PageLocation,
    pub scroll_y: f64,
    pub inner_height: f64,
    scroll_log: Vec<ScrollRequest>,
}

impl Window {
    pub fn new(location: PageLocation, inner_height: f64) -> Self {
        Self {
            location,
            scroll_y: 0.0,
            inner_height,
            scroll_log: Vec::new(),
        }
    }

    /// Scroll the viewport; the target is clamped at the top of the page
    pub fn scroll_to(&mut self, top: f64, behavior: ScrollBehavior) {
        let top = top.max(0.0);
        self.scroll_y = top;
        self.scroll_log.push(ScrollRequest { top, behavior });
    }

    pub fn scroll_log(&self) -> &[ScrollRequest] {
        &self.scroll_log
    }
}

/// Persistent key/value storage (browser local storage)
pub trait Storage: Send {
    fn get_item(&self, key: &str) -> Option<String>;
    fn set_item(&mut self, key: &str, value: &str);
}

/// In-memory storage for a single page session
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    items: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_item(key: &str, value: &str) -> Self {
        let mut storage = Self::new();
        storage.set_item(key, value);
        storage
    }
}

impl Storage for MemoryStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items.get(key).cloned()
    }

    fn set_item(&mut self, key: &str, value: &str) {
        self.items.insert(key.to_string(), value.to_string());
    }
}

/// Browser-reported locale
#[derive(Debug, Clone)]
pub struct Navigator {
    pub language: String,
}

impl Navigator {
    pub fn new(language: &str) -> Self {
        Self { language: language.to_string() }
    }
}

/// System clipboard
#[async_trait]
pub trait Clipboard: Send + Sync {
    async fn write_text(&self, text: &str) -> Result<()>;
}

/// Clipboard that keeps the last written text in memory
#[derive(Debug, Default)]
pub struct MemoryClipboard {
    contents: Mutex<Option<String>>,
    denied: bool,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// A clipboard whose writes are always rejected
    pub fn denied() -> Self {
        Self {
            contents: Mutex::new(None),
            denied: true,
        }
    }

    pub fn contents(&self) -> Option<String> {
        self.contents.lock().ok().and_then(|guard| guard.clone())
    }
}

#[async_trait]
impl Clipboard for MemoryClipboard {
    async fn write_text(&self, text: &str) -> Result<()> {
        if self.denied {
            return Err(LandingError::Clipboard("write permission denied".to_string()));
        }
        let mut guard = self
            .contents
            .lock()
            .map_err(|e| LandingError::Clipboard(e.to_string()))?;
        *guard = Some(text.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replace_query_param_keeps_other_pairs() {
        let mut location = PageLocation::parse("https://multillm.example/?ref=hn&lang=ja#download").unwrap();
        location.replace_query_param("lang", "zh-TW");
        assert_eq!(location.query_param("lang").as_deref(), Some("zh-TW"));
        assert_eq!(location.query_param("ref").as_deref(), Some("hn"));
        assert_eq!(location.url().fragment(), Some("download"));
        assert_eq!(location.history_length(), 1);
    }

    #[test]
    fn test_replace_query_param_keeps_position() {
        let mut location = PageLocation::parse("https://multillm.example/?lang=ja&ref=x").unwrap();
        location.replace_query_param("lang", "en");
        assert_eq!(location.url().query(), Some("lang=en&ref=x"));

        let mut location = PageLocation::parse("https://multillm.example/?ref=x").unwrap();
        location.replace_query_param("lang", "ja");
        assert_eq!(location.url().query(), Some("ref=x&lang=ja"));
    }

    #[test]
    fn test_clear_fragment_pushes_history() {
        let mut location = PageLocation::parse("https://multillm.example/?ref=x&lang=ja#about").unwrap();
        location.clear_fragment();
        assert_eq!(location.url().fragment(), None);
        // The query string survives so the language stays in the URL
        assert_eq!(location.url().query(), Some("ref=x&lang=ja"));
        assert_eq!(location.url().as_str(), "https://multillm.example/?ref=x&lang=ja");
        assert_eq!(location.history_length(), 2);
    }

    #[test]
    fn test_scroll_is_clamped() {
        let mut window = Window::new(PageLocation::parse("https://multillm.example/").unwrap(), 800.0);
        window.scroll_to(-20.0, ScrollBehavior::Smooth);
        assert_eq!(window.scroll_y, 0.0);
        assert_eq!(window.scroll_log()[0].behavior, ScrollBehavior::Smooth);
    }

    #[tokio::test]
    async fn test_memory_clipboard() {
        let clipboard = MemoryClipboard::new();
        tokio_test::assert_ok!(clipboard.write_text("npm i multillm").await);
        assert_eq!(clipboard.contents().as_deref(), Some("npm i multillm"));

        let denied = MemoryClipboard::denied();
        tokio_test::assert_err!(denied.write_text("x").await);
    }
}
