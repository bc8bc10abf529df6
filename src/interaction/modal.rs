//! Dialogs: keyboard shortcuts, hidden features and the store download prompt
//!
//! Every dialog shares one frame: a `div.download-modal` backdrop holding
//! `.modal-content` with a header (`h3` title plus a `.modal-close`
//! button) and a `.modal-body`. A dialog is appended to the body already
//! `active`; closing drops `active` and removes the element once the exit
//! transition has elapsed.

use std::time::Duration;
use tracing::{debug, info};
use crate::i18n::{DownloadBundle, HiddenFeaturesBundle, ShortcutsBundle};
use crate::page::{Document, ElementId, TimerQueue, TimerTask};
use crate::utils::errors::Result;

/// Which dialog is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalKind {
    Shortcuts,
    HiddenFeatures,
    DownloadPrompt,
}

/// Handles of an open dialog
#[derive(Debug, Clone)]
pub struct Modal {
    kind: ModalKind,
    root: ElementId,
    close: ElementId,
    cancel: Option<ElementId>,
}

impl Modal {
    pub fn kind(&self) -> ModalKind {
        self.kind
    }

    pub fn root(&self) -> ElementId {
        self.root
    }

    pub fn close_button(&self) -> ElementId {
        self.close
    }

    pub fn cancel_button(&self) -> Option<ElementId> {
        self.cancel
    }

    /// Backdrop clicks hit the modal element itself; content clicks do not
    pub fn is_dismiss_click(&self, doc: &Document, target: ElementId) -> bool {
        target == self.root
            || doc.contains(self.close, target)
            || self.cancel.is_some_and(|cancel| doc.contains(cancel, target))
    }

    /// Start the exit transition and schedule removal
    pub fn close(&self, doc: &mut Document, timers: &mut TimerQueue, exit_transition: Duration) -> Result<()> {
        doc.remove_class(self.root, "active")?;
        timers.schedule(exit_transition, TimerTask::RemoveElement(self.root));
        debug!(kind = ?self.kind, "Modal closing");
        Ok(())
    }
}

struct Frame {
    root: ElementId,
    body: ElementId,
    close: ElementId,
}

fn child(doc: &mut Document, parent: ElementId, tag: &str, class: Option<&str>, text: Option<&str>) -> Result<ElementId> {
    let id = doc.create_element(tag);
    if let Some(class) = class {
        doc.set_attribute(id, "class", class)?;
    }
    if let Some(text) = text {
        doc.set_text(id, text)?;
    }
    doc.append_child(parent, id)?;
    Ok(id)
}

fn frame(doc: &mut Document, title: &str) -> Result<Frame> {
    let root = doc.create_element("div");
    doc.set_attribute(root, "class", "download-modal")?;
    let content = child(doc, root, "div", Some("modal-content"), None)?;
    let header = child(doc, content, "div", Some("modal-header"), None)?;
    child(doc, header, "h3", None, Some(title))?;
    let close = child(doc, header, "button", Some("modal-close"), Some("×"))?;
    let body = child(doc, content, "div", Some("modal-body"), None)?;
    Ok(Frame { root, body, close })
}

fn open(doc: &mut Document, frame: Frame, kind: ModalKind, cancel: Option<ElementId>) -> Result<Modal> {
    let body = doc.body();
    doc.append_child(body, frame.root)?;
    doc.add_class(frame.root, "active")?;
    info!(kind = ?kind, "Modal opened");
    Ok(Modal {
        kind,
        root: frame.root,
        close: frame.close,
        cancel,
    })
}

/// Alt+Shift+<key> rows of the shortcut dialog
const SHORTCUT_KEYS: [&str; 4] = ["M", "↑", "←", "→"];

pub fn open_shortcuts(doc: &mut Document, strings: &ShortcutsBundle) -> Result<Modal> {
    let frame = frame(doc, &strings.title)?;
    let list = child(doc, frame.body, "div", Some("shortcuts-list"), None)?;
    let descriptions = [&strings.activate, &strings.expand, &strings.prev_page, &strings.next_page];

    for (key, description) in SHORTCUT_KEYS.into_iter().zip(descriptions) {
        let item = child(doc, list, "div", Some("shortcut-item"), None)?;
        for (i, part) in ["Alt", "Shift", key].into_iter().enumerate() {
            if i > 0 {
                child(doc, item, "span", Some("shortcut-plus"), Some(" + "))?;
            }
            child(doc, item, "kbd", None, Some(part))?;
        }
        child(doc, item, "span", None, Some(description.as_str()))?;
    }

    open(doc, frame, ModalKind::Shortcuts, None)
}

pub fn open_hidden_features(doc: &mut Document, strings: &HiddenFeaturesBundle) -> Result<Modal> {
    let frame = frame(doc, &strings.title)?;
    child(doc, frame.body, "p", None, Some(strings.description.as_str()))?;
    let list = child(doc, frame.body, "ul", Some("features-list"), None)?;
    for feature in &strings.features {
        child(doc, list, "li", None, Some(feature.as_str()))?;
    }
    let note = child(doc, frame.body, "p", None, None)?;
    child(doc, note, "em", None, Some(strings.note.as_str()))?;

    open(doc, frame, ModalKind::HiddenFeatures, None)
}

pub fn open_download_prompt(doc: &mut Document, strings: &DownloadBundle, store_url: &str) -> Result<Modal> {
    let frame = frame(doc, &strings.title)?;
    child(doc, frame.body, "p", None, Some(strings.description.as_str()))?;
    let actions = child(doc, frame.body, "div", Some("modal-actions"), None)?;
    let go_to = child(doc, actions, "a", Some("btn btn-primary"), Some(strings.go_to.as_str()))?;
    doc.set_attribute(go_to, "href", store_url)?;
    doc.set_attribute(go_to, "target", "_blank")?;
    doc.set_attribute(go_to, "rel", "noopener")?;
    let cancel = child(doc, actions, "button", Some("btn btn-secondary modal-cancel"), Some(strings.cancel.as_str()))?;

    open(doc, frame, ModalKind::DownloadPrompt, Some(cancel))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::TranslationParams;

    #[test]
    fn test_shortcuts_layout() {
        let mut doc = Document::new();
        let modal = open_shortcuts(&mut doc, &ShortcutsBundle::resolve(None)).unwrap();
        assert!(doc.has_class(modal.root(), "active"));
        assert_eq!(doc.query_selector_all(".shortcut-item").unwrap().len(), 4);
        let first = doc.query_selector(".shortcut-item").unwrap().unwrap();
        assert_eq!(doc.text_content(first), "Alt + Shift + MActivate extension");
        let title = doc.query_selector(".modal-header h3").unwrap().unwrap();
        assert_eq!(doc.text_content(title), "Keyboard Shortcuts");
    }

    #[test]
    fn test_hidden_features_layout() {
        let mut doc = Document::new();
        open_hidden_features(&mut doc, &HiddenFeaturesBundle::resolve(None)).unwrap();
        assert_eq!(doc.query_selector_all(".features-list li").unwrap().len(), 6);
        let note = doc.query_selector(".modal-body p em").unwrap().unwrap();
        assert_eq!(doc.text_content(note), "These features are available in the full extension!");
    }

    #[test]
    fn test_dismiss_targets() {
        let mut doc = Document::new();
        let params: TranslationParams = [("browser".to_string(), "Firefox".to_string())].into_iter().collect();
        let modal = open_download_prompt(&mut doc, &DownloadBundle::resolve(None, &params), "https://addons.example/").unwrap();
        let content = doc.query_selector(".modal-content").unwrap().unwrap();
        let go_to = doc.query_selector(".modal-actions a").unwrap().unwrap();

        assert!(modal.is_dismiss_click(&doc, modal.root()));
        assert!(modal.is_dismiss_click(&doc, modal.close_button()));
        assert!(modal.is_dismiss_click(&doc, modal.cancel_button().unwrap()));
        assert!(!modal.is_dismiss_click(&doc, content));
        assert!(!modal.is_dismiss_click(&doc, go_to));
        assert_eq!(doc.attribute(go_to, "href"), Some("https://addons.example/"));
    }

    #[test]
    fn test_close_schedules_removal() {
        let mut doc = Document::new();
        let mut timers = TimerQueue::new();
        let modal = open_shortcuts(&mut doc, &ShortcutsBundle::resolve(None)).unwrap();
        modal.close(&mut doc, &mut timers, Duration::from_millis(300)).unwrap();
        assert!(!doc.has_class(modal.root(), "active"));
        assert_eq!(
            timers.advance(Duration::from_millis(300)),
            vec![TimerTask::RemoveElement(modal.root())]
        );
    }
}
