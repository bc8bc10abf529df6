//! Page events fed to the runtime

use crate::page::ElementId;

/// A keydown with its modifier state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyPress {
    /// `KeyboardEvent.key`: the produced character or a key name
    pub key: String,
    pub alt: bool,
    pub shift: bool,
}

impl KeyPress {
    /// A plain keypress without modifiers
    pub fn new(key: &str) -> Self {
        Self {
            key: key.to_string(),
            alt: false,
            shift: false,
        }
    }

    /// Alt+Shift chord; `key` is what the browser reports, e.g. `"M"`
    pub fn alt_shift(key: &str) -> Self {
        Self {
            key: key.to_string(),
            alt: true,
            shift: true,
        }
    }
}

/// User-driven events
#[derive(Debug, Clone, PartialEq)]
pub enum PageEvent {
    Click { target: ElementId },
    /// The viewport scrolled to `y`
    Scroll { y: f64 },
    KeyDown(KeyPress),
}

impl PageEvent {
    pub fn name(&self) -> &'static str {
        match self {
            PageEvent::Click { .. } => "click",
            PageEvent::Scroll { .. } => "scroll",
            PageEvent::KeyDown(_) => "keydown",
        }
    }

    pub fn target(&self) -> Option<ElementId> {
        match self {
            PageEvent::Click { target } => Some(*target),
            _ => None,
        }
    }
}

/// How the page handled an event
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EventResponse {
    /// The browser default (anchor jump, typed character) was suppressed
    pub default_prevented: bool,
}

impl EventResponse {
    pub fn prevented() -> Self {
        Self { default_prevented: true }
    }

    pub fn merge(self, other: EventResponse) -> Self {
        Self {
            default_prevented: self.default_prevented || other.default_prevented,
        }
    }
}
