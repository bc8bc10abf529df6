//! Multi⁺LLM landing page runtime
//!
//! The landing page of the Multi⁺LLM browser extension, modeled as an
//! in-memory document driven by explicit events. This library detects and
//! applies the visitor's display language and implements the page's
//! cosmetic interactivity: navigation, scroll effects, dialogs, toasts
//! and lazy image loading.

#![allow(non_snake_case)]

pub mod config;
pub mod i18n;
pub mod interaction;
pub mod page;
pub mod site;
pub mod utils;

// Re-export commonly used types
pub use config::Settings;
pub use utils::errors::{LandingError, Result};

// Re-export main components for easy access
pub use i18n::Localizer;
pub use interaction::{InteractionLayer, PageEvent};
pub use page::Page;
pub use site::Site;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Get library information
pub fn info() -> String {
    format!("{} v{}", NAME, VERSION)
}
