//! Logo and in-page anchor navigation

use tracing::{debug, warn};
use crate::page::{ElementId, Page, ScrollBehavior};
use crate::utils::errors::Result;

/// Where a click should take the viewport
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NavigationTarget {
    /// Logo click: back to the top with a clean URL
    Top,
    /// In-page anchor with a resolved target offset
    Section { top: f64 },
    /// Anchor whose target does not exist
    Missing,
}

/// Classify a click; `None` when it is not a navigation click
pub fn navigation_target(page: &Page, target: ElementId, header_height: f64) -> Result<Option<NavigationTarget>> {
    let doc = &page.document;

    if doc.closest(target, ".logo, .footer-logo")?.is_some() {
        return Ok(Some(NavigationTarget::Top));
    }

    let Some(anchor) = doc.closest(target, r##"a[href^="#"]"##)? else {
        return Ok(None);
    };
    let href = doc.attribute(anchor, "href").unwrap_or("#");
    let id = href.trim_start_matches('#');
    if id.is_empty() {
        return Ok(Some(NavigationTarget::Missing));
    }

    match doc.get_element_by_id(id).and_then(|section| doc.element(section)) {
        Some(section) => Ok(Some(NavigationTarget::Section {
            top: section.offset_top - header_height,
        })),
        None => {
            warn!(href = href, "Anchor target not found");
            Ok(Some(NavigationTarget::Missing))
        }
    }
}

/// Apply a navigation: update history and scroll smoothly
pub fn navigate(page: &mut Page, target: NavigationTarget) {
    match target {
        NavigationTarget::Top => {
            page.window.location.clear_fragment();
            page.window.scroll_to(0.0, ScrollBehavior::Smooth);
            debug!("Scrolled to top");
        }
        NavigationTarget::Section { top } => {
            page.window.scroll_to(top, ScrollBehavior::Smooth);
            debug!(top = top, "Scrolled to section");
        }
        NavigationTarget::Missing => {}
    }
}
