//! Language switcher widget
//!
//! A globe button showing the active language plus a dropdown with one
//! option per supported language, appended to the navigation links.

use tracing::{debug, info};
use crate::page::{Document, ElementId};
use crate::utils::errors::Result;
use super::languages::SupportedLanguages;

/// What a click means for the switcher
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SwitcherAction {
    /// The button was clicked: dropdown visibility flipped
    Toggled { open: bool },
    /// An option was clicked
    Select(String),
    /// A click outside the widget closed the dropdown
    Closed,
    /// Nothing to do
    Ignored,
}

impl SwitcherAction {
    /// Clicks handled inside the widget do not propagate to the page
    pub fn stops_propagation(&self) -> bool {
        matches!(self, SwitcherAction::Toggled { .. } | SwitcherAction::Select(_))
    }
}

/// Element handles of a mounted switcher
#[derive(Debug, Clone)]
pub struct LanguageSwitcher {
    root: ElementId,
    button: ElementId,
    label: ElementId,
    dropdown: ElementId,
    options: Vec<(ElementId, String)>,
}

impl LanguageSwitcher {
    /// Mount the widget inside `.nav-links`; `None` when the page has no navigation
    pub fn mount(doc: &mut Document, languages: &SupportedLanguages, active: &str) -> Result<Option<Self>> {
        let Some(nav) = doc.query_selector(".nav-links")? else {
            debug!("No .nav-links element, skipping language switcher");
            return Ok(None);
        };

        let root = doc.create_element("div");
        doc.set_attribute(root, "class", "language-switcher")?;

        let button = doc.create_element("button");
        doc.set_attribute(button, "class", "lang-btn")?;
        doc.set_attribute(button, "id", "langBtn")?;
        doc.append_child(root, button)?;

        let icon = doc.create_element("span");
        doc.set_attribute(icon, "class", "lang-icon")?;
        doc.set_text(icon, "🌐")?;
        doc.append_child(button, icon)?;

        let label = doc.create_element("span");
        doc.set_attribute(label, "class", "lang-text")?;
        doc.set_text(label, languages.display_name(active).unwrap_or(active))?;
        doc.append_child(button, label)?;

        let arrow = doc.create_element("span");
        doc.set_attribute(arrow, "class", "lang-arrow")?;
        doc.set_text(arrow, "▼")?;
        doc.append_child(button, arrow)?;

        let dropdown = doc.create_element("div");
        doc.set_attribute(dropdown, "class", "lang-dropdown")?;
        doc.set_attribute(dropdown, "id", "langDropdown")?;
        doc.append_child(root, dropdown)?;

        let mut options = Vec::with_capacity(languages.len());
        for (code, name) in languages.iter() {
            let option = doc.create_element("div");
            doc.set_attribute(option, "class", "lang-option")?;
            doc.set_attribute(option, "data-lang", code)?;
            doc.set_text(option, name)?;
            if code == active {
                doc.add_class(option, "active")?;
            }
            doc.append_child(dropdown, option)?;
            options.push((option, code.to_string()));
        }

        doc.append_child(nav, root)?;
        info!(active = active, options = options.len(), "Language switcher created");

        Ok(Some(Self { root, button, label, dropdown, options }))
    }

    pub fn root(&self) -> ElementId {
        self.root
    }

    pub fn button(&self) -> ElementId {
        self.button
    }

    pub fn dropdown(&self) -> ElementId {
        self.dropdown
    }

    /// The option element for a language code
    pub fn option(&self, code: &str) -> Option<ElementId> {
        self.options
            .iter()
            .find(|(_, c)| c == code)
            .map(|(id, _)| *id)
    }

    pub fn is_open(&self, doc: &Document) -> bool {
        doc.has_class(self.dropdown, "show")
    }

    /// Route a click anywhere on the page
    pub fn handle_click(&self, doc: &mut Document, target: ElementId) -> Result<SwitcherAction> {
        if !doc.contains(self.root, target) {
            if self.is_open(doc) {
                doc.remove_class(self.dropdown, "show")?;
                return Ok(SwitcherAction::Closed);
            }
            return Ok(SwitcherAction::Ignored);
        }

        if let Some(option) = doc.closest(target, ".lang-option")? {
            if let Some(code) = doc.attribute(option, "data-lang") {
                return Ok(SwitcherAction::Select(code.to_string()));
            }
        }

        if doc.contains(self.button, target) {
            let open = doc.toggle_class(self.dropdown, "show")?;
            return Ok(SwitcherAction::Toggled { open });
        }

        Ok(SwitcherAction::Ignored)
    }

    /// Show the active language and highlight its option
    pub fn refresh(&self, doc: &mut Document, languages: &SupportedLanguages, active: &str) -> Result<()> {
        doc.set_text(self.label, languages.display_name(active).unwrap_or(active))?;
        for (option, code) in &self.options {
            if code == active {
                doc.add_class(*option, "active")?;
            } else {
                doc.remove_class(*option, "active")?;
            }
        }
        Ok(())
    }
}
