//! Mobile navigation drawer

use tracing::{debug, info};
use crate::page::{Document, ElementId};
use crate::utils::errors::Result;

/// (href, i18n key, English label) of the drawer links
const MENU_LINKS: [(&str, &str, &str); 4] = [
    ("#features", "nav.features", "Features"),
    ("#download", "nav.download", "Download"),
    ("#how-to-use", "nav.howToUse", "How to Use"),
    ("#about", "nav.about", "About"),
];

/// Handles of the hamburger button and the drawer it opens
#[derive(Debug, Clone)]
pub struct MobileMenu {
    hamburger: ElementId,
    menu: ElementId,
    links: Vec<ElementId>,
}

impl MobileMenu {
    /// Build the drawer at the end of the body; `None` without a `#hamburger`
    pub fn create(doc: &mut Document) -> Result<Option<Self>> {
        let Some(hamburger) = doc.get_element_by_id("hamburger") else {
            debug!("No #hamburger element, skipping mobile menu");
            return Ok(None);
        };

        let menu = doc.create_element("div");
        doc.set_attribute(menu, "class", "mobile-menu")?;
        let content = doc.create_element("div");
        doc.set_attribute(content, "class", "mobile-menu-content")?;
        doc.append_child(menu, content)?;

        let mut links = Vec::with_capacity(MENU_LINKS.len());
        for (href, key, label) in MENU_LINKS {
            let link = doc.create_element("a");
            doc.set_attribute(link, "href", href)?;
            doc.set_attribute(link, "data-i18n", key)?;
            doc.set_text(link, label)?;
            doc.append_child(content, link)?;
            links.push(link);
        }

        let body = doc.body();
        doc.append_child(body, menu)?;
        info!(links = links.len(), "Mobile menu created");

        Ok(Some(Self { hamburger, menu, links }))
    }

    pub fn menu(&self) -> ElementId {
        self.menu
    }

    pub fn links(&self) -> &[ElementId] {
        &self.links
    }

    pub fn is_open(&self, doc: &Document) -> bool {
        doc.has_class(self.menu, "active")
    }

    /// Route a click; returns whether the click belonged to the menu
    pub fn handle_click(&self, doc: &mut Document, target: ElementId) -> Result<bool> {
        if doc.contains(self.hamburger, target) {
            let open = doc.toggle_class(self.hamburger, "active")?;
            doc.toggle_class(self.menu, "active")?;
            let body = doc.body();
            doc.toggle_class(body, "menu-open")?;
            debug!(open = open, "Mobile menu toggled");
            return Ok(true);
        }

        if self.links.iter().any(|link| doc.contains(*link, target)) {
            self.close(doc)?;
            return Ok(true);
        }

        Ok(false)
    }

    pub fn close(&self, doc: &mut Document) -> Result<()> {
        doc.remove_class(self.hamburger, "active")?;
        doc.remove_class(self.menu, "active")?;
        let body = doc.body();
        doc.remove_class(body, "menu-open")?;
        Ok(())
    }
}
