//! Landing page markup
//!
//! Builds the static document the localizer and the interaction layer
//! operate on: header and navigation, hero, feature cards, supported
//! models, download cards, usage steps, about section and footer. Text is
//! the English source copy; layout offsets are coarse and only drive
//! scrolling and viewport intersection.

use crate::utils::errors::Result;
use super::document::{Document, ElementId};

const FEATURES: [&str; 6] = [
    "sideByComparison",
    "batchQA",
    "dragDrop",
    "responsive",
    "shortcuts",
    "customization",
];

const MODELS: [&str; 4] = ["ChatGPT", "Claude", "Gemini", "DeepSeek"];

/// (browser key, display browser, store name, store url)
const BROWSERS: [(&str, &str, &str, &str); 3] = [
    ("chrome", "Chrome", "Chrome Web Store", "https://chromewebstore.google.com/detail/multillm"),
    ("edge", "Edge", "Edge Add-ons", "https://microsoftedge.microsoft.com/addons/detail/multillm"),
    ("firefox", "Firefox", "Firefox Add-ons", "https://addons.mozilla.org/firefox/addon/multillm"),
];

const STATS: [&str; 4] = ["models", "browsers", "languages", "more"];

struct Builder {
    doc: Document,
    cursor: f64,
}

impl Builder {
    fn el(&mut self, parent: ElementId, tag: &str, class: Option<&str>) -> Result<ElementId> {
        let id = self.doc.create_element(tag);
        if let Some(class) = class {
            self.doc.set_attribute(id, "class", class)?;
        }
        self.doc.append_child(parent, id)?;
        Ok(id)
    }

    fn text(&mut self, parent: ElementId, tag: &str, key: &str, text: &str) -> Result<ElementId> {
        let id = self.el(parent, tag, None)?;
        self.doc.set_attribute(id, "data-i18n", key)?;
        self.doc.set_text(id, text)?;
        Ok(id)
    }

    fn link(&mut self, parent: ElementId, href: &str, key: &str, text: &str) -> Result<ElementId> {
        let id = self.text(parent, "a", key, text)?;
        self.doc.set_attribute(id, "href", href)?;
        Ok(id)
    }

    /// Place a block at the cursor and move the cursor past it
    fn place(&mut self, id: ElementId, height: f64) -> Result<()> {
        self.doc.set_layout(id, self.cursor, height)?;
        self.cursor += height;
        Ok(())
    }

    fn section(&mut self, id: &str, class: &str) -> Result<ElementId> {
        let body = self.doc.body();
        let section = self.el(body, "section", Some(class))?;
        self.doc.set_attribute(section, "id", id)?;
        self.doc.set_layout(section, self.cursor, 0.0)?;
        Ok(section)
    }

    fn close_section(&mut self, section: ElementId) -> Result<()> {
        let top = self.doc.element(section).map(|e| e.offset_top).unwrap_or(0.0);
        self.doc.set_layout(section, top, self.cursor - top)
    }
}

/// Build the landing page document
pub fn landing_document() -> Result<Document> {
    let mut b = Builder { doc: Document::new(), cursor: 0.0 };
    let head = b.doc.head();
    let body = b.doc.body();

    b.doc.title = "Multi⁺LLM - Compare AI answers side by side".to_string();
    let meta = b.el(head, "meta", None)?;
    b.doc.set_attribute(meta, "name", "description")?;
    b.doc.set_attribute(meta, "content", "")?;

    // Header and navigation
    let header = b.el(body, "header", Some("header"))?;
    b.place(header, 60.0)?;
    let nav = b.el(header, "nav", Some("nav"))?;
    let logo = b.el(nav, "a", Some("logo"))?;
    b.doc.set_attribute(logo, "href", "#")?;
    b.doc.set_text(logo, "Multi⁺LLM")?;
    let links = b.el(nav, "ul", Some("nav-links"))?;
    for (href, key, text) in [
        ("#features", "nav.features", "Features"),
        ("#download", "nav.download", "Download"),
        ("#how-to-use", "nav.howToUse", "How to Use"),
        ("#about", "nav.about", "About"),
    ] {
        let item = b.el(links, "li", None)?;
        b.link(item, href, key, text)?;
    }
    let hamburger = b.el(nav, "div", Some("hamburger"))?;
    b.doc.set_attribute(hamburger, "id", "hamburger")?;
    for _ in 0..3 {
        b.el(hamburger, "span", None)?;
    }

    // Hero
    let hero = b.section("hero", "hero")?;
    b.text(hero, "h1", "hero.title", "Multi⁺LLM")?;
    b.text(hero, "p", "hero.subtitle", "Compare AI answers side by side")?;
    b.text(hero, "p", "hero.description", "Ask once and read every model's answer in a single view.")?;
    let cta = b.link(hero, "#download", "hero.downloadNow", "Download Now")?;
    b.doc.set_attribute(cta, "class", "btn btn-primary")?;
    let more = b.link(hero, "#features", "hero.learnMore", "Learn More")?;
    b.doc.set_attribute(more, "class", "btn btn-secondary")?;
    let preview = b.el(hero, "img", Some("hero-image lazy"))?;
    b.doc.set_attribute(preview, "data-src", "images/preview.png")?;
    b.doc.set_attribute(preview, "alt", "Multi⁺LLM preview")?;
    b.place(preview, 540.0)?;
    b.close_section(hero)?;

    // Features
    let features = b.section("features", "features")?;
    b.text(features, "h2", "features.title", "Features")?;
    b.cursor += 120.0;
    for feature in FEATURES {
        let card = b.el(features, "div", Some("feature-card"))?;
        b.text(card, "h3", &format!("features.{}.title", feature), feature)?;
        b.text(card, "p", &format!("features.{}.description", feature), feature)?;
        b.place(card, 260.0)?;
    }
    b.close_section(features)?;

    // Supported models
    let models = b.section("models", "models")?;
    b.text(models, "h2", "models.title", "Supported Models")?;
    for model in MODELS {
        let item = b.el(models, "div", Some("model-item"))?;
        let logo = b.el(item, "img", Some("lazy"))?;
        b.doc.set_attribute(logo, "data-src", &format!("images/models/{}.svg", model.to_lowercase()))?;
        b.doc.set_attribute(logo, "alt", model)?;
        b.doc.set_layout(logo, b.cursor, 64.0)?;
        let name = b.el(item, "span", None)?;
        b.doc.set_text(name, model)?;
        b.place(item, 120.0)?;
    }
    b.text(models, "p", "models.note", "More models are added regularly.")?;
    b.close_section(models)?;

    // Download cards
    let download = b.section("download", "download")?;
    b.text(download, "h2", "download.title", "Download")?;
    b.text(download, "p", "download.description", "Available for all major browsers.")?;
    b.cursor += 160.0;
    for (key, browser, store_name, store_url) in BROWSERS {
        let card = b.el(download, "div", Some("download-card"))?;
        b.text(card, "h3", &format!("download.{}.title", key), browser)?;
        b.text(card, "p", &format!("download.{}.description", key), browser)?;
        let button = b.el(card, "a", Some("download-btn"))?;
        b.doc.set_attribute(button, "data-i18n", &format!("download.{}.button", key))?;
        b.doc.set_attribute(button, "data-download-browser", browser)?;
        b.doc.set_attribute(button, "data-store", store_name)?;
        b.doc.set_attribute(button, "href", store_url)?;
        let label = b.el(button, "span", None)?;
        b.doc.set_text(label, &format!("Add to {}", browser))?;
        let store = b.el(button, "small", None)?;
        b.doc.set_text(store, store_name)?;
        b.place(card, 320.0)?;
    }
    b.close_section(download)?;

    // Usage steps
    let usage = b.section("how-to-use", "how-to-use")?;
    b.text(usage, "h2", "howToUse.title", "How to Use")?;
    b.cursor += 120.0;
    for step in 1..=4 {
        let card = b.el(usage, "div", Some("step"))?;
        b.text(card, "h3", &format!("howToUse.step{}.title", step), &format!("Step {}", step))?;
        b.text(card, "p", &format!("howToUse.step{}.description", step), "")?;
        b.place(card, 200.0)?;
    }
    b.close_section(usage)?;

    // About
    let about = b.section("about", "about")?;
    b.text(about, "h2", "about.title", "About")?;
    b.text(about, "p", "about.description1", "")?;
    b.text(about, "p", "about.description2", "")?;
    b.text(about, "p", "about.builtWith", "Built with")?;
    let stats = b.el(about, "div", Some("stats"))?;
    for stat in STATS {
        let item = b.el(stats, "div", Some("stat"))?;
        b.text(item, "span", &format!("about.stats.{}", stat), stat)?;
    }
    b.place(stats, 480.0)?;
    b.close_section(about)?;

    // Footer
    let footer = b.el(body, "footer", Some("footer"))?;
    b.place(footer, 200.0)?;
    let footer_logo = b.el(footer, "a", Some("footer-logo"))?;
    b.doc.set_attribute(footer_logo, "href", "#")?;
    b.doc.set_text(footer_logo, "Multi⁺LLM")?;
    let footer_links = b.el(footer, "div", Some("footer-links"))?;
    b.link(footer_links, "https://github.com/multillm/multillm", "footer.github", "GitHub")?;
    b.link(footer_links, "privacy.html", "footer.privacy", "Privacy")?;
    b.link(footer_links, "mailto:support@multillm.example", "footer.support", "Support")?;

    Ok(b.doc)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_landing_document_structure() {
        let doc = landing_document().unwrap();
        assert_eq!(doc.query_selector_all(".feature-card").unwrap().len(), 6);
        assert_eq!(doc.query_selector_all(".download-card").unwrap().len(), 3);
        assert_eq!(doc.query_selector_all(".step").unwrap().len(), 4);
        assert_eq!(doc.query_selector_all("img[data-src]").unwrap().len(), 5);
        assert!(doc.query_selector(r#"meta[name="description"]"#).unwrap().is_some());
        assert!(doc.get_element_by_id("hamburger").is_some());
    }

    #[test]
    fn test_sections_are_laid_out_in_order() {
        let doc = landing_document().unwrap();
        let top = |id: &str| {
            let el = doc.get_element_by_id(id).unwrap();
            doc.element(el).unwrap().offset_top
        };
        assert!(top("hero") < top("features"));
        assert!(top("features") < top("download"));
        assert!(top("download") < top("how-to-use"));
        assert!(top("how-to-use") < top("about"));
    }
}
