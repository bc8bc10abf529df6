//! In-memory document tree
//!
//! An arena of elements addressed by [`ElementId`]. Removed elements leave a
//! tombstone so stale ids held by timers or observers fail softly with
//! [`LandingError::DetachedElement`] instead of aliasing a new node.

use std::collections::BTreeMap;
use crate::utils::errors::{LandingError, Result};
use super::selector::{Complex, Selector};

/// Handle to an element in a [`Document`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ElementId(usize);

impl ElementId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// A single element node
#[derive(Debug, Clone, Default)]
pub struct Element {
    pub tag: String,
    pub attributes: BTreeMap<String, String>,
    pub classes: Vec<String>,
    pub text: String,
    pub children: Vec<ElementId>,
    pub parent: Option<ElementId>,
    /// Layout position relative to the top of the document
    pub offset_top: f64,
    pub height: f64,
}

impl Element {
    fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_ascii_lowercase(),
            ..Default::default()
        }
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        if name == "class" {
            return None;
        }
        self.attributes.get(name).map(String::as_str)
    }
}

/// The page document: `html > (head, body)` plus the title
#[derive(Debug, Clone)]
pub struct Document {
    nodes: Vec<Option<Element>>,
    root: ElementId,
    head: ElementId,
    body: ElementId,
    pub title: String,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    /// Create an empty document with `html`, `head` and `body`
    pub fn new() -> Self {
        let mut doc = Self {
            nodes: vec![Some(Element::new("html"))],
            root: ElementId(0),
            head: ElementId(0),
            body: ElementId(0),
            title: String::new(),
        };
        let head = doc.create_element("head");
        let body = doc.create_element("body");
        doc.link(doc.root, head);
        doc.link(doc.root, body);
        doc.head = head;
        doc.body = body;
        doc
    }

    pub fn root(&self) -> ElementId {
        self.root
    }

    pub fn head(&self) -> ElementId {
        self.head
    }

    pub fn body(&self) -> ElementId {
        self.body
    }

    /// Create a detached element
    pub fn create_element(&mut self, tag: &str) -> ElementId {
        self.nodes.push(Some(Element::new(tag)));
        ElementId(self.nodes.len() - 1)
    }

    pub fn element(&self, id: ElementId) -> Option<&Element> {
        self.nodes.get(id.0).and_then(Option::as_ref)
    }

    fn element_mut(&mut self, id: ElementId) -> Result<&mut Element> {
        self.nodes
            .get_mut(id.0)
            .and_then(Option::as_mut)
            .ok_or(LandingError::DetachedElement(id.0))
    }

    /// True while the element exists and is connected to the root
    pub fn is_connected(&self, id: ElementId) -> bool {
        self.ancestors_inclusive(id).last() == Some(&self.root)
    }

    fn link(&mut self, parent: ElementId, child: ElementId) {
        if let Some(Some(node)) = self.nodes.get_mut(child.0) {
            node.parent = Some(parent);
        }
        if let Some(Some(node)) = self.nodes.get_mut(parent.0) {
            node.children.push(child);
        }
    }

    /// Append `child` as the last child of `parent`, moving it if attached elsewhere
    pub fn append_child(&mut self, parent: ElementId, child: ElementId) -> Result<()> {
        self.element_mut(parent)?;
        if self.ancestors_inclusive(parent).contains(&child) {
            return Err(LandingError::InvalidHierarchy(format!(
                "cannot append element {} inside itself",
                child.0
            )));
        }
        let old_parent = self.element_mut(child)?.parent.take();
        if let Some(old) = old_parent {
            if let Ok(node) = self.element_mut(old) {
                node.children.retain(|c| *c != child);
            }
        }
        self.link(parent, child);
        Ok(())
    }

    /// Remove an element and its subtree from the document
    pub fn remove(&mut self, id: ElementId) -> Result<()> {
        if id == self.root {
            return Err(LandingError::InvalidHierarchy("cannot remove the root element".to_string()));
        }
        let parent = self.element_mut(id)?.parent;
        if let Some(parent) = parent {
            if let Ok(node) = self.element_mut(parent) {
                node.children.retain(|c| *c != id);
            }
        }
        let mut stack = vec![id];
        while let Some(current) = stack.pop() {
            if let Some(node) = self.nodes.get_mut(current.0).and_then(Option::take) {
                stack.extend(node.children);
            }
        }
        Ok(())
    }

    /// Overwrite text content; like the DOM, this drops all children
    pub fn set_text(&mut self, id: ElementId, text: &str) -> Result<()> {
        let children = std::mem::take(&mut self.element_mut(id)?.children);
        for child in children {
            if let Ok(node) = self.element_mut(child) {
                node.parent = None;
            }
            self.remove(child).ok();
        }
        self.element_mut(id)?.text = text.to_string();
        Ok(())
    }

    /// Concatenated text of the element and its descendants
    pub fn text_content(&self, id: ElementId) -> String {
        let mut out = String::new();
        if let Some(node) = self.element(id) {
            out.push_str(&node.text);
            for child in &node.children {
                out.push_str(&self.text_content(*child));
            }
        }
        out
    }

    pub fn set_attribute(&mut self, id: ElementId, name: &str, value: &str) -> Result<()> {
        let node = self.element_mut(id)?;
        if name == "class" {
            node.classes = value.split_whitespace().map(str::to_string).collect();
        } else {
            node.attributes.insert(name.to_string(), value.to_string());
        }
        Ok(())
    }

    pub fn remove_attribute(&mut self, id: ElementId, name: &str) -> Result<()> {
        self.element_mut(id)?.attributes.remove(name);
        Ok(())
    }

    pub fn attribute(&self, id: ElementId, name: &str) -> Option<&str> {
        self.element(id).and_then(|node| node.attribute(name))
    }

    pub fn has_class(&self, id: ElementId, class: &str) -> bool {
        self.element(id).is_some_and(|node| node.has_class(class))
    }

    pub fn add_class(&mut self, id: ElementId, class: &str) -> Result<()> {
        let node = self.element_mut(id)?;
        if !node.has_class(class) {
            node.classes.push(class.to_string());
        }
        Ok(())
    }

    pub fn remove_class(&mut self, id: ElementId, class: &str) -> Result<()> {
        self.element_mut(id)?.classes.retain(|c| c != class);
        Ok(())
    }

    /// Toggle a class, returning whether it is now present
    pub fn toggle_class(&mut self, id: ElementId, class: &str) -> Result<bool> {
        if self.has_class(id, class) {
            self.remove_class(id, class)?;
            Ok(false)
        } else {
            self.add_class(id, class)?;
            Ok(true)
        }
    }

    /// Set layout metrics used by scrolling and intersection checks
    pub fn set_layout(&mut self, id: ElementId, offset_top: f64, height: f64) -> Result<()> {
        let node = self.element_mut(id)?;
        node.offset_top = offset_top;
        node.height = height;
        Ok(())
    }

    /// The element followed by its ancestors up to the root
    pub fn ancestors_inclusive(&self, id: ElementId) -> Vec<ElementId> {
        let mut chain = Vec::new();
        let mut current = self.element(id).map(|_| id);
        while let Some(node_id) = current {
            chain.push(node_id);
            current = self.element(node_id).and_then(|node| node.parent);
        }
        chain
    }

    /// Whether `node` is `container` or lies inside it
    pub fn contains(&self, container: ElementId, node: ElementId) -> bool {
        self.ancestors_inclusive(node).contains(&container)
    }

    /// Nearest inclusive ancestor matching the selector
    pub fn closest(&self, id: ElementId, selector: &str) -> Result<Option<ElementId>> {
        let selector = Selector::parse(selector)?;
        Ok(self
            .ancestors_inclusive(id)
            .into_iter()
            .find(|candidate| self.matches_selector(*candidate, &selector)))
    }

    /// All connected elements matching the selector, in document order
    pub fn query_selector_all(&self, selector: &str) -> Result<Vec<ElementId>> {
        let selector = Selector::parse(selector)?;
        let mut found = Vec::new();
        self.walk(self.root, &mut |id| {
            if self.matches_selector(id, &selector) {
                found.push(id);
            }
        });
        Ok(found)
    }

    /// First connected element matching the selector
    pub fn query_selector(&self, selector: &str) -> Result<Option<ElementId>> {
        Ok(self.query_selector_all(selector)?.into_iter().next())
    }

    pub fn get_element_by_id(&self, id: &str) -> Option<ElementId> {
        let mut found = None;
        self.walk(self.root, &mut |candidate| {
            if found.is_none() && self.attribute(candidate, "id") == Some(id) {
                found = Some(candidate);
            }
        });
        found
    }

    fn walk(&self, id: ElementId, visit: &mut impl FnMut(ElementId)) {
        if let Some(node) = self.element(id) {
            visit(id);
            for child in &node.children {
                self.walk(*child, visit);
            }
        }
    }

    fn matches_selector(&self, id: ElementId, selector: &Selector) -> bool {
        selector.groups.iter().any(|complex| self.matches_complex(id, complex))
    }

    fn matches_compound_at(&self, id: ElementId, index: usize, complex: &Complex) -> bool {
        let Some(node) = self.element(id) else {
            return false;
        };
        complex.parts[index].matches(
            &node.tag,
            |name| node.attribute(name).map(str::to_string),
            |class| node.has_class(class),
        )
    }

    fn matches_complex(&self, id: ElementId, complex: &Complex) -> bool {
        let last = complex.parts.len() - 1;
        if !self.matches_compound_at(id, last, complex) {
            return false;
        }
        // Descendant combinators only, so greedy ancestor matching is exact
        let mut index = last;
        let mut ancestors = self.ancestors_inclusive(id).into_iter().skip(1);
        while index > 0 {
            match ancestors.next() {
                Some(ancestor) if self.matches_compound_at(ancestor, index - 1, complex) => index -= 1,
                Some(_) => {}
                None => return false,
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn sample() -> (Document, ElementId, ElementId) {
        let mut doc = Document::new();
        let button = doc.create_element("a");
        doc.set_attribute(button, "data-i18n", "download.chrome.button").unwrap();
        doc.set_attribute(button, "class", "download-btn primary").unwrap();
        let span = doc.create_element("span");
        doc.set_text(span, "Add to Chrome").unwrap();
        doc.append_child(button, span).unwrap();
        let body = doc.body();
        doc.append_child(body, button).unwrap();
        (doc, button, span)
    }

    #[test]
    fn test_descendant_query() {
        let (doc, _, span) = sample();
        let found = doc
            .query_selector_all(r#"[data-i18n="download.chrome.button"] span"#)
            .unwrap();
        assert_eq!(found, vec![span]);
        assert!(doc.query_selector(r#"[data-i18n="download.chrome.button"] small"#).unwrap().is_none());
    }

    #[test]
    fn test_set_text_replaces_children() {
        let (mut doc, button, span) = sample();
        doc.set_text(button, "plain").unwrap();
        assert_eq!(doc.text_content(button), "plain");
        assert!(doc.element(span).is_none());
    }

    #[test]
    fn test_class_list() {
        let (mut doc, button, _) = sample();
        assert!(doc.has_class(button, "primary"));
        assert!(!doc.toggle_class(button, "primary").unwrap());
        assert!(doc.toggle_class(button, "primary").unwrap());
        assert_eq!(doc.query_selector_all("a.download-btn.primary").unwrap(), vec![button]);
    }

    #[test]
    fn test_remove_detaches_subtree() {
        let (mut doc, button, span) = sample();
        doc.remove(button).unwrap();
        assert!(!doc.is_connected(button));
        assert!(doc.element(span).is_none());
        assert_matches!(doc.remove(button), Err(LandingError::DetachedElement(_)));
        assert_matches!(doc.add_class(span, "x"), Err(LandingError::DetachedElement(_)));
    }

    #[test]
    fn test_connection_follows_root() {
        let (mut doc, button, _) = sample();
        let loose = doc.create_element("div");
        assert!(!doc.is_connected(loose));
        assert!(doc.is_connected(doc.root()));
        doc.append_child(button, loose).unwrap();
        assert!(doc.is_connected(loose));
    }

    #[test]
    fn test_closest_and_contains() {
        let (doc, button, span) = sample();
        assert_eq!(doc.closest(span, ".download-btn").unwrap(), Some(button));
        assert!(doc.contains(button, span));
        assert!(!doc.contains(span, button));
        assert!(doc.is_connected(span));
    }
}
