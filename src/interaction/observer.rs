//! Fire-once viewport observers
//!
//! Each observed element reports its first intersection with the viewport
//! exactly once and is then dropped from the watch list.

use std::collections::BTreeSet;
use crate::page::{Document, ElementId, Window};

/// Watches a set of elements for viewport intersection
#[derive(Debug, Clone, Default)]
pub struct ViewportObserver {
    /// Fraction of the element that must be visible
    threshold: f64,
    /// Pixels trimmed from the bottom of the viewport
    bottom_margin: f64,
    targets: BTreeSet<ElementId>,
}

impl ViewportObserver {
    pub fn new(threshold: f64, bottom_margin: f64) -> Self {
        Self {
            threshold,
            bottom_margin,
            targets: BTreeSet::new(),
        }
    }

    pub fn observe(&mut self, id: ElementId) {
        self.targets.insert(id);
    }

    pub fn unobserve(&mut self, id: ElementId) {
        self.targets.remove(&id);
    }

    pub fn is_observing(&self, id: ElementId) -> bool {
        self.targets.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    /// Remove and return every target now intersecting the viewport
    pub fn take_intersecting(&mut self, doc: &Document, window: &Window) -> Vec<ElementId> {
        let view_top = window.scroll_y;
        let view_bottom = window.scroll_y + window.inner_height - self.bottom_margin;

        self.targets.retain(|id| doc.is_connected(*id));
        let hits: Vec<ElementId> = self
            .targets
            .iter()
            .copied()
            .filter(|id| {
                doc.element(*id).is_some_and(|el| {
                    intersects(el.offset_top, el.height, view_top, view_bottom, self.threshold)
                })
            })
            .collect();

        for id in &hits {
            self.targets.remove(id);
        }
        hits
    }
}

fn intersects(top: f64, height: f64, view_top: f64, view_bottom: f64, threshold: f64) -> bool {
    if height <= 0.0 {
        return top >= view_top && top <= view_bottom;
    }
    let overlap = (top + height).min(view_bottom) - top.max(view_top);
    overlap > 0.0 && overlap / height >= threshold
}
