//! Hit testing - mapping a canvas point back to the element under it.
//!
//! `hit_test` is the reference definition: the topmost element (latest in
//! collection order) whose closed bounds contain the point. `HitTester` gives
//! the same answer using the R-tree for candidate lookup.

use crate::profile_scope;
use crate::spatial_index::SpatialIndex;
use crate::types::{Element, ElementId, Point};
use std::collections::HashSet;

/// Topmost element containing `point`, or `None` for empty canvas space.
pub fn hit_test(elements: &[Element], point: Point) -> Option<ElementId> {
    elements
        .iter()
        .rev()
        .find(|element| element.contains(point))
        .map(|element| element.id)
}

/// Index-accelerated hit testing. Must be kept in sync with the element list.
#[derive(Default)]
pub struct HitTester {
    index: SpatialIndex,
}

impl HitTester {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn track(&mut self, element: &Element) {
        self.index.upsert(element);
    }

    pub fn forget(&mut self, id: ElementId) {
        self.index.remove(id);
    }

    pub fn rebuild(&mut self, elements: &[Element]) {
        self.index.rebuild(elements);
    }

    /// Same contract as [`hit_test`].
    pub fn hit_test(&self, elements: &[Element], point: Point) -> Option<ElementId> {
        profile_scope!("hit_test");

        let candidates: HashSet<ElementId> = self.index.query_point(point.x, point.y).into_iter().collect();
        if candidates.is_empty() {
            return None;
        }

        // Check candidates in reverse creation order (front to back)
        elements
            .iter()
            .rev()
            .filter(|element| candidates.contains(&element.id))
            .find(|element| element.contains(point))
            .map(|element| element.id)
    }
}
