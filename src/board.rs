//! Board - the ordered element collection.
//!
//! Collection order is creation order; later elements stack on top. Every
//! mutation goes through the board so the hit-test index stays in sync.

use crate::hit_testing::HitTester;
use crate::types::{Element, ElementId, Point};
use tracing::debug;

pub struct Board {
    elements: Vec<Element>,
    next_id: u64,
    hit_tester: HitTester,
}

impl Board {
    pub fn new() -> Self {
        Self {
            elements: Vec::new(),
            next_id: 0,
            hit_tester: HitTester::new(),
        }
    }

    /// Build a board from existing elements. The id counter resumes after the
    /// largest id present so ids are never reused.
    pub fn from_elements(elements: Vec<Element>) -> Self {
        let next_id = elements.iter().map(|e| e.id.0 + 1).max().unwrap_or(0);
        let mut hit_tester = HitTester::new();
        hit_tester.rebuild(&elements);
        Self {
            elements,
            next_id,
            hit_tester,
        }
    }

    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    /// Append a zero-sized element being drawn from `origin`.
    pub fn add_drawing_element(&mut self, origin: Point) -> ElementId {
        let id = ElementId(self.next_id);
        self.next_id += 1;

        let element = Element::new_drawing(id, origin);
        self.hit_tester.track(&element);
        self.elements.push(element);
        debug!(%id, x = origin.x, y = origin.y, "Element created");
        id
    }

    pub fn get(&self, id: ElementId) -> Option<&Element> {
        self.elements.iter().find(|e| e.id == id)
    }

    pub fn contains(&self, id: ElementId) -> bool {
        self.get(id).is_some()
    }

    /// Mutate an element in place and re-index it. Returns `None` without
    /// calling `f` when the id is unknown.
    pub fn update<R>(&mut self, id: ElementId, f: impl FnOnce(&mut Element) -> R) -> Option<R> {
        let element = self.elements.iter_mut().find(|e| e.id == id)?;
        let result = f(element);
        self.hit_tester.track(element);
        Some(result)
    }

    pub fn remove(&mut self, id: ElementId) -> Option<Element> {
        let index = self.elements.iter().position(|e| e.id == id)?;
        let element = self.elements.remove(index);
        self.hit_tester.forget(id);
        debug!(%id, "Element removed");
        Some(element)
    }

    /// Topmost element under `point`.
    pub fn element_at(&self, point: Point) -> Option<ElementId> {
        self.hit_tester.hit_test(&self.elements, point)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
