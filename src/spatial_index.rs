//! Spatial Index Module
//!
//! R-tree over element bounding boxes. Point queries return every element
//! whose closed bounds contain the point; ordering is left to the caller.

use crate::types::{Element, ElementId};
use rstar::{AABB, RTree, RTreeObject};
use std::collections::HashMap;

/// Bounding box of one element as stored in the tree.
#[derive(Debug, Clone, Copy)]
pub struct SpatialEntry {
    pub element_id: ElementId,
    pub min_x: f32,
    pub min_y: f32,
    pub max_x: f32,
    pub max_y: f32,
}

impl SpatialEntry {
    pub fn from_element(element: &Element) -> Self {
        Self {
            element_id: element.id,
            min_x: element.x,
            min_y: element.y,
            max_x: element.x + element.width,
            max_y: element.y + element.height,
        }
    }

    #[inline]
    pub fn contains_point(&self, x: f32, y: f32) -> bool {
        x >= self.min_x && x <= self.max_x && y >= self.min_y && y <= self.max_y
    }
}

impl RTreeObject for SpatialEntry {
    type Envelope = AABB<[f32; 2]>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_corners([self.min_x, self.min_y], [self.max_x, self.max_y])
    }
}

impl PartialEq for SpatialEntry {
    fn eq(&self, other: &Self) -> bool {
        self.element_id == other.element_id
    }
}

/// R-tree index keyed by element id.
pub struct SpatialIndex {
    tree: RTree<SpatialEntry>,
    entries: HashMap<ElementId, SpatialEntry>,
}

impl SpatialIndex {
    pub fn new() -> Self {
        Self {
            tree: RTree::new(),
            entries: HashMap::new(),
        }
    }

    pub fn from_elements<'a, I>(elements: I) -> Self
    where
        I: IntoIterator<Item = &'a Element>,
    {
        let mut index = Self::new();
        index.rebuild(elements);
        index
    }

    /// Insert or replace the entry for `element`.
    pub fn upsert(&mut self, element: &Element) {
        if let Some(old_entry) = self.entries.remove(&element.id) {
            self.tree.remove(&old_entry);
        }

        let entry = SpatialEntry::from_element(element);
        self.tree.insert(entry);
        self.entries.insert(element.id, entry);
    }

    pub fn remove(&mut self, id: ElementId) -> bool {
        match self.entries.remove(&id) {
            Some(entry) => {
                self.tree.remove(&entry);
                true
            }
            None => false,
        }
    }

    /// Ids of all elements containing the point, in no particular order.
    pub fn query_point(&self, x: f32, y: f32) -> Vec<ElementId> {
        let point_envelope = AABB::from_point([x, y]);

        self.tree
            .locate_in_envelope_intersecting(&point_envelope)
            .filter(|entry| entry.contains_point(x, y))
            .map(|entry| entry.element_id)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn rebuild<'a, I>(&mut self, elements: I)
    where
        I: IntoIterator<Item = &'a Element>,
    {
        let entries: Vec<SpatialEntry> = elements.into_iter().map(SpatialEntry::from_element).collect();

        self.entries = entries.iter().map(|e| (e.element_id, *e)).collect();
        self.tree = RTree::bulk_load(entries);
    }
}

impl Default for SpatialIndex {
    fn default() -> Self {
        Self::new()
    }
}
