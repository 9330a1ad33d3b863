//! Core types for the sketchboard canvas.
//!
//! Elements are axis-aligned rectangles stored in canvas-local coordinates.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Sub;

/// A position on the canvas or the screen, depending on context.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point
    pub fn distance_to(self, other: Point) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// Element identifier, assigned monotonically and never reused in a session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ElementId(pub u64);

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A rectangle on the canvas.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Element {
    pub id: ElementId,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    /// True only while an in-progress draw gesture is sizing this element
    pub drawing: bool,
}

impl Element {
    /// A zero-sized element anchored at `origin`, flagged as being drawn.
    pub fn new_drawing(id: ElementId, origin: Point) -> Self {
        Self {
            id,
            x: origin.x,
            y: origin.y,
            width: 0.0,
            height: 0.0,
            drawing: true,
        }
    }

    pub fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Closed-bounds containment test (edges count as inside).
    #[inline]
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x
            && point.x <= self.x + self.width
            && point.y >= self.y
            && point.y <= self.y + self.height
    }

    /// True when either extent is zero, e.g. after a click without movement.
    pub fn is_degenerate(&self) -> bool {
        self.width == 0.0 || self.height == 0.0
    }
}

/// Pointer cursor requested by the canvas or an element.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CursorStyle {
    #[default]
    Default,
    Move,
}

/// Geometry of a rectangle dragged from a fixed anchor to the pointer.
///
/// With `square` set, both extents take the larger absolute delta while each
/// axis keeps its own sign. Negative deltas flip the origin so the stored
/// extents are never negative.
pub fn normalized_rect(origin: Point, current: Point, square: bool) -> (Point, f32, f32) {
    let mut width = current.x - origin.x;
    let mut height = current.y - origin.y;

    if square {
        let side = width.abs().max(height.abs());
        width = if width < 0.0 { -side } else { side };
        height = if height < 0.0 { -side } else { side };
    }

    let x = if width < 0.0 { origin.x + width } else { origin.x };
    let y = if height < 0.0 { origin.y + height } else { origin.y };

    (Point::new(x, y), width.abs(), height.abs())
}
