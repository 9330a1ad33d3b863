//! Coordinate conversion between client (window) space and canvas-local space.

use crate::types::Point;

/// Where the canvas surface sits in client coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CanvasOrigin(pub Point);

impl CanvasOrigin {
    pub const ZERO: CanvasOrigin = CanvasOrigin(Point::new(0.0, 0.0));

    pub fn new(x: f32, y: f32) -> Self {
        Self(Point::new(x, y))
    }

    #[inline]
    pub fn offset(&self) -> Point {
        self.0
    }
}

pub struct CoordinateConverter;

impl CoordinateConverter {
    /// Convert a client position to canvas-local coordinates
    #[inline]
    pub fn client_to_canvas(client_pos: Point, origin: CanvasOrigin) -> Point {
        client_pos - origin.offset()
    }
}
