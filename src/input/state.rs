//! Input state machine - the single source of truth for the current gesture.
//!
//! ## State Transitions
//!
//! ```text
//! Idle        -> Drawing      (primary down on empty canvas)
//! Idle        -> DragPending  (primary down on an element)
//! DragPending -> Dragging     (pointer moved past the drag threshold)
//!
//! Any         -> Idle         (pointer up - finalizes the gesture)
//! ```

use crate::types::{ElementId, Point};

/// Current gesture. Holds every piece of transient gesture data so no
/// combination of loose flags can disagree.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum InputState {
    /// No gesture in progress
    #[default]
    Idle,

    /// Sizing a freshly created element
    Drawing {
        /// Element being drawn
        element: ElementId,
        /// Fixed anchor of the rectangle
        origin: Point,
    },

    /// Pointer is down on a selected element but has not moved far enough
    DragPending {
        element: ElementId,
        /// Pointer position minus element origin at gesture start
        offset: Point,
        /// Pointer position at gesture start
        start: Point,
    },

    /// Actively moving the selected element
    Dragging {
        element: ElementId,
        /// Pointer position minus element origin at gesture start
        offset: Point,
    },
}

impl InputState {
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    pub fn is_drawing(&self) -> bool {
        matches!(self, Self::Drawing { .. })
    }

    /// True only once the drag threshold has been crossed
    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging { .. })
    }

    /// True for both pending and active drags
    pub fn is_drag_gesture(&self) -> bool {
        matches!(self, Self::DragPending { .. } | Self::Dragging { .. })
    }

    /// Element being drawn, if drawing
    pub fn drawing_element(&self) -> Option<ElementId> {
        match self {
            Self::Drawing { element, .. } => Some(*element),
            _ => None,
        }
    }

    /// Element targeted by a pending or active drag
    pub fn drag_element(&self) -> Option<ElementId> {
        match self {
            Self::DragPending { element, .. } | Self::Dragging { element, .. } => Some(*element),
            _ => None,
        }
    }

    pub fn drag_offset(&self) -> Option<Point> {
        match self {
            Self::DragPending { offset, .. } | Self::Dragging { offset, .. } => Some(*offset),
            _ => None,
        }
    }

    /// Gesture start position, only meaningful before the threshold is crossed
    pub fn drag_start(&self) -> Option<Point> {
        match self {
            Self::DragPending { start, .. } => Some(*start),
            _ => None,
        }
    }

    pub fn start_drawing(&mut self, element: ElementId, origin: Point) {
        *self = Self::Drawing { element, origin };
    }

    pub fn start_drag(&mut self, element: ElementId, offset: Point, start: Point) {
        *self = Self::DragPending {
            element,
            offset,
            start,
        };
    }

    /// Promote a pending drag to an active one. No-op in any other state.
    pub fn activate_drag(&mut self) {
        if let Self::DragPending { element, offset, .. } = *self {
            *self = Self::Dragging { element, offset };
        }
    }

    /// Reset to Idle, returning the state that was active.
    pub fn reset(&mut self) -> InputState {
        std::mem::take(self)
    }
}
