//! Pointer move handling - hover tracking, dragging, and drawing.
//!
//! Move events arrive at pointer frequency, so each branch does at most one
//! hit test and one element update.

use crate::canvas::Canvas;
use crate::input::{EventOutcome, InputState, Modifiers};
use crate::profile_scope;
use crate::types::{Point, normalized_rect};
use tracing::{debug, trace};

impl Canvas {
    pub fn handle_pointer_move(&mut self, position: Point, modifiers: Modifiers) -> EventOutcome {
        profile_scope!("handle_pointer_move");

        // Hover is frozen while a rectangle is being drawn or dragged
        if !self.input_state.is_drawing() && !self.input_state.is_dragging() {
            self.hovered = self.board.element_at(position);
            self.refresh_cursor();
        }

        if self.input_state.is_drag_gesture() {
            self.update_drag(position);
            return EventOutcome::Handled;
        }

        if let InputState::Drawing { element, origin } = self.input_state {
            let square = self.settings.square_modifier.is_held(modifiers);
            let (top_left, width, height) = normalized_rect(origin, position, square);

            let updated = self.board.update(element, |el| {
                el.x = top_left.x;
                el.y = top_left.y;
                el.width = width;
                el.height = height;
            });
            if updated.is_none() {
                trace!(%element, "Drawn element no longer exists");
            }
            return EventOutcome::Handled;
        }

        EventOutcome::Ignored
    }

    fn update_drag(&mut self, position: Point) {
        let Some(element_id) = self.input_state.drag_element() else {
            return;
        };

        // Dragging requires the gesture's element to still be the selection
        if self.selected != Some(element_id) {
            return;
        }

        if let Some(start) = self.input_state.drag_start() {
            if start.distance_to(position) > self.settings.drag_threshold {
                self.input_state.activate_drag();
                debug!(%element_id, "Drag threshold crossed");
            }
        }

        if !self.input_state.is_dragging() {
            return;
        }

        let Some(offset) = self.input_state.drag_offset() else {
            return;
        };

        // Position is absolute from the pointer, never accumulated
        let updated = self.board.update(element_id, |el| {
            el.x = position.x - offset.x;
            el.y = position.y - offset.y;
            el.drawing = false;
        });
        if updated.is_none() {
            trace!(%element_id, "Dragged element no longer exists");
        }
    }
}
