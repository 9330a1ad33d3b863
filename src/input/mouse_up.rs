//! Pointer up handling - finalize the active gesture.

use crate::canvas::Canvas;
use crate::input::{EventOutcome, InputState};
use crate::types::{ElementId, Point};
use tracing::debug;

impl Canvas {
    pub fn handle_pointer_up(&mut self) -> EventOutcome {
        let was_active = !self.input_state.is_idle();
        self.finish_gesture();
        self.refresh_cursor();

        if was_active {
            EventOutcome::Handled
        } else {
            EventOutcome::Ignored
        }
    }

    /// End whatever gesture is active and return to Idle.
    pub(crate) fn finish_gesture(&mut self) {
        match self.input_state.reset() {
            InputState::Drawing { element, origin } => self.finish_drawing(element, origin),
            InputState::Dragging { element, .. } => debug!(%element, "Drag finished"),
            InputState::DragPending { .. } | InputState::Idle => {}
        }
    }

    fn finish_drawing(&mut self, element_id: ElementId, origin: Point) {
        let size = self.settings.default_element_size;

        let finished = self.board.update(element_id, |el| {
            // A click without a drag gets a default-sized box centered on the anchor
            if el.is_degenerate() {
                el.width = size;
                el.height = size;
                el.x = origin.x - size / 2.0;
                el.y = origin.y - size / 2.0;
            }
            el.drawing = false;
            (el.width, el.height)
        });

        if let Some((width, height)) = finished {
            debug!(%element_id, width, height, "Drawing finished");
        }
    }
}
