//! Keyboard handling - deleting the selected element.

use crate::canvas::Canvas;
use crate::input::{EventOutcome, Key};
use tracing::debug;

impl Canvas {
    pub fn handle_key_down(&mut self, key: &Key) -> EventOutcome {
        if !key.is_delete() {
            return EventOutcome::Ignored;
        }

        let Some(selected) = self.selected.take() else {
            return EventOutcome::Ignored;
        };

        if self.board.remove(selected).is_none() {
            debug!(%selected, "Selected element already gone, clearing selection");
        }

        if self.hovered == Some(selected) {
            self.hovered = None;
            self.refresh_cursor();
        }

        // A drag on the removed element has nothing left to move
        if self.input_state.drag_element() == Some(selected) {
            self.input_state.reset();
        }

        EventOutcome::Handled
    }
}
