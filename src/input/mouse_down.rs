//! Pointer down handling - selection, drag preparation, draw start.

use crate::canvas::Canvas;
use crate::input::{EventOutcome, Modifiers, PointerButton};
use crate::profile_scope;
use crate::types::Point;
use tracing::{debug, warn};

impl Canvas {
    pub fn handle_pointer_down(
        &mut self,
        button: PointerButton,
        position: Point,
        _modifiers: Modifiers,
    ) -> EventOutcome {
        profile_scope!("handle_pointer_down");

        if button != PointerButton::Primary {
            return EventOutcome::Ignored;
        }

        // A previous gesture never saw its pointer up; close it out first
        if !self.input_state.is_idle() {
            warn!(state = ?self.input_state, "Pointer down during active gesture, finishing it");
            self.finish_gesture();
        }

        let hit = self
            .board
            .element_at(position)
            .and_then(|id| self.board.get(id).map(|element| (id, element.origin())));

        if let Some((element_id, element_origin)) = hit {
            self.selected = Some(element_id);

            // Dragging only begins once the pointer passes the threshold
            let offset = position - element_origin;
            self.input_state.start_drag(element_id, offset, position);
            debug!(%element_id, "Selected element, drag pending");
        } else {
            self.selected = None;

            let element_id = self.board.add_drawing_element(position);
            self.input_state.start_drawing(element_id, position);
            debug!(%element_id, "Started drawing");
        }

        EventOutcome::Handled
    }
}
