//! Canvas - the interaction controller.
//!
//! Owns the element collection and every piece of ephemeral interaction state
//! (selection, hover, gesture, cursor). All mutation happens through the
//! event handlers in `crate::input`; readers get immutable views.

use crate::board::Board;
use crate::error::SettingsResult;
use crate::input::{CanvasEvent, EventOutcome, InputState};
use crate::render::RenderInput;
use crate::settings::Settings;
use crate::types::{CursorStyle, Element, ElementId};

pub struct Canvas {
    pub(crate) board: Board,
    /// At most one selected element
    pub(crate) selected: Option<ElementId>,
    /// Element under the pointer while idle
    pub(crate) hovered: Option<ElementId>,
    /// Gesture state machine
    pub(crate) input_state: InputState,
    /// Canvas-level cursor, follows hover
    pub(crate) cursor: CursorStyle,
    pub(crate) settings: Settings,
}

impl Canvas {
    pub fn new(settings: Settings) -> Self {
        Self::with_board(Board::new(), settings)
    }

    /// Invalid settings fall back to defaults.
    pub fn with_board(board: Board, settings: Settings) -> Self {
        let settings = settings.validated_or_default();
        Self {
            board,
            selected: None,
            hovered: None,
            input_state: InputState::default(),
            cursor: CursorStyle::Default,
            settings,
        }
    }

    /// Route one event (already in canvas-local coordinates).
    pub fn handle_event(&mut self, event: &CanvasEvent) -> EventOutcome {
        match event {
            CanvasEvent::PointerDown {
                button,
                position,
                modifiers,
            } => self.handle_pointer_down(*button, *position, *modifiers),
            CanvasEvent::PointerMove { position, modifiers } => self.handle_pointer_move(*position, *modifiers),
            CanvasEvent::PointerUp => self.handle_pointer_up(),
            CanvasEvent::KeyDown { key } => self.handle_key_down(key),
        }
    }

    pub fn elements(&self) -> &[Element] {
        self.board.elements()
    }

    pub fn element(&self, id: ElementId) -> Option<&Element> {
        self.board.get(id)
    }

    pub fn selected(&self) -> Option<ElementId> {
        self.selected
    }

    pub fn hovered(&self) -> Option<ElementId> {
        self.hovered
    }

    /// True once a drag has crossed the threshold
    pub fn is_dragging(&self) -> bool {
        self.input_state.is_dragging()
    }

    pub fn is_drawing(&self) -> bool {
        self.input_state.is_drawing()
    }

    pub fn input_state(&self) -> &InputState {
        &self.input_state
    }

    pub fn cursor(&self) -> CursorStyle {
        self.cursor
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Replace the settings; invalid ones are rejected and the current
    /// settings stay in effect.
    pub fn set_settings(&mut self, settings: Settings) -> SettingsResult<()> {
        settings.validate()?;
        self.settings = settings;
        Ok(())
    }

    /// Everything the renderer needs for one frame.
    pub fn render_input(&self) -> RenderInput<'_> {
        RenderInput {
            elements: self.board.elements(),
            selected: self.selected,
            hovered: self.hovered,
            dragging: self.is_dragging(),
        }
    }

    pub(crate) fn refresh_cursor(&mut self) {
        self.cursor = if self.hovered.is_some() {
            CursorStyle::Move
        } else {
            CursorStyle::Default
        };
    }
}

impl Default for Canvas {
    fn default() -> Self {
        Self::new(Settings::default())
    }
}
