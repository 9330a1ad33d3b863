//! Pointer and keyboard input handling for the canvas.
//!
//! ## Architecture
//!
//! The input system uses an explicit state machine (`InputState`) to track
//! the current gesture. Handlers are `impl Canvas` blocks split by event:
//!
//! - `state` - Input state machine enum and helper methods
//! - `events` - Host-agnostic event types
//! - `coords` - Client to canvas-local coordinate conversion
//! - `mouse_down` - Pointer down (selection, drag preparation, draw start)
//! - `drag` - Pointer move (hover, drag, draw sizing)
//! - `mouse_up` - Pointer up (finalize drawing, end drags)
//! - `keyboard` - Delete/Backspace removal of the selection

pub mod coords;
mod drag;
mod events;
mod keyboard;
mod mouse_down;
mod mouse_up;
mod state;

pub use coords::{CanvasOrigin, CoordinateConverter};
pub use events::{CanvasEvent, EventOutcome, Key, Modifiers, PointerButton};
pub use state::InputState;
