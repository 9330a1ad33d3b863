//! Host-agnostic input events.
//!
//! Hosts (the gpui view, tests, replay harnesses) translate their native
//! events into these before handing them to a surface.

use crate::types::Point;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PointerButton {
    /// Left mouse button, pen contact or primary touch
    Primary,
    Secondary,
    Middle,
    Other(u16),
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Modifiers {
    pub shift: bool,
    pub control: bool,
    pub alt: bool,
    pub platform: bool,
}

impl Modifiers {
    pub const NONE: Modifiers = Modifiers {
        shift: false,
        control: false,
        alt: false,
        platform: false,
    };

    pub const SHIFT: Modifiers = Modifiers {
        shift: true,
        control: false,
        alt: false,
        platform: false,
    };
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Key {
    Delete,
    Backspace,
    Other(String),
}

impl Key {
    /// Map a key name as reported by windowing toolkits ("delete", "backspace", ...).
    pub fn from_name(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "delete" | "del" => Key::Delete,
            "backspace" => Key::Backspace,
            _ => Key::Other(name.to_string()),
        }
    }

    pub fn is_delete(&self) -> bool {
        matches!(self, Key::Delete | Key::Backspace)
    }
}

/// One input event. Positions are in whatever space the producer uses;
/// surfaces convert them to canvas-local coordinates before dispatch.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum CanvasEvent {
    PointerDown {
        button: PointerButton,
        position: Point,
        modifiers: Modifiers,
    },
    PointerMove {
        position: Point,
        modifiers: Modifiers,
    },
    PointerUp,
    KeyDown {
        key: Key,
    },
}

impl CanvasEvent {
    /// Apply `f` to the event's position, leaving position-less events
    /// unchanged.
    pub fn map_position(self, f: impl Fn(Point) -> Point) -> Self {
        match self {
            CanvasEvent::PointerDown {
                button,
                position,
                modifiers,
            } => CanvasEvent::PointerDown {
                button,
                position: f(position),
                modifiers,
            },
            CanvasEvent::PointerMove { position, modifiers } => CanvasEvent::PointerMove {
                position: f(position),
                modifiers,
            },
            other => other,
        }
    }
}

/// Whether the controller consumed an event. A handled event means the
/// host's default action should be suppressed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EventOutcome {
    Handled,
    Ignored,
}

impl EventOutcome {
    pub fn is_handled(self) -> bool {
        self == EventOutcome::Handled
    }
}
