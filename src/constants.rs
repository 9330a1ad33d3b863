//! Application-wide constants.
//!
//! Centralizes magic numbers used by the interaction controller and renderer.

// ============================================================================
// Gesture Defaults
// ============================================================================

/// Pointer displacement (canvas units) a pending drag must exceed before it
/// starts moving the element
pub const DRAG_THRESHOLD: f32 = 3.0;

/// Side length given to elements created by a click without movement
pub const DEFAULT_ELEMENT_SIZE: f32 = 50.0;

// ============================================================================
// Element Styling
// ============================================================================
//
// Colors are packed RGBA (0xRRGGBBAA).

/// Outline width for every element state
pub const OUTLINE_WIDTH: f32 = 2.0;

/// Default outline color (gray)
pub const OUTLINE_DEFAULT: u32 = 0x808080ff;

/// Outline color while an element is being dragged (blue)
pub const OUTLINE_DRAGGING: u32 = 0x0000ffff;

/// Outline color for the selected element (orange)
pub const OUTLINE_SELECTED: u32 = 0xffa500ff;

/// Element fill, rgba(114,114,114,0.3)
pub const ELEMENT_FILL: u32 = 0x7272724d;

/// Canvas background (light gray)
pub const CANVAS_BACKGROUND: u32 = 0xe5e7ebff;

// ============================================================================
// Settings
// ============================================================================

/// Directory name under the platform config dir
pub const APP_DIR_NAME: &str = "sketchboard";

/// Settings file name
pub const SETTINGS_FILE_NAME: &str = "settings.json";
