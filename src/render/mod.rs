//! Rendering - element state to visual primitives.
//!
//! - `elements` - the pure element renderer used by every host
//! - `view` - gpui window host (only with the `gui` feature)

mod elements;
#[cfg(feature = "gui")]
pub mod view;

pub use elements::{Color, ElementPrimitive, Outline, OutlineStyle, RenderInput, VisualState, render_elements};
