//! Sketchboard - an interactive rectangle drawing surface.
//!
//! The crate is split into a host-agnostic interaction core and thin hosts:
//!
//! - `canvas` / `input` - the interaction controller and its gesture state machine
//! - `board` - ordered element collection with an R-tree backed hit tester
//! - `render` - pure element-to-primitive renderer (and the gpui view with `gui`)
//! - `surface` - scoped event subscription and client-to-canvas coordinate mapping
//! - `settings` - gesture tuning loaded from JSON

pub mod board;
pub mod canvas;
pub mod constants;
pub mod error;
pub mod hit_testing;
pub mod input;
pub mod perf;
pub mod render;
pub mod settings;
pub mod spatial_index;
pub mod surface;
pub mod types;

pub use canvas::Canvas;
pub use surface::CanvasSurface;
