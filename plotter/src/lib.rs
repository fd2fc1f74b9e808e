//! Interactive 2D plotting surface.
//!
//! This crate owns the parts of a plotting window that do not depend on a
//! windowing library: the data-to-pixel [`viewport`], the per-tick
//! [`engine::InteractionEngine`] that turns pointer and keyboard input into
//! pan, zoom and freehand strokes, and the per-frame [`screen::Screen`]
//! driver. Pixels are produced by whatever implements [`render::Backend`];
//! [`render::RecordingBackend`] keeps the commands for tests and headless use.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`viewport`] | Data/pixel transform, pan and zoom |
//! | [`input`] | Input snapshot, key bindings and the gesture state |
//! | [`engine`] | Per-tick interaction engine |
//! | [`stroke`] | Committed strokes with undo |
//! | [`render`] | Draw commands, the backend trait, the stroke render step |
//! | [`screen`] | Per-frame driver for plotted curves and circles |
//! | [`color`] | Color resolution and colormaps |
//! | [`animation`] | Frame time, iterated maps and orbit trails |
//! | [`config`] | Engine and screen configuration, env overrides |
//! | [`error`] | [`error::PlotError`] |
//! | [`consts`] | Shared defaults |

pub mod animation;
pub mod color;
pub mod config;
pub mod consts;
pub mod engine;
pub mod error;
pub mod input;
pub mod render;
pub mod screen;
pub mod stroke;
pub mod viewport;

pub use error::PlotError;
