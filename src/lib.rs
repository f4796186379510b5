//! Gesture-driven view-transform controller for layered image views.
//!
//! Turns pointer, touch and wheel input into pan, zoom and slice-scroll
//! mutations of the addressed layer group. The host application supplies
//! view access through the traits in [`view`]; [`memory`] provides an
//! in-memory implementation.

pub mod constants;
pub mod error;
pub mod geometry;
pub mod input;
pub mod memory;
pub mod perf;
pub mod settings;
pub mod tool;
pub mod view;

pub use error::{ZoomPanError, ZoomPanResult};
pub use settings::ZoomPanSettings;
pub use tool::{ToolHelp, ZoomPan};
