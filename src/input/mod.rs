//! Pointer, touch, wheel and key input handling for the zoom/pan tool.
//!
//! ## Architecture
//!
//! ```text
//! event -> handler (by contact count) -> GestureState -> Gesture
//!       -> CoordinateTransformer -> ViewIntent -> LayerGroup mutation + draw
//! ```
//!
//! ## Modules
//!
//! - `events` - Normalized input event types
//! - `state` - Gesture state machine (the interaction session)
//! - `coords` - Display / plane / volumetric conversions
//! - `dispatch` - Intent resolution and view mutation
//! - `mouse_down` - Press handling (session start)
//! - `drag` - Move handling (pan, pinch, scroll)
//! - `mouse_up` - Release handling (session end)
//! - `transform` - Wheel zoom and key forwarding

pub mod coords;
pub mod dispatch;
mod drag;
mod events;
mod mouse_down;
mod mouse_up;
mod state;
mod transform;

pub use dispatch::ViewIntent;
pub use events::{InputEvent, KeyEvent, PointerEvent, TouchEvent, WheelEvent};
pub use state::{Gesture, GestureState, ScrollDirection};
