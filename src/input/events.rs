//! Normalized input events.
//!
//! The host translates its native mouse/touch/wheel/key events into these
//! types. Positional events carry the layer context they landed on.

use crate::geometry::Point2D;
use crate::view::LayerDetails;
use serde::{Deserialize, Serialize};

/// Single pointer event (mouse press, move, release, leave).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointerEvent {
    pub position: Point2D,
    pub target: LayerDetails,
}

impl PointerEvent {
    pub fn new(x: f64, y: f64, target: LayerDetails) -> Self {
        Self {
            position: Point2D::new(x, y),
            target,
        }
    }
}

/// Touch event with the contact points currently on the target.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TouchEvent {
    pub touches: Vec<Point2D>,
    pub target: LayerDetails,
}

impl TouchEvent {
    pub fn new(touches: impl Into<Vec<Point2D>>, target: LayerDetails) -> Self {
        Self {
            touches: touches.into(),
            target,
        }
    }

    /// Both contacts when exactly two are down.
    pub fn pair(&self) -> Option<(Point2D, Point2D)> {
        match self.touches.as_slice() {
            [a, b] => Some((*a, *b)),
            _ => None,
        }
    }
}

/// Mouse wheel event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WheelEvent {
    pub position: Point2D,
    pub delta_y: f64,
    pub target: LayerDetails,
}

/// Key press, forwarded untouched apart from the `context` tag.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct KeyEvent {
    pub key: String,
    #[serde(default)]
    pub ctrl: bool,
    #[serde(default)]
    pub shift: bool,
    #[serde(default)]
    pub alt: bool,
    /// Identity of the component that forwarded the event
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
}

impl KeyEvent {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            ..Default::default()
        }
    }
}

/// Every event kind the controller binds a behavior to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InputEvent {
    MouseDown(PointerEvent),
    MouseMove(PointerEvent),
    MouseUp(PointerEvent),
    MouseOut(PointerEvent),
    TouchStart(TouchEvent),
    TouchMove(TouchEvent),
    TouchEnd(TouchEvent),
    TouchCancel(TouchEvent),
    Wheel(WheelEvent),
    KeyDown(KeyEvent),
}
