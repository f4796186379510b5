//! Serialized form of input events, as used by replay scripts.

use crate::helpers::{pointer, touch};
use zoompan::geometry::Point2D;
use zoompan::input::{InputEvent, KeyEvent};

#[test]
fn test_pointer_event_from_json() {
    let json = r#"{"type": "mouse_move", "position": {"x": 3.5, "y": -2.0}, "target": {"group_id": "main"}}"#;
    let event: InputEvent = serde_json::from_str(json).unwrap();
    assert_eq!(event, InputEvent::MouseMove(pointer(3.5, -2.0)));
}

#[test]
fn test_touch_event_from_json() {
    let json = r#"{
        "type": "touch_start",
        "touches": [{"x": 0.0, "y": 0.0}, {"x": 100.0, "y": 0.0}],
        "target": {"group_id": "main"}
    }"#;
    let event: InputEvent = serde_json::from_str(json).unwrap();
    assert_eq!(event, InputEvent::TouchStart(touch(&[(0.0, 0.0), (100.0, 0.0)])));
}

#[test]
fn test_key_event_defaults() {
    let json = r#"{"type": "key_down", "key": "ArrowUp"}"#;
    let event: InputEvent = serde_json::from_str(json).unwrap();
    assert_eq!(event, InputEvent::KeyDown(KeyEvent::new("ArrowUp")));
}

#[test]
fn test_touch_pair_requires_exactly_two() {
    assert_eq!(touch(&[(1.0, 1.0)]).pair(), None);
    assert_eq!(
        touch(&[(1.0, 1.0), (2.0, 2.0)]).pair(),
        Some((Point2D::new(1.0, 1.0), Point2D::new(2.0, 2.0)))
    );
    assert_eq!(touch(&[(1.0, 1.0), (2.0, 2.0), (3.0, 3.0)]).pair(), None);
}
