//! Single-contact drag sessions.

use crate::helpers::{
    assert_untouched, default_tool, main_group, mouse_down, mouse_move, mouse_up, pointer, touch,
    TestViewBuilder,
};
use zoompan::geometry::Vector3;
use zoompan::memory::Orientation;

#[test]
fn test_pan_applies_incremental_deltas() {
    let mut tool = default_tool();
    for event in [
        mouse_down(10.0, 10.0),
        mouse_move(14.0, 10.0),
        mouse_move(14.0, 18.0),
        mouse_move(20.0, 20.0),
        mouse_up(20.0, 20.0),
    ] {
        tool.handle_event(&event).unwrap();
    }

    // Per-event plane offsets (2,0) + (0,4) + (3,1); a cumulative delta
    // from the first point would give (9,9).
    let group = main_group(&tool);
    assert_eq!(group.translation, Vector3::new(5.0, 5.0, 0.0));
    assert_eq!(group.draw_count, 3);
    assert!(tool.state().is_idle());
}

#[test]
fn test_pan_follows_view_orientation() {
    let mut tool = TestViewBuilder::new()
        .with_orientation(Orientation::Coronal)
        .with_display_scale(1.0)
        .build_tool();

    tool.handle_mouse_down(&pointer(0.0, 0.0)).unwrap();
    tool.handle_mouse_move(&pointer(3.0, 7.0)).unwrap();

    assert_eq!(main_group(&tool).translation, Vector3::new(3.0, 0.0, 7.0));
}

#[test]
fn test_move_without_press_does_nothing() {
    let mut tool = default_tool();
    tool.handle_mouse_move(&pointer(50.0, 50.0)).unwrap();
    tool.handle_touch_move(&touch(&[(50.0, 50.0)])).unwrap();

    assert_untouched(main_group(&tool));
}

#[test]
fn test_moves_after_release_do_nothing() {
    let mut tool = default_tool();
    tool.handle_event(&mouse_down(0.0, 0.0)).unwrap();
    tool.handle_event(&mouse_move(2.0, 0.0)).unwrap();
    tool.handle_event(&mouse_up(2.0, 0.0)).unwrap();
    tool.handle_event(&mouse_move(40.0, 40.0)).unwrap();

    let group = main_group(&tool);
    assert_eq!(group.translation, Vector3::new(1.0, 0.0, 0.0));
    assert_eq!(group.draw_count, 1);
}

#[test]
fn test_release_when_idle_is_idempotent() {
    let mut tool = default_tool();
    tool.handle_mouse_up(&pointer(0.0, 0.0)).unwrap();
    tool.handle_mouse_up(&pointer(0.0, 0.0)).unwrap();
    tool.handle_touch_end(&touch(&[])).unwrap();

    assert!(tool.state().is_idle());
    assert_untouched(main_group(&tool));
}

#[test]
fn test_one_finger_touch_drag_pans() {
    let mut tool = default_tool();
    tool.handle_touch_start(&touch(&[(100.0, 100.0)])).unwrap();
    tool.handle_touch_move(&touch(&[(90.0, 104.0)])).unwrap();
    tool.handle_touch_move(&touch(&[(80.0, 108.0)])).unwrap();
    tool.handle_touch_end(&touch(&[])).unwrap();

    let group = main_group(&tool);
    assert_eq!(group.translation, Vector3::new(-10.0, 4.0, 0.0));
    assert_eq!(group.draw_count, 2);
}

#[test]
fn test_one_finger_move_during_two_finger_session_pans_from_origin() {
    let mut tool = default_tool();
    tool.handle_touch_start(&touch(&[(10.0, 10.0), (60.0, 10.0)])).unwrap();
    tool.handle_touch_move(&touch(&[(14.0, 12.0)])).unwrap();

    assert_eq!(main_group(&tool).translation, Vector3::new(2.0, 1.0, 0.0));
}
