//! Two-contact sessions: pinch zoom and parallel slice scroll.

use crate::helpers::{
    assert_close, assert_untouched, default_tool, main_group, slice_index, touch, TestViewBuilder,
};
use zoompan::geometry::Point3;
use zoompan::ZoomPanSettings;

#[test]
fn test_pinch_zooms_at_contact_midpoint() {
    let mut tool = default_tool();
    tool.handle_touch_start(&touch(&[(0.0, 0.0), (100.0, 0.0)])).unwrap();
    tool.handle_touch_move(&touch(&[(0.0, 0.0), (108.0, 0.0)])).unwrap();

    let group = main_group(&tool);
    assert_eq!(group.scale_steps.len(), 1);
    let step = group.scale_steps[0];
    assert_close(step.amount, 0.04);
    // Midpoint (54, 0) -> plane (27, 0) -> axial slice 5
    assert_eq!(step.anchor, Point3::new(27.0, 0.0, 5.0));
    assert_eq!(group.draw_count, 1);
}

#[test]
fn test_pinch_in_gives_negative_zoom() {
    let mut tool = default_tool();
    tool.handle_touch_start(&touch(&[(0.0, 0.0), (100.0, 0.0)])).unwrap();
    tool.handle_touch_move(&touch(&[(0.0, 0.0), (92.0, 0.0)])).unwrap();

    let group = main_group(&tool);
    assert_eq!(group.scale_steps.len(), 1);
    assert_close(group.scale_steps[0].amount, -0.04);
}

#[test]
fn test_pinch_outside_quantization_band_is_dropped() {
    let mut tool = default_tool();
    tool.handle_touch_start(&touch(&[(0.0, 0.0), (100.0, 0.0)])).unwrap();
    // zoom 0.08 and 0.07: remainder above 0.05
    tool.handle_touch_move(&touch(&[(0.0, 0.0), (116.0, 0.0)])).unwrap();
    tool.handle_touch_move(&touch(&[(0.0, 0.0), (114.0, 0.0)])).unwrap();

    assert_untouched(main_group(&tool));
}

#[test]
fn test_pinch_is_measured_against_press_reference() {
    let mut tool = default_tool();
    tool.handle_touch_start(&touch(&[(0.0, 0.0), (100.0, 0.0)])).unwrap();
    tool.handle_touch_move(&touch(&[(0.0, 0.0), (104.0, 0.0)])).unwrap();
    tool.handle_touch_move(&touch(&[(0.0, 0.0), (108.0, 0.0)])).unwrap();

    let steps = &main_group(&tool).scale_steps;
    assert_eq!(steps.len(), 2);
    assert_close(steps[0].amount, 0.02);
    assert_close(steps[1].amount, 0.04);
}

#[test]
fn test_parallel_drag_scrolls_past_deadband() {
    let mut tool = default_tool();
    tool.handle_touch_start(&touch(&[(0.0, 0.0), (100.0, 0.0)])).unwrap();

    tool.handle_touch_move(&touch(&[(0.0, 10.0), (100.0, 10.0)])).unwrap();
    assert_eq!(slice_index(&tool), 5);

    tool.handle_touch_move(&touch(&[(0.0, 20.0), (100.0, 20.0)])).unwrap();
    assert_eq!(slice_index(&tool), 6);

    // Origin is not reset: every qualifying sample steps once
    tool.handle_touch_move(&touch(&[(0.0, 30.0), (100.0, 30.0)])).unwrap();
    assert_eq!(slice_index(&tool), 7);

    tool.handle_touch_move(&touch(&[(0.0, -15.0), (100.0, -15.0)])).unwrap();
    assert_eq!(slice_index(&tool), 6);

    let group = main_group(&tool);
    assert!(group.scale_steps.is_empty());
    assert_eq!(group.draw_count, 3);
}

#[test]
fn test_scroll_deadband_boundary() {
    let mut tool = default_tool();
    tool.handle_touch_start(&touch(&[(0.0, 0.0), (100.0, 0.0)])).unwrap();

    tool.handle_touch_move(&touch(&[(0.0, -14.9), (100.0, -14.9)])).unwrap();
    assert_eq!(slice_index(&tool), 5);

    tool.handle_touch_move(&touch(&[(0.0, -15.0), (100.0, -15.0)])).unwrap();
    assert_eq!(slice_index(&tool), 4);
}

#[test]
fn test_scroll_stops_at_axis_ends() {
    let mut tool = TestViewBuilder::new()
        .with_size([64, 64, 3])
        .with_index([0, 0, 2])
        .build_tool();
    tool.handle_touch_start(&touch(&[(0.0, 0.0), (100.0, 0.0)])).unwrap();
    tool.handle_touch_move(&touch(&[(0.0, 40.0), (100.0, 40.0)])).unwrap();

    assert_eq!(slice_index(&tool), 2);
    assert_untouched(main_group(&tool));
}

#[test]
fn test_scroll_on_single_slice_image_is_noop() {
    let mut tool = TestViewBuilder::new()
        .with_size([64, 64, 1])
        .with_index([0, 0, 0])
        .build_tool();
    tool.handle_touch_start(&touch(&[(0.0, 0.0), (100.0, 0.0)])).unwrap();
    tool.handle_touch_move(&touch(&[(0.0, 40.0), (100.0, 40.0)])).unwrap();
    tool.handle_touch_move(&touch(&[(0.0, -40.0), (100.0, -40.0)])).unwrap();

    assert_eq!(slice_index(&tool), 0);
    assert_untouched(main_group(&tool));
}

#[test]
fn test_custom_deadband_and_axis() {
    let view = TestViewBuilder::new().with_index([3, 0, 5]).build();
    let settings = ZoomPanSettings {
        scroll_deadband: 40.0,
        scroll_axis: 0,
        ..Default::default()
    };
    let mut tool = zoompan::ZoomPan::with_settings(view, settings);
    tool.handle_touch_start(&touch(&[(0.0, 0.0), (100.0, 0.0)])).unwrap();

    tool.handle_touch_move(&touch(&[(0.0, 30.0), (100.0, 30.0)])).unwrap();
    tool.handle_touch_move(&touch(&[(0.0, 45.0), (100.0, 45.0)])).unwrap();

    let controller = main_group(&tool).controller().unwrap();
    assert_eq!(controller.index(0), Some(4));
    assert_eq!(controller.index(2), Some(5));
}

#[test]
fn test_three_finger_touch_is_isolated() {
    let mut tool = default_tool();
    let three = [(0.0, 0.0), (50.0, 0.0), (100.0, 0.0)];
    tool.handle_touch_start(&touch(&three)).unwrap();
    tool.handle_touch_move(&touch(&[(0.0, 30.0), (50.0, 30.0), (100.0, 30.0)])).unwrap();
    tool.handle_touch_move(&touch(&[(0.0, 30.0), (100.0, 30.0)])).unwrap();
    tool.handle_touch_move(&touch(&[(10.0, 30.0)])).unwrap();

    assert!(tool.state().is_idle());
    assert_eq!(slice_index(&tool), 5);
    assert_untouched(main_group(&tool));
}

#[test]
fn test_two_finger_move_without_two_finger_session() {
    let mut tool = default_tool();
    tool.handle_touch_start(&touch(&[(0.0, 0.0)])).unwrap();
    tool.handle_touch_move(&touch(&[(0.0, 40.0), (100.0, 40.0)])).unwrap();

    assert_eq!(slice_index(&tool), 5);
    assert_untouched(main_group(&tool));
}
