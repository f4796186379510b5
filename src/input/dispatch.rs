//! View mutation dispatch - resolve a gesture against the addressed layer
//! group and apply exactly one mutation followed by one redraw.

use crate::error::{ZoomPanError, ZoomPanResult};
use crate::geometry::{Point3, Vector3};
use crate::input::coords::CoordinateTransformer;
use crate::input::state::{Gesture, ScrollDirection};
use crate::view::{LayerDetails, LayerGroup, ViewAccess, ViewController, ViewLayer};
use tracing::{debug, trace};

/// A semantic view mutation, independent of the input that produced it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ViewIntent {
    /// Compose a volumetric translation
    Pan { offset: Vector3 },
    /// Compose a scale step around a fixed anchor
    Zoom { amount: f64, anchor: Point3 },
    /// Step the slice index along an axis
    Scroll {
        axis: usize,
        direction: ScrollDirection,
    },
}

/// Map a display-space gesture into a view intent using the active layer.
pub fn resolve_intent<L: ViewLayer>(layer: &L, gesture: Gesture, scroll_axis: usize) -> ViewIntent {
    let transformer = CoordinateTransformer::new(layer);
    match gesture {
        Gesture::Pan { dx, dy } => ViewIntent::Pan {
            offset: transformer.display_delta_to_volumetric(dx, dy),
        },
        Gesture::Pinch { amount, center } => {
            let plane = transformer.display_to_plane_point(center);
            ViewIntent::Zoom {
                amount,
                anchor: transformer.plane_point_to_volumetric_position(plane),
            }
        }
        Gesture::Wheel { step, position } => {
            let plane = transformer.display_to_plane_point(position);
            ViewIntent::Zoom {
                amount: step,
                anchor: transformer.plane_point_to_plane_position(plane),
            }
        }
        Gesture::Scroll { direction } => ViewIntent::Scroll {
            axis: scroll_axis,
            direction,
        },
    }
}

/// Apply an intent to a group. Returns false when nothing changed
/// (scrolling past either end of the axis).
pub fn apply_intent<G: LayerGroup>(group: &mut G, intent: ViewIntent) -> bool {
    match intent {
        ViewIntent::Pan { offset } => {
            group.add_translation(offset);
            true
        }
        ViewIntent::Zoom { amount, anchor } => {
            group.add_scale(amount, anchor);
            true
        }
        ViewIntent::Scroll { axis, direction } => {
            let Some(layer) = group.active_view_layer_mut() else {
                return false;
            };
            let controller = layer.view_controller_mut();
            if !controller.image_size().can_scroll(axis) {
                trace!("dispatch: axis {axis} cannot scroll");
                return false;
            }
            match direction {
                ScrollDirection::Forward => controller.increment_index(axis),
                ScrollDirection::Backward => controller.decrement_index(axis),
            }
        }
    }
}

/// Resolve and apply a gesture on the group named by `target`.
///
/// Returns the applied intent, or `None` when the intent was a no-op.
/// An unknown group is an error; no other group is ever touched.
pub fn dispatch<A: ViewAccess>(
    app: &mut A,
    target: &LayerDetails,
    gesture: Gesture,
    scroll_axis: usize,
) -> ZoomPanResult<Option<ViewIntent>> {
    let group_id = target.group_id.as_str();
    let group = app
        .layer_group_mut(group_id)
        .ok_or_else(|| ZoomPanError::group_not_found(group_id))?;

    let intent = {
        let layer = group
            .active_view_layer()
            .ok_or_else(|| ZoomPanError::no_active_layer(group_id))?;
        resolve_intent(layer, gesture, scroll_axis)
    };

    if !apply_intent(group, intent) {
        return Ok(None);
    }
    group.draw();
    debug!("dispatch: group {group_id} <- {intent:?}");
    Ok(Some(intent))
}
