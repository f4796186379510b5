//! Collaborator interfaces consumed by the controller.
//!
//! The controller never owns view geometry. It reads the current state of the
//! addressed layer group through these traits and writes deltas back through
//! them. The application hands a [`ViewAccess`] implementation to the
//! controller at construction.

use crate::geometry::{PlaneOffset, PlanePoint, Point3, Vector3};
use crate::input::KeyEvent;
use serde::{Deserialize, Serialize};

/// Layer context of an input event: which group (and layer) it landed on.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LayerDetails {
    pub group_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layer_id: Option<String>,
}

impl LayerDetails {
    pub fn group(group_id: impl Into<String>) -> Self {
        Self {
            group_id: group_id.into(),
            layer_id: None,
        }
    }
}

/// Number of positions along each axis of the displayed image.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ImageSize {
    pub dims: Vec<usize>,
}

impl ImageSize {
    pub fn new(dims: impl Into<Vec<usize>>) -> Self {
        Self { dims: dims.into() }
    }

    /// True when the axis holds more than one position.
    pub fn can_scroll(&self, axis: usize) -> bool {
        self.dims.get(axis).is_some_and(|&n| n > 1)
    }
}

/// Application-level access: layer group lookup and key forwarding.
pub trait ViewAccess {
    type Group: LayerGroup;

    /// Returns `None` when no group carries this id.
    fn layer_group_mut(&mut self, group_id: &str) -> Option<&mut Self::Group>;

    /// Generic key handling path of the application.
    fn on_keydown(&mut self, event: &KeyEvent);
}

/// A set of layers sharing one transform and one slice index per axis.
pub trait LayerGroup {
    type Layer: ViewLayer;

    fn active_view_layer(&self) -> Option<&Self::Layer>;

    fn active_view_layer_mut(&mut self) -> Option<&mut Self::Layer>;

    /// Compose a volumetric translation with the current one.
    fn add_translation(&mut self, offset: Vector3);

    /// Compose a relative scale step, keeping `anchor` fixed on screen.
    fn add_scale(&mut self, amount: f64, anchor: Point3);

    /// Request a redraw. Fire-and-forget.
    fn draw(&mut self);
}

/// A displayed layer: owns the display-to-plane mapping.
pub trait ViewLayer {
    type Controller: ViewController;

    fn view_controller(&self) -> &Self::Controller;

    fn view_controller_mut(&mut self) -> &mut Self::Controller;

    /// Scale a display delta into a plane delta. Independent of origin.
    fn display_to_plane_scale(&self, dx: f64, dy: f64) -> PlaneOffset;

    /// Map an absolute display position into the plane.
    fn display_to_plane_pos(&self, x: f64, y: f64) -> PlanePoint;
}

/// Orientation-aware access to the displayed volume.
pub trait ViewController {
    fn offset_3d_from_plane_offset(&self, offset: PlaneOffset) -> Vector3;

    fn position_from_plane_point(&self, point: PlanePoint) -> Point3;

    fn plane_position_from_plane_point(&self, point: PlanePoint) -> Point3;

    fn image_size(&self) -> ImageSize;

    /// Step the index along `axis`. Returns false at the last position.
    fn increment_index(&mut self, axis: usize) -> bool;

    /// Step the index back along `axis`. Returns false at the first position.
    fn decrement_index(&mut self, axis: usize) -> bool;
}
