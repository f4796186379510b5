//! In-memory view model implementing the collaborator traits.
//!
//! Used by the replay binary and the tests. A group keeps the transform
//! deltas it receives (accumulated translation, multiplied scale, the anchor
//! of every scale step) and counts redraw requests; it does not render.

use crate::geometry::{PlaneOffset, PlanePoint, Point3, Vector3};
use crate::input::KeyEvent;
use crate::view::{ImageSize, LayerGroup, ViewAccess, ViewController, ViewLayer};
use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use tracing::{trace, warn};

/// Smallest group scale; zoom-out steps past it are clamped
pub const MIN_SCALE: f64 = 0.01;

/// Slice orientation of a view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Orientation {
    #[default]
    Axial,
    Coronal,
    Sagittal,
}

impl Orientation {
    /// Volume axis perpendicular to the displayed plane
    pub fn normal_axis(&self) -> usize {
        match self {
            Self::Axial => 2,
            Self::Coronal => 1,
            Self::Sagittal => 0,
        }
    }

    /// Place plane coordinates `(u, v)` at depth `w` into volume axes
    fn to_volume(self, u: f64, v: f64, w: f64) -> (f64, f64, f64) {
        match self {
            Self::Axial => (u, v, w),
            Self::Coronal => (u, w, v),
            Self::Sagittal => (w, u, v),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ControllerFields")]
pub struct MemoryViewController {
    #[serde(default)]
    pub orientation: Orientation,
    pub size: [usize; 3],
    #[serde(default)]
    pub index: [usize; 3],
}

/// Unchecked controller fields as they appear in a script
#[derive(Deserialize)]
struct ControllerFields {
    #[serde(default)]
    orientation: Orientation,
    size: [usize; 3],
    #[serde(default)]
    index: [usize; 3],
}

impl TryFrom<ControllerFields> for MemoryViewController {
    type Error = String;

    fn try_from(fields: ControllerFields) -> Result<Self, Self::Error> {
        for (axis, (&index, &size)) in fields.index.iter().zip(&fields.size).enumerate() {
            if index >= size {
                return Err(format!(
                    "index {index} out of range for axis {axis} of size {size}"
                ));
            }
        }
        Ok(Self {
            orientation: fields.orientation,
            size: fields.size,
            index: fields.index,
        })
    }
}

impl MemoryViewController {
    pub fn new(orientation: Orientation, size: [usize; 3]) -> Self {
        Self {
            orientation,
            size,
            index: [0; 3],
        }
    }

    pub fn with_index(mut self, index: [usize; 3]) -> Self {
        self.index = index;
        self
    }

    pub fn index(&self, axis: usize) -> Option<usize> {
        self.index.get(axis).copied()
    }

    fn depth(&self) -> f64 {
        self.index[self.orientation.normal_axis()] as f64
    }
}

impl ViewController for MemoryViewController {
    fn offset_3d_from_plane_offset(&self, offset: PlaneOffset) -> Vector3 {
        let (x, y, z) = self.orientation.to_volume(offset.x, offset.y, 0.0);
        Vector3::new(x, y, z)
    }

    fn position_from_plane_point(&self, point: PlanePoint) -> Point3 {
        let (x, y, z) = self.orientation.to_volume(point.x, point.y, self.depth());
        Point3::new(x, y, z)
    }

    fn plane_position_from_plane_point(&self, point: PlanePoint) -> Point3 {
        Point3::new(point.x, point.y, self.depth())
    }

    fn image_size(&self) -> ImageSize {
        ImageSize::new(self.size.to_vec())
    }

    fn increment_index(&mut self, axis: usize) -> bool {
        match (self.index.get_mut(axis), self.size.get(axis)) {
            (Some(index), Some(&size)) if index.checked_add(1).is_some_and(|next| next < size) => {
                *index += 1;
                true
            }
            _ => false,
        }
    }

    fn decrement_index(&mut self, axis: usize) -> bool {
        match self.index.get_mut(axis) {
            Some(index) if *index > 0 => {
                *index -= 1;
                true
            }
            _ => false,
        }
    }
}

fn one() -> f64 {
    1.0
}

/// Scales divide display deltas, so zero or negative values are rejected
fn positive_scale<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    let value = f64::deserialize(deserializer)?;
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(de::Error::custom(format!("scale must be positive, got {value}")))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemoryViewLayer {
    pub controller: MemoryViewController,
    /// Display units per plane unit at zoom 1
    #[serde(default = "one", deserialize_with = "positive_scale")]
    pub display_scale: f64,
    /// Zoom applied by the owning group
    #[serde(default = "one", deserialize_with = "positive_scale")]
    pub zoom: f64,
    /// Plane position shown at the display origin
    #[serde(default)]
    pub plane_origin: PlanePoint,
}

impl MemoryViewLayer {
    pub fn new(controller: MemoryViewController) -> Self {
        Self {
            controller,
            display_scale: 1.0,
            zoom: 1.0,
            plane_origin: PlanePoint::default(),
        }
    }

    pub fn with_display_scale(mut self, display_scale: f64) -> Self {
        self.display_scale = display_scale;
        self
    }

    pub fn with_plane_origin(mut self, origin: PlanePoint) -> Self {
        self.plane_origin = origin;
        self
    }

    fn units_per_plane(&self) -> f64 {
        self.display_scale * self.zoom
    }
}

impl ViewLayer for MemoryViewLayer {
    type Controller = MemoryViewController;

    fn view_controller(&self) -> &Self::Controller {
        &self.controller
    }

    fn view_controller_mut(&mut self) -> &mut Self::Controller {
        &mut self.controller
    }

    fn display_to_plane_scale(&self, dx: f64, dy: f64) -> PlaneOffset {
        let k = self.units_per_plane();
        PlaneOffset::new(dx / k, dy / k)
    }

    fn display_to_plane_pos(&self, x: f64, y: f64) -> PlanePoint {
        let k = self.units_per_plane();
        PlanePoint::new(self.plane_origin.x + x / k, self.plane_origin.y + y / k)
    }
}

/// One `add_scale` call as received by a group.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScaleStep {
    pub amount: f64,
    pub anchor: Point3,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemoryLayerGroup {
    pub id: String,
    pub layers: Vec<MemoryViewLayer>,
    #[serde(default)]
    pub active_layer: Option<usize>,
    #[serde(default)]
    pub translation: Vector3,
    #[serde(default = "one", deserialize_with = "positive_scale")]
    pub scale: f64,
    #[serde(default)]
    pub scale_steps: Vec<ScaleStep>,
    #[serde(default)]
    pub draw_count: usize,
}

impl MemoryLayerGroup {
    /// Group with a single active layer.
    pub fn new(id: impl Into<String>, layer: MemoryViewLayer) -> Self {
        Self {
            id: id.into(),
            layers: vec![layer],
            active_layer: Some(0),
            translation: Vector3::default(),
            scale: 1.0,
            scale_steps: Vec::new(),
            draw_count: 0,
        }
    }

    /// Controller of the active layer, if any
    pub fn controller(&self) -> Option<&MemoryViewController> {
        self.active_view_layer().map(ViewLayer::view_controller)
    }
}

impl LayerGroup for MemoryLayerGroup {
    type Layer = MemoryViewLayer;

    fn active_view_layer(&self) -> Option<&Self::Layer> {
        self.active_layer.and_then(|i| self.layers.get(i))
    }

    fn active_view_layer_mut(&mut self) -> Option<&mut Self::Layer> {
        self.active_layer.and_then(|i| self.layers.get_mut(i))
    }

    fn add_translation(&mut self, offset: Vector3) {
        self.translation += offset;
    }

    fn add_scale(&mut self, amount: f64, anchor: Point3) {
        self.scale_steps.push(ScaleStep { amount, anchor });
        let scale = self.scale * (1.0 + amount);
        if !scale.is_finite() {
            warn!("group {}: scale step {amount} ignored", self.id);
            return;
        }
        if scale < MIN_SCALE {
            warn!("group {}: scale {scale} clamped to {MIN_SCALE}", self.id);
        }
        self.scale = scale.max(MIN_SCALE);
        for layer in &mut self.layers {
            layer.zoom = self.scale;
        }
    }

    fn draw(&mut self) {
        self.draw_count += 1;
        trace!("group {}: draw #{}", self.id, self.draw_count);
    }
}

/// Application stand-in: a set of groups plus the key events it received.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MemoryView {
    pub groups: Vec<MemoryLayerGroup>,
    #[serde(default)]
    pub key_events: Vec<KeyEvent>,
}

impl MemoryView {
    pub fn new(groups: Vec<MemoryLayerGroup>) -> Self {
        Self {
            groups,
            key_events: Vec::new(),
        }
    }

    pub fn group(&self, group_id: &str) -> Option<&MemoryLayerGroup> {
        self.groups.iter().find(|g| g.id == group_id)
    }
}

impl ViewAccess for MemoryView {
    type Group = MemoryLayerGroup;

    fn layer_group_mut(&mut self, group_id: &str) -> Option<&mut Self::Group> {
        self.groups.iter_mut().find(|g| g.id == group_id)
    }

    fn on_keydown(&mut self, event: &KeyEvent) {
        self.key_events.push(event.clone());
    }
}
