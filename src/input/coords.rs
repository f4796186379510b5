//! Coordinate conversion between display, plane and volumetric space.
//!
//! This module centralizes the conversions so the handlers never chain the
//! layer and view-controller calls themselves.

use crate::geometry::{PlaneOffset, PlanePoint, Point2D, Point3, Vector3};
use crate::view::{ViewController, ViewLayer};

/// Stateless converter bound to the active view layer of a group.
pub struct CoordinateTransformer<'a, L: ViewLayer> {
    layer: &'a L,
}

impl<'a, L: ViewLayer> CoordinateTransformer<'a, L> {
    #[inline]
    pub fn new(layer: &'a L) -> Self {
        Self { layer }
    }

    /// Convert a display position to a plane position
    #[inline]
    pub fn display_to_plane_point(&self, p: Point2D) -> PlanePoint {
        self.layer.display_to_plane_pos(p.x, p.y)
    }

    /// Convert a display delta to a plane delta (origin independent)
    #[inline]
    pub fn display_to_plane_offset(&self, dx: f64, dy: f64) -> PlaneOffset {
        self.layer.display_to_plane_scale(dx, dy)
    }

    /// Project a plane delta into the volume along the current orientation
    #[inline]
    pub fn plane_offset_to_volumetric_offset(&self, offset: PlaneOffset) -> Vector3 {
        self.layer.view_controller().offset_3d_from_plane_offset(offset)
    }

    /// Map a plane position to an absolute volumetric anchor
    #[inline]
    pub fn plane_point_to_volumetric_position(&self, point: PlanePoint) -> Point3 {
        self.layer.view_controller().position_from_plane_point(point)
    }

    /// Map a plane position to its 3D position in plane coordinates
    #[inline]
    pub fn plane_point_to_plane_position(&self, point: PlanePoint) -> Point3 {
        self.layer
            .view_controller()
            .plane_position_from_plane_point(point)
    }

    /// Display delta straight to a volumetric offset (pan)
    pub fn display_delta_to_volumetric(&self, dx: f64, dy: f64) -> Vector3 {
        self.plane_offset_to_volumetric_offset(self.display_to_plane_offset(dx, dy))
    }
}
