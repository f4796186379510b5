//! Geometric primitives for the three coordinate spaces.
//!
//! - Display space: [`Point2D`] as reported by the input device.
//! - Plane space: [`PlanePoint`] / [`PlaneOffset`] in the displayed slice.
//! - Volumetric space: [`Point3`] / [`Vector3`] in the dataset.

use serde::{Deserialize, Serialize};
use std::ops::{Add, AddAssign, Sub};

/// A 2D point in display (device) coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point2D {
    pub x: f64,
    pub y: f64,
}

impl Point2D {
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point.
    #[inline]
    pub fn distance(&self, other: &Point2D) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }
}

impl Sub for Point2D {
    type Output = (f64, f64);

    fn sub(self, rhs: Self) -> Self::Output {
        (self.x - rhs.x, self.y - rhs.y)
    }
}

/// A segment between two contact points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Line {
    pub begin: Point2D,
    pub end: Point2D,
}

impl Line {
    #[inline]
    pub const fn new(begin: Point2D, end: Point2D) -> Self {
        Self { begin, end }
    }

    #[inline]
    pub fn length(&self) -> f64 {
        self.begin.distance(&self.end)
    }

    #[inline]
    pub fn midpoint(&self) -> Point2D {
        Point2D::new(
            (self.begin.x + self.end.x) / 2.0,
            (self.begin.y + self.end.y) / 2.0,
        )
    }
}

/// An absolute position in the plane of the displayed slice.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PlanePoint {
    pub x: f64,
    pub y: f64,
}

impl PlanePoint {
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A delta in the plane of the displayed slice.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PlaneOffset {
    pub x: f64,
    pub y: f64,
}

impl PlaneOffset {
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A delta in volumetric (dataset) space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vector3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vector3 {
    #[inline]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

impl Add for Vector3 {
    type Output = Vector3;

    fn add(self, rhs: Self) -> Self::Output {
        Vector3::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl AddAssign for Vector3 {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

/// An absolute position in volumetric (dataset) space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point3 {
    #[inline]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}
