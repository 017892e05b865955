//! Infinite plane in Hessian normal form

use crate::core::types::Vec3;
use super::angle::GEOMETRY_EPSILON;

/// A plane defined by normal and distance from origin
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Plane {
    pub normal: Vec3,
    pub distance: f32,
}

impl Plane {
    pub fn new(normal: Vec3, distance: f32) -> Self {
        Self { normal, distance }
    }

    /// Plane through `point` facing `normal`. `None` if the normal is zero.
    pub fn from_point_normal(point: Vec3, normal: Vec3) -> Option<Self> {
        let normal = normal.try_normalize()?;
        Some(Self::new(normal, -normal.dot(point)))
    }

    /// Plane through three points, normal following the `a, b, c` winding.
    ///
    /// Returns `None` when the points are collinear or coincident. The test
    /// is relative to the edge lengths, so tiny triangles still get a plane.
    pub fn from_points(a: Vec3, b: Vec3, c: Vec3) -> Option<Self> {
        let (ab, ac) = (b - a, c - a);
        let cross = ab.cross(ac);
        if cross.length() <= f32::EPSILON * ab.length() * ac.length() {
            return None;
        }
        Self::from_point_normal(a, cross)
    }

    /// Signed distance from point to plane (positive = in front)
    pub fn distance_to_point(&self, point: Vec3) -> f32 {
        self.normal.dot(point) + self.distance
    }

    /// Orthogonal projection of `point` onto the plane
    pub fn closest_point(&self, point: Vec3) -> Vec3 {
        point - self.normal * self.distance_to_point(point)
    }

    /// True if `point` lies on the same side as `reference`, treating points
    /// within [`GEOMETRY_EPSILON`] of the plane as being on either side.
    pub fn same_side(&self, point: Vec3, reference: Vec3) -> bool {
        let d_point = self.distance_to_point(point);
        if d_point.abs() <= GEOMETRY_EPSILON {
            return true;
        }
        let d_reference = self.distance_to_point(reference);
        (d_point > 0.0) == (d_reference > 0.0)
    }
}
