//! Axis-aligned bounds used to cull erase candidates

use crate::core::types::Vec3;

/// Closed axis-aligned box between `min` and `max`
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    pub fn from_center_half_extent(center: Vec3, half_extent: Vec3) -> Self {
        Self::new(center - half_extent, center + half_extent)
    }

    pub fn contains_point(&self, p: Vec3) -> bool {
        p.cmpge(self.min).all() && p.cmple(self.max).all()
    }

    /// Grow by `margin` on every side
    pub fn inflated(&self, margin: f32) -> Aabb {
        Aabb::new(self.min - Vec3::splat(margin), self.max + Vec3::splat(margin))
    }
}
