//! Rays cast by the brush and the pointer

use crate::core::types::Vec3;
use super::aabb::Aabb;

/// Half-line from `origin` along `direction`
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    /// Unit length when built through [`Ray::new`]
    pub direction: Vec3,
}

impl Ray {
    /// Ray along `direction`, normalized. A zero direction is kept as is and
    /// hits nothing.
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self {
            origin,
            direction: direction.normalize_or_zero(),
        }
    }

    /// Point at distance `t` along the ray
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }

    /// Distance at which the ray enters `aabb`, if it does so within
    /// `max_distance`. A ray starting inside the box never enters it.
    pub fn entry_distance(&self, aabb: &Aabb, max_distance: f32) -> Option<f32> {
        let mut t_enter = f32::NEG_INFINITY;
        let mut t_exit = f32::INFINITY;
        for axis in 0..3 {
            let (origin, dir) = (self.origin[axis], self.direction[axis]);
            let (lo, hi) = (aabb.min[axis], aabb.max[axis]);
            if dir == 0.0 {
                if origin < lo || origin > hi {
                    return None;
                }
                continue;
            }
            let (t0, t1) = ((lo - origin) / dir, (hi - origin) / dir);
            t_enter = t_enter.max(t0.min(t1));
            t_exit = t_exit.min(t0.max(t1));
        }

        (t_enter <= t_exit && t_enter >= 0.0 && t_enter <= max_distance).then_some(t_enter)
    }
}
