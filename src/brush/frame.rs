//! Surface-aligned basis used to lay the brush footprint onto a surface

use glam::{Quat, Vec2, Vec3};
use crate::math::{look_rotation, perpendicular_vector, rotate_about_axis};

/// Orthonormal (forward, right, normal) basis at a surface point.
///
/// Forward is the canonical perpendicular of the normal turned by the
/// brush's offset angle; right is forward turned a further 90 degrees.
/// Rebuilt every tick from the current probe normal.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TangentFrame {
    pub forward: Vec3,
    pub right: Vec3,
    pub normal: Vec3,
}

impl TangentFrame {
    /// Build a frame for `normal`. A zero normal falls back to world up.
    pub fn new(normal: Vec3, offset_rotate_angle: f32) -> Self {
        let normal = normal.try_normalize().unwrap_or(Vec3::Y);
        let forward = rotate_about_axis(perpendicular_vector(normal), normal, offset_rotate_angle);
        let right = rotate_about_axis(forward, normal, 90.0);
        Self { forward, right, normal }
    }

    /// Footprint offset (x along right, y along forward) to a world vector
    pub fn to_world(&self, offset: Vec2) -> Vec3 {
        self.right * offset.x + self.forward * offset.y
    }

    /// Rotation taking local +Z to forward and +Y to the normal
    pub fn rotation(&self) -> Quat {
        look_rotation(self.forward, self.normal)
    }
}
