//! Surface hits and the per-tick brush probe

use glam::Vec3;
use crate::brush::LayerMask;
use crate::math::Ray;
use super::raycast::Raycaster;

/// Result of a successful raycast
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RayHit {
    pub point: Vec3,
    /// Unit surface normal at `point`
    pub normal: Vec3,
    /// Distance from the ray origin
    pub distance: f32,
}

/// Surface point under the cursor that anchors the brush for one tick.
///
/// The normal is always unit length; construction fails for a zero normal.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SurfaceProbe {
    point: Vec3,
    normal: Vec3,
}

impl SurfaceProbe {
    /// Probe at `point` facing `normal`. `None` if the normal is zero or not finite.
    pub fn new(point: Vec3, normal: Vec3) -> Option<Self> {
        if !point.is_finite() {
            return None;
        }
        let normal = normal.try_normalize()?;
        Some(Self { point, normal })
    }

    /// Probe from an already-resolved hit
    pub fn from_hit(hit: &RayHit) -> Option<Self> {
        Self::new(hit.point, hit.normal)
    }

    /// Cast the pointer ray with unlimited range and probe whatever it hits
    pub fn resolve<C>(raycaster: &C, ray: &Ray, layer_mask: LayerMask) -> Option<Self>
    where
        C: Raycaster + ?Sized,
    {
        let hit = raycaster.cast_ray(ray, f32::INFINITY, layer_mask)?;
        Self::from_hit(&hit)
    }

    pub fn point(&self) -> Vec3 {
        self.point
    }

    pub fn normal(&self) -> Vec3 {
        self.normal
    }
}
