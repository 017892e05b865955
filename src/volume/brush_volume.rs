//! World-space brush volume anchored at a surface probe

use glam::Vec3;
use crate::brush::{BrushConfiguration, BrushShape, TangentFrame};
use crate::math::Aabb;
use crate::surface::SurfaceProbe;
use super::containment::{point_in_convex_polygon, point_in_cylinder};

/// Brush volume placed in the world for one tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BrushVolume {
    /// Open ball around the probe point
    Sphere { center: Vec3, radius: f32 },
    /// Cylinder along the probe normal, `height` above and below the surface
    Cylinder { cap_a: Vec3, cap_b: Vec3, radius: f32 },
    /// Oriented box given by its 8 corners
    Box { corners: [Vec3; 8] },
}

impl BrushVolume {
    /// Build the volume for `config.shape` at `probe`.
    ///
    /// The box uses half-extents `(radius / 2, height, radius / 2)` along
    /// (forward, normal, right): the footprint is halved, the height is not.
    pub fn at(probe: &SurfaceProbe, config: &BrushConfiguration) -> Self {
        let center = probe.point();
        let normal = probe.normal();
        match config.shape {
            BrushShape::Sphere => BrushVolume::Sphere { center, radius: config.radius },
            BrushShape::Cylinder => BrushVolume::Cylinder {
                cap_a: center + normal * config.height,
                cap_b: center - normal * config.height,
                radius: config.radius,
            },
            BrushShape::Box => {
                let frame = TangentFrame::new(normal, config.offset_rotate_angle);
                let half = Vec3::new(config.radius / 2.0, config.height, config.radius / 2.0);
                BrushVolume::Box { corners: box_corners(center, &frame, half) }
            }
        }
    }

    pub fn contains(&self, point: Vec3) -> bool {
        match self {
            BrushVolume::Sphere { center, radius } => point.distance(*center) < *radius,
            BrushVolume::Cylinder { cap_a, cap_b, radius } => {
                point_in_cylinder(point, *cap_a, *cap_b, *radius)
            }
            BrushVolume::Box { corners } => point_in_convex_polygon(point, corners),
        }
    }

    /// World-space bounds that no contained point lies outside of, for
    /// culling before [`BrushVolume::contains`].
    ///
    /// `None` for the box: its face tolerance reaches past the corners by an
    /// amount that grows with the box's aspect ratio.
    pub fn culling_bounds(&self) -> Option<Aabb> {
        match self {
            BrushVolume::Sphere { center, radius } => {
                Some(Aabb::from_center_half_extent(*center, Vec3::splat(*radius)))
            }
            BrushVolume::Cylinder { cap_a, cap_b, radius } => {
                Some(Aabb::new(cap_a.min(*cap_b), cap_a.max(*cap_b)).inflated(*radius))
            }
            BrushVolume::Box { .. } => None,
        }
    }
}

/// Corners of the box centered at `center`, half-extents given as
/// (forward, normal, right)
fn box_corners(center: Vec3, frame: &TangentFrame, half: Vec3) -> [Vec3; 8] {
    let forward = frame.forward * half.x;
    let up = frame.normal * half.y;
    let right = frame.right * half.z;
    [
        center + forward + up + right,
        center + forward + up - right,
        center + forward - up + right,
        center + forward - up - right,
        center - forward + up + right,
        center - forward + up - right,
        center - forward - up + right,
        center - forward - up - right,
    ]
}
