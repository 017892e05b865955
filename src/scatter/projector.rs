//! Surface projector: snaps every candidate onto the surface under the brush

use glam::{Quat, Vec3};
use crate::brush::{BrushConfiguration, BrushShape, TangentFrame};
use crate::math::{angle_degrees, look_rotation, perpendicular_vector, Ray};
use crate::surface::{RayHit, Raycaster, SurfaceProbe};
use super::candidate::{CandidateSet, PlacementCandidate};

/// Re-projects a candidate set onto the surface every tick.
///
/// Each candidate casts one ray from `height` above the probe, offset along
/// the tangent frame, straight back down the probe normal for `2 * height`.
/// The result is a pure function of the candidates, probe and configuration.
pub struct SurfaceProjector<'a, C: Raycaster + ?Sized> {
    config: &'a BrushConfiguration,
    raycaster: &'a C,
}

impl<'a, C: Raycaster + ?Sized> SurfaceProjector<'a, C> {
    pub fn new(config: &'a BrushConfiguration, raycaster: &'a C) -> Self {
        Self { config, raycaster }
    }

    /// Update every candidate's transform and active flag, returning the
    /// number of active candidates.
    ///
    /// No probe deactivates everything. Erase mode deactivates everything
    /// without casting, leaving the last transforms in place.
    pub fn project(
        &self,
        candidates: &mut CandidateSet,
        probe: Option<&SurfaceProbe>,
        erase_active: bool,
    ) -> usize {
        let Some(probe) = probe.filter(|_| !erase_active) else {
            candidates.deactivate_all();
            return 0;
        };

        let frame = TangentFrame::new(probe.normal(), self.config.offset_rotate_angle);
        let top_center = probe.point() + probe.normal() * self.config.height;

        let mut active = 0;
        for candidate in candidates.candidates_mut() {
            let origin = top_center + frame.to_world(candidate.local_offset());
            let ray = Ray::new(origin, -probe.normal());
            match self.snap(&ray, probe) {
                Some(hit) => {
                    candidate.place(hit.point, element_rotation(&hit, candidate));
                    active += 1;
                }
                None => candidate.deactivate(),
            }
        }

        log::trace!("Projected {} / {} candidates", active, candidates.len());
        active
    }

    /// Cast one candidate ray and apply the acceptance rules
    fn snap(&self, ray: &Ray, probe: &SurfaceProbe) -> Option<RayHit> {
        let hit = self.raycaster.cast_ray(ray, 2.0 * self.config.height, self.config.layer_mask)?;

        if angle_degrees(Vec3::Y, hit.normal) >= self.config.max_slope_angle {
            return None;
        }

        // The disc footprint overshoots a ball on curved ground
        if self.config.shape == BrushShape::Sphere
            && hit.point.distance(probe.point()) > self.config.radius
        {
            return None;
        }

        Some(hit)
    }
}

/// Align with the hit surface, then apply the candidate's sampled yaw
fn element_rotation(hit: &RayHit, candidate: &PlacementCandidate) -> Quat {
    let surface = look_rotation(perpendicular_vector(hit.normal), hit.normal);
    surface * Quat::from_axis_angle(Vec3::Y, candidate.rotation_angle().to_radians())
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;
    use crate::brush::{LayerMask, PrototypeId};
    use crate::math::Plane;
    use crate::surface::LayeredSurface;

    fn ground() -> Plane {
        Plane::from_point_normal(Vec3::ZERO, Vec3::Y).unwrap()
    }

    fn ground_probe() -> SurfaceProbe {
        SurfaceProbe::new(Vec3::ZERO, Vec3::Y).unwrap()
    }

    fn set_with_offsets(offsets: &[Vec2]) -> CandidateSet {
        let candidates = offsets
            .iter()
            .map(|o| PlacementCandidate::new(PrototypeId(1), *o, 0.0, 2.0))
            .collect();
        CandidateSet::new(1, candidates)
    }

    fn close(a: Vec3, b: Vec3) -> bool {
        (a - b).length() < 1e-4
    }

    #[test]
    fn test_flat_ground_placement() {
        let cfg = BrushConfiguration::default().with_height(1.0);
        let surface = ground();
        let mut set = set_with_offsets(&[Vec2::new(1.0, 2.0), Vec2::ZERO]);

        let active = SurfaceProjector::new(&cfg, &surface).project(&mut set, Some(&ground_probe()), false);

        assert_eq!(active, 2);
        let c = &set.candidates()[0];
        assert!(c.is_active());
        // x along right (+X), y along forward (+Z) on flat ground
        assert!(close(c.position(), Vec3::new(1.0, 0.0, 2.0)));
        assert_eq!(c.world_scale(), Vec3::splat(2.0));
        assert!(close(c.rotation() * Vec3::Y, Vec3::Y));
    }

    #[test]
    fn test_offset_rotation_turns_footprint() {
        let cfg = BrushConfiguration::default().with_offset_rotate_angle(90.0);
        let surface = ground();
        let mut set = set_with_offsets(&[Vec2::new(0.0, 2.0)]);
        SurfaceProjector::new(&cfg, &surface).project(&mut set, Some(&ground_probe()), false);
        assert!(close(set.candidates()[0].position(), Vec3::new(2.0, 0.0, 0.0)));
    }

    #[test]
    fn test_no_probe_deactivates_all() {
        let cfg = BrushConfiguration::default();
        let surface = ground();
        let projector = SurfaceProjector::new(&cfg, &surface);
        let mut set = set_with_offsets(&[Vec2::ZERO, Vec2::X]);
        projector.project(&mut set, Some(&ground_probe()), false);
        assert_eq!(set.active_count(), 2);

        assert_eq!(projector.project(&mut set, None, false), 0);
        assert_eq!(set.active_count(), 0);
    }

    #[test]
    fn test_erase_mode_skips_raycasts() {
        let cfg = BrushConfiguration::default();
        let calls = std::cell::Cell::new(0);
        let counting = |ray: &Ray, max: f32, mask: LayerMask| {
            calls.set(calls.get() + 1);
            ground().cast_ray(ray, max, mask)
        };
        let projector = SurfaceProjector::new(&cfg, &counting);
        let mut set = set_with_offsets(&[Vec2::ZERO, Vec2::X]);

        projector.project(&mut set, Some(&ground_probe()), false);
        assert_eq!(calls.get(), 2);
        let before = set.candidates()[1].position();

        projector.project(&mut set, Some(&ground_probe()), true);
        assert_eq!(calls.get(), 2);
        assert_eq!(set.active_count(), 0);
        assert_eq!(set.candidates()[1].position(), before);
    }

    #[test]
    fn test_ray_length_is_twice_height() {
        // Probe claims the surface is at y = 0, actual ground is 2.5 below
        let cfg = BrushConfiguration::default().with_height(1.0);
        let surface = Plane::from_point_normal(Vec3::new(0.0, -2.5, 0.0), Vec3::Y).unwrap();
        let mut set = set_with_offsets(&[Vec2::ZERO]);
        SurfaceProjector::new(&cfg, &surface).project(&mut set, Some(&ground_probe()), false);
        assert!(!set.candidates()[0].is_active());

        let surface = Plane::from_point_normal(Vec3::new(0.0, -0.9, 0.0), Vec3::Y).unwrap();
        SurfaceProjector::new(&cfg, &surface).project(&mut set, Some(&ground_probe()), false);
        assert!(set.candidates()[0].is_active());
    }

    #[test]
    fn test_slope_limit() {
        let normal = Vec3::new(1.0, 1.0, 0.0).normalize();
        let slope = Plane::from_point_normal(Vec3::ZERO, normal).unwrap();
        let probe = SurfaceProbe::new(Vec3::ZERO, normal).unwrap();
        let mut set = set_with_offsets(&[Vec2::ZERO]);

        let steep_ok = BrushConfiguration::default().with_max_slope_angle(50.0);
        SurfaceProjector::new(&steep_ok, &slope).project(&mut set, Some(&probe), false);
        assert!(set.candidates()[0].is_active());

        let flat_only = BrushConfiguration::default().with_max_slope_angle(40.0);
        SurfaceProjector::new(&flat_only, &slope).project(&mut set, Some(&probe), false);
        assert!(!set.candidates()[0].is_active());
    }

    #[test]
    fn test_sphere_prunes_far_hits() {
        // Ground drops away past x = 1, so the hit lands far from the probe
        let cfg = BrushConfiguration::default()
            .with_shape(BrushShape::Sphere)
            .with_radius(3.0)
            .with_height(5.0);
        let step = |ray: &Ray, max: f32, mask: LayerMask| {
            let level = if ray.origin.x > 1.0 { -4.0 } else { 0.0 };
            Plane::from_point_normal(Vec3::new(0.0, level, 0.0), Vec3::Y)
                .and_then(|p| p.cast_ray(ray, max, mask))
        };
        let mut set = set_with_offsets(&[Vec2::new(0.5, 0.0), Vec2::new(2.0, 0.0)]);
        SurfaceProjector::new(&cfg, &step).project(&mut set, Some(&ground_probe()), false);
        assert!(set.candidates()[0].is_active());
        assert!(!set.candidates()[1].is_active());

        // The same footprint under a cylinder keeps both
        let cfg = cfg.with_shape(BrushShape::Cylinder);
        SurfaceProjector::new(&cfg, &step).project(&mut set, Some(&ground_probe()), false);
        assert_eq!(set.active_count(), 2);
    }

    #[test]
    fn test_layer_mask_respected() {
        let surface = LayeredSurface::new(ground(), 2);
        let mut set = set_with_offsets(&[Vec2::ZERO]);
        let cfg = BrushConfiguration::default();
        SurfaceProjector::new(&cfg, &surface).project(&mut set, Some(&ground_probe()), false);
        assert!(!set.candidates()[0].is_active());

        let mut cfg = BrushConfiguration::default();
        cfg.layer_mask = LayerMask::layer(2);
        SurfaceProjector::new(&cfg, &surface).project(&mut set, Some(&ground_probe()), false);
        assert!(set.candidates()[0].is_active());
    }

    #[test]
    fn test_sampled_yaw_applied() {
        let cfg = BrushConfiguration::default();
        let surface = ground();
        let candidates = vec![PlacementCandidate::new(PrototypeId(1), Vec2::ZERO, 90.0, 1.0)];
        let mut set = CandidateSet::new(1, candidates);
        SurfaceProjector::new(&cfg, &surface).project(&mut set, Some(&ground_probe()), false);
        // Surface frame on flat ground is identity; yaw 90 turns +Z to +X
        assert!(close(set.candidates()[0].rotation() * Vec3::Z, Vec3::X));
    }

    #[test]
    fn test_idempotent() {
        let cfg = BrushConfiguration::default().with_offset_rotate_angle(33.0);
        let surface = ground();
        let probe = SurfaceProbe::new(Vec3::new(3.0, 0.0, -1.0), Vec3::Y).unwrap();
        let projector = SurfaceProjector::new(&cfg, &surface);
        let mut set = set_with_offsets(&[Vec2::new(1.0, -2.0), Vec2::new(-0.5, 0.3)]);

        projector.project(&mut set, Some(&probe), false);
        let first = set.clone();
        projector.project(&mut set, Some(&probe), false);
        assert_eq!(first, set);
    }
}
