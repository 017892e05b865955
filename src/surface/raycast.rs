//! Raycast capability injected into the projector, plus simple surfaces
//!
//! The painter never walks scene geometry itself. Callers hand it anything
//! implementing [`Raycaster`]: their physics query, a closure, or one of the
//! reference surfaces below.

use glam::Vec3;
use crate::brush::LayerMask;
use crate::math::{Aabb, Plane, Ray};
use super::probe::RayHit;

/// Directional ray query against the caller's surfaces
pub trait Raycaster {
    /// Nearest hit along `ray` within `max_distance`, considering only
    /// surfaces on a layer in `layer_mask`
    fn cast_ray(&self, ray: &Ray, max_distance: f32, layer_mask: LayerMask) -> Option<RayHit>;
}

impl<F> Raycaster for F
where
    F: Fn(&Ray, f32, LayerMask) -> Option<RayHit>,
{
    fn cast_ray(&self, ray: &Ray, max_distance: f32, layer_mask: LayerMask) -> Option<RayHit> {
        self(ray, max_distance, layer_mask)
    }
}

/// Group of surfaces answering with the nearest hit among them
#[derive(Clone, Debug, Default)]
pub struct SurfaceSet<T> {
    pub surfaces: Vec<T>,
}

impl<T> SurfaceSet<T> {
    pub fn new(surfaces: Vec<T>) -> Self {
        Self { surfaces }
    }

    pub fn push(&mut self, surface: T) {
        self.surfaces.push(surface);
    }
}

impl<T: Raycaster> Raycaster for SurfaceSet<T> {
    fn cast_ray(&self, ray: &Ray, max_distance: f32, layer_mask: LayerMask) -> Option<RayHit> {
        self.surfaces
            .iter()
            .filter_map(|surface| surface.cast_ray(ray, max_distance, layer_mask))
            .min_by(|a, b| a.distance.total_cmp(&b.distance))
    }
}

/// One-sided infinite plane: only rays arriving against the normal hit
impl Raycaster for Plane {
    fn cast_ray(&self, ray: &Ray, max_distance: f32, _layer_mask: LayerMask) -> Option<RayHit> {
        let denom = self.normal.dot(ray.direction);
        if denom >= 0.0 {
            return None;
        }
        let t = -self.distance_to_point(ray.origin) / denom;
        if !(0.0..=max_distance).contains(&t) {
            return None;
        }
        Some(RayHit {
            point: ray.at(t),
            normal: self.normal,
            distance: t,
        })
    }
}

/// Solid box: rays starting inside do not hit
impl Raycaster for Aabb {
    fn cast_ray(&self, ray: &Ray, max_distance: f32, _layer_mask: LayerMask) -> Option<RayHit> {
        let distance = ray.entry_distance(self, max_distance)?;
        let point = ray.at(distance);
        Some(RayHit {
            point,
            normal: aabb_face_normal(self, point),
            distance,
        })
    }
}

/// Outward normal of the face of `aabb` closest to `point`
fn aabb_face_normal(aabb: &Aabb, point: Vec3) -> Vec3 {
    let faces = [
        (point.x - aabb.min.x, -Vec3::X),
        (aabb.max.x - point.x, Vec3::X),
        (point.y - aabb.min.y, -Vec3::Y),
        (aabb.max.y - point.y, Vec3::Y),
        (point.z - aabb.min.z, -Vec3::Z),
        (aabb.max.z - point.z, Vec3::Z),
    ];
    faces
        .into_iter()
        .min_by(|a, b| a.0.abs().total_cmp(&b.0.abs()))
        .map(|(_, normal)| normal)
        .unwrap_or(Vec3::Y)
}

/// Surface that only answers rays whose mask includes its layer
#[derive(Clone, Debug)]
pub struct LayeredSurface<T> {
    pub surface: T,
    pub layer: u8,
}

impl<T> LayeredSurface<T> {
    pub fn new(surface: T, layer: u8) -> Self {
        Self { surface, layer }
    }
}

impl<T: Raycaster> Raycaster for LayeredSurface<T> {
    fn cast_ray(&self, ray: &Ray, max_distance: f32, layer_mask: LayerMask) -> Option<RayHit> {
        if !layer_mask.contains(self.layer) {
            return None;
        }
        self.surface.cast_ray(ray, max_distance, layer_mask)
    }
}
