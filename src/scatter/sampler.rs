//! Footprint sampler: random offsets, yaw and scale for a new candidate set

use std::f32::consts::TAU;
use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use crate::brush::{BrushConfiguration, BrushShape, PrototypeId};
use super::candidate::PlacementCandidate;

/// Deterministic RNG for reproducible sampling
pub fn seeded_rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// Draws candidates for one brush configuration.
///
/// Randomness comes only from the injected `rng`; sampling never touches
/// the scene.
pub struct FootprintSampler<'a> {
    config: &'a BrushConfiguration,
}

impl<'a> FootprintSampler<'a> {
    pub fn new(config: &'a BrushConfiguration) -> Self {
        Self { config }
    }

    /// Up to `density` candidates, each with a prototype picked uniformly
    /// from `elements`. An empty list yields no candidates.
    pub fn sample<R>(&self, elements: &[PrototypeId], rng: &mut R) -> Vec<PlacementCandidate>
    where
        R: Rng + ?Sized,
    {
        if elements.is_empty() {
            return Vec::new();
        }

        (0..self.config.density)
            .map(|_| {
                let prototype = elements[rng.random_range(0..elements.len())];
                let offset = self.sample_offset(rng);
                let rotation = uniform(rng, 0.0, self.config.max_random_rotate_angle);
                let scale = uniform_inclusive(rng, self.config.min_scale, self.config.max_scale);
                PlacementCandidate::new(prototype, offset, rotation, scale)
            })
            .collect()
    }

    /// Random footprint offset for the configured shape.
    ///
    /// Sphere and Cylinder: area-uniform in a disc of `radius`.
    /// Box: uniform in a square of side `radius`.
    pub fn sample_offset<R>(&self, rng: &mut R) -> Vec2
    where
        R: Rng + ?Sized,
    {
        let radius = self.config.radius;
        match self.config.shape {
            BrushShape::Sphere | BrushShape::Cylinder => {
                // Area-uniform radius
                let r = radius * rng.random::<f32>().sqrt();
                let theta = TAU * rng.random::<f32>();
                Vec2::new(r * theta.cos(), r * theta.sin())
            }
            BrushShape::Box => {
                let half = radius / 2.0;
                Vec2::new(uniform(rng, -half, half), uniform(rng, -half, half))
            }
        }
    }
}

/// Uniform sample in `[low, high)`; returns `low` for an empty range
fn uniform<R: Rng + ?Sized>(rng: &mut R, low: f32, high: f32) -> f32 {
    if high <= low {
        return low;
    }
    low + (high - low) * rng.random::<f32>()
}

/// Uniform sample in `[low, high]`; returns `low` when `high <= low`
fn uniform_inclusive<R: Rng + ?Sized>(rng: &mut R, low: f32, high: f32) -> f32 {
    if high <= low || !low.is_finite() || !high.is_finite() {
        return low;
    }
    rng.random_range(low..=high)
}
