//! Brush configuration: shape, footprint size and placement limits

use serde::{Deserialize, Serialize};
use crate::core::{Error, Result};
use crate::math::normalize_angle_360;

/// Brush volume shape. Selects the footprint sampling domain and the
/// containment test used for erasing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BrushShape {
    Sphere,
    #[default]
    Cylinder,
    Box,
}

impl BrushShape {
    pub fn name(self) -> &'static str {
        match self {
            BrushShape::Sphere => "Sphere",
            BrushShape::Cylinder => "Cylinder",
            BrushShape::Box => "Box",
        }
    }
}

/// Bitmask of surface layers a raycast may hit
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LayerMask(pub u32);

impl LayerMask {
    pub const ALL: LayerMask = LayerMask(u32::MAX);
    pub const NONE: LayerMask = LayerMask(0);

    /// Mask containing a single layer (0..32)
    pub fn layer(layer: u8) -> Self {
        LayerMask(1u32.checked_shl(u32::from(layer)).unwrap_or(0))
    }

    pub fn contains(self, layer: u8) -> bool {
        self.0 & Self::layer(layer).0 != 0
    }
}

impl Default for LayerMask {
    fn default() -> Self {
        LayerMask::layer(0)
    }
}

/// Brush settings read by the sampler, projector and erase query.
///
/// Angles are in degrees. `height` is the half-depth of the brush along the
/// surface normal and also bounds the snapping raycast.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BrushConfiguration {
    pub shape: BrushShape,
    pub radius: f32,
    pub height: f32,
    /// Number of candidates sampled per configuration
    pub density: u32,
    pub min_scale: f32,
    pub max_scale: f32,
    /// Random yaw of each element is drawn from `[0, max_random_rotate_angle)`
    pub max_random_rotate_angle: f32,
    /// Surfaces steeper than this (angle from world up) reject placement
    pub max_slope_angle: f32,
    /// Rotates the footprint's tangent frame about the surface normal
    pub offset_rotate_angle: f32,
    pub layer_mask: LayerMask,
}

impl Default for BrushConfiguration {
    fn default() -> Self {
        Self {
            shape: BrushShape::Cylinder,
            radius: 5.0,
            height: 1.0,
            density: 10,
            min_scale: 1.0,
            max_scale: 1.0,
            max_random_rotate_angle: 360.0,
            max_slope_angle: 360.0,
            offset_rotate_angle: 0.0,
            layer_mask: LayerMask::default(),
        }
    }
}

impl BrushConfiguration {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_shape(mut self, shape: BrushShape) -> Self {
        self.shape = shape;
        self
    }

    pub fn with_radius(mut self, radius: f32) -> Self {
        self.radius = radius;
        self
    }

    pub fn with_height(mut self, height: f32) -> Self {
        self.height = height;
        self
    }

    pub fn with_density(mut self, density: u32) -> Self {
        self.density = density;
        self
    }

    pub fn with_scale_range(mut self, min_scale: f32, max_scale: f32) -> Self {
        self.min_scale = min_scale;
        self.max_scale = max_scale;
        self
    }

    pub fn with_max_slope_angle(mut self, degrees: f32) -> Self {
        self.max_slope_angle = degrees;
        self
    }

    pub fn with_offset_rotate_angle(mut self, degrees: f32) -> Self {
        self.offset_rotate_angle = degrees;
        self
    }

    /// Check every field against its allowed range
    pub fn validate(&self) -> Result<()> {
        let non_negative = [
            ("radius", self.radius),
            ("height", self.height),
            ("min_scale", self.min_scale),
            ("max_scale", self.max_scale),
        ];
        for (name, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(Error::InvalidConfig(format!("{name} must be finite and >= 0, got {value}")));
            }
        }
        if self.max_scale < self.min_scale {
            return Err(Error::InvalidConfig(format!(
                "max_scale {} is below min_scale {}", self.max_scale, self.min_scale
            )));
        }

        let angles = [
            ("max_random_rotate_angle", self.max_random_rotate_angle),
            ("max_slope_angle", self.max_slope_angle),
            ("offset_rotate_angle", self.offset_rotate_angle),
        ];
        for (name, value) in angles {
            if !(0.0..=360.0).contains(&value) {
                return Err(Error::InvalidConfig(format!("{name} must be within [0, 360], got {value}")));
            }
        }
        Ok(())
    }

    /// Copy with every field clamped into range.
    ///
    /// Non-finite lengths become 0. The offset angle wraps, the other angles
    /// clamp.
    pub fn sanitized(&self) -> Self {
        let length = |v: f32| if v.is_finite() { v.max(0.0) } else { 0.0 };
        let limit = |v: f32| if v.is_nan() { 0.0 } else { v.clamp(0.0, 360.0) };

        let min_scale = length(self.min_scale);
        let max_scale = length(self.max_scale).max(min_scale);
        let offset_rotate_angle = if self.offset_rotate_angle.is_finite() {
            normalize_angle_360(self.offset_rotate_angle)
        } else {
            0.0
        };

        Self {
            shape: self.shape,
            radius: length(self.radius),
            height: length(self.height),
            density: self.density,
            min_scale,
            max_scale,
            max_random_rotate_angle: limit(self.max_random_rotate_angle),
            max_slope_angle: limit(self.max_slope_angle),
            offset_rotate_angle,
            layer_mask: self.layer_mask,
        }
    }

    /// True if switching from `previous` to `self` invalidates sampled
    /// candidates. Slope, offset rotation and layer changes only affect
    /// projection and do not.
    pub fn resamples_from(&self, previous: &BrushConfiguration) -> bool {
        self.shape != previous.shape
            || self.radius != previous.radius
            || self.height != previous.height
            || self.density != previous.density
            || self.min_scale != previous.min_scale
            || self.max_scale != previous.max_scale
            || self.max_random_rotate_angle != previous.max_random_rotate_angle
    }

    /// Grow the radius by 10% or shrink it by 10%
    pub fn scale_radius(&mut self, grow: bool) {
        self.radius = (self.radius * step_factor(grow)).max(0.0);
    }

    /// Grow the height by 10% or shrink it by 10%
    pub fn scale_height(&mut self, grow: bool) {
        self.height = (self.height * step_factor(grow)).max(0.0);
    }

    /// Add `delta` candidates, never going below zero
    pub fn step_density(&mut self, delta: i32) {
        self.density = self.density.saturating_add_signed(delta);
    }

    /// Turn the footprint frame, wrapping into `[0, 360]`
    pub fn rotate_offset(&mut self, delta_degrees: f32) {
        self.offset_rotate_angle = normalize_angle_360(self.offset_rotate_angle + delta_degrees);
    }
}

fn step_factor(grow: bool) -> f32 {
    if grow { 1.1 } else { 0.9 }
}
