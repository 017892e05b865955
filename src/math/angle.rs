//! Scalar helpers: angle wrapping and tolerant float comparison

/// Tolerance used by every "approximately zero" geometric test in the crate.
///
/// Absolute, so it assumes brush-scale geometry (roughly 0.01 to 1000 units).
pub const GEOMETRY_EPSILON: f32 = 1e-5;

/// Wrap an angle in degrees into `[0, 360]`.
///
/// Positive multiples of 360 map to 360 rather than 0, so a full turn
/// entered by the user stays a full turn.
pub fn normalize_angle_360(angle: f32) -> f32 {
    if (0.0..=360.0).contains(&angle) {
        return angle;
    }
    let wrapped = angle.rem_euclid(360.0);
    if wrapped == 0.0 && angle > 0.0 { 360.0 } else { wrapped }
}

/// True if `a` and `b` differ by less than [`GEOMETRY_EPSILON`].
#[inline]
pub fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() < GEOMETRY_EPSILON
}

#[inline]
pub fn approx_zero(value: f32) -> bool {
    approx_eq(value, 0.0)
}
