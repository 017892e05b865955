//! Vector helpers for building surface-aligned frames

use crate::core::types::{Mat3, Quat, Vec3};
use super::angle::approx_zero;

/// Reference direction projected onto a surface to get its "forward".
const REFERENCE_FORWARD: Vec3 = Vec3::Z;
/// Used instead of [`REFERENCE_FORWARD`] when the normal is parallel to it.
const FALLBACK_FORWARD: Vec3 = Vec3::Y;

/// Canonical vector perpendicular to `normal`, with the same length.
///
/// Projects +Z onto the plane orthogonal to `normal`. When `normal` is
/// parallel to +Z the projection vanishes and +Y is used instead. A zero
/// normal yields `Vec3::ZERO`.
pub fn perpendicular_vector(normal: Vec3) -> Vec3 {
    let length = normal.length();
    if approx_zero(length) {
        return Vec3::ZERO;
    }

    let projected = REFERENCE_FORWARD.reject_from(normal);
    if approx_zero(projected.length()) {
        FALLBACK_FORWARD * length
    } else {
        projected.normalize() * length
    }
}

/// Rotate `vector` about `axis` by `degrees`. A zero axis leaves it unchanged.
pub fn rotate_about_axis(vector: Vec3, axis: Vec3, degrees: f32) -> Vec3 {
    match axis.try_normalize() {
        Some(axis) => Quat::from_axis_angle(axis, degrees.to_radians()) * vector,
        None => vector,
    }
}

/// Unsigned angle between two vectors in degrees.
pub fn angle_degrees(a: Vec3, b: Vec3) -> f32 {
    a.angle_between(b).to_degrees()
}

/// Rotation mapping local +Z onto `forward` and local +Y as close to `up`
/// as possible.
///
/// Degenerate input (zero forward, or forward parallel to up) falls back
/// to a forward derived from `up`, and to identity if `up` is zero too.
pub fn look_rotation(forward: Vec3, up: Vec3) -> Quat {
    let Some(z) = forward.try_normalize() else {
        return match up.try_normalize() {
            Some(up) => look_rotation(perpendicular_vector(up), up),
            None => Quat::IDENTITY,
        };
    };
    let Some(x) = up.cross(z).try_normalize() else {
        return look_rotation(perpendicular_vector(z), z);
    };
    let y = z.cross(x);
    Quat::from_mat3(&Mat3::from_cols(x, y, z)).normalize()
}
