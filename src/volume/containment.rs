//! Point-membership tests for convex regions
//!
//! Everything here is a pure function of relative geometry: translating the
//! query point and the shape by the same offset never changes the answer.
//! Malformed shapes (wrong vertex count, zero-length axis, zero volume) fail
//! closed and report `false`.
//!
//! Boundary conventions: cylinders exclude their caps and their lateral
//! surface. Tetrahedra, and therefore convex point sets, include their faces
//! (within [`GEOMETRY_EPSILON`]).

use glam::Vec3;
use crate::math::{approx_zero, Plane, GEOMETRY_EPSILON};

/// Check if `point` is strictly inside the cylinder spanning `cap_a` to
/// `cap_b` with the given `radius`.
pub fn point_in_cylinder(point: Vec3, cap_a: Vec3, cap_b: Vec3, radius: f32) -> bool {
    let axis = cap_b - cap_a;
    if approx_zero(axis.length()) {
        return false;
    }

    let on_axis = cap_a + (point - cap_a).project_onto(axis);

    // Outward side of either cap plane
    if (on_axis - cap_a).dot(axis) <= 0.0 {
        return false;
    }
    if (on_axis - cap_b).dot(-axis) <= 0.0 {
        return false;
    }

    on_axis.distance(point) < radius
}

/// Check if `point` is inside the tetrahedron `v0 v1 v2 v3`.
///
/// Each face plane must have `point` on the same side as the opposite
/// vertex. Four coplanar vertices never contain anything.
pub fn point_in_tetrahedron(point: Vec3, v0: Vec3, v1: Vec3, v2: Vec3, v3: Vec3) -> bool {
    // Zero-height tetrahedron: v0 lies in the plane of the opposite face
    let Some(base) = Plane::from_points(v1, v2, v3) else {
        return false;
    };
    if base.distance_to_point(v0).abs() <= GEOMETRY_EPSILON {
        return false;
    }

    let faces = [
        (v0, v1, v2, v3),
        (v0, v1, v3, v2),
        (v0, v2, v3, v1),
    ];
    for (a, b, c, opposite) in faces {
        match Plane::from_points(a, b, c) {
            Some(plane) if plane.same_side(point, opposite) => {}
            _ => return false,
        }
    }

    base.same_side(point, v0)
}

/// Check if `point` is inside the convex solid spanned by `vertices`.
///
/// - 0 vertices: never.
/// - 1 vertex: the point coincides with it.
/// - 2 vertices: the point lies on the segment.
/// - 3 vertices: the point lies in the plane of the triangle. The triangle's
///   edges are not checked.
/// - 4 vertices: [`point_in_tetrahedron`].
/// - 5+ vertices: the point lies in any tetrahedron formed by a 4-subset of
///   the vertices, visited in increasing index order. This is exhaustive
///   (C(n, 4) tests) and only meant for small shapes such as box corners.
pub fn point_in_convex_polygon(point: Vec3, vertices: &[Vec3]) -> bool {
    match *vertices {
        [] => false,
        [v0] => approx_zero(point.distance(v0)),
        [v0, v1] => point_on_segment(point, v0, v1),
        [v0, v1, v2] => match Plane::from_points(v0, v1, v2) {
            Some(plane) => approx_zero(plane.distance_to_point(point)),
            None => false,
        },
        [v0, v1, v2, v3] => point_in_tetrahedron(point, v0, v1, v2, v3),
        _ => tetrahedral_subsets(vertices.len())
            .any(|[i, j, k, l]| {
                point_in_tetrahedron(point, vertices[i], vertices[j], vertices[k], vertices[l])
            }),
    }
}

fn point_on_segment(point: Vec3, start: Vec3, end: Vec3) -> bool {
    let segment = end - start;
    if approx_zero(segment.length()) {
        return approx_zero(point.distance(start));
    }
    let t = (point - start).dot(segment) / segment.length_squared();
    if !(-GEOMETRY_EPSILON..=1.0 + GEOMETRY_EPSILON).contains(&t) {
        return false;
    }
    approx_zero(point.distance(start + segment * t))
}

/// All index quadruples `i < j < k < l` below `n`, in lexicographic order.
fn tetrahedral_subsets(n: usize) -> impl Iterator<Item = [usize; 4]> {
    (0..n).flat_map(move |i| {
        (i + 1..n).flat_map(move |j| {
            (j + 1..n).flat_map(move |k| (k + 1..n).map(move |l| [i, j, k, l]))
        })
    })
}
