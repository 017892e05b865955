//! Mathematical utilities and data structures

pub mod aabb;
pub mod angle;
pub mod plane;
pub mod ray;
pub mod vector;

pub use aabb::Aabb;
pub use angle::{approx_eq, approx_zero, normalize_angle_360, GEOMETRY_EPSILON};
pub use plane::Plane;
pub use ray::Ray;
pub use vector::{angle_degrees, look_rotation, perpendicular_vector, rotate_about_axis};
