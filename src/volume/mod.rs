//! Containment tests and the world-space brush volume built on them

pub mod brush_volume;
pub mod containment;

pub use brush_volume::BrushVolume;
pub use containment::{point_in_convex_polygon, point_in_cylinder, point_in_tetrahedron};
