//! Surface queries: the probe under the cursor and the raycast capability

pub mod probe;
pub mod raycast;

pub use probe::{RayHit, SurfaceProbe};
pub use raycast::{LayeredSurface, Raycaster, SurfaceSet};
