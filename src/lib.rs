//! Scatterpaint - surface scattering brush geometry
//!
//! Samples copies of prototype objects inside a brush footprint, snaps them
//! onto the surface under the cursor every tick, and picks existing objects
//! inside the brush volume for erasing.

pub mod core;
pub mod math;
pub mod brush;
pub mod surface;
pub mod volume;
pub mod scatter;
