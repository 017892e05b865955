//! Procedural scattering: sample candidates, project them onto the surface,
//! and pick existing objects for erasing
//!
//! Control flow per session:
//! - configuration change: [`FootprintSampler`] builds a new [`CandidateSet`]
//! - every tick: [`SurfaceProjector`] re-snaps the set onto the probe
//! - every tick in erase mode: [`EraseQuery`] selects objects to delete

pub mod candidate;
pub mod erase;
pub mod projector;
pub mod sampler;
pub mod session;

pub use candidate::{CandidateSet, Placement, PlacementCandidate};
pub use erase::EraseQuery;
pub use projector::SurfaceProjector;
pub use sampler::{seeded_rng, FootprintSampler};
pub use session::PaintSession;
