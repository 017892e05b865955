//! Error types for scatterpaint

use thiserror::Error;

/// Main error type for the crate
///
/// Geometry, sampling and projection never fail; errors only come from
/// validating caller-supplied configuration.
#[derive(Debug, Error, PartialEq)]
pub enum Error {
    #[error("Invalid brush configuration: {0}")]
    InvalidConfig(String),

    #[error("Brush index {index} out of range ({len} brushes)")]
    BrushIndexOutOfRange { index: usize, len: usize },
}
