//! Brush description: shape, size, limits and the prototypes it paints

pub mod config;
pub mod frame;
pub mod palette;

pub use config::{BrushConfiguration, BrushShape, LayerMask};
pub use frame::TangentFrame;
pub use palette::{BrushPalette, BrushPreset, PrototypeId};
