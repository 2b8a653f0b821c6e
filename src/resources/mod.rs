//! Host-side resource data touched by the oscillator.
//!
//! - [`Color`]: linear RGBA
//! - [`Material`]: named property set with cross-fade blending

pub mod color;
pub mod material;

pub use color::Color;
pub use material::{Material, MaterialProperty};
