//! Host scene access.
//!
//! - EntityHandle: the capability trait the oscillator writes through
//! - Transform: position, rotation and scale with local/world resolution
//! - Node: a minimal reference entity

pub mod entity;
pub mod node;
pub mod transform;

pub use entity::EntityHandle;
pub use node::{Node, Renderable};
pub use transform::Transform;
