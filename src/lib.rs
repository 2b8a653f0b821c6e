//! # Myth Oscillator
//!
//! Periodic property animation for a single scene entity. An [`Oscillator`]
//! sweeps up to five channels (rotation, position, scale, color, material)
//! between two endpoints using a sine or cosine waveform, and writes the
//! results into the host through the [`EntityHandle`] trait.
//!
//! Time is passed in explicitly, so every tick is a pure function of the
//! configuration and the time value.
//!
//! ```
//! use glam::Vec3;
//! use myth_oscillator::{Channel, Node, Oscillator, OscillatorConfig, SpatialChannel, Waveform};
//!
//! let config = OscillatorConfig::new().with_position(SpatialChannel::local(
//!     Channel::new(Vec3::ZERO, Vec3::new(10.0, 0.0, 0.0))
//!         .with_speed(0.5)
//!         .with_waveform(Waveform::Sine),
//! ));
//! let oscillator = Oscillator::new(config);
//!
//! let mut node = Node::new("bobber");
//! oscillator.tick(0.5, &mut node);
//! assert!(node.transform.position.abs_diff_eq(Vec3::new(10.0, 0.0, 0.0), 1e-4));
//! ```

pub mod animation;
pub mod errors;
pub mod resources;
pub mod scene;

pub use animation::{
    Channel, ChannelKind, Interpolatable, Oscillator, OscillatorConfig, Space, SpatialChannel,
    TickReport, Waveform,
};
pub use errors::{OscillatorError, Result};
pub use resources::{Color, Material, MaterialProperty};
pub use scene::{EntityHandle, Node, Renderable, Transform};
