//! Oscillation of entity properties between two endpoints.
//!
//! - [`Waveform`]: sine/cosine sampler producing a fraction in `[0, 1]`
//! - [`Channel`]: one property's endpoints, speed and waveform
//! - [`OscillatorConfig`]: the five channels of an oscillator
//! - [`Oscillator`]: per-tick driver writing into an [`EntityHandle`]
//!
//! [`EntityHandle`]: crate::scene::EntityHandle

pub mod channel;
pub mod config;
pub mod oscillator;
pub mod values;
pub mod waveform;

pub use channel::{Channel, ChannelKind, Space, SpatialChannel};
pub use config::OscillatorConfig;
pub use oscillator::{Oscillator, TickReport};
pub use values::Interpolatable;
pub use waveform::Waveform;
