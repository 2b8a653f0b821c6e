//! Error Types
//!
//! This module defines the error types used throughout the oscillator.
//!
//! # Overview
//!
//! The main error type [`OscillatorError`] covers:
//! - Missing host dependencies (an enabled color or material channel on an
//!   entity without a renderable material)
//! - World-space writes under a parent matrix that cannot be inverted
//! - Configuration loading and parsing failures
//!
//! Neither kind aborts a tick: [`Oscillator::tick`] logs them and
//! moves on to the next channel. [`Oscillator::apply_channel`] returns them to
//! callers that want to inspect a single write.
//!
//! ```
//! use myth_oscillator::errors::{OscillatorError, Result};
//! use myth_oscillator::OscillatorConfig;
//!
//! fn load(json: &str) -> Result<OscillatorConfig> {
//!     OscillatorConfig::from_json_str(json)
//! }
//!
//! assert!(load("{}").is_ok());
//! assert!(matches!(load("{"), Err(OscillatorError::Config(_))));
//! ```
//!
//! [`Oscillator::tick`]: crate::animation::Oscillator::tick
//! [`Oscillator::apply_channel`]: crate::animation::Oscillator::apply_channel

use thiserror::Error;

use crate::animation::ChannelKind;

/// The main error type for the oscillator.
#[derive(Error, Debug)]
pub enum OscillatorError {
    // ========================================================================
    // Host Dependency Errors
    // ========================================================================
    /// A channel that writes into the renderable material is enabled, but the
    /// entity has no renderable attached.
    #[error("Entity '{entity}' has no renderable material for the {channel} channel")]
    MissingRenderable {
        /// Label of the entity, as reported by the host
        entity: String,
        /// The channel whose write was dropped
        channel: ChannelKind,
    },

    /// A world-space write was requested, but the parent's world matrix has
    /// no inverse (zero scale on some axis, or non-finite values).
    #[error("Entity '{entity}' has a singular parent matrix; {channel} world-space write dropped")]
    SingularParent {
        /// Label of the entity, as reported by the host
        entity: String,
        /// The channel whose write was dropped
        channel: ChannelKind,
    },

    // ========================================================================
    // Configuration Errors
    // ========================================================================
    /// JSON parsing error.
    #[error("Config parse error: {0}")]
    Config(#[from] serde_json::Error),

    /// File I/O error while reading a configuration.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl OscillatorError {
    /// Returns `true` for the missing-dependency kind.
    #[must_use]
    pub fn is_missing_dependency(&self) -> bool {
        matches!(self, Self::MissingRenderable { .. })
    }
}

/// Alias for `Result<T, OscillatorError>`.
pub type Result<T> = std::result::Result<T, OscillatorError>;
