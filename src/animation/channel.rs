use std::fmt;

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::animation::values::Interpolatable;
use crate::animation::waveform::Waveform;
use crate::resources::Material;

// ============================================================================
// Channel identity
// ============================================================================

/// The five properties an oscillator can drive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChannelKind {
    Rotation,
    Position,
    Scale,
    Color,
    Material,
}

impl ChannelKind {
    /// Evaluation order used by every tick.
    pub const ORDER: [ChannelKind; 5] = [
        Self::Rotation,
        Self::Position,
        Self::Scale,
        Self::Color,
        Self::Material,
    ];

    /// Whether writing this channel requires a renderable material.
    #[must_use]
    pub fn needs_renderable(self) -> bool {
        matches!(self, Self::Color | Self::Material)
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Rotation => "rotation",
            Self::Position => "position",
            Self::Scale => "scale",
            Self::Color => "color",
            Self::Material => "material",
        }
    }
}

impl fmt::Display for ChannelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Channel<T>
// ============================================================================

/// One oscillating property: two endpoints swept by a waveform.
///
/// A channel holds configuration only. Sampling is a pure function of the
/// time passed in, so the same channel can be evaluated at any time in any
/// order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Channel<T> {
    pub enabled: bool,
    pub waveform: Waveform,
    pub from: T,
    pub to: T,
    /// Full cycles per second.
    pub speed: f32,
}

impl<T: Default> Default for Channel<T> {
    fn default() -> Self {
        Self {
            enabled: false,
            waveform: Waveform::Cosine,
            from: T::default(),
            to: T::default(),
            speed: 0.0,
        }
    }
}

impl<T> Channel<T> {
    /// An enabled cosine channel at one cycle per second.
    #[must_use]
    pub fn new(from: T, to: T) -> Self {
        Self {
            enabled: true,
            waveform: Waveform::Cosine,
            from,
            to,
            speed: 1.0,
        }
    }

    #[must_use]
    pub fn with_speed(mut self, speed: f32) -> Self {
        self.speed = speed;
        self
    }

    #[must_use]
    pub fn with_waveform(mut self, waveform: Waveform) -> Self {
        self.waveform = waveform;
        self
    }

    #[must_use]
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Interpolation fraction at `time`.
    #[inline]
    #[must_use]
    pub fn fraction(&self, time: f32) -> f32 {
        self.waveform.fraction(time, self.speed)
    }
}

impl<T: Interpolatable> Channel<T> {
    #[inline]
    #[must_use]
    pub fn value_at_fraction(&self, f: f32) -> T {
        T::interpolate_linear(self.from, self.to, f)
    }

    /// Interpolated value at `time`.
    #[inline]
    #[must_use]
    pub fn sample(&self, time: f32) -> T {
        self.value_at_fraction(self.fraction(time))
    }
}

impl Channel<Material> {
    /// Blends the endpoint materials at `time` into `target`.
    ///
    /// See [`Material::blend_into`] for how unmatched properties are handled.
    pub fn blend_into(&self, target: &mut Material, time: f32) {
        target.blend_into(&self.from, &self.to, self.fraction(time));
    }

    /// Blended material at `time`, as a fresh value.
    #[must_use]
    pub fn sample_material(&self, time: f32) -> Material {
        Material::blend(&self.from, &self.to, self.fraction(time))
    }
}

// ============================================================================
// Spatial channels
// ============================================================================

/// Coordinate frame a spatial channel writes into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Space {
    /// Relative to the parent.
    Local,
    #[default]
    World,
}

impl Space {
    /// Maps the `isLocal` authoring flag onto a space.
    #[inline]
    #[must_use]
    pub fn from_local_flag(is_local: bool) -> Self {
        if is_local { Self::Local } else { Self::World }
    }
}

/// A `Vec3` channel that can target local or world space (position, Euler rotation).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SpatialChannel {
    #[serde(flatten)]
    pub channel: Channel<Vec3>,
    #[serde(default)]
    pub space: Space,
}

impl SpatialChannel {
    #[must_use]
    pub fn new(channel: Channel<Vec3>, space: Space) -> Self {
        Self { channel, space }
    }

    #[must_use]
    pub fn local(channel: Channel<Vec3>) -> Self {
        Self::new(channel, Space::Local)
    }

    #[must_use]
    pub fn world(channel: Channel<Vec3>) -> Self {
        Self::new(channel, Space::World)
    }

    #[inline]
    #[must_use]
    pub fn is_local(&self) -> bool {
        self.space == Space::Local
    }

    #[inline]
    #[must_use]
    pub fn sample(&self, time: f32) -> Vec3 {
        self.channel.sample(time)
    }
}
