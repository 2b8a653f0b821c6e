use std::f32::consts::TAU;

use serde::{Deserialize, Serialize};

/// Periodic driver of a channel.
///
/// Both shapes share the same period (`1 / speed` seconds) and differ only in
/// phase: a sine channel starts at the midpoint of its range, a cosine
/// channel starts at `to`. Pairing them is how two entities are kept a
/// quarter period apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Waveform {
    Sine,
    #[default]
    Cosine,
}

impl Waveform {
    /// Maps the `useSineWave` authoring flag onto a waveform.
    #[inline]
    #[must_use]
    pub fn from_sine_flag(use_sine_wave: bool) -> Self {
        if use_sine_wave { Self::Sine } else { Self::Cosine }
    }

    /// Raw waveform value in `[-1, 1]`.
    ///
    /// `speed` is in full cycles per second. Zero speed freezes the phase at 0;
    /// negative speed runs the phase backwards.
    #[inline]
    #[must_use]
    pub fn raw(self, time: f32, speed: f32) -> f32 {
        let phase = time * speed * TAU;
        match self {
            Self::Sine => phase.sin(),
            Self::Cosine => phase.cos(),
        }
    }

    /// Interpolation fraction in `[0, 1]`.
    #[inline]
    #[must_use]
    pub fn fraction(self, time: f32, speed: f32) -> f32 {
        ((self.raw(time, speed) + 1.0) * 0.5).clamp(0.0, 1.0)
    }
}
