use std::path::Path;

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::animation::channel::{Channel, ChannelKind, SpatialChannel};
use crate::errors::Result;
use crate::resources::{Color, Material};

/// Full configuration of one oscillator: one channel per property.
///
/// Every field is optional in JSON; missing channels come up disabled.
///
/// ```json
/// {
///   "position": { "enabled": true, "waveform": "sine", "space": "local",
///                 "from": [0, 0, 0], "to": [10, 0, 0], "speed": 0.5 },
///   "color":    { "enabled": true, "from": { "r": 0, "g": 0, "b": 0 },
///                 "to": { "r": 1, "g": 1, "b": 1 }, "speed": 1 }
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OscillatorConfig {
    /// Euler angles in degrees.
    pub rotation: SpatialChannel,
    pub position: SpatialChannel,
    /// Always local.
    pub scale: Channel<Vec3>,
    pub color: Channel<Color>,
    pub material: Channel<Material>,
}

impl OscillatorConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        log::debug!(
            "Loaded oscillator config ({} of 5 channels enabled)",
            config.enabled_count()
        );
        Ok(config)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        log::debug!("Reading oscillator config from {}", path.display());
        Self::from_json_str(&text)
    }

    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    #[must_use]
    pub fn with_rotation(mut self, rotation: SpatialChannel) -> Self {
        self.rotation = rotation;
        self
    }

    #[must_use]
    pub fn with_position(mut self, position: SpatialChannel) -> Self {
        self.position = position;
        self
    }

    #[must_use]
    pub fn with_scale(mut self, scale: Channel<Vec3>) -> Self {
        self.scale = scale;
        self
    }

    #[must_use]
    pub fn with_color(mut self, color: Channel<Color>) -> Self {
        self.color = color;
        self
    }

    #[must_use]
    pub fn with_material(mut self, material: Channel<Material>) -> Self {
        self.material = material;
        self
    }

    #[must_use]
    pub fn is_enabled(&self, kind: ChannelKind) -> bool {
        match kind {
            ChannelKind::Rotation => self.rotation.channel.enabled,
            ChannelKind::Position => self.position.channel.enabled,
            ChannelKind::Scale => self.scale.enabled,
            ChannelKind::Color => self.color.enabled,
            ChannelKind::Material => self.material.enabled,
        }
    }

    /// Toggles a channel without touching the rest of its configuration.
    pub fn set_enabled(&mut self, kind: ChannelKind, enabled: bool) {
        match kind {
            ChannelKind::Rotation => self.rotation.channel.enabled = enabled,
            ChannelKind::Position => self.position.channel.enabled = enabled,
            ChannelKind::Scale => self.scale.enabled = enabled,
            ChannelKind::Color => self.color.enabled = enabled,
            ChannelKind::Material => self.material.enabled = enabled,
        }
    }

    #[must_use]
    pub fn enabled_count(&self) -> usize {
        ChannelKind::ORDER
            .iter()
            .filter(|&&kind| self.is_enabled(kind))
            .count()
    }
}
