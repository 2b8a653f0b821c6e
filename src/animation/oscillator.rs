use crate::animation::channel::{ChannelKind, Space};
use crate::animation::config::OscillatorConfig;
use crate::errors::{OscillatorError, Result};
use crate::resources::Material;
use crate::scene::EntityHandle;

/// Outcome counters of a single [`Oscillator::tick`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickReport {
    /// Channels that wrote into the entity.
    pub applied: usize,
    /// Disabled channels.
    pub skipped: usize,
    /// Enabled channels whose write was dropped.
    pub failed: usize,
}

impl TickReport {
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.failed == 0
    }
}

/// Periodic property animator for a single entity.
///
/// Holds configuration only. Each [`tick`](Self::tick) samples every enabled
/// channel at the supplied time and writes the result through an
/// [`EntityHandle`]; nothing is carried over between ticks.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Oscillator {
    config: OscillatorConfig,
}

impl Oscillator {
    #[must_use]
    pub fn new(config: OscillatorConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &OscillatorConfig {
        &self.config
    }

    /// Editing access for tooling. Changes take effect on the next tick.
    pub fn config_mut(&mut self) -> &mut OscillatorConfig {
        &mut self.config
    }

    #[must_use]
    pub fn into_config(self) -> OscillatorConfig {
        self.config
    }

    /// Evaluates all channels at `time` (seconds) and writes them into `entity`.
    ///
    /// Channels run in [`ChannelKind::ORDER`]. A channel that cannot be written
    /// is logged and counted in the report; the remaining channels still run.
    pub fn tick<E: EntityHandle + ?Sized>(&self, time: f32, entity: &mut E) -> TickReport {
        let mut report = TickReport::default();

        for kind in ChannelKind::ORDER {
            match self.apply_channel(kind, time, &mut *entity) {
                Ok(true) => report.applied += 1,
                Ok(false) => report.skipped += 1,
                Err(e) => {
                    log::warn!("{e}");
                    report.failed += 1;
                }
            }
        }

        report
    }

    /// Evaluates a single channel at `time` and writes it into `entity`.
    ///
    /// Returns `Ok(false)` without touching the entity when the channel is
    /// disabled. A world-space write under a singular parent matrix is dropped
    /// and reported as [`OscillatorError::SingularParent`].
    pub fn apply_channel<E: EntityHandle + ?Sized>(
        &self,
        kind: ChannelKind,
        time: f32,
        entity: &mut E,
    ) -> Result<bool> {
        if !self.config.is_enabled(kind) {
            return Ok(false);
        }

        match kind {
            ChannelKind::Rotation => {
                let rotation = &self.config.rotation;
                let euler = rotation.sample(time);
                let transform = entity.transform_mut();
                match rotation.space {
                    Space::Local => transform.set_euler_degrees(euler),
                    Space::World => {
                        if !transform.set_world_euler_degrees(euler) {
                            return Err(singular_parent(entity, kind));
                        }
                    }
                }
                log::trace!("rotation -> {euler} ({:?})", rotation.space);
            }
            ChannelKind::Position => {
                let position = &self.config.position;
                let value = position.sample(time);
                let transform = entity.transform_mut();
                match position.space {
                    Space::Local => transform.position = value,
                    Space::World => {
                        if !transform.set_world_position(value) {
                            return Err(singular_parent(entity, kind));
                        }
                    }
                }
                log::trace!("position -> {value} ({:?})", position.space);
            }
            ChannelKind::Scale => {
                let value = self.config.scale.sample(time);
                entity.transform_mut().scale = value;
                log::trace!("scale -> {value}");
            }
            ChannelKind::Color => {
                let value = self.config.color.sample(time);
                with_material(entity, kind, |material| material.set_color(value))?;
                log::trace!("color -> {value:?}");
            }
            ChannelKind::Material => {
                let channel = &self.config.material;
                let f = channel.fraction(time);
                with_material(entity, kind, |material| {
                    material.blend_into(&channel.from, &channel.to, f);
                })?;
                log::trace!("material '{}'..'{}' at {f:.4}", channel.from.name, channel.to.name);
            }
        }

        Ok(true)
    }
}

/// Runs `write` against the entity's renderable material, or reports it missing.
fn with_material<E, F>(entity: &mut E, channel: ChannelKind, write: F) -> Result<()>
where
    E: EntityHandle + ?Sized,
    F: FnOnce(&mut Material),
{
    match entity.material_mut() {
        Some(material) => {
            write(material);
            Ok(())
        }
        None => Err(OscillatorError::MissingRenderable {
            entity: entity.label().to_owned(),
            channel,
        }),
    }
}

fn singular_parent<E: EntityHandle + ?Sized>(entity: &E, channel: ChannelKind) -> OscillatorError {
    OscillatorError::SingularParent {
        entity: entity.label().to_owned(),
        channel,
    }
}

impl From<OscillatorConfig> for Oscillator {
    fn from(config: OscillatorConfig) -> Self {
        Self::new(config)
    }
}
