//! Persisted living-entity state.
//!
//! The records are format-agnostic serde structs with the historical key
//! names. Two legacy shims are preserved on load, not fixed: a `HealF`
//! float (or an integer-typed `Health`) is accepted and normalized to the
//! canonical float form, and the amplifier byte is stored signed but
//! reinterpreted as unsigned. The canonical form is written on next save.

use serde::{Deserialize, Serialize};

use crate::effect::{EffectInstance, EffectKind};
use crate::living::LivingEntity;
use crate::observer::EntityObserver;
use crate::world::WorldHandle;

/// One saved effect record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EffectSaveData {
    #[serde(rename = "Id")]
    pub id: u8,
    /// Byte-packed signed on disk; reinterpreted as unsigned (0–255) when
    /// loading.
    #[serde(rename = "Amplifier")]
    pub amplifier: i8,
    #[serde(rename = "Duration")]
    pub duration: i32,
    #[serde(rename = "Ambient", default)]
    pub ambient: u8,
    #[serde(rename = "ShowParticles", default = "default_show_particles")]
    pub show_particles: u8,
}

fn default_show_particles() -> u8 {
    1
}

/// Saved state of a living entity.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawLivingSaveData")]
pub struct LivingSaveData {
    #[serde(rename = "Health")]
    pub health: f32,
    #[serde(rename = "ActiveEffects", default, skip_serializing_if = "Vec::is_empty")]
    pub active_effects: Vec<EffectSaveData>,
}

impl LivingSaveData {
    /// Health assumed when a save carries no health field at all.
    pub const DEFAULT_HEALTH: f32 = 20.0;
}

/// Loose-field form accepted on load; collapsed into [`LivingSaveData`].
#[derive(Deserialize)]
struct RawLivingSaveData {
    /// Legacy float health field; takes precedence over `Health`.
    #[serde(rename = "HealF")]
    heal_f: Option<f32>,
    #[serde(rename = "Health")]
    health: Option<LegacyHealth>,
    #[serde(rename = "ActiveEffects", default)]
    active_effects: Vec<EffectSaveData>,
}

/// `Health` was written as an integer by old versions; accept both.
#[derive(Deserialize)]
#[serde(untagged)]
enum LegacyHealth {
    Float(f32),
    Int(i32),
}

impl From<RawLivingSaveData> for LivingSaveData {
    fn from(raw: RawLivingSaveData) -> Self {
        let health = raw
            .heal_f
            .or(match raw.health {
                Some(LegacyHealth::Float(value)) => Some(value),
                Some(LegacyHealth::Int(value)) => Some(value as f32),
                None => None,
            })
            .unwrap_or(Self::DEFAULT_HEALTH);
        Self {
            health,
            active_effects: raw.active_effects,
        }
    }
}

impl LivingEntity {
    /// Restores saved state, routing loaded effects through the normal add
    /// path. Records with unknown effect ids are skipped.
    pub fn restore(
        &mut self,
        data: &LivingSaveData,
        world: &mut (impl WorldHandle + ?Sized),
        observer: &mut (impl EntityObserver + ?Sized),
    ) {
        self.set_health(data.health, world, observer);
        for record in &data.active_effects {
            let Some(kind) = EffectKind::from_id(record.id) else {
                tracing::debug!(id = record.id, "unknown effect id in saved data, skipped");
                continue;
            };
            let effect =
                EffectInstance::new(kind, record.amplifier as u8, record.duration.max(0) as u32)
                    .with_ambient(record.ambient != 0)
                    .with_visible(record.show_particles != 0);
            self.add_effect(effect, observer);
        }
    }

    /// Emits the canonical save form of the entity's persisted state.
    pub fn save_data(&self) -> LivingSaveData {
        LivingSaveData {
            health: self.health(),
            active_effects: self
                .effects()
                .map(|effect| EffectSaveData {
                    id: effect.kind.id(),
                    amplifier: effect.amplifier as i8,
                    duration: effect.duration as i32,
                    ambient: u8::from(effect.ambient),
                    show_particles: u8::from(effect.visible),
                })
                .collect(),
        }
    }
}
