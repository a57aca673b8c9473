//! Status effects: timed modifiers applied to living entities.
//!
//! An [`EffectInstance`] is owned by exactly one entity's active-effect
//! table. Static behavior (colors, tick pulses) lives in the immutable
//! [`catalog`]; merge/removal rules live in the living engine.

mod catalog;
mod color;

pub use catalog::{EffectProfile, TickAction};
pub use color::Color;

use strum::{EnumIter, FromRepr};

/// Status effect identifiers, numbered by their stable wire/save ids.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, EnumIter, FromRepr)]
#[derive(serde::Serialize, serde::Deserialize)]
#[repr(u8)]
pub enum EffectKind {
    Speed = 1,
    Slowness = 2,
    Haste = 3,
    MiningFatigue = 4,
    Strength = 5,
    JumpBoost = 8,
    Nausea = 9,
    Regeneration = 10,
    Resistance = 11,
    FireResistance = 12,
    WaterBreathing = 13,
    Invisibility = 14,
    Blindness = 15,
    NightVision = 16,
    Hunger = 17,
    Weakness = 18,
    Poison = 19,
    Wither = 20,
}

impl EffectKind {
    /// Stable numeric id used on the wire and in saved data.
    pub fn id(self) -> u8 {
        self as u8
    }

    /// Looks up a kind by its numeric id.
    pub fn from_id(id: u8) -> Option<Self> {
        Self::from_repr(id)
    }
}

/// One active effect on an entity.
///
/// Amplifier is the 0-based strength magnitude (0–255); duration counts down
/// in ticks and the instance is removed when it reaches zero.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct EffectInstance {
    pub kind: EffectKind,
    pub amplifier: u8,
    pub duration: u32,
    pub ambient: bool,
    pub visible: bool,
}

impl EffectInstance {
    pub fn new(kind: EffectKind, amplifier: u8, duration: u32) -> Self {
        Self {
            kind,
            amplifier,
            duration,
            ambient: false,
            visible: true,
        }
    }

    pub fn with_ambient(mut self, ambient: bool) -> Self {
        self.ambient = ambient;
        self
    }

    pub fn with_visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }

    /// 1-based effect level (`amplifier + 1`), used for scaling.
    pub fn level(&self) -> u32 {
        u32::from(self.amplifier) + 1
    }

    /// Static behavior profile from the catalog.
    pub fn profile(&self) -> &'static EffectProfile {
        self.kind.profile()
    }

    /// Whether this instance contributes color samples to the potion
    /// aggregate.
    pub fn contributes_color(&self) -> bool {
        self.visible && self.profile().bubbles
    }
}
