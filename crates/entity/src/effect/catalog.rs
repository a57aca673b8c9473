//! Static behavior catalog for status effects.
//!
//! The catalog is an immutable process-wide table: every [`EffectKind`] maps
//! to one `&'static` [`EffectProfile`] describing particle color, bubble
//! visibility, and the effect's per-tick action. Nothing here is ever
//! mutated; entities hold instances, not behavior.

use super::EffectKind;
use super::color::Color;

/// What an effect does each time its tick interval elapses.
///
/// The living engine interprets these; the catalog only names them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickAction {
    /// No periodic behavior; the effect is passive at this layer.
    None,
    /// Regain one point of health per pulse.
    Regenerate,
    /// One point of poison damage per pulse; never lethal.
    PoisonDamage,
    /// One point of wither damage per pulse; can kill.
    WitherDamage,
}

/// Static behavior of one effect kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EffectProfile {
    /// Particle tint contributed to the potion-color aggregate.
    pub color: Color,
    /// Whether the effect renders potion bubbles (and therefore contributes
    /// color samples).
    pub bubbles: bool,
    /// Whether the effect is detrimental.
    pub bad: bool,
    /// Periodic behavior, pulsing every `tick_interval` ticks.
    pub tick: TickAction,
    /// Base pulse interval, halved per amplifier level. Zero means the
    /// effect never pulses.
    pub tick_interval: u32,
}

impl EffectProfile {
    /// Whether the effect should pulse at the given remaining duration.
    ///
    /// The interval shrinks with amplifier (`base >> amplifier`); an interval
    /// shifted to zero pulses every tick.
    pub fn ticks_at(&self, duration: u32, amplifier: u8) -> bool {
        if self.tick == TickAction::None {
            return false;
        }
        match self.tick_interval >> amplifier.min(31) {
            0 => true,
            interval => duration % interval == 0,
        }
    }
}

const fn passive(color: Color, bad: bool) -> EffectProfile {
    EffectProfile {
        color,
        bubbles: true,
        bad,
        tick: TickAction::None,
        tick_interval: 0,
    }
}

const fn pulsing(color: Color, bad: bool, tick: TickAction, tick_interval: u32) -> EffectProfile {
    EffectProfile {
        color,
        bubbles: true,
        bad,
        tick,
        tick_interval,
    }
}

const SPEED: EffectProfile = passive(Color::rgb(124, 175, 198), false);
const SLOWNESS: EffectProfile = passive(Color::rgb(90, 108, 129), true);
const HASTE: EffectProfile = passive(Color::rgb(217, 192, 67), false);
const MINING_FATIGUE: EffectProfile = passive(Color::rgb(74, 66, 23), true);
const STRENGTH: EffectProfile = passive(Color::rgb(147, 36, 36), false);
const JUMP_BOOST: EffectProfile = passive(Color::rgb(34, 204, 120), false);
const NAUSEA: EffectProfile = passive(Color::rgb(85, 29, 74), true);
const REGENERATION: EffectProfile =
    pulsing(Color::rgb(205, 92, 171), false, TickAction::Regenerate, 40);
const RESISTANCE: EffectProfile = passive(Color::rgb(153, 69, 106), false);
const FIRE_RESISTANCE: EffectProfile = passive(Color::rgb(228, 154, 58), false);
const WATER_BREATHING: EffectProfile = passive(Color::rgb(46, 82, 153), false);
const INVISIBILITY: EffectProfile = passive(Color::rgb(127, 131, 146), false);
const BLINDNESS: EffectProfile = passive(Color::rgb(31, 31, 35), true);
const NIGHT_VISION: EffectProfile = passive(Color::rgb(31, 31, 161), false);
const HUNGER: EffectProfile = passive(Color::rgb(88, 118, 83), true);
const WEAKNESS: EffectProfile = passive(Color::rgb(72, 77, 72), true);
const POISON: EffectProfile =
    pulsing(Color::rgb(78, 147, 49), true, TickAction::PoisonDamage, 25);
const WITHER: EffectProfile =
    pulsing(Color::rgb(53, 42, 41), true, TickAction::WitherDamage, 50);

impl EffectKind {
    /// Static behavior profile for this effect kind.
    pub fn profile(self) -> &'static EffectProfile {
        match self {
            EffectKind::Speed => &SPEED,
            EffectKind::Slowness => &SLOWNESS,
            EffectKind::Haste => &HASTE,
            EffectKind::MiningFatigue => &MINING_FATIGUE,
            EffectKind::Strength => &STRENGTH,
            EffectKind::JumpBoost => &JUMP_BOOST,
            EffectKind::Nausea => &NAUSEA,
            EffectKind::Regeneration => &REGENERATION,
            EffectKind::Resistance => &RESISTANCE,
            EffectKind::FireResistance => &FIRE_RESISTANCE,
            EffectKind::WaterBreathing => &WATER_BREATHING,
            EffectKind::Invisibility => &INVISIBILITY,
            EffectKind::Blindness => &BLINDNESS,
            EffectKind::NightVision => &NIGHT_VISION,
            EffectKind::Hunger => &HUNGER,
            EffectKind::Weakness => &WEAKNESS,
            EffectKind::Poison => &POISON,
            EffectKind::Wither => &WITHER,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn regeneration_pulses_on_interval_multiples() {
        let profile = EffectKind::Regeneration.profile();
        assert!(profile.ticks_at(80, 0));
        assert!(profile.ticks_at(40, 0));
        assert!(!profile.ticks_at(41, 0));
        // Amplifier 1 halves the interval.
        assert!(profile.ticks_at(20, 1));
        assert!(!profile.ticks_at(30, 1));
    }

    #[test]
    fn high_amplifier_pulses_every_tick() {
        let profile = EffectKind::Poison.profile();
        assert!(profile.ticks_at(7, 8));
        assert!(profile.ticks_at(11, 8));
    }

    #[test]
    fn passive_effects_never_pulse() {
        let profile = EffectKind::Speed.profile();
        assert!(!profile.ticks_at(0, 0));
        assert!(!profile.ticks_at(40, 3));
    }
}
