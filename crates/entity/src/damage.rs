//! Damage and heal event value objects.
//!
//! A [`DamageEvent`] is created per damage occurrence and consumed
//! synchronously within one attack resolution. Modifier deltas are recorded
//! by name in application order so listeners (and post-processing such as
//! absorption drain) can inspect exactly what each stage contributed.

use arrayvec::ArrayVec;

use crate::config::LivingConfig;
use crate::math::Vec3;

/// What caused a damage event.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[derive(serde::Serialize, serde::Deserialize)]
pub enum DamageCause {
    Contact,
    EntityAttack,
    Projectile,
    Suffocation,
    Fall,
    Fire,
    FireTick,
    Lava,
    Drowning,
    BlockExplosion,
    EntityExplosion,
    Void,
    Suicide,
    Magic,
    Starvation,
    Custom,
}

impl DamageCause {
    /// Whether armor points reduce damage from this cause.
    pub fn reducible_by_armor(self) -> bool {
        !matches!(
            self,
            DamageCause::FireTick
                | DamageCause::Suffocation
                | DamageCause::Drowning
                | DamageCause::Fall
                | DamageCause::Void
                | DamageCause::Suicide
                | DamageCause::Magic
                | DamageCause::Starvation
        )
    }

    /// Whether this cause is fire-based (cancelled by fire resistance).
    pub fn is_fire(self) -> bool {
        matches!(
            self,
            DamageCause::Fire | DamageCause::FireTick | DamageCause::Lava
        )
    }

    /// Whether the resistance effect is excluded for this cause.
    pub fn bypasses_resistance(self) -> bool {
        matches!(self, DamageCause::Void | DamageCause::Suicide)
    }
}

/// Named damage modifiers, in application order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[derive(serde::Serialize, serde::Deserialize)]
pub enum DamageModifier {
    Armor,
    Resistance,
    Absorption,
}

/// Snapshot of the attacking entity taken at resolution time.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Attacker {
    pub position: Vec3,
    pub on_fire: bool,
}

/// Where a damage event came from.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DamageSource {
    /// Environmental or otherwise attacker-less damage.
    Generic,
    /// A direct entity attack.
    Entity(Attacker),
    /// An attack delivered through a child entity (e.g. a projectile); the
    /// child is the effective attacker for knockback and ignition.
    ChildEntity { owner: Attacker, child: Attacker },
}

impl DamageSource {
    /// The entity knockback and ignition are computed against, if any.
    pub fn effective_attacker(&self) -> Option<&Attacker> {
        match self {
            DamageSource::Generic => None,
            DamageSource::Entity(attacker) => Some(attacker),
            DamageSource::ChildEntity { child, .. } => Some(child),
        }
    }
}

/// A single damage occurrence being resolved against one entity.
#[derive(Clone, Debug, PartialEq)]
pub struct DamageEvent {
    cause: DamageCause,
    source: DamageSource,
    base: f32,
    modifiers: ArrayVec<(DamageModifier, f32), { LivingConfig::MAX_DAMAGE_MODIFIERS }>,
    knockback: f64,
    cancelled: bool,
}

impl DamageEvent {
    pub fn new(cause: DamageCause, base: f32) -> Self {
        Self {
            cause,
            source: DamageSource::Generic,
            base,
            modifiers: ArrayVec::new(),
            knockback: LivingConfig::DEFAULT_KNOCKBACK_BASE,
            cancelled: false,
        }
    }

    pub fn with_source(mut self, source: DamageSource) -> Self {
        self.source = source;
        self
    }

    pub fn with_knockback(mut self, knockback: f64) -> Self {
        self.knockback = knockback;
        self
    }

    pub fn cause(&self) -> DamageCause {
        self.cause
    }

    pub fn source(&self) -> &DamageSource {
        &self.source
    }

    /// The unmodified damage amount the event was created with.
    pub fn base_damage(&self) -> f32 {
        self.base
    }

    /// The knockback impulse scalar carried by this event.
    pub fn knockback(&self) -> f64 {
        self.knockback
    }

    /// The delta recorded for a named modifier (zero if unset).
    pub fn modifier(&self, which: DamageModifier) -> f32 {
        self.modifiers
            .iter()
            .find(|(kind, _)| *kind == which)
            .map(|(_, delta)| *delta)
            .unwrap_or(0.0)
    }

    /// Records a named modifier delta, replacing any previous value for the
    /// same name while keeping its original position in application order.
    pub fn set_modifier(&mut self, which: DamageModifier, delta: f32) {
        if let Some(slot) = self.modifiers.iter_mut().find(|(kind, _)| *kind == which) {
            slot.1 = delta;
        } else {
            self.modifiers.push((which, delta));
        }
    }

    /// Base damage plus every recorded modifier delta.
    pub fn final_damage(&self) -> f32 {
        self.base + self.modifiers.iter().map(|(_, delta)| delta).sum::<f32>()
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled
    }

    pub fn cancel(&mut self) {
        self.cancelled = true;
    }
}

/// Why an entity regained health.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[derive(serde::Serialize, serde::Deserialize)]
pub enum RegainCause {
    Regen,
    Magic,
    Eating,
    Custom,
}

/// A single heal occurrence, vetoable before it commits.
#[derive(Clone, Debug, PartialEq)]
pub struct HealEvent {
    pub amount: f32,
    pub cause: RegainCause,
}

impl HealEvent {
    pub fn new(amount: f32, cause: RegainCause) -> Self {
        Self { amount, cause }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn final_damage_sums_modifiers_over_base() {
        let mut event = DamageEvent::new(DamageCause::EntityAttack, 10.0);
        event.set_modifier(DamageModifier::Armor, -2.0);
        event.set_modifier(DamageModifier::Absorption, -4.0);
        assert_eq!(event.final_damage(), 4.0);
        assert_eq!(event.modifier(DamageModifier::Armor), -2.0);
        assert_eq!(event.modifier(DamageModifier::Resistance), 0.0);
    }

    #[test]
    fn setting_a_modifier_twice_replaces_the_delta() {
        let mut event = DamageEvent::new(DamageCause::EntityAttack, 10.0);
        event.set_modifier(DamageModifier::Armor, -2.0);
        event.set_modifier(DamageModifier::Armor, -3.0);
        assert_eq!(event.final_damage(), 7.0);
    }

    #[test]
    fn child_attacker_takes_precedence() {
        let owner = Attacker {
            position: Vec3::ZERO,
            on_fire: false,
        };
        let child = Attacker {
            position: Vec3::new(1.0, 0.0, 0.0),
            on_fire: true,
        };
        let source = DamageSource::ChildEntity { owner, child };
        assert_eq!(source.effective_attacker(), Some(&child));
    }

    #[test]
    fn armor_reducibility_by_cause() {
        assert!(DamageCause::EntityAttack.reducible_by_armor());
        assert!(DamageCause::Contact.reducible_by_armor());
        assert!(!DamageCause::Fall.reducible_by_armor());
        assert!(!DamageCause::Drowning.reducible_by_armor());
        assert!(DamageCause::Fire.reducible_by_armor());
        assert!(!DamageCause::FireTick.reducible_by_armor());
    }
}
