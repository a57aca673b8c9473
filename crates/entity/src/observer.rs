//! Injected observer interface for vetoable state changes.
//!
//! The engine depends on this trait instead of a concrete event bus: before
//! an effect add/remove, damage, heal, or death commits, the observer sees
//! the mutable payload and may cancel it. Calls are synchronous and must not
//! re-enter the same path on the same entity before returning.

use crate::damage::{DamageEvent, HealEvent};
use crate::effect::EffectInstance;
use crate::item::ItemStack;

/// Outcome of an observer callback.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Verdict {
    Continue,
    Cancel,
}

impl Verdict {
    pub fn is_cancelled(self) -> bool {
        self == Verdict::Cancel
    }
}

/// An effect about to be applied, with the instance it would replace.
#[derive(Clone, Debug, PartialEq)]
pub struct EffectAddEvent {
    pub effect: EffectInstance,
    pub replaces: Option<EffectInstance>,
    /// Whether the magnitude/duration comparison already rejected the add;
    /// listeners may override in either direction.
    pub rejected: bool,
}

/// An effect about to be removed.
#[derive(Clone, Debug, PartialEq)]
pub struct EffectRemoveEvent {
    pub effect: EffectInstance,
}

/// A death about to release drops and experience.
///
/// Listeners may trim or extend `drops`; whatever remains after the callback
/// is spawned into the world. Cancelling suppresses the drops entirely (the
/// death itself proceeds).
#[derive(Clone, Debug, PartialEq)]
pub struct DeathEvent {
    pub drops: Vec<ItemStack>,
}

/// Non-cancellable visual notifications broadcast to observers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EntityEvent {
    Respawn,
    HurtAnimation,
    DeathAnimation,
}

/// Observer of one entity's vetoable state changes.
///
/// Every method defaults to [`Verdict::Continue`] / no-op, so implementors
/// override only the paths they care about.
pub trait EntityObserver {
    fn on_effect_add(&mut self, event: &mut EffectAddEvent) -> Verdict {
        let _ = event;
        Verdict::Continue
    }

    fn on_effect_remove(&mut self, event: &mut EffectRemoveEvent) -> Verdict {
        let _ = event;
        Verdict::Continue
    }

    fn on_damage(&mut self, event: &mut DamageEvent) -> Verdict {
        let _ = event;
        Verdict::Continue
    }

    fn on_heal(&mut self, event: &mut HealEvent) -> Verdict {
        let _ = event;
        Verdict::Continue
    }

    fn on_death(&mut self, event: &mut DeathEvent) -> Verdict {
        let _ = event;
        Verdict::Continue
    }

    fn on_entity_event(&mut self, event: EntityEvent) {
        let _ = event;
    }
}

/// Observer that lets everything through; the default for tests and for
/// worlds with no listeners installed.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullObserver;

impl EntityObserver for NullObserver {}
