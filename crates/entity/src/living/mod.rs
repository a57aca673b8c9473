//! The living-entity state machine.
//!
//! [`LivingEntity`] owns an entity's health, active-effect table, attribute
//! set, and death lifecycle, and resolves damage, knockback, breathing, and
//! per-tick effect behavior. World access goes through a [`WorldHandle`] and
//! every vetoable state change is routed through an [`EntityObserver`]
//! before it commits.
//!
//! All operations are synchronous and run to completion within one tick; the
//! entity must be driven from a single simulation thread.

mod base;

pub use base::{EntityCore, EntityFlags};

use arrayvec::ArrayVec;

use crate::attribute::{AttributeError, AttributeId, AttributeMap};
use crate::config::LivingConfig;
use crate::damage::{DamageCause, DamageEvent, DamageModifier, HealEvent, RegainCause};
use crate::effect::{Color, EffectInstance, EffectKind, TickAction};
use crate::item::ItemStack;
use crate::observer::{
    DeathEvent, EffectAddEvent, EffectRemoveEvent, EntityEvent, EntityObserver,
};
use crate::world::WorldHandle;

/// Death lifecycle state; an entity is in exactly one at any time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Lifecycle {
    Alive,
    /// Health reached zero; the death countdown is advancing.
    Dying { dead_ticks: u32 },
    /// Terminal. The entity is eligible for removal by the owner.
    Dead,
}

/// An animate actor's authoritative server-side state.
#[derive(Debug)]
pub struct LivingEntity {
    core: EntityCore,
    attributes: AttributeMap,
    effects: ArrayVec<EffectInstance, { LivingConfig::MAX_ACTIVE_EFFECTS }>,
    config: LivingConfig,
    lifecycle: Lifecycle,
    attack_time: i32,
    armor_points: u32,
    drops: Vec<ItemStack>,
    xp_drop: u32,
}

impl LivingEntity {
    pub fn new(config: LivingConfig) -> Self {
        Self {
            core: EntityCore::new(),
            attributes: AttributeMap::new(),
            effects: ArrayVec::new(),
            config,
            lifecycle: Lifecycle::Alive,
            attack_time: 0,
            armor_points: 0,
            drops: Vec::new(),
            xp_drop: 0,
        }
    }

    pub fn core(&self) -> &EntityCore {
        &self.core
    }

    pub fn core_mut(&mut self) -> &mut EntityCore {
        &mut self.core
    }

    pub fn attributes(&self) -> &AttributeMap {
        &self.attributes
    }

    pub fn config(&self) -> &LivingConfig {
        &self.config
    }

    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    pub fn is_alive(&self) -> bool {
        self.core.raw_health() > 0.0
    }

    /// Remaining ticks of post-hit invulnerability.
    pub fn attack_time(&self) -> i32 {
        self.attack_time
    }

    /// Armour points contributed by equipment; reduces applicable damage by
    /// 4% per point.
    pub fn armor_points(&self) -> u32 {
        self.armor_points
    }

    pub fn set_armor_points(&mut self, points: u32) {
        self.armor_points = points;
    }

    /// Items released on death (before listeners trim the list).
    pub fn set_drops(&mut self, drops: Vec<ItemStack>) {
        self.drops = drops;
    }

    /// Experience released when the death countdown completes.
    pub fn set_xp_drop(&mut self, amount: u32) {
        self.xp_drop = amount;
    }

    // ========================================================================
    // Health & absorption
    // ========================================================================

    pub fn health(&self) -> f32 {
        self.core.raw_health()
    }

    pub fn max_health(&self) -> f32 {
        self.attributes.get(AttributeId::Health).max_value()
    }

    pub fn set_max_health(&mut self, max: f32) -> Result<(), AttributeError> {
        self.attributes
            .get_mut(AttributeId::Health)
            .set_max_value(max)?;
        self.sync_health_attribute();
        Ok(())
    }

    pub fn absorption(&self) -> f32 {
        self.attributes.get(AttributeId::Absorption).value()
    }

    pub fn set_absorption(&mut self, absorption: f32) {
        self.attributes
            .get_mut(AttributeId::Absorption)
            .set_value(absorption);
    }

    /// Sets the raw floating health through the shared clamp path.
    ///
    /// Dropping to zero or below starts the death sequence; a transition
    /// from dead to alive emits a respawn notification.
    pub fn set_health(
        &mut self,
        amount: f32,
        world: &mut (impl WorldHandle + ?Sized),
        observer: &mut (impl EntityObserver + ?Sized),
    ) {
        let was_alive = self.is_alive();
        if amount <= 0.0 {
            if was_alive {
                self.kill(world, observer);
            }
        } else {
            let current = self.core.raw_health();
            let max = self.max_health();
            let value = if amount <= max || amount < current {
                amount
            } else {
                max
            };
            self.core.set_raw_health(value);
            if !was_alive {
                self.lifecycle = Lifecycle::Alive;
                observer.on_entity_event(EntityEvent::Respawn);
            }
        }
        self.sync_health_attribute();
    }

    /// Regains health through the vetoable heal path.
    ///
    /// Returns whether the heal committed. A committed heal also clears the
    /// post-hit invulnerability window.
    pub fn heal(
        &mut self,
        mut event: HealEvent,
        world: &mut (impl WorldHandle + ?Sized),
        observer: &mut (impl EntityObserver + ?Sized),
    ) -> bool {
        if observer.on_heal(&mut event).is_cancelled() {
            return false;
        }
        let healed = self.core.raw_health() + event.amount;
        self.set_health(healed, world, observer);
        self.attack_time = 0;
        true
    }

    /// Mirrors the ceiling of the floating health into the Health attribute.
    fn sync_health_attribute(&mut self) {
        let ceiling = self.core.raw_health().ceil().max(0.0);
        self.attributes
            .get_mut(AttributeId::Health)
            .set_value(ceiling);
    }

    // ========================================================================
    // Effects
    // ========================================================================

    pub fn effects(&self) -> impl Iterator<Item = &EffectInstance> {
        self.effects.iter()
    }

    pub fn effect(&self, kind: EffectKind) -> Option<&EffectInstance> {
        self.effects.iter().find(|e| e.kind == kind)
    }

    pub fn has_effect(&self, kind: EffectKind) -> bool {
        self.effect(kind).is_some()
    }

    /// Applies an effect, merging against any active instance of the same
    /// kind by magnitude-then-duration.
    ///
    /// A weaker effect is rejected; at equal magnitude a shorter one is
    /// rejected. The decision is exposed to the observer before commit and a
    /// veto forces rejection regardless of the comparison. Returns whether
    /// the effect was applied.
    pub fn add_effect(
        &mut self,
        effect: EffectInstance,
        observer: &mut (impl EntityObserver + ?Sized),
    ) -> bool {
        let existing = self.effects.iter().position(|e| e.kind == effect.kind);
        let old = existing.map(|index| self.effects[index]);

        let mut rejected = false;
        if let Some(old) = old {
            if effect.amplifier < old.amplifier
                || (effect.amplifier == old.amplifier && effect.duration < old.duration)
            {
                rejected = true;
            }
        }

        let mut event = EffectAddEvent {
            effect,
            replaces: old,
            rejected,
        };
        if observer.on_effect_add(&mut event).is_cancelled() || event.rejected {
            return false;
        }
        let effect = event.effect;

        match existing {
            Some(index) => self.effects[index] = effect,
            None => {
                if self.effects.try_push(effect).is_err() {
                    tracing::debug!(kind = ?effect.kind, "active-effect table full, add dropped");
                    return false;
                }
            }
        }

        self.refresh_movement_speed();
        self.recalculate_effect_color();
        true
    }

    /// Removes the effect of the given kind through the vetoable removal
    /// path. Returns whether an effect was removed.
    pub fn remove_effect(
        &mut self,
        kind: EffectKind,
        observer: &mut (impl EntityObserver + ?Sized),
    ) -> bool {
        let Some(index) = self.effects.iter().position(|e| e.kind == kind) else {
            return false;
        };

        let mut event = EffectRemoveEvent {
            effect: self.effects[index],
        };
        if observer.on_effect_remove(&mut event).is_cancelled() {
            return false;
        }

        self.effects.remove(index);
        self.refresh_movement_speed();
        self.recalculate_effect_color();
        true
    }

    /// Removes every active effect. Iterates a snapshot of the current
    /// kinds, so removals during iteration are safe; individual removals
    /// remain vetoable.
    pub fn remove_all_effects(&mut self, observer: &mut (impl EntityObserver + ?Sized)) {
        let kinds: ArrayVec<EffectKind, { LivingConfig::MAX_ACTIVE_EFFECTS }> =
            self.effects.iter().map(|e| e.kind).collect();
        for kind in kinds {
            self.remove_effect(kind, observer);
        }
    }

    /// Applies a consumable's effect list. Returns whether every effect was
    /// accepted.
    pub fn consume(
        &mut self,
        effects: impl IntoIterator<Item = EffectInstance>,
        observer: &mut (impl EntityObserver + ?Sized),
    ) -> bool {
        let mut all_applied = true;
        for effect in effects {
            all_applied &= self.add_effect(effect, observer);
        }
        all_applied
    }

    /// Recomputes the aggregate potion-color property channel.
    ///
    /// Each visible bubbling effect contributes one color sample per level;
    /// the aggregate is ambient only if every contributor is ambient. With
    /// no contributors the channel is cleared.
    fn recalculate_effect_color(&mut self) {
        let contributors = self.effects.iter().filter(|e| e.contributes_color());
        let mut ambient = true;
        let mut any = false;
        for effect in contributors.clone() {
            any = true;
            ambient &= effect.ambient;
        }
        if !any {
            self.core.set_potion_color(Color::TRANSPARENT, false);
            return;
        }
        let samples = contributors
            .flat_map(|e| std::iter::repeat_n(e.profile().color, e.level() as usize));
        self.core.set_potion_color(Color::mix(samples), ambient);
    }

    /// Recomputes movement speed from the default value and the active
    /// speed/slowness effects. Idempotent, so replacing an effect implicitly
    /// unwinds the old instance's contribution.
    fn refresh_movement_speed(&mut self) {
        let mut factor = 1.0f32;
        for effect in &self.effects {
            match effect.kind {
                EffectKind::Speed => factor *= 1.0 + 0.2 * effect.level() as f32,
                EffectKind::Slowness => {
                    factor *= (1.0 - 0.15 * effect.level() as f32).max(0.0)
                }
                _ => {}
            }
        }
        let speed = self.attributes.get_mut(AttributeId::MovementSpeed);
        let base = speed.default_value();
        speed.set_value(base * factor);
    }

    // ========================================================================
    // Per-tick update
    // ========================================================================

    /// Advances the entity by `tick_diff` simulated ticks.
    ///
    /// Order: base update (fire), effect ticking and expiry, suffocation and
    /// breathing while alive, then post-hit invulnerability decay. Returns
    /// whether anything changed that warrants continued simulation.
    pub fn entity_base_tick(
        &mut self,
        tick_diff: u32,
        world: &mut (impl WorldHandle + ?Sized),
        observer: &mut (impl EntityObserver + ?Sized),
    ) -> bool {
        let mut has_update = self.base_tick(tick_diff, world, observer);

        self.tick_effects(tick_diff, world, observer);

        if self.is_alive() {
            if self.is_inside_of_solid(world) {
                has_update = true;
                let mut event =
                    DamageEvent::new(DamageCause::Suffocation, LivingConfig::SUFFOCATION_DAMAGE);
                self.attack(&mut event, world, observer);
            }

            if !self.can_breathe(world) {
                self.core.set_breathing(false);
                self.tick_air_supply(tick_diff, world, observer);
            } else if !self.core.is_breathing() {
                self.core.set_breathing(true);
                self.core.set_air_ticks(self.core.max_air_ticks());
            }
        }

        if self.attack_time > 0 {
            self.attack_time -= tick_diff as i32;
        }

        has_update
    }

    /// Base (non-living) update: fire-tick damage and burn decay.
    fn base_tick(
        &mut self,
        tick_diff: u32,
        world: &mut (impl WorldHandle + ?Sized),
        observer: &mut (impl EntityObserver + ?Sized),
    ) -> bool {
        if self.core.fire_ticks() == 0 {
            return false;
        }
        if self.core.fire_ticks() % LivingConfig::FIRE_DAMAGE_INTERVAL == 0
            || tick_diff > LivingConfig::FIRE_DAMAGE_INTERVAL
        {
            let mut event =
                DamageEvent::new(DamageCause::FireTick, LivingConfig::FIRE_TICK_DAMAGE);
            self.attack(&mut event, world, observer);
        }
        self.core.decay_fire(tick_diff);
        true
    }

    /// Ticks every active effect: pulse its action if due, then decrement
    /// its duration, removing it (vetoably) at zero.
    fn tick_effects(
        &mut self,
        tick_diff: u32,
        world: &mut (impl WorldHandle + ?Sized),
        observer: &mut (impl EntityObserver + ?Sized),
    ) {
        // Snapshot of kinds: tick actions re-enter the engine and may mutate
        // the table.
        let kinds: ArrayVec<EffectKind, { LivingConfig::MAX_ACTIVE_EFFECTS }> =
            self.effects.iter().map(|e| e.kind).collect();

        for kind in kinds {
            let Some((amplifier, duration)) = self
                .effect(kind)
                .map(|e| (e.amplifier, e.duration))
            else {
                continue;
            };

            let profile = kind.profile();
            if profile.ticks_at(duration, amplifier) {
                self.apply_tick_action(profile.tick, world, observer);
            }

            if let Some(index) = self.effects.iter().position(|e| e.kind == kind) {
                let effect = &mut self.effects[index];
                effect.duration = effect.duration.saturating_sub(tick_diff);
                if effect.duration == 0 {
                    tracing::debug!(kind = ?kind, "effect expired");
                    self.remove_effect(kind, observer);
                }
            }
        }
    }

    fn apply_tick_action(
        &mut self,
        action: TickAction,
        world: &mut (impl WorldHandle + ?Sized),
        observer: &mut (impl EntityObserver + ?Sized),
    ) {
        match action {
            TickAction::None => {}
            TickAction::Regenerate => {
                if self.health() < self.max_health() {
                    self.heal(HealEvent::new(1.0, RegainCause::Regen), world, observer);
                }
            }
            TickAction::PoisonDamage => {
                // Poison never kills.
                if self.health() > 1.0 {
                    let mut event = DamageEvent::new(DamageCause::Magic, 1.0);
                    self.attack(&mut event, world, observer);
                }
            }
            TickAction::WitherDamage => {
                let mut event = DamageEvent::new(DamageCause::Magic, 1.0);
                self.attack(&mut event, world, observer);
            }
        }
    }

    // ========================================================================
    // Breathing
    // ========================================================================

    /// Whether the entity can currently breathe: it either has water
    /// breathing or its eyes are not submerged.
    pub fn can_breathe(&self, world: &(impl WorldHandle + ?Sized)) -> bool {
        self.has_effect(EffectKind::WaterBreathing) || !self.is_underwater(world)
    }

    pub fn is_underwater(&self, world: &(impl WorldHandle + ?Sized)) -> bool {
        world.block_at(self.core.eye_position().floor()).liquid
    }

    fn is_inside_of_solid(&self, world: &(impl WorldHandle + ?Sized)) -> bool {
        world.block_at(self.core.eye_position().floor()).solid
    }

    fn tick_air_supply(
        &mut self,
        tick_diff: u32,
        world: &mut (impl WorldHandle + ?Sized),
        observer: &mut (impl EntityObserver + ?Sized),
    ) {
        let ticks = self.core.air_ticks() - tick_diff as i32;
        if ticks <= LivingConfig::AIR_EXPIRY_DEFICIT {
            // Reset to zero (not the deficit) so the pulse recurs roughly
            // once per second of continued submersion.
            self.core.set_air_ticks(0);
            let mut event =
                DamageEvent::new(DamageCause::Drowning, LivingConfig::DROWNING_DAMAGE);
            self.attack(&mut event, world, observer);
        } else {
            self.core.set_air_ticks(ticks);
        }
    }

    // ========================================================================
    // Damage resolution
    // ========================================================================

    /// Resolves one damage event against this entity.
    ///
    /// The event may come out cancelled (cooldown, fire resistance, or an
    /// observer veto), in which case no state changed.
    pub fn attack(
        &mut self,
        event: &mut DamageEvent,
        world: &mut (impl WorldHandle + ?Sized),
        observer: &mut (impl EntityObserver + ?Sized),
    ) {
        if self.attack_time > 0
            && let Some((_, last_amount)) = self.core.last_damage()
            && last_amount >= event.base_damage()
        {
            event.cancel();
        }

        if self.has_effect(EffectKind::FireResistance) && event.cause().is_fire() {
            event.cancel();
        }

        self.apply_damage_modifiers(event);

        if observer.on_damage(event).is_cancelled() {
            event.cancel();
        }
        if event.is_cancelled() {
            return;
        }

        self.core.set_last_damage(event.cause(), event.base_damage());
        let remaining = self.core.raw_health() - event.final_damage();
        self.set_health(remaining, world, observer);

        if let Some(attacker) = event.source().effective_attacker().copied() {
            if attacker.on_fire {
                let ticks =
                    self.config.fire_ticks_per_difficulty * u32::from(world.difficulty());
                self.core.set_on_fire(ticks);
            }
            let position = self.core.position();
            let dx = position.x - attacker.position.x;
            let dz = position.z - attacker.position.z;
            self.knock_back(event.final_damage(), dx, dz, event.knockback());
        }

        // Drain absorption by however much the modifier actually consumed.
        let consumed = event.modifier(DamageModifier::Absorption);
        self.set_absorption((self.absorption() + consumed).max(0.0));

        if self.is_alive() {
            observer.on_entity_event(EntityEvent::HurtAnimation);
        } else {
            observer.on_entity_event(EntityEvent::DeathAnimation);
        }

        self.attack_time = self.config.attack_cooldown_ticks;
    }

    /// Applies the pre-resolution modifiers in fixed order: armor,
    /// resistance effect, absorption soak.
    fn apply_damage_modifiers(&self, event: &mut DamageEvent) {
        if event.cause().reducible_by_armor() {
            let reduction = -(event.final_damage() * self.armor_points as f32 * 0.04);
            event.set_modifier(DamageModifier::Armor, reduction);
        }

        if !event.cause().bypasses_resistance()
            && let Some(resistance) = self.effect(EffectKind::Resistance)
        {
            let reduction = -(event.final_damage() * 0.20 * resistance.level() as f32);
            event.set_modifier(DamageModifier::Resistance, reduction);
        }

        let soak = -self.absorption().min(event.final_damage());
        event.set_modifier(DamageModifier::Absorption, soak);
    }

    /// Applies an instantaneous motion impulse away from the attacker.
    ///
    /// No-op for a zero-length horizontal delta. Vertical motion is clamped
    /// to at most `base` so repeated hits cannot compound upward velocity.
    pub fn knock_back(&mut self, _damage: f32, dx: f64, dz: f64, base: f64) {
        let distance = (dx * dx + dz * dz).sqrt();
        if distance <= 0.0 {
            return;
        }
        let scale = 1.0 / distance;

        let mut motion = self.core.motion();
        motion.x /= 2.0;
        motion.y /= 2.0;
        motion.z /= 2.0;
        motion.x += dx * scale * base;
        motion.y += base;
        motion.z += dz * scale * base;
        if motion.y > base {
            motion.y = base;
        }
        self.core.set_motion(motion);
    }

    /// Applies fall damage for the given distance, offset by the configured
    /// threshold and any jump-boost level.
    pub fn fall(
        &mut self,
        distance: f64,
        world: &mut (impl WorldHandle + ?Sized),
        observer: &mut (impl EntityObserver + ?Sized),
    ) {
        let jump_level = self
            .effect(EffectKind::JumpBoost)
            .map(|e| e.level())
            .unwrap_or(0) as f64;
        let damage = (distance - self.config.fall_damage_offset - jump_level).ceil();
        if damage > 0.0 {
            let mut event = DamageEvent::new(DamageCause::Fall, damage as f32);
            self.attack(&mut event, world, observer);
        }
    }

    /// Initial upward velocity of a jump, including jump-boost bonus.
    pub fn jump_velocity(&self) -> f64 {
        let bonus = self
            .effect(EffectKind::JumpBoost)
            .map(|e| e.level() as f64 / 10.0)
            .unwrap_or(0.0);
        self.config.jump_velocity + bonus
    }

    /// Adds upward velocity when jumping from the ground.
    pub fn jump(&mut self) {
        if self.core.is_on_ground() {
            let mut motion = self.core.motion();
            motion.y = self.jump_velocity();
            self.core.set_motion(motion);
        }
    }

    // ========================================================================
    // Death lifecycle
    // ========================================================================

    /// Starts the death sequence: zeroes health, raises the death
    /// notification, and spawns whatever remains of the drop list. No-op if
    /// already dead.
    pub fn kill(
        &mut self,
        world: &mut (impl WorldHandle + ?Sized),
        observer: &mut (impl EntityObserver + ?Sized),
    ) {
        if !self.is_alive() {
            return;
        }
        self.core.set_raw_health(0.0);
        self.lifecycle = Lifecycle::Dying { dead_ticks: 0 };
        self.sync_health_attribute();
        tracing::debug!("entity died");
        self.on_death(world, observer);
    }

    fn on_death(
        &mut self,
        world: &mut (impl WorldHandle + ?Sized),
        observer: &mut (impl EntityObserver + ?Sized),
    ) {
        let mut event = DeathEvent {
            drops: self.drops.clone(),
        };
        if observer.on_death(&mut event).is_cancelled() {
            return;
        }
        let position = self.core.position();
        for item in event.drops {
            if !item.is_empty() {
                world.spawn_item(position, item);
            }
        }
    }

    /// Advances the death countdown.
    ///
    /// Experience is released exactly once, at the tick the counter crosses
    /// the threshold. Returns true once the threshold has been reached,
    /// signalling that removal may proceed.
    pub fn on_death_update(
        &mut self,
        tick_diff: u32,
        world: &mut (impl WorldHandle + ?Sized),
    ) -> bool {
        match self.lifecycle {
            Lifecycle::Alive => false,
            Lifecycle::Dead => true,
            Lifecycle::Dying { dead_ticks } => {
                let advanced = dead_ticks + tick_diff;
                if advanced >= self.config.max_dead_ticks {
                    self.lifecycle = Lifecycle::Dead;
                    if self.xp_drop > 0 {
                        world.release_experience(self.core.position(), self.xp_drop);
                    }
                    tracing::debug!("death countdown complete");
                    true
                } else {
                    self.lifecycle = Lifecycle::Dying {
                        dead_ticks: advanced,
                    };
                    false
                }
            }
        }
    }
}
