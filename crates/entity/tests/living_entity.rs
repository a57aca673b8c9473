use std::collections::HashMap;

use basalt_entity::{
    Block, BlockId, BlockPos, Color, DamageCause, DamageEvent, DamageModifier, DamageSource,
    EffectInstance, EffectKind, EntityEvent, EntityObserver, HealEvent, ItemStack, LivingConfig,
    LivingEntity, Lifecycle, NullObserver, RegainCause, Vec3, Verdict, WorldHandle,
};
use basalt_entity::damage::Attacker;
use basalt_entity::observer::{DeathEvent, EffectAddEvent, EffectRemoveEvent};

#[derive(Default)]
struct FakeWorld {
    blocks: HashMap<BlockPos, Block>,
    difficulty: u8,
    spawned_items: Vec<(Vec3, ItemStack)>,
    released_xp: Vec<(Vec3, u32)>,
}

impl FakeWorld {
    fn with_difficulty(difficulty: u8) -> Self {
        Self {
            difficulty,
            ..Self::default()
        }
    }

    fn set_block(&mut self, pos: BlockPos, block: Block) {
        self.blocks.insert(pos, block);
    }
}

impl WorldHandle for FakeWorld {
    fn block_at(&self, pos: BlockPos) -> Block {
        self.blocks.get(&pos).copied().unwrap_or(Block::AIR)
    }

    fn difficulty(&self) -> u8 {
        self.difficulty
    }

    fn spawn_item(&mut self, pos: Vec3, item: ItemStack) {
        self.spawned_items.push((pos, item));
    }

    fn release_experience(&mut self, pos: Vec3, amount: u32) {
        self.released_xp.push((pos, amount));
    }
}

#[derive(Default)]
struct RecordingObserver {
    entity_events: Vec<EntityEvent>,
    veto_effect_add: bool,
    veto_effect_remove: bool,
    veto_heal: bool,
    veto_damage: bool,
    veto_death: bool,
}

impl EntityObserver for RecordingObserver {
    fn on_effect_add(&mut self, _event: &mut EffectAddEvent) -> Verdict {
        if self.veto_effect_add {
            Verdict::Cancel
        } else {
            Verdict::Continue
        }
    }

    fn on_effect_remove(&mut self, _event: &mut EffectRemoveEvent) -> Verdict {
        if self.veto_effect_remove {
            Verdict::Cancel
        } else {
            Verdict::Continue
        }
    }

    fn on_damage(&mut self, _event: &mut DamageEvent) -> Verdict {
        if self.veto_damage {
            Verdict::Cancel
        } else {
            Verdict::Continue
        }
    }

    fn on_heal(&mut self, _event: &mut HealEvent) -> Verdict {
        if self.veto_heal {
            Verdict::Cancel
        } else {
            Verdict::Continue
        }
    }

    fn on_death(&mut self, _event: &mut DeathEvent) -> Verdict {
        if self.veto_death {
            Verdict::Cancel
        } else {
            Verdict::Continue
        }
    }

    fn on_entity_event(&mut self, event: EntityEvent) {
        self.entity_events.push(event);
    }
}

fn entity() -> LivingEntity {
    LivingEntity::new(LivingConfig::default())
}

// ============================================================================
// Effect merge rule
// ============================================================================

#[test]
fn stronger_effect_replaces_weaker() {
    let mut mob = entity();
    let mut observer = NullObserver;
    assert!(mob.add_effect(EffectInstance::new(EffectKind::Speed, 0, 100), &mut observer));
    assert!(mob.add_effect(EffectInstance::new(EffectKind::Speed, 2, 50), &mut observer));
    let active = mob.effect(EffectKind::Speed).unwrap();
    assert_eq!(active.amplifier, 2);
    assert_eq!(active.duration, 50);
}

#[test]
fn weaker_effect_is_rejected() {
    let mut mob = entity();
    let mut observer = NullObserver;
    mob.add_effect(EffectInstance::new(EffectKind::Speed, 2, 50), &mut observer);
    assert!(!mob.add_effect(EffectInstance::new(EffectKind::Speed, 1, 9999), &mut observer));
    assert_eq!(mob.effect(EffectKind::Speed).unwrap().amplifier, 2);
}

#[test]
fn equal_magnitude_longer_duration_replaces() {
    let mut mob = entity();
    let mut observer = NullObserver;
    mob.add_effect(EffectInstance::new(EffectKind::Poison, 1, 100), &mut observer);
    assert!(mob.add_effect(EffectInstance::new(EffectKind::Poison, 1, 200), &mut observer));
    assert_eq!(mob.effect(EffectKind::Poison).unwrap().duration, 200);
}

#[test]
fn equal_magnitude_shorter_duration_is_rejected() {
    let mut mob = entity();
    let mut observer = NullObserver;
    mob.add_effect(EffectInstance::new(EffectKind::Poison, 1, 100), &mut observer);
    assert!(!mob.add_effect(EffectInstance::new(EffectKind::Poison, 1, 40), &mut observer));
    assert_eq!(mob.effect(EffectKind::Poison).unwrap().duration, 100);
}

#[test]
fn observer_veto_rejects_an_otherwise_valid_add() {
    let mut mob = entity();
    let mut observer = RecordingObserver {
        veto_effect_add: true,
        ..RecordingObserver::default()
    };
    assert!(!mob.add_effect(EffectInstance::new(EffectKind::Speed, 0, 100), &mut observer));
    assert!(!mob.has_effect(EffectKind::Speed));
}

#[test]
fn vetoed_removal_keeps_the_effect() {
    let mut mob = entity();
    let mut allow = NullObserver;
    mob.add_effect(EffectInstance::new(EffectKind::Speed, 0, 100), &mut allow);
    let mut observer = RecordingObserver {
        veto_effect_remove: true,
        ..RecordingObserver::default()
    };
    assert!(!mob.remove_effect(EffectKind::Speed, &mut observer));
    assert!(mob.has_effect(EffectKind::Speed));
}

#[test]
fn remove_all_effects_clears_the_table() {
    let mut mob = entity();
    let mut observer = NullObserver;
    mob.add_effect(EffectInstance::new(EffectKind::Speed, 0, 100), &mut observer);
    mob.add_effect(EffectInstance::new(EffectKind::Poison, 0, 100), &mut observer);
    mob.add_effect(EffectInstance::new(EffectKind::NightVision, 0, 100), &mut observer);
    mob.remove_all_effects(&mut observer);
    assert_eq!(mob.effects().count(), 0);
}

// ============================================================================
// Potion color aggregation
// ============================================================================

#[test]
fn no_visible_effects_clears_the_color_channel() {
    let mut mob = entity();
    let mut observer = NullObserver;
    mob.add_effect(
        EffectInstance::new(EffectKind::Speed, 0, 100).with_visible(false),
        &mut observer,
    );
    assert_eq!(mob.core().potion_color(), Color::TRANSPARENT);
    assert!(!mob.core().potion_ambient());
}

#[test]
fn color_samples_are_weighted_by_level() {
    let mut mob = entity();
    let mut observer = NullObserver;
    // Speed at amplifier 1 contributes two samples, regeneration one.
    mob.add_effect(EffectInstance::new(EffectKind::Speed, 1, 100), &mut observer);
    mob.add_effect(EffectInstance::new(EffectKind::Regeneration, 0, 100), &mut observer);

    let speed = EffectKind::Speed.profile().color;
    let regen = EffectKind::Regeneration.profile().color;
    let mixed = mob.core().potion_color();
    assert_eq!(
        u32::from(mixed.r),
        (2 * u32::from(speed.r) + u32::from(regen.r)) / 3
    );
    assert_eq!(
        u32::from(mixed.b),
        (2 * u32::from(speed.b) + u32::from(regen.b)) / 3
    );
}

#[test]
fn aggregate_is_ambient_only_if_every_contributor_is() {
    let mut mob = entity();
    let mut observer = NullObserver;
    mob.add_effect(
        EffectInstance::new(EffectKind::Speed, 0, 100).with_ambient(true),
        &mut observer,
    );
    assert!(mob.core().potion_ambient());

    mob.add_effect(EffectInstance::new(EffectKind::Poison, 0, 100), &mut observer);
    assert!(!mob.core().potion_ambient());
}

// ============================================================================
// Damage resolution
// ============================================================================

#[test]
fn absorption_soaks_damage_before_health() {
    let mut mob = entity();
    let mut world = FakeWorld::default();
    let mut observer = NullObserver;
    mob.set_absorption(4.0);

    let mut event = DamageEvent::new(DamageCause::Custom, 10.0);
    mob.attack(&mut event, &mut world, &mut observer);

    assert_eq!(event.modifier(DamageModifier::Absorption), -4.0);
    assert_eq!(mob.health(), 14.0);
    assert_eq!(mob.absorption(), 0.0);
}

#[test]
fn repeat_hits_within_cooldown_are_cancelled() {
    let mut mob = entity();
    let mut world = FakeWorld::default();
    let mut observer = NullObserver;

    let mut first = DamageEvent::new(DamageCause::EntityAttack, 5.0);
    mob.attack(&mut first, &mut world, &mut observer);
    assert_eq!(mob.health(), 15.0);
    assert_eq!(mob.attack_time(), LivingConfig::DEFAULT_ATTACK_COOLDOWN_TICKS);

    let mut second = DamageEvent::new(DamageCause::EntityAttack, 5.0);
    mob.attack(&mut second, &mut world, &mut observer);
    assert!(second.is_cancelled());
    assert_eq!(mob.health(), 15.0);
}

#[test]
fn harder_hit_breaks_through_the_cooldown() {
    let mut mob = entity();
    let mut world = FakeWorld::default();
    let mut observer = NullObserver;

    let mut first = DamageEvent::new(DamageCause::EntityAttack, 5.0);
    mob.attack(&mut first, &mut world, &mut observer);

    let mut second = DamageEvent::new(DamageCause::EntityAttack, 8.0);
    mob.attack(&mut second, &mut world, &mut observer);
    assert!(!second.is_cancelled());
    assert_eq!(mob.health(), 7.0);
}

#[test]
fn fire_resistance_cancels_fire_causes() {
    let mut mob = entity();
    let mut world = FakeWorld::default();
    let mut observer = NullObserver;
    mob.add_effect(EffectInstance::new(EffectKind::FireResistance, 0, 600), &mut observer);

    for cause in [DamageCause::Fire, DamageCause::FireTick, DamageCause::Lava] {
        let mut event = DamageEvent::new(cause, 4.0);
        mob.attack(&mut event, &mut world, &mut observer);
        assert!(event.is_cancelled(), "{cause:?} should be cancelled");
    }
    assert_eq!(mob.health(), 20.0);
}

#[test]
fn armor_reduces_applicable_damage_four_percent_per_point() {
    let mut mob = entity();
    let mut world = FakeWorld::default();
    let mut observer = NullObserver;
    mob.set_armor_points(5);

    let mut event = DamageEvent::new(DamageCause::EntityAttack, 10.0);
    mob.attack(&mut event, &mut world, &mut observer);
    // 5 points * 4% = 20% reduction.
    assert_eq!(event.modifier(DamageModifier::Armor), -2.0);
    assert_eq!(mob.health(), 12.0);
}

#[test]
fn resistance_effect_reduces_twenty_percent_per_level() {
    let mut mob = entity();
    let mut world = FakeWorld::default();
    let mut observer = NullObserver;
    mob.add_effect(EffectInstance::new(EffectKind::Resistance, 1, 600), &mut observer);

    let mut event = DamageEvent::new(DamageCause::Fall, 10.0);
    mob.attack(&mut event, &mut world, &mut observer);
    // Level 2 resistance: 40% off. Fall damage ignores armor.
    assert_eq!(event.modifier(DamageModifier::Resistance), -4.0);
    assert_eq!(mob.health(), 14.0);
}

#[test]
fn observer_can_cancel_damage_before_commit() {
    let mut mob = entity();
    let mut world = FakeWorld::default();
    let mut observer = RecordingObserver {
        veto_damage: true,
        ..RecordingObserver::default()
    };
    let mut event = DamageEvent::new(DamageCause::EntityAttack, 5.0);
    mob.attack(&mut event, &mut world, &mut observer);
    assert!(event.is_cancelled());
    assert_eq!(mob.health(), 20.0);
    assert!(observer.entity_events.is_empty());
}

#[test]
fn burning_attacker_ignites_the_victim() {
    let mut mob = entity();
    let mut world = FakeWorld::with_difficulty(2);
    let mut observer = NullObserver;

    let attacker = Attacker {
        position: Vec3::new(1.0, 0.0, 0.0),
        on_fire: true,
    };
    let mut event = DamageEvent::new(DamageCause::EntityAttack, 2.0)
        .with_source(DamageSource::Entity(attacker));
    mob.attack(&mut event, &mut world, &mut observer);

    assert_eq!(
        mob.core().fire_ticks(),
        LivingConfig::DEFAULT_FIRE_TICKS_PER_DIFFICULTY * 2
    );
    // Knockback pushed the victim away from the attacker (-x direction).
    assert!(mob.core().motion().x < 0.0);
}

#[test]
fn single_attack_never_drops_health_below_zero() {
    let mut mob = entity();
    let mut world = FakeWorld::default();
    let mut observer = NullObserver;
    let mut event = DamageEvent::new(DamageCause::Void, 9999.0);
    mob.attack(&mut event, &mut world, &mut observer);
    assert_eq!(mob.health(), 0.0);
    assert!(!mob.is_alive());
}

// ============================================================================
// Knockback
// ============================================================================

#[test]
fn zero_delta_knockback_is_a_no_op() {
    let mut mob = entity();
    mob.core_mut().set_motion(Vec3::new(0.3, 0.1, -0.2));
    mob.knock_back(4.0, 0.0, 0.0, 0.4);
    assert_eq!(mob.core().motion(), Vec3::new(0.3, 0.1, -0.2));
}

#[test]
fn vertical_motion_never_exceeds_base() {
    let mut mob = entity();
    for _ in 0..5 {
        mob.knock_back(4.0, 1.0, 0.0, 0.4);
        assert!(mob.core().motion().y <= 0.4 + 1e-9);
    }
}

#[test]
fn knockback_normalizes_the_direction() {
    let mut mob = entity();
    mob.knock_back(4.0, 3.0, 4.0, 0.5);
    let motion = mob.core().motion();
    // Direction (3,4)/5 scaled by base 0.5.
    assert!((motion.x - 0.3).abs() < 1e-9);
    assert!((motion.z - 0.4).abs() < 1e-9);
    assert!((motion.y - 0.5).abs() < 1e-9);
}

// ============================================================================
// Death lifecycle
// ============================================================================

#[test]
fn kill_spawns_surviving_drops_and_counts_down() {
    let mut mob = entity();
    let mut world = FakeWorld::default();
    let mut observer = NullObserver;
    mob.set_drops(vec![ItemStack::new(260, 0, 2)]);
    mob.set_xp_drop(12);

    mob.kill(&mut world, &mut observer);
    assert_eq!(mob.lifecycle(), Lifecycle::Dying { dead_ticks: 0 });
    assert_eq!(world.spawned_items.len(), 1);
    assert!(world.released_xp.is_empty());

    assert!(!mob.on_death_update(10, &mut world));
    assert!(mob.on_death_update(10, &mut world));
    assert_eq!(mob.lifecycle(), Lifecycle::Dead);
    assert_eq!(world.released_xp, vec![(Vec3::ZERO, 12)]);

    // Still true afterwards, but experience is not released twice.
    assert!(mob.on_death_update(1, &mut world));
    assert_eq!(world.released_xp.len(), 1);
}

#[test]
fn kill_is_a_no_op_when_already_dead() {
    let mut mob = entity();
    let mut world = FakeWorld::default();
    let mut observer = NullObserver;
    mob.set_drops(vec![ItemStack::new(260, 0, 1)]);

    mob.kill(&mut world, &mut observer);
    mob.kill(&mut world, &mut observer);
    assert_eq!(world.spawned_items.len(), 1);
}

#[test]
fn vetoed_death_event_suppresses_drops() {
    let mut mob = entity();
    let mut world = FakeWorld::default();
    let mut observer = RecordingObserver {
        veto_death: true,
        ..RecordingObserver::default()
    };
    mob.set_drops(vec![ItemStack::new(260, 0, 1)]);
    mob.kill(&mut world, &mut observer);
    assert!(world.spawned_items.is_empty());
    assert!(!mob.is_alive());
}

#[test]
fn listeners_can_trim_the_drop_list() {
    struct TrimDrops;
    impl EntityObserver for TrimDrops {
        fn on_death(&mut self, event: &mut DeathEvent) -> Verdict {
            event.drops.clear();
            Verdict::Continue
        }
    }

    let mut mob = entity();
    let mut world = FakeWorld::default();
    mob.set_drops(vec![ItemStack::new(260, 0, 1), ItemStack::new(3, 0, 12)]);
    mob.kill(&mut world, &mut TrimDrops);
    assert!(world.spawned_items.is_empty());
}

#[test]
fn reviving_a_dead_entity_emits_respawn() {
    let mut mob = entity();
    let mut world = FakeWorld::default();
    let mut observer = RecordingObserver::default();

    mob.kill(&mut world, &mut observer);
    assert!(!mob.is_alive());

    mob.set_health(20.0, &mut world, &mut observer);
    assert!(mob.is_alive());
    assert_eq!(mob.lifecycle(), Lifecycle::Alive);
    assert!(observer.entity_events.contains(&EntityEvent::Respawn));
}

// ============================================================================
// Health / heal
// ============================================================================

#[test]
fn health_attribute_mirrors_the_ceiling() {
    let mut mob = entity();
    let mut world = FakeWorld::default();
    let mut observer = NullObserver;
    mob.set_health(7.3, &mut world, &mut observer);
    assert_eq!(mob.health(), 7.3);
    assert_eq!(
        mob.attributes().get(basalt_entity::AttributeId::Health).value(),
        8.0
    );
}

#[test]
fn set_health_clamps_to_max() {
    let mut mob = entity();
    let mut world = FakeWorld::default();
    let mut observer = NullObserver;
    mob.set_health(50.0, &mut world, &mut observer);
    assert_eq!(mob.health(), 20.0);
}

#[test]
fn heal_commits_and_clears_the_cooldown() {
    let mut mob = entity();
    let mut world = FakeWorld::default();
    let mut observer = NullObserver;
    let mut hit = DamageEvent::new(DamageCause::EntityAttack, 6.0);
    mob.attack(&mut hit, &mut world, &mut observer);
    assert!(mob.attack_time() > 0);

    assert!(mob.heal(HealEvent::new(3.0, RegainCause::Magic), &mut world, &mut observer));
    assert_eq!(mob.health(), 17.0);
    assert_eq!(mob.attack_time(), 0);
}

#[test]
fn vetoed_heal_changes_nothing() {
    let mut mob = entity();
    let mut world = FakeWorld::default();
    let mut observer = RecordingObserver {
        veto_heal: true,
        ..RecordingObserver::default()
    };
    assert!(!mob.heal(HealEvent::new(3.0, RegainCause::Magic), &mut world, &mut observer));
    assert_eq!(mob.health(), 20.0);
}

// ============================================================================
// Ticking: effects, breathing, suffocation
// ============================================================================

#[test]
fn effect_durations_decay_and_expire() {
    let mut mob = entity();
    let mut world = FakeWorld::default();
    let mut observer = NullObserver;
    mob.add_effect(EffectInstance::new(EffectKind::NightVision, 0, 3), &mut observer);

    mob.entity_base_tick(2, &mut world, &mut observer);
    assert_eq!(mob.effect(EffectKind::NightVision).unwrap().duration, 1);

    mob.entity_base_tick(2, &mut world, &mut observer);
    assert!(!mob.has_effect(EffectKind::NightVision));
}

#[test]
fn vetoed_expiry_keeps_the_effect_at_zero() {
    let mut mob = entity();
    let mut world = FakeWorld::default();
    let mut allow = NullObserver;
    mob.add_effect(EffectInstance::new(EffectKind::NightVision, 0, 1), &mut allow);

    let mut observer = RecordingObserver {
        veto_effect_remove: true,
        ..RecordingObserver::default()
    };
    mob.entity_base_tick(1, &mut world, &mut observer);
    assert_eq!(mob.effect(EffectKind::NightVision).unwrap().duration, 0);
}

#[test]
fn regeneration_pulses_heal() {
    let mut mob = entity();
    let mut world = FakeWorld::default();
    let mut observer = NullObserver;
    mob.set_health(10.0, &mut world, &mut observer);
    // Duration 80 pulses at the tick where duration % 40 == 0.
    mob.add_effect(EffectInstance::new(EffectKind::Regeneration, 0, 80), &mut observer);

    mob.entity_base_tick(1, &mut world, &mut observer);
    assert_eq!(mob.health(), 11.0);
}

#[test]
fn poison_never_kills() {
    let mut mob = entity();
    let mut world = FakeWorld::default();
    let mut observer = NullObserver;
    mob.set_health(1.0, &mut world, &mut observer);
    mob.add_effect(EffectInstance::new(EffectKind::Poison, 4, 50), &mut observer);

    for _ in 0..40 {
        mob.entity_base_tick(1, &mut world, &mut observer);
    }
    assert!(mob.is_alive());
    assert_eq!(mob.health(), 1.0);
}

#[test]
fn suffocation_damages_inside_solid_blocks() {
    let mut mob = entity();
    let mut world = FakeWorld::default();
    let mut observer = NullObserver;
    // Head is at eye height ~1.62 above the feet.
    world.set_block(BlockPos::new(0, 1, 0), Block::solid(BlockId(1)));

    mob.entity_base_tick(1, &mut world, &mut observer);
    assert_eq!(mob.health(), 19.0);
}

#[test]
fn air_supply_drains_underwater_and_drowning_pulses() {
    let mut mob = entity();
    let mut world = FakeWorld::default();
    let mut observer = NullObserver;
    world.set_block(BlockPos::new(0, 1, 0), Block::liquid(BlockId(9)));

    mob.entity_base_tick(1, &mut world, &mut observer);
    assert!(!mob.core().is_breathing());
    assert_eq!(mob.core().air_ticks(), mob.core().max_air_ticks() - 1);

    // Drain the rest of the supply and push into the deficit.
    mob.core_mut().set_air_ticks(-19);
    mob.entity_base_tick(1, &mut world, &mut observer);
    assert_eq!(mob.core().air_ticks(), 0);
    assert_eq!(mob.health(), 18.0);
}

#[test]
fn water_breathing_refills_the_air_supply() {
    let mut mob = entity();
    let mut world = FakeWorld::default();
    let mut observer = NullObserver;
    world.set_block(BlockPos::new(0, 1, 0), Block::liquid(BlockId(9)));

    mob.core_mut().set_air_ticks(5);
    mob.core_mut().set_breathing(false);
    mob.add_effect(EffectInstance::new(EffectKind::WaterBreathing, 0, 600), &mut observer);

    mob.entity_base_tick(1, &mut world, &mut observer);
    assert!(mob.core().is_breathing());
    assert_eq!(mob.core().air_ticks(), mob.core().max_air_ticks());
}

#[test]
fn cooldown_decays_with_tick_diff() {
    let mut mob = entity();
    let mut world = FakeWorld::default();
    let mut observer = NullObserver;
    let mut hit = DamageEvent::new(DamageCause::EntityAttack, 2.0);
    mob.attack(&mut hit, &mut world, &mut observer);
    assert_eq!(mob.attack_time(), 10);

    mob.entity_base_tick(4, &mut world, &mut observer);
    assert_eq!(mob.attack_time(), 6);
}

// ============================================================================
// Movement-speed hooks, fall damage, jumping
// ============================================================================

#[test]
fn speed_effect_scales_movement_and_unwinds_on_removal() {
    let mut mob = entity();
    let mut observer = NullObserver;
    let base = mob
        .attributes()
        .get(basalt_entity::AttributeId::MovementSpeed)
        .value();

    mob.add_effect(EffectInstance::new(EffectKind::Speed, 0, 100), &mut observer);
    let boosted = mob
        .attributes()
        .get(basalt_entity::AttributeId::MovementSpeed)
        .value();
    assert!((boosted - base * 1.2).abs() < 1e-6);

    mob.remove_effect(EffectKind::Speed, &mut observer);
    let restored = mob
        .attributes()
        .get(basalt_entity::AttributeId::MovementSpeed)
        .value();
    assert!((restored - base).abs() < 1e-6);
}

#[test]
fn fall_damage_is_offset_by_threshold_and_jump_boost() {
    let mut mob = entity();
    let mut world = FakeWorld::default();
    let mut observer = NullObserver;

    mob.fall(3.0, &mut world, &mut observer);
    assert_eq!(mob.health(), 20.0);

    mob.fall(6.5, &mut world, &mut observer);
    assert_eq!(mob.health(), 16.0);
}

#[test]
fn jump_boost_reduces_fall_damage() {
    let mut mob = entity();
    let mut world = FakeWorld::default();
    let mut observer = NullObserver;
    mob.add_effect(EffectInstance::new(EffectKind::JumpBoost, 1, 600), &mut observer);

    // 6.5 - 3 - 2 (level) = 1.5 -> ceil 2.
    mob.fall(6.5, &mut world, &mut observer);
    assert_eq!(mob.health(), 18.0);
}

#[test]
fn jumping_from_the_ground_sets_vertical_motion() {
    let mut mob = entity();
    mob.core_mut().set_on_ground(true);
    mob.jump();
    assert!((mob.core().motion().y - LivingConfig::DEFAULT_JUMP_VELOCITY).abs() < 1e-9);

    let mut airborne = entity();
    airborne.jump();
    assert_eq!(airborne.core().motion().y, 0.0);
}
