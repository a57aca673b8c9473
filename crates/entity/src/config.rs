/// Engine limits and tunable balance constants.
///
/// The `const` items are structural caps used as type parameters for bounded
/// collections. The struct fields are balance values copied from the original
/// game rules; they are configuration, not invariants the engine reasons
/// about.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct LivingConfig {
    /// Ticks of post-hit invulnerability after a successful attack.
    pub attack_cooldown_ticks: i32,
    /// Ticks the death animation runs before drops-complete/removal.
    pub max_dead_ticks: u32,
    /// Fire duration applied per point of world difficulty when hit by a
    /// burning attacker.
    pub fire_ticks_per_difficulty: u32,
    /// Blocks of fall distance that never deal damage.
    pub fall_damage_offset: f64,
    /// Upward velocity of a jump from the ground, in blocks/tick.
    pub jump_velocity: f64,
}

impl LivingConfig {
    // ===== compile-time constants used as type parameters =====
    /// Maximum simultaneously active effects per entity.
    pub const MAX_ACTIVE_EFFECTS: usize = 16;
    /// Maximum named modifiers on a single damage event.
    pub const MAX_DAMAGE_MODIFIERS: usize = 8;

    // ===== fixed engine constants =====
    /// Hard cap on line-of-sight ray length, in blocks.
    pub const MAX_SIGHT_DISTANCE: u32 = 120;
    /// Air-supply deficit at which drowning damage fires and the counter
    /// resets to zero.
    pub const AIR_EXPIRY_DEFICIT: i32 = -20;
    /// Damage dealt per drowning pulse.
    pub const DROWNING_DAMAGE: f32 = 2.0;
    /// Damage dealt per tick spent inside a solid block.
    pub const SUFFOCATION_DAMAGE: f32 = 1.0;
    /// Interval between fire-tick damage pulses while burning.
    pub const FIRE_DAMAGE_INTERVAL: u32 = 20;
    /// Damage dealt per fire-tick pulse.
    pub const FIRE_TICK_DAMAGE: f32 = 1.0;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_ATTACK_COOLDOWN_TICKS: i32 = 10;
    pub const DEFAULT_MAX_DEAD_TICKS: u32 = 20;
    pub const DEFAULT_FIRE_TICKS_PER_DIFFICULTY: u32 = 2;
    pub const DEFAULT_FALL_DAMAGE_OFFSET: f64 = 3.0;
    /// Default knockback impulse carried by a damage event.
    pub const DEFAULT_KNOCKBACK_BASE: f64 = 0.4;
    pub const DEFAULT_JUMP_VELOCITY: f64 = 0.42;

    pub fn new() -> Self {
        Self {
            attack_cooldown_ticks: Self::DEFAULT_ATTACK_COOLDOWN_TICKS,
            max_dead_ticks: Self::DEFAULT_MAX_DEAD_TICKS,
            fire_ticks_per_difficulty: Self::DEFAULT_FIRE_TICKS_PER_DIFFICULTY,
            fall_damage_offset: Self::DEFAULT_FALL_DAMAGE_OFFSET,
            jump_velocity: Self::DEFAULT_JUMP_VELOCITY,
        }
    }
}

impl Default for LivingConfig {
    fn default() -> Self {
        Self::new()
    }
}
