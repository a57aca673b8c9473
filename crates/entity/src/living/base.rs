//! Base (non-living) entity state consumed by the living engine.
//!
//! `EntityCore` flattens the base-entity contract: raw floating health,
//! last-damage bookkeeping, motion, fire state, and the generic boolean/short
//! property channels observers receive (breathing flag, air-supply counters,
//! aggregate potion color).

use bitflags::bitflags;

use crate::damage::DamageCause;
use crate::effect::Color;
use crate::math::Vec3;

bitflags! {
    /// Generic per-entity boolean property channel.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    pub struct EntityFlags: u32 {
        const ON_FIRE = 1 << 0;
        const BREATHING = 1 << 1;
        /// Maintained by the physics collaborator.
        const ON_GROUND = 1 << 2;
    }
}

/// Base entity state shared by every animate actor.
#[derive(Clone, Debug, PartialEq)]
pub struct EntityCore {
    position: Vec3,
    motion: Vec3,
    yaw: f64,
    pitch: f64,
    eye_height: f64,
    health: f32,
    last_damage: Option<(DamageCause, f32)>,
    fire_ticks: u32,
    air_ticks: i32,
    max_air_ticks: i32,
    flags: EntityFlags,
    potion_color: Color,
    potion_ambient: bool,
}

impl EntityCore {
    pub const DEFAULT_EYE_HEIGHT: f64 = 1.62;
    pub const DEFAULT_MAX_AIR_TICKS: i32 = 400;

    pub fn new() -> Self {
        Self {
            position: Vec3::ZERO,
            motion: Vec3::ZERO,
            yaw: 0.0,
            pitch: 0.0,
            eye_height: Self::DEFAULT_EYE_HEIGHT,
            health: 20.0,
            last_damage: None,
            fire_ticks: 0,
            air_ticks: Self::DEFAULT_MAX_AIR_TICKS,
            max_air_ticks: Self::DEFAULT_MAX_AIR_TICKS,
            flags: EntityFlags::BREATHING,
            potion_color: Color::TRANSPARENT,
            potion_ambient: false,
        }
    }

    // ===== position & orientation =====

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    /// Eye position the suffocation/breathing checks and sight rays start
    /// from.
    pub fn eye_position(&self) -> Vec3 {
        self.position.add(Vec3::new(0.0, self.eye_height, 0.0))
    }

    pub fn eye_height(&self) -> f64 {
        self.eye_height
    }

    pub fn set_eye_height(&mut self, eye_height: f64) {
        self.eye_height = eye_height;
    }

    pub fn yaw(&self) -> f64 {
        self.yaw
    }

    pub fn pitch(&self) -> f64 {
        self.pitch
    }

    pub fn set_rotation(&mut self, yaw: f64, pitch: f64) {
        self.yaw = yaw;
        self.pitch = pitch;
    }

    // ===== motion =====

    pub fn motion(&self) -> Vec3 {
        self.motion
    }

    pub fn set_motion(&mut self, motion: Vec3) {
        self.motion = motion;
    }

    // ===== health bookkeeping (raw storage; clamping lives in the engine) =====

    pub(crate) fn raw_health(&self) -> f32 {
        self.health
    }

    pub(crate) fn set_raw_health(&mut self, health: f32) {
        self.health = health;
    }

    /// The cause and base amount of the last committed damage event.
    pub fn last_damage(&self) -> Option<(DamageCause, f32)> {
        self.last_damage
    }

    pub(crate) fn set_last_damage(&mut self, cause: DamageCause, amount: f32) {
        self.last_damage = Some((cause, amount));
    }

    // ===== fire =====

    pub fn is_on_fire(&self) -> bool {
        self.fire_ticks > 0
    }

    pub fn fire_ticks(&self) -> u32 {
        self.fire_ticks
    }

    /// Ignites the entity; a shorter duration never shortens an existing
    /// burn.
    pub fn set_on_fire(&mut self, ticks: u32) {
        self.fire_ticks = self.fire_ticks.max(ticks);
        self.flags.set(EntityFlags::ON_FIRE, self.fire_ticks > 0);
    }

    pub fn extinguish(&mut self) {
        self.fire_ticks = 0;
        self.flags.remove(EntityFlags::ON_FIRE);
    }

    pub(crate) fn decay_fire(&mut self, tick_diff: u32) {
        self.fire_ticks = self.fire_ticks.saturating_sub(tick_diff);
        self.flags.set(EntityFlags::ON_FIRE, self.fire_ticks > 0);
    }

    // ===== breathing / air supply =====

    pub fn is_breathing(&self) -> bool {
        self.flags.contains(EntityFlags::BREATHING)
    }

    pub fn set_breathing(&mut self, breathing: bool) {
        self.flags.set(EntityFlags::BREATHING, breathing);
    }

    pub fn air_ticks(&self) -> i32 {
        self.air_ticks
    }

    pub fn set_air_ticks(&mut self, ticks: i32) {
        self.air_ticks = ticks;
    }

    pub fn max_air_ticks(&self) -> i32 {
        self.max_air_ticks
    }

    pub fn set_max_air_ticks(&mut self, ticks: i32) {
        self.max_air_ticks = ticks;
    }

    // ===== physics-maintained flags =====

    pub fn is_on_ground(&self) -> bool {
        self.flags.contains(EntityFlags::ON_GROUND)
    }

    pub fn set_on_ground(&mut self, on_ground: bool) {
        self.flags.set(EntityFlags::ON_GROUND, on_ground);
    }

    pub fn flags(&self) -> EntityFlags {
        self.flags
    }

    // ===== potion color property channel =====

    pub fn potion_color(&self) -> Color {
        self.potion_color
    }

    pub fn potion_ambient(&self) -> bool {
        self.potion_ambient
    }

    pub(crate) fn set_potion_color(&mut self, color: Color, ambient: bool) {
        self.potion_color = color;
        self.potion_ambient = ambient;
    }
}

impl Default for EntityCore {
    fn default() -> Self {
        Self::new()
    }
}
