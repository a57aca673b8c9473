//! Authoritative living-entity state for the server simulation.
//!
//! `basalt-entity` owns the per-entity state machine: health and attributes,
//! status effects, damage resolution with knockback, breathing, and the
//! death lifecycle. The engine is driven by the external tick scheduler and
//! reaches the world only through the [`world::WorldHandle`] capability
//! trait; vetoable changes go through [`observer::EntityObserver`] before
//! they commit.

pub mod attribute;
pub mod config;
pub mod damage;
pub mod effect;
pub mod item;
pub mod living;
pub mod math;
pub mod observer;
pub mod persist;
pub mod raycast;
pub mod world;

pub use attribute::{Attribute, AttributeError, AttributeId, AttributeMap};
pub use config::LivingConfig;
pub use damage::{
    Attacker, DamageCause, DamageEvent, DamageModifier, DamageSource, HealEvent, RegainCause,
};
pub use effect::{Color, EffectInstance, EffectKind, EffectProfile, TickAction};
pub use item::ItemStack;
pub use living::{EntityCore, EntityFlags, Lifecycle, LivingEntity};
pub use math::{BlockPos, Vec3};
pub use observer::{
    DeathEvent, EffectAddEvent, EffectRemoveEvent, EntityEvent, EntityObserver, NullObserver,
    Verdict,
};
pub use persist::{EffectSaveData, LivingSaveData};
pub use raycast::VoxelRay;
pub use world::{Block, BlockId, WorldHandle};
