//! World capability handle consumed by the entity engine.
//!
//! The engine never holds a parent pointer into the simulation; it receives a
//! [`WorldHandle`] per call. Tests supply a fake implementation instead of
//! constructing a full world.

use crate::item::ItemStack;
use crate::math::{BlockPos, Vec3};

/// Numeric block identifier. Id 0 is air.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct BlockId(pub u32);

impl BlockId {
    pub const AIR: BlockId = BlockId(0);

    pub fn is_air(self) -> bool {
        self == Self::AIR
    }
}

/// The subset of block state the entity engine inspects.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Block {
    pub id: BlockId,
    pub solid: bool,
    pub liquid: bool,
}

impl Block {
    pub const AIR: Block = Block {
        id: BlockId::AIR,
        solid: false,
        liquid: false,
    };

    pub const fn solid(id: BlockId) -> Self {
        Self {
            id,
            solid: true,
            liquid: false,
        }
    }

    pub const fn liquid(id: BlockId) -> Self {
        Self {
            id,
            solid: false,
            liquid: true,
        }
    }
}

/// Capability handle onto the world owning an entity.
///
/// Read methods serve suffocation checks and line-of-sight rays; the mutating
/// methods spawn death drops and released experience. Implementations must
/// answer `block_at` for any coordinate (out-of-bounds lookups return air).
pub trait WorldHandle {
    /// Block lookup by integer coordinate.
    fn block_at(&self, pos: BlockPos) -> Block;

    /// World difficulty scalar (0 = peaceful).
    fn difficulty(&self) -> u8;

    /// Spawns a dropped item entity at the given position.
    fn spawn_item(&mut self, pos: Vec3, item: ItemStack);

    /// Releases experience orbs at the given position.
    fn release_experience(&mut self, pos: Vec3, amount: u32);
}
