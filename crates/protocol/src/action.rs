//! Validated, typed inventory actions.
//!
//! Every transaction record decodes into exactly one of these variants (or
//! an explicit failure). The closed enum keeps the decoder's dispatch table
//! exhaustively matched at compile time; each variant carries only the
//! fields its kind needs. Actions reference their target container by
//! identity and are handed to the transaction-commit collaborator.

use basalt_entity::ItemStack;

/// Identity of the container a slot change targets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ContainerTarget {
    /// A real window the actor has open, by window id.
    Window(i32),
    /// The actor's client-side crafting grid.
    CraftingGrid,
}

/// Enchanting-table slot roles.
pub mod enchant_role {
    pub const INPUT: i8 = 0;
    pub const MATERIAL: i8 = 1;
    pub const OUTPUT: i8 = -1;
}

/// A server-validated inventory intent.
#[derive(Clone, Debug, PartialEq)]
pub enum InventoryAction {
    /// Replace the contents of one slot of a container.
    SlotChange {
        target: ContainerTarget,
        slot: u32,
        old_item: ItemStack,
        new_item: ItemStack,
    },
    /// Drop an item into the world.
    DropItem {
        old_item: ItemStack,
        new_item: ItemStack,
    },
    /// Conjure an item from the creative menu.
    CreativeCreate {
        old_item: ItemStack,
        new_item: ItemStack,
    },
    /// Destroy an item via the creative menu.
    CreativeDelete {
        old_item: ItemStack,
        new_item: ItemStack,
    },
    /// Take the result of a crafting recipe.
    CraftingTakeResult {
        old_item: ItemStack,
        new_item: ItemStack,
    },
    /// Consume one ingredient slot while crafting.
    CraftingTransferMaterial {
        slot: u32,
        old_item: ItemStack,
        new_item: ItemStack,
    },
    /// Place the item being repaired/renamed.
    AnvilInput {
        old_item: ItemStack,
        new_item: ItemStack,
    },
    /// Place the repair material.
    AnvilMaterial {
        old_item: ItemStack,
        new_item: ItemStack,
    },
    /// Take the anvil result.
    AnvilResult {
        old_item: ItemStack,
        new_item: ItemStack,
    },
    /// Move items through the enchanting table; `role` is one of
    /// [`enchant_role`].
    Enchant {
        role: i8,
        old_item: ItemStack,
        new_item: ItemStack,
    },
}
