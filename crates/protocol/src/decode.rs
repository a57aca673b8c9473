//! Stateless translation of transaction records into validated actions.
//!
//! `decode_action` implements the full source/window dispatch table. Every
//! failure is an explicit, distinct error carrying the actor identity and
//! the offending values; nothing here panics on adversarial input, and no
//! record is ever mapped to a guessed default.

use basalt_entity::ItemStack;
use tracing::warn;

use crate::action::{ContainerTarget, InventoryAction, enchant_role};
use crate::transaction::{
    ARMOR_SLOT_OFFSET, SourceKind, TransactionRecord, magic_slot, window,
};

/// The decoder's view of the requesting actor.
///
/// Read at call time; the caller must not reopen/close windows mid-decode.
pub trait TransactionActor {
    /// Identity used in error context and logs.
    fn name(&self) -> &str;

    /// Whether the actor currently has the given window open.
    fn has_open_window(&self, window_id: i32) -> bool;

    /// Searches the actor's crafting grid for a slot whose current contents
    /// match the given snapshot.
    fn crafting_slot_matching(&self, item: &ItemStack) -> Option<u32>;
}

/// Reasons a transaction record cannot be mapped to an action.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum DecodeError {
    #[error("{actor} has no open container with window id {window_id}")]
    NoSuchOpenContainer { actor: String, window_id: i32 },

    #[error("unexpected world-interaction slot code {slot}; only drop-item comes from clients")]
    UnexpectedWorldSlot { slot: u32 },

    #[error("unexpected creative action slot code {slot}")]
    UnexpectedCreativeSlot { slot: u32 },

    #[error("{actor} sent the server-only anvil output source")]
    AnvilOutputFromClient { actor: String },

    #[error("{actor}'s crafting grid does not contain the claimed item")]
    NoMatchingFakeSlot { actor: String },

    #[error("{actor} sent unrecognized fake-window code {window_id}")]
    UnknownFakeWindow { actor: String, window_id: i32 },
}

/// Decodes one transaction record into a validated action for the given
/// actor.
pub fn decode_action(
    record: &TransactionRecord,
    actor: &(impl TransactionActor + ?Sized),
) -> Result<InventoryAction, DecodeError> {
    match record.source {
        SourceKind::Container => decode_container(record, actor),
        SourceKind::World => decode_world(record),
        SourceKind::Creative => decode_creative(record),
        SourceKind::Legacy => decode_fake_window(record, actor),
    }
    .inspect_err(|error| warn!(actor = actor.name(), %error, "transaction record rejected"))
}

fn decode_container(
    record: &TransactionRecord,
    actor: &(impl TransactionActor + ?Sized),
) -> Result<InventoryAction, DecodeError> {
    // The armor window is an alias of the main inventory with offset slots;
    // remap before the open-window lookup.
    let (window_id, slot) = if record.window_id == window::ARMOR {
        (window::INVENTORY, record.slot + ARMOR_SLOT_OFFSET)
    } else {
        (record.window_id, record.slot)
    };

    if !actor.has_open_window(window_id) {
        return Err(DecodeError::NoSuchOpenContainer {
            actor: actor.name().to_owned(),
            window_id,
        });
    }

    Ok(InventoryAction::SlotChange {
        target: ContainerTarget::Window(window_id),
        slot,
        old_item: record.old_item.clone(),
        new_item: record.new_item.clone(),
    })
}

fn decode_world(record: &TransactionRecord) -> Result<InventoryAction, DecodeError> {
    if record.slot != magic_slot::DROP_ITEM {
        return Err(DecodeError::UnexpectedWorldSlot { slot: record.slot });
    }
    Ok(InventoryAction::DropItem {
        old_item: record.old_item.clone(),
        new_item: record.new_item.clone(),
    })
}

fn decode_creative(record: &TransactionRecord) -> Result<InventoryAction, DecodeError> {
    match record.slot {
        magic_slot::CREATIVE_DELETE_ITEM => Ok(InventoryAction::CreativeDelete {
            old_item: record.old_item.clone(),
            new_item: record.new_item.clone(),
        }),
        magic_slot::CREATIVE_CREATE_ITEM => Ok(InventoryAction::CreativeCreate {
            old_item: record.old_item.clone(),
            new_item: record.new_item.clone(),
        }),
        slot => Err(DecodeError::UnexpectedCreativeSlot { slot }),
    }
}

fn decode_fake_window(
    record: &TransactionRecord,
    actor: &(impl TransactionActor + ?Sized),
) -> Result<InventoryAction, DecodeError> {
    let old_item = || record.old_item.clone();
    let new_item = || record.new_item.clone();

    match record.window_id {
        window::CRAFTING_ADD_INGREDIENT | window::CRAFTING_REMOVE_INGREDIENT => {
            Ok(InventoryAction::SlotChange {
                target: ContainerTarget::CraftingGrid,
                slot: record.slot,
                old_item: old_item(),
                new_item: new_item(),
            })
        }
        window::CRAFTING_RESULT => Ok(InventoryAction::CraftingTakeResult {
            old_item: old_item(),
            new_item: new_item(),
        }),
        window::CRAFTING_USE_INGREDIENT => Ok(InventoryAction::CraftingTransferMaterial {
            slot: record.slot,
            old_item: old_item(),
            new_item: new_item(),
        }),
        window::ANVIL_INPUT => Ok(InventoryAction::AnvilInput {
            old_item: old_item(),
            new_item: new_item(),
        }),
        window::ANVIL_MATERIAL => Ok(InventoryAction::AnvilMaterial {
            old_item: old_item(),
            new_item: new_item(),
        }),
        window::ANVIL_RESULT => Ok(InventoryAction::AnvilResult {
            old_item: old_item(),
            new_item: new_item(),
        }),
        window::ANVIL_OUTPUT => Err(DecodeError::AnvilOutputFromClient {
            actor: actor.name().to_owned(),
        }),
        window::ENCHANT_INPUT => Ok(InventoryAction::Enchant {
            role: enchant_role::INPUT,
            old_item: old_item(),
            new_item: new_item(),
        }),
        window::ENCHANT_MATERIAL => Ok(InventoryAction::Enchant {
            role: enchant_role::MATERIAL,
            old_item: old_item(),
            new_item: new_item(),
        }),
        window::ENCHANT_OUTPUT => Ok(InventoryAction::Enchant {
            role: enchant_role::OUTPUT,
            old_item: old_item(),
            new_item: new_item(),
        }),
        window::CONTAINER_DROP_CONTENTS => {
            // The record does not say which slot the item sits in; find it.
            let slot = actor.crafting_slot_matching(&record.old_item).ok_or_else(|| {
                DecodeError::NoMatchingFakeSlot {
                    actor: actor.name().to_owned(),
                }
            })?;
            Ok(InventoryAction::SlotChange {
                target: ContainerTarget::CraftingGrid,
                slot,
                old_item: old_item(),
                new_item: new_item(),
            })
        }
        window_id => Err(DecodeError::UnknownFakeWindow {
            actor: actor.name().to_owned(),
            window_id,
        }),
    }
}
