//! Transaction source records: one decoded wire entry per claimed slot
//! change.
//!
//! The wire layout is a fixed, ordered field sequence keyed off the source
//! kind: an unsigned varint kind, then a kind-specific header (container and
//! fake-window sources write a signed varint window id, world sources an
//! unsigned varint auxiliary code, creative sources nothing), then the
//! unsigned varint slot index and the old/new item snapshots.

use basalt_entity::ItemStack;
use bytes::{Buf, BufMut};

use crate::codec::{CodecError, ProtoDecode, ProtoEncode, VarInt32, VarUInt32};

/// Well-known window identifiers.
pub mod window {
    /// No window; placeholder for kinds that carry none.
    pub const NONE: i32 = -1;
    /// The actor's main inventory.
    pub const INVENTORY: i32 = 0;
    /// The dedicated armor window; remapped onto the main inventory with a
    /// slot offset before lookup.
    pub const ARMOR: i32 = 120;

    // Fake-window sentinel codes: client-side-only containers with no
    // permanent server-side window id.
    pub const CRAFTING_ADD_INGREDIENT: i32 = -2;
    pub const CRAFTING_REMOVE_INGREDIENT: i32 = -3;
    pub const CRAFTING_RESULT: i32 = -4;
    pub const CRAFTING_USE_INGREDIENT: i32 = -5;

    pub const ANVIL_INPUT: i32 = -10;
    pub const ANVIL_MATERIAL: i32 = -11;
    pub const ANVIL_RESULT: i32 = -12;
    /// Server-originated only; never valid from a client.
    pub const ANVIL_OUTPUT: i32 = -13;

    pub const ENCHANT_INPUT: i32 = -15;
    pub const ENCHANT_MATERIAL: i32 = -16;
    pub const ENCHANT_OUTPUT: i32 = -17;

    /// Any client-side window dropping its contents on close.
    pub const CONTAINER_DROP_CONTENTS: i32 = -100;
}

/// Magic slot codes reused per source kind.
pub mod magic_slot {
    pub const CREATIVE_DELETE_ITEM: u32 = 0;
    pub const CREATIVE_CREATE_ITEM: u32 = 1;

    pub const DROP_ITEM: u32 = 0;
    pub const PICKUP_ITEM: u32 = 1;
}

/// Slot offset applied when remapping the armor window onto the main
/// inventory.
pub const ARMOR_SLOT_OFFSET: u32 = 36;

/// Where a transaction record claims to originate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SourceKind {
    /// A real container window the actor has open.
    Container,
    /// Dropping into / picking up from the world.
    World,
    /// The creative inventory menu.
    Creative,
    /// Legacy fake-window source for client-side-only containers.
    Legacy,
}

impl SourceKind {
    const CONTAINER: u32 = 0;
    const WORLD: u32 = 2;
    const CREATIVE: u32 = 3;
    const LEGACY: u32 = 99999;

    pub fn to_wire(self) -> u32 {
        match self {
            SourceKind::Container => Self::CONTAINER,
            SourceKind::World => Self::WORLD,
            SourceKind::Creative => Self::CREATIVE,
            SourceKind::Legacy => Self::LEGACY,
        }
    }

    pub fn from_wire(value: u32) -> Result<Self, CodecError> {
        match value {
            Self::CONTAINER => Ok(SourceKind::Container),
            Self::WORLD => Ok(SourceKind::World),
            Self::CREATIVE => Ok(SourceKind::Creative),
            Self::LEGACY => Ok(SourceKind::Legacy),
            other => Err(CodecError::InvalidSourceKind(other)),
        }
    }
}

/// One wire entry describing a claimed inventory slot change.
///
/// Transient: consumed immediately into an action by the decoder.
#[derive(Clone, Debug, PartialEq)]
pub struct TransactionRecord {
    pub source: SourceKind,
    /// Window id for container and fake-window sources; [`window::NONE`]
    /// otherwise.
    pub window_id: i32,
    /// Auxiliary code carried by world sources.
    pub world_flags: u32,
    pub slot: u32,
    pub old_item: ItemStack,
    pub new_item: ItemStack,
}

impl TransactionRecord {
    pub fn new(source: SourceKind, slot: u32, old_item: ItemStack, new_item: ItemStack) -> Self {
        Self {
            source,
            window_id: window::NONE,
            world_flags: 0,
            slot,
            old_item,
            new_item,
        }
    }

    pub fn with_window_id(mut self, window_id: i32) -> Self {
        self.window_id = window_id;
        self
    }
}

impl ProtoEncode for TransactionRecord {
    fn proto_encode<B: BufMut>(&self, buf: &mut B) {
        VarUInt32(self.source.to_wire()).proto_encode(buf);
        match self.source {
            SourceKind::Container | SourceKind::Legacy => {
                VarInt32(self.window_id).proto_encode(buf);
            }
            SourceKind::World => {
                VarUInt32(self.world_flags).proto_encode(buf);
            }
            SourceKind::Creative => {}
        }
        VarUInt32(self.slot).proto_encode(buf);
        self.old_item.proto_encode(buf);
        self.new_item.proto_encode(buf);
    }
}

impl ProtoDecode for TransactionRecord {
    fn proto_decode<B: Buf>(buf: &mut B) -> Result<Self, CodecError> {
        let source = SourceKind::from_wire(VarUInt32::proto_decode(buf)?.0)?;
        let mut window_id = window::NONE;
        let mut world_flags = 0;
        match source {
            SourceKind::Container | SourceKind::Legacy => {
                window_id = VarInt32::proto_decode(buf)?.0;
            }
            SourceKind::World => {
                world_flags = VarUInt32::proto_decode(buf)?.0;
            }
            SourceKind::Creative => {}
        }
        let slot = VarUInt32::proto_decode(buf)?.0;
        let old_item = ItemStack::proto_decode(buf)?;
        let new_item = ItemStack::proto_decode(buf)?;
        Ok(Self {
            source,
            window_id,
            world_flags,
            slot,
            old_item,
            new_item,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn round_trip(record: &TransactionRecord) -> TransactionRecord {
        let mut buf = Vec::new();
        record.proto_encode(&mut buf);
        TransactionRecord::proto_decode(&mut buf.as_slice()).unwrap()
    }

    #[test]
    fn container_record_round_trips() {
        let record = TransactionRecord::new(
            SourceKind::Container,
            5,
            ItemStack::new(260, 0, 1),
            ItemStack::empty(),
        )
        .with_window_id(window::INVENTORY);
        assert_eq!(round_trip(&record), record);
    }

    #[test]
    fn world_record_carries_flags() {
        let mut record = TransactionRecord::new(
            SourceKind::World,
            magic_slot::DROP_ITEM,
            ItemStack::new(3, 0, 64),
            ItemStack::empty(),
        );
        record.world_flags = 1;
        assert_eq!(round_trip(&record), record);
    }

    #[test]
    fn creative_record_writes_no_header() {
        let record = TransactionRecord::new(
            SourceKind::Creative,
            magic_slot::CREATIVE_CREATE_ITEM,
            ItemStack::new(276, 0, 1),
            ItemStack::empty(),
        );
        let mut buf = Vec::new();
        record.proto_encode(&mut buf);
        // kind + slot + two single-byte empty-ish items; no window varint.
        let decoded = TransactionRecord::proto_decode(&mut buf.as_slice()).unwrap();
        assert_eq!(decoded.window_id, window::NONE);
        assert_eq!(decoded, record);
    }

    #[test]
    fn legacy_record_preserves_negative_window_codes() {
        let record = TransactionRecord::new(
            SourceKind::Legacy,
            0,
            ItemStack::empty(),
            ItemStack::new(265, 0, 3),
        )
        .with_window_id(window::CRAFTING_ADD_INGREDIENT);
        assert_eq!(round_trip(&record), record);
    }

    #[test]
    fn unknown_source_kind_fails_explicitly() {
        let mut buf = Vec::new();
        VarUInt32(7).proto_encode(&mut buf);
        assert_eq!(
            TransactionRecord::proto_decode(&mut buf.as_slice()),
            Err(CodecError::InvalidSourceKind(7))
        );
    }
}
