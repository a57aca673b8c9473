//! Wire protocol and inventory-transaction decoding.
//!
//! `basalt-protocol` turns untrusted client transaction packets into
//! strongly typed, server-validated intents: the [`codec`] module holds the
//! varint primitives, [`transaction`] the per-record wire layout, and
//! [`decode`] the stateless record-to-action dispatch. Malformed or
//! adversarial input is rejected with typed errors; nothing here panics or
//! guesses a default action.

pub mod action;
pub mod codec;
pub mod decode;
pub mod slot;
pub mod transaction;

pub use action::{ContainerTarget, InventoryAction, enchant_role};
pub use codec::{CodecError, ProtoDecode, ProtoEncode, VarInt32, VarUInt32};
pub use decode::{DecodeError, TransactionActor, decode_action};
pub use transaction::{
    ARMOR_SLOT_OFFSET, SourceKind, TransactionRecord, magic_slot, window,
};
