//! Item snapshot type shared between the entity engine and the wire protocol.

/// A snapshot of an item slot: network id, metadata, count, and raw NBT.
///
/// Id 0 is the canonical empty slot; an empty stack compares equal regardless
/// of its other fields.
#[derive(Clone, Debug, Default, Eq, serde::Serialize, serde::Deserialize)]
pub struct ItemStack {
    pub id: i32,
    pub meta: u16,
    pub count: u8,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub nbt: Vec<u8>,
}

impl ItemStack {
    pub const EMPTY_ID: i32 = 0;

    pub fn new(id: i32, meta: u16, count: u8) -> Self {
        Self {
            id,
            meta,
            count,
            nbt: Vec::new(),
        }
    }

    /// The canonical empty slot.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.id == Self::EMPTY_ID || self.count == 0
    }

    /// Whether two stacks hold the same kind of item (id + meta + NBT),
    /// ignoring count.
    pub fn same_kind(&self, other: &ItemStack) -> bool {
        if self.is_empty() || other.is_empty() {
            return self.is_empty() && other.is_empty();
        }
        self.id == other.id && self.meta == other.meta && self.nbt == other.nbt
    }
}

impl PartialEq for ItemStack {
    fn eq(&self, other: &Self) -> bool {
        if self.is_empty() || other.is_empty() {
            return self.is_empty() && other.is_empty();
        }
        self.id == other.id
            && self.meta == other.meta
            && self.count == other.count
            && self.nbt == other.nbt
    }
}
