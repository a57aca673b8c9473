//! Common item-slot wire encoding, shared with the rest of the protocol.
//!
//! Layout: signed varint network id — id 0 is the empty slot and terminates
//! the encoding — then a signed varint aux value packing `(meta << 8) |
//! count`, then a little-endian `u16` NBT byte length followed by the raw
//! bytes.

use basalt_entity::ItemStack;
use bytes::{Buf, BufMut};

use crate::codec::{CodecError, ProtoDecode, ProtoEncode, VarInt32, get_bytes, get_u16_le};

impl ProtoEncode for ItemStack {
    fn proto_encode<B: BufMut>(&self, buf: &mut B) {
        if self.is_empty() {
            VarInt32(ItemStack::EMPTY_ID).proto_encode(buf);
            return;
        }
        VarInt32(self.id).proto_encode(buf);
        let aux = (i32::from(self.meta) << 8) | i32::from(self.count);
        VarInt32(aux).proto_encode(buf);
        buf.put_u16_le(self.nbt.len() as u16);
        buf.put_slice(&self.nbt);
    }
}

impl ProtoDecode for ItemStack {
    fn proto_decode<B: Buf>(buf: &mut B) -> Result<Self, CodecError> {
        let id = VarInt32::proto_decode(buf)?.0;
        if id == ItemStack::EMPTY_ID {
            return Ok(ItemStack::empty());
        }
        let aux = VarInt32::proto_decode(buf)?.0;
        if aux < 0 {
            return Err(CodecError::InvalidItemStack("negative aux value"));
        }
        let count = (aux & 0xff) as u8;
        let meta = ((aux >> 8) & 0xffff) as u16;
        let nbt_len = usize::from(get_u16_le(buf)?);
        let nbt = get_bytes(buf, nbt_len)?;
        Ok(ItemStack {
            id,
            meta,
            count,
            nbt,
        })
    }
}
