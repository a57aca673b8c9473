//! Wire primitives: variable-length integers over [`bytes`] buffers.
//!
//! All protocol integers are variable-length: `VarUInt32` is plain LEB128,
//! `VarInt32` adds zigzag so small negative values (fake-window sentinel
//! codes) stay short on the wire.

use bytes::{Buf, BufMut};

/// Errors from reading malformed wire data.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CodecError {
    #[error("unexpected end of buffer")]
    UnexpectedEof,

    #[error("variable-length integer exceeds 5 bytes")]
    VarIntTooLong,

    #[error("unknown transaction source kind {0}")]
    InvalidSourceKind(u32),

    #[error("malformed item stack: {0}")]
    InvalidItemStack(&'static str),
}

/// Types that can be written to a wire buffer.
pub trait ProtoEncode {
    fn proto_encode<B: BufMut>(&self, buf: &mut B);
}

/// Types that can be read back from a wire buffer.
pub trait ProtoDecode: Sized {
    fn proto_decode<B: Buf>(buf: &mut B) -> Result<Self, CodecError>;
}

/// Unsigned 32-bit LEB128 integer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VarUInt32(pub u32);

impl ProtoEncode for VarUInt32 {
    fn proto_encode<B: BufMut>(&self, buf: &mut B) {
        let mut value = self.0;
        loop {
            let byte = (value & 0x7f) as u8;
            value >>= 7;
            if value == 0 {
                buf.put_u8(byte);
                return;
            }
            buf.put_u8(byte | 0x80);
        }
    }
}

impl ProtoDecode for VarUInt32 {
    fn proto_decode<B: Buf>(buf: &mut B) -> Result<Self, CodecError> {
        let mut value = 0u32;
        for shift in 0..5 {
            if !buf.has_remaining() {
                return Err(CodecError::UnexpectedEof);
            }
            let byte = buf.get_u8();
            value |= u32::from(byte & 0x7f) << (shift * 7);
            if byte & 0x80 == 0 {
                return Ok(VarUInt32(value));
            }
        }
        Err(CodecError::VarIntTooLong)
    }
}

/// Signed 32-bit zigzag-encoded integer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VarInt32(pub i32);

impl ProtoEncode for VarInt32 {
    fn proto_encode<B: BufMut>(&self, buf: &mut B) {
        let zigzag = ((self.0 << 1) ^ (self.0 >> 31)) as u32;
        VarUInt32(zigzag).proto_encode(buf);
    }
}

impl ProtoDecode for VarInt32 {
    fn proto_decode<B: Buf>(buf: &mut B) -> Result<Self, CodecError> {
        let zigzag = VarUInt32::proto_decode(buf)?.0;
        Ok(VarInt32((zigzag >> 1) as i32 ^ -((zigzag & 1) as i32)))
    }
}

/// Checked little-endian `u16` read.
pub fn get_u16_le<B: Buf>(buf: &mut B) -> Result<u16, CodecError> {
    if buf.remaining() < 2 {
        return Err(CodecError::UnexpectedEof);
    }
    Ok(buf.get_u16_le())
}

/// Checked raw byte read.
pub fn get_bytes<B: Buf>(buf: &mut B, len: usize) -> Result<Vec<u8>, CodecError> {
    if buf.remaining() < len {
        return Err(CodecError::UnexpectedEof);
    }
    let mut bytes = vec![0u8; len];
    buf.copy_to_slice(&mut bytes);
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn round_trip_unsigned(value: u32) -> u32 {
        let mut buf = Vec::new();
        VarUInt32(value).proto_encode(&mut buf);
        VarUInt32::proto_decode(&mut buf.as_slice()).unwrap().0
    }

    fn round_trip_signed(value: i32) -> i32 {
        let mut buf = Vec::new();
        VarInt32(value).proto_encode(&mut buf);
        VarInt32::proto_decode(&mut buf.as_slice()).unwrap().0
    }

    #[test]
    fn unsigned_round_trips() {
        for value in [0, 1, 127, 128, 300, 99999, u32::MAX] {
            assert_eq!(round_trip_unsigned(value), value);
        }
    }

    #[test]
    fn signed_round_trips() {
        for value in [0, 1, -1, -2, -100, 120, i32::MIN, i32::MAX] {
            assert_eq!(round_trip_signed(value), value);
        }
    }

    #[test]
    fn small_negatives_encode_short() {
        let mut buf = Vec::new();
        VarInt32(-2).proto_encode(&mut buf);
        assert_eq!(buf.len(), 1);
    }

    #[test]
    fn truncated_varint_is_eof() {
        let bytes = [0x80u8, 0x80];
        assert_eq!(
            VarUInt32::proto_decode(&mut &bytes[..]),
            Err(CodecError::UnexpectedEof)
        );
    }

    #[test]
    fn overlong_varint_is_rejected() {
        let bytes = [0xffu8, 0xff, 0xff, 0xff, 0xff, 0x01];
        assert_eq!(
            VarUInt32::proto_decode(&mut &bytes[..]),
            Err(CodecError::VarIntTooLong)
        );
    }
}
