//! Primitive field encoders.
//!
//! Every field has a fixed byte size inside its owning struct. Pointer-like
//! fields hold a 16-bit little-endian offset of another object in the packed
//! buffer, or 0 when absent.

use super::graph::ObjectId;

/// A field of a [`Struct`](super::Struct).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Field {
    UInt8(u8),
    UInt16(u16),
    Int16(i16),
    /// Pointer to a NUL-terminated string object.
    String(ObjectId),
    /// Optional pointer to a struct object.
    ObjectPtr(Option<ObjectId>),
    /// Item count and pointer to the first item; items are laid out back to back.
    ObjectList(Vec<ObjectId>),
}

impl Field {
    /// Truncating conversion, `UInt8(300)` packs as `44`.
    pub fn u8(value: i32) -> Self {
        Self::UInt8(value as u8)
    }

    pub fn u16(value: i32) -> Self {
        Self::UInt16(value as u16)
    }

    pub fn i16(value: i32) -> Self {
        Self::Int16(value as i16)
    }

    pub fn flag(value: bool) -> Self {
        Self::UInt8(u8::from(value))
    }

    pub fn size(&self) -> usize {
        match self {
            Self::UInt8(_) => 1,
            Self::UInt16(_) | Self::Int16(_) | Self::String(_) | Self::ObjectPtr(_) => 2,
            Self::ObjectList(_) => 3,
        }
    }

    /// Objects this field points at, in field order.
    pub fn references(&self) -> &[ObjectId] {
        match self {
            Self::String(id) => std::slice::from_ref(id),
            Self::ObjectPtr(Some(id)) => std::slice::from_ref(id),
            Self::ObjectList(items) => items,
            _ => &[],
        }
    }

    /// Append the packed bytes, resolving pointers through `offset_of`.
    pub(crate) fn encode(&self, out: &mut Vec<u8>, offset_of: impl Fn(ObjectId) -> u16) {
        match self {
            Self::UInt8(v) => out.push(*v),
            Self::UInt16(v) => out.extend_from_slice(&pack_u16(*v)),
            Self::Int16(v) => out.extend_from_slice(&pack_i16(*v)),
            Self::String(id) => out.extend_from_slice(&pack_u16(offset_of(*id))),
            Self::ObjectPtr(id) => {
                let offset = id.map(|id| offset_of(id)).unwrap_or(0);
                out.extend_from_slice(&pack_u16(offset));
            }
            Self::ObjectList(items) => {
                out.push(items.len() as u8);
                let first = items.first().map(|id| offset_of(*id)).unwrap_or(0);
                out.extend_from_slice(&pack_u16(first));
            }
        }
    }
}

pub fn pack_u16(value: u16) -> [u8; 2] {
    value.to_le_bytes()
}

/// Two's complement, little-endian.
pub fn pack_i16(value: i16) -> [u8; 2] {
    value.to_le_bytes()
}

/// One byte per character; characters outside Latin-1 become `?`.
pub fn encode_string(value: &str) -> Vec<u8> {
    let mut bytes: Vec<u8> = value
        .chars()
        .map(|ch| u8::try_from(u32::from(ch)).unwrap_or(b'?'))
        .collect();
    bytes.push(0);
    bytes
}
