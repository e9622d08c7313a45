//! The AEON binary type tag table.
//!
//! A fixed one-byte enumeration identifying which value variant and physical
//! encoding follows. The numeric values are the wire-compatibility contract
//! between any two interoperating implementations.

/// One-byte type tag preceding every encoded value.
///
/// Tags 0 through 4 and the `*Empty` tags are self-contained (no payload
/// bytes follow). All others are followed by a fixed-width field or a
/// varuint-length-prefixed field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum AeonTag {
    Null = 0,
    BoolTrue = 1,
    BoolFalse = 2,
    Zero = 3,
    One = 4,
    Int8 = 5,
    Int16 = 6,
    Int32 = 7,
    Int64 = 8,
    Uint8 = 9,
    Uint16 = 10,
    Uint32 = 11,
    /// Negated unsigned: magnitude stored as u8, value is its negation.
    IUint8 = 12,
    IUint16 = 13,
    IUint32 = 14,
    Real32 = 15,
    Real64 = 16,
    Str = 17,
    StrEmpty = 18,
    Array = 19,
    ArrayEmpty = 20,
    Map = 21,
    MapEmpty = 22,
    Binary = 23,
    BinaryEmpty = 24,
}

impl AeonTag {
    /// Maps a wire byte back to a tag. Returns `None` for unassigned bytes.
    pub fn from_u8(byte: u8) -> Option<AeonTag> {
        Some(match byte {
            0 => AeonTag::Null,
            1 => AeonTag::BoolTrue,
            2 => AeonTag::BoolFalse,
            3 => AeonTag::Zero,
            4 => AeonTag::One,
            5 => AeonTag::Int8,
            6 => AeonTag::Int16,
            7 => AeonTag::Int32,
            8 => AeonTag::Int64,
            9 => AeonTag::Uint8,
            10 => AeonTag::Uint16,
            11 => AeonTag::Uint32,
            12 => AeonTag::IUint8,
            13 => AeonTag::IUint16,
            14 => AeonTag::IUint32,
            15 => AeonTag::Real32,
            16 => AeonTag::Real64,
            17 => AeonTag::Str,
            18 => AeonTag::StrEmpty,
            19 => AeonTag::Array,
            20 => AeonTag::ArrayEmpty,
            21 => AeonTag::Map,
            22 => AeonTag::MapEmpty,
            23 => AeonTag::Binary,
            24 => AeonTag::BinaryEmpty,
            _ => return None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tag_bytes_roundtrip() {
        for byte in 0u8..=24 {
            let tag = AeonTag::from_u8(byte).unwrap();
            assert_eq!(tag as u8, byte);
        }
    }

    #[test]
    fn unassigned_bytes_have_no_tag() {
        for byte in 25u8..=255 {
            assert_eq!(AeonTag::from_u8(byte), None);
        }
    }
}
