//! TLV type byte

use lwm2m_core::{Lwm2mError, Lwm2mResult};

const KIND_OFFSET: u8 = 6;
const KIND_MASK: u8 = 0b1100_0000;
const WIDE_IDENTIFIER_MASK: u8 = 0b0010_0000;
const LENGTH_TYPE_OFFSET: u8 = 3;
const LENGTH_TYPE_MASK: u8 = 0b0001_1000;
const LENGTH_BITS_MASK: u8 = 0b0000_0111;

/// Largest length a 3 byte length field can describe
pub const MAX_LENGTH: usize = 0x00FF_FFFF;

/// Number of significant bits in `value` (at least 1)
pub(crate) fn bit_length(value: usize) -> u32 {
    (usize::BITS - value.leading_zeros()).max(1)
}

/// Identifier kind, bits 7-6 of the type byte
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IdentifierKind {
    ObjectInstance = 0,
    ResourceInstance = 1,
    MultipleResource = 2,
    Resource = 3,
}

impl IdentifierKind {
    pub fn from_bits(bits: u8) -> Self {
        match bits & 0b11 {
            0 => IdentifierKind::ObjectInstance,
            1 => IdentifierKind::ResourceInstance,
            2 => IdentifierKind::MultipleResource,
            _ => IdentifierKind::Resource,
        }
    }

    pub fn to_bits(self) -> u8 {
        self as u8
    }
}

/// How the value length is carried, bits 4-3 of the type byte
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LengthType {
    /// Length 0 to 7, stored in bits 2-0 of the type byte
    Embedded(u8),
    /// 8-bit length field follows the identifier
    Bytes1,
    /// 16-bit length field follows the identifier
    Bytes2,
    /// 24-bit length field follows the identifier
    Bytes3,
}

impl LengthType {
    /// Choose the length encoding for a value of `length` bytes
    ///
    /// Lengths whose binary form fits in three bits are embedded; anything
    /// else uses `ceil(bits / 8)` length bytes.
    pub fn for_length(length: usize) -> Lwm2mResult<Self> {
        let bits = bit_length(length);
        if bits <= 3 {
            return Ok(LengthType::Embedded(length as u8));
        }
        match bits.div_ceil(8) {
            1 => Ok(LengthType::Bytes1),
            2 => Ok(LengthType::Bytes2),
            3 => Ok(LengthType::Bytes3),
            _ => Err(Lwm2mError::ValueTooLarge(length)),
        }
    }

    /// Value of the two-bit length-type field
    pub fn mode(&self) -> u8 {
        match self {
            LengthType::Embedded(_) => 0,
            LengthType::Bytes1 => 1,
            LengthType::Bytes2 => 2,
            LengthType::Bytes3 => 3,
        }
    }

    /// Number of explicit length bytes following the identifier
    pub fn width(&self) -> usize {
        self.mode() as usize
    }
}

/// Decoded form of a TLV type byte
///
/// ```text
///   7   6   5   4   3   2   1   0
/// +-------+---+-------+-----------+
/// | kind  | W | ltype |  length   |
/// +-------+---+-------+-----------+
/// ```
///
/// `W` selects a 16-bit identifier. The low three bits hold the value length
/// when `ltype` is 0 and are zero otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeByte {
    pub kind: IdentifierKind,
    pub wide_identifier: bool,
    pub length_type: LengthType,
}

impl TypeByte {
    /// Type byte for a record with the given identifier and value length
    pub fn for_record(kind: IdentifierKind, identifier: u16, length: usize) -> Lwm2mResult<Self> {
        Ok(Self {
            kind,
            wide_identifier: identifier > u8::MAX as u16,
            length_type: LengthType::for_length(length)?,
        })
    }

    pub fn pack(&self) -> u8 {
        let length_bits = match self.length_type {
            LengthType::Embedded(length) => length & LENGTH_BITS_MASK,
            _ => 0,
        };
        let wide = if self.wide_identifier { WIDE_IDENTIFIER_MASK } else { 0 };
        (self.kind.to_bits() << KIND_OFFSET)
            | wide
            | (self.length_type.mode() << LENGTH_TYPE_OFFSET)
            | length_bits
    }

    /// Decode a type byte
    ///
    /// When explicit length bytes follow, the low three bits are ignored.
    pub fn unpack(byte: u8) -> Self {
        let length_type = match (byte & LENGTH_TYPE_MASK) >> LENGTH_TYPE_OFFSET {
            0 => LengthType::Embedded(byte & LENGTH_BITS_MASK),
            1 => LengthType::Bytes1,
            2 => LengthType::Bytes2,
            _ => LengthType::Bytes3,
        };
        Self {
            kind: IdentifierKind::from_bits((byte & KIND_MASK) >> KIND_OFFSET),
            wide_identifier: byte & WIDE_IDENTIFIER_MASK != 0,
            length_type,
        }
    }

    /// Number of identifier bytes following the type byte
    pub fn identifier_width(&self) -> usize {
        if self.wide_identifier { 2 } else { 1 }
    }
}
