//! TLV encoder for LwM2M resources

use crate::types::{IdentifierKind, TypeByte};
use bytes::{BufMut, Bytes, BytesMut};
use lwm2m_core::{Lwm2mError, Lwm2mResult, ResourceType, ResourceValue};

/// Smallest two's complement width (0, 1, 2, 4 or 8 bytes) holding `value`
fn integer_width(value: i64) -> usize {
    match value {
        0 => 0,
        -0x80..=0x7F => 1,
        -0x8000..=0x7FFF => 2,
        -0x8000_0000..=0x7FFF_FFFF => 4,
        _ => 8,
    }
}

/// Number of value bytes a resource of `resource_type` holding `value` needs
///
/// Fails with `InvalidType` when the value does not match the type.
pub fn byte_length(resource_type: ResourceType, value: &ResourceValue) -> Lwm2mResult<usize> {
    match (resource_type, value) {
        (ResourceType::None, ResourceValue::None) => Ok(0),
        (ResourceType::Boolean, ResourceValue::Boolean(_)) => Ok(1),
        (ResourceType::Integer, ResourceValue::Integer(i)) => Ok(integer_width(*i)),
        // Double precision values are not produced
        (ResourceType::Float, ResourceValue::Float(_)) => Ok(4),
        (ResourceType::String, ResourceValue::String(s)) => Ok(s.chars().count()),
        (ResourceType::Opaque, ResourceValue::Opaque(b)) => Ok(b.len()),
        (expected, value) => Err(Lwm2mError::InvalidType {
            expected,
            found: value.resource_type(),
        }),
    }
}

/// Encode only the value part of a record
pub fn value_bytes(resource_type: ResourceType, value: &ResourceValue) -> Lwm2mResult<Vec<u8>> {
    let mut encoder = TlvEncoder::new();
    encoder.encode_value(resource_type, value)?;
    Ok(encoder.into_bytes().to_vec())
}

/// TLV encoder writing records into a growable buffer
///
/// A failed `encode_record` leaves the buffer as it was.
pub struct TlvEncoder {
    buffer: BytesMut,
}

impl TlvEncoder {
    /// Create a new encoder
    pub fn new() -> Self {
        Self {
            buffer: BytesMut::new(),
        }
    }

    /// Create a new encoder with initial capacity
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buffer: BytesMut::with_capacity(capacity),
        }
    }

    /// Encode a resource record (identifier kind `Resource`)
    pub fn encode_resource(
        &mut self,
        identifier: u16,
        resource_type: ResourceType,
        value: &ResourceValue,
    ) -> Lwm2mResult<()> {
        self.encode_record(IdentifierKind::Resource, identifier, resource_type, value)
    }

    /// Encode a complete record: type byte, identifier, length, value
    pub fn encode_record(
        &mut self,
        kind: IdentifierKind,
        identifier: u16,
        resource_type: ResourceType,
        value: &ResourceValue,
    ) -> Lwm2mResult<()> {
        let length = byte_length(resource_type, value)?;
        let type_byte = TypeByte::for_record(kind, identifier, length)?;

        let start = self.buffer.len();
        self.buffer.reserve(1 + 2 + 3 + length);
        self.buffer.put_u8(type_byte.pack());
        self.encode_identifier(identifier);
        self.encode_length(length, type_byte.length_type.width());
        if let Err(e) = self.encode_value(resource_type, value) {
            self.buffer.truncate(start);
            return Err(e);
        }

        log::trace!(
            "Encoded TLV record {:?}/{} ({} value bytes): {:02X?}",
            kind,
            identifier,
            length,
            &self.buffer[start..]
        );
        Ok(())
    }

    /// Encode an identifier in one byte when it fits, two otherwise
    pub fn encode_identifier(&mut self, identifier: u16) {
        if identifier > u8::MAX as u16 {
            self.buffer.put_u16(identifier);
        } else {
            self.buffer.put_u8(identifier as u8);
        }
    }

    /// Encode the explicit length field (`width` of 0 writes nothing)
    pub fn encode_length(&mut self, length: usize, width: usize) {
        let bytes = (length as u32).to_be_bytes();
        self.buffer.put_slice(&bytes[bytes.len() - width.min(3)..]);
    }

    /// Encode the value bytes of a resource
    pub fn encode_value(
        &mut self,
        resource_type: ResourceType,
        value: &ResourceValue,
    ) -> Lwm2mResult<()> {
        // Validates the type before anything is written
        let length = byte_length(resource_type, value)?;
        match value {
            ResourceValue::None => {}
            ResourceValue::Boolean(b) => self.encode_bool(*b),
            ResourceValue::Integer(i) => self.encode_integer(*i, length),
            ResourceValue::Float(f) => self.encode_f32(*f),
            ResourceValue::String(s) => self.encode_string(s),
            ResourceValue::Opaque(b) => self.encode_bytes(b),
        }
        Ok(())
    }

    /// Encode a boolean as a single 0x01/0x00 byte
    pub fn encode_bool(&mut self, value: bool) {
        self.buffer.put_u8(if value { 0x01 } else { 0x00 });
    }

    /// Encode an integer as `width` big-endian two's complement bytes
    ///
    /// Positive values just above 2^7, 2^15 and 2^31 get a leading zero byte
    /// so the sign bit of the narrower width is never set.
    pub fn encode_integer(&mut self, value: i64, width: usize) {
        let bytes = value.to_be_bytes();
        self.buffer.put_slice(&bytes[bytes.len() - width.min(8)..]);
    }

    /// Encode an f32 (IEEE 754 big-endian)
    pub fn encode_f32(&mut self, value: f32) {
        self.buffer.put_u32(value.to_bits());
    }

    /// Encode a string with one byte per character
    pub fn encode_string(&mut self, value: &str) {
        if !value.is_ascii() {
            log::warn!("Non-ASCII characters in {:?} encoded as '?'", value);
        }
        for c in value.chars() {
            self.buffer.put_u8(if c.is_ascii() { c as u8 } else { b'?' });
        }
    }

    /// Encode raw bytes
    pub fn encode_bytes(&mut self, bytes: &[u8]) {
        self.buffer.put_slice(bytes);
    }

    /// Get the encoded bytes
    pub fn into_bytes(self) -> Bytes {
        self.buffer.freeze()
    }

    /// Get a reference to the encoded bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.buffer
    }

    /// Clear the encoder buffer
    pub fn clear(&mut self) {
        self.buffer.clear();
    }
}

impl Default for TlvEncoder {
    fn default() -> Self {
        Self::new()
    }
}
