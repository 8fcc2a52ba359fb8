//! TLV decoder for LwM2M resources

use crate::types::{IdentifierKind, LengthType, TypeByte};
use bytes::Bytes;
use lwm2m_core::{Lwm2mError, Lwm2mResult, ResourceType, ResourceValue};

/// A single decoded TLV record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TlvRecord {
    pub kind: IdentifierKind,
    pub identifier: u16,
    pub value: Bytes,
}

impl TlvRecord {
    /// Interpret the raw value bytes as a value of `resource_type`
    pub fn decode_value(&self, resource_type: ResourceType) -> Lwm2mResult<ResourceValue> {
        let bytes = &self.value[..];
        match resource_type {
            ResourceType::None => {
                if bytes.is_empty() {
                    Ok(ResourceValue::None)
                } else {
                    Err(self.width_error(resource_type))
                }
            }
            ResourceType::Boolean => match bytes {
                [0x00] => Ok(ResourceValue::Boolean(false)),
                [0x01] => Ok(ResourceValue::Boolean(true)),
                [other] => Err(Lwm2mError::Decoding(format!(
                    "Invalid boolean byte 0x{:02X} in resource {}",
                    other, self.identifier
                ))),
                _ => Err(self.width_error(resource_type)),
            },
            ResourceType::Integer => {
                let value = match bytes.len() {
                    0 => 0,
                    1 => i8::from_be_bytes([bytes[0]]) as i64,
                    2 => i16::from_be_bytes([bytes[0], bytes[1]]) as i64,
                    4 => i32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]) as i64,
                    8 => i64::from_be_bytes([
                        bytes[0], bytes[1], bytes[2], bytes[3],
                        bytes[4], bytes[5], bytes[6], bytes[7],
                    ]),
                    _ => return Err(self.width_error(resource_type)),
                };
                Ok(ResourceValue::Integer(value))
            }
            ResourceType::Float => match bytes {
                [a, b, c, d] => Ok(ResourceValue::Float(f32::from_be_bytes([*a, *b, *c, *d]))),
                _ => Err(self.width_error(resource_type)),
            },
            ResourceType::String => String::from_utf8(bytes.to_vec())
                .map(ResourceValue::String)
                .map_err(|e| {
                    Lwm2mError::Decoding(format!(
                        "Invalid string in resource {}: {}",
                        self.identifier, e
                    ))
                }),
            ResourceType::Opaque => Ok(ResourceValue::Opaque(bytes.to_vec())),
        }
    }

    fn width_error(&self, resource_type: ResourceType) -> Lwm2mError {
        Lwm2mError::Decoding(format!(
            "{} value of resource {} cannot be {} bytes long",
            resource_type,
            self.identifier,
            self.value.len()
        ))
    }
}

/// TLV decoder reading consecutive records from a byte slice
pub struct TlvDecoder<'a> {
    buffer: &'a [u8],
    position: usize,
}

impl<'a> TlvDecoder<'a> {
    /// Create a new decoder
    pub fn new(buffer: &'a [u8]) -> Self {
        Self {
            buffer,
            position: 0,
        }
    }

    /// Decode the next record
    pub fn decode_record(&mut self) -> Lwm2mResult<TlvRecord> {
        let type_byte = TypeByte::unpack(self.read_byte()?);

        let identifier = if type_byte.wide_identifier {
            let bytes = self.read_bytes(2)?;
            u16::from_be_bytes([bytes[0], bytes[1]])
        } else {
            self.read_byte()? as u16
        };

        let length = match type_byte.length_type {
            LengthType::Embedded(length) => length as usize,
            other => self
                .read_bytes(other.width())?
                .iter()
                .fold(0usize, |acc, b| (acc << 8) | *b as usize),
        };

        let value = Bytes::copy_from_slice(self.read_bytes(length)?);
        Ok(TlvRecord {
            kind: type_byte.kind,
            identifier,
            value,
        })
    }

    /// Decode records until the input is exhausted
    pub fn decode_all(&mut self) -> Lwm2mResult<Vec<TlvRecord>> {
        let mut records = Vec::new();
        while self.remaining() > 0 {
            records.push(self.decode_record()?);
        }
        Ok(records)
    }

    fn read_bytes(&mut self, len: usize) -> Lwm2mResult<&'a [u8]> {
        if self.position + len > self.buffer.len() {
            return Err(Lwm2mError::Decoding(format!(
                "Not enough bytes: need {}, have {}",
                len,
                self.buffer.len() - self.position
            )));
        }

        let buffer = self.buffer;
        let result = &buffer[self.position..self.position + len];
        self.position += len;
        Ok(result)
    }

    fn read_byte(&mut self) -> Lwm2mResult<u8> {
        Ok(self.read_bytes(1)?[0])
    }

    /// Get current position
    pub fn position(&self) -> usize {
        self.position
    }

    /// Get remaining bytes
    pub fn remaining(&self) -> usize {
        self.buffer.len() - self.position
    }
}
