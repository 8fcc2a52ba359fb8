//! Resource values

use crate::datatypes::resource_type::ResourceType;
use crate::error::{Lwm2mError, Lwm2mResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Current value of a resource
///
/// The variant always corresponds to one [`ResourceType`]; a resource only
/// accepts values whose variant matches its declared type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceValue {
    None,
    Boolean(bool),
    Integer(i64),
    Float(f32),
    String(String),
    Opaque(#[serde(with = "serde_bytes")] Vec<u8>),
}

impl ResourceValue {
    /// Get the type tag matching this value
    pub fn resource_type(&self) -> ResourceType {
        match self {
            ResourceValue::None => ResourceType::None,
            ResourceValue::Boolean(_) => ResourceType::Boolean,
            ResourceValue::Integer(_) => ResourceType::Integer,
            ResourceValue::Float(_) => ResourceType::Float,
            ResourceValue::String(_) => ResourceType::String,
            ResourceValue::Opaque(_) => ResourceType::Opaque,
        }
    }

    /// Zero value of a type, used when a resource is built without a value
    pub fn default_for(resource_type: ResourceType) -> Self {
        match resource_type {
            ResourceType::None => ResourceValue::None,
            ResourceType::Boolean => ResourceValue::Boolean(false),
            ResourceType::Integer => ResourceValue::Integer(0),
            ResourceType::Float => ResourceValue::Float(0.0),
            ResourceType::String => ResourceValue::String(String::new()),
            ResourceType::Opaque => ResourceValue::Opaque(Vec::new()),
        }
    }

    /// Fail with `InvalidType` unless this value has the given type
    pub fn expect_type(&self, expected: ResourceType) -> Lwm2mResult<()> {
        let found = self.resource_type();
        if found == expected {
            Ok(())
        } else {
            Err(Lwm2mError::InvalidType { expected, found })
        }
    }

    fn mismatch(&self, expected: ResourceType) -> Lwm2mError {
        Lwm2mError::InvalidType {
            expected,
            found: self.resource_type(),
        }
    }

    pub fn as_bool(&self) -> Lwm2mResult<bool> {
        match self {
            ResourceValue::Boolean(b) => Ok(*b),
            _ => Err(self.mismatch(ResourceType::Boolean)),
        }
    }

    pub fn as_integer(&self) -> Lwm2mResult<i64> {
        match self {
            ResourceValue::Integer(i) => Ok(*i),
            _ => Err(self.mismatch(ResourceType::Integer)),
        }
    }

    pub fn as_float(&self) -> Lwm2mResult<f32> {
        match self {
            ResourceValue::Float(f) => Ok(*f),
            _ => Err(self.mismatch(ResourceType::Float)),
        }
    }

    pub fn as_str(&self) -> Lwm2mResult<&str> {
        match self {
            ResourceValue::String(s) => Ok(s),
            _ => Err(self.mismatch(ResourceType::String)),
        }
    }

    pub fn as_bytes(&self) -> Lwm2mResult<&[u8]> {
        match self {
            ResourceValue::Opaque(b) => Ok(b),
            _ => Err(self.mismatch(ResourceType::Opaque)),
        }
    }
}

impl From<bool> for ResourceValue {
    fn from(value: bool) -> Self {
        ResourceValue::Boolean(value)
    }
}

impl From<i64> for ResourceValue {
    fn from(value: i64) -> Self {
        ResourceValue::Integer(value)
    }
}

impl From<f32> for ResourceValue {
    fn from(value: f32) -> Self {
        ResourceValue::Float(value)
    }
}

impl From<String> for ResourceValue {
    fn from(value: String) -> Self {
        ResourceValue::String(value)
    }
}

impl From<&str> for ResourceValue {
    fn from(value: &str) -> Self {
        ResourceValue::String(value.to_string())
    }
}

impl From<Vec<u8>> for ResourceValue {
    fn from(value: Vec<u8>) -> Self {
        ResourceValue::Opaque(value)
    }
}

impl fmt::Display for ResourceValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResourceValue::None => write!(f, "NONE"),
            ResourceValue::Boolean(b) => write!(f, "BOOLEAN: {}", b),
            ResourceValue::Integer(i) => write!(f, "INTEGER: {}", i),
            ResourceValue::Float(fl) => write!(f, "FLOAT: {}", fl),
            ResourceValue::String(s) => write!(f, "STRING: {}", s),
            ResourceValue::Opaque(bytes) => {
                write!(f, "OPAQUE:")?;
                for byte in bytes {
                    write!(f, " {:02X}", byte)?;
                }
                Ok(())
            }
        }
    }
}
