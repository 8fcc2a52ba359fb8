//! Declared type of a resource

use crate::error::{Lwm2mError, Lwm2mResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Closed set of resource type tags
///
/// The numeric tags match the ones used by emulator object definitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceType {
    /// Executable or otherwise valueless resource
    None = 0,
    Boolean = 1,
    Integer = 2,
    /// Single precision float
    Float = 3,
    String = 4,
    Opaque = 5,
}

impl ResourceType {
    /// Get type from tag value
    pub fn from_u8(value: u8) -> Lwm2mResult<Self> {
        match value {
            0 => Ok(ResourceType::None),
            1 => Ok(ResourceType::Boolean),
            2 => Ok(ResourceType::Integer),
            3 => Ok(ResourceType::Float),
            4 => Ok(ResourceType::String),
            5 => Ok(ResourceType::Opaque),
            _ => Err(Lwm2mError::InvalidData(format!(
                "Unknown resource type tag: {}",
                value
            ))),
        }
    }

    /// Convert type to tag value
    pub fn to_u8(self) -> u8 {
        self as u8
    }
}

impl fmt::Display for ResourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ResourceType::None => "None",
            ResourceType::Boolean => "Boolean",
            ResourceType::Integer => "Integer",
            ResourceType::Float => "Float",
            ResourceType::String => "String",
            ResourceType::Opaque => "Opaque",
        };
        f.write_str(name)
    }
}
