//! Serializable resource definitions
//!
//! Emulated devices describe their resources in configuration files. A
//! definition carries everything except a value provider:
//!
//! ```json
//! { "id": 1, "permissions": "RW", "type": "integer", "value": { "integer": 86400 } }
//! ```

use crate::builder::ResourceBuilder;
use crate::provider::ValueProvider;
use crate::resource::Resource;
use lwm2m_core::{Lwm2mResult, Permissions, ResourceType, ResourceValue};
use serde::{Deserialize, Serialize};

/// Resource definition as found in device configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceDefinition {
    pub id: u16,
    #[serde(default)]
    pub permissions: Permissions,
    #[serde(rename = "type")]
    pub resource_type: ResourceType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<ResourceValue>,
}

impl ResourceDefinition {
    fn builder(self) -> ResourceBuilder {
        let builder = ResourceBuilder::new(self.id, self.resource_type).permissions(self.permissions);
        match self.value {
            Some(value) => builder.value(value),
            None => builder,
        }
    }

    /// Build a static resource from this definition
    pub fn into_resource(self) -> Lwm2mResult<Resource> {
        self.builder().build()
    }

    /// Build a dynamic resource whose value comes from `provider`
    pub fn into_dynamic_resource<P>(self, provider: P) -> Lwm2mResult<Resource>
    where
        P: ValueProvider + 'static,
    {
        self.builder().provider(provider).build()
    }
}

impl From<&Resource> for ResourceDefinition {
    /// Snapshot of a resource; dynamic resources contribute their last reading
    fn from(resource: &Resource) -> Self {
        Self {
            id: resource.identifier(),
            permissions: resource.permissions(),
            resource_type: resource.resource_type(),
            value: Some(resource.value().clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lwm2m_core::ResponseCode;

    #[test]
    fn test_load_from_json() {
        let json = r#"{ "id": 1, "permissions": "RW", "type": "integer", "value": { "integer": 86400 } }"#;
        let definition: ResourceDefinition = serde_json::from_str(json).unwrap();
        assert_eq!(definition.permissions, Permissions::READ_WRITE);

        let mut resource = definition.into_resource().unwrap();
        assert_eq!(resource.read().unwrap(), ResourceValue::Integer(86400));
        assert_eq!(
            resource.write(ResourceValue::Integer(60), false).unwrap(),
            ResponseCode::Changed
        );
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let json = r#"{ "id": 4, "type": "none" }"#;
        let definition: ResourceDefinition = serde_json::from_str(json).unwrap();
        let resource = definition.into_resource().unwrap();
        assert!(resource.permissions().is_empty());
        assert_eq!(resource.value(), &ResourceValue::None);
    }

    #[test]
    fn test_mismatched_value_rejected() {
        let json = r#"{ "id": 1, "permissions": "R", "type": "boolean", "value": { "string": "yes" } }"#;
        let definition: ResourceDefinition = serde_json::from_str(json).unwrap();
        assert!(definition.into_resource().is_err());
    }

    #[test]
    fn test_bad_permissions_rejected() {
        let json = r#"{ "id": 1, "permissions": "RX", "type": "boolean" }"#;
        assert!(serde_json::from_str::<ResourceDefinition>(json).is_err());
    }

    #[test]
    fn test_dynamic_definition() {
        let json = r#"{ "id": 5700, "permissions": "R", "type": "float" }"#;
        let definition: ResourceDefinition = serde_json::from_str(json).unwrap();
        let mut resource = definition
            .into_dynamic_resource(|| ResourceValue::Float(3.5))
            .unwrap();
        assert_eq!(resource.read().unwrap(), ResourceValue::Float(3.5));
    }

    #[test]
    fn test_snapshot_round_trip() {
        let resource = Resource::new(9, Permissions::all(), ResourceValue::Opaque(vec![1, 2, 3]));
        let definition = ResourceDefinition::from(&resource);
        let json = serde_json::to_string(&definition).unwrap();
        let parsed: ResourceDefinition = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, definition);
        assert_eq!(parsed.permissions.to_string(), "RWD");
    }
}
