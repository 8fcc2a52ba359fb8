//! Resource builder
//!
//! # Usage Example
//!
//! ```rust
//! use lwm2m_core::{Permissions, ResourceType, ResourceValue};
//! use lwm2m_resource::ResourceBuilder;
//!
//! // Static, writable resource
//! let manufacturer = ResourceBuilder::new(0, ResourceType::String)
//!     .permissions(Permissions::READ_WRITE)
//!     .value(ResourceValue::from("8devices"))
//!     .build()?;
//!
//! // Sensor-like resource read through a provider
//! let temperature = ResourceBuilder::new(5700, ResourceType::Float)
//!     .permissions(Permissions::READ)
//!     .provider(|| ResourceValue::Float(21.5))
//!     .build()?;
//! # Ok::<(), lwm2m_core::Lwm2mError>(())
//! ```

use crate::provider::ValueProvider;
use crate::resource::{Resource, ValueSource};
use lwm2m_core::{Lwm2mResult, Permissions, ResourceType, ResourceValue};

/// Builder for [`Resource`]
///
/// # Default Settings
/// - Permissions: none
/// - Value: the zero value of the type (`false`, `0`, `0.0`, empty string or opaque)
/// - Provider: none (static resource)
pub struct ResourceBuilder {
    identifier: u16,
    resource_type: ResourceType,
    permissions: Permissions,
    value: Option<ResourceValue>,
    provider: Option<Box<dyn ValueProvider>>,
}

impl ResourceBuilder {
    /// Create a builder for a resource of the given identifier and type
    pub fn new(identifier: u16, resource_type: ResourceType) -> Self {
        Self {
            identifier,
            resource_type,
            permissions: Permissions::empty(),
            value: None,
            provider: None,
        }
    }

    /// Set the permission set
    pub fn permissions(mut self, permissions: Permissions) -> Self {
        self.permissions = permissions;
        self
    }

    /// Set the initial value
    ///
    /// For a dynamic resource this is the cached reading until the first read.
    pub fn value(mut self, value: ResourceValue) -> Self {
        self.value = Some(value);
        self
    }

    /// Make the resource dynamic
    pub fn provider<P>(mut self, provider: P) -> Self
    where
        P: ValueProvider + 'static,
    {
        self.provider = Some(Box::new(provider));
        self
    }

    /// Build the resource
    ///
    /// # Errors
    /// `InvalidType` if the initial value does not match the resource type.
    pub fn build(self) -> Lwm2mResult<Resource> {
        let value = match self.value {
            Some(value) => {
                value.expect_type(self.resource_type)?;
                value
            }
            None => ResourceValue::default_for(self.resource_type),
        };

        let source = match self.provider {
            Some(provider) => ValueSource::Dynamic {
                provider,
                last: value,
            },
            None => ValueSource::Stored(value),
        };

        Ok(Resource::from_parts(
            self.identifier,
            self.permissions,
            self.resource_type,
            source,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lwm2m_core::{Lwm2mError, ResponseCode};

    #[test]
    fn test_defaults() {
        let mut resource = ResourceBuilder::new(7, ResourceType::Boolean).build().unwrap();
        assert_eq!(resource.identifier(), 7);
        assert!(resource.permissions().is_empty());
        assert!(!resource.is_dynamic());
        assert_eq!(resource.value(), &ResourceValue::Boolean(false));
        assert_eq!(
            resource.read().unwrap_err().response_code(),
            ResponseCode::MethodNotAllowed
        );
    }

    #[test]
    fn test_value_type_checked() {
        let result = ResourceBuilder::new(1, ResourceType::Integer)
            .value(ResourceValue::Boolean(true))
            .build();
        assert!(matches!(result, Err(Lwm2mError::InvalidType { .. })));
    }

    #[test]
    fn test_provider_with_initial_value() {
        let mut resource = ResourceBuilder::new(1, ResourceType::Integer)
            .permissions(Permissions::READ)
            .value(ResourceValue::Integer(1))
            .provider(|| ResourceValue::Integer(2))
            .build()
            .unwrap();
        assert!(resource.is_dynamic());
        assert_eq!(resource.value(), &ResourceValue::Integer(1));
        assert_eq!(resource.read().unwrap(), ResourceValue::Integer(2));
    }
}
