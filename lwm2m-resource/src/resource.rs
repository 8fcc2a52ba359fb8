//! Resource with permission-guarded access
//!
//! # Operations
//!
//! | operation | permission | success code |
//! |---|---|---|
//! | [`Resource::read`] | Read | 2.05 Content |
//! | [`Resource::write`] | Write, or `force` | 2.04 Changed |
//! | [`Resource::delete`] | Delete, or `force` | 2.02 Deleted |
//! | [`Resource::tlv_buffer`] | Read | 2.05 Content |
//!
//! A missing permission yields [`Lwm2mError::MethodNotAllowed`] (4.05).
//! Deleting only checks the permission; removing the resource from its
//! object instance is up to the caller.

use crate::provider::ValueProvider;
use bytes::Bytes;
use lwm2m_core::{
    Lwm2mError, Lwm2mResult, Permission, Permissions, ResourceType, ResourceValue, ResponseCode,
};
use lwm2m_tlv::{byte_length, TlvEncoder};
use std::fmt;

/// Where a resource's value comes from
pub enum ValueSource {
    /// Value held by the resource and changed only by writes
    Stored(ResourceValue),
    /// Value produced by a provider on every read
    ///
    /// `last` caches the most recent reading. A write replaces it until the
    /// next read calls the provider again.
    Dynamic {
        provider: Box<dyn ValueProvider>,
        last: ResourceValue,
    },
}

impl fmt::Debug for ValueSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueSource::Stored(value) => f.debug_tuple("Stored").field(value).finish(),
            ValueSource::Dynamic { last, .. } => f
                .debug_struct("Dynamic")
                .field("provider", &"<provider>")
                .field("last", last)
                .finish(),
        }
    }
}

/// A single addressable device resource
#[derive(Debug)]
pub struct Resource {
    identifier: u16,
    resource_type: ResourceType,
    permissions: Permissions,
    source: ValueSource,
}

impl Resource {
    /// Create a resource holding `value`; the type is taken from the value
    pub fn new(identifier: u16, permissions: Permissions, value: ResourceValue) -> Self {
        Self {
            identifier,
            resource_type: value.resource_type(),
            permissions,
            source: ValueSource::Stored(value),
        }
    }

    /// Create a resource whose value is produced by `provider`
    pub fn dynamic<P>(
        identifier: u16,
        permissions: Permissions,
        resource_type: ResourceType,
        provider: P,
    ) -> Self
    where
        P: ValueProvider + 'static,
    {
        Self::from_parts(
            identifier,
            permissions,
            resource_type,
            ValueSource::Dynamic {
                provider: Box::new(provider),
                last: ResourceValue::default_for(resource_type),
            },
        )
    }

    pub(crate) fn from_parts(
        identifier: u16,
        permissions: Permissions,
        resource_type: ResourceType,
        source: ValueSource,
    ) -> Self {
        Self {
            identifier,
            resource_type,
            permissions,
            source,
        }
    }

    pub fn identifier(&self) -> u16 {
        self.identifier
    }

    pub fn resource_type(&self) -> ResourceType {
        self.resource_type
    }

    pub fn permissions(&self) -> Permissions {
        self.permissions
    }

    /// Check whether the value comes from a provider
    pub fn is_dynamic(&self) -> bool {
        matches!(self.source, ValueSource::Dynamic { .. })
    }

    /// Stored value, or the last provider reading, without calling the provider
    pub fn value(&self) -> &ResourceValue {
        match &self.source {
            ValueSource::Stored(value) => value,
            ValueSource::Dynamic { last, .. } => last,
        }
    }

    /// Read the current value
    ///
    /// Calls the provider of a dynamic resource and caches its reading.
    pub fn read(&mut self) -> Lwm2mResult<ResourceValue> {
        self.check(Permission::Read, false)?;
        Ok(self.resolved_value()?.clone())
    }

    /// Callback form of [`Resource::read`]
    ///
    /// `callback` runs only when the read succeeds with 2.05.
    pub fn read_value<F>(&mut self, callback: F) -> ResponseCode
    where
        F: FnOnce(&ResourceValue),
    {
        match self.read() {
            Ok(value) => {
                callback(&value);
                ResponseCode::Content
            }
            Err(e) => e.encoding_response_code(),
        }
    }

    /// Overwrite the value
    ///
    /// `force` bypasses the Write permission, for local updates that are not
    /// subject to access control. On a dynamic resource the written value
    /// lasts until the next read calls the provider.
    pub fn write(&mut self, value: ResourceValue, force: bool) -> Lwm2mResult<ResponseCode> {
        self.check(Permission::Write, force)?;
        value.expect_type(self.resource_type)?;

        log::trace!("Resource {} written: {}", self.identifier, value);
        match &mut self.source {
            ValueSource::Stored(stored) => *stored = value,
            ValueSource::Dynamic { last, .. } => *last = value,
        }
        Ok(ResponseCode::Changed)
    }

    /// Check whether the resource may be deleted
    ///
    /// No state changes; the caller removes the resource on success.
    pub fn delete(&self, force: bool) -> Lwm2mResult<ResponseCode> {
        self.check(Permission::Delete, force)?;
        Ok(ResponseCode::Deleted)
    }

    /// Number of value bytes the current value encodes to
    pub fn byte_length(&mut self) -> Lwm2mResult<usize> {
        let resource_type = self.resource_type;
        byte_length(resource_type, self.resolved_value()?)
    }

    /// Serialize the resource into a TLV record
    ///
    /// The provider of a dynamic resource is called once, so the length
    /// and value fields always describe the same reading.
    pub fn tlv_buffer(&mut self) -> Lwm2mResult<Bytes> {
        self.check(Permission::Read, false)?;

        let identifier = self.identifier;
        let resource_type = self.resource_type;
        let value = self.resolved_value()?;

        let mut encoder = TlvEncoder::new();
        encoder.encode_resource(identifier, resource_type, value)?;
        Ok(encoder.into_bytes())
    }

    /// Callback form of [`Resource::tlv_buffer`]
    ///
    /// `callback` receives the record only on 2.05; any other code means no
    /// bytes were produced.
    pub fn get_tlv_buffer<F>(&mut self, callback: F) -> ResponseCode
    where
        F: FnOnce(Bytes),
    {
        match self.tlv_buffer() {
            Ok(buffer) => {
                callback(buffer);
                ResponseCode::Content
            }
            Err(e) => {
                log::debug!("Resource {} not serialized: {}", self.identifier, e);
                e.encoding_response_code()
            }
        }
    }

    fn check(&self, permission: Permission, force: bool) -> Lwm2mResult<()> {
        if force || self.permissions.contains(permission) {
            return Ok(());
        }
        log::debug!(
            "Resource {} denied {:?} (permissions \"{}\")",
            self.identifier, permission, self.permissions
        );
        Err(Lwm2mError::MethodNotAllowed(format!(
            "{:?} on resource {}",
            permission, self.identifier
        )))
    }

    /// Current value, calling the provider of a dynamic resource
    ///
    /// A provider reading of the wrong type is rejected and not cached.
    fn resolved_value(&mut self) -> Lwm2mResult<&ResourceValue> {
        match &mut self.source {
            ValueSource::Stored(value) => Ok(&*value),
            ValueSource::Dynamic { provider, last } => {
                let value = provider.provide();
                if let Err(e) = value.expect_type(self.resource_type) {
                    log::error!("Provider of resource {} returned {}", self.identifier, value);
                    return Err(e);
                }
                log::trace!("Resource {} resolved: {}", self.identifier, value);
                *last = value;
                Ok(&*last)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::MockValueProvider;

    fn integer(identifier: u16, permissions: Permissions, value: i64) -> Resource {
        Resource::new(identifier, permissions, ResourceValue::Integer(value))
    }

    #[test]
    fn test_read_requires_permission() {
        let mut resource = integer(1, Permissions::WRITE, 5);
        let err = resource.read().unwrap_err();
        assert_eq!(err.response_code(), ResponseCode::MethodNotAllowed);

        let mut called = false;
        let code = resource.read_value(|_| called = true);
        assert_eq!(code, ResponseCode::MethodNotAllowed);
        assert!(!called);
    }

    #[test]
    fn test_read_value_callback() {
        let mut resource = integer(1, Permissions::READ, 5);
        let mut seen = None;
        let code = resource.read_value(|v| seen = Some(v.clone()));
        assert_eq!(code, ResponseCode::Content);
        assert_eq!(seen, Some(ResourceValue::Integer(5)));
    }

    #[test]
    fn test_write_then_read() {
        let mut resource = integer(1, Permissions::READ_WRITE, 5);
        assert_eq!(resource.write(ResourceValue::Integer(9), false).unwrap(), ResponseCode::Changed);
        assert_eq!(resource.read().unwrap(), ResourceValue::Integer(9));
    }

    #[test]
    fn test_write_denied_without_permission() {
        let mut resource = integer(1, Permissions::READ, 5);
        let err = resource.write(ResourceValue::Integer(9), false).unwrap_err();
        assert!(matches!(err, Lwm2mError::MethodNotAllowed(_)));
        assert_eq!(resource.read().unwrap(), ResourceValue::Integer(5));
    }

    #[test]
    fn test_forced_write_ignores_permissions() {
        let mut resource = integer(1, Permissions::empty(), 5);
        assert_eq!(resource.write(ResourceValue::Integer(9), true).unwrap(), ResponseCode::Changed);
        assert_eq!(resource.value(), &ResourceValue::Integer(9));
    }

    #[test]
    fn test_write_rejects_wrong_type() {
        let mut resource = integer(1, Permissions::READ_WRITE, 5);
        let err = resource.write(ResourceValue::from("9"), false).unwrap_err();
        assert_eq!(err.response_code(), ResponseCode::BadRequest);
        assert_eq!(resource.read().unwrap(), ResourceValue::Integer(5));
    }

    #[test]
    fn test_denied_write_reports_4_05_before_type_check() {
        let mut resource = integer(1, Permissions::READ, 5);
        let err = resource.write(ResourceValue::from("9"), false).unwrap_err();
        assert_eq!(err.response_code(), ResponseCode::MethodNotAllowed);
    }

    #[test]
    fn test_delete() {
        let resource = integer(1, Permissions::DELETE, 5);
        assert_eq!(resource.delete(false).unwrap(), ResponseCode::Deleted);

        let resource = integer(1, Permissions::READ_WRITE, 5);
        assert!(resource.delete(false).is_err());
        assert_eq!(resource.delete(true).unwrap(), ResponseCode::Deleted);
    }

    #[test]
    fn test_provider_overrides_written_value() {
        let mut provider = MockValueProvider::new();
        provider
            .expect_provide()
            .times(2)
            .returning(|| ResourceValue::Float(21.5));

        let mut resource =
            Resource::dynamic(5700, Permissions::READ_WRITE, ResourceType::Float, provider);
        assert!(resource.is_dynamic());
        assert_eq!(resource.read().unwrap(), ResourceValue::Float(21.5));

        resource.write(ResourceValue::Float(-1.0), false).unwrap();
        assert_eq!(resource.value(), &ResourceValue::Float(-1.0));
        assert_eq!(resource.read().unwrap(), ResourceValue::Float(21.5));
    }

    #[test]
    fn test_provider_called_once_per_serialization() {
        let mut provider = MockValueProvider::new();
        let mut next = 100;
        provider.expect_provide().times(2).returning(move || {
            next += 100;
            ResourceValue::Integer(next)
        });

        let mut resource =
            Resource::dynamic(1, Permissions::READ, ResourceType::Integer, provider);
        // 200 needs two value bytes
        assert_eq!(&resource.tlv_buffer().unwrap()[..], &[0xC2, 0x01, 0x00, 0xC8]);
        assert_eq!(&resource.tlv_buffer().unwrap()[..], &[0xC2, 0x01, 0x01, 0x2C]);
        assert_eq!(resource.value(), &ResourceValue::Integer(300));
    }

    #[test]
    fn test_provider_with_wrong_type() {
        let mut resource = Resource::dynamic(
            1,
            Permissions::READ,
            ResourceType::Integer,
            || ResourceValue::from("oops"),
        );
        let code = resource.get_tlv_buffer(|_| panic!("no bytes expected"));
        assert_eq!(code, ResponseCode::InternalServerError);
        assert_eq!(resource.value(), &ResourceValue::Integer(0));
    }

    #[test]
    fn test_tlv_buffer_scenario() {
        let mut resource = integer(10, Permissions::READ, 5);
        let mut buffer = None;
        let code = resource.get_tlv_buffer(|b| buffer = Some(b));
        assert_eq!(code, ResponseCode::Content);
        assert_eq!(&buffer.unwrap()[..], &[0xC1, 0x0A, 0x05]);
    }

    #[test]
    fn test_tlv_buffer_denied() {
        let mut resource = integer(10, Permissions::empty(), 5);
        let mut buffer = None;
        let code = resource.get_tlv_buffer(|b| buffer = Some(b));
        assert_eq!(code, ResponseCode::MethodNotAllowed);
        assert!(buffer.is_none());
        assert!(resource.tlv_buffer().is_err());
    }

    #[test]
    fn test_tlv_buffer_is_idempotent() {
        let mut resource = Resource::new(3, Permissions::READ, ResourceValue::from("ab"));
        let first = resource.tlv_buffer().unwrap();
        let second = resource.tlv_buffer().unwrap();
        assert_eq!(first, second);
        assert_eq!(&first[..], &[0xC2, 0x03, 0x61, 0x62]);
    }

    #[test]
    fn test_byte_length() {
        let mut resource = Resource::new(3, Permissions::empty(), ResourceValue::from("ab"));
        assert_eq!(resource.byte_length().unwrap(), 2);

        let mut resource = integer(3, Permissions::empty(), 0);
        assert_eq!(resource.byte_length().unwrap(), 0);
        assert_eq!(resource.resource_type(), ResourceType::Integer);
    }

    #[test]
    fn test_boolean_and_none_records() {
        let mut flag = Resource::new(2, Permissions::READ, ResourceValue::Boolean(true));
        assert_eq!(&flag.tlv_buffer().unwrap()[..], &[0xC1, 0x02, 0x01]);

        let mut exec = Resource::new(4, Permissions::READ, ResourceValue::None);
        assert_eq!(&exec.tlv_buffer().unwrap()[..], &[0xC0, 0x04]);
    }
}
