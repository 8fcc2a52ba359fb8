//! LwM2M resource model
//!
//! A [`Resource`] is a single typed value exposed by a managed device. Its
//! value is either stored or produced on demand by a [`ValueProvider`]
//! (sensor-like resources). Reads, writes and deletes are gated by the
//! resource's [`Permissions`](lwm2m_core::Permissions), and a readable
//! resource serializes itself into an LwM2M TLV record.
//!
//! # Usage
//!
//! ```rust
//! use lwm2m_core::{Permissions, ResourceType, ResourceValue};
//! use lwm2m_resource::ResourceBuilder;
//!
//! let mut resource = ResourceBuilder::new(10, ResourceType::Integer)
//!     .permissions(Permissions::READ)
//!     .value(ResourceValue::Integer(5))
//!     .build()?;
//!
//! let tlv = resource.tlv_buffer()?;
//! assert_eq!(&tlv[..], &[0xC1, 0x0A, 0x05]);
//! # Ok::<(), lwm2m_core::Lwm2mError>(())
//! ```

pub mod provider;
pub mod resource;
pub mod builder;
pub mod definition;

pub use provider::ValueProvider;
pub use resource::{Resource, ValueSource};
pub use builder::ResourceBuilder;
pub use definition::ResourceDefinition;
