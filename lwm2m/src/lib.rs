//! LwM2M resource model and TLV codec
//!
//! This library models a single addressable device resource, as used by
//! LwM2M device management, and serializes it into the OMA LwM2M binary TLV
//! format. CoAP transport, object/instance registries and request routing
//! are left to the surrounding device emulator.
//!
//! # Architecture
//!
//! - `lwm2m-core`: error handling, response codes, permissions, resource types and values
//! - `lwm2m-tlv`: TLV type byte, encoder and decoder
//! - `lwm2m-resource`: permission-guarded resources, value providers, builder and definitions
//!
//! # Usage
//!
//! ```rust
//! use lwm2m::{Permissions, ResourceType, ResourceValue, ResponseCode};
//! use lwm2m::resource::ResourceBuilder;
//!
//! let mut resource = ResourceBuilder::new(10, ResourceType::Integer)
//!     .permissions(Permissions::READ)
//!     .value(ResourceValue::Integer(5))
//!     .build()?;
//!
//! let code = resource.get_tlv_buffer(|tlv| assert_eq!(&tlv[..], &[0xC1, 0x0A, 0x05]));
//! assert_eq!(code, ResponseCode::Content);
//! # Ok::<(), lwm2m::Lwm2mError>(())
//! ```

// Re-export core types
pub use lwm2m_core::{Lwm2mError, Lwm2mResult, Permission, Permissions, ResponseCode};
pub use lwm2m_core::datatypes::*;

// Re-export TLV codec
pub mod tlv {
    pub use lwm2m_tlv::*;
}

// Re-export resource model
pub mod resource {
    pub use lwm2m_resource::*;
}
