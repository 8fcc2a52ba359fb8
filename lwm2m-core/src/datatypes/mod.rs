//! Data types of the LwM2M resource model

pub mod resource_type;
pub mod resource_value;

pub use resource_type::ResourceType;
pub use resource_value::ResourceValue;
