//! Core types and utilities for the LwM2M resource model
//!
//! This crate provides the error type, CoAP-style response codes, the
//! permission set and the resource type/value model shared by the TLV codec
//! and the resource layer.

pub mod error;
pub mod response_code;
pub mod permission;
pub mod datatypes;

pub use error::{Lwm2mError, Lwm2mResult};
pub use response_code::ResponseCode;
pub use permission::{Permission, Permissions};
pub use datatypes::{ResourceType, ResourceValue};
