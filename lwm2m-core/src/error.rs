use crate::datatypes::ResourceType;
use crate::response_code::ResponseCode;
use thiserror::Error;

/// Main error type for LwM2M resource operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Lwm2mError {
    #[error("Method not allowed: {0}")]
    MethodNotAllowed(String),

    #[error("Invalid type: expected {expected}, found {found}")]
    InvalidType {
        expected: ResourceType,
        found: ResourceType,
    },

    #[error("Value too large: {0} bytes cannot be described by a TLV length field")]
    ValueTooLarge(usize),

    #[error("Invalid data: {0}")]
    InvalidData(String),

    #[error("TLV decoding error: {0}")]
    Decoding(String),
}

impl Lwm2mError {
    /// CoAP-style response code reported to the requester for this error
    ///
    /// Use [`Lwm2mError::encoding_response_code`] for errors raised while
    /// serializing a resource, where a wrongly shaped value is a server fault.
    pub fn response_code(&self) -> ResponseCode {
        match self {
            Lwm2mError::MethodNotAllowed(_) => ResponseCode::MethodNotAllowed,
            Lwm2mError::InvalidType { .. }
            | Lwm2mError::InvalidData(_)
            | Lwm2mError::Decoding(_) => ResponseCode::BadRequest,
            Lwm2mError::ValueTooLarge(_) => ResponseCode::InternalServerError,
        }
    }

    /// Response code for an error raised while serializing a resource
    pub fn encoding_response_code(&self) -> ResponseCode {
        match self {
            Lwm2mError::MethodNotAllowed(_) => ResponseCode::MethodNotAllowed,
            _ => ResponseCode::InternalServerError,
        }
    }
}

/// Result type alias for LwM2M resource operations
pub type Lwm2mResult<T> = Result<T, Lwm2mError>;
