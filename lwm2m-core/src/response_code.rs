//! CoAP-style response codes returned by guarded resource operations

use crate::error::{Lwm2mError, Lwm2mResult};
use std::fmt;

const CLASS_OFFSET: u8 = 5;
const DETAIL_MASK: u8 = 0b0001_1111;

/// Response code of a resource operation
///
/// Codes follow the CoAP `class.detail` notation; the numeric form used on
/// the wire is `class << 5 | detail`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResponseCode {
    /// 2.02 - delete permitted
    Deleted,
    /// 2.04 - write succeeded
    Changed,
    /// 2.05 - read/serialization succeeded
    Content,
    /// 4.00 - request carried a value the resource cannot hold
    BadRequest,
    /// 4.05 - permission denied
    MethodNotAllowed,
    /// 5.00 - the resource could not be serialized
    InternalServerError,
}

impl ResponseCode {
    /// Code class (the digit before the dot)
    pub fn class(&self) -> u8 {
        match self {
            ResponseCode::Deleted | ResponseCode::Changed | ResponseCode::Content => 2,
            ResponseCode::BadRequest | ResponseCode::MethodNotAllowed => 4,
            ResponseCode::InternalServerError => 5,
        }
    }

    /// Code detail (the two digits after the dot)
    pub fn detail(&self) -> u8 {
        match self {
            ResponseCode::Deleted => 2,
            ResponseCode::Changed => 4,
            ResponseCode::Content => 5,
            ResponseCode::BadRequest => 0,
            ResponseCode::MethodNotAllowed => 5,
            ResponseCode::InternalServerError => 0,
        }
    }

    /// Encode as a CoAP header code byte
    pub fn to_u8(self) -> u8 {
        (self.class() << CLASS_OFFSET) | self.detail()
    }

    /// Decode from a CoAP header code byte
    pub fn from_u8(value: u8) -> Lwm2mResult<Self> {
        match (value >> CLASS_OFFSET, value & DETAIL_MASK) {
            (2, 2) => Ok(ResponseCode::Deleted),
            (2, 4) => Ok(ResponseCode::Changed),
            (2, 5) => Ok(ResponseCode::Content),
            (4, 0) => Ok(ResponseCode::BadRequest),
            (4, 5) => Ok(ResponseCode::MethodNotAllowed),
            (5, 0) => Ok(ResponseCode::InternalServerError),
            (class, detail) => Err(Lwm2mError::InvalidData(format!(
                "Unknown response code: {}.{:02}",
                class, detail
            ))),
        }
    }

    /// Check whether this is a 2.xx code
    pub fn is_success(&self) -> bool {
        self.class() == 2
    }
}

impl fmt::Display for ResponseCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.class(), self.detail())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(ResponseCode::Deleted.to_string(), "2.02");
        assert_eq!(ResponseCode::Changed.to_string(), "2.04");
        assert_eq!(ResponseCode::Content.to_string(), "2.05");
        assert_eq!(ResponseCode::MethodNotAllowed.to_string(), "4.05");
    }

    #[test]
    fn test_code_byte() {
        assert_eq!(ResponseCode::Content.to_u8(), 0x45);
        assert_eq!(ResponseCode::MethodNotAllowed.to_u8(), 0x85);
        assert_eq!(ResponseCode::from_u8(0x44).unwrap(), ResponseCode::Changed);
        assert!(ResponseCode::from_u8(0x01).is_err());
    }

    #[test]
    fn test_is_success() {
        assert!(ResponseCode::Content.is_success());
        assert!(!ResponseCode::MethodNotAllowed.is_success());
        assert!(!ResponseCode::InternalServerError.is_success());
    }
}
