//! OMA LwM2M TLV encoding/decoding
//!
//! A TLV record is laid out as
//!
//! ```text
//! type byte | identifier (1 or 2 bytes) | [length (1 to 3 bytes)] | value
//! ```
//!
//! The type byte carries the identifier kind, the identifier width, the
//! length encoding and, for short values, the length itself. See
//! [`TypeByte`] for the bit layout.

pub mod types;
pub mod encoder;
pub mod decoder;

pub use lwm2m_core::{Lwm2mError, Lwm2mResult};
pub use types::{IdentifierKind, LengthType, TypeByte};
pub use encoder::{byte_length, value_bytes, TlvEncoder};
pub use decoder::{TlvDecoder, TlvRecord};
