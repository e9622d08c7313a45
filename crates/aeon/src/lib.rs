//! AEON — a compact, self-describing binary serialization format.
//!
//! Every encoded value starts with one type tag byte; the tag determines how
//! many payload bytes follow and how to interpret them. Strings, arrays,
//! maps and binary blobs carry varuint length prefixes; zero-length
//! collections have dedicated one-byte fast-path tags. The stream is
//! self-delimiting: no magic header, no checksum, no overall length.
//!
//! Two encoders are provided: [`AeonEncoder`] picks the smallest tag that
//! round-trips each value exactly, while [`AeonEncoderCompat`] reproduces
//! the legacy browser serializer byte for byte. Both decode with
//! [`AeonDecoder`]. A JSON-compatible text form lives in [`text`].
//!
//! ```
//! use aeon::{decode, encode, AeonValue};
//!
//! let value = AeonValue::Array(vec![
//!     AeonValue::Int(42),
//!     AeonValue::Str("hi".into()),
//!     AeonValue::Null,
//! ]);
//! let bytes = encode(&value).unwrap();
//! assert_eq!(decode(&bytes).unwrap(), value);
//! ```

mod value;

pub mod binary;
pub mod text;

pub use binary::{
    read_varuint, write_varuint, AeonDecoder, AeonEncoder, AeonEncoderCompat, AeonError, AeonTag,
};
pub use text::{AeonTextDecoder, AeonTextEncoder, AeonTextError};
pub use value::AeonValue;

/// One-shot encode with the canonical encoder.
pub fn encode(value: &AeonValue) -> Result<Vec<u8>, AeonError> {
    AeonEncoder::new().encode(value)
}

/// One-shot decode of the first value in `input`; trailing bytes are ignored.
pub fn decode(input: &[u8]) -> Result<AeonValue, AeonError> {
    AeonDecoder::new().decode(input)
}

/// One-shot serialization to the text form.
pub fn to_text(value: &AeonValue) -> String {
    AeonTextEncoder::new().encode_string(value)
}

/// One-shot parse of the text form.
pub fn from_text(input: &str) -> Result<AeonValue, AeonTextError> {
    AeonTextDecoder::new().decode_str(input)
}
