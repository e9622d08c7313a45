use aeon_buffers::BufferError;
use thiserror::Error;

/// Errors reported by the AEON binary codec.
///
/// All of these are terminal for the current encode/decode call: no partial
/// value is returned and no recovery is attempted inside the codec.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AeonError {
    /// A declared length or fixed width exceeds the remaining buffer.
    #[error("truncated input")]
    TruncatedInput,
    /// The tag byte matches no enumerated variant.
    #[error("unknown tag byte 0x{0:02x}")]
    UnknownTag(u8),
    /// Malformed UTF-8 in a string field.
    #[error("invalid encoding")]
    InvalidEncoding,
    /// Container nesting exceeds the decoder's recursion limit.
    #[error("nesting too deep")]
    NestingTooDeep,
    /// The encoder was given a shape it cannot represent on the wire.
    #[error("unsupported value: {0}")]
    UnsupportedValue(&'static str),
}

impl From<BufferError> for AeonError {
    fn from(e: BufferError) -> Self {
        match e {
            BufferError::EndOfBuffer => AeonError::TruncatedInput,
            BufferError::InvalidUtf8 => AeonError::InvalidEncoding,
        }
    }
}
