//! Buffer primitives shared by the AEON encoders and decoders.
//!
//! [`Writer`] is an auto-growing output buffer with amortized doubling
//! growth; [`Reader`] is a cursor over a byte slice whose `try_*` accessors
//! are bounds-checked and never advance the cursor on failure. All
//! multi-byte accessors are little-endian, matching the AEON wire format.

mod reader;
mod writer;

pub use reader::Reader;
pub use writer::Writer;

use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum BufferError {
    /// A read would go past the end of the buffer.
    #[error("unexpected end of buffer")]
    EndOfBuffer,
    /// Bytes declared as text are not valid UTF-8.
    #[error("invalid utf-8")]
    InvalidUtf8,
}
