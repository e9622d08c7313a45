//! AEON text codec: a JSON-compatible serialization of the same value model.

pub mod decoder;
pub mod encoder;
pub mod error;

pub use decoder::AeonTextDecoder;
pub use encoder::AeonTextEncoder;
pub use error::AeonTextError;
