//! AEON binary codec: tag table, varuint, decoder and encoders.

pub mod constants;
pub mod decoder;
pub mod encoder;
pub mod encoder_compat;
pub mod error;
pub mod varuint;

pub use constants::AeonTag;
pub use decoder::AeonDecoder;
pub use encoder::AeonEncoder;
pub use encoder_compat::AeonEncoderCompat;
pub use error::AeonError;
pub use varuint::{read_varuint, write_varuint};
