//! `AeonEncoderCompat` — legacy-compatible AEON binary encoder.
//!
//! Reproduces the legacy browser serializer's output byte for byte, for
//! wire-compatibility testing against captures of that implementation:
//!
//! - every integral number widens to `Int32` (truncating above 2^31), and
//!   integral-valued floats take the same path;
//! - non-integral numbers encode as `Real64`;
//! - empty strings, arrays, maps and blobs use the general length-prefixed
//!   form with a zero count instead of the `*Empty` fast-path tags.
//!
//! Decoders treat both forms as equivalent, so anything this encoder emits
//! decodes to the same logical value as the canonical encoder's output.

use aeon_buffers::Writer;

use super::constants::AeonTag;
use super::error::AeonError;
use super::varuint::write_varuint;
use crate::AeonValue;

pub struct AeonEncoderCompat {
    pub writer: Writer,
}

impl Default for AeonEncoderCompat {
    fn default() -> Self {
        Self::new()
    }
}

impl AeonEncoderCompat {
    pub fn new() -> Self {
        Self {
            writer: Writer::new(),
        }
    }

    pub fn encode(&mut self, value: &AeonValue) -> Result<Vec<u8>, AeonError> {
        self.writer.reset();
        self.write_any(value)?;
        Ok(self.writer.flush())
    }

    pub fn write_any(&mut self, value: &AeonValue) -> Result<(), AeonError> {
        match value {
            AeonValue::Null => self.writer.u8(AeonTag::Null as u8),
            AeonValue::Bool(b) => self.writer.u8(if *b {
                AeonTag::BoolTrue as u8
            } else {
                AeonTag::BoolFalse as u8
            }),
            AeonValue::Int(i) => {
                self.writer.u8(AeonTag::Int32 as u8);
                self.writer.i32(*i as i32);
            }
            AeonValue::Float(f) => {
                // The legacy serializer dispatches on `n % 1 === 0`, routing
                // integral floats through Int32 and NaN through Real64.
                if f.fract() == 0.0 && f.is_finite() {
                    self.writer.u8(AeonTag::Int32 as u8);
                    // ToInt32 keeps the low 32 bits; a direct f64-to-i32 cast
                    // would saturate instead of wrapping.
                    self.writer.i32(*f as i64 as i32);
                } else {
                    self.writer.u8(AeonTag::Real64 as u8);
                    self.writer.f64(*f);
                }
            }
            AeonValue::Str(s) => {
                self.writer.u8(AeonTag::Str as u8);
                self.write_key(s)?;
            }
            AeonValue::Bytes(b) => {
                self.writer.u8(AeonTag::Binary as u8);
                write_varuint(&mut self.writer, b.len() as u64)?;
                self.writer.buf(b);
            }
            AeonValue::Array(arr) => {
                self.writer.u8(AeonTag::Array as u8);
                write_varuint(&mut self.writer, arr.len() as u64)?;
                for item in arr {
                    self.write_any(item)?;
                }
            }
            AeonValue::Map(pairs) => {
                self.writer.u8(AeonTag::Map as u8);
                write_varuint(&mut self.writer, pairs.len() as u64)?;
                for (key, val) in pairs {
                    self.write_key(key)?;
                    self.write_any(val)?;
                }
            }
        }
        Ok(())
    }

    fn write_key(&mut self, s: &str) -> Result<(), AeonError> {
        write_varuint(&mut self.writer, s.len() as u64)?;
        self.writer.utf8(s);
        Ok(())
    }
}
