//! `AeonEncoder` — canonical AEON binary encoder.
//!
//! Selects the smallest tag that round-trips each value exactly: `Zero`/`One`
//! for 0 and 1, unsigned or negated-unsigned tags of minimal width for other
//! integers, the `*Empty` fast-path tags for zero-length collections. For
//! byte-for-byte reference-compatible output see
//! [`AeonEncoderCompat`](super::encoder_compat::AeonEncoderCompat).

use aeon_buffers::Writer;

use super::constants::AeonTag;
use super::error::AeonError;
use super::varuint::write_varuint;
use crate::AeonValue;

pub struct AeonEncoder {
    pub writer: Writer,
}

impl Default for AeonEncoder {
    fn default() -> Self {
        Self::new()
    }
}

impl AeonEncoder {
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
            AeonValue::Null => self.write_tag(AeonTag::Null),
            AeonValue::Bool(b) => {
                self.write_tag(if *b { AeonTag::BoolTrue } else { AeonTag::BoolFalse })
            }
            AeonValue::Int(i) => self.write_integer(*i)?,
            AeonValue::Float(f) => self.write_float(*f)?,
            AeonValue::Str(s) => self.write_str(s)?,
            AeonValue::Bytes(b) => self.write_bin(b)?,
            AeonValue::Array(arr) => self.write_arr(arr)?,
            AeonValue::Map(pairs) => self.write_map(pairs)?,
        }
        Ok(())
    }

    #[inline]
    fn write_tag(&mut self, tag: AeonTag) {
        self.writer.u8(tag as u8);
    }

    pub fn write_integer(&mut self, int: i64) -> Result<(), AeonError> {
        match int {
            0 => self.write_tag(AeonTag::Zero),
            1 => self.write_tag(AeonTag::One),
            _ => {
                if int < 0 && int > -0xFFFF_FFFF {
                    let magnitude = (-int) as u64;
                    if magnitude <= 0xFF {
                        self.write_tag(AeonTag::IUint8);
                        self.writer.u8(magnitude as u8);
                    } else if magnitude <= 0xFFFF {
                        self.write_tag(AeonTag::IUint16);
                        self.writer.u16(magnitude as u16);
                    } else {
                        self.write_tag(AeonTag::IUint32);
                        self.writer.u32(magnitude as u32);
                    }
                } else if int > 0 && int <= 0xFF {
                    self.write_tag(AeonTag::Uint8);
                    self.writer.u8(int as u8);
                } else if int > 0 && int <= 0xFFFF {
                    self.write_tag(AeonTag::Uint16);
                    self.writer.u16(int as u16);
                } else if int > 0 && int <= 0xFFFF_FFFF {
                    self.write_tag(AeonTag::Uint32);
                    self.writer.u32(int as u32);
                } else {
                    self.write_tag(AeonTag::Int64);
                    self.writer.i64(int);
                }
            }
        }
        Ok(())
    }

    pub fn write_float(&mut self, float: f64) -> Result<(), AeonError> {
        if !float.is_finite() {
            return Err(AeonError::UnsupportedValue("non-finite float"));
        }
        self.write_tag(AeonTag::Real64);
        self.writer.f64(float);
        Ok(())
    }

    pub fn write_str(&mut self, s: &str) -> Result<(), AeonError> {
        if s.is_empty() {
            self.write_tag(AeonTag::StrEmpty);
            return Ok(());
        }
        self.write_tag(AeonTag::Str);
        self.write_key(s)
    }

    /// Writes the tag-less length-prefixed string form used for map keys.
    pub fn write_key(&mut self, s: &str) -> Result<(), AeonError> {
        write_varuint(&mut self.writer, s.len() as u64)?;
        self.writer.utf8(s);
        Ok(())
    }

    pub fn write_bin(&mut self, buf: &[u8]) -> Result<(), AeonError> {
        if buf.is_empty() {
            self.write_tag(AeonTag::BinaryEmpty);
            return Ok(());
        }
        self.write_tag(AeonTag::Binary);
        write_varuint(&mut self.writer, buf.len() as u64)?;
        self.writer.buf(buf);
        Ok(())
    }

    pub fn write_arr(&mut self, arr: &[AeonValue]) -> Result<(), AeonError> {
        if arr.is_empty() {
            self.write_tag(AeonTag::ArrayEmpty);
            return Ok(());
        }
        self.write_tag(AeonTag::Array);
        write_varuint(&mut self.writer, arr.len() as u64)?;
        for item in arr {
            self.write_any(item)?;
        }
        Ok(())
    }

    pub fn write_map(&mut self, pairs: &[(String, AeonValue)]) -> Result<(), AeonError> {
        if pairs.is_empty() {
            self.write_tag(AeonTag::MapEmpty);
            return Ok(());
        }
        self.write_tag(AeonTag::Map);
        write_varuint(&mut self.writer, pairs.len() as u64)?;
        for (key, val) in pairs {
            self.write_key(key)?;
            self.write_any(val)?;
        }
        Ok(())
    }
}
