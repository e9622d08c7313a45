//! `AeonDecoder` — recursive-descent AEON binary decoder.

use aeon_buffers::Reader;

use super::constants::AeonTag;
use super::error::AeonError;
use super::varuint::read_varuint;
use crate::AeonValue;

/// Stateless AEON binary decoder.
///
/// Consumes a byte buffer from offset 0 and materializes the first
/// fully-formed value. Trailing bytes after that value are ignored; use
/// [`AeonDecoder::decode_with_consumed`] when the caller needs the cursor.
#[derive(Default)]
pub struct AeonDecoder;

/// Maximum container nesting the decoder will follow. Each level costs one
/// stack frame; deeper input fails with [`AeonError::NestingTooDeep`].
const MAX_DEPTH: usize = 1024;

impl AeonDecoder {
    pub fn new() -> Self {
        Self
    }

    /// Decodes the first value in `input`.
    pub fn decode(&self, input: &[u8]) -> Result<AeonValue, AeonError> {
        let mut rd = Reader::new(input);
        self.read_any(&mut rd)
    }

    /// Decodes the first value and reports how many bytes it occupied.
    pub fn decode_with_consumed(&self, input: &[u8]) -> Result<(AeonValue, usize), AeonError> {
        let mut rd = Reader::new(input);
        let value = self.read_any(&mut rd)?;
        Ok((value, rd.x))
    }

    /// Reads one value at the reader's cursor.
    pub fn read_any(&self, rd: &mut Reader) -> Result<AeonValue, AeonError> {
        self.read_value(rd, 0)
    }

    fn read_value(&self, rd: &mut Reader, depth: usize) -> Result<AeonValue, AeonError> {
        if depth > MAX_DEPTH {
            return Err(AeonError::NestingTooDeep);
        }
        let byte = rd.try_u8()?;
        let tag = AeonTag::from_u8(byte).ok_or(AeonError::UnknownTag(byte))?;
        Ok(match tag {
            AeonTag::Null => AeonValue::Null,
            AeonTag::BoolTrue => AeonValue::Bool(true),
            AeonTag::BoolFalse => AeonValue::Bool(false),
            AeonTag::Zero => AeonValue::Int(0),
            AeonTag::One => AeonValue::Int(1),
            AeonTag::Int8 => AeonValue::Int(rd.try_i8()? as i64),
            AeonTag::Int16 => AeonValue::Int(rd.try_i16()? as i64),
            AeonTag::Int32 => AeonValue::Int(rd.try_i32()? as i64),
            AeonTag::Int64 => AeonValue::Int(rd.try_i64()?),
            AeonTag::Uint8 => AeonValue::Int(rd.try_u8()? as i64),
            AeonTag::Uint16 => AeonValue::Int(rd.try_u16()? as i64),
            AeonTag::Uint32 => AeonValue::Int(rd.try_u32()? as i64),
            AeonTag::IUint8 => AeonValue::Int(-(rd.try_u8()? as i64)),
            AeonTag::IUint16 => AeonValue::Int(-(rd.try_u16()? as i64)),
            AeonTag::IUint32 => AeonValue::Int(-(rd.try_u32()? as i64)),
            AeonTag::Real32 => AeonValue::Float(rd.try_f32()? as f64),
            AeonTag::Real64 => AeonValue::Float(rd.try_f64()?),
            AeonTag::Str => AeonValue::Str(self.read_str(rd)?),
            AeonTag::StrEmpty => AeonValue::Str(String::new()),
            AeonTag::Array => self.read_arr(rd, depth)?,
            AeonTag::ArrayEmpty => AeonValue::Array(Vec::new()),
            AeonTag::Map => self.read_map(rd, depth)?,
            AeonTag::MapEmpty => AeonValue::Map(Vec::new()),
            AeonTag::Binary => self.read_bin(rd)?,
            AeonTag::BinaryEmpty => AeonValue::Bytes(Vec::new()),
        })
    }

    /// Reads a length-prefixed UTF-8 string without a leading tag. Map keys
    /// are always read through this rule, never through full tag dispatch.
    fn read_str(&self, rd: &mut Reader) -> Result<String, AeonError> {
        let size = read_varuint(rd)? as usize;
        Ok(rd.try_utf8(size)?.to_string())
    }

    fn read_arr(&self, rd: &mut Reader, depth: usize) -> Result<AeonValue, AeonError> {
        let size = read_varuint(rd)? as usize;
        let mut arr = Vec::new();
        for _ in 0..size {
            arr.push(self.read_value(rd, depth + 1)?);
        }
        Ok(AeonValue::Array(arr))
    }

    fn read_map(&self, rd: &mut Reader, depth: usize) -> Result<AeonValue, AeonError> {
        let size = read_varuint(rd)? as usize;
        let mut pairs: Vec<(String, AeonValue)> = Vec::new();
        for _ in 0..size {
            let key = self.read_str(rd)?;
            let value = self.read_value(rd, depth + 1)?;
            // Later duplicates overwrite earlier entries in place.
            match pairs.iter_mut().find(|(k, _)| *k == key) {
                Some(entry) => entry.1 = value,
                None => pairs.push((key, value)),
            }
        }
        Ok(AeonValue::Map(pairs))
    }

    fn read_bin(&self, rd: &mut Reader) -> Result<AeonValue, AeonError> {
        let size = read_varuint(rd)? as usize;
        Ok(AeonValue::Bytes(rd.try_buf(size)?.to_vec()))
    }
}
