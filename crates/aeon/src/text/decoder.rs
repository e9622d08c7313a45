//! `AeonTextDecoder` — parses the JSON-compatible text form.
//!
//! The grammar is deliberately lenient about separators: commas, colons and
//! whitespace are all skippable filler between tokens. Strings carrying the
//! `data:application/octet-stream;base64,` prefix decode to binary values.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;

use super::encoder::BIN_URI_PREFIX;
use super::error::AeonTextError;
use crate::AeonValue;

pub struct AeonTextDecoder {
    pub data: Vec<u8>,
    pub x: usize,
}

impl Default for AeonTextDecoder {
    fn default() -> Self {
        Self::new()
    }
}

impl AeonTextDecoder {
    pub fn new() -> Self {
        Self {
            data: Vec::new(),
            x: 0,
        }
    }

    pub fn decode(&mut self, input: &[u8]) -> Result<AeonValue, AeonTextError> {
        self.data = input.to_vec();
        self.x = 0;
        self.read_any()
    }

    /// Parses a value from a `&str`.
    pub fn decode_str(&mut self, input: &str) -> Result<AeonValue, AeonTextError> {
        self.decode(input.as_bytes())
    }

    fn err<T>(&self) -> Result<T, AeonTextError> {
        Err(AeonTextError::Invalid(self.x))
    }

    /// Skips whitespace and the `,`/`:` separators.
    fn skip_irrelevant(&mut self) {
        while self.x < self.data.len() {
            match self.data[self.x] {
                b' ' | b'\t' | b'\n' | b'\r' | b',' | b':' => self.x += 1,
                _ => break,
            }
        }
    }

    fn read_any(&mut self) -> Result<AeonValue, AeonTextError> {
        self.skip_irrelevant();
        if self.x >= self.data.len() {
            return self.err();
        }
        match self.data[self.x] {
            b'n' => self.read_literal(b"null", AeonValue::Null),
            b't' => self.read_literal(b"true", AeonValue::Bool(true)),
            b'f' => self.read_literal(b"false", AeonValue::Bool(false)),
            b'"' => {
                let s = self.read_str()?;
                Ok(Self::string_to_value(s))
            }
            b'[' => self.read_arr(),
            b'{' => self.read_map(),
            b'0'..=b'9' | b'+' | b'-' => self.read_num(),
            _ => self.err(),
        }
    }

    fn read_literal(
        &mut self,
        word: &'static [u8],
        value: AeonValue,
    ) -> Result<AeonValue, AeonTextError> {
        if self.x + word.len() > self.data.len() || &self.data[self.x..self.x + word.len()] != word
        {
            return self.err();
        }
        self.x += word.len();
        Ok(value)
    }

    fn read_num(&mut self) -> Result<AeonValue, AeonTextError> {
        let start = self.x;
        let mut is_float = false;
        while self.x < self.data.len() {
            match self.data[self.x] {
                b'.' | b'e' | b'E' => {
                    is_float = true;
                    self.x += 1;
                }
                b'0'..=b'9' | b'+' | b'-' => self.x += 1,
                _ => break,
            }
        }
        if start == self.x {
            return self.err();
        }
        // The slice is ASCII by construction.
        let text = std::str::from_utf8(&self.data[start..self.x])
            .map_err(|_| AeonTextError::Invalid(start))?;
        if !is_float {
            if let Ok(i) = text.parse::<i64>() {
                return Ok(AeonValue::Int(i));
            }
        }
        match text.parse::<f64>() {
            Ok(f) => Ok(AeonValue::Float(f)),
            Err(_) => Err(AeonTextError::Invalid(start)),
        }
    }

    fn read_str(&mut self) -> Result<String, AeonTextError> {
        if self.data[self.x] != b'"' {
            return self.err();
        }
        self.x += 1;
        let mut out: Vec<u8> = Vec::new();
        while self.x < self.data.len() {
            let ch = self.data[self.x];
            self.x += 1;
            match ch {
                b'"' => {
                    return String::from_utf8(out).map_err(|_| AeonTextError::Invalid(self.x));
                }
                b'\\' => {
                    if self.x >= self.data.len() {
                        return self.err();
                    }
                    let esc = self.data[self.x];
                    self.x += 1;
                    match esc {
                        b'b' => out.push(0x08),
                        b'f' => out.push(0x0c),
                        b'n' => out.push(b'\n'),
                        b'r' => out.push(b'\r'),
                        b't' => out.push(b'\t'),
                        b'"' => out.push(b'"'),
                        b'\\' => out.push(b'\\'),
                        b'u' => {
                            let c = self.read_unicode_escape()?;
                            let mut buf = [0u8; 4];
                            out.extend_from_slice(c.encode_utf8(&mut buf).as_bytes());
                        }
                        // Unknown escapes pass through as the literal character.
                        other => out.push(other),
                    }
                }
                other => out.push(other),
            }
        }
        self.err()
    }

    fn read_unicode_escape(&mut self) -> Result<char, AeonTextError> {
        if self.x + 4 > self.data.len() {
            return self.err();
        }
        let hex = std::str::from_utf8(&self.data[self.x..self.x + 4])
            .map_err(|_| AeonTextError::Invalid(self.x))?;
        let code = u32::from_str_radix(hex, 16).map_err(|_| AeonTextError::Invalid(self.x))?;
        self.x += 4;
        char::from_u32(code).ok_or(AeonTextError::Invalid(self.x))
    }

    /// Turns a parsed string into a value, recognizing the binary data-URI.
    fn string_to_value(s: String) -> AeonValue {
        if let Some(b64) = s.strip_prefix(BIN_URI_PREFIX) {
            if let Ok(bytes) = BASE64.decode(b64) {
                return AeonValue::Bytes(bytes);
            }
        }
        AeonValue::Str(s)
    }

    fn read_arr(&mut self) -> Result<AeonValue, AeonTextError> {
        self.x += 1; // consume '['
        let mut arr = Vec::new();
        loop {
            self.skip_irrelevant();
            if self.x >= self.data.len() {
                return self.err();
            }
            if self.data[self.x] == b']' {
                self.x += 1;
                return Ok(AeonValue::Array(arr));
            }
            arr.push(self.read_any()?);
        }
    }

    fn read_map(&mut self) -> Result<AeonValue, AeonTextError> {
        self.x += 1; // consume '{'
        let mut pairs: Vec<(String, AeonValue)> = Vec::new();
        loop {
            self.skip_irrelevant();
            if self.x >= self.data.len() {
                return self.err();
            }
            if self.data[self.x] == b'}' {
                self.x += 1;
                return Ok(AeonValue::Map(pairs));
            }
            let key = self.read_str()?;
            let value = self.read_any()?;
            match pairs.iter_mut().find(|(k, _)| *k == key) {
                Some(entry) => entry.1 = value,
                None => pairs.push((key, value)),
            }
        }
    }
}
