//! `AeonTextEncoder` — writes the JSON-compatible text form of a value tree.
//!
//! Binary values have no JSON equivalent, so they are written as
//! `data:application/octet-stream;base64,` data-URI strings, which the text
//! decoder turns back into bytes.

use aeon_buffers::Writer;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;

use crate::AeonValue;

/// `data:application/octet-stream;base64,` prefix for binary values.
pub(super) const BIN_URI_PREFIX: &str = "data:application/octet-stream;base64,";

pub struct AeonTextEncoder {
    pub writer: Writer,
}

impl Default for AeonTextEncoder {
    fn default() -> Self {
        Self::new()
    }
}

impl AeonTextEncoder {
    pub fn new() -> Self {
        Self {
            writer: Writer::new(),
        }
    }

    /// Serializes `value` to UTF-8 text bytes.
    pub fn encode(&mut self, value: &AeonValue) -> Vec<u8> {
        self.writer.reset();
        self.write_any(value);
        self.writer.flush()
    }

    /// Serializes `value` to a `String`.
    pub fn encode_string(&mut self, value: &AeonValue) -> String {
        // The encoder only ever emits valid UTF-8.
        String::from_utf8(self.encode(value)).unwrap_or_default()
    }

    pub fn write_any(&mut self, value: &AeonValue) {
        match value {
            AeonValue::Null => {
                self.writer.utf8("null");
            }
            AeonValue::Bool(b) => {
                self.writer.utf8(if *b { "true" } else { "false" });
            }
            AeonValue::Int(i) => {
                self.writer.utf8(&i.to_string());
            }
            AeonValue::Float(f) => self.write_float(*f),
            AeonValue::Str(s) => self.write_str(s),
            AeonValue::Bytes(b) => self.write_bin(b),
            AeonValue::Array(arr) => self.write_arr(arr),
            AeonValue::Map(pairs) => self.write_map(pairs),
        }
    }

    fn write_float(&mut self, f: f64) {
        if !f.is_finite() {
            // NaN and infinities have no text representation.
            self.writer.utf8("null");
        } else if f.fract() == 0.0 {
            // Force a decimal point so the value parses back as a float.
            self.writer.utf8(&format!("{:.1}", f));
        } else {
            self.writer.utf8(&f.to_string());
        }
    }

    fn write_str(&mut self, s: &str) {
        self.writer.u8(b'"');
        for c in s.chars() {
            match c {
                '"' => {
                    self.writer.utf8("\\\"");
                }
                '\\' => {
                    self.writer.utf8("\\\\");
                }
                '\u{8}' => {
                    self.writer.utf8("\\b");
                }
                '\u{c}' => {
                    self.writer.utf8("\\f");
                }
                '\n' => {
                    self.writer.utf8("\\n");
                }
                '\r' => {
                    self.writer.utf8("\\r");
                }
                '\t' => {
                    self.writer.utf8("\\t");
                }
                c if (c as u32) < 0x20 => {
                    self.writer.utf8(&format!("\\u{:04x}", c as u32));
                }
                c => {
                    let mut buf = [0u8; 4];
                    self.writer.utf8(c.encode_utf8(&mut buf));
                }
            }
        }
        self.writer.u8(b'"');
    }

    fn write_bin(&mut self, bytes: &[u8]) {
        self.writer.u8(b'"');
        self.writer.utf8(BIN_URI_PREFIX);
        self.writer.utf8(&BASE64.encode(bytes));
        self.writer.u8(b'"');
    }

    fn write_arr(&mut self, arr: &[AeonValue]) {
        self.writer.u8(b'[');
        let mut first = true;
        for item in arr {
            if !first {
                self.writer.u8(b',');
            }
            first = false;
            self.write_any(item);
        }
        self.writer.u8(b']');
    }

    fn write_map(&mut self, pairs: &[(String, AeonValue)]) {
        self.writer.u8(b'{');
        let mut first = true;
        for (key, val) in pairs {
            if !first {
                self.writer.u8(b',');
            }
            first = false;
            self.write_str(key);
            self.writer.u8(b':');
            self.write_any(val);
        }
        self.writer.u8(b'}');
    }
}
