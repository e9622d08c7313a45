//! [`AeonValue`] — the dynamically-typed value tree both codec sides operate on.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;

/// The AEON interchange value.
///
/// A closed tagged union: every variant the wire format can carry, and
/// nothing else. Maps preserve insertion order (which is the encoded order)
/// and are keyed by strings only.
#[derive(Debug, Clone, PartialEq)]
pub enum AeonValue {
    /// Null / absent value.
    Null,
    /// Boolean value.
    Bool(bool),
    /// Signed integer (any fixed-width wire encoding widens to i64).
    Int(i64),
    /// Floating-point number (32-bit wire payloads widen to f64).
    Float(f64),
    /// UTF-8 string.
    Str(String),
    /// Opaque byte sequence.
    Bytes(Vec<u8>),
    /// Ordered sequence of values.
    Array(Vec<AeonValue>),
    /// String-keyed map (ordered key-value pairs).
    Map(Vec<(String, AeonValue)>),
}

impl AeonValue {
    /// Coerces to a boolean, in the manner of loosely-typed accessors:
    /// numbers are truthy when non-zero, strings when non-empty.
    pub fn as_bool(&self) -> bool {
        match self {
            AeonValue::Bool(b) => *b,
            AeonValue::Int(i) => *i != 0,
            AeonValue::Float(f) => *f != 0.0,
            AeonValue::Str(s) => !s.is_empty(),
            _ => false,
        }
    }

    /// Coerces to an integer; non-numeric values yield 0.
    pub fn as_int(&self) -> i64 {
        match self {
            AeonValue::Bool(b) => *b as i64,
            AeonValue::Int(i) => *i,
            AeonValue::Float(f) => *f as i64,
            AeonValue::Str(s) => s.parse().unwrap_or(0),
            _ => 0,
        }
    }

    /// Coerces to a float; non-numeric values yield 0.0.
    pub fn as_f64(&self) -> f64 {
        match self {
            AeonValue::Bool(b) => *b as i64 as f64,
            AeonValue::Int(i) => *i as f64,
            AeonValue::Float(f) => *f,
            AeonValue::Str(s) => s.parse().unwrap_or(0.0),
            _ => 0.0,
        }
    }

    /// Returns the string slice if this is a string value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            AeonValue::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Looks up a map entry by key. Returns `None` for non-map values.
    pub fn get(&self, key: &str) -> Option<&AeonValue> {
        match self {
            AeonValue::Map(pairs) => pairs.iter().find(|(k, _)| k == key).map(|(_, v)| v),
            _ => None,
        }
    }

    /// Indexes into an array. Returns `None` for non-array values.
    pub fn at(&self, index: usize) -> Option<&AeonValue> {
        match self {
            AeonValue::Array(items) => items.get(index),
            _ => None,
        }
    }
}

impl From<serde_json::Value> for AeonValue {
    fn from(v: serde_json::Value) -> Self {
        match v {
            serde_json::Value::Null => AeonValue::Null,
            serde_json::Value::Bool(b) => AeonValue::Bool(b),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    AeonValue::Int(i)
                } else {
                    AeonValue::Float(n.as_f64().unwrap_or(0.0))
                }
            }
            serde_json::Value::String(s) => AeonValue::Str(s),
            serde_json::Value::Array(arr) => {
                AeonValue::Array(arr.into_iter().map(AeonValue::from).collect())
            }
            serde_json::Value::Object(obj) => AeonValue::Map(
                obj.into_iter()
                    .map(|(k, v)| (k, AeonValue::from(v)))
                    .collect(),
            ),
        }
    }
}

impl From<AeonValue> for serde_json::Value {
    fn from(v: AeonValue) -> Self {
        match v {
            AeonValue::Null => serde_json::Value::Null,
            AeonValue::Bool(b) => serde_json::Value::Bool(b),
            AeonValue::Int(i) => serde_json::json!(i),
            AeonValue::Float(f) => serde_json::json!(f),
            AeonValue::Str(s) => serde_json::Value::String(s),
            AeonValue::Bytes(b) => {
                let b64 = BASE64.encode(&b);
                serde_json::Value::String(format!("data:application/octet-stream;base64,{}", b64))
            }
            AeonValue::Array(arr) => {
                serde_json::Value::Array(arr.into_iter().map(serde_json::Value::from).collect())
            }
            AeonValue::Map(pairs) => serde_json::Value::Object(
                pairs
                    .into_iter()
                    .map(|(k, v)| (k, serde_json::Value::from(v)))
                    .collect(),
            ),
        }
    }
}
