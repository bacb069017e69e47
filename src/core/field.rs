//! Key-value pairs attached to loggers and log lines

use serde::{Deserialize, Serialize};
use std::fmt;

/// A typed value carried by a [`KeyValue`].
///
/// Serialized untagged, so a pair reads as `{"key":"k","value":3}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    String(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    Null,
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::String(s) => f.write_str(s),
            FieldValue::Int(i) => i.fmt(f),
            FieldValue::Float(x) => x.fmt(f),
            FieldValue::Bool(b) => b.fmt(f),
            FieldValue::Null => f.write_str("null"),
        }
    }
}

macro_rules! int_field_value {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for FieldValue {
                fn from(value: $ty) -> Self {
                    FieldValue::Int(i64::from(value))
                }
            }
        )*
    };
}

int_field_value!(i8, i16, i32, i64, u8, u16, u32);

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        FieldValue::Float(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Bool(value)
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::String(value)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::String(value.to_owned())
    }
}

impl<T: Into<FieldValue>> From<Option<T>> for FieldValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(FieldValue::Null, Into::into)
    }
}

/// A single key-value pair.
///
/// Sequences of pairs are always `Vec`/slice based so the order in which
/// they were supplied is the order a backend sees them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeyValue {
    pub key: String,
    pub value: FieldValue,
}

impl KeyValue {
    pub fn new<K, V>(key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<FieldValue>,
    {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

impl fmt::Display for KeyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.key, self.value)
    }
}

impl<K: Into<String>, V: Into<FieldValue>> From<(K, V)> for KeyValue {
    fn from((key, value): (K, V)) -> Self {
        KeyValue::new(key, value)
    }
}

/// Render pairs as `key=value` separated by spaces
pub fn format_pairs(pairs: &[KeyValue]) -> String {
    let mut out = String::new();
    for (i, pair) in pairs.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        out.push_str(&pair.to_string());
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_value_conversions() {
        assert_eq!(FieldValue::from("a"), FieldValue::String("a".to_string()));
        assert_eq!(FieldValue::from(7), FieldValue::Int(7));
        assert_eq!(FieldValue::from(7u8), FieldValue::Int(7));
        assert_eq!(FieldValue::from(u32::MAX), FieldValue::Int(u32::MAX as i64));
        assert_eq!(FieldValue::from(true), FieldValue::Bool(true));
        assert_eq!(FieldValue::from(None::<i64>), FieldValue::Null);
        assert_eq!(FieldValue::from(Some(3i64)), FieldValue::Int(3));
    }

    #[test]
    fn test_display() {
        assert_eq!(FieldValue::from(-4).to_string(), "-4");
        assert_eq!(FieldValue::from(1.5).to_string(), "1.5");
        assert_eq!(FieldValue::Null.to_string(), "null");
    }

    #[test]
    fn test_format_pairs_keeps_order() {
        let pairs = vec![
            KeyValue::new("b", 2),
            KeyValue::new("a", "one"),
            KeyValue::from(("c", false)),
        ];
        assert_eq!(format_pairs(&pairs), "b=2 a=one c=false");
        assert_eq!(format_pairs(&[]), "");
    }

    #[test]
    fn test_key_value_serializes_untagged() {
        let kv = KeyValue::new("user_id", 123);
        let json = serde_json::to_string(&kv).unwrap();
        assert_eq!(json, r#"{"key":"user_id","value":123}"#);

        let back: KeyValue = serde_json::from_str(r#"{"key":"flag","value":true}"#).unwrap();
        assert_eq!(back, KeyValue::new("flag", true));
    }
}
