//! Scalar kinds and values.
//!
//! Only the kinds listed here participate in column mapping; the engine has
//! no representation for composite shapes.

use std::fmt;

/// The scalar kinds a record field may declare.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarKind {
    /// UTF-8 text, carried verbatim.
    Text,
    /// Signed 64-bit integer.
    Int,
    /// 32-bit floating point.
    Float32,
    /// 64-bit floating point.
    Float64,
    /// Boolean.
    Bool,
}

impl fmt::Display for ScalarKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ScalarKind::Text => "text",
            ScalarKind::Int => "integer",
            ScalarKind::Float32 => "float32",
            ScalarKind::Float64 => "float64",
            ScalarKind::Bool => "boolean",
        };
        f.write_str(name)
    }
}

/// One field value together with its kind.
#[derive(Debug, Clone, PartialEq)]
pub enum ScalarValue {
    Text(String),
    Int(i64),
    Float32(f32),
    Float64(f64),
    Bool(bool),
}

impl ScalarValue {
    /// The kind of this value.
    pub fn kind(&self) -> ScalarKind {
        match self {
            ScalarValue::Text(_) => ScalarKind::Text,
            ScalarValue::Int(_) => ScalarKind::Int,
            ScalarValue::Float32(_) => ScalarKind::Float32,
            ScalarValue::Float64(_) => ScalarKind::Float64,
            ScalarValue::Bool(_) => ScalarKind::Bool,
        }
    }
}

/// Rust types that map onto a [`ScalarKind`].
///
/// Implemented for the five supported field types. The [`record!`](crate::record!)
/// macro relies on this trait to derive each field's kind and to move values
/// in and out of fields.
pub trait Scalar: Clone + Default {
    /// The kind this type declares.
    const KIND: ScalarKind;

    /// Wrap a field value.
    fn into_value(self) -> ScalarValue;

    /// Extract a field value; `None` when the kinds do not line up.
    fn from_value(value: &ScalarValue) -> Option<Self>;
}

impl Scalar for String {
    const KIND: ScalarKind = ScalarKind::Text;

    fn into_value(self) -> ScalarValue {
        ScalarValue::Text(self)
    }

    fn from_value(value: &ScalarValue) -> Option<Self> {
        match value {
            ScalarValue::Text(text) => Some(text.clone()),
            _ => None,
        }
    }
}

impl Scalar for i64 {
    const KIND: ScalarKind = ScalarKind::Int;

    fn into_value(self) -> ScalarValue {
        ScalarValue::Int(self)
    }

    fn from_value(value: &ScalarValue) -> Option<Self> {
        match value {
            ScalarValue::Int(i) => Some(*i),
            _ => None,
        }
    }
}

impl Scalar for f32 {
    const KIND: ScalarKind = ScalarKind::Float32;

    fn into_value(self) -> ScalarValue {
        ScalarValue::Float32(self)
    }

    fn from_value(value: &ScalarValue) -> Option<Self> {
        match value {
            ScalarValue::Float32(f) => Some(*f),
            _ => None,
        }
    }
}

impl Scalar for f64 {
    const KIND: ScalarKind = ScalarKind::Float64;

    fn into_value(self) -> ScalarValue {
        ScalarValue::Float64(self)
    }

    fn from_value(value: &ScalarValue) -> Option<Self> {
        match value {
            ScalarValue::Float64(f) => Some(*f),
            _ => None,
        }
    }
}

impl Scalar for bool {
    const KIND: ScalarKind = ScalarKind::Bool;

    fn into_value(self) -> ScalarValue {
        ScalarValue::Bool(self)
    }

    fn from_value(value: &ScalarValue) -> Option<Self> {
        match value {
            ScalarValue::Bool(b) => Some(*b),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_kind() {
        assert_eq!(ScalarValue::Text("x".to_string()).kind(), ScalarKind::Text);
        assert_eq!(ScalarValue::Int(1).kind(), ScalarKind::Int);
        assert_eq!(ScalarValue::Float32(1.0).kind(), ScalarKind::Float32);
        assert_eq!(ScalarValue::Float64(1.0).kind(), ScalarKind::Float64);
        assert_eq!(ScalarValue::Bool(true).kind(), ScalarKind::Bool);
    }

    #[test]
    fn test_scalar_round_trip() {
        let value = Scalar::into_value("hello".to_string());
        assert_eq!(String::from_value(&value), Some("hello".to_string()));

        let value = Scalar::into_value(42i64);
        assert_eq!(i64::from_value(&value), Some(42));

        let value = Scalar::into_value(true);
        assert_eq!(bool::from_value(&value), Some(true));
    }

    #[test]
    fn test_scalar_kind_mismatch() {
        let value = ScalarValue::Int(42);
        assert_eq!(String::from_value(&value), None);
        assert_eq!(f64::from_value(&value), None);
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(ScalarKind::Int.to_string(), "integer");
        assert_eq!(ScalarKind::Bool.to_string(), "boolean");
    }
}
