//! Reverse conversion: raw CSV cell → typed field value.

use record_core::{ScalarKind, ScalarValue};
use thiserror::Error;

/// A cell the codec could not coerce to its field's declared kind.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("cannot parse {value:?} as {kind}")]
pub struct ParseError {
    /// Raw cell text as read from the input.
    pub value: String,
    /// Kind the field declared.
    pub kind: ScalarKind,
}

impl ParseError {
    fn new(value: &str, kind: ScalarKind) -> Self {
        Self {
            value: value.to_string(),
            kind,
        }
    }
}

/// Decode one raw cell according to the field's declared kind.
///
/// Empty integer and float cells decode to zero, and an empty boolean cell
/// decodes to `false`, mirroring the zero-value semantics of fields that
/// never match a column. Booleans otherwise accept exactly the lowercase
/// `true`/`false` literals the encoder produces. Any other unparsable text
/// is a [`ParseError`].
pub fn decode(raw: &str, kind: ScalarKind) -> Result<ScalarValue, ParseError> {
    match kind {
        // Text - verbatim, no trimming
        ScalarKind::Text => Ok(ScalarValue::Text(raw.to_string())),

        // Integer - base-10 signed 64-bit
        ScalarKind::Int => {
            if raw.is_empty() {
                return Ok(ScalarValue::Int(0));
            }
            raw.parse::<i64>()
                .map(ScalarValue::Int)
                .map_err(|_| ParseError::new(raw, kind))
        }

        // Floating point - decimal or scientific notation
        ScalarKind::Float32 => {
            if raw.is_empty() {
                return Ok(ScalarValue::Float32(0.0));
            }
            raw.parse::<f32>()
                .map(ScalarValue::Float32)
                .map_err(|_| ParseError::new(raw, kind))
        }
        ScalarKind::Float64 => {
            if raw.is_empty() {
                return Ok(ScalarValue::Float64(0.0));
            }
            raw.parse::<f64>()
                .map(ScalarValue::Float64)
                .map_err(|_| ParseError::new(raw, kind))
        }

        // Boolean
        ScalarKind::Bool => {
            if raw.is_empty() {
                return Ok(ScalarValue::Bool(false));
            }
            raw.parse::<bool>()
                .map(ScalarValue::Bool)
                .map_err(|_| ParseError::new(raw, kind))
        }
    }
}
