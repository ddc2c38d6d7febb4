//! Forward conversion: typed field value → raw CSV cell.

use record_core::ScalarValue;

/// Wrapper for one encoded CSV cell.
#[derive(Debug, Clone, PartialEq)]
pub struct CsvCell(pub String);

impl CsvCell {
    /// Get the inner cell text.
    pub fn into_inner(self) -> String {
        self.0
    }

    /// Get a reference to the inner cell text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<ScalarValue> for CsvCell {
    fn from(value: ScalarValue) -> Self {
        match value {
            // Text - verbatim
            ScalarValue::Text(text) => CsvCell(text),

            // Integer - decimal, no separators, no padding
            ScalarValue::Int(i) => CsvCell(i.to_string()),

            // Floating point - `Display` gives the shortest decimal form
            // that re-parses to the identical value; fixed precision would
            // lose small magnitudes like 1e-6.
            ScalarValue::Float32(f) => CsvCell(f.to_string()),
            ScalarValue::Float64(f) => CsvCell(f.to_string()),

            // Boolean - canonical lowercase literal
            ScalarValue::Bool(b) => CsvCell(if b {
                "true".to_string()
            } else {
                "false".to_string()
            }),
        }
    }
}

/// Encode one field value as a raw cell.
pub fn encode(value: ScalarValue) -> String {
    CsvCell::from(value).into_inner()
}
