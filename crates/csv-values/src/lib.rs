//! Cell-level codec between scalar record fields and CSV text.
//!
//! This crate converts one raw text cell to a typed field value and back,
//! by scalar kind. Quoting and delimiter handling belong to the tokenizer,
//! not to this codec: cells arrive and leave as plain strings.
//!
//! # Modules
//!
//! - [`forward`] - `ScalarValue` → raw cell
//! - [`reverse`] - raw cell → `ScalarValue`
//!
//! # Example
//!
//! ```rust
//! use csv_values::{decode, encode};
//! use record_core::{ScalarKind, ScalarValue};
//!
//! let value = decode("42", ScalarKind::Int).unwrap();
//! assert_eq!(value, ScalarValue::Int(42));
//! assert_eq!(encode(value), "42");
//! ```

pub mod forward;
pub mod reverse;

pub use forward::{encode, CsvCell};
pub use reverse::{decode, ParseError};
