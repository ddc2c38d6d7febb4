//! Record data model for column-mapped tabular text.
//!
//! This crate provides the foundational types shared by the engine crates:
//!
//! - [`ScalarKind`] / [`ScalarValue`] - the field kinds the codec understands
//! - [`Record`] - the introspection capability implemented per record type
//! - [`FieldSpec`] - one field declaration (name, column key, kind)
//! - [`Binding`] - per-call resolution of header positions to field positions
//! - [`record!`] - declares a struct together with its `Record` impl
//!
//! # Architecture
//!
//! ```text
//! record-core (this crate)
//!    │
//!    ├─── csv-values  (decodes/encodes ScalarValue per cell)
//!    └─── csv-bind    (load/dump entry points over record collections)
//! ```
//!
//! # Example
//!
//! ```rust
//! use record_core::header_for;
//!
//! record_core::record! {
//!     pub struct City {
//!         pub name: String => "name",
//!         pub population: i64 => "population",
//!         pub area_notes: String,
//!     }
//! }
//!
//! // Fields without a column key stay out of the mapping.
//! assert_eq!(header_for::<City>(), vec!["name", "population"]);
//! ```

pub mod record;
pub mod schema;
pub mod values;

pub use record::Record;
pub use schema::{header_for, Binding, BoundColumn, FieldSpec};
pub use values::{Scalar, ScalarKind, ScalarValue};
