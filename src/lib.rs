//! Column-key based mapping between CSV text and typed record collections.
//!
//! Record types declare, per field, the column key that feeds it. The engine
//! resolves those declarations against a header once per call and coerces
//! each cell to the field's scalar kind. Columns nobody declared and fields
//! no column matches are skipped silently, so a record type only ever sees
//! the slice of a file it asked for.
//!
//! Loading buffers the whole input before mapping it (a deliberate
//! simplicity trade-off, not streaming) and replaces the destination
//! collection atomically: a fault anywhere leaves it untouched.
//!
//! # Example
//!
//! ```rust
//! use csv_bind::{dump_to_string, load_from_str, Options};
//!
//! csv_bind::record! {
//!     pub struct City {
//!         pub name: String => "name",
//!         pub population: i64 => "population",
//!     }
//! }
//!
//! let input = "name,population\nLyon,522228\nBrest,139456\n";
//! let mut cities: Vec<City> = Vec::new();
//! load_from_str(input, &mut cities, Options::default()).unwrap();
//! assert_eq!(cities[0].population, 522228);
//!
//! let output = dump_to_string(&cities, Options::default()).unwrap();
//! assert_eq!(output, input);
//! ```

pub mod dump;
pub mod error;
pub mod load;

pub use dump::{dump_to_path, dump_to_string, dump_to_writer};
pub use error::BindError;
pub use load::{load_from_path, load_from_reader, load_from_str};

// Re-exports so callers can depend on this crate alone.
pub use csv_values::{decode, encode, CsvCell, ParseError};
pub use record_core::{
    header_for, record, Binding, BoundColumn, FieldSpec, Record, Scalar, ScalarKind, ScalarValue,
};

/// Per-call options shared by the load and dump entry points.
///
/// One value covers both directions; fields irrelevant to a direction are
/// ignored by it.
#[derive(Debug, Clone, PartialEq)]
pub struct Options {
    /// Cell delimiter.
    pub delimiter: u8,

    /// Explicit header. On load the first input row becomes ordinary data;
    /// on dump it replaces the generated header row (field order in data
    /// rows is unaffected).
    pub header: Option<Vec<String>>,

    /// Whether to write the header row when dumping.
    pub write_header: bool,

    /// Terminate dumped rows with `\r\n` instead of `\n`.
    pub use_crlf: bool,

    /// Strip the quote character of its special meaning when loading; the
    /// tokenizer then carries quotes through verbatim.
    pub lenient_quoting: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            delimiter: b',',
            header: None,
            write_header: true,
            use_crlf: false,
            lenient_quoting: false,
        }
    }
}

impl Options {
    /// Replace the delimiter.
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Supply the header instead of taking it from the input or the record
    /// type's declarations.
    pub fn with_header(mut self, header: Vec<String>) -> Self {
        self.header = Some(header);
        self
    }

    /// Set whether dumping writes the header row.
    pub fn with_write_header(mut self, write_header: bool) -> Self {
        self.write_header = write_header;
        self
    }

    /// Use `\r\n` as the dump row terminator.
    pub fn with_crlf(mut self, use_crlf: bool) -> Self {
        self.use_crlf = use_crlf;
        self
    }

    /// Turn off quote interpretation in the tokenizer when loading.
    pub fn with_lenient_quoting(mut self, lenient_quoting: bool) -> Self {
        self.lenient_quoting = lenient_quoting;
        self
    }
}
