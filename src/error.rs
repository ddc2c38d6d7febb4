//! Error types for the load and dump entry points.

use csv_values::ParseError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by the load and dump entry points.
///
/// Every fault is detected eagerly and returned to the immediate caller;
/// nothing is retried. A faulted load leaves its destination untouched.
#[derive(Debug, Error)]
pub enum BindError {
    /// A path-based entry point could not open or create its file.
    #[error("cannot open {path}: {source}")]
    File {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The underlying stream failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The tokenizer rejected the raw row structure.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A cell could not be coerced to its field's declared kind.
    #[error("row {row}: {source}")]
    Parse {
        /// 1-based row position in the input, counting the header row.
        row: usize,
        #[source]
        source: ParseError,
    },

    /// A bound column lies beyond the end of a data row.
    #[error("row {row} has {width} cells, bound column {column} is out of range")]
    RowTooShort {
        /// 1-based row position in the input, counting the header row.
        row: usize,
        /// Number of cells the row actually has.
        width: usize,
        /// Zero-based position of the bound column that was missing.
        column: usize,
    },
}
