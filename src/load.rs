//! Load entry points: tokenized rows → typed record collection.

use crate::error::BindError;
use crate::Options;
use csv::StringRecord;
use record_core::{Binding, Record};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::debug;

/// Load records from a reader into `destination`.
///
/// The whole input is tokenized up front, the header is resolved once, and
/// `destination` is replaced only after every row decoded. On any fault the
/// destination is left untouched. An input with no rows at all yields an
/// empty collection.
pub fn load_from_reader<R, S>(
    reader: S,
    destination: &mut Vec<R>,
    options: Options,
) -> Result<(), BindError>
where
    R: Record,
    S: Read,
{
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .delimiter(options.delimiter)
        .quoting(!options.lenient_quoting)
        .from_reader(reader);

    let rows: Vec<StringRecord> = csv_reader.records().collect::<Result<_, _>>()?;
    if rows.is_empty() {
        *destination = Vec::new();
        return Ok(());
    }

    // An explicit header makes the first input row ordinary data.
    let (header, data, first_row) = match options.header {
        Some(header) => (header, &rows[..], 1),
        None => {
            let header: Vec<String> = rows[0].iter().map(str::to_string).collect();
            (header, &rows[1..], 2)
        }
    };

    let binding = Binding::resolve(&header, R::fields());
    debug!(
        "resolved {} of {} columns, {} data rows",
        binding.len(),
        header.len(),
        data.len()
    );

    let mut records = Vec::with_capacity(data.len());
    for (offset, row) in data.iter().enumerate() {
        records.push(decode_row(row, &binding, first_row + offset)?);
    }

    *destination = records;
    Ok(())
}

/// Load records from the file at `path`.
pub fn load_from_path<R, P>(
    path: P,
    destination: &mut Vec<R>,
    options: Options,
) -> Result<(), BindError>
where
    R: Record,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| BindError::File {
        path: path.to_path_buf(),
        source,
    })?;
    load_from_reader(file, destination, options)
}

/// Load records from an in-memory string.
pub fn load_from_str<R: Record>(
    input: &str,
    destination: &mut Vec<R>,
    options: Options,
) -> Result<(), BindError> {
    load_from_reader(input.as_bytes(), destination, options)
}

/// Decode one data row through the binding. `row_number` is the 1-based
/// position in the input, for diagnostics.
fn decode_row<R: Record>(
    row: &StringRecord,
    binding: &Binding,
    row_number: usize,
) -> Result<R, BindError> {
    let mut record = R::default();
    for bound in binding.iter() {
        let cell = row.get(bound.column).ok_or(BindError::RowTooShort {
            row: row_number,
            width: row.len(),
            column: bound.column,
        })?;
        let value = csv_values::decode(cell, R::fields()[bound.field].kind)
            .map_err(|source| BindError::Parse {
                row: row_number,
                source,
            })?;
        record.set(bound.field, &value);
    }
    Ok(record)
}
