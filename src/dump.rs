//! Dump entry points: typed record collection → rows of text cells.

use crate::error::BindError;
use crate::Options;
use record_core::{header_for, Record};
use std::fs::File;
use std::io::Write;
use std::path::Path;
use tracing::debug;

/// Dump `records` to a writer.
///
/// Writes the header row first (generated from the record type's column
/// declarations unless overridden or suppressed), then one row per record.
/// Unannotated fields are omitted from rows, never emitted as blank cells.
pub fn dump_to_writer<R, W>(records: &[R], writer: W, options: Options) -> Result<(), BindError>
where
    R: Record,
    W: Write,
{
    let terminator = if options.use_crlf {
        csv::Terminator::CRLF
    } else {
        csv::Terminator::Any(b'\n')
    };
    let mut csv_writer = csv::WriterBuilder::new()
        .delimiter(options.delimiter)
        .terminator(terminator)
        .flexible(true)
        .from_writer(writer);

    if options.write_header {
        let header = options.header.unwrap_or_else(header_for::<R>);
        csv_writer.write_record(&header)?;
    }

    debug!("dumping {} records", records.len());
    for record in records {
        csv_writer.write_record(encode_row(record))?;
    }

    csv_writer.flush()?;
    Ok(())
}

/// Dump `records` to the file at `path`, creating or truncating it.
pub fn dump_to_path<R, P>(records: &[R], path: P, options: Options) -> Result<(), BindError>
where
    R: Record,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let file = File::create(path).map_err(|source| BindError::File {
        path: path.to_path_buf(),
        source,
    })?;
    dump_to_writer(records, file, options)
}

/// Dump `records` to an in-memory string.
pub fn dump_to_string<R: Record>(records: &[R], options: Options) -> Result<String, BindError> {
    let mut buffer = Vec::new();
    dump_to_writer(records, &mut buffer, options)?;
    String::from_utf8(buffer).map_err(|e| BindError::Io(std::io::Error::other(e.to_string())))
}

/// Encode one record as a row of cells: annotated fields only, in
/// declaration order.
fn encode_row<R: Record>(record: &R) -> Vec<String> {
    R::fields()
        .iter()
        .enumerate()
        .filter(|(_, spec)| spec.column.is_some())
        .map(|(index, _)| csv_values::encode(record.get(index)))
        .collect()
}
