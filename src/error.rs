use std::path::PathBuf;

use thiserror::Error;

/// Any fatal condition in the pipeline: path validation -> CSV load ->
/// reconciliation -> report write.
#[derive(Debug, Error)]
pub enum Error {
    #[error("input file does not exist: {}", .0.display())]
    MissingInput(PathBuf),

    #[error("all file paths must be distinct")]
    DuplicatePaths,

    #[error("unsupported file type, expected a .csv file: {}", .0.display())]
    UnsupportedFileType(PathBuf),

    #[error("error during CSV processing: {0}")]
    Csv(#[from] csv::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// The full-set rating aggregate is a superset of both status
    /// partitions, so a merged group without a rating must not occur.
    #[error("no rating aggregate for group ({legal_entity}, {counter_party})")]
    MissingGroupRating {
        legal_entity: String,
        counter_party: String,
    },
}
