use std::path::PathBuf;

use thiserror::Error;

/// Why the real data file could not be used. Every variant leads to the
/// synthetic fallback; the variant only changes what gets reported.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("data file not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("data path is not a regular file: {}", path.display())]
    NotAFile { path: PathBuf },

    #[error("failed to read {}: {source}", path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("{} has no `{column}` column", path.display())]
    MissingColumn { path: PathBuf, column: &'static str },

    #[error("row {row}: invalid timestamp {value:?}")]
    InvalidTimestamp { row: usize, value: String },

    #[error("row {row}: invalid {column} value {value:?}")]
    InvalidNumber {
        row: usize,
        column: &'static str,
        value: String,
    },

    #[error("{} contains no records", path.display())]
    Empty { path: PathBuf },
}
