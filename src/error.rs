//! Scan error taxonomy. Extraction misses are not errors and have no variant here.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScanError {
    /// Log source could not be opened at all; fatal to the run.
    #[error("unable to open log source {}: {source}", .path.display())]
    SourceUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// One line is not a valid access-log record; the line is skipped.
    #[error("error parsing log entry on line {line}: {source}")]
    RecordParse {
        line: usize,
        #[source]
        source: serde_json::Error,
    },

    /// Read failure after the source was opened.
    #[error("error reading log source: {0}")]
    SourceRead(#[source] std::io::Error),

    #[error("error writing report: {0}")]
    Report(#[source] std::io::Error),
}
