use std::io;

use thiserror::Error;

/// Everything that can abort a run.  No variant is recoverable; the
/// binary prints the message and exits non-zero.
#[derive(Error, Debug)]
pub enum HistogramaError {
    #[error("cannot read input file {path}: {source}")]
    InputNotFound { path: String, source: io::Error },

    #[error("input is not a JSON array of activity records: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("record {index}: missing field `{field}`")]
    MissingField { index: usize, field: &'static str },

    #[error("record {index}: malformed timestamp {value:?}: {source}")]
    MalformedTimestamp {
        index: usize,
        value: String,
        source: jiff::Error,
    },

    #[error("timezone {name} not found in the tz database: {source}")]
    UnknownTimezone {
        name: &'static str,
        source: jiff::Error,
    },

    #[error("cannot write histogram to {path}: {reason}")]
    OutputWrite { path: String, reason: String },
}
