use std::path::PathBuf;
use thiserror::Error;

/// Reasons a statement could not be turned into transactions.
///
/// Bad numeric fields never show up here; they are coerced to zero.
#[derive(Error, Debug)]
pub enum StatementError {
    #[error("Malformed statement: {reason}")]
    MalformedDocument { reason: String },

    #[error("Unparsable date {raw:?} in transaction {index} (expected DD-MM-YY)")]
    UnparsableDate { index: usize, raw: String },

    #[error("Cannot read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl StatementError {
    pub(crate) fn malformed(reason: impl Into<String>) -> Self {
        StatementError::MalformedDocument {
            reason: reason.into(),
        }
    }
}

pub type StatementResult<T> = Result<T, StatementError>;
