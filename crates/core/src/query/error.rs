//! Error types for the query module.

use std::path::PathBuf;
use thiserror::Error;

/// Fatal errors for a query run. Bad lines are never errors.
#[derive(Debug, Error)]
pub enum QueryError {
    /// The database file does not exist.
    #[error("Database file '{}' not found", path.display())]
    DatabaseNotFound { path: PathBuf },

    /// The database file exists but could not be read.
    #[error("Failed to read database '{}': {source}", path.display())]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The banned-identifier file exists but could not be read.
    #[error("Failed to read banned identifiers '{}': {source}", path.display())]
    BannedReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
