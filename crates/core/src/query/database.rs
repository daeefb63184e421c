use std::path::Path;
use tracing::{debug, trace};

use super::error::QueryError;
use crate::record::{parse_record_line, StatRecord};

/// The stats database, held fully in memory.
#[derive(Debug, Clone, Default)]
pub struct Database {
    contents: String,
}

impl Database {
    pub fn from_contents(contents: impl Into<String>) -> Self {
        Self {
            contents: contents.into(),
        }
    }

    /// Read the whole database file.
    pub async fn load(path: &Path) -> Result<Self, QueryError> {
        let contents = tokio::fs::read_to_string(path).await.map_err(|source| {
            if source.kind() == std::io::ErrorKind::NotFound {
                QueryError::DatabaseNotFound {
                    path: path.to_path_buf(),
                }
            } else {
                QueryError::ReadFailed {
                    path: path.to_path_buf(),
                    source,
                }
            }
        })?;

        debug!("Loaded database {:?} ({} bytes)", path, contents.len());
        Ok(Self { contents })
    }

    /// Records in file order. Lines that do not parse are skipped.
    pub fn records(&self) -> impl Iterator<Item = StatRecord> + '_ {
        self.contents
            .lines()
            .enumerate()
            .filter_map(|(index, line)| {
                let record = parse_record_line(line);
                if record.is_none() {
                    trace!("Skipping database line {}", index + 1);
                }
                record
            })
    }
}
