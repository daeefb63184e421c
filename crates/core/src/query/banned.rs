use std::collections::HashSet;
use std::path::Path;
use tracing::debug;

use super::error::QueryError;

/// Identifiers excluded from every query result.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BannedSet {
    identifiers: HashSet<String>,
}

impl BannedSet {
    /// Parse one identifier per line, skipping blanks and `#` comments.
    pub fn parse(contents: &str) -> Self {
        let identifiers = contents
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .map(str::to_string)
            .collect();
        Self { identifiers }
    }

    /// Load the banned file. A missing file is an empty set.
    pub async fn load(path: &Path) -> Result<Self, QueryError> {
        match tokio::fs::read_to_string(path).await {
            Ok(contents) => {
                let banned = Self::parse(&contents);
                debug!("Loaded {} banned identifiers from {:?}", banned.len(), path);
                Ok(banned)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!("No banned identifier file at {:?}", path);
                Ok(Self::default())
            }
            Err(source) => Err(QueryError::BannedReadFailed {
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    pub fn contains(&self, identifier: &str) -> bool {
        self.identifiers.contains(identifier)
    }

    pub fn len(&self) -> usize {
        self.identifiers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.identifiers.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for BannedSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            identifiers: iter.into_iter().map(Into::into).collect(),
        }
    }
}
