use serde::{Deserialize, Serialize};
use std::fmt;

/// Swarm health of a single archive.org item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatRecord {
    /// Item identifier (torrent file name minus its suffix).
    pub identifier: String,
    /// Peers holding a complete copy.
    pub seeders: u64,
    /// Peers still downloading.
    pub leechers: u64,
    /// Total payload size in bytes.
    pub bytes: u64,
    /// Partial-failure tokens collected while probing, in encounter order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<String>,
}

impl StatRecord {
    /// A zero-valued record with no errors.
    pub fn empty(identifier: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            seeders: 0,
            leechers: 0,
            bytes: 0,
            errors: Vec::new(),
        }
    }

    /// Seeders plus leechers. Always derived, never persisted.
    pub fn peers(&self) -> u64 {
        self.seeders.saturating_add(self.leechers)
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Error tokens joined the way they appear on a database line.
    pub fn error_text(&self) -> String {
        self.errors.join(" ")
    }
}

impl fmt::Display for StatRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} # {} seeders, {} leechers, {} bytes",
            self.identifier, self.seeders, self.leechers, self.bytes
        )?;
        if self.has_errors() {
            write!(f, " # {}", self.error_text())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_peers_is_derived() {
        let mut record = StatRecord::empty("item");
        record.seeders = 5;
        record.leechers = 2;
        assert_eq!(record.peers(), 7);

        record.leechers = 10;
        assert_eq!(record.peers(), 15);
    }

    #[test]
    fn test_peers_saturates() {
        let record = StatRecord {
            seeders: u64::MAX,
            leechers: 1,
            ..StatRecord::empty("big")
        };
        assert_eq!(record.peers(), u64::MAX);
    }

    #[test]
    fn test_display_without_errors() {
        let record = StatRecord {
            identifier: "a".to_string(),
            seeders: 5,
            leechers: 2,
            bytes: 1024,
            errors: vec![],
        };
        assert_eq!(record.to_string(), "a # 5 seeders, 2 leechers, 1024 bytes");
    }

    #[test]
    fn test_display_with_errors() {
        let mut record = StatRecord::empty("missing");
        record.errors.push("file_not_found".to_string());
        assert_eq!(
            record.to_string(),
            "missing # 0 seeders, 0 leechers, 0 bytes # file_not_found"
        );

        record.errors.push("no_size_found".to_string());
        assert!(record
            .to_string()
            .ends_with("# file_not_found no_size_found"));
    }

    #[test]
    fn test_serialization_omits_empty_errors() {
        let record = StatRecord::empty("x");
        let json = serde_json::to_string(&record).unwrap();
        assert!(!json.contains("errors"));
        let parsed: StatRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, record);
    }
}
