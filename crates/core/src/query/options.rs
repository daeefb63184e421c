use std::fmt;
use std::str::FromStr;

use crate::record::StatRecord;

/// Inclusive lower and upper limits; either may be absent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Bounds {
    pub min: Option<u64>,
    pub max: Option<u64>,
}

impl Bounds {
    pub fn new(min: Option<u64>, max: Option<u64>) -> Self {
        Self { min, max }
    }

    pub fn admits(&self, value: u64) -> bool {
        self.min.is_none_or(|min| value >= min) && self.max.is_none_or(|max| value <= max)
    }
}

/// Field used to order query results, always descending.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SortBy {
    #[default]
    Leeches,
    Seeds,
    Peers,
    Bytes,
}

impl SortBy {
    pub const ALL: [SortBy; 4] = [SortBy::Leeches, SortBy::Seeds, SortBy::Peers, SortBy::Bytes];

    /// The numeric value this ordering sorts by.
    pub fn key(self, record: &StatRecord) -> u64 {
        match self {
            Self::Leeches => record.leechers,
            Self::Seeds => record.seeders,
            Self::Peers => record.peers(),
            Self::Bytes => record.bytes,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Leeches => "leeches",
            Self::Seeds => "seeds",
            Self::Peers => "peers",
            Self::Bytes => "bytes",
        }
    }
}

impl fmt::Display for SortBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortBy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|sort| sort.as_str() == s)
            .ok_or_else(|| format!("unknown sort field '{}'", s))
    }
}

/// Filters and limits for one query run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryOptions {
    pub seeders: Bounds,
    pub leechers: Bounds,
    pub peers: Bounds,
    pub bytes: Bounds,
    /// Cap on the summed size of admitted records.
    pub max_total_bytes: Option<u64>,
    pub sort_by: SortBy,
    pub max_count: Option<usize>,
    /// Drop records that carry any error token.
    pub exclude_errors: bool,
}

impl QueryOptions {
    /// Whether every configured bound admits the record.
    pub fn bounds_admit(&self, record: &StatRecord) -> bool {
        self.seeders.admits(record.seeders)
            && self.leechers.admits(record.leechers)
            && self.peers.admits(record.peers())
            && self.bytes.admits(record.bytes)
    }
}
