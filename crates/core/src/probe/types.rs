//! Types shared by probing and output parsing.

use std::fmt;

/// Which question the probe asks the tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProbeMode {
    /// Ask trackers for seeder/leecher counts.
    Scrape,
    /// Read the total payload size from the torrent.
    Size,
}

impl ProbeMode {
    /// Prefix used in warning tokens.
    pub fn prefix(self) -> &'static str {
        match self {
            Self::Scrape => "scrape",
            Self::Size => "size",
        }
    }
}

impl fmt::Display for ProbeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.prefix())
    }
}

/// A partial failure recorded on a stats record.
///
/// `Display` yields the exact token written to the database.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeWarning {
    /// The torrent path does not exist.
    FileNotFound,
    /// A tracker answered the scrape with "no match".
    NoTrackerResponse,
    /// A tracker reported an error for the scrape.
    TrackerError,
    /// Size output had no parsable `Total Size:` line.
    NoSizeFound,
    /// The tool did not finish within the timeout.
    Timeout(ProbeMode),
    /// The tool exited with a non-zero code.
    Exit { mode: ProbeMode, code: i32 },
    /// Trimmed error stream of a failed invocation.
    Stderr { mode: ProbeMode, text: String },
    /// The tool could not be run at all.
    Invocation { mode: ProbeMode, message: String },
}

impl fmt::Display for ProbeWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FileNotFound => f.write_str("file_not_found"),
            Self::NoTrackerResponse => f.write_str("no_tracker_response"),
            Self::TrackerError => f.write_str("tracker_error"),
            Self::NoSizeFound => f.write_str("no_size_found"),
            Self::Timeout(mode) => write!(f, "{}_timeout", mode),
            Self::Exit { mode, code } => write!(f, "{}_failed_rc{}", mode, code),
            Self::Stderr { mode, text } => write!(f, "{}_stderr:{}", mode, text),
            Self::Invocation { mode, message } => write!(f, "{}_error:{}", mode, message),
        }
    }
}

/// Swarm counts reported by trackers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SwarmCounts {
    pub seeders: u64,
    pub leechers: u64,
}

/// A best-effort value plus the warnings collected while producing it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Probed<T> {
    pub value: T,
    pub warnings: Vec<ProbeWarning>,
}

impl<T> Probed<T> {
    /// A value with no warnings.
    pub fn clean(value: T) -> Self {
        Self {
            value,
            warnings: Vec::new(),
        }
    }

    /// Append a warning, keeping the value.
    pub fn warn(mut self, warning: ProbeWarning) -> Self {
        self.warnings.push(warning);
        self
    }

    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty()
    }
}

impl<T: Default> Probed<T> {
    /// A default value carrying the given warnings.
    pub fn failed(warnings: Vec<ProbeWarning>) -> Self {
        Self {
            value: T::default(),
            warnings,
        }
    }
}
