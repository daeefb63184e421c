//! Configuration for the probing tool.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::types::ProbeMode;

/// Configuration for the `transmission-show` prober.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProbeConfig {
    /// Path to the probing tool.
    #[serde(default = "default_tool_path")]
    pub tool_path: PathBuf,

    /// Timeout for a single invocation in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Flag selecting tracker scrape mode.
    #[serde(default = "default_scrape_flag")]
    pub scrape_flag: String,

    /// Flag selecting size mode.
    #[serde(default = "default_size_flag")]
    pub size_flag: String,

    /// Suffix stripped from torrent file names to get the identifier.
    #[serde(default = "default_torrent_suffix")]
    pub torrent_suffix: String,
}

fn default_tool_path() -> PathBuf {
    PathBuf::from("transmission-show")
}

fn default_timeout() -> u64 {
    30
}

fn default_scrape_flag() -> String {
    "-s".to_string()
}

fn default_size_flag() -> String {
    "-b".to_string()
}

fn default_torrent_suffix() -> String {
    "_archive.torrent".to_string()
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            tool_path: default_tool_path(),
            timeout_secs: default_timeout(),
            scrape_flag: default_scrape_flag(),
            size_flag: default_size_flag(),
            torrent_suffix: default_torrent_suffix(),
        }
    }
}

impl ProbeConfig {
    /// Creates a config pointing at a different tool binary.
    pub fn with_tool_path(tool_path: PathBuf) -> Self {
        Self {
            tool_path,
            ..Default::default()
        }
    }

    /// Sets the timeout in seconds.
    pub fn with_timeout(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }

    /// The command-line flag for a mode.
    pub fn flag(&self, mode: ProbeMode) -> &str {
        match mode {
            ProbeMode::Scrape => &self.scrape_flag,
            ProbeMode::Size => &self.size_flag,
        }
    }
}
