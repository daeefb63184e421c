use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::probe::ProbeConfig;
use crate::query::DEFAULT_DOWNLOAD_BASE;

/// Root configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub probe: ProbeConfig,
    #[serde(default)]
    pub query: QueryConfig,
}

/// Query engine configuration
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct QueryConfig {
    /// Stats database read by the query engine
    #[serde(default = "default_database_path")]
    pub database_path: PathBuf,
    /// Identifiers never returned by a query
    #[serde(default = "default_banned_path")]
    pub banned_path: PathBuf,
    /// Root used when printing download URLs
    #[serde(default = "default_download_base_url")]
    pub download_base_url: String,
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            database_path: default_database_path(),
            banned_path: default_banned_path(),
            download_base_url: default_download_base_url(),
        }
    }
}

fn default_database_path() -> PathBuf {
    PathBuf::from("files/torrent-stats.db")
}

fn default_banned_path() -> PathBuf {
    PathBuf::from("files/banned-archiveorg-identifiers.txt")
}

fn default_download_base_url() -> String {
    DEFAULT_DOWNLOAD_BASE.to_string()
}
