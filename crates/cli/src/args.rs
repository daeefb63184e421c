//! Argument definitions for both binaries.

use std::path::PathBuf;

use clap::Parser;
use swarmdb_core::query::Projection;
use swarmdb_core::{parse_human_bytes, Bounds, QueryOptions, SortBy};

/// Build torrent statistics database lines using transmission-show.
#[derive(Parser, Debug)]
#[command(name = "build-torrent-database")]
#[command(about = "Probe one torrent file and print its swarm stats as a database line")]
pub struct BuildArgs {
    /// Verbose output to stderr
    #[arg(short, long)]
    pub verbose: bool,

    /// Configuration file (TOML)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Torrent file to process (default: read one path from stdin)
    #[arg(value_name = "TORRENT_FILE")]
    pub torrent_file: Option<String>,
}

/// Filter and sort torrents from the database by swarm stats and size.
#[derive(Parser, Debug)]
#[command(name = "db-list-filtered")]
#[command(about = "Filter and sort torrents from database file by swarm stats and size")]
pub struct ListArgs {
    /// Database file to read from (default: files/torrent-stats.db)
    #[arg(short, long, value_name = "FILE")]
    pub database: Option<PathBuf>,

    /// Banned identifier file (default: files/banned-archiveorg-identifiers.txt)
    #[arg(long, value_name = "FILE")]
    pub banned: Option<PathBuf>,

    /// Configuration file (TOML)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[arg(long, conflicts_with = "max_leeches")]
    pub min_leeches: Option<u64>,

    #[arg(long)]
    pub max_leeches: Option<u64>,

    #[arg(long)]
    pub min_seeds: Option<u64>,

    #[arg(long)]
    pub max_seeds: Option<u64>,

    #[arg(long)]
    pub min_peers: Option<u64>,

    #[arg(long)]
    pub max_peers: Option<u64>,

    /// Minimum size, e.g. 10K, 5M, 1.5G
    #[arg(long, value_parser = parse_size_arg)]
    pub min_bytes: Option<u64>,

    /// Maximum size, e.g. 10K, 5M, 1.5G
    #[arg(long, value_parser = parse_size_arg)]
    pub max_bytes: Option<u64>,

    /// Maximum total bytes to accumulate across all selected items
    #[arg(long, value_parser = parse_size_arg)]
    pub max_total_bytes: Option<u64>,

    /// One of leeches, seeds, peers, bytes
    #[arg(long, default_value = "leeches")]
    pub sort_by: SortBy,

    #[arg(long)]
    pub max_count: Option<usize>,

    /// Print torrent download URLs instead of identifiers
    #[arg(long)]
    pub display_urls: bool,

    /// Exclude entries with errors (no_tracker_response, etc.)
    #[arg(long)]
    pub exclude_errors: bool,
}

fn parse_size_arg(s: &str) -> Result<u64, String> {
    parse_human_bytes(s).map_err(|e| e.to_string())
}

impl ListArgs {
    pub fn query_options(&self) -> QueryOptions {
        QueryOptions {
            seeders: Bounds::new(self.min_seeds, self.max_seeds),
            leechers: Bounds::new(self.min_leeches, self.max_leeches),
            peers: Bounds::new(self.min_peers, self.max_peers),
            bytes: Bounds::new(self.min_bytes, self.max_bytes),
            max_total_bytes: self.max_total_bytes,
            sort_by: self.sort_by,
            max_count: self.max_count,
            exclude_errors: self.exclude_errors,
        }
    }

    pub fn projection(&self) -> Projection {
        if self.display_urls {
            Projection::Urls
        } else {
            Projection::Names
        }
    }
}
