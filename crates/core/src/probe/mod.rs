//! Probing torrent files through an external scraping tool.
//!
//! This module provides the `Prober` trait, a `transmission-show` backed
//! implementation, and the parsers that turn the tool's human-oriented
//! output into counts and sizes.
//!
//! Every failure is reported as a [`ProbeWarning`] token rather than an
//! error that aborts the run, so a record can always be produced.
//!
//! # Example
//!
//! ```ignore
//! use swarmdb_core::probe::{ProbeConfig, ProbeMode, Prober, TransmissionShow, parse_scrape_output};
//!
//! let prober = TransmissionShow::new(ProbeConfig::default());
//! let stdout = prober.run(ProbeMode::Scrape, Path::new("item_archive.torrent")).await?;
//! let counts = parse_scrape_output(&stdout);
//! println!("{} seeders", counts.value.seeders);
//! ```

mod config;
mod error;
mod parse;
mod traits;
mod transmission;
mod types;

pub use config::ProbeConfig;
pub use error::ProbeError;
pub use parse::{parse_scrape_output, parse_size_output};
pub use traits::Prober;
pub use transmission::TransmissionShow;
pub use types::{ProbeMode, ProbeWarning, Probed, SwarmCounts};
