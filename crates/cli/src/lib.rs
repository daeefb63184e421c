//! Command-line front ends for the stats database.
//!
//! `build-torrent-database` probes one torrent and prints one database line;
//! `db-list-filtered` queries the accumulated database.

pub mod args;

use std::path::Path;

use anyhow::{Context, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use swarmdb_core::{load_config, load_default_config, validate_config, Config};

/// Environment variable naming a config file.
pub const CONFIG_PATH_ENV: &str = "SWARMDB_CONFIG";

/// Install the log subscriber on stderr so stdout stays machine-parsable.
pub fn init_logging(default_filter: &str) {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Load configuration from an explicit path, `SWARMDB_CONFIG`, or defaults.
pub fn load_settings(explicit: Option<&Path>) -> Result<Config> {
    let from_env = std::env::var_os(CONFIG_PATH_ENV).map(std::path::PathBuf::from);
    let config = match explicit.map(Path::to_path_buf).or(from_env) {
        Some(path) => load_config(&path)
            .with_context(|| format!("Failed to load config from {:?}", path))?,
        None => load_default_config().context("Failed to load default config")?,
    };

    validate_config(&config).context("Configuration validation failed")?;
    Ok(config)
}
