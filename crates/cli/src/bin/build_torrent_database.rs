use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{error, info};

use swarmdb_cli::args::BuildArgs;
use swarmdb_cli::{init_logging, load_settings};
use swarmdb_core::{StatsBuilder, TransmissionShow};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    if let Err(e) = run().await {
        error!("Fatal error: {:#}", e);
        eprintln!("[ERROR] {:#}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let args = BuildArgs::parse();
    init_logging(if args.verbose {
        "info,swarmdb_core=debug"
    } else {
        "error"
    });

    let config = load_settings(args.config.as_deref())?;

    let torrent_file = match args.torrent_file {
        Some(path) => path.trim().to_string(),
        None => read_path_from_stdin().await?,
    };
    if torrent_file.is_empty() {
        return Ok(());
    }

    info!("Processing: {}", torrent_file);

    let prober = TransmissionShow::new(config.probe.clone());
    let builder = StatsBuilder::new(prober, config.probe.torrent_suffix.as_str());
    let record = builder.build(Path::new(&torrent_file)).await;

    println!("{}", record);
    Ok(())
}

/// Read a single path from standard input.
async fn read_path_from_stdin() -> Result<String> {
    let mut line = String::new();
    BufReader::new(tokio::io::stdin())
        .read_line(&mut line)
        .await
        .context("Failed to read torrent path from stdin")?;
    Ok(line.trim().to_string())
}
