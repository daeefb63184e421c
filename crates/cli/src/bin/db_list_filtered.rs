use anyhow::{Context, Result};
use clap::Parser;
use tokio::io::{AsyncWriteExt, BufWriter};
use tracing::{debug, error};

use swarmdb_cli::args::ListArgs;
use swarmdb_cli::{init_logging, load_settings};
use swarmdb_core::{render_line, select, BannedSet, Database, QueryError};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    if let Err(e) = run().await {
        error!("Fatal error: {:#}", e);
        // Independent of RUST_LOG.
        eprintln!("[ERROR] {:#}", e);
        if let Some(QueryError::DatabaseNotFound { path }) = e.downcast_ref::<QueryError>() {
            eprintln!(
                "Create it first by appending build-torrent-database output to {}",
                path.display()
            );
        }
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let args = ListArgs::parse();
    init_logging("warn");

    let config = load_settings(args.config.as_deref())?;
    let database_path = args
        .database
        .clone()
        .unwrap_or_else(|| config.query.database_path.clone());
    let banned_path = args
        .banned
        .clone()
        .unwrap_or_else(|| config.query.banned_path.clone());

    let banned = BannedSet::load(&banned_path).await?;
    let database = Database::load(&database_path).await?;

    let options = args.query_options();
    debug!("Query options: {:?}", options);

    let selected = select(database.records(), &banned, &options);

    let projection = args.projection();
    let mut out = BufWriter::new(tokio::io::stdout());
    for record in &selected {
        let line = render_line(record, projection, &config.query.download_base_url);
        out.write_all(line.as_bytes()).await?;
        out.write_all(b"\n").await?;
    }
    out.flush().await.context("Failed to write results")?;

    Ok(())
}
