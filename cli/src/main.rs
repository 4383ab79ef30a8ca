//! Entries CLI
//!
//! Loads an HTML page, runs the page-load refresh against the feed server
//! and writes the refreshed page out. Only the page-load path runs here;
//! `ENTRIES_TRIGGER` is ignored. Configuration comes from the
//! environment (`ENTRIES_*`, `.env` is honoured); `--base-url` overrides
//! `ENTRIES_BASE_URL`.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use entries_refresher::{
    Config, EntriesRefresher, HttpFeedSource, PageDocument, RefreshController,
};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "entries-cli", version, about = "Render the entries feed into a page")]
struct Args {
    /// HTML page containing the entries template and destination
    page: PathBuf,

    /// Feed server base URL
    #[arg(long)]
    base_url: Option<String>,

    /// Write the refreshed page here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr, stdout may carry the page
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,entries_refresher=debug".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let mut config = Config::from_env().context("Invalid ENTRIES_* configuration")?;
    if let Some(base_url) = args.base_url {
        config.base_url = base_url;
    }

    let markup = tokio::fs::read_to_string(&args.page)
        .await
        .with_context(|| format!("Failed to read page {}", args.page.display()))?;
    let page = Arc::new(PageDocument::new(markup));

    let feed = Arc::new(HttpFeedSource::from_config(&config).context("Failed to build HTTP client")?);
    let refresher = Arc::new(EntriesRefresher::new(feed, page.clone()));

    // Nothing clicks in a one-shot run, so no refresh control is bound.
    let controller = RefreshController::new(refresher, config.target());

    tracing::info!(base_url = %config.base_url, feed = %config.feed_path, "Refreshing entries");

    let handle = controller
        .document_ready()
        .context("Initial refresh already ran")?;
    let outcome = handle.await.context("Refresh task panicked")??;

    tracing::info!(
        refresh_id = %outcome.id,
        bytes = outcome.bytes_written,
        "Page refreshed at {}",
        outcome.completed_at
    );

    let refreshed = page.markup();
    match args.output {
        Some(path) => tokio::fs::write(&path, refreshed)
            .await
            .with_context(|| format!("Failed to write {}", path.display()))?,
        None => print!("{}", refreshed),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_page_and_flags() {
        let args = Args::try_parse_from([
            "entries-cli",
            "index.html",
            "--base-url",
            "http://reader.local",
            "-o",
            "out.html",
        ])
        .unwrap();

        assert_eq!(args.page, PathBuf::from("index.html"));
        assert_eq!(args.base_url.as_deref(), Some("http://reader.local"));
        assert_eq!(args.output, Some(PathBuf::from("out.html")));
    }

    #[test]
    fn page_is_required() {
        assert!(Args::try_parse_from(["entries-cli"]).is_err());
    }
}
