//! Fetch command implementation.
//!
//! Walks the OKX history-candles endpoint backward from now and writes every
//! candle received to a JSON file.

use anyhow::{Context, Result};
use candela_lib::prelude::*;
use futures::StreamExt;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;
use tracing::info;

/// Fetch history candles with credentials from the environment and write
/// them to `output`.
pub(crate) async fn fetch(output: &Path, quiet: bool) -> Result<()> {
    let credentials = Credentials::from_env().context("Missing OKX credentials")?;
    let client = OkxClient::new(ClientConfig::from_env(), credentials)
        .context("Failed to create HTTP client")?;

    run(
        &client,
        &FetchConfig::default(),
        start_cursor(&SystemClock),
        output,
        quiet,
    )
    .await
}

/// Pages through `source` from `start` and writes the candles to `output`.
///
/// The file is only written once every page has been fetched.
pub(crate) async fn run(
    source: &impl CandleSource,
    config: &FetchConfig,
    start: Cursor,
    output: &Path,
    quiet: bool,
) -> Result<()> {
    let progress = if quiet {
        ProgressBar::hidden()
    } else {
        let pb = ProgressBar::new(u64::from(config.pages));
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} pages {msg}")
                .context("Invalid progress template")?
                .progress_chars("=>-"),
        );
        pb.set_message(config.instrument.to_string());
        pb
    };

    info!(instrument = %config.instrument, %start, pages = config.pages, "fetching history candles");

    let mut candles: Vec<Candle> = Vec::new();
    let mut pages = std::pin::pin!(page_stream(source, config, start));
    while let Some(page) = pages.next().await {
        let page = match page {
            Ok(page) => page,
            Err(e) => {
                progress.abandon_with_message("failed");
                return Err(e).context("Failed to fetch history candles");
            }
        };
        candles.extend(page.candles);
        progress.inc(1);
    }
    progress.finish_with_message(format!("Fetched {} candles", candles.len()));

    write_candles_file(output, &candles)
        .with_context(|| format!("Failed to write {}", output.display()))?;
    info!(path = %output.display(), count = candles.len(), "wrote candles");

    if !quiet {
        println!("Output written to: {}", output.display());
    }

    Ok(())
}
