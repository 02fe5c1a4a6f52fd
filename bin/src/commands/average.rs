//! Average command implementation.

use anyhow::{Context, Result};
use candela_lib::prelude::*;
use std::path::Path;
use tracing::info;

/// Average `close` over 5-candle windows of `input` and write the result to
/// `output`.
pub(crate) fn average(input: &Path, output: &Path, quiet: bool) -> Result<()> {
    let candles = read_candles_file(input)
        .with_context(|| format!("Failed to read {}", input.display()))?;

    let averager = WindowAverager::default();
    let averaged = averager.average(&candles);
    info!(
        input = candles.len(),
        output = averaged.len(),
        window = averager.window(),
        "averaged candles"
    );

    write_candles_file(output, &averaged)
        .with_context(|| format!("Failed to write {}", output.display()))?;

    if !quiet {
        println!("Output written to: {}", output.display());
    }

    Ok(())
}
