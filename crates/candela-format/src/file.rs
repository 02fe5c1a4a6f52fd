//! Whole-file candle I/O.

use candela_types::Candle;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;
use tracing::debug;

use crate::{FormatError, Formatter, JsonFormatter, JsonStyle, OutputFormat};

fn formatter_for(path: &Path) -> JsonFormatter {
    let style = match OutputFormat::from_path(path) {
        OutputFormat::Json => JsonStyle::Array,
        OutputFormat::Ndjson => JsonStyle::Ndjson,
    };
    JsonFormatter::new().with_style(style)
}

/// Reads every candle stored at `path`.
///
/// `.ndjson` and `.jsonl` files are read line by line; anything else is
/// expected to hold a single JSON array.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or does not decode.
pub fn read_candles_file(path: &Path) -> Result<Vec<Candle>, FormatError> {
    let file = File::open(path)?;
    let candles = formatter_for(path).read_candles(BufReader::new(file))?;
    debug!(path = %path.display(), count = candles.len(), "Read candle file");
    Ok(candles)
}

/// Writes `candles` to `path`, replacing any existing file.
///
/// # Errors
///
/// Returns an error if the file cannot be created or written.
pub fn write_candles_file(path: &Path, candles: &[Candle]) -> Result<(), FormatError> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    formatter_for(path).write_candles(candles, &mut writer)?;
    writer.flush()?;
    debug!(path = %path.display(), count = candles.len(), "Wrote candle file");
    Ok(())
}
