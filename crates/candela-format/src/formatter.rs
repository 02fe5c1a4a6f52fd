//! Format abstraction.

use candela_types::{CandelaError, Candle};
use std::io::{BufRead, Write};
use std::path::Path;
use thiserror::Error;

/// On-disk layout of a candle file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OutputFormat {
    /// A single JSON array.
    #[default]
    Json,
    /// One JSON object per line.
    Ndjson,
}

impl OutputFormat {
    /// Picks the format from a file extension, defaulting to JSON.
    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("ndjson") || ext.eq_ignore_ascii_case("jsonl") => {
                Self::Ndjson
            }
            _ => Self::Json,
        }
    }
}

/// Errors that can occur during reading or writing.
#[derive(Error, Debug)]
pub enum FormatError {
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<FormatError> for CandelaError {
    fn from(e: FormatError) -> Self {
        match e {
            FormatError::Io(e) => Self::Io(e),
            FormatError::Json(e) => Self::Json(e),
        }
    }
}

/// Trait for candle file formats.
pub trait Formatter: Send + Sync {
    /// Writes candles to the output.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    fn write_candles<W: Write>(&self, candles: &[Candle], writer: W) -> Result<(), FormatError>;

    /// Reads candles from the input.
    ///
    /// # Errors
    ///
    /// Returns an error if reading or decoding fails.
    fn read_candles<R: BufRead>(&self, reader: R) -> Result<Vec<Candle>, FormatError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_path() {
        assert_eq!(OutputFormat::from_path(Path::new("data.json")), OutputFormat::Json);
        assert_eq!(OutputFormat::from_path(Path::new("out.NDJSON")), OutputFormat::Ndjson);
        assert_eq!(OutputFormat::from_path(Path::new("data.jsonl")), OutputFormat::Ndjson);
        assert_eq!(OutputFormat::from_path(Path::new("noext")), OutputFormat::Json);
    }
}
