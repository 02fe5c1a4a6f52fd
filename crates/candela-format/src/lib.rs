//! JSON reading and writing of candela candle files.
//!
//! - [`JsonFormatter`] - JSON array or NDJSON
//! - [`read_candles_file`] / [`write_candles_file`] - Whole-file helpers

#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod file;
mod formatter;
mod json;

pub use file::{read_candles_file, write_candles_file};
pub use formatter::{FormatError, Formatter, OutputFormat};
pub use json::{JsonFormatter, JsonStyle};
