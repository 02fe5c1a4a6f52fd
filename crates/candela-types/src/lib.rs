//! Core types for the candela OKX candle toolkit.
//!
//! This crate provides the fundamental data structures used throughout candela:
//!
//! - [`Candle`] - A single OHLCV record as persisted to `data.json`
//! - [`Cursor`] - Pagination cursor (`after` query parameter)
//! - [`InstrumentId`] - Validated exchange instrument identifier
//! - [`CandelaError`] - Umbrella error type

#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod candle;
mod cursor;
mod error;
mod instrument;

pub use candle::Candle;
pub use cursor::Cursor;
pub use error::{CandelaError, Result};
pub use instrument::{InstrumentError, InstrumentId};
