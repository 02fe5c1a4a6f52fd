//! Signed OKX REST client and candle pagination for candela.
//!
//! This crate provides the fetch pipeline:
//!
//! - [`Credentials`] - API key, secret and passphrase, validated at startup
//! - [`auth::sign`] - `HMAC-SHA256` request signature, base64-encoded
//! - [`url::history_candles_path`] - Builds the `history-candles` request path
//! - [`OkxClient`] - HTTP client attaching the `OK-ACCESS-*` headers
//! - [`page_stream`] / [`fetch_history`] - Backward pagination by cursor

#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod auth;
mod client;
mod clock;
mod parse;
mod stream;
pub mod url;

pub use auth::{ConfigError, Credentials};
pub use client::{ClientConfig, ENV_BASE_URL, FetchError, OkxClient};
pub use clock::{Clock, FixedClock, SystemClock};
pub use parse::{ParseError, ROW_FIELDS, RawRow, parse_row, parse_rows};
pub use stream::{
    CandlePage, CandleSource, DEFAULT_PAGES, FetchConfig, fetch_history, page_stream, start_cursor,
};
