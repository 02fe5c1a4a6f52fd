//! Fetch and average OKX historical candles.
//!
//! This is a facade crate that re-exports functionality from the candela
//! workspace crates.
//!
//! # Quick Start
//!
//! ```ignore
//! use candela_lib::prelude::*;
//! use futures::StreamExt;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = OkxClient::new(ClientConfig::from_env(), Credentials::from_env()?)?;
//!     let config = FetchConfig::default();
//!
//!     let mut pages = std::pin::pin!(page_stream(&client, &config, start_cursor(&SystemClock)));
//!     while let Some(page) = pages.next().await {
//!         println!("Fetched {} candles", page?.len());
//!     }
//!
//!     Ok(())
//! }
//! ```

#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub use candela_types::*;

#[cfg(feature = "fetch")]
pub use candela_fetch::{
    CandlePage, CandleSource, ClientConfig, Clock, ConfigError, Credentials, DEFAULT_PAGES,
    FetchConfig, FetchError, FixedClock, OkxClient, ParseError, SystemClock, fetch_history,
    page_stream, start_cursor,
};

#[cfg(feature = "aggregate")]
pub use candela_aggregate::{
    AggregateError, AveragePoint, DEFAULT_WINDOW, Divisor, WindowAverager, average_windows,
    sliding_average,
};

#[cfg(feature = "format")]
pub use candela_format::{
    FormatError, Formatter, JsonFormatter, JsonStyle, OutputFormat, read_candles_file,
    write_candles_file,
};

/// Prelude module for convenient imports.
///
/// ```
/// use candela_lib::prelude::*;
/// ```
pub mod prelude {
    pub use candela_types::{CandelaError, Candle, Cursor, InstrumentId, Result};

    #[cfg(feature = "fetch")]
    pub use candela_fetch::{
        CandleSource, ClientConfig, Credentials, FetchConfig, OkxClient, SystemClock,
        fetch_history, page_stream, start_cursor,
    };

    #[cfg(feature = "aggregate")]
    pub use candela_aggregate::{Divisor, WindowAverager, sliding_average};

    #[cfg(feature = "format")]
    pub use candela_format::{read_candles_file, write_candles_file};
}
