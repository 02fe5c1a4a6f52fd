//! Windowed close-price averaging for candela candle data.
//!
//! - [`WindowAverager`] - Fixed-size window averaging of `close`
//! - [`sliding_average`] - Time-based sliding mean of `close`

#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod sliding;
mod window;

pub use sliding::{AveragePoint, sliding_average};
pub use window::{AggregateError, DEFAULT_WINDOW, Divisor, WindowAverager, average_windows};
