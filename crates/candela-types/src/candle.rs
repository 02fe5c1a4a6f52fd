//! Candle (OHLCV) record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single OHLCV observation for a fixed time interval.
///
/// Field names match the persisted JSON layout of `data.json`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Candle {
    /// Interval open time in epoch milliseconds.
    pub time: i64,
    /// Opening price.
    pub open: f64,
    /// Highest price during the interval.
    pub high: f64,
    /// Lowest price during the interval.
    pub low: f64,
    /// Closing price.
    pub close: f64,
    /// Traded volume in the base currency.
    pub volume_base: f64,
    /// Traded volume in the quote currency.
    pub volume_quote: f64,
}

impl Candle {
    /// Creates a new candle.
    #[must_use]
    pub const fn new(
        time: i64,
        open: f64,
        high: f64,
        low: f64,
        close: f64,
        volume_base: f64,
        volume_quote: f64,
    ) -> Self {
        Self {
            time,
            open,
            high,
            low,
            close,
            volume_base,
            volume_quote,
        }
    }

    /// Returns a copy of this candle with `close` replaced.
    #[must_use]
    pub const fn with_close(mut self, close: f64) -> Self {
        self.close = close;
        self
    }

    /// Returns the open time as a UTC datetime, if it is in range.
    #[must_use]
    pub fn timestamp(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.time)
    }

    /// Returns the price range (high - low).
    #[must_use]
    pub fn range(&self) -> f64 {
        self.high - self.low
    }

    /// Returns the body size (|close - open|).
    #[must_use]
    pub fn body(&self) -> f64 {
        (self.close - self.open).abs()
    }

    /// Returns true if this is a bullish (green) candle.
    #[must_use]
    pub fn is_bullish(&self) -> bool {
        self.close > self.open
    }

    /// Returns true if this is a bearish (red) candle.
    #[must_use]
    pub fn is_bearish(&self) -> bool {
        self.close < self.open
    }

    /// Returns the typical price ((high + low + close) / 3).
    #[must_use]
    pub fn typical_price(&self) -> f64 {
        (self.high + self.low + self.close) / 3.0
    }
}
