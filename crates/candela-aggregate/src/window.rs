//! Fixed-size window averaging.

use candela_types::{CandelaError, Candle};
use std::num::NonZeroUsize;
use thiserror::Error;

/// Number of candles per window.
pub const DEFAULT_WINDOW: usize = 5;

/// Errors that can occur while configuring aggregation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AggregateError {
    /// A window must contain at least one candle.
    #[error("Window size must be at least 1")]
    ZeroWindow,
}

impl From<AggregateError> for CandelaError {
    fn from(e: AggregateError) -> Self {
        Self::Aggregate(e.to_string())
    }
}

/// What the sum of a window's closes is divided by.
///
/// The two only differ for a trailing window shorter than the window size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Divisor {
    /// Always divide by the configured window size, so a short trailing
    /// window is scaled down.
    #[default]
    Nominal,
    /// Divide by the number of candles actually in the window.
    Actual,
}

/// Averages `close` over contiguous fixed-size windows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowAverager {
    window: NonZeroUsize,
    divisor: Divisor,
}

impl Default for WindowAverager {
    fn default() -> Self {
        Self {
            window: NonZeroUsize::new(DEFAULT_WINDOW).unwrap_or(NonZeroUsize::MIN),
            divisor: Divisor::Nominal,
        }
    }
}

impl WindowAverager {
    /// Creates an averager with the given window size and nominal division.
    ///
    /// # Errors
    ///
    /// Returns an error if `window` is zero.
    pub fn new(window: usize) -> Result<Self, AggregateError> {
        let window = NonZeroUsize::new(window).ok_or(AggregateError::ZeroWindow)?;
        Ok(Self {
            window,
            divisor: Divisor::Nominal,
        })
    }

    /// Sets the divisor policy.
    #[must_use]
    pub const fn with_divisor(mut self, divisor: Divisor) -> Self {
        self.divisor = divisor;
        self
    }

    /// Returns the window size.
    #[must_use]
    pub const fn window(&self) -> usize {
        self.window.get()
    }

    /// Returns the divisor policy.
    #[must_use]
    pub const fn divisor(&self) -> Divisor {
        self.divisor
    }

    /// Averages `candles` window by window.
    ///
    /// Windows start at index 0; the last one may be short. Each output is the
    /// last candle of its window with `close` replaced by the window mean, so
    /// the output has `ceil(len / window)` records.
    #[must_use]
    pub fn average(&self, candles: &[Candle]) -> Vec<Candle> {
        candles
            .chunks(self.window.get())
            .filter_map(|window| self.average_window(window))
            .collect()
    }

    fn average_window(&self, window: &[Candle]) -> Option<Candle> {
        let last = window.last()?;
        let sum: f64 = window.iter().map(|c| c.close).sum();
        let count = match self.divisor {
            Divisor::Nominal => self.window.get(),
            Divisor::Actual => window.len(),
        };
        Some(last.with_close(sum / count as f64))
    }
}

/// Averages `candles` over windows of `window` with nominal division.
///
/// # Errors
///
/// Returns an error if `window` is zero.
pub fn average_windows(candles: &[Candle], window: usize) -> Result<Vec<Candle>, AggregateError> {
    Ok(WindowAverager::new(window)?.average(candles))
}
