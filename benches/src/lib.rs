//! Benchmark utilities for candela.

use candela_lib::Candle;

/// One minute in milliseconds.
pub const MINUTE_MILLIS: i64 = 60_000;

/// Generates `count` one-minute candles walking backward from `newest`, the
/// order exchange pages arrive in.
///
/// Closes follow a deterministic saw-tooth so results are reproducible.
#[must_use]
pub fn synthetic_candles(count: usize, newest: i64) -> Vec<Candle> {
    (0..count)
        .map(|i| {
            let step = i as i64;
            let close = 42_000.0 + (i % 97) as f64 * 1.25;
            Candle::new(
                newest - step * MINUTE_MILLIS,
                close - 2.0,
                close + 5.0,
                close - 5.0,
                close,
                10.0 + (i % 13) as f64,
                close * 10.0,
            )
        })
        .collect()
}

/// Same candles, oldest first.
#[must_use]
pub fn synthetic_candles_ascending(count: usize, newest: i64) -> Vec<Candle> {
    let mut candles = synthetic_candles(count, newest);
    candles.reverse();
    candles
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_synthetic_candles_descend() {
        let candles = synthetic_candles(3, 1_000_000);
        assert_eq!(candles.len(), 3);
        assert_eq!(candles[0].time, 1_000_000);
        assert_eq!(candles[2].time, 1_000_000 - 2 * MINUTE_MILLIS);
    }

    #[test]
    fn test_ascending_is_reversed() {
        let candles = synthetic_candles_ascending(3, 1_000_000);
        assert!(candles.windows(2).all(|w| w[0].time < w[1].time));
    }
}
