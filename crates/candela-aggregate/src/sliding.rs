//! Time-based sliding average.

use candela_types::Candle;
use serde::{Deserialize, Serialize};

/// Mean close over a trailing time window, anchored at one candle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AveragePoint {
    /// Time of the anchoring candle (epoch milliseconds).
    pub time: i64,
    /// Mean close of the candles inside the window.
    pub close: f64,
    /// Number of candles inside the window.
    pub samples: usize,
}

/// Computes a trailing mean of `close` over `window_millis`.
///
/// Candles are visited in the given order; after each one, every retained
/// candle with `time < current.time - window_millis` is dropped. A point is
/// emitted only when at least two candles remain in the window. Feed
/// oldest-first data to get a conventional moving average; exchange pages
/// arrive newest-first.
#[must_use]
pub fn sliding_average(candles: &[Candle], window_millis: i64) -> Vec<AveragePoint> {
    let mut retained: Vec<&Candle> = Vec::new();
    let mut points = Vec::new();

    for candle in candles {
        retained.push(candle);
        let horizon = candle.time - window_millis;
        retained.retain(|c| c.time >= horizon);

        if retained.len() > 1 {
            let sum: f64 = retained.iter().map(|c| c.close).sum();
            points.push(AveragePoint {
                time: candle.time,
                close: sum / retained.len() as f64,
                samples: retained.len(),
            });
        }
    }

    points
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const SECOND: i64 = 1_000;

    fn at(time: i64, close: f64) -> Candle {
        Candle::new(time, 0.0, 0.0, 0.0, close, 0.0, 0.0)
    }

    #[test]
    fn test_single_candle_emits_nothing() {
        assert!(sliding_average(&[at(0, 1.0)], SECOND).is_empty());
    }

    #[test]
    fn test_emits_average_of_two() {
        let points = sliding_average(&[at(0, 1.0), at(SECOND, 2.0)], SECOND);
        assert_eq!(points.len(), 1);
        assert_eq!(points[0].time, SECOND);
        assert_eq!(points[0].samples, 2);
        assert_relative_eq!(points[0].close, 1.5);
    }

    #[test]
    fn test_old_candles_leave_the_window() {
        let candles = [at(0, 1.0), at(SECOND, 2.0), at(2 * SECOND, 3.0)];
        let points = sliding_average(&candles, SECOND);

        assert_eq!(points.len(), 2);
        assert_relative_eq!(points[0].close, 1.5);
        assert_relative_eq!(points[1].close, 2.5);
        assert_eq!(points[1].samples, 2);
    }

    #[test]
    fn test_gap_resets_window() {
        let candles = [at(0, 1.0), at(SECOND, 3.0), at(10 * SECOND, 5.0)];
        let points = sliding_average(&candles, SECOND);
        assert_eq!(points.len(), 1);
    }
}
