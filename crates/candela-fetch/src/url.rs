//! OKX endpoint construction.

use candela_types::{Cursor, InstrumentId};

/// Base URL of the OKX REST API.
pub const BASE_URL: &str = "https://www.okx.com";

/// Path of the historical candles endpoint.
pub const HISTORY_CANDLES_PATH: &str = "/api/v5/market/history-candles";

/// Builds the signed request path (path plus query) for a page of candles
/// older than `after`.
///
/// # Example
///
/// ```
/// use candela_fetch::url::history_candles_path;
/// use candela_types::{Cursor, InstrumentId};
///
/// let path = history_candles_path(&InstrumentId::default(), Cursor::from_millis(1705321845000));
/// assert_eq!(path, "/api/v5/market/history-candles?instId=BTC-USDT&after=1705321845000");
/// ```
#[must_use]
pub fn history_candles_path(instrument: &InstrumentId, after: Cursor) -> String {
    format!("{HISTORY_CANDLES_PATH}?instId={instrument}&after={after}")
}

/// Joins a base URL and a request path.
#[must_use]
pub fn full_url(base_url: &str, request_path: &str) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), request_path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_history_candles_path() {
        let instrument = InstrumentId::new("eth-usdt").unwrap();
        let path = history_candles_path(&instrument, Cursor::from_millis(1_597_026_383_085));
        assert_eq!(
            path,
            "/api/v5/market/history-candles?instId=ETH-USDT&after=1597026383085"
        );
    }

    #[test]
    fn test_full_url_strips_trailing_slash() {
        assert_eq!(
            full_url("https://www.okx.com/", "/api/v5/x?a=1"),
            "https://www.okx.com/api/v5/x?a=1"
        );
        assert_eq!(full_url(BASE_URL, "/p"), "https://www.okx.com/p");
    }
}
