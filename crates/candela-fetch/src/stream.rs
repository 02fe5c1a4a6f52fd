//! Backward pagination over historical candles.

use async_trait::async_trait;
use candela_types::{Candle, Cursor, InstrumentId, Result};
use futures::stream::{self, Stream, StreamExt};
use tracing::{debug, info, warn};

use crate::FetchError;
use crate::clock::Clock;
use crate::parse::{RawRow, parse_rows};

/// Number of pages fetched per run.
pub const DEFAULT_PAGES: u32 = 1;

/// A source of candle pages, addressed by cursor.
#[async_trait]
pub trait CandleSource: Send + Sync {
    /// Fetches the page of tuples strictly older than `after`.
    async fn fetch_page(
        &self,
        instrument: &InstrumentId,
        after: Cursor,
    ) -> std::result::Result<Vec<RawRow>, FetchError>;
}

/// What to fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchConfig {
    /// Instrument to request.
    pub instrument: InstrumentId,
    /// Number of pages to request.
    pub pages: u32,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            instrument: InstrumentId::default(),
            pages: DEFAULT_PAGES,
        }
    }
}

/// A decoded page of candles.
#[derive(Debug, Clone, PartialEq)]
pub struct CandlePage {
    /// Cursor the page was requested with.
    pub cursor: Cursor,
    /// Candles in exchange order.
    pub candles: Vec<Candle>,
}

impl CandlePage {
    /// Returns the cursor for the next (older) page: the time of the last
    /// candle on this page.
    #[must_use]
    pub fn next_cursor(&self) -> Option<Cursor> {
        self.candles.last().map(|c| Cursor::from_millis(c.time))
    }

    /// Returns true if the page is empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.candles.is_empty()
    }

    /// Returns the number of candles on the page.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.candles.len()
    }
}

/// Returns the starting cursor: the clock's current time in whole seconds,
/// expressed in milliseconds.
#[must_use]
pub fn start_cursor(clock: &impl Clock) -> Cursor {
    Cursor::from_datetime(clock.now())
}

/// Creates a stream of pages walking backward from `start`.
///
/// Pages are requested strictly sequentially since each cursor depends on the
/// previous page. The stream ends after `config.pages` pages, at the first
/// empty page, or after yielding the first error.
pub fn page_stream<'a, S>(
    source: &'a S,
    config: &'a FetchConfig,
    start: Cursor,
) -> impl Stream<Item = Result<CandlePage>> + 'a
where
    S: CandleSource + ?Sized,
{
    stream::unfold(Some((start, 0u32)), move |state| async move {
        let Some((cursor, fetched)) = state else {
            return None;
        };
        if fetched >= config.pages {
            return None;
        }

        match next_page(source, config, cursor, fetched).await {
            Ok(Some(page)) => {
                let next = page.next_cursor().map(|c| (c, fetched + 1));
                Some((Ok(page), next))
            }
            Ok(None) => None,
            Err(e) => Some((Err(e), None)),
        }
    })
}

async fn next_page<S>(
    source: &S,
    config: &FetchConfig,
    cursor: Cursor,
    fetched: u32,
) -> Result<Option<CandlePage>>
where
    S: CandleSource + ?Sized,
{
    let rows = source.fetch_page(&config.instrument, cursor).await?;
    if rows.is_empty() {
        warn!(%cursor, page = fetched + 1, "empty page, stopping pagination");
        return Ok(None);
    }

    let candles = parse_rows(&rows)?;
    for candle in &candles {
        debug!(?candle, "decoded candle");
    }
    info!(
        %cursor,
        page = fetched + 1,
        of = config.pages,
        candles = candles.len(),
        "fetched page"
    );

    Ok(Some(CandlePage { cursor, candles }))
}

/// Fetches `config.pages` pages starting at `start` and returns every candle
/// in the order received.
///
/// # Errors
///
/// Returns the first request or decoding error; candles from earlier pages
/// are discarded.
pub async fn fetch_history<S>(
    source: &S,
    config: &FetchConfig,
    start: Cursor,
) -> Result<Vec<Candle>>
where
    S: CandleSource + ?Sized,
{
    let mut candles = Vec::new();
    let mut pages = std::pin::pin!(page_stream(source, config, start));
    while let Some(page) = pages.next().await {
        candles.extend(page?.candles);
    }
    Ok(candles)
}
