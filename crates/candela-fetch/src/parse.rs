//! Decoding of `history-candles` responses.

use candela_types::{CandelaError, Candle};
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::str::FromStr;
use thiserror::Error;

/// One positional candle tuple as returned by the exchange.
///
/// Elements are `[time, open, high, low, close, volume_base, volume_quote, ...]`
/// and may be JSON strings or JSON numbers.
pub type RawRow = Vec<Value>;

/// Number of leading tuple elements that make up a candle.
pub const ROW_FIELDS: usize = 7;

const FIELD_NAMES: [&str; ROW_FIELDS] = [
    "time",
    "open",
    "high",
    "low",
    "close",
    "volume_base",
    "volume_quote",
];

/// Errors that can occur while decoding candle tuples.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The tuple has fewer than [`ROW_FIELDS`] elements.
    #[error("Row {row} has {len} fields (expected at least {ROW_FIELDS})")]
    TooShort {
        /// Index of the row within its page.
        row: usize,
        /// Number of elements found.
        len: usize,
    },

    /// A tuple element is not a number or a numeric string.
    #[error("Row {row}: field `{field}` is not numeric: {value}")]
    InvalidNumber {
        /// Index of the row within its page.
        row: usize,
        /// Name of the offending field.
        field: &'static str,
        /// The raw JSON value.
        value: String,
    },
}

impl From<ParseError> for CandelaError {
    fn from(e: ParseError) -> Self {
        Self::Parse(e.to_string())
    }
}

/// Decodes a single tuple into a [`Candle`].
///
/// Elements beyond the seventh are ignored.
///
/// # Errors
///
/// Returns an error if the tuple is too short or an element is not numeric.
pub fn parse_row(row_index: usize, row: &[Value]) -> Result<Candle, ParseError> {
    if row.len() < ROW_FIELDS {
        return Err(ParseError::TooShort {
            row: row_index,
            len: row.len(),
        });
    }

    let float = |i: usize| -> Result<f64, ParseError> {
        let parsed = match &row[i] {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.trim().parse::<f64>().ok(),
            _ => None,
        };
        // NaN and infinities have no JSON encoding and would not read back.
        parsed
            .filter(|v| v.is_finite())
            .ok_or_else(|| invalid(row_index, i, &row[i]))
    };

    Ok(Candle {
        time: integer(row_index, row)?,
        open: float(1)?,
        high: float(2)?,
        low: float(3)?,
        close: float(4)?,
        volume_base: float(5)?,
        volume_quote: float(6)?,
    })
}

/// Decodes every tuple of a page, in order.
///
/// # Errors
///
/// Returns the first decoding error encountered.
pub fn parse_rows(rows: &[RawRow]) -> Result<Vec<Candle>, ParseError> {
    rows.iter()
        .enumerate()
        .map(|(i, row)| parse_row(i, row))
        .collect()
}

fn integer(row_index: usize, row: &[Value]) -> Result<i64, ParseError> {
    let value = &row[0];
    let parsed = match value {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => i64::from_str(s.trim()).ok(),
        _ => None,
    };
    parsed.ok_or_else(|| invalid(row_index, 0, value))
}

fn invalid(row: usize, index: usize, value: &Value) -> ParseError {
    ParseError::InvalidNumber {
        row,
        field: FIELD_NAMES[index],
        value: value.to_string(),
    }
}

/// Response envelope of the OKX v5 REST API.
#[derive(Debug, Deserialize)]
pub(crate) struct ApiResponse {
    #[serde(default, deserialize_with = "string_or_number")]
    pub(crate) code: String,
    #[serde(default)]
    pub(crate) msg: String,
    #[serde(default)]
    pub(crate) data: Vec<RawRow>,
}

impl ApiResponse {
    /// Returns true when the envelope reports success.
    ///
    /// A missing `code` is treated as success.
    pub(crate) fn is_success(&self) -> bool {
        self.code.is_empty() || self.code == "0"
    }
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => s,
        Value::Null => String::new(),
        other => other.to_string(),
    })
}
