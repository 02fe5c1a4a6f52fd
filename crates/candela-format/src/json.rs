//! JSON candle format.

use candela_types::Candle;
use std::io::{BufRead, Write};

use crate::{FormatError, Formatter};

/// JSON layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonStyle {
    /// JSON array (standard JSON).
    #[default]
    Array,
    /// Newline-delimited JSON (NDJSON/JSONL).
    Ndjson,
}

/// JSON formatter.
#[derive(Debug, Clone, Default)]
pub struct JsonFormatter {
    /// Output style.
    style: JsonStyle,
    /// Whether to pretty-print (only for array style).
    pretty: bool,
}

impl JsonFormatter {
    /// Creates a new JSON formatter with default settings (array style).
    #[must_use]
    pub const fn new() -> Self {
        Self {
            style: JsonStyle::Array,
            pretty: false,
        }
    }

    /// Creates a new NDJSON formatter.
    #[must_use]
    pub const fn ndjson() -> Self {
        Self {
            style: JsonStyle::Ndjson,
            pretty: false,
        }
    }

    /// Sets whether to pretty-print output (array style only).
    #[must_use]
    pub const fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    /// Sets the output style.
    #[must_use]
    pub const fn with_style(mut self, style: JsonStyle) -> Self {
        self.style = style;
        self
    }

    /// Returns the output style.
    #[must_use]
    pub const fn style(&self) -> JsonStyle {
        self.style
    }
}

impl Formatter for JsonFormatter {
    fn write_candles<W: Write>(&self, candles: &[Candle], mut writer: W) -> Result<(), FormatError> {
        match self.style {
            JsonStyle::Array => {
                if self.pretty {
                    serde_json::to_writer_pretty(&mut writer, candles)?;
                } else {
                    serde_json::to_writer(&mut writer, candles)?;
                }
                writeln!(writer)?;
            }
            JsonStyle::Ndjson => {
                for candle in candles {
                    serde_json::to_writer(&mut writer, candle)?;
                    writeln!(writer)?;
                }
            }
        }
        Ok(())
    }

    fn read_candles<R: BufRead>(&self, reader: R) -> Result<Vec<Candle>, FormatError> {
        match self.style {
            JsonStyle::Array => Ok(serde_json::from_reader(reader)?),
            JsonStyle::Ndjson => {
                let mut candles = Vec::new();
                for line in reader.lines() {
                    let line = line?;
                    if line.trim().is_empty() {
                        continue;
                    }
                    candles.push(serde_json::from_str(&line)?);
                }
                Ok(candles)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn create_test_candle(time: i64) -> Candle {
        Candle::new(time, 42_000.0, 42_100.0, 41_900.0, 42_050.5, 12.5, 525_000.0)
    }

    #[test]
    fn test_json_array() {
        let formatter = JsonFormatter::new();
        let candles = vec![create_test_candle(1_700_000_000_000)];
        let mut output = Cursor::new(Vec::new());

        formatter.write_candles(&candles, &mut output).unwrap();

        let result = String::from_utf8(output.into_inner()).unwrap();
        assert!(result.starts_with('['));
        assert!(result.contains("\"time\":1700000000000"));
        assert!(result.contains("\"close\":42050.5"));
        assert!(result.contains("\"volume_quote\":525000.0"));
    }

    #[test]
    fn test_empty_array() {
        let mut output = Vec::new();
        JsonFormatter::new().write_candles(&[], &mut output).unwrap();
        assert_eq!(String::from_utf8(output).unwrap().trim(), "[]");
    }

    #[test]
    fn test_ndjson() {
        let formatter = JsonFormatter::ndjson();
        let candles = vec![create_test_candle(1), create_test_candle(2)];
        let mut output = Cursor::new(Vec::new());

        formatter.write_candles(&candles, &mut output).unwrap();

        let result = String::from_utf8(output.into_inner()).unwrap();
        let lines: Vec<_> = result.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with('{'));
    }

    #[test]
    fn test_pretty_json() {
        let formatter = JsonFormatter::new().with_pretty(true);
        let mut output = Cursor::new(Vec::new());

        formatter
            .write_candles(&[create_test_candle(1)], &mut output)
            .unwrap();

        let result = String::from_utf8(output.into_inner()).unwrap();
        assert!(result.contains('\n'));
        assert!(result.contains("  "));
    }

    #[test]
    fn test_read_array_with_integer_prices() {
        let input = r#"[{"time":1,"open":1,"high":2,"low":0,"close":1.5,"volume_base":3,"volume_quote":4}]"#;
        let candles = JsonFormatter::new().read_candles(input.as_bytes()).unwrap();
        assert_eq!(candles, vec![Candle::new(1, 1.0, 2.0, 0.0, 1.5, 3.0, 4.0)]);
    }

    #[test]
    fn test_read_ndjson_skips_blank_lines() {
        let formatter = JsonFormatter::ndjson();
        let mut buffer = Vec::new();
        formatter
            .write_candles(&[create_test_candle(1), create_test_candle(2)], &mut buffer)
            .unwrap();
        buffer.extend_from_slice(b"\n\n");

        let candles = formatter.read_candles(buffer.as_slice()).unwrap();
        assert_eq!(candles.len(), 2);
        assert_eq!(candles[1].time, 2);
    }

    #[test]
    fn test_read_rejects_missing_field() {
        let input = r#"[{"time":1,"open":1,"high":2,"low":0}]"#;
        let err = JsonFormatter::new().read_candles(input.as_bytes()).unwrap_err();
        assert!(matches!(err, FormatError::Json(_)));
    }
}
