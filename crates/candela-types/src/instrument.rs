//! Exchange instrument identifiers.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Error returned when an instrument identifier is malformed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InstrumentError {
    /// The identifier is not of the form `BASE-QUOTE[-SUFFIX...]`.
    #[error("Invalid instrument id: {0:?} (expected e.g. BTC-USDT)")]
    Invalid(String),
}

/// Validated instrument identifier such as `BTC-USDT`.
///
/// Identifiers are normalized to uppercase and must consist of at least two
/// non-empty alphanumeric segments separated by `-`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct InstrumentId(String);

impl InstrumentId {
    /// The instrument fetched when none is specified.
    pub const DEFAULT: &'static str = "BTC-USDT";

    /// Parses and normalizes an instrument identifier.
    ///
    /// # Errors
    ///
    /// Returns an error if the identifier is malformed.
    pub fn new(id: &str) -> Result<Self, InstrumentError> {
        let normalized = id.trim().to_uppercase();
        let segments: Vec<&str> = normalized.split('-').collect();
        let valid = segments.len() >= 2
            && segments
                .iter()
                .all(|s| !s.is_empty() && s.chars().all(|c| c.is_ascii_alphanumeric()));

        if valid {
            Ok(Self(normalized))
        } else {
            Err(InstrumentError::Invalid(id.to_string()))
        }
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the base currency (first segment).
    #[must_use]
    pub fn base(&self) -> &str {
        self.0.split('-').next().unwrap_or_default()
    }

    /// Returns the quote currency (second segment).
    #[must_use]
    pub fn quote(&self) -> &str {
        self.0.split('-').nth(1).unwrap_or_default()
    }
}

impl Default for InstrumentId {
    fn default() -> Self {
        Self(Self::DEFAULT.to_string())
    }
}

impl fmt::Display for InstrumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for InstrumentId {
    type Err = InstrumentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for InstrumentId {
    type Error = InstrumentError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<InstrumentId> for String {
    fn from(id: InstrumentId) -> Self {
        id.0
    }
}
