//! API credentials and request signing.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use chrono::{DateTime, SecondsFormat, Utc};
use hmac::{Hmac, Mac};
use sha2::Sha256;
use std::fmt;
use thiserror::Error;

type HmacSha256 = Hmac<Sha256>;

/// Environment variable holding the API key.
pub const ENV_API_KEY: &str = "OK_ACCESS_KEY";
/// Environment variable holding the API secret used to key the signature.
pub const ENV_SECRET_KEY: &str = "OK_ACCESS_SECRET";
/// Environment variable holding the API passphrase.
pub const ENV_PASSPHRASE: &str = "OK_ACCESS_PASSPHRASE";

/// Errors raised while loading credentials or signing.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A required environment variable is not set.
    #[error("Missing environment variable: {0}")]
    MissingVar(&'static str),

    /// A required environment variable is set but empty.
    #[error("Environment variable {0} is empty")]
    EmptyVar(&'static str),

    /// The secret cannot be used as an HMAC key.
    #[error("API secret cannot be used as an HMAC key")]
    InvalidSecret,
}

impl From<ConfigError> for candela_types::CandelaError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e.to_string())
    }
}

/// OKX API credentials.
///
/// The `Debug` output never contains the secret or the passphrase.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    api_key: String,
    secret_key: String,
    passphrase: String,
}

impl Credentials {
    /// Creates credentials from explicit values.
    pub fn new(
        api_key: impl Into<String>,
        secret_key: impl Into<String>,
        passphrase: impl Into<String>,
    ) -> Self {
        Self {
            api_key: api_key.into(),
            secret_key: secret_key.into(),
            passphrase: passphrase.into(),
        }
    }

    /// Loads credentials from the process environment.
    ///
    /// # Errors
    ///
    /// Returns an error naming the first variable that is missing or empty.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Loads credentials through an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns an error naming the first variable that is missing or empty.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let require = |name: &'static str| match lookup(name) {
            None => Err(ConfigError::MissingVar(name)),
            Some(value) if value.trim().is_empty() => Err(ConfigError::EmptyVar(name)),
            Some(value) => Ok(value),
        };

        Ok(Self {
            api_key: require(ENV_API_KEY)?,
            secret_key: require(ENV_SECRET_KEY)?,
            passphrase: require(ENV_PASSPHRASE)?,
        })
    }

    /// Returns the API key.
    #[must_use]
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Returns the passphrase.
    #[must_use]
    pub fn passphrase(&self) -> &str {
        &self.passphrase
    }

    /// Signs a request with these credentials.
    ///
    /// # Errors
    ///
    /// Returns an error if the secret cannot key the HMAC.
    pub fn sign(
        &self,
        timestamp: &str,
        method: &str,
        request_path: &str,
    ) -> Result<String, ConfigError> {
        sign(&self.secret_key, timestamp, method, request_path)
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("api_key", &self.api_key)
            .field("secret_key", &"<redacted>")
            .field("passphrase", &"<redacted>")
            .finish()
    }
}

/// Computes the OKX request signature.
///
/// The prehash string is `timestamp + method + request_path`, where
/// `request_path` includes the query string. The HMAC-SHA256 digest is
/// returned base64-encoded.
///
/// # Example
///
/// ```
/// use candela_fetch::auth::sign;
///
/// let a = sign("secret", "2024-01-15T12:30:45.123Z", "GET", "/api/v5/market/history-candles?instId=BTC-USDT").unwrap();
/// let b = sign("secret", "2024-01-15T12:30:45.123Z", "GET", "/api/v5/market/history-candles?instId=BTC-USDT").unwrap();
/// assert_eq!(a, b);
/// ```
///
/// # Errors
///
/// Returns an error if the secret cannot key the HMAC.
pub fn sign(
    secret: &str,
    timestamp: &str,
    method: &str,
    request_path: &str,
) -> Result<String, ConfigError> {
    let mut mac =
        HmacSha256::new_from_slice(secret.as_bytes()).map_err(|_| ConfigError::InvalidSecret)?;
    mac.update(timestamp.as_bytes());
    mac.update(method.as_bytes());
    mac.update(request_path.as_bytes());
    Ok(STANDARD.encode(mac.finalize().into_bytes()))
}

/// Formats a signing timestamp: ISO-8601, millisecond precision, `Z` suffix.
#[must_use]
pub fn format_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}
