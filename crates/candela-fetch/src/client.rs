//! Signed HTTP client for the OKX REST API.

use async_trait::async_trait;
use candela_types::{CandelaError, Cursor, InstrumentId};
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::{Client, Request, StatusCode};
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, error};

use crate::auth::{ConfigError, Credentials, format_timestamp};
use crate::clock::{Clock, SystemClock};
use crate::parse::{ApiResponse, RawRow};
use crate::stream::CandleSource;
use crate::url::{BASE_URL, full_url, history_candles_path};

/// Environment variable overriding [`ClientConfig::base_url`].
pub const ENV_BASE_URL: &str = "CANDELA_BASE_URL";

const HEADER_ACCESS_KEY: &str = "OK-ACCESS-KEY";
const HEADER_ACCESS_SIGN: &str = "OK-ACCESS-SIGN";
const HEADER_ACCESS_TIMESTAMP: &str = "OK-ACCESS-TIMESTAMP";
const HEADER_ACCESS_PASSPHRASE: &str = "OK-ACCESS-PASSPHRASE";

/// Configuration for the OKX client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Scheme and host of the REST API.
    pub base_url: String,
    /// Request timeout.
    pub timeout: Duration,
    /// Connection timeout.
    pub connect_timeout: Duration,
    /// User agent string.
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: BASE_URL.to_string(),
            timeout: Duration::from_secs(60),
            connect_timeout: Duration::from_secs(10),
            user_agent: format!("candela/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl ClientConfig {
    /// Default configuration with the base URL taken from `CANDELA_BASE_URL`
    /// when it is set.
    #[must_use]
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Some(base_url) = std::env::var(ENV_BASE_URL)
            .ok()
            .filter(|v| !v.trim().is_empty())
        {
            config.base_url = base_url;
        }
        config
    }

    /// Sets the base URL.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

/// Errors that can occur while talking to the exchange.
#[derive(Error, Debug)]
pub enum FetchError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Server answered with a non-200 status.
    #[error("Server returned HTTP {status}: {body}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Response body.
        body: String,
    },

    /// Server answered 200 with an error envelope.
    #[error("API error {code}: {msg}")]
    Api {
        /// Exchange error code.
        code: String,
        /// Exchange error message.
        msg: String,
    },

    /// The response body is not the expected JSON envelope.
    #[error("Invalid response body: {0}")]
    Decode(#[from] serde_json::Error),

    /// The request could not be signed.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl From<FetchError> for CandelaError {
    fn from(e: FetchError) -> Self {
        match e {
            FetchError::Status { status, body } => Self::Status { status, body },
            FetchError::Api { code, msg } => Self::Api { code, msg },
            FetchError::Decode(e) => Self::Parse(e.to_string()),
            FetchError::Config(e) => e.into(),
            FetchError::Http(e) => Self::Http(e.to_string()),
        }
    }
}

/// HTTP client that signs every request with the account credentials.
#[derive(Debug, Clone)]
pub struct OkxClient<C = SystemClock> {
    client: Client,
    config: ClientConfig,
    credentials: Credentials,
    clock: C,
}

impl OkxClient {
    /// Creates a client using the system clock.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn new(config: ClientConfig, credentials: Credentials) -> Result<Self, reqwest::Error> {
        Self::with_clock(config, credentials, SystemClock)
    }
}

impl<C: Clock> OkxClient<C> {
    /// Creates a client that takes signing timestamps from `clock`.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn with_clock(
        config: ClientConfig,
        credentials: Credentials,
        clock: C,
    ) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .user_agent(&config.user_agent)
            .gzip(true)
            .build()?;
        Ok(Self {
            client,
            config,
            credentials,
            clock,
        })
    }

    /// Returns the client configuration.
    #[must_use]
    pub const fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Builds a signed GET request for `request_path` (path plus query).
    ///
    /// # Errors
    ///
    /// Returns an error if signing fails or a header value is invalid.
    pub fn signed_get(&self, request_path: &str) -> Result<Request, FetchError> {
        let timestamp = format_timestamp(self.clock.now());
        let signature = self.credentials.sign(&timestamp, "GET", request_path)?;

        let request = self
            .client
            .get(full_url(&self.config.base_url, request_path))
            .header(ACCEPT, "application/json")
            .header(CONTENT_TYPE, "application/json")
            .header(HEADER_ACCESS_KEY, self.credentials.api_key())
            .header(HEADER_ACCESS_SIGN, signature)
            .header(HEADER_ACCESS_TIMESTAMP, timestamp)
            .header(HEADER_ACCESS_PASSPHRASE, self.credentials.passphrase())
            .build()?;
        Ok(request)
    }

    /// Requests one page of candles older than `after`.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Status`] for any status other than 200 and
    /// [`FetchError::Api`] when the envelope carries a non-zero code.
    pub async fn history_candles(
        &self,
        instrument: &InstrumentId,
        after: Cursor,
    ) -> Result<Vec<RawRow>, FetchError> {
        let request_path = history_candles_path(instrument, after);
        let request = self.signed_get(&request_path)?;
        debug!(path = %request_path, "requesting history candles");

        let response = self.client.execute(request).await?;
        let status = response.status();
        let body = response.text().await?;

        if status != StatusCode::OK {
            error!(status = status.as_u16(), %body, "history candles request failed");
            return Err(FetchError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let envelope: ApiResponse = serde_json::from_str(&body)?;
        if !envelope.is_success() {
            error!(code = %envelope.code, msg = %envelope.msg, "exchange rejected request");
            return Err(FetchError::Api {
                code: envelope.code,
                msg: envelope.msg,
            });
        }

        debug!(rows = envelope.data.len(), "received history candles");
        Ok(envelope.data)
    }
}

#[async_trait]
impl<C: Clock> CandleSource for OkxClient<C> {
    async fn fetch_page(
        &self,
        instrument: &InstrumentId,
        after: Cursor,
    ) -> Result<Vec<RawRow>, FetchError> {
        self.history_candles(instrument, after).await
    }
}
