//! Provider HTTP client.
//!
//! Queries the `hafas-rest-api` trip endpoint and converts the response
//! to domain types. The REST facade speaks HAFAS on our behalf.

use reqwest::Url;
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};
use tracing::{debug, trace};

use crate::domain::Journey;

use super::convert::convert_trip;
use super::error::HafasError;
use super::types::{ErrorBody, TripResponse};

/// Default base URL for the provider.
pub const DEFAULT_BASE_URL: &str = "https://v6.db.transport.rest";

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Configuration for the provider client.
#[derive(Debug, Clone)]
pub struct HafasConfig {
    /// Base URL of the REST API
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// Language for message texts (provider default when `None`)
    pub language: Option<String>,
    /// User agent sent with every request
    pub user_agent: String,
}

impl HafasConfig {
    /// Create a config pointing at the default provider.
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            language: None,
            user_agent: USER_AGENT.to_string(),
        }
    }

    /// Set a custom base URL (for testing or a self-hosted instance).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    /// Request message texts in the given language.
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }
}

impl Default for HafasConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Which optional trip sections to request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TripOptions {
    /// Include the route polyline
    pub polyline: bool,
    /// Include remarks (service messages)
    pub remarks: bool,
}

impl TripOptions {
    /// Polyline and remarks, which is what the journey lookup needs.
    pub fn with_polyline() -> Self {
        Self {
            polyline: true,
            remarks: true,
        }
    }
}

impl Default for TripOptions {
    fn default() -> Self {
        Self {
            polyline: false,
            remarks: true,
        }
    }
}

/// Journey-status provider client.
#[derive(Debug, Clone)]
pub struct HafasClient {
    http: reqwest::Client,
    base_url: Url,
    language: Option<String>,
}

impl HafasClient {
    /// Create a new client with the given configuration.
    pub fn new(config: HafasConfig) -> Result<Self, HafasError> {
        let base_url = Url::parse(&config.base_url)
            .map_err(|e| HafasError::InvalidBaseUrl(format!("{}: {e}", config.base_url)))?;
        if base_url.cannot_be_a_base() {
            return Err(HafasError::InvalidBaseUrl(config.base_url));
        }

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .user_agent(config.user_agent)
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url,
            language: config.language,
        })
    }

    /// Fetch a single trip by its provider ID.
    ///
    /// Non-2xx responses with a provider error body become
    /// [`HafasError::Provider`] carrying the provider's code and message.
    pub async fn trip(&self, id: &str, options: &TripOptions) -> Result<Journey, HafasError> {
        let url = self.trip_url(id)?;

        let mut query = vec![
            ("polyline", options.polyline.to_string()),
            ("remarks", options.remarks.to_string()),
            ("stopovers", "false".to_string()),
        ];
        if let Some(language) = &self.language {
            query.push(("language", language.clone()));
        }

        debug!(%url, polyline = options.polyline, "requesting trip");

        let response = self.http.get(url).query(&query).send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            debug!(status = status.as_u16(), "provider returned an error");
            return Err(provider_error(status.as_u16(), body));
        }

        let body = response.text().await?;
        trace!(bytes = body.len(), "received trip");

        let parsed: TripResponse = serde_json::from_str(&body).map_err(|e| HafasError::Json {
            message: e.to_string(),
            body: Some(body.chars().take(500).collect()),
        })?;

        convert_trip(&parsed.trip).map_err(|e| HafasError::Json {
            message: e.to_string(),
            body: None,
        })
    }

    /// `{base}/trips/{id}` with the ID percent-encoded as one path segment.
    fn trip_url(&self, id: &str) -> Result<Url, HafasError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| HafasError::InvalidBaseUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .push("trips")
            .push(id);
        Ok(url)
    }
}

/// Build the error for a non-2xx response.
///
/// Any of the four error-body fields marks the body as the provider's own
/// error. A missing code falls back to the status, a missing message to the
/// raw body.
fn provider_error(status: u16, body: String) -> HafasError {
    match serde_json::from_str::<ErrorBody>(&body) {
        Ok(err) if err.is_provider_error() => HafasError::Provider {
            code: err
                .hafas_code
                .or(err.code)
                .unwrap_or_else(|| status.to_string()),
            message: err.message.or(err.hafas_message).unwrap_or(body),
        },
        _ => HafasError::Api {
            status,
            message: body,
        },
    }
}
