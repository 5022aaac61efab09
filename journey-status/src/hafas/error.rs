//! Provider client error types.

/// Errors from the journey-status provider.
#[derive(Debug, thiserror::Error)]
pub enum HafasError {
    /// HTTP request failed (network error, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON deserialization or conversion failed
    #[error("JSON parse error: {message}")]
    Json {
        message: String,
        body: Option<String>,
    },

    /// Non-2xx status without a recognisable provider error body
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// The provider reported a failure of its own
    #[error("{code}: {message}")]
    Provider { code: String, message: String },

    /// Base URL cannot carry a path
    #[error("invalid base URL: {0}")]
    InvalidBaseUrl(String),

    /// Mock trip data could not be loaded
    #[error("mock data error: {0}")]
    MockData(String),
}

impl HafasError {
    /// Code for the `error_code` field of the error document.
    ///
    /// Provider failures pass their own code through unchanged.
    pub fn error_code(&self) -> String {
        match self {
            HafasError::Http(_) => "HTTP".to_string(),
            HafasError::Json { .. } => "JSON".to_string(),
            HafasError::Api { status, .. } => status.to_string(),
            HafasError::Provider { code, .. } => code.clone(),
            HafasError::InvalidBaseUrl(_) => "CONFIG".to_string(),
            HafasError::MockData(_) => "MOCK".to_string(),
        }
    }

    /// Text for the `error_string` field of the error document.
    pub fn error_string(&self) -> String {
        match self {
            HafasError::Provider { message, .. } => message.clone(),
            HafasError::Api { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = HafasError::Api {
            status: 500,
            message: "Internal Server Error".into(),
        };
        assert_eq!(err.to_string(), "API error 500: Internal Server Error");

        let err = HafasError::Json {
            message: "expected string".into(),
            body: Some("{}".into()),
        };
        assert!(err.to_string().contains("JSON parse error"));
        assert!(err.to_string().contains("expected string"));

        let err = HafasError::InvalidBaseUrl("mailto:x".into());
        assert_eq!(err.to_string(), "invalid base URL: mailto:x");
    }

    #[test]
    fn provider_error_passes_through_verbatim() {
        let err = HafasError::Provider {
            code: "E1".into(),
            message: "not found".into(),
        };
        assert_eq!(err.error_code(), "E1");
        assert_eq!(err.error_string(), "not found");
    }

    #[test]
    fn api_error_uses_status_as_code() {
        let err = HafasError::Api {
            status: 502,
            message: "Bad Gateway".into(),
        };
        assert_eq!(err.error_code(), "502");
        assert_eq!(err.error_string(), "Bad Gateway");
    }

    #[test]
    fn local_failures_have_fixed_codes() {
        let err = HafasError::Json {
            message: "EOF while parsing".into(),
            body: None,
        };
        assert_eq!(err.error_code(), "JSON");
        assert_eq!(err.error_string(), "JSON parse error: EOF while parsing");

        assert_eq!(HafasError::InvalidBaseUrl("x".into()).error_code(), "CONFIG");
    }
}
