use shared::error::ErrorBody;
use thiserror::Error;

/// Normalized failure surfaced to views. Every variant renders as a single
/// human-readable line; callers display the message and otherwise treat all
/// kinds alike.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ClientError {
    #[error("invalid client configuration: {0}")]
    Config(String),
    /// Timeout, refused connection, or any other transport-level failure.
    #[error("{message}")]
    Network { message: String },
    /// HTTP 404 on a specific resource.
    #[error("{what} not found")]
    NotFound { what: &'static str },
    /// Any other non-2xx response; `detail` comes from the server's error
    /// body when one is present, else a per-call fallback string.
    #[error("{detail}")]
    Server { status: u16, detail: String },
}

impl ClientError {
    /// Folds a transport failure into a one-line message prefixed with the
    /// per-call fallback string.
    pub(crate) fn from_transport(err: &reqwest::Error, fallback: &'static str) -> Self {
        let reason = if err.is_timeout() {
            "request timed out".to_string()
        } else if err.is_connect() {
            "connection failed".to_string()
        } else {
            err.to_string()
        };
        Self::Network {
            message: format!("{fallback}: {reason}"),
        }
    }

    /// Builds the error for a non-2xx, non-404 response from the raw body.
    pub(crate) fn from_status(status: u16, body: &[u8], fallback: &'static str) -> Self {
        let detail = serde_json::from_slice::<ErrorBody>(body)
            .map(|body| body.detail)
            .unwrap_or_else(|_| fallback.to_string());
        Self::Server { status, detail }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_error_uses_detail_payload_when_present() {
        let body = br#"{"detail": "Internal server error: db locked"}"#;
        let err = ClientError::from_status(500, body, "Failed to fetch products");
        assert_eq!(err.to_string(), "Internal server error: db locked");
    }

    #[test]
    fn server_error_falls_back_on_unparseable_body() {
        let err = ClientError::from_status(502, b"<html>bad gateway</html>", "Failed to fetch products");
        assert_eq!(err.to_string(), "Failed to fetch products");
    }

    #[test]
    fn not_found_renders_resource_name() {
        let err = ClientError::NotFound { what: "Product" };
        assert_eq!(err.to_string(), "Product not found");
    }
}
