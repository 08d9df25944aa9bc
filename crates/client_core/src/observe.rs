use crate::error::ClientError;

/// Cross-cutting request hooks attached to a client instance. All methods
/// default to no-ops so observers only override what they care about.
pub trait RequestObserver: Send + Sync {
    fn on_request(&self, _method: &str, _url: &str) {}
    fn on_response(&self, _url: &str, _status: u16) {}
    fn on_error(&self, _url: &str, _error: &ClientError) {}
}

/// Default observer: logs request/response traffic through `tracing`.
pub struct TracingObserver;

impl RequestObserver for TracingObserver {
    fn on_request(&self, method: &str, url: &str) {
        tracing::debug!(method, url, "issuing catalog api request");
    }

    fn on_response(&self, url: &str, status: u16) {
        tracing::debug!(url, status, "catalog api response");
    }

    fn on_error(&self, url: &str, error: &ClientError) {
        tracing::error!(url, %error, "catalog api request failed");
    }
}
