//! Inference client configuration.

use std::time::Duration;

/// Default connect timeout.
pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

/// Default end-to-end response timeout.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// Fixed pause before the single retry after a rate-limited call.
pub const DEFAULT_RETRY_PAUSE: Duration = Duration::from_secs(3);

/// Configuration for [`crate::InferenceClient`].
///
/// The endpoint URL comes from external configuration (`--ml-api-url` or
/// the `ML_API_URL` environment variable); the timeouts default to the
/// values above and are only overridden in tests.
#[derive(Debug, Clone)]
pub struct InferenceConfig {
    /// URL of the sentiment inference endpoint.
    pub url: String,
    /// Maximum time to establish the connection.
    pub connect_timeout: Duration,
    /// Maximum time for the whole request, including reading the body.
    pub request_timeout: Duration,
    /// How long to wait before the single retry after a 429.
    pub retry_pause: Duration,
}

impl InferenceConfig {
    /// Create a configuration for the given endpoint with default timeouts.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
            retry_pause: DEFAULT_RETRY_PAUSE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_timeouts() {
        let config = InferenceConfig::new("http://localhost:8000/predict");
        assert_eq!(config.connect_timeout, Duration::from_secs(5));
        assert_eq!(config.request_timeout, Duration::from_secs(15));
        assert_eq!(config.retry_pause, Duration::from_secs(3));
        assert_eq!(config.url, "http://localhost:8000/predict");
    }
}
