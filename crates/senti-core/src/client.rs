//! HTTP client for the external sentiment inference service.
//!
//! POSTs `{"text": ...}` to the configured endpoint and passes the JSON
//! reply through untouched. A 429 answer gets a single retry after a
//! fixed pause; everything else maps onto [`InferenceError`].

use anyhow::{Context, Result};
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{error, info, warn};

use crate::config::InferenceConfig;
use crate::error::{InferenceError, InferenceResult};

/// Text payload forwarded to the inference service.
///
/// Serializes as `{"text": "<string>"}` with no other fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisRequest {
    pub text: String,
}

/// Opaque reply from the inference service.
///
/// The gateway does not inspect the shape (the current service returns a
/// label and a probability); whatever JSON comes back is decoded and
/// handed to the caller unmodified.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnalysisResponse(pub Value);

/// Sentiment inference client.
#[derive(Clone)]
pub struct InferenceClient {
    config: InferenceConfig,
    client: reqwest::Client,
}

impl InferenceClient {
    /// Create a client for the endpoint in `config`, with its timeouts
    /// baked into the underlying connection pool.
    pub fn new(config: InferenceConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .connect_timeout(config.connect_timeout)
            .timeout(config.request_timeout)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self { config, client })
    }

    /// Forward `request` to the inference service and return its reply.
    ///
    /// A 429 triggers exactly one retry after `config.retry_pause`; if the
    /// retry fails for any reason the call ends in
    /// [`InferenceError::RateLimitExhausted`]. Dropping the returned future
    /// during the pause abandons the retry.
    pub async fn analyze(&self, request: &AnalysisRequest) -> InferenceResult<AnalysisResponse> {
        info!(url = %self.config.url, "Forwarding text to inference service");

        let response = match self.post(request).await {
            Ok(response) => response,
            Err(err) if err.is_timeout() || err.is_connect() => {
                error!(error = %err, "Could not reach inference service");
                return Err(InferenceError::ConnectionFailed);
            }
            Err(err) => {
                error!(error = %err, "Unexpected transport failure calling inference service");
                return Err(InferenceError::Internal);
            }
        };

        if response.status() == StatusCode::TOO_MANY_REQUESTS {
            warn!(
                pause_ms = self.config.retry_pause.as_millis() as u64,
                "Inference service rate limited (429), retrying once"
            );
            tokio::time::sleep(self.config.retry_pause).await;
            return self.retry(request).await;
        }

        self.decode(response).await
    }

    /// The single post-429 retry. Any failure here, whatever the kind,
    /// surfaces as `RateLimitExhausted`.
    async fn retry(&self, request: &AnalysisRequest) -> InferenceResult<AnalysisResponse> {
        match self.post(request).await {
            Ok(response) => self
                .decode(response)
                .await
                .map_err(|_| InferenceError::RateLimitExhausted),
            Err(err) => {
                error!(error = %err, "Retry after rate limit failed");
                Err(InferenceError::RateLimitExhausted)
            }
        }
    }

    async fn post(&self, request: &AnalysisRequest) -> Result<reqwest::Response, reqwest::Error> {
        self.client
            .post(&self.config.url)
            .json(request)
            .send()
            .await
    }

    /// Turn an HTTP response into the opaque reply: any 2xx with a JSON
    /// body succeeds, everything else is logged and classified.
    async fn decode(&self, response: reqwest::Response) -> InferenceResult<AnalysisResponse> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!(%status, body = %body, "Inference service returned an unexpected status");
            return Err(InferenceError::Internal);
        }

        match response.json::<AnalysisResponse>().await {
            Ok(decoded) => Ok(decoded),
            Err(err) if err.is_timeout() => {
                error!(error = %err, "Timed out reading inference response");
                Err(InferenceError::ConnectionFailed)
            }
            Err(err) => {
                error!(error = %err, "Failed to decode inference response");
                Err(InferenceError::Internal)
            }
        }
    }
}
