//! Centralized error types for the sentiment gateway.

use thiserror::Error;

/// Failures surfaced by the inference client.
///
/// Each kind carries a fixed user-facing message. The underlying cause
/// (transport error, unexpected status, decode error) is logged at the
/// failure site and never exposed to the caller.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum InferenceError {
    /// The service answered 429 on the initial call and the single retry
    /// also failed.
    #[error("service temporarily unavailable, retry later")]
    RateLimitExhausted,

    /// No response was received: the connection was refused or timed out.
    #[error("could not reach inference service")]
    ConnectionFailed,

    /// Any other failure: undecodable body, unexpected status.
    #[error("internal error processing the analysis")]
    Internal,
}

/// Result type for inference operations.
pub type InferenceResult<T> = Result<T, InferenceError>;
