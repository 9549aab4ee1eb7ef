//! Sentiment analysis route handler.

use axum::{extract::State, http::StatusCode, Json};
use senti_core::{AnalysisRequest, AnalysisResponse, InferenceError};

use crate::state::AppState;

pub async fn analyze(
    State(state): State<AppState>,
    Json(req): Json<AnalysisRequest>,
) -> Result<Json<AnalysisResponse>, (StatusCode, String)> {
    let response = state.inference.analyze(&req).await.map_err(error_response)?;

    Ok(Json(response))
}

/// Map each error kind to an HTTP status; the body stays the fixed
/// user-facing message, never the underlying cause.
fn error_response(err: InferenceError) -> (StatusCode, String) {
    let status = match err {
        InferenceError::RateLimitExhausted => StatusCode::SERVICE_UNAVAILABLE,
        InferenceError::ConnectionFailed => StatusCode::BAD_GATEWAY,
        InferenceError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
    };
    (status, err.to_string())
}
