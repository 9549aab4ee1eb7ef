//! Application state.

use senti_core::InferenceClient;

/// Application state shared across handlers.
///
/// Holds the one inference client, constructed at startup with its own
/// timeout configuration. No process-wide singleton.
#[derive(Clone)]
pub struct AppState {
    pub inference: InferenceClient,
}

impl AppState {
    pub fn new(inference: InferenceClient) -> Self {
        Self { inference }
    }
}
