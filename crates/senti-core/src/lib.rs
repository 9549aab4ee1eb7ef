//! # Senti Core
//!
//! Client for the external sentiment inference service: request/response
//! types, timeout configuration, and the error taxonomy.

pub mod client;
pub mod config;
pub mod error;

pub use client::{AnalysisRequest, AnalysisResponse, InferenceClient};
pub use config::InferenceConfig;
pub use error::{InferenceError, InferenceResult};
