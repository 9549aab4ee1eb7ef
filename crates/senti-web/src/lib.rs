//! Senti Web Server
//!
//! Axum-based HTTP front for the sentiment inference client.

pub mod routes;
pub mod state;

use axum::{
    routing::{get, post},
    Router,
};
use senti_core::InferenceClient;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_routes = Router::new()
        .route("/sentiment", post(routes::sentiment::analyze))
        .with_state(state.clone());

    Router::new()
        .nest("/api", api_routes)
        .route("/health", get(routes::health::health))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Run the web server.
pub async fn run_server(inference: InferenceClient, host: &str, port: u16) -> anyhow::Result<()> {
    let state = AppState::new(inference);
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(format!("{}:{}", host, port)).await?;
    tracing::info!("Web server listening on http://{}:{}", host, port);

    axum::serve(listener, app).await?;
    Ok(())
}
