//! Pharmacy Assistant - HTTP surface for the voice command engine
//!
//! A recognizer posts `(intent, args)` together with the UI's current
//! snapshot; the server runs the handler and returns the reply and the
//! effects for the UI to apply.

use std::sync::Arc;

use axum::{routing::get, Router};
use shared::assistant::HandlerDispatchTable;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

pub mod config;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod services;

pub use config::Config;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub dispatch_table: Arc<HandlerDispatchTable>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(config),
            dispatch_table: Arc::new(HandlerDispatchTable::new()),
        }
    }
}

/// Create the application router with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(root))
        .route("/health", get(health_check))
        .nest("/api/v1", routes::api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(cors)
        .with_state(state)
}

/// Root endpoint
async fn root() -> &'static str {
    "Pharmacy Assistant API v1.0"
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}
