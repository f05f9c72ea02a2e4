//! Route definitions for the Pharmacy Assistant

use axum::{
    routing::{get, post},
    Router,
};

use crate::{handlers, AppState};

/// Create API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(handlers::health_check))
        .nest("/assistant", assistant_routes())
}

/// Voice assistant routes
fn assistant_routes() -> Router<AppState> {
    Router::new()
        .route("/dispatch", post(handlers::dispatch_intent))
        .route("/intents", get(handlers::list_intents))
        .route("/normalize", post(handlers::normalize_name))
}
