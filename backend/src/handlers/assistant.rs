//! HTTP handlers for the voice assistant

use axum::{extract::State, Json};
use shared::assistant::CommandResult;

use crate::error::AppResult;
use crate::services::assistant::{
    AssistantService, DispatchRequest, IntentListResponse, NormalizeRequest, NormalizeResponse,
};
use crate::AppState;

fn service(state: &AppState) -> AssistantService {
    AssistantService::new(state.dispatch_table.clone(), state.config.assistant.clone())
}

/// Execute a recognized intent
/// POST /assistant/dispatch
///
/// Matching walks the whole snapshot, so it runs on the blocking pool.
pub async fn dispatch_intent(
    State(state): State<AppState>,
    Json(input): Json<DispatchRequest>,
) -> AppResult<Json<CommandResult>> {
    let service = service(&state);
    let result = tokio::task::spawn_blocking(move || service.dispatch(input)).await??;
    Ok(Json(result))
}

/// List registered intent names
/// GET /assistant/intents
pub async fn list_intents(State(state): State<AppState>) -> Json<IntentListResponse> {
    Json(service(&state).intents())
}

/// Phonetic skeleton of a drug name
/// POST /assistant/normalize
pub async fn normalize_name(
    State(state): State<AppState>,
    Json(input): Json<NormalizeRequest>,
) -> AppResult<Json<NormalizeResponse>> {
    let response = service(&state).normalize(input)?;
    Ok(Json(response))
}
