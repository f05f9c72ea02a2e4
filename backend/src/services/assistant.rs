//! Voice assistant service
//!
//! Executes one intent per request against the snapshot the UI sends and
//! hands back the reply plus every effect the handler emitted.

use std::sync::Arc;

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use shared::assistant::{CommandResult, ContextSnapshot, ExecuteOptions, HandlerDispatchTable};
use shared::normalizer::normalize;
use shared::Language;
use validator::Validate;

use crate::config::AssistantConfig;
use crate::error::AppResult;

// ============================================================================
// Request/Response Types
// ============================================================================

#[derive(Debug, Deserialize, Validate)]
pub struct DispatchRequest {
    #[validate(length(min = 1, max = 64))]
    pub intent: String,
    #[serde(default)]
    pub args: Value,
    #[serde(default)]
    pub snapshot: ContextSnapshot,
    /// Overrides the configured reply language
    #[serde(default)]
    pub language: Option<Language>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct NormalizeRequest {
    #[validate(length(min = 1, max = 256))]
    pub name: String,
}

#[derive(Debug, Serialize)]
pub struct NormalizeResponse {
    pub name: String,
    pub normalized: String,
}

#[derive(Debug, Serialize)]
pub struct IntentListResponse {
    pub intents: Vec<&'static str>,
}

// ============================================================================
// Service
// ============================================================================

/// Stateless between calls; holds only the dispatch table and settings
pub struct AssistantService {
    table: Arc<HandlerDispatchTable>,
    config: AssistantConfig,
}

impl AssistantService {
    pub fn new(table: Arc<HandlerDispatchTable>, config: AssistantConfig) -> Self {
        Self { table, config }
    }

    /// Execute one intent, using today's local date for expiry checks
    pub fn dispatch(&self, request: DispatchRequest) -> AppResult<CommandResult> {
        self.dispatch_on(request, Local::now().date_naive())
    }

    pub fn dispatch_on(&self, request: DispatchRequest, today: NaiveDate) -> AppResult<CommandResult> {
        request.validate()?;

        let options = ExecuteOptions {
            today,
            language: request.language.unwrap_or(self.config.language),
            requisition_notes: self.config.requisition_notes.clone(),
        };

        tracing::debug!(
            intent = %request.intent,
            language = options.language.code(),
            drugs = request.snapshot.drugs.len(),
            "Executing voice command"
        );

        let result = self
            .table
            .execute(&request.intent, request.args, &request.snapshot, &options)?;

        if result.success {
            tracing::info!(intent = %request.intent, actions = result.actions.len(), "Voice command handled");
        } else {
            tracing::warn!(intent = %request.intent, message = %result.message_en, "Voice command rejected");
        }

        Ok(result)
    }

    pub fn intents(&self) -> IntentListResponse {
        IntentListResponse {
            intents: self.table.intent_names(),
        }
    }

    pub fn normalize(&self, request: NormalizeRequest) -> AppResult<NormalizeResponse> {
        request.validate()?;
        let normalized = normalize(&request.name);
        Ok(NormalizeResponse {
            name: request.name,
            normalized,
        })
    }
}
