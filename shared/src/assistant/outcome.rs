//! One-shot execution for remote callers
//!
//! Runs a handler against recorded effects and returns the reply in both
//! languages together with everything the handler emitted, so a caller on
//! the other side of HTTP or WASM can apply the effects itself.

use chrono::NaiveDate;
use serde::Serialize;
use serde_json::Value;

use super::actions::UiAction;
use super::context::{ContextSnapshot, HandlerContext, RecordedEffects};
use super::dispatch::HandlerDispatchTable;
use crate::error::AssistantResult;
use crate::models::StockRequisition;
use crate::types::Language;

/// Result of executing one voice command
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CommandResult {
    pub success: bool,
    /// Reply in the requested language
    pub message: String,
    pub message_en: String,
    pub message_fa: String,
    pub actions: Vec<UiAction>,
    pub requisitions: Vec<StockRequisition>,
    pub navigations: Vec<String>,
    /// Requested assistant panel visibility, if a handler changed it
    pub assistant_open: Option<bool>,
}

/// Per-call settings for [`HandlerDispatchTable::execute`]
#[derive(Debug, Clone)]
pub struct ExecuteOptions {
    pub today: NaiveDate,
    pub language: Language,
    pub requisition_notes: String,
}

impl HandlerDispatchTable {
    /// Dispatch with a fresh effect recorder and collect the outcome
    pub fn execute(
        &self,
        intent_name: &str,
        args: Value,
        snapshot: &ContextSnapshot,
        options: &ExecuteOptions,
    ) -> AssistantResult<CommandResult> {
        let effects = RecordedEffects::new();
        let reply = {
            let ctx = HandlerContext::new(snapshot, &effects, options.today, options.language)
                .with_requisition_notes(options.requisition_notes.clone());
            self.dispatch_reply(intent_name, args, &ctx)?
        };

        Ok(CommandResult {
            success: reply.is_success(),
            message: reply.render(options.language),
            message_en: reply.render(Language::English),
            message_fa: reply.render(Language::Persian),
            actions: effects.actions(),
            requisitions: effects.requisitions(),
            navigations: effects.navigations(),
            assistant_open: effects.assistant_open(),
        })
    }
}
