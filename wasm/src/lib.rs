//! WebAssembly module for the Pharmacy Assistant
//!
//! Runs the voice command engine in the browser:
//! - Drug name normalization
//! - Intent dispatch over JSON, same response shape as the HTTP API

use chrono::NaiveDate;
use shared::assistant::{ContextSnapshot, ExecuteOptions, HandlerDispatchTable, DEFAULT_REQUISITION_NOTES};
use shared::normalizer::normalize;
use shared::Language;
use wasm_bindgen::prelude::*;

// Re-export shared types for use in JavaScript
pub use shared::models::*;
pub use shared::types::*;

/// Phonetic skeleton of a drug name
#[wasm_bindgen]
pub fn normalize_drug_name(name: &str) -> String {
    normalize(name)
}

/// Execute an intent and return the command result as JSON
///
/// `today` is the caller's local date as `YYYY-MM-DD`; `language` is
/// `"fa"` or `"en"` (anything else falls back to Persian).
#[wasm_bindgen]
pub fn dispatch_intent(
    intent: &str,
    args_json: &str,
    snapshot_json: &str,
    language: &str,
    today: &str,
) -> Result<String, JsValue> {
    execute(intent, args_json, snapshot_json, language, today).map_err(|e| {
        log_error(&e);
        JsValue::from_str(&e)
    })
}

/// Registered intent names as a JSON array
#[wasm_bindgen]
pub fn supported_intents() -> String {
    let names = HandlerDispatchTable::new().intent_names();
    serde_json::to_string(&names).unwrap_or_else(|_| "[]".to_string())
}

fn execute(
    intent: &str,
    args_json: &str,
    snapshot_json: &str,
    language: &str,
    today: &str,
) -> Result<String, String> {
    let args: serde_json::Value = if args_json.trim().is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_str(args_json).map_err(|e| format!("Invalid args JSON: {}", e))?
    };
    let snapshot: ContextSnapshot = serde_json::from_str(snapshot_json)
        .map_err(|e| format!("Invalid snapshot JSON: {}", e))?;
    let today = NaiveDate::parse_from_str(today, "%Y-%m-%d")
        .map_err(|e| format!("Invalid date {}: {}", today, e))?;

    let options = ExecuteOptions {
        today,
        language: language.parse().unwrap_or(Language::Persian),
        requisition_notes: DEFAULT_REQUISITION_NOTES.to_string(),
    };

    let result = HandlerDispatchTable::new()
        .execute(intent, args, &snapshot, &options)
        .map_err(|e| e.to_string())?;
    serde_json::to_string(&result).map_err(|e| format!("Failed to encode result: {}", e))
}

fn log_error(message: &str) {
    #[cfg(target_arch = "wasm32")]
    web_sys::console::error_1(&JsValue::from_str(message));
    #[cfg(not(target_arch = "wasm32"))]
    let _ = message;
}
