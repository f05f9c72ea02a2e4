//! Errors raised by the assistant core
//!
//! Business outcomes (missing args, unknown drug, short stock) are replies,
//! not errors. Only calls the core cannot interpret end up here.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AssistantError {
    #[error("Unknown intent: {0}")]
    UnknownIntent(String),

    #[error("Malformed intent arguments: {0}")]
    MalformedArgs(String),
}

pub type AssistantResult<T> = Result<T, AssistantError>;
