//! Error handling for the Pharmacy Assistant
//!
//! Provides consistent error responses in Persian and English

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use shared::AssistantError;
use thiserror::Error;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    // Assistant errors
    #[error("Intent not understood: {0}")]
    UnknownIntent(String),

    #[error("Malformed intent arguments: {0}")]
    MalformedArgs(String),

    // Validation errors
    #[error("Validation error: {message}")]
    Validation {
        field: String,
        message: String,
        message_fa: String,
    },

    // Internal errors
    #[error("Internal server error")]
    InternalError(#[from] anyhow::Error),
}

impl From<AssistantError> for AppError {
    fn from(err: AssistantError) -> Self {
        match err {
            AssistantError::UnknownIntent(name) => AppError::UnknownIntent(name),
            AssistantError::MalformedArgs(msg) => AppError::MalformedArgs(msg),
        }
    }
}

impl From<tokio::task::JoinError> for AppError {
    fn from(err: tokio::task::JoinError) -> Self {
        AppError::InternalError(anyhow::Error::new(err).context("dispatch task failed"))
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let field = errors
            .field_errors()
            .keys()
            .next()
            .map(|f| f.to_string())
            .unwrap_or_default();
        AppError::Validation {
            message: format!("Invalid request: {}", errors),
            message_fa: format!("درخواست نامعتبر است: {}", field),
            field,
        }
    }
}

/// Error response structure
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

#[derive(Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message_en: String,
    pub message_fa: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::UnknownIntent(_) => StatusCode::NOT_FOUND,
            AppError::MalformedArgs(_) | AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let error_detail = match &self {
            AppError::UnknownIntent(intent) => ErrorDetail {
                code: "INTENT_NOT_UNDERSTOOD".to_string(),
                message_en: format!("Sorry, I did not understand that command ({}).", intent),
                message_fa: "متوجه دستور نشدم، لطفاً دوباره بگویید.".to_string(),
                field: Some("intent".to_string()),
            },
            AppError::MalformedArgs(msg) => ErrorDetail {
                code: "MALFORMED_ARGS".to_string(),
                message_en: format!("Malformed intent arguments: {}", msg),
                message_fa: "پارامترهای دستور نامعتبر است.".to_string(),
                field: Some("args".to_string()),
            },
            AppError::Validation {
                field,
                message,
                message_fa,
            } => ErrorDetail {
                code: "VALIDATION_ERROR".to_string(),
                message_en: message.clone(),
                message_fa: message_fa.clone(),
                field: Some(field.clone()),
            },
            AppError::InternalError(_) => ErrorDetail {
                code: "INTERNAL_ERROR".to_string(),
                message_en: "An internal server error occurred".to_string(),
                message_fa: "خطای داخلی سرور رخ داد.".to_string(),
                field: None,
            },
        };

        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!("Error: {:?}", self);
        } else {
            tracing::warn!("Rejected request: {}", self);
        }

        (status, Json(ErrorResponse { error: error_detail })).into_response()
    }
}

/// Result type alias for handlers
pub type AppResult<T> = Result<T, AppError>;
