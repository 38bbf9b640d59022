//! Error handling module for the Travel Diaries backend.
//!
//! Provides the error taxonomy shared by all handlers and its mapping to HTTP
//! status codes and JSON error bodies.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

/// Message used whenever a store failure is reported to the client.
pub const SERVER_ERROR: &str = "Server error";

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    /// No document matches the lookup key
    NotFound(String),
    /// Missing or malformed request input
    BadRequest(String),
    /// Store operation failed; carries the raw driver text
    Database(String),
    /// Internal server error; carries only a client-safe message
    Internal(String),
}

impl AppError {
    /// Get the HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the human-readable message for this error.
    pub fn message(&self) -> String {
        match self {
            AppError::NotFound(msg) => msg.clone(),
            AppError::BadRequest(msg) => msg.clone(),
            AppError::Database(_) => SERVER_ERROR.to_string(),
            AppError::Internal(msg) => msg.clone(),
        }
    }

    /// Get the underlying failure text, if any is exposed to clients.
    pub fn detail(&self) -> Option<String> {
        match self {
            AppError::Database(detail) => Some(detail.clone()),
            _ => None,
        }
    }

    /// Drop any store detail, keeping only the generic server message.
    pub fn without_detail(self) -> Self {
        match self {
            AppError::Database(_) => AppError::Internal(SERVER_ERROR.to_string()),
            other => other,
        }
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Database(detail) => write!(f, "{}: {}", SERVER_ERROR, detail),
            other => write!(f, "{}", other.message()),
        }
    }
}

impl std::error::Error for AppError {}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        tracing::error!("Database error: {:?}", err);
        AppError::Database(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        tracing::error!("Document JSON error: {:?}", err);
        AppError::Database(err.to_string())
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::debug!("Rejected request body: {}", rejection.body_text());
        AppError::BadRequest(rejection.body_text())
    }
}

/// Error response body.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl From<&AppError> for ErrorResponse {
    fn from(error: &AppError) -> Self {
        Self {
            message: error.message(),
            error: error.detail(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ErrorResponse::from(&self);
        (status, Json(body)).into_response()
    }
}
