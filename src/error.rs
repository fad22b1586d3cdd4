//! Error types and their HTTP rendering.
//!
//! [`StoreError`] is produced by repositories. [`AppError`] is the only error
//! that reaches the HTTP layer; its [`IntoResponse`] impl is the single place
//! where an error kind becomes a status code and a JSON body.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

/// Message returned when `name` or `bio` is missing or empty.
pub const MISSING_FIELDS_MESSAGE: &str = "Please provide name and bio for the user.";

/// Message returned when no user has the requested id.
pub const USER_NOT_FOUND_MESSAGE: &str = "The user with the specified ID does not exist.";

/// Failure reported by a user store.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// Application error rendered as an HTTP response.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Client sent an incomplete or malformed payload (400).
    #[error("validation error: {message}")]
    Validation { message: String },

    /// No entity with the given id (404).
    #[error("not found: {message}")]
    NotFound { message: String },

    /// The store failed (500). `message` is the fixed, client-facing text.
    #[error("internal error: {message}")]
    Internal { message: String },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// The 400 returned for a user payload without `name` or `bio`.
    pub fn missing_user_fields() -> Self {
        Self::bad_request(MISSING_FIELDS_MESSAGE)
    }

    /// The 404 returned when a user id does not exist.
    pub fn user_not_found() -> Self {
        Self::not_found(USER_NOT_FOUND_MESSAGE)
    }

    /// Returns the HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        let body = match self {
            AppError::Validation { message } => json!({ "errorMessage": message }),
            AppError::NotFound { message } => json!({ "message": message }),
            AppError::Internal { message } => json!({ "error": message }),
        };

        (status, Json(body)).into_response()
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(_: validator::ValidationErrors) -> Self {
        Self::missing_user_fields()
    }
}

impl From<axum::extract::rejection::JsonRejection> for AppError {
    fn from(rejection: axum::extract::rejection::JsonRejection) -> Self {
        tracing::debug!(error = %rejection, "rejected user payload");
        Self::missing_user_fields()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn body_json(error: AppError) -> (StatusCode, serde_json::Value) {
        let response = error.into_response();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_validation_renders_error_message_key() {
        let (status, body) = body_json(AppError::missing_user_fields()).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({ "errorMessage": MISSING_FIELDS_MESSAGE }));
    }

    #[tokio::test]
    async fn test_not_found_renders_message_key() {
        let (status, body) = body_json(AppError::user_not_found()).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({ "message": USER_NOT_FOUND_MESSAGE }));
    }

    #[tokio::test]
    async fn test_internal_renders_error_key() {
        let (status, body) = body_json(AppError::internal("boom")).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({ "error": "boom" }));
    }
}
