use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// Every kind is terminal for the current request: nothing is retried
/// internally and no partial itinerary is ever returned.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    /// Required input fields missing or malformed; caught before any
    /// external call.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Missing service credential.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// The model returned text that could not be interpreted as an
    /// itinerary. Carries the offending text for logging; the caller only
    /// sees a generic message.
    #[error("Invalid response from model: {0}")]
    ModelResponse(String),

    /// The call to the external model failed outright.
    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg.clone()),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::Configuration(msg) => {
                tracing::error!("Configuration error: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "CONFIGURATION_ERROR",
                    msg.clone(),
                )
            }
            AppError::ModelResponse(raw) => {
                // Log the raw model output for diagnosis; never echo it back.
                tracing::error!("Unparseable model response: {raw}");
                (
                    StatusCode::BAD_GATEWAY,
                    "MODEL_RESPONSE_ERROR",
                    "Invalid response from model".to_string(),
                )
            }
            AppError::Transport(msg) => {
                tracing::error!("Model transport error: {msg}");
                (StatusCode::BAD_GATEWAY, "TRANSPORT_ERROR", msg.clone())
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}
