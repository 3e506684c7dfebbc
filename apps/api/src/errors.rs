use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::llm_client::LlmError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// The payload shape is `{"error": "<message>"}` — the contract the original
/// service exposed and that its frontend still expects.
#[derive(Debug, Error)]
pub enum AppError {
    /// Unknown `area_solicitada`. The message is the literal the clients
    /// match on, so it stays in Spanish.
    #[error("Área no válida")]
    InvalidArea,

    #[error("Falta el área de conocimiento")]
    MissingAreaKey,

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Knowledge write failed: {0}")]
    KnowledgeWrite(String),

    /// The external generation call failed. The underlying message is
    /// surfaced verbatim; there is no retry.
    #[error("{0}")]
    Generation(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl From<LlmError> for AppError {
    fn from(e: LlmError) -> Self {
        AppError::Generation(e.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::InvalidArea => (StatusCode::BAD_REQUEST, self.to_string()),
            AppError::MissingAreaKey => (StatusCode::BAD_REQUEST, self.to_string()),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            AppError::KnowledgeWrite(msg) => {
                tracing::error!("Knowledge write error: {msg}");
                (StatusCode::INTERNAL_SERVER_ERROR, msg.clone())
            }
            AppError::Generation(msg) => {
                tracing::error!("Generation error: {msg}");
                (StatusCode::BAD_GATEWAY, msg.clone())
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Error interno del servidor".to_string(),
                )
            }
        };

        let body = Json(json!({ "error": message }));

        (status, body).into_response()
    }
}
