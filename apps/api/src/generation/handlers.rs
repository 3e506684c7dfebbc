//! Axum route handlers for the generation API.

use axum::{extract::State, Json};
use serde_json::Value;

use crate::errors::AppError;
use crate::generation::generator::{generate_ideas, GenerateRequest};
use crate::state::AppState;

/// POST /generar
///
/// Composes the instruction document for the requested area and forwards
/// the generation result verbatim as `{"<area>": text}`.
pub async fn handle_generar(
    State(state): State<AppState>,
    Json(request): Json<GenerateRequest>,
) -> Result<Json<Value>, AppError> {
    let result = generate_ideas(state.llm.as_ref(), state.strategy.as_ref(), request).await?;
    Ok(Json(result))
}
