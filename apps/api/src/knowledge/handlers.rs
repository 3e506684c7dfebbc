//! Axum route handlers for the knowledge API.

use axum::{
    extract::{Path, State},
    Form, Json,
};
use chrono::Utc;
use serde::Serialize;
use tracing::warn;

use crate::errors::AppError;
use crate::knowledge::normalizer::{normalize, UploadForm};
use crate::knowledge::record::KnowledgeRecord;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub status: &'static str,
    pub message: String,
}

/// POST /upload
///
/// Always answers `{"status": "success"|"error", "message": …}` — the upload
/// form treats the response as data, not as an HTTP failure.
pub async fn handle_upload(
    State(state): State<AppState>,
    Form(form): Form<UploadForm>,
) -> Json<UploadResponse> {
    match process_upload(&state, &form).await {
        Ok(area) => Json(UploadResponse {
            status: "success",
            message: format!("Conocimiento del área '{area}' guardado correctamente"),
        }),
        Err(e) => {
            warn!("Upload failed: {e}");
            Json(UploadResponse {
                status: "error",
                message: e.to_string(),
            })
        }
    }
}

async fn process_upload(state: &AppState, form: &UploadForm) -> Result<String, AppError> {
    let record = normalize(form, Utc::now())?;
    state.store.put(&record.area, &record).await?;
    Ok(record.area.clone())
}

/// GET /conocimiento/:area
pub async fn handle_get_conocimiento(
    State(state): State<AppState>,
    Path(area): Path<String>,
) -> Result<Json<KnowledgeRecord>, AppError> {
    let record = state.store.get(&area).await?;
    Ok(Json(record))
}
