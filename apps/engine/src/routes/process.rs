use axum::extract::{Multipart, State};
use axum::Json;
use serde::Serialize;
use tracing::info;

use crate::errors::AppError;
use crate::ingest;
use crate::models::record::RecordPayload;
use crate::state::AppState;

/// Success envelope. Field names and nesting are fixed for compatibility
/// with existing consumers of the extraction service.
#[derive(Debug, Serialize)]
pub struct ProcessResponse {
    pub status: &'static str,
    pub data: RecordPayload,
}

/// POST /process-cv
/// The request body is the raw document text. The pipeline is best-effort
/// and never fails: unreadable documents produce a (partially) empty record.
pub async fn handle_process_text(
    State(state): State<AppState>,
    body: String,
) -> Json<ProcessResponse> {
    info!("Processing CV text of length {}", body.len());
    let record = state.extractor.extract(&body);
    Json(ProcessResponse {
        status: "success",
        data: RecordPayload::from(&record),
    })
}

/// POST /process-cv/upload
/// Multipart variant: the first field is the document file. PDF uploads are
/// text-extracted before interpretation.
pub async fn handle_process_upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<ProcessResponse>, AppError> {
    let field = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Ingest(format!("invalid multipart body: {e}")))?
        .ok_or_else(|| AppError::Ingest("no file field in upload".to_string()))?;

    let filename = field.file_name().unwrap_or("upload.txt").to_string();
    let bytes = field
        .bytes()
        .await
        .map_err(|e| AppError::Ingest(format!("failed to read upload: {e}")))?;

    info!("Processing uploaded CV '{filename}' ({} bytes)", bytes.len());
    let text = ingest::document_text(&filename, &bytes)?;
    let record = state.extractor.extract(&text);
    Ok(Json(ProcessResponse {
        status: "success",
        data: RecordPayload::from(&record),
    }))
}
