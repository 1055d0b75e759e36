//! Document loading: turns an uploaded file into the raw text the pipeline
//! consumes. PDF bodies are text-extracted; everything else is decoded as
//! best-effort UTF-8.

use crate::errors::AppError;

pub fn document_text(filename: &str, bytes: &[u8]) -> Result<String, AppError> {
    if filename.to_lowercase().ends_with(".pdf") {
        pdf_extract::extract_text_from_mem(bytes)
            .map_err(|e| AppError::Ingest(format!("failed to extract text from '{filename}': {e}")))
    } else {
        Ok(String::from_utf8_lossy(bytes).into_owned())
    }
}
