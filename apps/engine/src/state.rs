use std::sync::Arc;

use crate::extract::Extractor;

/// Shared application state injected into all route handlers via Axum
/// extractors. The extractor is an immutable registry of interpreters —
/// each request runs it into its own fresh record, so no locking is needed.
#[derive(Clone)]
pub struct AppState {
    pub extractor: Arc<Extractor>,
}
