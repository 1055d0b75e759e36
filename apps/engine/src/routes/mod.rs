pub mod health;
pub mod process;

use axum::{
    routing::{get, post},
    Router,
};

use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/process-cv", post(process::handle_process_text))
        .route("/process-cv/upload", post(process::handle_process_upload))
        .with_state(state)
}
