pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::generation::handlers::handle_generar;
use crate::knowledge::handlers::{handle_get_conocimiento, handle_upload};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/generar", post(handle_generar))
        .route("/upload", post(handle_upload))
        .route("/conocimiento/:area", get(handle_get_conocimiento))
        .with_state(state)
}
