pub mod error;
pub mod health;
pub mod submit;

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};

use intake_db::Database;

/// Shared application state for all route handlers.
#[derive(Clone)]
pub struct AppState {
    pub db: Arc<Database>,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health::health))
        .route("/submit", post(submit::submit))
        .with_state(state)
}
