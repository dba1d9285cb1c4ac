mod handlers;
mod models;
pub mod page;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::AppState;

use handlers::{ask_form, ask_json, index, not_found};

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/ask", post(ask_form))
        .route("/api/ask", post(ask_json))
        .fallback(not_found)
        .with_state(state)
}
