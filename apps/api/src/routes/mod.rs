pub mod health;
pub mod service;

use axum::{
    routing::{get, post},
    Router,
};

use crate::chat::handlers;
use crate::errors::AppError;
use crate::state::AppState;

pub const SERVICE_NAME: &str = "careergenai-chatbot";

async fn not_found() -> AppError {
    AppError::NotFound("no such endpoint".to_string())
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(service::root_handler))
        .route("/health", get(health::health_handler))
        .route("/models", get(service::models_handler))
        .route("/chat", post(handlers::handle_chat))
        .fallback(not_found)
        .with_state(state)
}
