use axum::{extract::State, Json};
use tracing::error;

use crate::chat::models::{ChatRequest, ChatResponse};
use crate::errors::AppError;
use crate::state::AppState;

/// POST /chat
///
/// Engine failures (poisoned cache, panics) never surface as HTTP errors;
/// the caller gets the apology reply instead.
pub async fn handle_chat(
    State(state): State<AppState>,
    Json(req): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, AppError> {
    if req.message.trim().is_empty() {
        return Err(AppError::Validation("message cannot be empty".to_string()));
    }

    let engine = state.engine.clone();
    let ChatRequest {
        message, user_id, ..
    } = req;
    let task_user = user_id.clone();

    let outcome = tokio::spawn(async move { engine.respond(&message, task_user).await }).await;

    let response = match outcome {
        Ok(Ok(response)) => response,
        Ok(Err(e)) => {
            error!("chat engine error: {e}");
            ChatResponse::apology(user_id)
        }
        Err(e) => {
            error!("chat task failed: {e}");
            ChatResponse::apology(user_id)
        }
    };

    Ok(Json(response))
}
