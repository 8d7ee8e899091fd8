use axum::{extract::State, Json};
use chrono::Utc;
use serde_json::{json, Value};

use crate::errors::AppError;
use crate::state::AppState;

/// GET /health
/// Liveness plus cache occupancy and knowledge base size.
pub async fn health_handler(State(state): State<AppState>) -> Result<Json<Value>, AppError> {
    let engine = &state.engine;
    let cache_size = engine.cache().len().map_err(anyhow::Error::from)?;

    Ok(Json(json!({
        "status": "healthy",
        "timestamp": Utc::now(),
        "version": env!("CARGO_PKG_VERSION"),
        "service": super::SERVICE_NAME,
        "cache_size": cache_size,
        "cache_enabled": engine.cache().is_enabled(),
        "services_supported": engine.knowledge().summary().services_supported,
    })))
}
