use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::knowledge::Service;
use crate::state::AppState;

/// GET /
pub async fn root_handler(State(state): State<AppState>) -> Json<Value> {
    let engine = &state.engine;
    let summary = engine.knowledge().summary();

    Json(json!({
        "name": super::SERVICE_NAME,
        "status": "running",
        "version": env!("CARGO_PKG_VERSION"),
        "services_supported": summary.services_supported,
        "services": Service::ALL.iter().map(|s| s.key()).collect::<Vec<_>>(),
        "cities_with_colleges": summary.cities_with_colleges,
        "cache_enabled": state.config.response_cache_enabled,
        "frontend": engine.knowledge().base_url(),
        "endpoints": {
            "chat": "POST /chat",
            "health": "GET /health",
            "models": "GET /models",
        },
    }))
}

/// GET /models
/// No model is loaded; replies come from the rule-based pipeline.
pub async fn models_handler(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "ai_models_loaded": [],
        "ai_status": "legacy_mode",
        "emotion_backend": state.engine.emotion_backend(),
    }))
}
