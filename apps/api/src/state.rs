use std::sync::Arc;

use crate::chat::cache::ResponseCache;
use crate::chat::emotion::RuleEmotionDetector;
use crate::chat::engine::ChatEngine;
use crate::config::Config;
use crate::knowledge::KnowledgeBase;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Knowledge base, response cache and emotion detector. Shared by all requests.
    pub engine: Arc<ChatEngine>,
}

impl AppState {
    pub fn from_config(config: Config) -> Self {
        let knowledge = Arc::new(KnowledgeBase::new(&config.frontend_base_url));
        let cache = ResponseCache::new(config.response_cache_enabled);
        let engine = ChatEngine::new(knowledge, cache, Arc::new(RuleEmotionDetector));

        AppState {
            config,
            engine: Arc::new(engine),
        }
    }
}
