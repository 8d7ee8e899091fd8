use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::chat::intent::Intent;
use crate::chat::responder::suggestions;
use crate::knowledge::templates;

/// POST /chat body.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatRequest {
    pub message: String,
    #[serde(default)]
    pub user_id: Option<String>,
    /// Accepted for compatibility; not used by the responder.
    #[allow(dead_code)]
    #[serde(default)]
    pub context: Option<Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseMetadata {
    pub timestamp: DateTime<Utc>,
    pub model_used: String,
    pub user_id: Option<String>,
    pub cache_hit: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatResponse {
    pub reply: String,
    pub confidence: f32,
    pub intent: String,
    pub suggestions: Vec<String>,
    pub metadata: ResponseMetadata,
}

impl ChatResponse {
    /// Low-confidence apology returned when the engine fails.
    pub fn apology(user_id: Option<String>) -> Self {
        ChatResponse {
            reply: templates::APOLOGY.to_string(),
            confidence: 0.1,
            intent: Intent::ErrorFallback.as_str().to_string(),
            suggestions: suggestions(Intent::ErrorFallback),
            metadata: ResponseMetadata {
                timestamp: Utc::now(),
                model_used: "error_fallback".to_string(),
                user_id,
                cache_hit: false,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_optional_fields() {
        let req: ChatRequest = serde_json::from_str(r#"{"message":"hi"}"#).unwrap();
        assert_eq!(req.message, "hi");
        assert!(req.user_id.is_none());
        assert!(req.context.is_none());
    }

    #[test]
    fn test_apology_shape() {
        let resp = ChatResponse::apology(Some("u1".into()));
        assert_eq!(resp.intent, "error_fallback");
        assert!((resp.confidence - 0.1).abs() < f32::EPSILON);
        assert_eq!(
            resp.suggestions,
            vec!["What services do you offer?", "Show pricing", "Contact support"]
        );
        assert_eq!(resp.metadata.user_id.as_deref(), Some("u1"));

        let json = serde_json::to_value(&resp).unwrap();
        assert_eq!(json["metadata"]["cache_hit"], false);
    }
}
