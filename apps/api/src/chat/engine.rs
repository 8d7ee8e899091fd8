//! Chat engine: cache lookup, context extraction, classification, reply
//! generation and cache write for one message.

use std::sync::Arc;

use chrono::Utc;
use thiserror::Error;
use tracing::{debug, info};

use crate::chat::academic::extract_academic_info;
use crate::chat::cache::ResponseCache;
use crate::chat::context::{extract_query_context, find_relevant_knowledge};
use crate::chat::emotion::EmotionDetector;
use crate::chat::intent::classify;
use crate::chat::models::{ChatResponse, ResponseMetadata};
use crate::chat::normalize;
use crate::chat::responder::{generate, suggestions};
use crate::knowledge::KnowledgeBase;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("response cache lock poisoned")]
    CachePoisoned,
}

pub struct ChatEngine {
    knowledge: Arc<KnowledgeBase>,
    cache: ResponseCache,
    emotion_detector: Arc<dyn EmotionDetector>,
}

impl ChatEngine {
    pub fn new(
        knowledge: Arc<KnowledgeBase>,
        cache: ResponseCache,
        emotion_detector: Arc<dyn EmotionDetector>,
    ) -> Self {
        Self {
            knowledge,
            cache,
            emotion_detector,
        }
    }

    pub fn knowledge(&self) -> &KnowledgeBase {
        &self.knowledge
    }

    pub fn cache(&self) -> &ResponseCache {
        &self.cache
    }

    pub fn emotion_backend(&self) -> &'static str {
        self.emotion_detector.backend()
    }

    /// Produces the response for one (already validated) message.
    pub async fn respond(
        &self,
        message: &str,
        user_id: Option<String>,
    ) -> Result<ChatResponse, EngineError> {
        let key = normalize(message);

        if let Some(mut cached) = self.cache.get(&key)? {
            info!(message = %preview(message), "cache hit");
            cached.metadata.timestamp = Utc::now();
            cached.metadata.cache_hit = true;
            cached.metadata.user_id = user_id;
            return Ok(cached);
        }

        info!(message = %preview(message), "processing message");

        let kb = self.knowledge.as_ref();
        let emotions = self.emotion_detector.detect(&key).await;

        let mut ctx = extract_query_context(kb, &key);
        ctx.emotions = emotions.emotions.iter().map(|e| e.emotion).collect();
        let academic = extract_academic_info(&key);
        let knowledge = find_relevant_knowledge(kb, &ctx, &key);
        debug!(
            info_needed = ?ctx.info_needed,
            requests = ?ctx.requests,
            service = ?ctx.service,
            "query context"
        );
        if let Some(primary) = emotions.primary() {
            debug!(
                emotion = primary.emotion.key(),
                confidence = primary.confidence,
                count = emotions.emotions.len(),
                "emotion detected"
            );
        }

        let result = classify(&key, &ctx, &academic, knowledge);
        debug!(
            intent = %result.intent,
            confidence = result.confidence,
            rule = result.rule,
            service = ?result.service,
            "classified"
        );

        let reply = generate(kb, &key, &result, &ctx, &emotions);

        let response = ChatResponse {
            reply: reply.text,
            confidence: reply.confidence,
            intent: result.intent.as_str().to_string(),
            suggestions: suggestions(result.intent),
            metadata: ResponseMetadata {
                timestamp: Utc::now(),
                model_used: reply.model_used.to_string(),
                user_id,
                cache_hit: false,
            },
        };

        if result.intent.is_cacheable() {
            self.cache.put(key, response.clone())?;
        }

        Ok(response)
    }
}

/// First 50 characters, for log lines.
fn preview(message: &str) -> String {
    message.chars().take(50).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat::emotion::RuleEmotionDetector;
    use crate::knowledge::templates;

    fn engine(cache_enabled: bool) -> ChatEngine {
        ChatEngine::new(
            Arc::new(KnowledgeBase::new("https://example.test")),
            ResponseCache::new(cache_enabled),
            Arc::new(RuleEmotionDetector),
        )
    }

    #[tokio::test]
    async fn test_hello_is_greeting() {
        let resp = engine(true).respond("hello", None).await.unwrap();
        assert_eq!(resp.intent, "greeting");
        assert!((resp.confidence - 0.95).abs() < f32::EPSILON);
        assert_eq!(resp.reply, templates::GREETING);
        assert!(!resp.metadata.cache_hit);
    }

    #[tokio::test]
    async fn test_gibberish_gets_welcome() {
        let resp = engine(true).respond("asdkjasd", None).await.unwrap();
        assert_eq!(resp.intent, "universal_query");
        assert!((resp.confidence - 0.6).abs() < f32::EPSILON);
        assert!(resp.reply.starts_with("🌟 **Welcome to CareerGenAI"));
    }

    #[tokio::test]
    async fn test_academic_message() {
        let resp = engine(true)
            .respond("I got 92% and want engineering colleges in Mumbai", None)
            .await
            .unwrap();
        assert_eq!(resp.intent, "academic_guidance");
        assert!(resp.reply.contains("IIT Bombay"));
        assert!(resp.reply.contains("VJTI Mumbai"));
        assert_eq!(resp.metadata.model_used, "academic_intelligence");
    }

    #[tokio::test]
    async fn test_second_identical_message_hits_cache() {
        let engine = engine(true);
        let first = engine.respond("Hello", Some("a".into())).await.unwrap();
        let second = engine.respond("  hello ", Some("b".into())).await.unwrap();

        assert!(!first.metadata.cache_hit);
        assert!(second.metadata.cache_hit);
        assert_eq!(first.reply, second.reply);
        assert_eq!(second.metadata.user_id.as_deref(), Some("b"));
        assert_eq!(engine.cache().len().unwrap(), 1);
    }

    #[tokio::test]
    async fn test_every_cacheable_intent_hits_on_repeat() {
        let engine = engine(true);
        let cases = [
            ("hello", "greeting"),
            ("what is the price?", "pricing_inquiry"),
            ("what is your phone number", "contact_inquiry"),
            ("tell me about the premium resume builder", "universal_service_query"),
        ];
        for (message, intent) in cases {
            let first = engine.respond(message, None).await.unwrap();
            let second = engine.respond(message, None).await.unwrap();
            assert_eq!(first.intent, intent);
            assert!(!first.metadata.cache_hit, "{message}");
            assert!(second.metadata.cache_hit, "{message}");
            assert_eq!(first.reply, second.reply);
            assert_eq!(first.intent, second.intent);
        }
        assert_eq!(engine.cache().len().unwrap(), cases.len());
    }

    #[tokio::test]
    async fn test_academic_replies_are_not_cached() {
        let engine = engine(true);
        engine.respond("I scored 85 in boards", None).await.unwrap();
        assert_eq!(engine.cache().len().unwrap(), 0);
    }

    #[tokio::test]
    async fn test_disabled_cache_never_hits() {
        let engine = engine(false);
        engine.respond("hello", None).await.unwrap();
        let second = engine.respond("hello", None).await.unwrap();
        assert!(!second.metadata.cache_hit);
    }

    #[tokio::test]
    async fn test_emotional_message_leads_with_profile() {
        let resp = engine(true).respond("I am so worried", None).await.unwrap();
        assert_eq!(resp.intent, "emotional_support");
        assert!(resp.reply.starts_with("🤗 I understand you're feeling anxious"));
    }

    #[tokio::test]
    async fn test_service_query_for_resume() {
        let resp = engine(true)
            .respond("Tell me about the premium resume builder", None)
            .await
            .unwrap();
        assert_eq!(resp.intent, "universal_service_query");
        assert!(resp.reply.contains("Premium Resume Builder"));
        assert_eq!(
            resp.suggestions,
            vec![
                "How do I get started?",
                "What's the pricing?",
                "Tell me about career assessment"
            ]
        );
    }
}
