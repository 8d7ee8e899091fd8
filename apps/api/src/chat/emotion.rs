//! Emotion detection. Pluggable behind `EmotionDetector` so a model-backed
//! detector can replace the keyword rules without touching the engine.
//!
//! `ChatEngine` holds an `Arc<dyn EmotionDetector>`; the default is
//! `RuleEmotionDetector`.

use async_trait::async_trait;
use serde::Serialize;

use crate::chat::contains_any;
use crate::knowledge::{Emotion, EMOTION_PROFILES};

#[derive(Debug, Clone, Serialize)]
pub struct DetectedEmotion {
    pub emotion: Emotion,
    pub confidence: f32,
    /// Empathy line to lead the reply with.
    pub response: &'static str,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct EmotionReport {
    pub emotions: Vec<DetectedEmotion>,
}

impl EmotionReport {
    pub fn primary(&self) -> Option<&DetectedEmotion> {
        self.emotions.first()
    }
}

#[async_trait]
pub trait EmotionDetector: Send + Sync {
    async fn detect(&self, message: &str) -> EmotionReport;

    /// Short backend name reported by `GET /models`.
    fn backend(&self) -> &'static str;
}

/// Keyword rules over the emotion profiles. One hit per profile, in profile
/// order, each at 0.8 confidence.
pub struct RuleEmotionDetector;

#[async_trait]
impl EmotionDetector for RuleEmotionDetector {
    async fn detect(&self, message: &str) -> EmotionReport {
        let message = message.to_lowercase();
        let emotions = EMOTION_PROFILES
            .iter()
            .filter(|p| contains_any(&message, p.keywords))
            .map(|p| DetectedEmotion {
                emotion: p.emotion,
                confidence: 0.8,
                response: p.response,
            })
            .collect();

        EmotionReport { emotions }
    }

    fn backend(&self) -> &'static str {
        "rule_based"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_primary_is_first_profile_hit() {
        let report = RuleEmotionDetector
            .detect("I'm so confused and my parents keep adding pressure")
            .await;
        assert_eq!(report.emotions.len(), 2);
        assert_eq!(report.primary().map(|e| e.emotion), Some(Emotion::Confusion));
    }

    #[tokio::test]
    async fn test_no_emotion_detected() {
        let report = RuleEmotionDetector.detect("show me the pricing").await;
        assert!(report.primary().is_none());
        assert!(report.emotions.is_empty());
    }

    #[test]
    fn test_backend_name() {
        assert_eq!(RuleEmotionDetector.backend(), "rule_based");
    }
}
