use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Emotion {
    Anxiety,
    Confusion,
    Disappointment,
    Pressure,
    Excitement,
}

impl Emotion {
    pub fn key(&self) -> &'static str {
        match self {
            Emotion::Anxiety => "anxiety",
            Emotion::Confusion => "confusion",
            Emotion::Disappointment => "disappointment",
            Emotion::Pressure => "pressure",
            Emotion::Excitement => "excitement",
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct EmotionProfile {
    pub emotion: Emotion,
    pub keywords: &'static [&'static str],
    pub response: &'static str,
}

/// Checked in order; the first profile with a keyword hit is the primary emotion.
pub const EMOTION_PROFILES: &[EmotionProfile] = &[
    EmotionProfile {
        emotion: Emotion::Anxiety,
        keywords: &["worried", "anxious", "scared", "nervous", "stressed", "tension"],
        response: "🤗 I understand you're feeling anxious about your future. This is completely normal - most students feel this way. Take a deep breath. Let's work through this together step by step.",
    },
    EmotionProfile {
        emotion: Emotion::Confusion,
        keywords: &["confused", "don't know", "lost", "unclear", "mixed up"],
        response: "💭 Feeling confused about your career path is very common. You're not alone in this. Let's break down your options and find clarity together.",
    },
    EmotionProfile {
        emotion: Emotion::Disappointment,
        keywords: &["disappointed", "sad", "upset", "failed", "didn't get"],
        response: "💙 I can sense you're disappointed. Remember, one setback doesn't define your entire future. There are always multiple paths to success.",
    },
    EmotionProfile {
        emotion: Emotion::Pressure,
        keywords: &["pressure", "parents", "family", "expectations", "forced"],
        response: "🫂 Family pressure can be overwhelming. Remember, this is YOUR life and career. Let's find a path that balances your interests with practical considerations.",
    },
    EmotionProfile {
        emotion: Emotion::Excitement,
        keywords: &["excited", "happy", "thrilled", "amazing", "awesome"],
        response: "🎉 I love your enthusiasm! This positive energy will take you far. Let's channel this excitement into making the best decisions for your future.",
    },
];
