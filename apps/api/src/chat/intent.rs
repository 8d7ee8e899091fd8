//! Intent classification as an explicit ordered rule table. The first rule
//! whose trigger fires decides the intent and confidence.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::chat::academic::AcademicInfo;
use crate::chat::contains_any;
use crate::chat::context::{QueryContext, RelevantKnowledge};
use crate::knowledge::Service;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    AcademicGuidance,
    UniversalServiceQuery,
    Greeting,
    WebsiteInfoQuery,
    PricingInquiry,
    ContactInquiry,
    EmotionalSupport,
    ProcessInquiry,
    ComparisonQuery,
    InformationQuery,
    UniversalQuery,
    ErrorFallback,
}

impl Intent {
    pub fn as_str(&self) -> &'static str {
        match self {
            Intent::AcademicGuidance => "academic_guidance",
            Intent::UniversalServiceQuery => "universal_service_query",
            Intent::Greeting => "greeting",
            Intent::WebsiteInfoQuery => "website_info_query",
            Intent::PricingInquiry => "pricing_inquiry",
            Intent::ContactInquiry => "contact_inquiry",
            Intent::EmotionalSupport => "emotional_support",
            Intent::ProcessInquiry => "process_inquiry",
            Intent::ComparisonQuery => "comparison_query",
            Intent::InformationQuery => "information_query",
            Intent::UniversalQuery => "universal_query",
            Intent::ErrorFallback => "error_fallback",
        }
    }

    /// Replies for these intents are identical for identical messages.
    pub fn is_cacheable(&self) -> bool {
        matches!(
            self,
            Intent::UniversalServiceQuery
                | Intent::PricingInquiry
                | Intent::ContactInquiry
                | Intent::Greeting
        )
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct IntentResult {
    pub intent: Intent,
    pub confidence: f32,
    pub service: Option<Service>,
    pub academic: Option<AcademicInfo>,
    pub knowledge: RelevantKnowledge,
    /// Name of the rule that fired.
    pub rule: &'static str,
}

// ────────────────────────────────────────────────────────────────────────────
// Rule table
// ────────────────────────────────────────────────────────────────────────────

const ACADEMIC_INDICATORS: &[&str] = &[
    "percentage",
    "marks",
    "score",
    "got",
    "scored",
    "which college",
    "college recommendation",
    "admission",
    "cutoff",
    "eligibility",
];

/// Multi-word phrases that name a service even when the keyword scan missed.
const SERVICE_PHRASES: &[(&str, Service)] = &[
    ("resume building", Service::ResumeBuilder),
    ("build resume", Service::ResumeBuilder),
    ("create resume", Service::ResumeBuilder),
    ("resume maker", Service::ResumeBuilder),
    ("cv builder", Service::ResumeBuilder),
    ("cv maker", Service::ResumeBuilder),
    ("resume template", Service::ResumeBuilder),
    ("professional resume", Service::ResumeBuilder),
    ("premium resume", Service::PremiumResume),
    ("premium resume builder", Service::PremiumResume),
    ("advanced resume", Service::PremiumResume),
    ("ai resume", Service::PremiumResume),
    ("ai-powered resume", Service::PremiumResume),
    ("career test", Service::CareerAssessment),
    ("career quiz", Service::CareerAssessment),
    ("career match", Service::CareerAssessment),
    ("find career", Service::CareerAssessment),
    ("career suggestions", Service::CareerAssessment),
    ("interest test", Service::CareerAssessment),
    ("personality test", Service::PersonalityQuiz),
    ("personality type", Service::PersonalityQuiz),
    ("work style", Service::PersonalityQuiz),
    ("profile building", Service::ProfileBuilder),
    ("profile building help", Service::ProfileBuilder),
    ("build profile", Service::ProfileBuilder),
    ("student profile", Service::ProfileBuilder),
    ("career profile", Service::ProfileBuilder),
    ("create profile", Service::ProfileBuilder),
    ("need profile", Service::ProfileBuilder),
    ("college search", Service::TopColleges),
    ("find colleges", Service::TopColleges),
    ("college finder", Service::TopColleges),
    ("university search", Service::TopColleges),
    ("college database", Service::TopColleges),
    ("top colleges", Service::TopColleges),
    ("career counseling", Service::CareerCounselling),
    ("career guidance", Service::CareerCounselling),
    ("expert advice", Service::CareerCounselling),
    ("counselor", Service::CareerCounselling),
    ("career advisor", Service::CareerCounselling),
    ("compare careers", Service::CareerComparison),
    ("career comparison", Service::CareerComparison),
    ("career vs", Service::CareerComparison),
    ("career roadmap", Service::CareerRoadmaps),
    ("career path", Service::CareerRoadmaps),
    ("career guide", Service::CareerRoadmaps),
    ("roadmap", Service::CareerRoadmaps),
    ("career plan", Service::CareerRoadmaps),
    ("chatbot", Service::AiChatbot),
    ("ai assistant", Service::AiChatbot),
    ("chat support", Service::AiChatbot),
];

enum Trigger {
    /// Any academic attribute, or an academic indicator keyword.
    Academic,
    /// The context extractor identified a service.
    DetectedService,
    /// A phrase from `SERVICE_PHRASES` appears in the message.
    ServicePhrase,
    Keywords(&'static [&'static str]),
}

struct Rule {
    name: &'static str,
    trigger: Trigger,
    intent: Intent,
    confidence: f32,
}

const RULES: &[Rule] = &[
    Rule {
        name: "academic",
        trigger: Trigger::Academic,
        intent: Intent::AcademicGuidance,
        confidence: 0.95,
    },
    Rule {
        name: "detected_service",
        trigger: Trigger::DetectedService,
        intent: Intent::UniversalServiceQuery,
        // raised to the knowledge confidence when that is higher
        confidence: 0.85,
    },
    Rule {
        name: "service_phrase",
        trigger: Trigger::ServicePhrase,
        intent: Intent::UniversalServiceQuery,
        confidence: 0.95,
    },
    Rule {
        name: "greeting",
        trigger: Trigger::Keywords(&[
            "hello",
            "hi",
            "hey",
            "good morning",
            "good afternoon",
            "good evening",
            "namaste",
        ]),
        intent: Intent::Greeting,
        confidence: 0.95,
    },
    Rule {
        name: "website_info",
        trigger: Trigger::Keywords(&["about", "company", "team", "mission", "vision", "founded"]),
        intent: Intent::WebsiteInfoQuery,
        confidence: 0.85,
    },
    Rule {
        name: "pricing",
        trigger: Trigger::Keywords(&[
            "price",
            "cost",
            "pricing",
            "plan",
            "plans",
            "subscription",
            "premium",
            "how much",
            "fees",
            "charges",
            "payment",
            "free",
            "paid",
        ]),
        intent: Intent::PricingInquiry,
        confidence: 0.9,
    },
    Rule {
        name: "contact",
        trigger: Trigger::Keywords(&[
            "contact",
            "phone",
            "call",
            "support",
            "number",
            "reach",
            "talk",
            "help desk",
        ]),
        intent: Intent::ContactInquiry,
        confidence: 0.9,
    },
    Rule {
        name: "emotional",
        trigger: Trigger::Keywords(&[
            "worried",
            "anxious",
            "scared",
            "confused",
            "lost",
            "disappointed",
            "pressure",
            "stressed",
            "don't know what to do",
            "help me",
            "frustrated",
        ]),
        intent: Intent::EmotionalSupport,
        confidence: 0.8,
    },
    Rule {
        name: "process",
        trigger: Trigger::Keywords(&[
            "how to",
            "how can",
            "how do",
            "steps",
            "process",
            "procedure",
            "guide",
        ]),
        intent: Intent::ProcessInquiry,
        confidence: 0.8,
    },
    Rule {
        name: "comparison",
        trigger: Trigger::Keywords(&[
            "vs",
            "versus",
            "compare",
            "difference",
            "better",
            "which is",
            "which should",
        ]),
        intent: Intent::ComparisonQuery,
        confidence: 0.8,
    },
    Rule {
        name: "services_general",
        trigger: Trigger::Keywords(&[
            "services",
            "what do you offer",
            "what can you do",
            "features",
            "tools",
            "help with",
        ]),
        intent: Intent::UniversalServiceQuery,
        confidence: 0.85,
    },
    Rule {
        name: "information",
        trigger: Trigger::Keywords(&[
            "what is",
            "tell me about",
            "information",
            "details",
            "explain",
            "describe",
        ]),
        intent: Intent::InformationQuery,
        confidence: 0.7,
    },
];

/// Classifies a lower-cased message. Always returns exactly one result.
pub fn classify(
    message: &str,
    ctx: &QueryContext,
    academic: &AcademicInfo,
    knowledge: RelevantKnowledge,
) -> IntentResult {
    for rule in RULES {
        let mut service = None;
        let mut confidence = rule.confidence;

        let fired = match rule.trigger {
            Trigger::Academic => {
                academic.is_academic() || contains_any(message, ACADEMIC_INDICATORS)
            }
            Trigger::DetectedService => {
                service = ctx.service;
                confidence = confidence.max(knowledge.confidence);
                service.is_some()
            }
            Trigger::ServicePhrase => {
                service = SERVICE_PHRASES
                    .iter()
                    .find(|(phrase, _)| message.contains(phrase))
                    .map(|(_, s)| *s);
                service.is_some()
            }
            Trigger::Keywords(words) => contains_any(message, words),
        };

        if fired {
            return IntentResult {
                intent: rule.intent,
                confidence,
                service,
                academic: matches!(rule.intent, Intent::AcademicGuidance)
                    .then(|| academic.clone()),
                knowledge,
                rule: rule.name,
            };
        }
    }

    IntentResult {
        intent: Intent::UniversalQuery,
        confidence: 0.6,
        service: None,
        academic: None,
        knowledge,
        rule: "default",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat::academic::extract_academic_info;
    use crate::chat::context::{extract_query_context, find_relevant_knowledge};
    use crate::knowledge::KnowledgeBase;

    fn run(message: &str) -> IntentResult {
        let kb = KnowledgeBase::new("https://example.test");
        let msg = crate::chat::normalize(message);
        let ctx = extract_query_context(&kb, &msg);
        let academic = extract_academic_info(&msg);
        let knowledge = find_relevant_knowledge(&kb, &ctx, &msg);
        classify(&msg, &ctx, &academic, knowledge)
    }

    #[test]
    fn test_greeting() {
        let r = run("hello");
        assert_eq!(r.intent, Intent::Greeting);
        assert!((r.confidence - 0.95).abs() < f32::EPSILON);
    }

    #[test]
    fn test_gibberish_falls_to_default() {
        let r = run("asdkjasd");
        assert_eq!(r.intent, Intent::UniversalQuery);
        assert!((r.confidence - 0.6).abs() < f32::EPSILON);
        assert_eq!(r.rule, "default");
    }

    #[test]
    fn test_academic_takes_priority() {
        let r = run("I got 92% and want engineering colleges in Mumbai");
        assert_eq!(r.intent, Intent::AcademicGuidance);
        let academic = r.academic.expect("academic info attached");
        assert_eq!(academic.percentage, Some(92.0));
    }

    #[test]
    fn test_detected_service_uses_knowledge_confidence() {
        let r = run("premium resume builder");
        assert_eq!(r.intent, Intent::UniversalServiceQuery);
        assert_eq!(r.service, Some(Service::PremiumResume));
        assert!((r.confidence - 0.9).abs() < f32::EPSILON);
        assert_eq!(r.rule, "detected_service");
    }

    #[test]
    fn test_service_phrase_when_keyword_scan_misses() {
        // "career suggestions" is a phrase but not a service keyword
        let r = run("career suggestions");
        assert_eq!(r.intent, Intent::UniversalServiceQuery);
        assert_eq!(r.service, Some(Service::CareerAssessment));
        assert_eq!(r.rule, "service_phrase");
    }

    #[test]
    fn test_pricing_and_contact() {
        assert_eq!(run("what is the price").intent, Intent::PricingInquiry);
        assert_eq!(run("what is your phone number").intent, Intent::ContactInquiry);
    }

    #[test]
    fn test_emotional_support() {
        let r = run("I am so worried");
        assert_eq!(r.intent, Intent::EmotionalSupport);
        assert!((r.confidence - 0.8).abs() < f32::EPSILON);
    }

    #[test]
    fn test_cacheable_intents() {
        assert!(Intent::Greeting.is_cacheable());
        assert!(Intent::PricingInquiry.is_cacheable());
        assert!(Intent::ContactInquiry.is_cacheable());
        assert!(Intent::UniversalServiceQuery.is_cacheable());
        assert!(!Intent::AcademicGuidance.is_cacheable());
        assert!(!Intent::UniversalQuery.is_cacheable());
    }
}
