//! Query context: which service the message names, what kind of information
//! it wants, and what sort of request it is.

use serde::Serialize;

use crate::chat::contains_any;
use crate::knowledge::{Emotion, KnowledgeBase, Service};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InfoType {
    Pricing,
    Process,
    Features,
    Comparison,
    Contact,
    About,
}

impl InfoType {
    pub const ALL: [InfoType; 6] = [
        InfoType::Pricing,
        InfoType::Process,
        InfoType::Features,
        InfoType::Comparison,
        InfoType::Contact,
        InfoType::About,
    ];

    fn keywords(&self) -> &'static [&'static str] {
        match self {
            InfoType::Pricing => &[
                "price",
                "cost",
                "fee",
                "charge",
                "plan",
                "subscription",
                "how much",
                "pricing",
            ],
            InfoType::Process => &["how to", "process", "steps", "procedure", "how does", "how can"],
            InfoType::Features => &["features", "what does", "capabilities", "what can", "benefits"],
            InfoType::Comparison => &["vs", "versus", "compare", "difference", "better", "which is"],
            InfoType::Contact => &["contact", "phone", "call", "reach", "support", "help desk"],
            InfoType::About => &["about", "what is", "tell me about", "information about", "details"],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RequestTag {
    NeedHelp,
    Recommendation,
    Explanation,
    Comparison,
}

impl RequestTag {
    pub const ALL: [RequestTag; 4] = [
        RequestTag::NeedHelp,
        RequestTag::Recommendation,
        RequestTag::Explanation,
        RequestTag::Comparison,
    ];

    fn keywords(&self) -> &'static [&'static str] {
        match self {
            RequestTag::NeedHelp => &["i need", "i want", "i require", "help me", "assist me"],
            RequestTag::Recommendation => &["recommend", "suggest", "advice", "guidance", "what should"],
            RequestTag::Explanation => &["explain", "how", "why", "what", "tell me"],
            RequestTag::Comparison => &["compare", "which is better", "difference between"],
        }
    }
}

/// Per-request hints. Built fresh for every message and dropped with it.
#[derive(Debug, Clone, Default, Serialize)]
pub struct QueryContext {
    pub service: Option<Service>,
    pub info_needed: Vec<InfoType>,
    pub requests: Vec<RequestTag>,
    /// Filled by the engine from the emotion detector.
    pub emotions: Vec<Emotion>,
}

impl QueryContext {
    pub fn wants(&self, info: InfoType) -> bool {
        self.info_needed.contains(&info)
    }
}

/// Builds the context for a lower-cased message.
pub fn extract_query_context(kb: &KnowledgeBase, message: &str) -> QueryContext {
    QueryContext {
        service: detect_service(kb, message),
        info_needed: InfoType::ALL
            .into_iter()
            .filter(|t| contains_any(message, t.keywords()))
            .collect(),
        requests: RequestTag::ALL
            .into_iter()
            .filter(|t| contains_any(message, t.keywords()))
            .collect(),
        emotions: Vec::new(),
    }
}

/// Longest matching keyword wins; equal lengths go to the more specific
/// service.
pub fn detect_service(kb: &KnowledgeBase, message: &str) -> Option<Service> {
    kb.services()
        .iter()
        .flat_map(|entry| {
            entry
                .keywords
                .iter()
                .filter(|kw| message.contains(**kw))
                .map(move |kw| (kw.len(), entry.service.specificity(), entry.service))
        })
        .max_by_key(|(len, rank, _)| (*len, *rank))
        .map(|(_, _, service)| service)
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct RelevantKnowledge {
    pub service: Option<Service>,
    pub confidence: f32,
}

/// Best service for the message. A directly detected service scores 0.9;
/// otherwise each service is scored by keyword hits plus a bonus when its
/// description or a feature name appears verbatim.
pub fn find_relevant_knowledge(
    kb: &KnowledgeBase,
    ctx: &QueryContext,
    message: &str,
) -> RelevantKnowledge {
    if let Some(service) = ctx.service {
        return RelevantKnowledge {
            service: Some(service),
            confidence: 0.9,
        };
    }

    let mut best = RelevantKnowledge::default();
    let mut best_hits = 0u32;

    for entry in kb.services() {
        let mut hits = entry
            .keywords
            .iter()
            .filter(|kw| message.contains(**kw))
            .count() as u32;

        let mentions_detail = message.contains(&entry.description.to_lowercase())
            || entry
                .features
                .iter()
                .any(|f| message.contains(&f.to_lowercase()));
        if mentions_detail {
            hits += 2;
        }

        // strictly greater: earlier services win ties
        if hits > best_hits {
            best_hits = hits;
            best = RelevantKnowledge {
                service: Some(entry.service),
                confidence: (hits as f32 * 0.2).min(0.9),
            };
        }
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kb() -> KnowledgeBase {
        KnowledgeBase::new("https://example.test")
    }

    #[test]
    fn test_longest_keyword_wins() {
        let kb = kb();
        assert_eq!(
            detect_service(&kb, "i need a premium resume builder"),
            Some(Service::PremiumResume)
        );
        assert_eq!(
            detect_service(&kb, "can you fix my resume"),
            Some(Service::ResumeBuilder)
        );
        assert_eq!(detect_service(&kb, "asdkjasd"), None);
    }

    #[test]
    fn test_equal_length_prefers_specificity() {
        let kb = kb();
        // "career path" (career_roadmaps) and "career test" (career_assessment)
        // are both 11 characters
        assert_eq!(
            detect_service(&kb, "career path or career test"),
            Some(Service::CareerRoadmaps)
        );
    }

    #[test]
    fn test_info_types_and_requests_collected() {
        let kb = kb();
        let ctx = extract_query_context(&kb, "how much does it cost and how to compare");
        assert!(ctx.wants(InfoType::Pricing));
        assert!(ctx.wants(InfoType::Process));
        assert!(ctx.wants(InfoType::Comparison));
        assert!(!ctx.wants(InfoType::Contact));
        assert!(ctx.requests.contains(&RequestTag::Explanation));
        assert!(ctx.requests.contains(&RequestTag::Comparison));
        assert!(!ctx.requests.contains(&RequestTag::NeedHelp));
    }

    #[test]
    fn test_direct_match_has_fixed_confidence() {
        let kb = kb();
        let ctx = extract_query_context(&kb, "tell me about the roadmap");
        let rk = find_relevant_knowledge(&kb, &ctx, "tell me about the roadmap");
        assert_eq!(rk.service, Some(Service::CareerRoadmaps));
        assert!((rk.confidence - 0.9).abs() < f32::EPSILON);
    }

    #[test]
    fn test_feature_mention_scores_without_keyword() {
        let kb = kb();
        let msg = "does it have milestone tracking";
        let ctx = QueryContext::default();
        let rk = find_relevant_knowledge(&kb, &ctx, msg);
        assert_eq!(rk.service, Some(Service::CareerRoadmaps));
        assert!((rk.confidence - 0.4).abs() < 1e-6);
    }

    #[test]
    fn test_no_knowledge_for_gibberish() {
        let kb = kb();
        let rk = find_relevant_knowledge(&kb, &QueryContext::default(), "qqq zzz");
        assert_eq!(rk.service, None);
        assert_eq!(rk.confidence, 0.0);
    }
}
