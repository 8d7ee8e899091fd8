//! Reply selection. Maps an intent result to reply text through a layered
//! fallback chain so a usable reply is always produced.

use tracing::debug;

use crate::chat::academic::AcademicInfo;
use crate::chat::category::classify_question_category;
use crate::chat::contains_any;
use crate::chat::context::{InfoType, QueryContext};
use crate::chat::emotion::EmotionReport;
use crate::chat::guidance::academic_reply;
use crate::chat::intent::{Intent, IntentResult};
use crate::knowledge::{templates, KnowledgeBase, PricingTier, Service, ServiceEntry};

/// Replies shorter than this are treated as unusable.
pub const MIN_REPLY_CHARS: usize = 50;

#[derive(Debug, Clone)]
pub struct Reply {
    pub text: String,
    pub confidence: f32,
    pub model_used: &'static str,
}

/// Primary layer, then the universal classifier, then the welcome message.
pub fn generate(
    kb: &KnowledgeBase,
    message: &str,
    result: &IntentResult,
    ctx: &QueryContext,
    emotions: &EmotionReport,
) -> Reply {
    let (primary, model_used) = primary_reply(kb, message, result, ctx, emotions);

    if let Some(text) = primary.filter(|t| is_usable(t)) {
        return Reply {
            text,
            confidence: result.confidence,
            model_used,
        };
    }

    if let Some(text) = universal_reply(kb, message).filter(|t| is_usable(t)) {
        debug!(intent = %result.intent, "primary layer empty, using universal reply");
        return Reply {
            text,
            confidence: result.confidence.max(0.7),
            model_used: "emergency_universal",
        };
    }

    Reply {
        text: kb.render(templates::WELCOME, &[]),
        confidence: result.confidence,
        model_used: "catch_all_welcome",
    }
}

fn is_usable(text: &str) -> bool {
    text.trim().chars().count() >= MIN_REPLY_CHARS
}

fn primary_reply(
    kb: &KnowledgeBase,
    message: &str,
    result: &IntentResult,
    ctx: &QueryContext,
    emotions: &EmotionReport,
) -> (Option<String>, &'static str) {
    match result.intent {
        Intent::AcademicGuidance => {
            let info = result.academic.clone().unwrap_or_else(AcademicInfo::default);
            (Some(academic_reply(kb, &info)), "academic_intelligence")
        }
        Intent::UniversalServiceQuery => {
            let service = result.service.or(result.knowledge.service);
            (
                Some(service_reply(kb, service, ctx)),
                "universal_service_intelligence",
            )
        }
        Intent::ProcessInquiry => (Some(process_reply(kb, message)), "process_intelligence"),
        Intent::ComparisonQuery => (
            Some(comparison_reply(kb, message)),
            "comparison_intelligence",
        ),
        Intent::WebsiteInfoQuery => (
            Some(kb.render(templates::WEBSITE_INFO, &[])),
            "website_intelligence",
        ),
        Intent::EmotionalSupport => (
            Some(emotional_reply(kb, emotions)),
            "emotional_intelligence",
        ),
        Intent::PricingInquiry => (
            Some(kb.render(templates::PRICING_OVERVIEW, &[])),
            "enhanced_static",
        ),
        Intent::ContactInquiry => (Some(kb.render(templates::CONTACT, &[])), "enhanced_static"),
        Intent::Greeting => (Some(kb.render(templates::GREETING, &[])), "enhanced_static"),
        Intent::InformationQuery => (
            Some(information_reply(kb, message, result)),
            "information_intelligence",
        ),
        Intent::UniversalQuery => (universal_reply(kb, message), "universal_intelligence"),
        Intent::ErrorFallback => (None, "error_fallback"),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Service replies
// ────────────────────────────────────────────────────────────────────────────

/// Detailed reply for one service, or the catalogue when none is known.
pub fn service_reply(kb: &KnowledgeBase, service: Option<Service>, ctx: &QueryContext) -> String {
    let Some(service) = service else {
        return kb.render(templates::SERVICE_CATALOG, &[]);
    };
    let entry = kb.service(service);

    let mut parts = vec![
        format!("{} **{}**", service.emoji(), service.title()),
        format!("\n📝 **{}**", entry.description),
    ];

    if !entry.features.is_empty() {
        parts.push("\n**✨ Key Features:**".to_string());
        parts.extend(
            entry
                .features
                .iter()
                .take(4)
                .enumerate()
                .map(|(i, f)| format!("{}. **{f}**", i + 1)),
        );
    }

    if ctx.wants(InfoType::Process) || service.is_complex() {
        parts.push(format!("\n**📋 How It Works:**\n{}", entry.process));
    }

    match entry.pricing {
        PricingTier::Premium(plans) => {
            parts.push("\n**💰 Premium Pricing:**".to_string());
            parts.extend(plans.iter().map(|p| match p.badge {
                Some(badge) => format!("• **{}:** {} ({badge})", p.plan, p.price),
                None => format!("• **{}:** {}", p.plan, p.price),
            }));
        }
        PricingTier::Free => {
            parts.push("\n**🆓 Completely FREE** - No registration required!".to_string())
        }
        PricingTier::FreeConsultation => {}
    }

    if let Some(duration) = entry.duration {
        parts.push(format!("\n**⏱️ Duration:** {duration}"));
    }
    if !entry.templates.is_empty() {
        let top: Vec<&str> = entry.templates.iter().take(3).copied().collect();
        parts.push(format!("\n**🎨 Templates:** {}", top.join(", ")));
    }
    if let Some(coverage) = entry.coverage {
        parts.push(format!("\n**🌍 Coverage:** {coverage}"));
    }

    parts.push(format!("\n**🚀 Get Started:** {}", entry.url));
    parts.push(format!("\n{}", kb.render(templates::CONTACT_FOOTER, &[])));
    parts.push(format!("\n{}", next_steps(service)));

    parts.join("\n")
}

fn next_steps(service: Service) -> &'static str {
    match service {
        Service::ResumeBuilder => {
            "**💡 Next Steps:** Take Career Assessment → Build Resume → Apply to Jobs"
        }
        Service::CareerAssessment => {
            "**💡 After Assessment:** Explore Colleges → Build Resume → Book Counselling"
        }
        Service::TopColleges => {
            "**💡 Pro Tip:** Use with Career Assessment for personalized recommendations"
        }
        _ => "**💡 Related:** Career Assessment, Resume Builder, Expert Counselling",
    }
}

fn tier_label(pricing: &PricingTier) -> &'static str {
    match pricing {
        PricingTier::Free => "FREE",
        PricingTier::FreeConsultation => "FREE Consultation",
        PricingTier::Premium(_) => "PREMIUM",
    }
}

fn information_about(kb: &KnowledgeBase, entry: &ServiceEntry) -> String {
    let features = entry
        .features
        .iter()
        .take(4)
        .map(|f| format!("• {f}"))
        .collect::<Vec<_>>()
        .join("\n");

    kb.render(
        templates::SERVICE_INFORMATION,
        &[
            ("title", entry.service.title()),
            ("description", entry.description),
            ("features", features.as_str()),
            ("url", entry.url.as_str()),
            ("tier", tier_label(&entry.pricing)),
        ],
    )
}

// ────────────────────────────────────────────────────────────────────────────
// Other layers
// ────────────────────────────────────────────────────────────────────────────

pub fn process_reply(kb: &KnowledgeBase, message: &str) -> String {
    let template = if contains_any(message, &["resume", "cv"]) {
        templates::RESUME_GUIDE
    } else if contains_any(message, &["career", "assessment", "test"]) {
        templates::ASSESSMENT_GUIDE
    } else {
        templates::PLATFORM_GUIDE
    };
    kb.render(template, &[])
}

pub fn comparison_reply(kb: &KnowledgeBase, message: &str) -> String {
    let template = if contains_any(message, &["free vs premium", "free vs paid"]) {
        templates::FREE_VS_PREMIUM
    } else if contains_any(message, &["engineering vs medical", "medical vs engineering"]) {
        templates::ENGINEERING_VS_MEDICAL
    } else {
        templates::COMPARISON_TOOL
    };
    kb.render(template, &[])
}

pub fn emotional_reply(kb: &KnowledgeBase, emotions: &EmotionReport) -> String {
    let lead = emotions
        .primary()
        .map(|e| e.response)
        .unwrap_or(templates::EMPATHY_GENERIC);
    format!("{lead}\n\n{}", kb.render(templates::ENCOURAGEMENT, &[]))
}

/// Service information when one is relevant, else the template for the
/// question category, else the information hub.
pub fn information_reply(kb: &KnowledgeBase, message: &str, result: &IntentResult) -> String {
    if let Some(service) = result.knowledge.service {
        return information_about(kb, kb.service(service));
    }

    let category = classify_question_category(message);
    debug!(
        category = ?category.category,
        confidence = category.confidence,
        matched = ?category.matched,
        "question category"
    );

    let template = category
        .category
        .template()
        .unwrap_or(templates::INFORMATION_HUB);
    kb.render(template, &[])
}

/// Coarse classifier on help, career and service wording.
pub fn universal_reply(kb: &KnowledgeBase, message: &str) -> Option<String> {
    let template = if contains_any(
        message,
        &["help", "need", "want", "looking for", "assist", "support"],
    ) {
        templates::UNIVERSAL_HELP
    } else if contains_any(message, &["career", "job", "future", "profession", "work"]) {
        templates::UNIVERSAL_CAREER
    } else if contains_any(
        message,
        &["service", "offer", "provide", "feature", "tool", "platform"],
    ) {
        templates::UNIVERSAL_SERVICES
    } else {
        return None;
    };
    Some(kb.render(template, &[]))
}

// ────────────────────────────────────────────────────────────────────────────
// Suggestions
// ────────────────────────────────────────────────────────────────────────────

pub fn suggestions(intent: Intent) -> Vec<String> {
    let list: &[&str] = match intent {
        Intent::Greeting => &[
            "What services do you offer?",
            "Help me plan my career",
            "I need guidance with college selection",
        ],
        Intent::AcademicGuidance => &[
            "Search for engineering colleges",
            "Tell me about MBA programs",
            "How does career counselling work?",
        ],
        Intent::EmotionalSupport => &[
            "Tell me about technology careers",
            "What skills do I need for business?",
            "Compare engineering and medical fields",
        ],
        Intent::UniversalServiceQuery => &[
            "How do I get started?",
            "What's the pricing?",
            "Tell me about career assessment",
        ],
        Intent::ErrorFallback => &[
            "What services do you offer?",
            "Show pricing",
            "Contact support",
        ],
        _ => &[
            "What are your free services?",
            "Help me with career planning",
            "Show me pricing options",
        ],
    };
    list.iter().map(|s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat::context::RelevantKnowledge;

    fn kb() -> KnowledgeBase {
        KnowledgeBase::new("https://example.test")
    }

    fn result(intent: Intent, confidence: f32) -> IntentResult {
        IntentResult {
            intent,
            confidence,
            service: None,
            academic: None,
            knowledge: RelevantKnowledge::default(),
            rule: "test",
        }
    }

    #[test]
    fn test_greeting_is_fixed_template() {
        let kb = kb();
        let reply = generate(
            &kb,
            "hello",
            &result(Intent::Greeting, 0.95),
            &QueryContext::default(),
            &EmotionReport::default(),
        );
        assert_eq!(reply.text, templates::GREETING);
        assert_eq!(reply.model_used, "enhanced_static");
    }

    #[test]
    fn test_unmatched_universal_query_gets_welcome() {
        let kb = kb();
        let reply = generate(
            &kb,
            "asdkjasd",
            &result(Intent::UniversalQuery, 0.6),
            &QueryContext::default(),
            &EmotionReport::default(),
        );
        assert!(reply.text.starts_with("🌟 **Welcome to CareerGenAI"));
        assert!(reply.text.contains("+91 8657869659"));
        assert_eq!(reply.model_used, "catch_all_welcome");
        assert!((reply.confidence - 0.6).abs() < f32::EPSILON);
    }

    #[test]
    fn test_error_intent_falls_through_to_universal_reply() {
        let kb = kb();
        let reply = generate(
            &kb,
            "i need some help",
            &result(Intent::ErrorFallback, 0.1),
            &QueryContext::default(),
            &EmotionReport::default(),
        );
        assert_eq!(reply.model_used, "emergency_universal");
        assert!((reply.confidence - 0.7).abs() < f32::EPSILON);
    }

    #[test]
    fn test_universal_reply_wording() {
        let kb = kb();
        assert!(universal_reply(&kb, "i want a job")
            .unwrap()
            .contains("intelligent career assistant"));
        assert!(universal_reply(&kb, "my future")
            .unwrap()
            .contains("Career Guidance - My Specialty"));
        assert!(universal_reply(&kb, "your platform")
            .unwrap()
            .contains("Complete Service Portfolio"));
        assert!(universal_reply(&kb, "qwerty").is_none());
    }

    #[test]
    fn test_premium_service_reply_has_tiers_and_process() {
        let kb = kb();
        let text = service_reply(&kb, Some(Service::PremiumResume), &QueryContext::default());
        assert!(text.starts_with("💎 **Premium Resume Builder**"));
        assert!(text.contains("**📋 How It Works:**"));
        assert!(text.contains("• **3 Months:** ₹2,999 (Most Popular)"));
        assert!(text.contains("https://example.test/AllComponents"));
    }

    #[test]
    fn test_free_service_reply() {
        let kb = kb();
        let text = service_reply(&kb, Some(Service::ResumeBuilder), &QueryContext::default());
        assert!(text.contains("Completely FREE"));
        assert!(!text.contains("How It Works"));
        assert!(text.contains("**🎨 Templates:** Modern, Classic, Creative"));
        assert!(text.contains("Take Career Assessment → Build Resume"));
    }

    #[test]
    fn test_process_requested_adds_walkthrough() {
        let kb = kb();
        let ctx = QueryContext {
            info_needed: vec![InfoType::Process],
            ..Default::default()
        };
        let text = service_reply(&kb, Some(Service::ResumeBuilder), &ctx);
        assert!(text.contains("How It Works"));
    }

    #[test]
    fn test_no_service_shows_catalog() {
        let kb = kb();
        let text = service_reply(&kb, None, &QueryContext::default());
        assert!(text.contains("Complete Overview"));
    }

    #[test]
    fn test_process_and_comparison_routing() {
        let kb = kb();
        assert!(process_reply(&kb, "how to write a cv").contains("Build a Professional Resume"));
        assert!(process_reply(&kb, "steps for the test").contains("Career Assessment"));
        assert!(process_reply(&kb, "how do i start").contains("Platform"));

        assert!(comparison_reply(&kb, "free vs paid").contains("FREE vs PREMIUM"));
        assert!(comparison_reply(&kb, "engineering vs medical").contains("Detailed Comparison"));
        assert!(comparison_reply(&kb, "x versus y").contains("Comparison Tool"));
    }

    #[test]
    fn test_emotional_reply_leads_with_empathy() {
        let kb = kb();
        let text = emotional_reply(&kb, &EmotionReport::default());
        assert!(text.starts_with(templates::EMPATHY_GENERIC));
        assert!(text.contains("You're Not Alone"));
    }

    #[test]
    fn test_information_reply_prefers_service_knowledge() {
        let kb = kb();
        let mut r = result(Intent::InformationQuery, 0.7);
        r.knowledge = RelevantKnowledge {
            service: Some(Service::TopColleges),
            confidence: 0.4,
        };
        let text = information_reply(&kb, "details", &r);
        assert!(text.contains("Information about Top Colleges"));
        assert!(text.contains("**💰 Type:** FREE"));

        let text = information_reply(&kb, "describe the hidden charges", &result(Intent::InformationQuery, 0.7));
        assert!(text.contains("PRICING - TRANSPARENT"));

        let text = information_reply(&kb, "zzz", &result(Intent::InformationQuery, 0.7));
        assert!(text.contains("Information Hub"));
    }

    #[test]
    fn test_suggestions() {
        assert_eq!(suggestions(Intent::Greeting)[0], "What services do you offer?");
        assert_eq!(suggestions(Intent::PricingInquiry)[0], "What are your free services?");
        assert_eq!(suggestions(Intent::ErrorFallback)[2], "Contact support");
    }
}
