//! Website question categories. Used by the information-query reply to pick
//! a comprehensive template.

use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;

use crate::chat::contains_any;
use crate::knowledge::templates;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionCategory {
    ServicesFeatures,
    CostPricing,
    HowToProcess,
    AboutPlatform,
    SupportContact,
    General,
}

impl QuestionCategory {
    const CLASSIFIED: [QuestionCategory; 5] = [
        QuestionCategory::ServicesFeatures,
        QuestionCategory::CostPricing,
        QuestionCategory::HowToProcess,
        QuestionCategory::AboutPlatform,
        QuestionCategory::SupportContact,
    ];

    fn fallback_keywords(&self) -> &'static [&'static str] {
        match self {
            QuestionCategory::ServicesFeatures => &[
                "services",
                "features",
                "tools",
                "assessments",
                "website",
                "platform",
                "offer",
                "do",
            ],
            QuestionCategory::CostPricing => &[
                "free",
                "cost",
                "price",
                "money",
                "pay",
                "subscription",
                "plan",
                "charges",
            ],
            QuestionCategory::HowToProcess => &[
                "how", "process", "steps", "guide", "start", "register", "book", "use",
            ],
            QuestionCategory::AboutPlatform => &[
                "about",
                "company",
                "who",
                "what is",
                "careergenai",
                "platform",
            ],
            QuestionCategory::SupportContact => &[
                "contact", "support", "help", "phone", "number", "hours", "issue",
            ],
            QuestionCategory::General => &[],
        }
    }

    fn patterns(&self) -> &'static [Regex] {
        match self {
            QuestionCategory::ServicesFeatures => &SERVICES_FEATURES,
            QuestionCategory::CostPricing => &COST_PRICING,
            QuestionCategory::HowToProcess => &HOW_TO_PROCESS,
            QuestionCategory::AboutPlatform => &ABOUT_PLATFORM,
            QuestionCategory::SupportContact => &SUPPORT_CONTACT,
            QuestionCategory::General => &NO_PATTERNS,
        }
    }

    /// Comprehensive template for the category, if it has one.
    pub fn template(&self) -> Option<&'static str> {
        match self {
            QuestionCategory::ServicesFeatures => Some(templates::SERVICES_OVERVIEW),
            QuestionCategory::CostPricing => Some(templates::PRICING_DETAILS),
            QuestionCategory::HowToProcess => Some(templates::PROCESS_GUIDE),
            QuestionCategory::AboutPlatform => Some(templates::ABOUT_US),
            QuestionCategory::SupportContact => Some(templates::CONTACT_SUPPORT),
            QuestionCategory::General => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CategoryMatch {
    pub category: QuestionCategory,
    pub confidence: f32,
    /// Regex source that matched, or "keyword_fallback".
    pub matched: Option<&'static str>,
}

fn compile(patterns: &[&str]) -> Vec<Regex> {
    patterns
        .iter()
        .map(|p| Regex::new(p).expect("Invalid regex: category pattern"))
        .collect()
}

static NO_PATTERNS: [Regex; 0] = [];

static SERVICES_FEATURES: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    compile(&[
        r"what can i do on this website",
        r"list all your features",
        r"what services do you offer",
        r"what all things do you offer",
        r"tell me about your.*tools",
        r"what kind of assessments",
        r"do you have.*tool.*cv|resume",
        r"feature.*compare.*career",
        r"can you.*help.*find.*college",
        r"ai.*powered.*tools",
        r"is there.*feature",
        r"counselling.*real person",
        r"what.*website.*for",
        r"can you.*build.*cv",
        r"what.*can.*do.*here",
        r"show me.*features",
        r"what.*tools.*available",
    ])
});

static COST_PRICING: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    compile(&[
        r"is this.*free",
        r"how much.*cost",
        r"subscription plans",
        r"what.*included.*free",
        r"pay.*career assessment",
        r"exactly what.*get.*free",
        r"why.*pay.*premium",
        r"price.*premium.*resume",
        r"hidden charges",
        r"pricing",
        r"cost.*money",
        r"how much does it cost",
    ])
});

static HOW_TO_PROCESS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    compile(&[
        r"how.*get started",
        r"process.*register|sign up",
        r"how.*book.*session.*counsellor",
        r"where.*personality quiz",
        r"what happens.*complete.*assessment",
        r"how.*use.*college search",
        r"guide.*build.*profile",
        r"how to.*",
        r"what.*process",
        r"step.*step",
        r"how do i.*",
        r"what are.*steps",
    ])
});

static ABOUT_PLATFORM: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    compile(&[
        r"what is careergenai",
        r"who.*website.*for",
        r"platform.*only.*students.*india",
        r"working professionals.*use",
        r"where.*company.*based",
        r"main goal.*website",
        r"different.*other.*career portals",
        r"about.*company",
        r"who are you",
        r"tell me about.*company",
        r"what.*careergenai",
    ])
});

static SUPPORT_CONTACT: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    compile(&[
        r"contact.*support",
        r"phone number.*email",
        r"talk.*person.*admission",
        r"working hours",
        r"facing.*issue.*registration",
        r"contact.*help",
        r"customer.*support",
        r"need help",
        r"customer.*service",
        r"support.*team",
        r"help.*contact",
    ])
});

/// Regex patterns first (0.9), then keyword fallback in category order (0.7),
/// else `General` (0.5).
pub fn classify_question_category(message: &str) -> CategoryMatch {
    for category in QuestionCategory::CLASSIFIED {
        if let Some(re) = category.patterns().iter().find(|re| re.is_match(message)) {
            return CategoryMatch {
                category,
                confidence: 0.9,
                matched: Some(re.as_str()),
            };
        }
    }

    for category in QuestionCategory::CLASSIFIED {
        if contains_any(message, category.fallback_keywords()) {
            return CategoryMatch {
                category,
                confidence: 0.7,
                matched: Some("keyword_fallback"),
            };
        }
    }

    CategoryMatch {
        category: QuestionCategory::General,
        confidence: 0.5,
        matched: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_patterns_compile() {
        for category in QuestionCategory::CLASSIFIED {
            assert!(!category.patterns().is_empty());
        }
    }

    #[test]
    fn test_pattern_match() {
        let m = classify_question_category("is this website free to use");
        assert_eq!(m.category, QuestionCategory::CostPricing);
        assert!((m.confidence - 0.9).abs() < f32::EPSILON);

        let m = classify_question_category("what is careergenai");
        assert_eq!(m.category, QuestionCategory::AboutPlatform);
    }

    #[test]
    fn test_keyword_fallback() {
        let m = classify_question_category("tell me the phone line");
        assert_eq!(m.category, QuestionCategory::SupportContact);
        assert_eq!(m.matched, Some("keyword_fallback"));
        assert!((m.confidence - 0.7).abs() < f32::EPSILON);
    }

    #[test]
    fn test_general_when_nothing_matches() {
        let m = classify_question_category("zzz");
        assert_eq!(m.category, QuestionCategory::General);
        assert!(m.category.template().is_none());
    }
}
