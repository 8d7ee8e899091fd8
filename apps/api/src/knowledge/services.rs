use serde::{Deserialize, Serialize};
use std::fmt;

/// The ten offerings of the website.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Service {
    CareerAssessment,
    PersonalityQuiz,
    ResumeBuilder,
    PremiumResume,
    CareerCounselling,
    TopColleges,
    ProfileBuilder,
    CareerComparison,
    CareerRoadmaps,
    AiChatbot,
}

impl Service {
    /// Catalogue order. `SERVICE_SPECS` follows the same order.
    pub const ALL: [Service; 10] = [
        Service::CareerAssessment,
        Service::PersonalityQuiz,
        Service::ResumeBuilder,
        Service::PremiumResume,
        Service::CareerCounselling,
        Service::TopColleges,
        Service::ProfileBuilder,
        Service::CareerComparison,
        Service::CareerRoadmaps,
        Service::AiChatbot,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            Service::CareerAssessment => "career_assessment",
            Service::PersonalityQuiz => "personality_quiz",
            Service::ResumeBuilder => "resume_builder",
            Service::PremiumResume => "premium_resume",
            Service::CareerCounselling => "career_counselling",
            Service::TopColleges => "top_colleges",
            Service::ProfileBuilder => "profile_builder",
            Service::CareerComparison => "career_comparison",
            Service::CareerRoadmaps => "career_roadmaps",
            Service::AiChatbot => "ai_chatbot",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Service::CareerAssessment => "Career Assessment",
            Service::PersonalityQuiz => "Personality Quiz",
            Service::ResumeBuilder => "Resume Builder",
            Service::PremiumResume => "Premium Resume Builder",
            Service::CareerCounselling => "Career Counselling",
            Service::TopColleges => "Top Colleges",
            Service::ProfileBuilder => "Profile Builder",
            Service::CareerComparison => "Career Comparison",
            Service::CareerRoadmaps => "Career Roadmaps",
            Service::AiChatbot => "AI Chatbot",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            Service::CareerAssessment => "🎯",
            Service::PersonalityQuiz => "🧠",
            Service::ResumeBuilder => "📄",
            Service::PremiumResume => "💎",
            Service::CareerCounselling => "👨‍💼",
            Service::TopColleges => "🏛️",
            Service::ProfileBuilder => "👤",
            Service::CareerComparison => "⚖️",
            Service::CareerRoadmaps => "🗺️",
            Service::AiChatbot => "🤖",
        }
    }

    /// Tie-break rank for equal-length keyword matches. Higher is more specific.
    pub fn specificity(&self) -> u8 {
        match self {
            Service::PremiumResume => 10,
            Service::CareerRoadmaps => 9,
            Service::CareerCounselling => 8,
            Service::CareerAssessment => 7,
            Service::PersonalityQuiz => 6,
            Service::CareerComparison => 5,
            Service::ProfileBuilder => 4,
            Service::TopColleges => 3,
            Service::AiChatbot => 2,
            Service::ResumeBuilder => 1,
        }
    }

    /// Services whose replies always include the process walkthrough.
    pub fn is_complex(&self) -> bool {
        matches!(
            self,
            Service::CareerAssessment | Service::PremiumResume | Service::CareerRoadmaps
        )
    }

    pub(crate) fn index(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for Service {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct PlanPrice {
    pub plan: &'static str,
    pub price: &'static str,
    pub badge: Option<&'static str>,
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(tag = "type", content = "plans", rename_all = "snake_case")]
pub enum PricingTier {
    Free,
    FreeConsultation,
    Premium(&'static [PlanPrice]),
}

pub const PREMIUM_PLANS: &[PlanPrice] = &[
    PlanPrice {
        plan: "1 Month",
        price: "₹1,999",
        badge: None,
    },
    PlanPrice {
        plan: "3 Months",
        price: "₹2,999",
        badge: Some("Most Popular"),
    },
    PlanPrice {
        plan: "1 Year",
        price: "₹3,999",
        badge: Some("Best Value"),
    },
];

/// Raw service record. `path` is joined onto the base URL at startup.
pub(crate) struct ServiceSpec {
    pub service: Service,
    pub description: &'static str,
    pub features: &'static [&'static str],
    pub process: &'static str,
    pub path: &'static str,
    pub pricing: PricingTier,
    pub duration: Option<&'static str>,
    pub templates: &'static [&'static str],
    pub coverage: Option<&'static str>,
    pub keywords: &'static [&'static str],
}

pub(crate) const SERVICE_SPECS: &[ServiceSpec] = &[
    ServiceSpec {
        service: Service::CareerAssessment,
        description: "AI-powered career discovery tool that analyzes your interests and suggests matching careers",
        features: &[
            "18+ career interest areas",
            "AI matching algorithm",
            "Detailed career reports",
            "Skills assessment",
            "Growth prospects analysis",
        ],
        process: "Take quiz → AI analysis → Get top 5 career matches → Detailed insights → Action plan",
        path: "/interest-form",
        pricing: PricingTier::Free,
        duration: Some("15-20 minutes"),
        templates: &[],
        coverage: None,
        keywords: &[
            "career assessment",
            "career test",
            "career quiz",
            "find career",
            "career match",
            "interest test",
            "what can i do",
            "features",
            "tools",
            "assessments",
        ],
    },
    ServiceSpec {
        service: Service::PersonalityQuiz,
        description: "Comprehensive personality analysis to understand your work style and matching careers",
        features: &[
            "Personality type identification",
            "Work style analysis",
            "Team dynamics",
            "Career alignment",
            "Growth areas",
        ],
        process: "Answer questions → Personality analysis → Career matching → Detailed report → Recommendations",
        path: "/careerQuiz",
        pricing: PricingTier::Free,
        duration: Some("10-15 minutes"),
        templates: &[],
        coverage: None,
        keywords: &[
            "personality quiz",
            "personality test",
            "work style",
            "personality type",
            "mbti",
            "personality",
        ],
    },
    ServiceSpec {
        service: Service::ResumeBuilder,
        description: "Professional ATS-friendly resume builder with modern templates",
        features: &[
            "ATS-friendly templates",
            "Professional layouts",
            "Easy customization",
            "PDF download",
            "Multiple formats",
        ],
        process: "Choose template → Fill details → Customize design → Download PDF → Apply to jobs",
        path: "/resume-templates",
        pricing: PricingTier::Free,
        duration: None,
        templates: &["Modern", "Classic", "Creative", "Minimalist", "Professional"],
        coverage: None,
        keywords: &[
            "resume builder",
            "resume",
            "cv",
            "build resume",
            "create resume",
            "resume template",
        ],
    },
    ServiceSpec {
        service: Service::PremiumResume,
        description: "AI-powered premium resume builder with advanced features and industry-specific templates",
        features: &[
            "AI content suggestions",
            "Industry-specific templates",
            "Keyword optimization",
            "Real-time feedback",
            "Cover letter builder",
        ],
        process: "Select industry → AI suggestions → Advanced customization → Optimization → Professional output",
        path: "/AllComponents",
        pricing: PricingTier::Premium(PREMIUM_PLANS),
        duration: None,
        templates: &[],
        coverage: None,
        keywords: &[
            "premium resume builder",
            "premium resume",
            "ai resume",
            "advanced resume",
            "ai-powered resume",
            "premium templates",
        ],
    },
    ServiceSpec {
        service: Service::CareerCounselling,
        description: "One-on-one expert career counselling sessions with certified professionals",
        features: &[
            "Certified counselors",
            "Personalized guidance",
            "Career planning",
            "Decision support",
            "Goal setting",
        ],
        process: "Book session → Expert consultation → Personalized plan → Follow-up support → Success tracking",
        path: "/consult",
        pricing: PricingTier::FreeConsultation,
        duration: Some("30-60 minutes"),
        templates: &[],
        coverage: None,
        keywords: &[
            "career counselling",
            "counseling",
            "expert guidance",
            "career advisor",
            "counselor",
            "guidance",
        ],
    },
    ServiceSpec {
        service: Service::TopColleges,
        description: "Comprehensive database of 10,000+ colleges with smart search and filtering",
        features: &[
            "10,000+ colleges",
            "Smart filters",
            "Ranking data",
            "Admission info",
            "Fee structure",
            "Placement records",
        ],
        process: "Set preferences → Search colleges → Compare options → Get details → Apply",
        path: "/college",
        pricing: PricingTier::Free,
        duration: None,
        templates: &[],
        coverage: Some("India and International"),
        keywords: &[
            "colleges",
            "college search",
            "top colleges",
            "university",
            "admission",
            "college finder",
        ],
    },
    ServiceSpec {
        service: Service::ProfileBuilder,
        description: "Complete student career profile creation tool for comprehensive self-assessment",
        features: &[
            "Academic tracking",
            "Skills inventory",
            "Achievement records",
            "Goal setting",
            "Progress monitoring",
        ],
        process: "Enter details → Build profile → Track progress → Set goals → Monitor growth",
        path: "/profile-builder",
        pricing: PricingTier::Free,
        duration: None,
        templates: &[],
        coverage: None,
        keywords: &[
            "profile builder",
            "profile building",
            "student profile",
            "career profile",
            "profile creation",
            "build profile",
        ],
    },
    ServiceSpec {
        service: Service::CareerComparison,
        description: "Side-by-side career comparison tool for informed decision making",
        features: &[
            "Salary comparison",
            "Skills analysis",
            "Education requirements",
            "Growth prospects",
            "Work-life balance",
        ],
        process: "Select careers → Compare metrics → Analyze differences → Make decision → Get guidance",
        path: "/compare",
        pricing: PricingTier::Free,
        duration: None,
        templates: &[],
        coverage: None,
        keywords: &[
            "career comparison",
            "compare careers",
            "career vs career",
            "which career",
            "career analysis",
        ],
    },
    ServiceSpec {
        service: Service::CareerRoadmaps,
        description: "Step-by-step career roadmaps with detailed guidance for your dream career",
        features: &[
            "Step-by-step guides",
            "Timeline planning",
            "Skill development",
            "Milestone tracking",
            "Resource recommendations",
        ],
        process: "Choose career → Get roadmap → Follow steps → Track progress → Achieve goals",
        path: "/careerDetail",
        pricing: PricingTier::Premium(PREMIUM_PLANS),
        duration: None,
        templates: &[],
        coverage: None,
        keywords: &[
            "career roadmap",
            "career path",
            "career guide",
            "roadmap",
            "career plan",
        ],
    },
    ServiceSpec {
        service: Service::AiChatbot,
        description: "24/7 intelligent AI career assistant for instant guidance and support",
        features: &[
            "24/7 availability",
            "Instant responses",
            "Personalized guidance",
            "Emotional support",
            "Service navigation",
        ],
        process: "Ask question → AI analysis → Intelligent response → Follow-up support → Resource links",
        path: "/chat",
        pricing: PricingTier::Free,
        duration: None,
        templates: &[],
        coverage: None,
        keywords: &["chatbot", "ai assistant", "chat", "help", "support", "ask question"],
    },
];
