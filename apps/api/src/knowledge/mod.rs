// Static knowledge store for the responder.
// Built once at startup from the configured frontend base URL, then shared
// read-only behind an Arc. Nothing in here is mutated after `KnowledgeBase::new`.

pub mod colleges;
pub mod emotions;
pub mod services;
pub mod templates;

use serde::{Deserialize, Serialize};

pub use colleges::{City, ScoreBand, Stream};
pub use emotions::{Emotion, EMOTION_PROFILES};
pub use services::{PricingTier, Service};

/// Primary and secondary support numbers shown in every contact footer.
pub const PHONE_PRIMARY: &str = "+91 8657869659";
pub const PHONE_SECONDARY: &str = "+91 9619901999";

/// A service entry with its access URL materialised against the base URL.
#[derive(Debug, Clone, Serialize)]
pub struct ServiceEntry {
    pub service: Service,
    pub description: &'static str,
    pub features: &'static [&'static str],
    pub process: &'static str,
    pub url: String,
    pub pricing: PricingTier,
    pub duration: Option<&'static str>,
    pub templates: &'static [&'static str],
    pub coverage: Option<&'static str>,
    /// Matching only. Never rewritten at runtime.
    pub keywords: &'static [&'static str],
}

/// The process-wide knowledge base.
#[derive(Debug, Clone)]
pub struct KnowledgeBase {
    base_url: String,
    services: Vec<ServiceEntry>,
}

/// Summary used by the service descriptor endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KnowledgeSummary {
    pub services_supported: usize,
    pub cities_with_colleges: usize,
}

impl KnowledgeBase {
    pub fn new(base_url: &str) -> Self {
        let base_url = base_url.trim_end_matches('/').to_string();
        let services = services::SERVICE_SPECS
            .iter()
            .map(|spec| ServiceEntry {
                service: spec.service,
                description: spec.description,
                features: spec.features,
                process: spec.process,
                url: format!("{base_url}{}", spec.path),
                pricing: spec.pricing,
                duration: spec.duration,
                templates: spec.templates,
                coverage: spec.coverage,
                keywords: spec.keywords,
            })
            .collect();

        Self { base_url, services }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// All service entries in catalogue order.
    pub fn services(&self) -> &[ServiceEntry] {
        &self.services
    }

    pub fn service(&self, service: Service) -> &ServiceEntry {
        // SERVICE_SPECS holds exactly one entry per variant, in Service::ALL order.
        &self.services[service.index()]
    }

    /// Renders a template with `{base_url}` and the support numbers filled in,
    /// plus any caller supplied variables.
    pub fn render(&self, template: &str, vars: &[(&str, &str)]) -> String {
        let mut all: Vec<(&str, &str)> = vec![
            ("base_url", self.base_url.as_str()),
            ("phone_primary", PHONE_PRIMARY),
            ("phone_secondary", PHONE_SECONDARY),
        ];
        all.extend_from_slice(vars);
        templates::render(template, &all)
    }

    pub fn summary(&self) -> KnowledgeSummary {
        KnowledgeSummary {
            services_supported: self.services.len(),
            cities_with_colleges: City::ALL
                .iter()
                .filter(|c| colleges::city_colleges(**c).is_some())
                .count(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_urls_materialised_from_base_url() {
        let kb = KnowledgeBase::new("https://example.test/");
        assert_eq!(kb.base_url(), "https://example.test");
        assert_eq!(
            kb.service(Service::ResumeBuilder).url,
            "https://example.test/resume-templates"
        );
        assert_eq!(
            kb.service(Service::PremiumResume).url,
            "https://example.test/AllComponents"
        );
    }

    #[test]
    fn test_service_lookup_matches_variant() {
        let kb = KnowledgeBase::new("https://example.test");
        for service in Service::ALL {
            assert_eq!(kb.service(service).service, service);
        }
        assert_eq!(kb.services().len(), 10);
    }

    #[test]
    fn test_render_fills_base_url_and_phones() {
        let kb = KnowledgeBase::new("https://example.test");
        let out = kb.render("Visit {base_url}/consult or call {phone_primary}", &[]);
        assert_eq!(out, "Visit https://example.test/consult or call +91 8657869659");
    }

    #[test]
    fn test_summary_counts() {
        let kb = KnowledgeBase::new("https://example.test");
        let summary = kb.summary();
        assert_eq!(summary.services_supported, 10);
        assert_eq!(summary.cities_with_colleges, 10);
    }
}
