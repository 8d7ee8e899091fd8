use anyhow::{Context, Result};

pub const DEFAULT_FRONTEND_BASE_URL: &str = "https://www.careergenai.in";

/// Application configuration loaded from environment variables.
/// Every variable has a default, so startup only fails on malformed values.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Prefix for every link in replies. No trailing slash.
    pub frontend_base_url: String,
    /// `["*"]` means any origin.
    pub cors_origins: Vec<String>,
    pub response_cache_enabled: bool,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let port = match get("PORT") {
            Some(raw) => raw
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            None => 8000,
        };

        let response_cache_enabled = match get("RESPONSE_CACHE_ENABLED") {
            Some(raw) => parse_bool(&raw)
                .with_context(|| format!("RESPONSE_CACHE_ENABLED must be a boolean, got '{raw}'"))?,
            None => true,
        };

        let frontend_base_url = get("FRONTEND_BASE_URL")
            .map(|u| u.trim().trim_end_matches('/').to_string())
            .filter(|u| !u.is_empty())
            .unwrap_or_else(|| DEFAULT_FRONTEND_BASE_URL.to_string());

        Ok(Config {
            port,
            rust_log: get("RUST_LOG").unwrap_or_else(|| "info".to_string()),
            frontend_base_url,
            cors_origins: parse_origins(get("CORS_ORIGINS").as_deref().unwrap_or("*")),
            response_cache_enabled,
        })
    }

    pub fn allows_any_origin(&self) -> bool {
        self.cors_origins.iter().any(|o| o == "*")
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    let origins: Vec<String> = raw
        .split(',')
        .map(str::trim)
        .filter(|o| !o.is_empty())
        .map(str::to_string)
        .collect();
    if origins.is_empty() {
        vec!["*".to_string()]
    } else {
        origins
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> Result<Config> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = load(&[]).unwrap();
        assert_eq!(config.port, 8000);
        assert_eq!(config.rust_log, "info");
        assert_eq!(config.frontend_base_url, DEFAULT_FRONTEND_BASE_URL);
        assert!(config.allows_any_origin());
        assert!(config.response_cache_enabled);
    }

    #[test]
    fn test_overrides() {
        let config = load(&[
            ("PORT", "9100"),
            ("FRONTEND_BASE_URL", "http://localhost:3000/"),
            ("CORS_ORIGINS", "http://localhost:3000, https://app.example.com"),
            ("RESPONSE_CACHE_ENABLED", "false"),
        ])
        .unwrap();
        assert_eq!(config.port, 9100);
        assert_eq!(config.frontend_base_url, "http://localhost:3000");
        assert_eq!(
            config.cors_origins,
            vec!["http://localhost:3000", "https://app.example.com"]
        );
        assert!(!config.allows_any_origin());
        assert!(!config.response_cache_enabled);
    }

    #[test]
    fn test_malformed_values_fail() {
        assert!(load(&[("PORT", "eighty")]).is_err());
        assert!(load(&[("RESPONSE_CACHE_ENABLED", "maybe")]).is_err());
    }
}
