// Chat pipeline: context extraction, intent classification, reply selection
// and the response cache. Everything here is rule-based and synchronous except
// the emotion detector seam and the engine entry point.

pub mod academic;
pub mod cache;
pub mod category;
pub mod context;
pub mod emotion;
pub mod engine;
pub mod guidance;
pub mod handlers;
pub mod intent;
pub mod models;
pub mod responder;

/// Substring test over an already lower-cased message.
pub(crate) fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|n| haystack.contains(n))
}

/// Lower-cased, trimmed form used for matching and as the cache key.
pub fn normalize(message: &str) -> String {
    message.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_trims_and_lowercases() {
        assert_eq!(normalize("  Hello THERE \n"), "hello there");
    }

    #[test]
    fn test_contains_any_matches_inside_words() {
        assert!(contains_any("which college", &["hi"]));
        assert!(!contains_any("abc", &["x", "y"]));
    }
}
