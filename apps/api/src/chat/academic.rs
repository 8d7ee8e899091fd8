//! Academic attribute extraction: percentage, stream, city and whether the
//! message asks about colleges at all.

use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;

use crate::chat::contains_any;
use crate::knowledge::{City, Stream};

// Literal patterns; compiled once.
static PERCENTAGE_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    vec![
        Regex::new(r"(\d+(?:\.\d+)?)\s*(?:percent|percentage|%)")
            .expect("Invalid regex: percent pattern"),
        Regex::new(r"(\d+(?:\.\d+)?)\s*(?:marks?|score)").expect("Invalid regex: marks pattern"),
        Regex::new(r"got\s+(\d+(?:\.\d+)?)").expect("Invalid regex: got pattern"),
        Regex::new(r"scored\s+(\d+(?:\.\d+)?)").expect("Invalid regex: scored pattern"),
    ]
});

static LOCATION_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    vec![
        Regex::new(
            r"(?:best|top|good)\s+(?:medical|engineering|commerce|arts|management)?\s*colleges?\s+in\s+(\w+)",
        )
        .expect("Invalid regex: best colleges in pattern"),
        Regex::new(r"(?:medical|engineering|commerce|arts|management)\s+colleges?\s+in\s+(\w+)")
            .expect("Invalid regex: stream colleges in pattern"),
        Regex::new(r"colleges?\s+in\s+(\w+)").expect("Invalid regex: colleges in pattern"),
        Regex::new(r"study\s+in\s+(\w+)").expect("Invalid regex: study in pattern"),
    ]
});

const COLLEGE_KEYWORDS: &[&str] = &[
    "college",
    "colleges",
    "university",
    "universities",
    "institution",
    "admission",
    "cutoff",
    "top colleges",
    "best colleges",
];

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AcademicInfo {
    pub percentage: Option<f64>,
    pub stream: Option<Stream>,
    pub location: Option<City>,
    pub has_college_query: bool,
}

impl AcademicInfo {
    /// True when any academic attribute was found.
    pub fn is_academic(&self) -> bool {
        self.percentage.is_some() || self.stream.is_some() || self.has_college_query
    }
}

/// Extracts academic attributes from a lower-cased message. Never fails.
pub fn extract_academic_info(message: &str) -> AcademicInfo {
    AcademicInfo {
        percentage: extract_percentage(message),
        stream: extract_stream(message),
        location: extract_location(message),
        has_college_query: contains_any(message, COLLEGE_KEYWORDS),
    }
}

/// First matching pattern wins.
pub fn extract_percentage(message: &str) -> Option<f64> {
    PERCENTAGE_PATTERNS.iter().find_map(|re| {
        re.captures(message)
            .and_then(|caps| caps.get(1))
            .and_then(|m| m.as_str().parse::<f64>().ok())
    })
}

pub fn extract_stream(message: &str) -> Option<Stream> {
    Stream::ALL
        .into_iter()
        .find(|s| contains_any(message, s.keywords()))
}

/// Anchored phrases ("colleges in pune") first, then any city name, then any
/// alias appearing as whole words.
pub fn extract_location(message: &str) -> Option<City> {
    for re in LOCATION_PATTERNS.iter() {
        let Some(token) = re.captures(message).and_then(|c| c.get(1)) else {
            continue;
        };
        let token = token.as_str();
        if let Some(city) = City::from_name(token).or_else(|| City::from_alias(token)) {
            return Some(city);
        }
    }

    City::ALL
        .into_iter()
        .find(|c| message.contains(c.name()))
        .or_else(|| {
            City::ALL
                .into_iter()
                .find(|c| c.aliases().iter().any(|a| contains_word(message, a)))
        })
}

/// `word` bounded by non-alphanumerics, so "up" does not match "support".
fn contains_word(message: &str, word: &str) -> bool {
    message.match_indices(word).any(|(start, _)| {
        let before = message[..start].chars().next_back();
        let after = message[start + word.len()..].chars().next();
        !before.is_some_and(char::is_alphanumeric) && !after.is_some_and(char::is_alphanumeric)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percentage_forms() {
        assert_eq!(extract_percentage("i got 85%"), Some(85.0));
        assert_eq!(extract_percentage("scored 85"), Some(85.0));
        assert_eq!(extract_percentage("85 percent"), Some(85.0));
        assert_eq!(extract_percentage("92.5 marks in boards"), Some(92.5));
        assert_eq!(extract_percentage("no numbers here"), None);
    }

    #[test]
    fn test_percentage_pattern_order() {
        // the percent sign pattern is tried before "got N"
        assert_eq!(extract_percentage("got 3 offers with 88%"), Some(88.0));
    }

    #[test]
    fn test_stream_first_match_wins() {
        assert_eq!(extract_stream("mbbs seats"), Some(Stream::Medical));
        assert_eq!(extract_stream("bcom or physics"), Some(Stream::Commerce));
        assert_eq!(extract_stream("nothing relevant"), None);
    }

    #[test]
    fn test_location_anchored_then_alias() {
        assert_eq!(
            extract_location("best engineering colleges in pune"),
            Some(City::Pune)
        );
        assert_eq!(extract_location("colleges in bombay"), Some(City::Mumbai));
        assert_eq!(
            extract_location("i want to move to bengaluru"),
            Some(City::Bangalore)
        );
        assert_eq!(extract_location("somewhere nice"), None);
    }

    #[test]
    fn test_short_aliases_need_word_boundaries() {
        assert_eq!(extract_location("computer support"), None);
        assert_eq!(extract_location("colleges in up please"), Some(City::Lucknow));
        assert_eq!(extract_location("moving to mp soon"), Some(City::Bhopal));
    }

    #[test]
    fn test_exact_city_beats_alias_in_scan() {
        // "kerala" is an alias of kochi, but the exact name comes first
        assert_eq!(
            extract_location("trivandrum or chennai in kerala"),
            Some(City::Chennai)
        );
    }

    #[test]
    fn test_full_academic_message() {
        let info = extract_academic_info("i got 92% and want engineering colleges in mumbai");
        assert_eq!(info.percentage, Some(92.0));
        assert_eq!(info.stream, Some(Stream::Engineering));
        assert_eq!(info.location, Some(City::Mumbai));
        assert!(info.has_college_query);
        assert!(info.is_academic());
    }
}
