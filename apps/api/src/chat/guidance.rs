//! Academic guidance replies: college lists by city, stream overviews and
//! score-band recommendations.

use crate::chat::academic::AcademicInfo;
use crate::knowledge::colleges::{band_recommendation, city_colleges, stream_overview};
use crate::knowledge::{templates, City, KnowledgeBase, ScoreBand, Stream};

/// Formats a percentage without a trailing ".0" for whole numbers.
pub fn format_percentage(percentage: f64) -> String {
    if percentage.fract() == 0.0 {
        format!("{percentage:.0}")
    } else {
        format!("{percentage}")
    }
}

/// Recommendation for a percentage and stream, optionally focused on a city.
#[derive(Debug, Clone, PartialEq)]
pub struct CollegeRecommendation {
    pub band: ScoreBand,
    pub stream: Stream,
    pub colleges: Vec<&'static str>,
    pub cutoffs: String,
    pub message: String,
    /// Set when the list comes from the city's own table.
    pub city: Option<City>,
}

/// City table first when it covers the stream, else the nationwide band table.
pub fn recommend(percentage: f64, stream: Stream, location: Option<City>) -> CollegeRecommendation {
    let band = ScoreBand::from_percentage(percentage);

    if let Some(city) = location {
        if let Some(list) = city_colleges(city).and_then(|t| t.for_stream(stream)) {
            let title = city.title();
            return CollegeRecommendation {
                band,
                stream,
                colleges: list.to_vec(),
                cutoffs: format!("Location-specific entrance exams and cutoffs for {title}"),
                message: templates::render(band.location_message(), &[("location", title.as_str())]),
                city: Some(city),
            };
        }
    }

    let row = band_recommendation(stream, band);
    CollegeRecommendation {
        band,
        stream,
        colleges: row.colleges.to_vec(),
        cutoffs: row.cutoffs.to_string(),
        message: row.message.to_string(),
        city: None,
    }
}

/// Academic reply. Never empty.
pub fn academic_reply(kb: &KnowledgeBase, info: &AcademicInfo) -> String {
    let Some(percentage) = info.percentage else {
        return reply_without_percentage(kb, info);
    };

    let Some(stream) = info.stream else {
        let pct = format_percentage(percentage);
        return kb.render(templates::ACADEMIC_MULTI_PATH, &[("percentage", pct.as_str())]);
    };

    let rec = recommend(percentage, stream, info.location);
    let colleges = rec
        .colleges
        .iter()
        .enumerate()
        .map(|(i, c)| format!("{}. **{c}**", i + 1))
        .collect::<Vec<_>>()
        .join("\n");
    let (location_suffix, location_focus) = match rec.city {
        Some(city) => {
            let title = city.title();
            (
                format!(" in {title}"),
                format!("**📍 Location Focus:** {title}\n"),
            )
        }
        None => (String::new(), String::new()),
    };

    kb.render(
        templates::ACADEMIC_BAND,
        &[
            ("message", rec.message.as_str()),
            ("stream", rec.stream.title()),
            ("location_suffix", location_suffix.as_str()),
            ("colleges", colleges.as_str()),
            ("cutoffs", rec.cutoffs.as_str()),
            ("band", rec.band.label()),
            ("location_focus", location_focus.as_str()),
        ],
    )
}

fn reply_without_percentage(kb: &KnowledgeBase, info: &AcademicInfo) -> String {
    if let Some((city, table)) = info
        .location
        .and_then(|c| city_colleges(c).map(|t| (c, t)))
    {
        let city_title = city.title();

        if let Some((stream, list)) = info
            .stream
            .and_then(|s| table.for_stream(s).map(|l| (s, l)))
        {
            let colleges = bold_bullets(list);
            return kb.render(
                &templates::academic_city_stream(),
                &[
                    ("stream", stream.title()),
                    ("city", city_title.as_str()),
                    ("colleges", colleges.as_str()),
                    ("stream_key", stream.key()),
                    ("city_key", city.name()),
                ],
            );
        }

        let streams = table
            .all_streams()
            .iter()
            .map(|(label, list)| {
                let top = list
                    .iter()
                    .take(4)
                    .map(|c| format!("• {c}"))
                    .collect::<Vec<_>>()
                    .join("\n");
                format!("**🎓 {label}:**\n{top}")
            })
            .collect::<Vec<_>>()
            .join("\n\n");

        return kb.render(
            &templates::academic_city_all(),
            &[
                ("city", city_title.as_str()),
                ("streams", streams.as_str()),
                ("city_key", city.name()),
            ],
        );
    }

    if let Some((stream, overview)) = info
        .stream
        .and_then(|s| stream_overview(s).map(|o| (s, o)))
    {
        let colleges = bold_bullets(overview.top_colleges);
        return kb.render(
            &templates::academic_stream_overview(),
            &[
                ("stream", stream.title()),
                ("colleges", colleges.as_str()),
                ("entrance", overview.entrance),
                ("description", overview.description),
                ("stream_key", stream.key()),
            ],
        );
    }

    kb.render(templates::ACADEMIC_CLARIFY, &[])
}

fn bold_bullets(items: &[&str]) -> String {
    items
        .iter()
        .map(|c| format!("• **{c}**"))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kb() -> KnowledgeBase {
        KnowledgeBase::new("https://example.test")
    }

    #[test]
    fn test_format_percentage() {
        assert_eq!(format_percentage(92.0), "92");
        assert_eq!(format_percentage(92.5), "92.5");
    }

    #[test]
    fn test_city_recommendation_is_personalised() {
        let rec = recommend(92.0, Stream::Engineering, Some(City::Mumbai));
        assert_eq!(rec.city, Some(City::Mumbai));
        assert_eq!(rec.colleges[0], "IIT Bombay");
        assert_eq!(rec.message, "🌟 Great score! Top colleges in Mumbai await you");
        assert_eq!(rec.band, ScoreBand::From90To94);
    }

    #[test]
    fn test_city_without_table_uses_national_band() {
        let rec = recommend(96.0, Stream::Medical, Some(City::Lucknow));
        assert_eq!(rec.city, None);
        assert!(rec.colleges.contains(&"AIIMS Delhi"));
        assert_eq!(rec.cutoffs, "NEET Rank 1-500");
    }

    #[test]
    fn test_science_in_city_falls_back_to_engineering_table() {
        let rec = recommend(70.0, Stream::Science, Some(City::Delhi));
        assert_eq!(rec.city, None);
        assert_eq!(rec.band, ScoreBand::Below80);
        assert!(rec.colleges.contains(&"State Engineering Colleges"));
    }

    #[test]
    fn test_full_reply_lists_city_colleges() {
        let info = AcademicInfo {
            percentage: Some(92.0),
            stream: Some(Stream::Engineering),
            location: Some(City::Mumbai),
            has_college_query: true,
        };
        let reply = academic_reply(&kb(), &info);
        assert!(reply.contains("1. **IIT Bombay**"));
        assert!(reply.contains("VJTI Mumbai"));
        assert!(reply.contains("Engineering in Mumbai"));
        assert!(reply.contains("90-94% range"));
        assert!(reply.contains("https://example.test/college"));
        assert!(!reply.contains('{'));
    }

    #[test]
    fn test_percentage_without_stream_gives_paths() {
        let info = AcademicInfo {
            percentage: Some(88.5),
            ..Default::default()
        };
        let reply = academic_reply(&kb(), &info);
        assert!(reply.contains("Guidance for 88.5%"));
        assert!(reply.contains("ENGINEERING Path"));
    }

    #[test]
    fn test_city_only_lists_all_streams() {
        let info = AcademicInfo {
            location: Some(City::Pune),
            has_college_query: true,
            ..Default::default()
        };
        let reply = academic_reply(&kb(), &info);
        assert!(reply.contains("Best Colleges in Pune"));
        assert!(reply.contains("**🎓 Management:**"));
        // only the top four of each stream
        assert!(!reply.contains("Maharashtra Institute of Medical Sciences"));
    }

    #[test]
    fn test_stream_only_overview() {
        let info = AcademicInfo {
            stream: Some(Stream::Medical),
            ..Default::default()
        };
        let reply = academic_reply(&kb(), &info);
        assert!(reply.contains("Top Colleges for Medical"));
        assert!(reply.contains("**📝 Entrance Exam:** NEET"));
    }

    #[test]
    fn test_nothing_usable_asks_for_details() {
        let info = AcademicInfo {
            has_college_query: true,
            ..Default::default()
        };
        let reply = academic_reply(&kb(), &info);
        assert!(reply.contains("could you please share"));
    }
}
