//! Academic reference data: streams, cities, city college tables and
//! percentage score bands.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stream {
    Engineering,
    Medical,
    Commerce,
    Science,
    Arts,
}

impl Stream {
    /// Detection order. The first stream with a keyword hit wins.
    pub const ALL: [Stream; 5] = [
        Stream::Engineering,
        Stream::Medical,
        Stream::Commerce,
        Stream::Science,
        Stream::Arts,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            Stream::Engineering => "engineering",
            Stream::Medical => "medical",
            Stream::Commerce => "commerce",
            Stream::Science => "science",
            Stream::Arts => "arts",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Stream::Engineering => "Engineering",
            Stream::Medical => "Medical",
            Stream::Commerce => "Commerce",
            Stream::Science => "Science",
            Stream::Arts => "Arts",
        }
    }

    pub fn keywords(&self) -> &'static [&'static str] {
        match self {
            Stream::Engineering => &[
                "engineering",
                "engineer",
                "tech",
                "computer",
                "mechanical",
                "civil",
                "electrical",
            ],
            Stream::Medical => &["medical", "doctor", "mbbs", "medicine", "health", "neet"],
            Stream::Commerce => &[
                "commerce",
                "business",
                "management",
                "bcom",
                "bba",
                "economics",
            ],
            Stream::Science => &["science", "physics", "chemistry", "biology", "bsc"],
            Stream::Arts => &["arts", "humanities", "literature", "history", "psychology"],
        }
    }
}

impl fmt::Display for Stream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum City {
    Delhi,
    Mumbai,
    Bangalore,
    Chennai,
    Hyderabad,
    Kolkata,
    Pune,
    Ahmedabad,
    Jaipur,
    Lucknow,
    Bhopal,
    Kochi,
    Bhubaneswar,
    Chandigarh,
    Indore,
    Nagpur,
    Coimbatore,
    Vadodara,
    Visakhapatnam,
    Thiruvananthapuram,
}

impl City {
    /// Resolution order. Shared aliases (e.g. "maharashtra") resolve to the
    /// first city listing them.
    pub const ALL: [City; 20] = [
        City::Delhi,
        City::Mumbai,
        City::Bangalore,
        City::Chennai,
        City::Hyderabad,
        City::Kolkata,
        City::Pune,
        City::Ahmedabad,
        City::Jaipur,
        City::Lucknow,
        City::Bhopal,
        City::Kochi,
        City::Bhubaneswar,
        City::Chandigarh,
        City::Indore,
        City::Nagpur,
        City::Coimbatore,
        City::Vadodara,
        City::Visakhapatnam,
        City::Thiruvananthapuram,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            City::Delhi => "delhi",
            City::Mumbai => "mumbai",
            City::Bangalore => "bangalore",
            City::Chennai => "chennai",
            City::Hyderabad => "hyderabad",
            City::Kolkata => "kolkata",
            City::Pune => "pune",
            City::Ahmedabad => "ahmedabad",
            City::Jaipur => "jaipur",
            City::Lucknow => "lucknow",
            City::Bhopal => "bhopal",
            City::Kochi => "kochi",
            City::Bhubaneswar => "bhubaneswar",
            City::Chandigarh => "chandigarh",
            City::Indore => "indore",
            City::Nagpur => "nagpur",
            City::Coimbatore => "coimbatore",
            City::Vadodara => "vadodara",
            City::Visakhapatnam => "visakhapatnam",
            City::Thiruvananthapuram => "thiruvananthapuram",
        }
    }

    pub fn aliases(&self) -> &'static [&'static str] {
        match self {
            City::Delhi => &["new delhi", "ncr", "gurgaon", "noida", "faridabad", "ghaziabad"],
            City::Mumbai => &["bombay", "navi mumbai", "thane"],
            City::Bangalore => &["bengaluru", "karnataka"],
            City::Chennai => &["madras", "tamil nadu"],
            City::Hyderabad => &["telangana", "andhra pradesh"],
            City::Kolkata => &["calcutta", "west bengal"],
            City::Pune => &["maharashtra"],
            City::Ahmedabad => &["gujarat"],
            City::Jaipur => &["rajasthan"],
            City::Lucknow => &["uttar pradesh", "up"],
            City::Bhopal => &["madhya pradesh", "mp"],
            City::Kochi => &["cochin", "kerala"],
            City::Bhubaneswar => &["odisha"],
            City::Chandigarh => &["punjab", "haryana"],
            City::Indore => &["madhya pradesh"],
            City::Nagpur => &["maharashtra"],
            City::Coimbatore => &["tamil nadu"],
            City::Vadodara => &["baroda", "gujarat"],
            City::Visakhapatnam => &["vizag", "andhra pradesh"],
            City::Thiruvananthapuram => &["trivandrum", "kerala"],
        }
    }

    /// Display form, e.g. "Mumbai".
    pub fn title(&self) -> String {
        let name = self.name();
        let mut chars = name.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }

    pub fn from_name(token: &str) -> Option<City> {
        City::ALL.into_iter().find(|c| c.name() == token)
    }

    pub fn from_alias(token: &str) -> Option<City> {
        City::ALL
            .into_iter()
            .find(|c| c.aliases().iter().any(|a| *a == token))
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Institutions per stream for one city. `management` has no detectable
/// stream of its own and only shows up in all-stream listings.
#[derive(Debug, Clone, Copy)]
pub struct CityColleges {
    pub engineering: &'static [&'static str],
    pub medical: &'static [&'static str],
    pub commerce: &'static [&'static str],
    pub arts: &'static [&'static str],
    pub management: &'static [&'static str],
}

impl CityColleges {
    pub fn for_stream(&self, stream: Stream) -> Option<&'static [&'static str]> {
        match stream {
            Stream::Engineering => Some(self.engineering),
            Stream::Medical => Some(self.medical),
            Stream::Commerce => Some(self.commerce),
            Stream::Arts => Some(self.arts),
            Stream::Science => None,
        }
    }

    /// (label, institutions) in display order.
    pub fn all_streams(&self) -> [(&'static str, &'static [&'static str]); 5] {
        [
            ("Engineering", self.engineering),
            ("Medical", self.medical),
            ("Commerce", self.commerce),
            ("Arts", self.arts),
            ("Management", self.management),
        ]
    }
}

/// College table for a city, if we carry one.
pub fn city_colleges(city: City) -> Option<&'static CityColleges> {
    match city {
        City::Mumbai => Some(&MUMBAI),
        City::Delhi => Some(&DELHI),
        City::Bangalore => Some(&BANGALORE),
        City::Chennai => Some(&CHENNAI),
        City::Pune => Some(&PUNE),
        City::Hyderabad => Some(&HYDERABAD),
        City::Kolkata => Some(&KOLKATA),
        City::Jaipur => Some(&JAIPUR),
        City::Ahmedabad => Some(&AHMEDABAD),
        City::Indore => Some(&INDORE),
        _ => None,
    }
}

const MUMBAI: CityColleges = CityColleges {
    engineering: &["IIT Bombay", "VJTI Mumbai", "SPIT Mumbai", "DJ Sanghvi", "Thadomal Shahani", "KJ Somaiya"],
    medical: &["Seth GS Medical College", "Lokmanya Tilak Medical College", "Topiwala National Medical College", "BYL Nair Hospital"],
    commerce: &["St. Xavier's College", "HR College", "Mithibai College", "KC College", "NMIMS Mumbai"],
    arts: &["St. Xavier's College", "Elphinstone College", "Wilson College", "Ruia College"],
    management: &["NMIMS Mumbai", "JBIMS", "SP Jain", "Welingkar Institute"],
};

const DELHI: CityColleges = CityColleges {
    engineering: &["IIT Delhi", "DTU", "NSIT", "IIIT Delhi", "Jamia Millia Islamia", "Bharati Vidyapeeth"],
    medical: &["AIIMS Delhi", "MAMC Delhi", "UCMS Delhi", "LHMC Delhi", "VMMC Delhi"],
    commerce: &["SRCC", "LSR", "Hindu College", "Hansraj College", "Ramjas College", "Kirori Mal College"],
    arts: &["St. Stephen's College", "Hindu College", "Miranda House", "LSR", "Ramjas College"],
    management: &["FMS Delhi", "IIM Rohtak", "MDI Gurgaon", "IMT Ghaziabad"],
};

const BANGALORE: CityColleges = CityColleges {
    engineering: &["IISc Bangalore", "IIIT Bangalore", "RV College", "BMS College", "PES University", "MS Ramaiah"],
    medical: &["NIMHANS", "St. John's Medical College", "Bangalore Medical College", "MS Ramaiah Medical"],
    commerce: &["Christ University", "St. Joseph's College", "Mount Carmel College", "Jain University"],
    arts: &["Christ University", "St. Joseph's College", "Bangalore University", "Jain University"],
    management: &["IIM Bangalore", "IIPM Bangalore", "Christ University", "Alliance University"],
};

const CHENNAI: CityColleges = CityColleges {
    engineering: &["IIT Madras", "Anna University", "SSN College", "PSG College", "VIT Chennai", "SRM Chennai"],
    medical: &["CMC Vellore", "Stanley Medical College", "Madras Medical College", "Sri Ramachandra Medical"],
    commerce: &["Loyola College", "Stella Maris College", "Presidency College", "MOP Vaishnav"],
    arts: &["Loyola College", "Stella Maris College", "Presidency College", "Women's Christian College"],
    management: &["IIM Chennai", "Great Lakes", "Loyola Institute", "SRM Business School"],
};

const PUNE: CityColleges = CityColleges {
    engineering: &["COEP", "PICT", "VIT Pune", "MIT Pune", "Symbiosis Institute", "PCCOE"],
    medical: &[
        "Armed Forces Medical College",
        "BJ Medical College",
        "Symbiosis Medical College",
        "Dr. DY Patil Medical College",
        "Bharati Vidyapeeth Medical College",
        "Maharashtra Institute of Medical Sciences",
    ],
    commerce: &["Fergusson College", "Symbiosis College", "Modern College", "SP College"],
    arts: &["Fergusson College", "Symbiosis College", "Modern College", "Garware College"],
    management: &["SCMHRD", "SIBM Pune", "MIT School of Management", "PUMBA"],
};

const HYDERABAD: CityColleges = CityColleges {
    engineering: &["IIT Hyderabad", "IIIT Hyderabad", "BITS Pilani Hyderabad", "CBIT", "Osmania University"],
    medical: &["AIIMS Hyderabad", "Osmania Medical College", "Gandhi Medical College", "Kamineni Medical"],
    commerce: &["Osmania University", "St. Francis College", "Loyola Academy", "ICFAI Business School"],
    arts: &["Osmania University", "St. Francis College", "Loyola Academy", "Nizam College"],
    management: &["ISB Hyderabad", "ICFAI Business School", "Osmania University", "JNTU"],
};

const KOLKATA: CityColleges = CityColleges {
    engineering: &["IIT Kharagpur", "Jadavpur University", "Bengal Engineering College", "Kalyani University"],
    medical: &["Medical College Kolkata", "IPGMER", "RG Kar Medical College", "NRS Medical College"],
    commerce: &["St. Xavier's College", "Presidency College", "Scottish Church College", "Calcutta University"],
    arts: &["St. Xavier's College", "Presidency College", "Scottish Church College", "Jadavpur University"],
    management: &["IIM Calcutta", "XLRI Jamshedpur", "St. Xavier's University", "Calcutta University"],
};

const JAIPUR: CityColleges = CityColleges {
    engineering: &["MNIT Jaipur", "JNU Jaipur", "Poornima College", "Arya College", "LNM Institute"],
    medical: &["SMS Medical College", "JLN Medical College", "Mahatma Gandhi Medical College"],
    commerce: &["Rajasthan University", "St. Xavier's Jaipur", "Poddar College"],
    arts: &["Rajasthan University", "St. Xavier's Jaipur", "Maharani College"],
    management: &["MNIT Jaipur", "Amity Jaipur", "JNU Jaipur"],
};

const AHMEDABAD: CityColleges = CityColleges {
    engineering: &["IIT Gandhinagar", "NIT Surat", "PDPU", "Nirma University", "LD College"],
    medical: &["BJ Medical College", "NHL Medical College", "Smt. SCL Medical College"],
    commerce: &["Gujarat University", "Nirma University", "HL College"],
    arts: &["Gujarat University", "St. Xavier's Ahmedabad", "Christ College"],
    management: &["IIM Ahmedabad", "Nirma University", "Gujarat University"],
};

const INDORE: CityColleges = CityColleges {
    engineering: &["IIT Indore", "SGSITS", "Medicaps University", "Acropolis Institute"],
    medical: &["MGM Medical College", "Sri Aurobindo Medical College", "Index Medical College"],
    commerce: &["Devi Ahilya University", "Prestige Institute", "Acropolis Institute"],
    arts: &["Devi Ahilya University", "Holkar College", "Government College"],
    management: &["IIM Indore", "Prestige Institute", "Acropolis Institute"],
};

/// Percentage bands. Lower bounds are inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreBand {
    Below80,
    From80To84,
    From85To89,
    From90To94,
    From95,
}

impl ScoreBand {
    pub fn from_percentage(percentage: f64) -> Self {
        if percentage >= 95.0 {
            ScoreBand::From95
        } else if percentage >= 90.0 {
            ScoreBand::From90To94
        } else if percentage >= 85.0 {
            ScoreBand::From85To89
        } else if percentage >= 80.0 {
            ScoreBand::From80To84
        } else {
            ScoreBand::Below80
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ScoreBand::From95 => "95+",
            ScoreBand::From90To94 => "90-94",
            ScoreBand::From85To89 => "85-89",
            ScoreBand::From80To84 => "80-84",
            ScoreBand::Below80 => "below 80",
        }
    }

    /// Encouragement used when recommending colleges in a specific city.
    /// `{location}` is filled by the caller.
    pub fn location_message(&self) -> &'static str {
        match self {
            ScoreBand::From95 => "🎉 Excellent score! You're eligible for top colleges in {location}",
            ScoreBand::From90To94 => "🌟 Great score! Top colleges in {location} await you",
            ScoreBand::From85To89 => "✅ Good score! Excellent colleges available in {location}",
            ScoreBand::From80To84 => "👍 Solid score! Many good options in {location}",
            ScoreBand::Below80 => {
                "💪 Don't worry! Many excellent colleges in {location} are still available"
            }
        }
    }

    fn rank(&self) -> i8 {
        *self as i8
    }
}

#[derive(Debug, Clone, Copy)]
pub struct BandRecommendation {
    pub band: ScoreBand,
    pub colleges: &'static [&'static str],
    pub cutoffs: &'static str,
    pub message: &'static str,
}

/// Nationwide recommendation for a stream and band.
///
/// Streams without a national table use the engineering table. When the
/// stream's table has no row for the band, the nearest defined band is used,
/// preferring the lower one on a tie.
pub fn band_recommendation(stream: Stream, band: ScoreBand) -> &'static BandRecommendation {
    let table = match stream {
        Stream::Medical => MEDICAL_BANDS,
        Stream::Commerce => COMMERCE_BANDS,
        _ => ENGINEERING_BANDS,
    };

    table
        .iter()
        .min_by_key(|row| ((row.band.rank() - band.rank()).abs(), row.band.rank()))
        .unwrap_or(&ENGINEERING_BANDS[0])
}

const ENGINEERING_BANDS: &[BandRecommendation] = &[
    BandRecommendation {
        band: ScoreBand::From95,
        colleges: &["IIT Delhi", "IIT Bombay", "IIT Madras", "IIT Kanpur", "IIT Kharagpur"],
        cutoffs: "JEE Advanced Rank 1-1000",
        message: "🎉 Excellent score! You're eligible for top IITs",
    },
    BandRecommendation {
        band: ScoreBand::From90To94,
        colleges: &["IIT Roorkee", "IIT Guwahati", "NIT Trichy", "NIT Warangal", "BITS Pilani"],
        cutoffs: "JEE Main 99+ percentile",
        message: "🌟 Great score! Top NITs and private colleges await",
    },
    BandRecommendation {
        band: ScoreBand::From85To89,
        colleges: &["NIT Surathkal", "NIT Calicut", "IIIT Hyderabad", "VIT Vellore", "Manipal"],
        cutoffs: "JEE Main 95+ percentile",
        message: "✅ Good score! Excellent engineering colleges available",
    },
    BandRecommendation {
        band: ScoreBand::From80To84,
        colleges: &["NIT Jaipur", "NIT Bhopal", "IIIT Bangalore", "SRM Chennai", "Amity"],
        cutoffs: "JEE Main 90+ percentile",
        message: "👍 Solid score! Many good options available",
    },
    BandRecommendation {
        band: ScoreBand::Below80,
        colleges: &["State Engineering Colleges", "Private Universities", "Regional Colleges"],
        cutoffs: "State CET, Private Entrance",
        message: "💪 Don't worry! Many excellent colleges still available",
    },
];

const MEDICAL_BANDS: &[BandRecommendation] = &[
    BandRecommendation {
        band: ScoreBand::From95,
        colleges: &["AIIMS Delhi", "AIIMS Bombay", "JIPMER", "CMC Vellore", "KGMU"],
        cutoffs: "NEET Rank 1-500",
        message: "🏥 Outstanding! Top medical colleges within reach",
    },
    BandRecommendation {
        band: ScoreBand::From90To94,
        colleges: &["AIIMS Jodhpur", "AIIMS Bhubaneswar", "Government Medical Colleges"],
        cutoffs: "NEET Rank 500-5000",
        message: "🩺 Excellent score! Government medical colleges possible",
    },
    BandRecommendation {
        band: ScoreBand::From85To89,
        colleges: &["State Medical Colleges", "Deemed Universities", "Private Medical"],
        cutoffs: "NEET State Quota",
        message: "⚕️ Good score! Medical career definitely possible",
    },
    BandRecommendation {
        band: ScoreBand::From80To84,
        colleges: &["Private Medical Colleges", "Management Quota", "Abroad Options"],
        cutoffs: "NEET Qualifying",
        message: "🌍 Consider private colleges and international options",
    },
];

const COMMERCE_BANDS: &[BandRecommendation] = &[
    BandRecommendation {
        band: ScoreBand::From95,
        colleges: &["SRCC Delhi", "LSR Delhi", "St. Xavier's Mumbai", "Christ Bangalore"],
        cutoffs: "99+ percentile",
        message: "📊 Excellent! Top commerce colleges await you",
    },
    BandRecommendation {
        band: ScoreBand::From90To94,
        colleges: &["Hindu College", "Hansraj College", "Loyola Chennai", "NMIMS Mumbai"],
        cutoffs: "95+ percentile",
        message: "💼 Great score! Premier commerce institutions possible",
    },
    BandRecommendation {
        band: ScoreBand::From85To89,
        colleges: &["Delhi University Colleges", "Mumbai University", "Pune Colleges"],
        cutoffs: "90+ percentile",
        message: "📈 Good score! Many excellent options available",
    },
];

/// Nationwide overview used for stream-only questions.
#[derive(Debug, Clone, Copy)]
pub struct StreamOverview {
    pub top_colleges: &'static [&'static str],
    pub entrance: &'static str,
    pub description: &'static str,
}

pub fn stream_overview(stream: Stream) -> Option<&'static StreamOverview> {
    match stream {
        Stream::Engineering => Some(&StreamOverview {
            top_colleges: &["IIT Delhi", "IIT Bombay", "IIT Madras", "IIT Kanpur", "NIT Trichy", "BITS Pilani"],
            entrance: "JEE Main & Advanced",
            description: "Engineering offers diverse specializations in technology and innovation",
        }),
        Stream::Medical => Some(&StreamOverview {
            top_colleges: &["AIIMS Delhi", "AIIMS Jodhpur", "JIPMER", "CMC Vellore", "KGMU", "MAMC Delhi"],
            entrance: "NEET",
            description: "Medical field focuses on healthcare and saving lives",
        }),
        Stream::Commerce => Some(&StreamOverview {
            top_colleges: &["SRCC Delhi", "LSR Delhi", "St. Xavier's Mumbai", "Christ University", "Loyola Chennai"],
            entrance: "Various university entrance exams",
            description: "Commerce opens doors to business, finance, and management careers",
        }),
        Stream::Science | Stream::Arts => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_boundaries_inclusive_on_lower_end() {
        assert_eq!(ScoreBand::from_percentage(100.0), ScoreBand::From95);
        assert_eq!(ScoreBand::from_percentage(95.0), ScoreBand::From95);
        assert_eq!(ScoreBand::from_percentage(94.9), ScoreBand::From90To94);
        assert_eq!(ScoreBand::from_percentage(90.0), ScoreBand::From90To94);
        assert_eq!(ScoreBand::from_percentage(89.99), ScoreBand::From85To89);
        assert_eq!(ScoreBand::from_percentage(85.0), ScoreBand::From85To89);
        assert_eq!(ScoreBand::from_percentage(80.0), ScoreBand::From80To84);
        assert_eq!(ScoreBand::from_percentage(79.9), ScoreBand::Below80);
        assert_eq!(ScoreBand::from_percentage(12.0), ScoreBand::Below80);
    }

    #[test]
    fn test_engineering_has_every_band() {
        for band in [
            ScoreBand::From95,
            ScoreBand::From90To94,
            ScoreBand::From85To89,
            ScoreBand::From80To84,
            ScoreBand::Below80,
        ] {
            assert_eq!(band_recommendation(Stream::Engineering, band).band, band);
        }
    }

    #[test]
    fn test_missing_band_uses_nearest_defined() {
        // Medical stops at 80-84, commerce at 85-89.
        let medical = band_recommendation(Stream::Medical, ScoreBand::Below80);
        assert_eq!(medical.band, ScoreBand::From80To84);

        let commerce = band_recommendation(Stream::Commerce, ScoreBand::From80To84);
        assert_eq!(commerce.band, ScoreBand::From85To89);
    }

    #[test]
    fn test_streams_without_table_use_engineering() {
        let rec = band_recommendation(Stream::Arts, ScoreBand::From95);
        assert!(rec.colleges.contains(&"IIT Bombay"));
    }

    #[test]
    fn test_city_lookup_by_name_and_alias() {
        assert_eq!(City::from_name("mumbai"), Some(City::Mumbai));
        assert_eq!(City::from_name("bombay"), None);
        assert_eq!(City::from_alias("bombay"), Some(City::Mumbai));
        assert_eq!(City::from_alias("bengaluru"), Some(City::Bangalore));
        // shared alias resolves to the first city listing it
        assert_eq!(City::from_alias("maharashtra"), Some(City::Pune));
    }

    #[test]
    fn test_city_title() {
        assert_eq!(City::Mumbai.title(), "Mumbai");
        assert_eq!(City::Thiruvananthapuram.title(), "Thiruvananthapuram");
    }

    #[test]
    fn test_only_ten_cities_have_tables() {
        let with_tables = City::ALL
            .iter()
            .filter(|c| city_colleges(**c).is_some())
            .count();
        assert_eq!(with_tables, 10);
        assert!(city_colleges(City::Lucknow).is_none());
    }

    #[test]
    fn test_science_has_no_city_column() {
        let mumbai = city_colleges(City::Mumbai).unwrap();
        assert!(mumbai.for_stream(Stream::Science).is_none());
        assert_eq!(mumbai.for_stream(Stream::Engineering).unwrap()[0], "IIT Bombay");
    }
}
