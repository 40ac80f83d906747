//! Static rule tables backing both analyzers.
//!
//! The tables are plain `&'static` slices. Anything derived from them (compiled patterns,
//! the replacement map, the stop-word set) is built once per process and only ever read.

use std::collections::{HashMap, HashSet};
use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use super::matcher::whole_word_pattern;

/// Protected-class grouping for fair-housing risk terms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RiskCategory {
    FamilyStatus,
    Race,
    Religion,
    Gender,
    Disability,
    Nationality,
}

impl RiskCategory {
    pub const ALL: [RiskCategory; 6] = [
        RiskCategory::FamilyStatus,
        RiskCategory::Race,
        RiskCategory::Religion,
        RiskCategory::Gender,
        RiskCategory::Disability,
        RiskCategory::Nationality,
    ];

    /// Wire key, also used when interpolating the category into suggestion text.
    pub fn key(self) -> &'static str {
        match self {
            RiskCategory::FamilyStatus => "familyStatus",
            RiskCategory::Race => "race",
            RiskCategory::Religion => "religion",
            RiskCategory::Gender => "gender",
            RiskCategory::Disability => "disability",
            RiskCategory::Nationality => "nationality",
        }
    }

    pub fn terms(self) -> &'static [&'static str] {
        match self {
            RiskCategory::FamilyStatus => FAMILY_STATUS_TERMS,
            RiskCategory::Race => RACE_TERMS,
            RiskCategory::Religion => RELIGION_TERMS,
            RiskCategory::Gender => GENDER_TERMS,
            RiskCategory::Disability => DISABILITY_TERMS,
            RiskCategory::Nationality => NATIONALITY_TERMS,
        }
    }
}

impl fmt::Display for RiskCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Dictionary entry: a phrase tied to exactly one protected class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RiskTerm {
    pub term: &'static str,
    pub category: RiskCategory,
}

const FAMILY_STATUS_TERMS: &[&str] = &[
    "adults only",
    "adult only",
    "no children",
    "no kids",
    "no families",
    "child free",
    "bachelor",
    "bachelors",
    "perfect for couples",
    "ideal for couples",
    "empty nesters",
    "newlyweds",
    "singles only",
    "mature couple",
    "great for singles",
];

const RACE_TERMS: &[&str] = &[
    "caucasian",
    "white only",
    "whites only",
    "white neighborhood",
    "black neighborhood",
    "hispanic neighborhood",
    "asian neighborhood",
    "ethnic neighborhood",
    "segregated",
    "restricted community",
];

const RELIGION_TERMS: &[&str] = &[
    "church",
    "close to church",
    "near church",
    "christian",
    "catholic",
    "jewish",
    "muslim",
    "synagogue",
    "mosque",
    "parish",
];

const GENDER_TERMS: &[&str] = &[
    "female only",
    "male only",
    "women only",
    "men only",
    "ladies only",
    "gentlemen only",
    "master bedroom",
    "man cave",
    "fraternity",
    "sorority",
];

const DISABILITY_TERMS: &[&str] = &[
    "handicapped",
    "no wheelchairs",
    "able-bodied",
    "able bodied",
    "physically fit",
    "mentally ill",
    "must climb stairs",
    "no disabled",
    "crippled",
];

const NATIONALITY_TERMS: &[&str] = &[
    "english speaking",
    "english only",
    "no immigrants",
    "americans only",
    "us citizens only",
    "foreigners",
    "illegal aliens",
    "native born",
];

/// Specific replacement phrases, keyed by the exact dictionary term.
const REPLACEMENTS: &[(&str, &str)] = &[
    ("bachelor", "resident"),
    ("bachelors", "residents"),
    ("perfect for couples", "perfect for any household"),
    ("ideal for couples", "ideal for any household"),
    ("empty nesters", "residents"),
    ("newlyweds", "residents"),
    ("great for singles", "great for anyone"),
    ("close to church", "close to places of worship"),
    ("near church", "near places of worship"),
    ("master bedroom", "primary bedroom"),
    ("man cave", "bonus room"),
    ("handicapped", "accessible"),
    ("physically fit", "active"),
    ("must climb stairs", "upper-level unit"),
    ("english speaking", "all applicants welcome"),
];

/// Words that never count as SEO keywords.
const STOP_WORDS: &[&str] = &[
    "a", "about", "above", "after", "again", "against", "all", "also", "am", "an", "and", "any",
    "are", "as", "at", "be", "because", "been", "before", "being", "below", "between", "both",
    "but", "by", "can", "could", "did", "do", "does", "doing", "down", "during", "each", "every",
    "few", "for", "from", "further", "had", "has", "have", "having", "he", "her", "here",
    "hers", "herself", "him", "himself", "his", "how", "i", "if", "in", "into", "is", "it",
    "its", "itself", "just", "me", "more", "most", "much", "must", "my", "myself", "no", "nor",
    "not", "now", "of", "off", "on", "once", "only", "or", "other", "our", "ours", "ourselves",
    "out", "over", "own", "same", "she", "should", "so", "some", "such", "than", "that", "the",
    "their", "theirs", "them", "themselves", "then", "there", "these", "they", "this", "those",
    "through", "to", "too", "under", "until", "up", "very", "was", "we", "were", "what",
    "when", "where", "which", "while", "who", "whom", "why", "will", "with", "would", "you",
    "your", "yours", "yourself", "yourselves",
];

/// Property features buyers and renters search for.
pub const PROPERTY_KEYWORDS: &[&str] = &[
    "bedroom",
    "bathroom",
    "kitchen",
    "spacious",
    "renovated",
    "updated",
    "hardwood",
    "garage",
    "backyard",
    "patio",
    "deck",
    "fireplace",
    "granite",
    "stainless",
    "appliances",
    "closet",
    "basement",
    "laundry",
    "pool",
    "square feet",
    "open floor plan",
    "natural light",
    "move-in ready",
    "view",
];

/// Neighborhood and location signals.
pub const LOCATION_KEYWORDS: &[&str] = &[
    "neighborhood",
    "downtown",
    "schools",
    "park",
    "shopping",
    "restaurants",
    "dining",
    "transit",
    "commute",
    "highway",
    "community",
    "nearby",
    "minutes from",
    "walking distance",
    "close to",
];

static RISK_TERMS: Lazy<Vec<RiskTerm>> = Lazy::new(|| {
    RiskCategory::ALL
        .iter()
        .flat_map(|category| {
            category.terms().iter().map(move |term| RiskTerm {
                term: *term,
                category: *category,
            })
        })
        .collect()
});

static RISK_PATTERNS: Lazy<HashMap<&'static str, Regex>> = Lazy::new(|| {
    RISK_TERMS
        .iter()
        .map(|entry| (entry.term, whole_word_pattern(entry.term)))
        .collect()
});

static REPLACEMENT_MAP: Lazy<HashMap<&'static str, &'static str>> =
    Lazy::new(|| REPLACEMENTS.iter().copied().collect());

static STOP_WORD_SET: Lazy<HashSet<&'static str>> =
    Lazy::new(|| STOP_WORDS.iter().copied().collect());

/// Every risk term, in category order then table order.
pub fn risk_terms() -> &'static [RiskTerm] {
    &RISK_TERMS
}

/// Compiled whole-word pattern for a dictionary term.
pub fn risk_pattern(term: &str) -> Option<&'static Regex> {
    RISK_PATTERNS.get(term)
}

pub fn replacement_for(term: &str) -> Option<&'static str> {
    REPLACEMENT_MAP.get(term).copied()
}

pub fn is_stop_word(token: &str) -> bool {
    STOP_WORD_SET.contains(token)
}
