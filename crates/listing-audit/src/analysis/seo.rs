//! Search-visibility heuristics for listing copy.
//!
//! Checks are independent and additive against a starting score of 100. The image alt-text
//! check has no input to inspect and always fires, so the best attainable score is 90 and
//! `improved_text` is always present.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::dictionary::{is_stop_word, LOCATION_KEYWORDS, PROPERTY_KEYWORDS};
use super::matcher::{clamp_score, contains_phrase, SCORE_CEILING};
use super::validation::InvalidInputError;

pub const MAX_KEYWORDS: usize = 10;

const TITLE_MIN_CHARS: usize = 30;
const TITLE_MAX_CHARS: usize = 70;
const DESCRIPTION_MIN_CHARS: usize = 250;
const MIN_PROPERTY_KEYWORDS: usize = 5;
const MIN_LOCATION_KEYWORDS: usize = 3;
const PROPERTY_EXAMPLE_COUNT: usize = 8;
const LOCATION_EXAMPLE_COUNT: usize = 5;
const MIN_TOKEN_CHARS: usize = 4;

const TITLE_SHORT_PENALTY: i32 = 10;
const TITLE_LONG_PENALTY: i32 = 5;
const DESCRIPTION_SHORT_PENALTY: i32 = 15;
const PROPERTY_KEYWORD_PENALTY: i32 = 10;
const LOCATION_KEYWORD_PENALTY: i32 = 10;
const LOCATION_MISSING_PENALTY: i32 = 15;
const ALT_TEXT_PENALTY: i32 = 10;

const STRIPPED_PUNCTUATION: &[char] = &[
    '.', ',', '/', '#', '!', '$', '%', '^', '&', '*', ';', ':', '{', '}', '=', '-', '_', '`', '~',
    '(', ')',
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeoCategory {
    Title,
    Description,
    Keywords,
    Location,
    Images,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeoSuggestion {
    pub category: SeoCategory,
    pub issue: String,
    pub suggestion: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeoResult {
    pub score: u8,
    pub keywords: Vec<String>,
    pub suggestions: Vec<SeoSuggestion>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub improved_text: Option<String>,
}

impl SeoResult {
    pub fn has_suggestion(&self, category: SeoCategory) -> bool {
        self.suggestions
            .iter()
            .any(|suggestion| suggestion.category == category)
    }
}

/// Stateless analyzer; reads only the process-wide keyword tables.
#[derive(Debug, Clone, Copy, Default)]
pub struct SeoAnalyzer;

impl SeoAnalyzer {
    pub fn new() -> Self {
        Self
    }

    pub fn analyze(
        &self,
        text: &str,
        title: &str,
        location: &str,
    ) -> Result<SeoResult, InvalidInputError> {
        let location = location.trim();
        if location.is_empty() {
            return Err(InvalidInputError::MissingField("location"));
        }

        let corpus = format!("{title} {text}").to_lowercase();
        let keywords = extract_keywords(&corpus);

        let mut score = SCORE_CEILING;
        let mut suggestions = Vec::new();

        let title_chars = title.chars().count();
        if title_chars < TITLE_MIN_CHARS {
            score -= TITLE_SHORT_PENALTY;
            suggestions.push(SeoSuggestion {
                category: SeoCategory::Title,
                issue: format!("Title is too short ({title_chars} characters)"),
                suggestion: format!(
                    "Expand the title to at least {TITLE_MIN_CHARS} characters with the property type and a standout feature"
                ),
            });
        } else if title_chars > TITLE_MAX_CHARS {
            score -= TITLE_LONG_PENALTY;
            suggestions.push(SeoSuggestion {
                category: SeoCategory::Title,
                issue: format!("Title is too long ({title_chars} characters)"),
                suggestion: format!(
                    "Shorten the title to {TITLE_MAX_CHARS} characters or fewer so search results do not truncate it"
                ),
            });
        }

        let text_chars = text.chars().count();
        let description_short = text_chars < DESCRIPTION_MIN_CHARS;
        if description_short {
            score -= DESCRIPTION_SHORT_PENALTY;
            suggestions.push(SeoSuggestion {
                category: SeoCategory::Description,
                issue: format!("Description is too short ({text_chars} characters)"),
                suggestion: format!(
                    "Expand the description to at least {DESCRIPTION_MIN_CHARS} characters covering layout, finishes and surroundings"
                ),
            });
        }

        let property_matches = matched_keywords(&corpus, PROPERTY_KEYWORDS);
        if property_matches.len() < MIN_PROPERTY_KEYWORDS {
            score -= PROPERTY_KEYWORD_PENALTY;
            suggestions.push(SeoSuggestion {
                category: SeoCategory::Keywords,
                issue: format!(
                    "Not enough property-specific keywords ({} of {MIN_PROPERTY_KEYWORDS})",
                    property_matches.len()
                ),
                suggestion: format!(
                    "Mention features such as: {}",
                    PROPERTY_KEYWORDS[..PROPERTY_EXAMPLE_COUNT].join(", ")
                ),
            });
        }

        let location_matches = matched_keywords(&corpus, LOCATION_KEYWORDS);
        if location_matches.len() < MIN_LOCATION_KEYWORDS {
            score -= LOCATION_KEYWORD_PENALTY;
            suggestions.push(SeoSuggestion {
                category: SeoCategory::Keywords,
                issue: format!(
                    "Not enough location keywords ({} of {MIN_LOCATION_KEYWORDS})",
                    location_matches.len()
                ),
                suggestion: format!(
                    "Describe the surroundings with terms such as: {}",
                    LOCATION_KEYWORDS[..LOCATION_EXAMPLE_COUNT].join(", ")
                ),
            });
        }

        let location_mentioned = contains_phrase(&corpus, location);
        if !location_mentioned {
            score -= LOCATION_MISSING_PENALTY;
            suggestions.push(SeoSuggestion {
                category: SeoCategory::Location,
                issue: "Specific location not mentioned".to_string(),
                suggestion: format!("Mention {location} in the title or description"),
            });
        }

        score -= ALT_TEXT_PENALTY;
        suggestions.push(SeoSuggestion {
            category: SeoCategory::Images,
            issue: "Image alt text not provided".to_string(),
            suggestion: "Add descriptive alt text to images so search engines can index listing photos"
                .to_string(),
        });

        let improved_text = Some(remediate(
            text,
            location,
            description_short,
            location_mentioned,
            property_matches.first().copied(),
        ));

        Ok(SeoResult {
            score: clamp_score(score),
            keywords,
            suggestions,
            improved_text,
        })
    }
}

/// Top tokens by frequency; ties keep the order in which tokens first appear.
pub fn extract_keywords(corpus: &str) -> Vec<String> {
    let stripped: String = corpus
        .chars()
        .filter(|ch| !STRIPPED_PUNCTUATION.contains(ch))
        .collect();

    let mut counts: Vec<(&str, usize)> = Vec::new();
    let mut positions: HashMap<&str, usize> = HashMap::new();

    for token in stripped.split_whitespace() {
        if token.chars().count() < MIN_TOKEN_CHARS || is_stop_word(token) {
            continue;
        }
        match positions.get(token).copied() {
            Some(index) => counts[index].1 += 1,
            None => {
                positions.insert(token, counts.len());
                counts.push((token, 1));
            }
        }
    }

    // Stable sort preserves first-seen order among equal counts.
    counts.sort_by(|left, right| right.1.cmp(&left.1));
    counts
        .into_iter()
        .take(MAX_KEYWORDS)
        .map(|(token, _)| token.to_string())
        .collect()
}

fn matched_keywords(corpus: &str, table: &'static [&'static str]) -> Vec<&'static str> {
    table
        .iter()
        .copied()
        .filter(|keyword| contains_phrase(corpus, keyword))
        .collect()
}

fn remediate(
    text: &str,
    location: &str,
    description_short: bool,
    location_mentioned: bool,
    first_feature: Option<&str>,
) -> String {
    let mut improved = text.to_string();

    if description_short {
        let body = text.trim_end();
        let highlight = match first_feature {
            Some(feature) => format!("the {feature}"),
            None => "this property".to_string(),
        };
        let sentence = format!(
            "Schedule a showing to experience {highlight} and everything {location} has to offer."
        );
        improved = if body.is_empty() {
            sentence
        } else {
            format!("{body} {sentence}")
        };
    }

    if !location_mentioned {
        improved = format!(
            "Located in {location}, this property features {}",
            lowercase_first(&improved)
        );
    }

    improved
}

/// Lowercase the leading character unless the first word reads as an acronym.
fn lowercase_first(text: &str) -> String {
    let mut chars = text.chars();
    match (chars.next(), chars.next()) {
        (Some(first), Some(second)) if first.is_uppercase() && !second.is_uppercase() => {
            let mut lowered: String = first.to_lowercase().collect();
            lowered.push_str(&text[first.len_utf8()..]);
            lowered
        }
        _ => text.to_string(),
    }
}
