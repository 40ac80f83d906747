use regex::{NoExpand, Regex};

pub const SCORE_FLOOR: i32 = 0;
pub const SCORE_CEILING: i32 = 100;

/// Case-insensitive, word-bounded pattern for a literal phrase.
pub fn whole_word_pattern(term: &str) -> Regex {
    Regex::new(&format!(r"(?i)\b{}\b", regex::escape(term)))
        .expect("escaped literal always compiles")
}

/// Substitute every match of `pattern` with `replacement`, taken literally.
pub fn replace_whole_word(text: &str, pattern: &Regex, replacement: &str) -> String {
    pattern.replace_all(text, NoExpand(replacement)).into_owned()
}

pub fn clamp_score(raw: i32) -> u8 {
    raw.clamp(SCORE_FLOOR, SCORE_CEILING) as u8
}

/// Case-insensitive substring test against an already lowercased haystack.
pub fn contains_phrase(lowered_haystack: &str, needle: &str) -> bool {
    lowered_haystack.contains(&needle.to_lowercase())
}
