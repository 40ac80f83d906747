//! Fair-housing screen for listing copy.
//!
//! Every dictionary term is tested once against the text. A hit costs points according to
//! the severity of its protected class and contributes one issue, however often the term
//! repeats. The remediated text is a single forward pass over those issues; it is not
//! re-checked, so running the analyzer on `improved_text` is not guaranteed to score 100.

use serde::{Deserialize, Serialize};

use super::dictionary::{replacement_for, risk_pattern, risk_terms, RiskCategory, RiskTerm};
use super::matcher::{clamp_score, replace_whole_word, SCORE_CEILING};

pub const COMPLIANCE_THRESHOLD: u8 = 70;

/// Lowest score still considered compliant is [`COMPLIANCE_THRESHOLD`].
pub fn is_passing_score(score: u8) -> bool {
    score >= COMPLIANCE_THRESHOLD
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    High,
    Medium,
    /// Carries its own deduction but no category currently maps to it.
    Low,
}

impl Severity {
    pub fn for_category(category: RiskCategory) -> Self {
        match category {
            RiskCategory::FamilyStatus | RiskCategory::Race => Severity::High,
            RiskCategory::Religion
            | RiskCategory::Gender
            | RiskCategory::Disability
            | RiskCategory::Nationality => Severity::Medium,
        }
    }

    pub fn deduction(self) -> i32 {
        match self {
            Severity::High => 20,
            Severity::Medium => 10,
            Severity::Low => 5,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Severity::High => "high",
            Severity::Medium => "medium",
            Severity::Low => "low",
        }
    }
}

/// One matched dictionary term.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComplianceIssue {
    #[serde(rename = "type")]
    pub category: RiskCategory,
    pub severity: Severity,
    #[serde(rename = "text")]
    pub matched_text: String,
    pub suggestion: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplianceResult {
    pub score: u8,
    pub is_compliant: bool,
    pub issues: Vec<ComplianceIssue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub improved_text: Option<String>,
}

impl ComplianceResult {
    pub fn high_severity_count(&self) -> usize {
        self.issues
            .iter()
            .filter(|issue| issue.severity == Severity::High)
            .count()
    }
}

/// Stateless analyzer; reads only the process-wide dictionary.
#[derive(Debug, Clone, Copy, Default)]
pub struct ComplianceAnalyzer;

impl ComplianceAnalyzer {
    pub fn new() -> Self {
        Self
    }

    pub fn analyze(&self, text: &str) -> ComplianceResult {
        let issues: Vec<ComplianceIssue> = risk_terms()
            .iter()
            .filter(|entry| term_matches(entry, text))
            .map(issue_for)
            .collect();

        let deductions: i32 = issues.iter().map(|issue| issue.severity.deduction()).sum();
        let score = clamp_score(SCORE_CEILING - deductions);

        let improved_text = if issues.is_empty() {
            None
        } else {
            Some(remediate(text, &issues))
        };

        ComplianceResult {
            score,
            is_compliant: is_passing_score(score),
            issues,
            improved_text,
        }
    }
}

fn term_matches(entry: &RiskTerm, text: &str) -> bool {
    risk_pattern(entry.term)
        .map(|pattern| pattern.is_match(text))
        .unwrap_or(false)
}

fn issue_for(entry: &RiskTerm) -> ComplianceIssue {
    let suggestion = match replacement_for(entry.term) {
        Some(replacement) => replacement.to_string(),
        None => format!("Remove or replace terms related to {}", entry.category),
    };

    ComplianceIssue {
        category: entry.category,
        severity: Severity::for_category(entry.category),
        matched_text: entry.term.to_string(),
        suggestion,
    }
}

/// Single pass in issue order; terms without a replacement are deleted outright.
fn remediate(text: &str, issues: &[ComplianceIssue]) -> String {
    issues.iter().fold(text.to_string(), |current, issue| {
        match risk_pattern(&issue.matched_text) {
            Some(pattern) => {
                let replacement = replacement_for(&issue.matched_text).unwrap_or("");
                replace_whole_word(&current, pattern, replacement)
            }
            None => current,
        }
    })
}
