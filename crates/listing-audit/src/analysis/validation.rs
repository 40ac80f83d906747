use serde::{Deserialize, Serialize};

use super::domain::ListingId;
use crate::config::AuditLimits;

/// Rejected analyzer input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidInputError {
    #[error("missing required field `{0}`")]
    MissingField(&'static str),
    #[error("`{field}` exceeds {max} characters (found {found})")]
    TooLong {
        field: &'static str,
        max: usize,
        found: usize,
    },
}

/// Inbound payload for a fair-housing check.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplianceRequest {
    #[serde(default)]
    pub listing_id: Option<ListingId>,
    #[serde(default)]
    pub text: Option<String>,
}

/// Inbound payload for an SEO check.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeoRequest {
    #[serde(default)]
    pub listing_id: Option<ListingId>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComplianceInput {
    pub listing_id: Option<ListingId>,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeoInput {
    pub listing_id: Option<ListingId>,
    pub text: String,
    pub title: String,
    pub location: String,
}

impl ComplianceRequest {
    /// Absent text is analyzed as the empty string.
    pub fn validate(self, limits: &AuditLimits) -> Result<ComplianceInput, InvalidInputError> {
        let text = self.text.unwrap_or_default();
        ensure_within(limits, "text", &text)?;

        Ok(ComplianceInput {
            listing_id: self.listing_id,
            text,
        })
    }
}

impl SeoRequest {
    pub fn validate(self, limits: &AuditLimits) -> Result<SeoInput, InvalidInputError> {
        let title = self.title.ok_or(InvalidInputError::MissingField("title"))?;
        let location = self
            .location
            .filter(|value| !value.trim().is_empty())
            .ok_or(InvalidInputError::MissingField("location"))?;
        let text = self.description.unwrap_or_default();

        ensure_within(limits, "title", &title)?;
        ensure_within(limits, "description", &text)?;
        ensure_within(limits, "location", &location)?;

        Ok(SeoInput {
            listing_id: self.listing_id,
            text,
            title,
            location,
        })
    }
}

fn ensure_within(
    limits: &AuditLimits,
    field: &'static str,
    value: &str,
) -> Result<(), InvalidInputError> {
    let found = value.chars().count();
    if found > limits.max_text_chars {
        return Err(InvalidInputError::TooLong {
            field,
            max: limits.max_text_chars,
            found,
        });
    }
    Ok(())
}
