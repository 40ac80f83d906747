use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::compliance::ComplianceResult;
use super::domain::{AnalysisId, AnalysisKind, ListingId};
use super::seo::SeoResult;

/// Either analyzer's output, tagged for storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AnalysisReport {
    Compliance(ComplianceResult),
    Seo(SeoResult),
}

impl AnalysisReport {
    pub fn kind(&self) -> AnalysisKind {
        match self {
            AnalysisReport::Compliance(_) => AnalysisKind::Compliance,
            AnalysisReport::Seo(_) => AnalysisKind::Seo,
        }
    }

    pub fn score(&self) -> u8 {
        match self {
            AnalysisReport::Compliance(result) => result.score,
            AnalysisReport::Seo(result) => result.score,
        }
    }
}

/// Persisted analysis, stamped by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredAnalysis {
    pub id: AnalysisId,
    pub listing_id: ListingId,
    pub created_at: DateTime<Utc>,
    pub report: AnalysisReport,
}

impl StoredAnalysis {
    pub fn receipt(&self) -> SaveReceipt {
        SaveReceipt {
            id: self.id.clone(),
            created_at: self.created_at,
        }
    }
}

/// Acknowledgement returned by a successful save.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveReceipt {
    pub id: AnalysisId,
    pub created_at: DateTime<Utc>,
}

/// Storage abstraction so the analyzers never depend on persistence.
///
/// Write ordering per listing and any retry policy belong to the implementation.
pub trait ResultStore: Send + Sync {
    fn save(
        &self,
        listing_id: &ListingId,
        report: AnalysisReport,
    ) -> Result<SaveReceipt, RepositoryError>;

    fn latest_by_listing(
        &self,
        listing_id: &ListingId,
        kind: AnalysisKind,
    ) -> Result<Option<StoredAnalysis>, RepositoryError>;
}

/// Error enumeration for store failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("record not found")]
    NotFound,
    #[error("result store unavailable: {0}")]
    Unavailable(String),
}
