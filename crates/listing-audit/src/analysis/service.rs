use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, info, warn};

use super::compliance::{ComplianceAnalyzer, ComplianceResult};
use super::domain::{AnalysisKind, ListingId};
use super::repository::{
    AnalysisReport, RepositoryError, ResultStore, SaveReceipt, StoredAnalysis,
};
use super::seo::{SeoAnalyzer, SeoResult};
use super::validation::{ComplianceRequest, InvalidInputError, SeoRequest};
use crate::config::AuditLimits;

/// What happened to a computed result after analysis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum PersistenceStatus {
    Saved(SaveReceipt),
    /// No listing id was supplied, so nothing was written.
    Skipped,
    Failed {
        error: String,
    },
}

impl PersistenceStatus {
    pub fn is_saved(&self) -> bool {
        matches!(self, PersistenceStatus::Saved(_))
    }
}

/// Analyzer output plus the outcome of the explicit save step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuditOutcome<T> {
    #[serde(flatten)]
    pub result: T,
    pub persistence: PersistenceStatus,
}

/// Service composing the pure analyzers with the result store.
pub struct ListingAuditService<S> {
    compliance: ComplianceAnalyzer,
    seo: SeoAnalyzer,
    store: Arc<S>,
    limits: AuditLimits,
}

impl<S> ListingAuditService<S>
where
    S: ResultStore + 'static,
{
    pub fn new(store: Arc<S>, limits: AuditLimits) -> Self {
        Self {
            compliance: ComplianceAnalyzer::new(),
            seo: SeoAnalyzer::new(),
            store,
            limits,
        }
    }

    pub fn limits(&self) -> &AuditLimits {
        &self.limits
    }

    /// Screen listing text for fair-housing risk, then persist if a listing id was given.
    pub fn check_compliance(
        &self,
        request: ComplianceRequest,
    ) -> Result<AuditOutcome<ComplianceResult>, AuditServiceError> {
        let input = request.validate(&self.limits)?;
        let result = self.compliance.analyze(&input.text);
        debug!(
            score = result.score,
            issues = result.issues.len(),
            compliant = result.is_compliant,
            "compliance analysis complete"
        );

        let persistence = self.persist(
            input.listing_id.as_ref(),
            AnalysisReport::Compliance(result.clone()),
        );

        Ok(AuditOutcome {
            result,
            persistence,
        })
    }

    /// Score listing copy for search visibility, then persist if a listing id was given.
    pub fn check_seo(
        &self,
        request: SeoRequest,
    ) -> Result<AuditOutcome<SeoResult>, AuditServiceError> {
        let input = request.validate(&self.limits)?;
        let result = self
            .seo
            .analyze(&input.text, &input.title, &input.location)?;
        debug!(
            score = result.score,
            suggestions = result.suggestions.len(),
            "seo analysis complete"
        );

        let persistence =
            self.persist(input.listing_id.as_ref(), AnalysisReport::Seo(result.clone()));

        Ok(AuditOutcome {
            result,
            persistence,
        })
    }

    pub fn latest_compliance(
        &self,
        listing_id: &ListingId,
    ) -> Result<Option<StoredAnalysis>, AuditServiceError> {
        Ok(self
            .store
            .latest_by_listing(listing_id, AnalysisKind::Compliance)?)
    }

    pub fn latest_seo(
        &self,
        listing_id: &ListingId,
    ) -> Result<Option<StoredAnalysis>, AuditServiceError> {
        Ok(self.store.latest_by_listing(listing_id, AnalysisKind::Seo)?)
    }

    fn persist(&self, listing_id: Option<&ListingId>, report: AnalysisReport) -> PersistenceStatus {
        let Some(listing_id) = listing_id else {
            return PersistenceStatus::Skipped;
        };

        let kind = report.kind();
        match self.store.save(listing_id, report) {
            Ok(receipt) => {
                info!(
                    listing_id = %listing_id,
                    kind = kind.label(),
                    analysis_id = %receipt.id,
                    "analysis result stored"
                );
                PersistenceStatus::Saved(receipt)
            }
            Err(error) => {
                warn!(
                    listing_id = %listing_id,
                    kind = kind.label(),
                    %error,
                    "failed to store analysis result; returning computed result"
                );
                PersistenceStatus::Failed {
                    error: error.to_string(),
                }
            }
        }
    }
}

/// Error raised by the audit service.
#[derive(Debug, thiserror::Error)]
pub enum AuditServiceError {
    #[error(transparent)]
    InvalidInput(#[from] InvalidInputError),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
