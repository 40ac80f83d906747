//! Listing copy analysis: fair-housing compliance and SEO scoring.
//!
//! Both analyzers are pure functions of their input and the static dictionaries in
//! [`dictionary`]. Persistence is a separate, explicit step owned by [`service`], so a
//! computed result is never lost because a store write failed.

pub mod compliance;
pub mod dictionary;
pub mod domain;
pub(crate) mod matcher;
pub mod repository;
pub mod router;
pub mod seo;
pub mod service;
pub mod validation;

#[cfg(test)]
mod tests;

pub use compliance::{
    is_passing_score, ComplianceAnalyzer, ComplianceIssue, ComplianceResult, Severity,
    COMPLIANCE_THRESHOLD,
};
pub use dictionary::{RiskCategory, RiskTerm};
pub use domain::{AnalysisId, AnalysisKind, ListingId};
pub use repository::{
    AnalysisReport, RepositoryError, ResultStore, SaveReceipt, StoredAnalysis,
};
pub use router::audit_router;
pub use seo::{SeoAnalyzer, SeoCategory, SeoResult, SeoSuggestion, MAX_KEYWORDS};
pub use service::{AuditOutcome, AuditServiceError, ListingAuditService, PersistenceStatus};
pub use validation::{ComplianceInput, ComplianceRequest, InvalidInputError, SeoInput, SeoRequest};
