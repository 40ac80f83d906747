//! End-to-end scenarios for the listing audit engine through its public API.
//!
//! Scenarios drive both analyzers directly and through the service facade so the pure
//! analysis and the explicit persistence step are exercised together.

mod common {
    use std::sync::{Arc, Mutex};

    use chrono::{TimeZone, Utc};

    use listing_audit::analysis::{
        AnalysisId, AnalysisKind, AnalysisReport, ListingAuditService, ListingId,
        RepositoryError, ResultStore, SaveReceipt, StoredAnalysis,
    };
    use listing_audit::config::AuditLimits;

    pub(super) const LISTING_TEXT: &str =
        "Perfect for bachelors, walking distance to church, no children allowed.";

    /// Store with a fixed clock so receipts are reproducible.
    #[derive(Default)]
    pub(super) struct FixedClockStore {
        records: Mutex<Vec<StoredAnalysis>>,
    }

    impl FixedClockStore {
        pub(super) fn len(&self) -> usize {
            self.records.lock().expect("store mutex").len()
        }
    }

    impl ResultStore for FixedClockStore {
        fn save(
            &self,
            listing_id: &ListingId,
            report: AnalysisReport,
        ) -> Result<SaveReceipt, RepositoryError> {
            let mut guard = self.records.lock().expect("store mutex");
            let record = StoredAnalysis {
                id: AnalysisId(format!("analysis-{:06}", guard.len() + 1)),
                listing_id: listing_id.clone(),
                created_at: Utc
                    .with_ymd_and_hms(2025, 10, 1, 9, 30, 0)
                    .single()
                    .expect("valid timestamp"),
                report,
            };
            let receipt = record.receipt();
            guard.push(record);
            Ok(receipt)
        }

        fn latest_by_listing(
            &self,
            listing_id: &ListingId,
            kind: AnalysisKind,
        ) -> Result<Option<StoredAnalysis>, RepositoryError> {
            let guard = self.records.lock().expect("store mutex");
            Ok(guard
                .iter()
                .rev()
                .find(|record| &record.listing_id == listing_id && record.report.kind() == kind)
                .cloned())
        }
    }

    pub(super) fn service() -> (ListingAuditService<FixedClockStore>, Arc<FixedClockStore>) {
        let store = Arc::new(FixedClockStore::default());
        (
            ListingAuditService::new(store.clone(), AuditLimits::default()),
            store,
        )
    }
}

use std::sync::Arc;
use std::thread;

use common::{service, LISTING_TEXT};
use listing_audit::analysis::{
    ComplianceAnalyzer, ComplianceRequest, ListingId, PersistenceStatus, RiskCategory,
    SeoAnalyzer, SeoCategory, SeoRequest, Severity,
};

#[test]
fn biased_listing_fails_both_checks_and_is_stored() {
    let (service, store) = service();
    let listing = ListingId("listing-austin-1".to_string());

    let compliance = service
        .check_compliance(ComplianceRequest {
            listing_id: Some(listing.clone()),
            text: Some(LISTING_TEXT.to_string()),
        })
        .expect("compliance check runs");

    assert!(!compliance.result.is_compliant);
    assert!(compliance.result.score < 70);
    assert!(
        compliance
            .result
            .issues
            .iter()
            .filter(|issue| issue.severity != Severity::Low)
            .count()
            >= 2
    );
    assert!(compliance
        .result
        .issues
        .iter()
        .any(|issue| issue.category == RiskCategory::Religion));
    assert!(compliance.persistence.is_saved());

    let seo = service
        .check_seo(SeoRequest {
            listing_id: Some(listing.clone()),
            title: Some("Nice Home".to_string()),
            description: Some(LISTING_TEXT.to_string()),
            location: Some("Austin".to_string()),
        })
        .expect("seo check runs");

    assert!(seo.result.score <= 50);
    assert!(seo.result.has_suggestion(SeoCategory::Title));
    assert!(seo.result.has_suggestion(SeoCategory::Description));
    assert!(seo.result.has_suggestion(SeoCategory::Location));
    assert!(seo
        .result
        .improved_text
        .as_deref()
        .unwrap_or_default()
        .contains("Austin"));

    match &seo.persistence {
        PersistenceStatus::Saved(receipt) => assert_eq!(receipt.id.0, "analysis-000002"),
        other => panic!("expected saved seo result, got {other:?}"),
    }
    assert_eq!(store.len(), 2);

    let latest = service
        .latest_compliance(&listing)
        .expect("lookup succeeds")
        .expect("compliance stored");
    assert_eq!(latest.id.0, "analysis-000001");
}

#[test]
fn remediation_applies_replacements_in_a_single_pass() {
    let analyzer = ComplianceAnalyzer::new();
    let first = analyzer.analyze("Close to church, perfect for couples.");
    let improved = first.improved_text.clone().expect("issues produce rewrite");

    let second = analyzer.analyze(&improved);

    assert_eq!(first.score, 60);
    assert_eq!(improved, "Close to , perfect for any household.");
    assert_eq!(second.score, 100);
}

#[test]
fn analyzers_are_safe_to_share_across_threads() {
    let compliance = Arc::new(ComplianceAnalyzer::new());
    let seo = Arc::new(SeoAnalyzer::new());
    let expected_compliance = compliance.analyze(LISTING_TEXT);
    let expected_seo = seo
        .analyze(LISTING_TEXT, "Nice Home", "Austin")
        .expect("seo runs");

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let compliance = compliance.clone();
            let seo = seo.clone();
            thread::spawn(move || {
                (
                    compliance.analyze(LISTING_TEXT),
                    seo.analyze(LISTING_TEXT, "Nice Home", "Austin")
                        .expect("seo runs"),
                )
            })
        })
        .collect();

    for handle in handles {
        let (compliance_result, seo_result) = handle.join().expect("thread completes");
        assert_eq!(compliance_result, expected_compliance);
        assert_eq!(seo_result, expected_seo);
    }
}

#[test]
fn results_serialize_identically_across_calls() {
    let analyzer = SeoAnalyzer::new();
    let first = serde_json::to_string(
        &analyzer
            .analyze(LISTING_TEXT, "Nice Home", "Austin")
            .expect("seo runs"),
    )
    .expect("serializes");
    let second = serde_json::to_string(
        &analyzer
            .analyze(LISTING_TEXT, "Nice Home", "Austin")
            .expect("seo runs"),
    )
    .expect("serializes");

    assert_eq!(first, second);
}
