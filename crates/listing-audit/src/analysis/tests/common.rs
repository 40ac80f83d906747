use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use axum::response::Response;
use chrono::Utc;
use serde_json::Value;

use crate::analysis::domain::{AnalysisId, AnalysisKind, ListingId};
use crate::analysis::repository::{
    AnalysisReport, RepositoryError, ResultStore, SaveReceipt, StoredAnalysis,
};
use crate::analysis::ListingAuditService;
use crate::config::AuditLimits;

pub(super) const BIASED_LISTING: &str =
    "Perfect for bachelors, walking distance to church, no children allowed.";

pub(super) const WELL_WRITTEN_TITLE: &str = "Renovated Three Bedroom Craftsman Near Downtown Austin";

pub(super) const WELL_WRITTEN_DESCRIPTION: &str = "This renovated home offers a spacious kitchen with granite counters, stainless appliances, hardwood floors throughout, and a private backyard patio. The quiet neighborhood sits minutes from downtown Austin, with parks, shopping, restaurants, and great schools nearby for an easy commute.";

pub(super) fn listing_id(suffix: &str) -> ListingId {
    ListingId(format!("listing-{suffix}"))
}

pub(super) fn build_service() -> (ListingAuditService<MemoryStore>, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::default());
    let service = ListingAuditService::new(store.clone(), AuditLimits::default());
    (service, store)
}

#[derive(Default, Clone)]
pub(super) struct MemoryStore {
    records: Arc<Mutex<Vec<StoredAnalysis>>>,
    sequence: Arc<AtomicU64>,
}

impl MemoryStore {
    pub(super) fn records(&self) -> Vec<StoredAnalysis> {
        self.records.lock().expect("store mutex poisoned").clone()
    }
}

impl ResultStore for MemoryStore {
    fn save(
        &self,
        listing_id: &ListingId,
        report: AnalysisReport,
    ) -> Result<SaveReceipt, RepositoryError> {
        let next = self.sequence.fetch_add(1, Ordering::Relaxed) + 1;
        let record = StoredAnalysis {
            id: AnalysisId(format!("analysis-{next:06}")),
            listing_id: listing_id.clone(),
            created_at: Utc::now(),
            report,
        };
        let receipt = record.receipt();
        self.records
            .lock()
            .expect("store mutex poisoned")
            .push(record);
        Ok(receipt)
    }

    fn latest_by_listing(
        &self,
        listing_id: &ListingId,
        kind: AnalysisKind,
    ) -> Result<Option<StoredAnalysis>, RepositoryError> {
        let guard = self.records.lock().expect("store mutex poisoned");
        Ok(guard
            .iter()
            .rev()
            .find(|record| &record.listing_id == listing_id && record.report.kind() == kind)
            .cloned())
    }
}

pub(super) struct UnavailableStore;

impl ResultStore for UnavailableStore {
    fn save(
        &self,
        _listing_id: &ListingId,
        _report: AnalysisReport,
    ) -> Result<SaveReceipt, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn latest_by_listing(
        &self,
        _listing_id: &ListingId,
        _kind: AnalysisKind,
    ) -> Result<Option<StoredAnalysis>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }
}

pub(super) struct ArchivedListingStore;

impl ResultStore for ArchivedListingStore {
    fn save(
        &self,
        _listing_id: &ListingId,
        _report: AnalysisReport,
    ) -> Result<SaveReceipt, RepositoryError> {
        Err(RepositoryError::NotFound)
    }

    fn latest_by_listing(
        &self,
        _listing_id: &ListingId,
        _kind: AnalysisKind,
    ) -> Result<Option<StoredAnalysis>, RepositoryError> {
        Err(RepositoryError::NotFound)
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
