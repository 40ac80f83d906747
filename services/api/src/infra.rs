use chrono::Utc;
use listing_audit::analysis::{
    AnalysisId, AnalysisKind, AnalysisReport, ListingId, RepositoryError, ResultStore,
    SaveReceipt, StoredAnalysis,
};
use metrics_exporter_prometheus::PrometheusHandle;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Process-local result store; history is kept per listing in save order.
#[derive(Default, Clone)]
pub(crate) struct InMemoryResultStore {
    records: Arc<Mutex<HashMap<ListingId, Vec<StoredAnalysis>>>>,
    sequence: Arc<AtomicU64>,
}

impl InMemoryResultStore {
    fn next_id(&self) -> AnalysisId {
        let id = self.sequence.fetch_add(1, Ordering::Relaxed) + 1;
        AnalysisId(format!("analysis-{id:06}"))
    }
}

impl ResultStore for InMemoryResultStore {
    fn save(
        &self,
        listing_id: &ListingId,
        report: AnalysisReport,
    ) -> Result<SaveReceipt, RepositoryError> {
        let mut guard = self
            .records
            .lock()
            .map_err(|_| RepositoryError::Unavailable("result store lock poisoned".to_string()))?;

        let record = StoredAnalysis {
            id: self.next_id(),
            listing_id: listing_id.clone(),
            created_at: Utc::now(),
            report,
        };
        let receipt = record.receipt();
        guard.entry(listing_id.clone()).or_default().push(record);
        Ok(receipt)
    }

    fn latest_by_listing(
        &self,
        listing_id: &ListingId,
        kind: AnalysisKind,
    ) -> Result<Option<StoredAnalysis>, RepositoryError> {
        let guard = self
            .records
            .lock()
            .map_err(|_| RepositoryError::Unavailable("result store lock poisoned".to_string()))?;

        Ok(guard.get(listing_id).and_then(|history| {
            history
                .iter()
                .rev()
                .find(|record| record.report.kind() == kind)
                .cloned()
        }))
    }
}
