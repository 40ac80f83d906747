use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde_json::json;

use super::domain::{AnalysisKind, ListingId};
use super::repository::{RepositoryError, ResultStore, StoredAnalysis};
use super::service::{AuditServiceError, ListingAuditService};
use super::validation::{ComplianceRequest, SeoRequest};

/// Router builder exposing the compliance and SEO checks.
pub fn audit_router<S>(service: Arc<ListingAuditService<S>>) -> Router
where
    S: ResultStore + 'static,
{
    Router::new()
        .route("/api/v1/listings/compliance", post(compliance_handler::<S>))
        .route("/api/v1/listings/seo", post(seo_handler::<S>))
        .route(
            "/api/v1/listings/:listing_id/compliance",
            get(latest_compliance_handler::<S>),
        )
        .route(
            "/api/v1/listings/:listing_id/seo",
            get(latest_seo_handler::<S>),
        )
        .with_state(service)
}

pub(crate) async fn compliance_handler<S>(
    State(service): State<Arc<ListingAuditService<S>>>,
    axum::Json(request): axum::Json<ComplianceRequest>,
) -> Response
where
    S: ResultStore + 'static,
{
    match service.check_compliance(request) {
        Ok(outcome) => (StatusCode::OK, axum::Json(outcome)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn seo_handler<S>(
    State(service): State<Arc<ListingAuditService<S>>>,
    axum::Json(request): axum::Json<SeoRequest>,
) -> Response
where
    S: ResultStore + 'static,
{
    match service.check_seo(request) {
        Ok(outcome) => (StatusCode::OK, axum::Json(outcome)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn latest_compliance_handler<S>(
    State(service): State<Arc<ListingAuditService<S>>>,
    Path(listing_id): Path<String>,
) -> Response
where
    S: ResultStore + 'static,
{
    let id = ListingId(listing_id);
    latest_response(service.latest_compliance(&id), &id, AnalysisKind::Compliance)
}

pub(crate) async fn latest_seo_handler<S>(
    State(service): State<Arc<ListingAuditService<S>>>,
    Path(listing_id): Path<String>,
) -> Response
where
    S: ResultStore + 'static,
{
    let id = ListingId(listing_id);
    latest_response(service.latest_seo(&id), &id, AnalysisKind::Seo)
}

fn latest_response(
    lookup: Result<Option<StoredAnalysis>, AuditServiceError>,
    listing_id: &ListingId,
    kind: AnalysisKind,
) -> Response {
    match lookup {
        Ok(Some(record)) => (StatusCode::OK, axum::Json(record)).into_response(),
        Ok(None) | Err(AuditServiceError::Repository(RepositoryError::NotFound)) => {
            let payload = json!({
                "listingId": listing_id.0,
                "error": format!("no {} analysis stored for listing", kind.label()),
            });
            (StatusCode::NOT_FOUND, axum::Json(payload)).into_response()
        }
        Err(other) => error_response(other),
    }
}

fn error_response(error: AuditServiceError) -> Response {
    let status = match &error {
        AuditServiceError::InvalidInput(_) => StatusCode::UNPROCESSABLE_ENTITY,
        AuditServiceError::Repository(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };
    let payload = json!({
        "error": error.to_string(),
    });
    (status, axum::Json(payload)).into_response()
}
