use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use serde_json::json;
use tower::ServiceExt;

use super::common::*;
use crate::analysis::router::{compliance_handler, latest_compliance_handler, seo_handler};
use crate::analysis::validation::{ComplianceRequest, SeoRequest};
use crate::analysis::{audit_router, ListingAuditService};
use crate::config::AuditLimits;

#[tokio::test]
async fn compliance_route_returns_wire_payload() {
    let (service, _store) = build_service();
    let router = audit_router(Arc::new(service));

    let response = router
        .oneshot(
            axum::http::Request::post("/api/v1/listings/compliance")
                .header(axum::http::header::CONTENT_TYPE, "application/json")
                .body(axum::body::Body::from(
                    serde_json::to_vec(&json!({ "text": BIASED_LISTING })).unwrap(),
                ))
                .unwrap(),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["score"], 50);
    assert_eq!(payload["isCompliant"], false);
    assert_eq!(payload["issues"].as_array().map(Vec::len), Some(3));
    assert!(payload["improvedText"].is_string());
    assert_eq!(payload["persistence"]["status"], "skipped");
}

#[tokio::test]
async fn seo_route_persists_when_listing_id_supplied() {
    let (service, store) = build_service();
    let router = audit_router(Arc::new(service));

    let body = json!({
        "listingId": "listing-9",
        "title": "Nice Home",
        "description": BIASED_LISTING,
        "location": "Austin",
    });
    let response = router
        .oneshot(
            axum::http::Request::post("/api/v1/listings/seo")
                .header(axum::http::header::CONTENT_TYPE, "application/json")
                .body(axum::body::Body::from(serde_json::to_vec(&body).unwrap()))
                .unwrap(),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["score"], 30);
    assert_eq!(payload["persistence"]["status"], "saved");
    assert!(payload["persistence"]["id"].is_string());
    assert!(payload["persistence"]["createdAt"].is_string());
    assert_eq!(store.records().len(), 1);
}

#[tokio::test]
async fn seo_handler_rejects_missing_location() {
    let (service, _store) = build_service();
    let request = SeoRequest {
        title: Some("Nice Home".to_string()),
        description: Some(BIASED_LISTING.to_string()),
        ..SeoRequest::default()
    };

    let response = seo_handler(State(Arc::new(service)), axum::Json(request)).await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let payload = read_json_body(response).await;
    assert!(payload["error"]
        .as_str()
        .unwrap_or_default()
        .contains("location"));
}

#[tokio::test]
async fn compliance_handler_reports_store_outage_without_failing() {
    let service = Arc::new(ListingAuditService::new(
        Arc::new(UnavailableStore),
        AuditLimits::default(),
    ));
    let request = ComplianceRequest {
        listing_id: Some(listing_id("outage")),
        text: Some(BIASED_LISTING.to_string()),
    };

    let response = compliance_handler(State(service), axum::Json(request)).await;

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["score"], 50);
    assert_eq!(payload["persistence"]["status"], "failed");
}

#[tokio::test]
async fn latest_handler_returns_stored_record() {
    let (service, _store) = build_service();
    let service = Arc::new(service);
    service
        .check_compliance(ComplianceRequest {
            listing_id: Some(listing_id("42")),
            text: Some("Ideal for couples.".to_string()),
        })
        .expect("check succeeds");

    let response =
        latest_compliance_handler(State(service), Path("listing-42".to_string())).await;

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["listingId"], "listing-42");
    assert_eq!(payload["report"]["kind"], "compliance");
    assert_eq!(payload["report"]["score"], 80);
}

#[tokio::test]
async fn latest_route_returns_not_found_for_unknown_listing() {
    let (service, _store) = build_service();
    let router = audit_router(Arc::new(service));

    let response = router
        .oneshot(
            axum::http::Request::get("/api/v1/listings/listing-unknown/seo")
                .body(axum::body::Body::empty())
                .unwrap(),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn latest_handler_maps_store_not_found_to_404() {
    let service = Arc::new(ListingAuditService::new(
        Arc::new(ArchivedListingStore),
        AuditLimits::default(),
    ));

    let response =
        latest_compliance_handler(State(service), Path("listing-archived".to_string())).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn latest_handler_returns_internal_error_on_store_outage() {
    let service = Arc::new(ListingAuditService::new(
        Arc::new(UnavailableStore),
        AuditLimits::default(),
    ));

    let response =
        latest_compliance_handler(State(service), Path("listing-1".to_string())).await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}
