use std::sync::Arc;

use axum::body::Body;
use axum::extract::{Path, State};
use axum::http::{header, Request, StatusCode};
use serde_json::json;
use tower::ServiceExt;

use super::common::*;
use crate::assessment::router::{report_handler, submit_handler};
use crate::assessment::AssessmentService;
use crate::config::EngineParameters;

fn json_request(method: &str, uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(serde_json::to_vec(&body).expect("encode body")))
        .expect("request builds")
}

fn empty_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .expect("request builds")
}

#[tokio::test]
async fn submit_handler_returns_conflict_on_duplicate() {
    let service = Arc::new(AssessmentService::new(
        Arc::new(ConflictRepository),
        Arc::new(MemoryNotifier::default()),
        EngineParameters::default(),
    ));

    let response = submit_handler::<ConflictRepository, MemoryNotifier>(
        State(service),
        axum::Json(scenario_input()),
    )
    .await;

    assert_status(&response, StatusCode::CONFLICT);
}

#[tokio::test]
async fn submit_handler_returns_internal_error_on_repository_failure() {
    let service = Arc::new(AssessmentService::new(
        Arc::new(UnavailableRepository),
        Arc::new(MemoryNotifier::default()),
        EngineParameters::default(),
    ));

    let response = submit_handler::<UnavailableRepository, MemoryNotifier>(
        State(service),
        axum::Json(scenario_input()),
    )
    .await;

    assert_status(&response, StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn report_handler_returns_not_found_for_unknown_assessment() {
    let (service, _, _) = build_service();

    let response = report_handler::<MemoryRepository, MemoryNotifier>(
        State(Arc::new(service)),
        Path("asmt-unknown".to_string()),
    )
    .await;

    assert_status(&response, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn feasibility_route_computes_without_storing() {
    let (service, repository, _) = build_service();
    let router = router_with_service(service);

    let response = router
        .oneshot(json_request(
            "POST",
            "/api/v1/feasibility",
            json!({
                "roofArea_m2": 120,
                "openSpace_m2": "15",
                "dwellers": 4,
                "roofMaterial": "Concrete",
                "avgRainfall_mm": 1200,
                "gwDepth_m": 10,
                "soilPerm": 50
            }),
        ))
        .await
        .expect("router responds");

    assert_status(&response, StatusCode::OK);
    let body = read_json_body(response).await;
    assert_eq!(body["feasibilityScore"], 52);
    assert_eq!(body["category"], "Moderate");
    assert_eq!(body["litres_per_year"], 122_400.0);
    assert!(repository
        .records
        .lock()
        .expect("repository mutex poisoned")
        .is_empty());
}

#[tokio::test]
async fn submit_evaluate_and_fetch_report_round_trip() {
    let (service, _, notifier) = build_service();
    let router = router_with_service(service);

    let submitted = router
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/v1/assessments",
            json!({ "id": "asmt-route", "roofArea": 90, "openSpace": 6, "dwellers": 0 }),
        ))
        .await
        .expect("router responds");
    assert_status(&submitted, StatusCode::ACCEPTED);
    let summary = read_json_body(submitted).await;
    assert_eq!(summary["assessment_id"], "asmt-route");
    assert_eq!(summary["status"], "submitted");

    let early = router
        .clone()
        .oneshot(empty_request("GET", "/api/v1/assessments/asmt-route/report"))
        .await
        .expect("router responds");
    assert_status(&early, StatusCode::CONFLICT);

    let evaluated = router
        .clone()
        .oneshot(empty_request("POST", "/api/v1/assessments/asmt-route/evaluate"))
        .await
        .expect("router responds");
    assert_status(&evaluated, StatusCode::OK);
    let report = read_json_body(evaluated).await;
    assert!(report["environmentalImpact"]["perCapitaWaterSaved"].is_null());

    let fetched = router
        .clone()
        .oneshot(empty_request("GET", "/api/v1/assessments/asmt-route/report"))
        .await
        .expect("router responds");
    assert_status(&fetched, StatusCode::OK);
    assert_eq!(read_json_body(fetched).await, report);

    let status = router
        .oneshot(empty_request("GET", "/api/v1/assessments/asmt-route"))
        .await
        .expect("router responds");
    let status = read_json_body(status).await;
    assert_eq!(status["status"], "completed");
    assert_eq!(status["feasibility_score"], report["feasibilityScore"]);
    assert_eq!(notifier.events().len(), 1);
}

#[tokio::test]
async fn malformed_payload_is_rejected_by_extractor() {
    let (service, _, _) = build_service();
    let router = router_with_service(service);

    let response = router
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/v1/feasibility")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from("{\"roofArea_m2\": "))
                .expect("request builds"),
        )
        .await
        .expect("router responds");

    assert!(response.status().is_client_error());
}
