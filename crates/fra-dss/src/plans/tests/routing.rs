use super::common::*;
use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use serde_json::json;
use std::sync::Arc;
use tower::ServiceExt;

use crate::plans::plan_router;
use crate::plans::repository::ActionPlanRepository;
use crate::plans::service::ActionPlanService;

fn json_request(method: &str, uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(serde_json::to_vec(&body).unwrap()))
        .unwrap()
}

#[tokio::test]
async fn create_route_returns_plan_view() {
    let (service, _) = build_service();
    let router = plan_router(Arc::new(service));

    let response = router
        .oneshot(json_request(
            "POST",
            "/api/v1/dss/plans",
            serde_json::to_value(draft()).unwrap(),
        ))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::CREATED);
    let payload = read_json_body(response).await;
    assert_eq!(payload["id"], json!("JJM-V-KHW-1"));
    assert_eq!(payload["status"], json!("draft"));
    assert_eq!(payload["priority"], json!("High"));
    assert_eq!(payload["budgetAllocated"], json!(720_000));
    assert_eq!(payload["timeline"]["end"], json!("2026-02-28"));
}

#[tokio::test]
async fn create_route_rejects_invalid_drafts() {
    let (service, _) = build_service();
    let router = plan_router(Arc::new(service));
    let mut body = serde_json::to_value(draft()).unwrap();
    body["estimatedDurationMonths"] = json!(0);

    let response = router
        .oneshot(json_request("POST", "/api/v1/dss/plans", body))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn status_route_rejects_skipped_steps() {
    let (service, _) = build_service();
    let service = Arc::new(service);
    let plan = service.create(draft()).expect("draft accepted");
    let router = plan_router(service);

    let response = router
        .oneshot(json_request(
            "POST",
            &format!("/api/v1/dss/plans/{}/status", plan.id.0),
            json!({ "status": "completed" }),
        ))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::CONFLICT);
    let payload = read_json_body(response).await;
    assert_eq!(
        payload["error"],
        json!("cannot move plan from draft to completed")
    );
}

#[tokio::test]
async fn status_route_advances_plan() {
    let (service, _) = build_service();
    let service = Arc::new(service);
    let plan = service.create(draft()).expect("draft accepted");
    let router = plan_router(service);

    let response = router
        .oneshot(json_request(
            "POST",
            &format!("/api/v1/dss/plans/{}/status", plan.id.0),
            json!({ "status": "approved" }),
        ))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["status"], json!("approved"));
}

#[tokio::test]
async fn fetch_route_returns_not_found_for_unknown_plan() {
    let (service, _) = build_service();
    let router = plan_router(Arc::new(service));

    let response = router
        .oneshot(
            Request::get("/api/v1/dss/plans/CAMPA-V-KHW-4")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn list_route_reports_internal_error_when_store_is_down() {
    let service = ActionPlanService::new(Arc::new(UnavailableRepository));
    let router = plan_router(Arc::new(service));

    let response = router
        .oneshot(Request::get("/api/v1/dss/plans").body(Body::empty()).unwrap())
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn delete_route_removes_plan() {
    let (service, repository) = build_service();
    let service = Arc::new(service);
    let plan = service.create(draft()).expect("draft accepted");
    let router = plan_router(service);

    let response = router
        .oneshot(
            Request::delete(format!("/api/v1/dss/plans/{}", plan.id.0))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    assert!(repository.list().unwrap().is_empty());
}
