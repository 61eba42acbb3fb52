use super::common::*;
use axum::body::Body;
use axum::extract::State;
use axum::http::{header, Request, StatusCode};
use serde_json::json;
use std::sync::Arc;
use tower::ServiceExt;

use crate::loans::router::create_handler;
use crate::loans::LoanService;

fn json_request(method: &str, uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(serde_json::to_vec(&body).unwrap()))
        .unwrap()
}

fn empty_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

#[tokio::test]
async fn create_route_returns_score_and_rating() {
    let (service, _) = build_service();
    let router = router_with_service(service);

    let response = router
        .oneshot(json_request(
            "POST",
            "/mortgages",
            json!({
                "credit_score": 600,
                "loan_amount": 300000,
                "property_value": 250000,
                "annual_income": 40000,
                "debt_amount": 50000,
                "loan_type": "adjustable",
                "property_type": "condo"
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let body = read_json_body(response).await;
    assert_eq!(body["message"], "Mortgage created successfully");
    assert_eq!(body["mortgage_id"], 1);
    assert_eq!(body["individual_risk_score"], 7);
    assert_eq!(body["credit_rating"], "C");
}

#[tokio::test]
async fn create_route_rejects_out_of_range_credit_score() {
    let (service, repository) = build_service();
    let router = router_with_service(service);
    let mut payload = serde_json::to_value(prime_submission()).unwrap();
    payload["credit_score"] = json!(900);

    let response = router
        .oneshot(json_request("POST", "/mortgages", payload))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = read_json_body(response).await;
    assert!(body["error"]
        .as_str()
        .expect("error message")
        .contains("credit score"));
    assert_eq!(repository.len(), 0);
}

#[tokio::test]
async fn create_route_rejects_missing_fields() {
    let (service, _) = build_service();
    let router = router_with_service(service);

    let response = router
        .oneshot(json_request(
            "POST",
            "/mortgages",
            json!({
                "credit_score": 700,
                "property_value": 150000,
                "annual_income": 50000,
                "debt_amount": 10000,
                "loan_type": "fixed",
                "property_type": "single_family"
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn create_route_rejects_unknown_loan_type() {
    let (service, _) = build_service();
    let router = router_with_service(service);
    let mut payload = serde_json::to_value(prime_submission()).unwrap();
    payload["loan_type"] = json!("interest_only");

    let response = router
        .oneshot(json_request("POST", "/mortgages", payload))
        .await
        .unwrap();

    assert!(response.status().is_client_error());
}

#[tokio::test]
async fn list_route_returns_loans_and_pool() {
    let (service, _) = build_service();
    service.create(prime_submission()).expect("prime created");
    service.create(subprime_submission()).expect("subprime created");
    let router = router_with_service(service);

    let response = router
        .oneshot(empty_request("GET", "/mortgages"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    let mortgages = body["mortgages"].as_array().expect("mortgage list");
    assert_eq!(mortgages.len(), 2);
    assert_eq!(mortgages[0]["id"], 1);
    assert!(mortgages[0].get("mortgage_id").is_none());
    assert_eq!(mortgages[1]["id"], 2);
    assert_eq!(mortgages[0]["credit_rating"], "AAA");
    assert_eq!(mortgages[0]["loan_type"], "fixed");
    assert_eq!(mortgages[1]["individual_risk_score"], 1);
    assert_eq!(body["pool"]["pool_rating"], "AAA");
    assert_eq!(body["pool"]["loan_count"], 2);
}

#[tokio::test]
async fn get_route_returns_breakdown() {
    let (service, _) = build_service();
    service.create(prime_submission()).expect("prime created");
    let router = router_with_service(service);

    let response = router
        .oneshot(empty_request("GET", "/mortgages/1"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    assert_eq!(body["credit_score"], 750);
    assert_eq!(body["components"].as_array().map(Vec::len), Some(5));
    assert_eq!(body["components"][2]["factor"], "credit_score");
    assert_eq!(body["components"][2]["contribution"], -1);
}

#[tokio::test]
async fn update_route_returns_new_score_and_rating() {
    let (service, _) = build_service();
    service.create(prime_submission()).expect("prime created");
    let router = router_with_service(service);

    let response = router
        .oneshot(json_request(
            "PUT",
            "/mortgages/1",
            serde_json::to_value(distressed_submission()).unwrap(),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    assert_eq!(body["message"], "Mortgage updated successfully");
    assert_eq!(body["individual_risk_score"], 7);
    assert_eq!(body["credit_rating"], "C");
}

#[tokio::test]
async fn unknown_ids_return_not_found() {
    let (service, _) = build_service();
    let router = router_with_service(service);

    let get = router
        .clone()
        .oneshot(empty_request("GET", "/mortgages/99"))
        .await
        .unwrap();
    assert_eq!(get.status(), StatusCode::NOT_FOUND);

    let update = router
        .clone()
        .oneshot(json_request(
            "PUT",
            "/mortgages/99",
            serde_json::to_value(prime_submission()).unwrap(),
        ))
        .await
        .unwrap();
    assert_eq!(update.status(), StatusCode::NOT_FOUND);

    let delete = router
        .oneshot(empty_request("DELETE", "/mortgages/99"))
        .await
        .unwrap();
    assert_eq!(delete.status(), StatusCode::NOT_FOUND);
    let body = read_json_body(delete).await;
    assert_eq!(body["error"], "mortgage not found");
}

#[tokio::test]
async fn delete_route_removes_loan() {
    let (service, repository) = build_service();
    service.create(prime_submission()).expect("prime created");
    let router = router_with_service(service);

    let response = router
        .oneshot(empty_request("DELETE", "/mortgages/1"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    assert_eq!(body["message"], "Mortgage deleted successfully");
    assert_eq!(repository.len(), 0);
}

#[tokio::test]
async fn create_handler_maps_repository_outage_to_internal_error() {
    let service = Arc::new(LoanService::new(Arc::new(UnavailableRepository)));

    let response = create_handler::<UnavailableRepository>(
        State(service),
        axum::Json(prime_submission()),
    )
    .await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}
