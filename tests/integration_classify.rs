use std::sync::Arc;

use axum::{
    body::{self, Body},
    http::{Request, StatusCode},
    Router,
};
use tower::util::ServiceExt;

use number_classifier::api::handlers::AppState;
use number_classifier::api::routes::create_router;
use number_classifier::services::facts::{FactProvider, MockFactProvider};

fn app_with_provider(facts: Box<dyn FactProvider>) -> Router {
    let state = Arc::new(AppState { facts });
    create_router(state)
}

fn app() -> Router {
    app_with_provider(Box::new(MockFactProvider::new()))
}

async fn get_json(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let req = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    let resp = app.oneshot(req).await.expect("router oneshot failed");
    let status = resp.status();

    let bytes = body::to_bytes(resp.into_body(), 64 * 1024).await.unwrap();
    let json = serde_json::from_slice(&bytes).expect("response body is not JSON");

    (status, json)
}

#[tokio::test]
async fn test_root_welcome() {
    let (status, json) = get_json(app(), "/").await;

    assert_eq!(status, StatusCode::OK);
    assert!(json["message"].as_str().unwrap().contains("Number Classifier"));
    assert!(json["built_by"].is_string());
    assert!(json["github_repo"].is_string());
}

#[tokio::test]
async fn test_health_check() {
    let (status, json) = get_json(app(), "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["service"], "number-classifier");
}

#[tokio::test]
async fn test_classify_armstrong_odd() {
    let (status, json) = get_json(app(), "/api/classify-number?number=371").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["number"], 371);
    assert_eq!(json["is_prime"], false);
    assert_eq!(json["is_perfect"], false);
    assert_eq!(json["digit_sum"], 11);
    assert_eq!(
        json["properties"],
        serde_json::json!(["armstrong", "odd"])
    );
    assert!(json["fun_fact"].as_str().unwrap().contains("371"));
}

#[tokio::test]
async fn test_classify_perfect_even() {
    let (status, json) = get_json(app(), "/api/classify-number?number=28").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["is_perfect"], true);
    assert_eq!(json["properties"], serde_json::json!(["perfect", "even"]));
}

#[tokio::test]
async fn test_classify_prime() {
    let (status, json) = get_json(app(), "/api/classify-number?number=7").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["is_prime"], true);
    assert_eq!(json["properties"], serde_json::json!(["odd"]));
    assert_eq!(json["digit_sum"], 7);
}

#[tokio::test]
async fn test_classify_negative() {
    let (status, json) = get_json(app(), "/api/classify-number?number=-5").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["number"], -5);
    assert_eq!(json["is_prime"], false);
    assert_eq!(json["is_perfect"], false);
    assert_eq!(json["digit_sum"], 5);
    // Negative numbers never get armstrong/perfect tags, only parity.
    assert_eq!(json["properties"], serde_json::json!(["odd"]));
}

#[tokio::test]
async fn test_classify_negative_even() {
    let (status, json) = get_json(app(), "/api/classify-number?number=-4").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["properties"], serde_json::json!(["even"]));
}

#[tokio::test]
async fn test_classify_zero() {
    let (status, json) = get_json(app(), "/api/classify-number?number=0").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["is_prime"], false);
    assert_eq!(json["is_perfect"], false);
    assert_eq!(json["digit_sum"], 0);
    // "0" is one digit and 0^1 == 0, so zero counts as Armstrong.
    assert_eq!(json["properties"], serde_json::json!(["armstrong", "even"]));
}

#[tokio::test]
async fn test_classify_invalid_input() {
    let (status, json) = get_json(app(), "/api/classify-number?number=abc").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json, serde_json::json!({"number": "abc", "error": true}));
}

#[tokio::test]
async fn test_classify_decimal_input() {
    let (status, json) = get_json(app(), "/api/classify-number?number=3.14").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["number"], "3.14");
    assert_eq!(json["error"], true);
}

#[tokio::test]
async fn test_classify_missing_parameter() {
    let (status, json) = get_json(app(), "/api/classify-number").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["number"], "");
    assert_eq!(json["error"], true);
}

#[tokio::test]
async fn test_classify_fact_failure_degrades_to_empty() {
    let app = app_with_provider(Box::new(MockFactProvider::failing()));
    let (status, json) = get_json(app, "/api/classify-number?number=371").await;

    // Enrichment failure never surfaces to the client.
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["fun_fact"], "");
    assert_eq!(json["digit_sum"], 11);
}
