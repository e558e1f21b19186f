//! End-to-end tests driving the HTTP router in-process against the
//! in-memory repositories.

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use credit_ledger_service::{AppState, router};
use serde_json::{Value, json};
use tower::ServiceExt;
use uuid::Uuid;

fn app() -> Router {
    router(AppState::in_memory())
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

async fn post(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    send(app, request).await
}

async fn create_account(app: &Router, limit: &str) -> String {
    let (status, body) = post(
        app,
        "/api/v1/accounts",
        json!({ "document_number": "12345678900", "available_credit_limit": limit }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    body["id"].as_str().unwrap().to_string()
}

fn error_code(body: &Value) -> &str {
    body["error"]["code"].as_str().unwrap()
}

#[tokio::test]
async fn health_reports_connected() {
    let (status, body) = get(&app(), "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["database"], "connected");
}

#[tokio::test]
async fn account_round_trips_through_the_api() {
    let app = app();

    let (status, created) = post(
        &app,
        "/api/v1/accounts",
        json!({ "document_number": "12345678900", "available_credit_limit": 250 }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["document_number"], "12345678900");
    assert_eq!(created["available_credit_limit"], "250");

    let id = created["id"].as_str().unwrap();
    let (status, fetched) = get(&app, &format!("/api/v1/accounts/{id}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn account_creation_reports_the_missing_field() {
    let app = app();

    let (status, body) = post(
        &app,
        "/api/v1/accounts",
        json!({ "available_credit_limit": "10" }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error_code(&body), "invalid_account");
    assert_eq!(body["error"]["message"], "Account invalid or not found");

    let (status, body) = post(
        &app,
        "/api/v1/accounts",
        json!({ "document_number": "12345678900" }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error_code(&body), "invalid_available_limit_credit");
}

#[tokio::test]
async fn unknown_account_is_not_found() {
    let (status, body) = get(&app(), &format!("/api/v1/accounts/{}", Uuid::new_v4())).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(error_code(&body), "account_not_found");
}

#[tokio::test]
async fn withdrawal_then_payment_moves_the_limit() {
    let app = app();
    let account_id = create_account(&app, "100").await;

    let (status, withdrawal) = post(
        &app,
        "/api/v1/transactions",
        json!({ "account_id": account_id, "operation_type": 1, "amount": "10" }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(withdrawal["account_id"], account_id.as_str());
    assert_eq!(withdrawal["operation_type"], 1);
    assert_eq!(withdrawal["amount"], "-10");
    assert!(withdrawal["event_date"].is_string());

    let (_, account) = get(&app, &format!("/api/v1/accounts/{account_id}")).await;
    assert_eq!(account["available_credit_limit"], "90");

    let (status, payment) = post(
        &app,
        "/api/v1/transactions",
        json!({ "account_id": account_id, "operation_type": 4, "amount": "-20" }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(payment["amount"], "20");

    let (_, account) = get(&app, &format!("/api/v1/accounts/{account_id}")).await;
    assert_eq!(account["available_credit_limit"], "110");

    let id = withdrawal["id"].as_str().unwrap();
    let (status, fetched) = get(&app, &format!("/api/v1/transactions/{id}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, withdrawal);
}

#[tokio::test]
async fn transaction_against_unknown_account_is_rejected() {
    let app = app();

    let (status, body) = post(
        &app,
        "/api/v1/transactions",
        json!({ "account_id": Uuid::new_v4(), "operation_type": 1, "amount": "10" }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error_code(&body), "invalid_account");

    let (status, body) = post(
        &app,
        "/api/v1/transactions",
        json!({ "operation_type": 1, "amount": "10" }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error_code(&body), "invalid_account");
}

#[tokio::test]
async fn invalid_operation_type_leaves_the_limit_untouched() {
    let app = app();
    let account_id = create_account(&app, "100").await;

    for operation_type in [json!(0), json!(5), json!(4294967296_i64), Value::Null] {
        let (status, body) = post(
            &app,
            "/api/v1/transactions",
            json!({ "account_id": account_id, "operation_type": operation_type, "amount": "10" }),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(error_code(&body), "invalid_operation_type");
        assert_eq!(body["error"]["message"], "Operation type is invalid");
    }

    let (_, account) = get(&app, &format!("/api/v1/accounts/{account_id}")).await;
    assert_eq!(account["available_credit_limit"], "100");
}

#[tokio::test]
async fn payment_beyond_decimal_range_is_rejected() {
    let app = app();
    let max = rust_decimal::Decimal::MAX.to_string();
    let account_id = create_account(&app, &max).await;

    let (status, body) = post(
        &app,
        "/api/v1/transactions",
        json!({ "account_id": account_id, "operation_type": 4, "amount": "1" }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error_code(&body), "limit_overflow");

    let (_, account) = get(&app, &format!("/api/v1/accounts/{account_id}")).await;
    assert_eq!(account["available_credit_limit"], max.as_str());
}

#[tokio::test]
async fn unknown_transaction_is_not_found() {
    let (status, body) = get(&app(), &format!("/api/v1/transactions/{}", Uuid::new_v4())).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(error_code(&body), "transaction_not_found");
}
