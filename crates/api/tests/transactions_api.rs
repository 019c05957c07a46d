//! Integration tests for payment transactions and gateway verification.

mod common;

use axum::http::StatusCode;
use serde_json::json;
use sqlx::PgPool;

use common::{
    body_json, delete_auth, get_auth, patch_json_auth, post_json_auth, sign_payment,
    signup_client, signup_lawyer, TestAccount,
};

async fn create_transaction(
    app: &axum::Router,
    lawyer: &TestAccount,
    client: &TestAccount,
    amount: &str,
) -> serde_json::Value {
    let response = post_json_auth(
        app,
        "/api/v1/transactions/create",
        json!({
            "client_id": client.profile_id,
            "amount": amount,
            "description": "Consultation fee",
        }),
        &lawyer.token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_create_returns_checkout_fields(pool: PgPool) {
    let app = common::build_test_app(pool).await;
    let client = signup_client(&app, "client@example.com").await;
    let lawyer = signup_lawyer(&app, "lawyer@example.com", "BAR-1").await;

    let json = create_transaction(&app, &lawyer, &client, "150.50").await;
    assert_eq!(json["data"]["status"], "pending");
    assert_eq!(json["data"]["amount"], "150.50");
    assert_eq!(json["data"]["description"], "Consultation fee");
    // 150.50 in minor units.
    assert_eq!(json["checkout"]["amount"], 15050);
    assert_eq!(json["checkout"]["currency"], "INR");
    assert_eq!(json["checkout"]["key_id"], "key_test");
    assert!(json["checkout"]["order_id"].as_str().unwrap().starts_with("order_"));
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_create_validates_amount_and_client(pool: PgPool) {
    let app = common::build_test_app(pool).await;
    let client = signup_client(&app, "client@example.com").await;
    let lawyer = signup_lawyer(&app, "lawyer@example.com", "BAR-1").await;

    let response = post_json_auth(
        &app,
        "/api/v1/transactions/create",
        json!({ "client_id": client.profile_id, "amount": "0" }),
        &lawyer.token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = post_json_auth(
        &app,
        "/api/v1/transactions/create",
        json!({ "client_id": 999999, "amount": "100.00" }),
        &lawyer.token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_verify_payment_completes_transaction(pool: PgPool) {
    let app = common::build_test_app(pool).await;
    let client = signup_client(&app, "client@example.com").await;
    let lawyer = signup_lawyer(&app, "lawyer@example.com", "BAR-1").await;

    let created = create_transaction(&app, &lawyer, &client, "200.00").await;
    let transaction_id = created["data"]["id"].as_i64().unwrap();
    let order_id = created["checkout"]["order_id"].as_str().unwrap().to_string();

    let payment_id = "pay_12345";
    let signature = sign_payment(&order_id, payment_id);

    let response = post_json_auth(
        &app,
        "/api/v1/transactions/verify-payment",
        json!({
            "transaction_id": transaction_id,
            "gateway_order_id": order_id,
            "gateway_payment_id": payment_id,
            "gateway_signature": signature,
        }),
        &client.token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["status"], "completed");
    assert_eq!(json["data"]["gateway_payment_id"], payment_id);
    assert!(json["data"]["paid_at"].is_string());

    // Verifying again conflicts without changing anything.
    let signature = sign_payment(&order_id, payment_id);
    let response = post_json_auth(
        &app,
        "/api/v1/transactions/verify-payment",
        json!({
            "transaction_id": transaction_id,
            "gateway_order_id": order_id,
            "gateway_payment_id": payment_id,
            "gateway_signature": signature,
        }),
        &client.token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_verify_payment_rejects_bad_signature(pool: PgPool) {
    let app = common::build_test_app(pool).await;
    let client = signup_client(&app, "client@example.com").await;
    let lawyer = signup_lawyer(&app, "lawyer@example.com", "BAR-1").await;

    let created = create_transaction(&app, &lawyer, &client, "200.00").await;
    let transaction_id = created["data"]["id"].as_i64().unwrap();
    let order_id = created["checkout"]["order_id"].as_str().unwrap().to_string();

    let response = post_json_auth(
        &app,
        "/api/v1/transactions/verify-payment",
        json!({
            "transaction_id": transaction_id,
            "gateway_order_id": order_id,
            "gateway_payment_id": "pay_12345",
            "gateway_signature": "deadbeef",
        }),
        &client.token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    // The transaction is untouched and still payable.
    let response = get_auth(
        &app,
        "/api/v1/transactions/clients/payment-requests?status=pending",
        &client.token,
    )
    .await;
    let json = body_json(response).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 1);
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_verify_payment_unknown_pair_not_found(pool: PgPool) {
    let app = common::build_test_app(pool).await;
    let client = signup_client(&app, "client@example.com").await;
    let lawyer = signup_lawyer(&app, "lawyer@example.com", "BAR-1").await;

    let created = create_transaction(&app, &lawyer, &client, "200.00").await;
    let transaction_id = created["data"]["id"].as_i64().unwrap();

    let response = post_json_auth(
        &app,
        "/api/v1/transactions/verify-payment",
        json!({
            "transaction_id": transaction_id,
            "gateway_order_id": "order_mismatched",
            "gateway_payment_id": "pay_12345",
            "gateway_signature": "deadbeef",
        }),
        &client.token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_manual_update_restricted_to_failed_refunded(pool: PgPool) {
    let app = common::build_test_app(pool).await;
    let client = signup_client(&app, "client@example.com").await;
    let lawyer = signup_lawyer(&app, "lawyer@example.com", "BAR-1").await;

    let created = create_transaction(&app, &lawyer, &client, "90.00").await;
    let transaction_id = created["data"]["id"].as_i64().unwrap();

    // Completion is reserved for verify-payment.
    let response = patch_json_auth(
        &app,
        &format!("/api/v1/transactions/{transaction_id}/update"),
        json!({ "status": "completed" }),
        &lawyer.token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = patch_json_auth(
        &app,
        &format!("/api/v1/transactions/{transaction_id}/update"),
        json!({ "status": "failed" }),
        &lawyer.token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["status"], "failed");

    // No longer pending, so a second manual update is rejected.
    let response = patch_json_auth(
        &app,
        &format!("/api/v1/transactions/{transaction_id}/update"),
        json!({ "status": "refunded" }),
        &lawyer.token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_manual_update_scoped_to_owner(pool: PgPool) {
    let app = common::build_test_app(pool).await;
    let client = signup_client(&app, "client@example.com").await;
    let lawyer = signup_lawyer(&app, "lawyer@example.com", "BAR-1").await;
    let other = signup_lawyer(&app, "other@example.com", "BAR-2").await;

    let created = create_transaction(&app, &lawyer, &client, "90.00").await;
    let transaction_id = created["data"]["id"].as_i64().unwrap();

    let response = patch_json_auth(
        &app,
        &format!("/api/v1/transactions/{transaction_id}/update"),
        json!({ "status": "failed" }),
        &other.token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let response = patch_json_auth(
        &app,
        "/api/v1/transactions/999999/update",
        json!({ "status": "failed" }),
        &lawyer.token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_delete_pending_only(pool: PgPool) {
    let app = common::build_test_app(pool).await;
    let client = signup_client(&app, "client@example.com").await;
    let lawyer = signup_lawyer(&app, "lawyer@example.com", "BAR-1").await;

    let created = create_transaction(&app, &lawyer, &client, "45.00").await;
    let transaction_id = created["data"]["id"].as_i64().unwrap();

    let response = delete_auth(
        &app,
        &format!("/api/v1/transactions/{transaction_id}/delete"),
        &lawyer.token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    // A completed transaction cannot be deleted.
    let created = create_transaction(&app, &lawyer, &client, "60.00").await;
    let transaction_id = created["data"]["id"].as_i64().unwrap();
    let order_id = created["checkout"]["order_id"].as_str().unwrap().to_string();
    let signature = sign_payment(&order_id, "pay_777");
    post_json_auth(
        &app,
        "/api/v1/transactions/verify-payment",
        json!({
            "transaction_id": transaction_id,
            "gateway_order_id": order_id,
            "gateway_payment_id": "pay_777",
            "gateway_signature": signature,
        }),
        &client.token,
    )
    .await;

    let response = delete_auth(
        &app,
        &format!("/api/v1/transactions/{transaction_id}/delete"),
        &lawyer.token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_listings_and_stats(pool: PgPool) {
    let app = common::build_test_app(pool).await;
    let client = signup_client(&app, "client@example.com").await;
    let lawyer = signup_lawyer(&app, "lawyer@example.com", "BAR-1").await;

    let first = create_transaction(&app, &lawyer, &client, "100.00").await;
    create_transaction(&app, &lawyer, &client, "250.00").await;

    // Complete the first one.
    let transaction_id = first["data"]["id"].as_i64().unwrap();
    let order_id = first["checkout"]["order_id"].as_str().unwrap().to_string();
    let signature = sign_payment(&order_id, "pay_1");
    post_json_auth(
        &app,
        "/api/v1/transactions/verify-payment",
        json!({
            "transaction_id": transaction_id,
            "gateway_order_id": order_id,
            "gateway_payment_id": "pay_1",
            "gateway_signature": signature,
        }),
        &client.token,
    )
    .await;

    let response = get_auth(&app, "/api/v1/transactions", &lawyer.token).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 2);

    let response = get_auth(&app, "/api/v1/transactions?status=completed", &lawyer.token).await;
    let json = body_json(response).await;
    let entries = json["data"].as_array().unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["amount"], "100.00");

    let response = get_auth(&app, "/api/v1/transactions/stats", &lawyer.token).await;
    let json = body_json(response).await;
    assert_eq!(json["data"]["total_transactions"], 2);
    assert_eq!(json["data"]["completed_count"], 1);
    assert_eq!(json["data"]["pending_count"], 1);
    assert_eq!(json["data"]["completed_amount"], "100.00");

    let response = get_auth(
        &app,
        "/api/v1/transactions/clients/payment-requests/stats",
        &client.token,
    )
    .await;
    let json = body_json(response).await;
    assert_eq!(json["data"]["total_transactions"], 2);
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_client_pay_returns_checkout(pool: PgPool) {
    let app = common::build_test_app(pool).await;
    let client = signup_client(&app, "client@example.com").await;
    let other_client = signup_client(&app, "other@example.com").await;
    let lawyer = signup_lawyer(&app, "lawyer@example.com", "BAR-1").await;

    let created = create_transaction(&app, &lawyer, &client, "75.25").await;
    let transaction_id = created["data"]["id"].as_i64().unwrap();
    let order_id = created["checkout"]["order_id"].as_str().unwrap().to_string();

    let response = post_json_auth(
        &app,
        &format!("/api/v1/transactions/clients/payments/{transaction_id}/pay"),
        json!({}),
        &client.token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["order_id"], order_id.as_str());
    assert_eq!(json["amount"], 7525);
    assert_eq!(json["currency"], "INR");
    assert_eq!(json["key_id"], "key_test");

    // Someone else's payment request is off limits.
    let response = post_json_auth(
        &app,
        &format!("/api/v1/transactions/clients/payments/{transaction_id}/pay"),
        json!({}),
        &other_client.token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    // Completed transactions are no longer payable.
    let signature = sign_payment(&order_id, "pay_9");
    post_json_auth(
        &app,
        "/api/v1/transactions/verify-payment",
        json!({
            "transaction_id": transaction_id,
            "gateway_order_id": order_id,
            "gateway_payment_id": "pay_9",
            "gateway_signature": signature,
        }),
        &client.token,
    )
    .await;
    let response = post_json_auth(
        &app,
        &format!("/api/v1/transactions/clients/payments/{transaction_id}/pay"),
        json!({}),
        &client.token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
}
