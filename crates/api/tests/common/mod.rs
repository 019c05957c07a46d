#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{HeaderName, Method, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;
use uuid::Uuid;

use casebridge_api::auth::jwt::JwtConfig;
use casebridge_api::bootstrap;
use casebridge_api::config::{AssistantConfig, GatewayConfig, ServerConfig};
use casebridge_api::routes;
use casebridge_api::state::AppState;
use casebridge_assistant::{AssistantError, LegalAssistant};
use casebridge_gateway::{signature, GatewayError, GatewayOrder, PaymentGateway};

/// Gateway secret shared between the mock gateway and tests that need to
/// produce a valid checkout signature.
pub const TEST_GATEWAY_SECRET: &str = "test-gateway-secret";

/// Bot account email used by the test configuration.
pub const TEST_BOT_EMAIL: &str = "legalbot@test.local";

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        jwt: JwtConfig {
            secret: "test-secret-that-is-long-enough-for-hmac".to_string(),
            access_token_expiry_mins: 15,
            refresh_token_expiry_days: 7,
        },
        gateway: GatewayConfig {
            key_id: "key_test".to_string(),
            key_secret: TEST_GATEWAY_SECRET.to_string(),
            timeout: Duration::from_secs(5),
        },
        assistant: AssistantConfig {
            url: "http://localhost:0/unused".to_string(),
            timeout: Duration::from_secs(5),
        },
        bot_email: TEST_BOT_EMAIL.to_string(),
        media_dir: PathBuf::from(std::env::temp_dir()).join("casebridge-test-media"),
    }
}

/// In-process gateway: orders get a fresh id, signatures verify against
/// [`TEST_GATEWAY_SECRET`].
pub struct MockGateway;

#[async_trait]
impl PaymentGateway for MockGateway {
    async fn create_order(
        &self,
        amount_minor: i64,
        currency: &str,
        _receipt: &str,
    ) -> Result<GatewayOrder, GatewayError> {
        Ok(GatewayOrder {
            order_id: format!("order_{}", Uuid::new_v4().simple()),
            amount_minor,
            currency: currency.to_string(),
        })
    }

    fn verify_signature(&self, order_id: &str, payment_id: &str, sig: &str) -> bool {
        signature::verify(TEST_GATEWAY_SECRET, order_id, payment_id, sig)
    }

    fn key_id(&self) -> &str {
        "key_test"
    }
}

/// Produce a valid checkout signature the way the gateway would.
pub fn sign_payment(order_id: &str, payment_id: &str) -> String {
    signature::sign(TEST_GATEWAY_SECRET, order_id, payment_id)
}

/// In-process assistant: echoes the query back with a fixed prefix.
pub struct MockAssistant;

#[async_trait]
impl LegalAssistant for MockAssistant {
    async fn answer(&self, query: &str) -> Result<String, AssistantError> {
        Ok(format!("You asked: {query}"))
    }
}

/// An assistant that always fails, for upstream-error tests.
pub struct FailingAssistant;

#[async_trait]
impl LegalAssistant for FailingAssistant {
    async fn answer(&self, _query: &str) -> Result<String, AssistantError> {
        Err(AssistantError::Rejected { status: 503 })
    }
}

/// Build the full application router with all middleware layers, using the
/// given database pool and in-process collaborator mocks.
///
/// This mirrors the router construction in `main.rs` so integration tests
/// exercise the same middleware stack (CORS, request ID, timeout, tracing,
/// panic recovery) that production uses.
pub async fn build_test_app(pool: PgPool) -> Router {
    build_test_app_with_assistant(pool, Arc::new(MockAssistant)).await
}

/// Like [`build_test_app`] but with a caller-supplied assistant.
pub async fn build_test_app_with_assistant(
    pool: PgPool,
    assistant: Arc<dyn LegalAssistant>,
) -> Router {
    let config = test_config();

    let bot_user_id = bootstrap::ensure_bot_user(&pool, &config.bot_email)
        .await
        .expect("bot provisioning should succeed");

    let state = AppState {
        pool,
        config: Arc::new(config),
        gateway: Arc::new(MockGateway),
        assistant,
        bot_user_id,
    };

    let cors = CorsLayer::new()
        .allow_origin(["http://localhost:5173".parse().unwrap()])
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::PATCH,
        ])
        .allow_headers([CONTENT_TYPE, AUTHORIZATION])
        .allow_credentials(true)
        .max_age(Duration::from_secs(3600));

    let request_id_header = HeaderName::from_static("x-request-id");

    Router::new()
        .merge(routes::health::router())
        .nest("/api/v1", routes::api_routes())
        .layer(CatchPanicLayer::new())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(30),
        ))
        .layer(PropagateRequestIdLayer::new(request_id_header.clone()))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(SetRequestIdLayer::new(request_id_header, MakeRequestUuid))
        .layer(cors)
        .with_state(state)
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

async fn send(app: &Router, request: Request<Body>) -> Response {
    app.clone()
        .oneshot(request)
        .await
        .expect("request should not fail at the transport level")
}

pub async fn get(app: &Router, path: &str) -> Response {
    let request = Request::builder()
        .method(Method::GET)
        .uri(path)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn get_auth(app: &Router, path: &str, token: &str) -> Response {
    let request = Request::builder()
        .method(Method::GET)
        .uri(path)
        .header(AUTHORIZATION, format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn post_json(app: &Router, path: &str, body: serde_json::Value) -> Response {
    let request = Request::builder()
        .method(Method::POST)
        .uri(path)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

pub async fn post_json_auth(
    app: &Router,
    path: &str,
    body: serde_json::Value,
    token: &str,
) -> Response {
    let request = Request::builder()
        .method(Method::POST)
        .uri(path)
        .header(CONTENT_TYPE, "application/json")
        .header(AUTHORIZATION, format!("Bearer {token}"))
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

pub async fn put_json_auth(
    app: &Router,
    path: &str,
    body: serde_json::Value,
    token: &str,
) -> Response {
    let request = Request::builder()
        .method(Method::PUT)
        .uri(path)
        .header(CONTENT_TYPE, "application/json")
        .header(AUTHORIZATION, format!("Bearer {token}"))
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

pub async fn patch_json_auth(
    app: &Router,
    path: &str,
    body: serde_json::Value,
    token: &str,
) -> Response {
    let request = Request::builder()
        .method(Method::PATCH)
        .uri(path)
        .header(CONTENT_TYPE, "application/json")
        .header(AUTHORIZATION, format!("Bearer {token}"))
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

/// Multipart boundary used by [`post_multipart_auth`].
pub const MULTIPART_BOUNDARY: &str = "test-boundary-7f3a";

/// POST a multipart/form-data body assembled from (name, filename, bytes)
/// parts. A part with no filename is sent as a plain text field.
pub async fn post_multipart_auth(
    app: &Router,
    path: &str,
    parts: &[(&str, Option<&str>, &[u8])],
    token: &str,
) -> Response {
    let mut body = Vec::new();
    for (name, filename, bytes) in parts {
        body.extend_from_slice(format!("--{MULTIPART_BOUNDARY}\r\n").as_bytes());
        match filename {
            Some(filename) => body.extend_from_slice(
                format!(
                    "Content-Disposition: form-data; name=\"{name}\"; filename=\"{filename}\"\r\n\
                     Content-Type: application/octet-stream\r\n\r\n"
                )
                .as_bytes(),
            ),
            None => body.extend_from_slice(
                format!("Content-Disposition: form-data; name=\"{name}\"\r\n\r\n").as_bytes(),
            ),
        }
        body.extend_from_slice(bytes);
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{MULTIPART_BOUNDARY}--\r\n").as_bytes());

    let request = Request::builder()
        .method(Method::POST)
        .uri(path)
        .header(
            CONTENT_TYPE,
            format!("multipart/form-data; boundary={MULTIPART_BOUNDARY}"),
        )
        .header(AUTHORIZATION, format!("Bearer {token}"))
        .body(Body::from(body))
        .unwrap();
    send(app, request).await
}

pub async fn delete_auth(app: &Router, path: &str, token: &str) -> Response {
    let request = Request::builder()
        .method(Method::DELETE)
        .uri(path)
        .header(AUTHORIZATION, format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

/// Collect a response body into parsed JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body should collect")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("body should be valid JSON")
}

// ---------------------------------------------------------------------------
// Account fixtures
// ---------------------------------------------------------------------------

/// A signed-up account with its access token and profile id.
pub struct TestAccount {
    pub user_id: i64,
    pub profile_id: i64,
    pub token: String,
}

/// Sign up a client account via the API and fetch its profile id.
pub async fn signup_client(app: &Router, email: &str) -> TestAccount {
    let body = serde_json::json!({
        "role": "client",
        "email": email,
        "password": "test_password_123!",
        "full_name": "Test Client",
        "phone_number": "5550100",
        "address": "12 Test Lane",
    });
    let response = post_json(app, "/api/v1/users/signup", body).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    finish_signup(app, response).await
}

/// Sign up a lawyer account via the API and fetch its profile id.
pub async fn signup_lawyer(app: &Router, email: &str, bar_number: &str) -> TestAccount {
    let body = serde_json::json!({
        "role": "lawyer",
        "email": email,
        "password": "test_password_123!",
        "full_name": "Test Lawyer",
        "bar_registration_number": bar_number,
        "specialization": "criminal",
        "experience_years": "3-5",
        "location": "Test City",
        "bio": "A test lawyer.",
    });
    let response = post_json(app, "/api/v1/users/signup", body).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    finish_signup(app, response).await
}

async fn finish_signup(app: &Router, response: Response) -> TestAccount {
    let json = body_json(response).await;
    let token = json["access_token"].as_str().unwrap().to_string();
    let user_id = json["user"]["id"].as_i64().unwrap();

    let profile = get_auth(app, "/api/v1/users/profile", &token).await;
    assert_eq!(profile.status(), StatusCode::OK);
    let profile_json = body_json(profile).await;
    let profile_id = profile_json["profile"]["id"].as_i64().unwrap();

    TestAccount {
        user_id,
        profile_id,
        token,
    }
}

/// Create an accepted hire between the two accounts, returning the hire id.
pub async fn accepted_hire(app: &Router, client: &TestAccount, lawyer: &TestAccount) -> i64 {
    let response = post_json_auth(
        app,
        &format!("/api/v1/hire/lawyer/{}", lawyer.profile_id),
        serde_json::json!({}),
        &client.token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let hire_id = body_json(response).await["data"]["id"].as_i64().unwrap();

    let response = patch_json_auth(
        app,
        &format!("/api/v1/hire/{hire_id}/respond"),
        serde_json::json!({ "status": "accepted" }),
        &lawyer.token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    hire_id
}
