//! Shared helpers for HTTP-level integration tests.
//!
//! Builds the real application router (same middleware stack as `main.rs`)
//! on top of a `#[sqlx::test]`-provided pool, with the webhook notifier
//! either disabled or backed by a recording fake transport.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use agriops_api::auth::jwt::{generate_access_token, JwtConfig};
use agriops_api::auth::password::hash_password;
use agriops_api::config::ServerConfig;
use agriops_api::notifications::{BoxError, WebhookConfig, WebhookNotifier, WebhookTransport};
use agriops_api::router::build_app_router;
use agriops_api::state::AppState;
use agriops_core::types::DbId;
use agriops_db::models::user::{CreateUser, User};
use agriops_db::repositories::UserRepo;

pub const TEST_INTERNAL_TOKEN: &str = "test-internal-token";

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        internal_api_token: Some(TEST_INTERNAL_TOKEN.to_string()),
        jwt: JwtConfig {
            secret: "integration-test-secret".to_string(),
            access_token_expiry_hours: 1,
        },
    }
}

/// Build the application with webhooks disabled (no destination configured).
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();
    let notifier = Arc::new(WebhookNotifier::new(
        pool.clone(),
        WebhookConfig::default(),
        Arc::new(MockTransport::succeeding()),
    ));
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        notifier,
    };
    build_app_router(state, &config)
}

/// Build the application with a caller-supplied config (webhooks disabled).
pub fn build_test_app_with_config(pool: PgPool, config: ServerConfig) -> Router {
    let notifier = Arc::new(WebhookNotifier::new(
        pool.clone(),
        WebhookConfig::default(),
        Arc::new(MockTransport::succeeding()),
    ));
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        notifier,
    };
    build_app_router(state, &config)
}

/// Build the application with an explicit notifier (recording transports).
pub fn build_test_app_with_notifier(pool: PgPool, notifier: Arc<WebhookNotifier>) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        notifier,
    };
    build_app_router(state, &config)
}

// ---------------------------------------------------------------------------
// Fake webhook transport
// ---------------------------------------------------------------------------

/// What the mock transport should answer with.
#[derive(Debug, Clone, Copy)]
pub enum MockOutcome {
    /// 2xx response.
    Success,
    /// Non-2xx response.
    HttpFailure,
    /// Transport-level error (connection refused, DNS, ...).
    TransportError,
}

/// Recording fake for [`WebhookTransport`]. Counts every delivery attempt
/// and captures the payloads.
pub struct MockTransport {
    outcome: MockOutcome,
    pub calls: Mutex<Vec<(String, serde_json::Value)>>,
}

impl MockTransport {
    pub fn new(outcome: MockOutcome) -> Self {
        Self {
            outcome,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn succeeding() -> Self {
        Self::new(MockOutcome::Success)
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl WebhookTransport for MockTransport {
    async fn post(&self, url: &str, payload: &serde_json::Value) -> Result<bool, BoxError> {
        self.calls
            .lock()
            .unwrap()
            .push((url.to_string(), payload.clone()));
        match self.outcome {
            MockOutcome::Success => Ok(true),
            MockOutcome::HttpFailure => Ok(false),
            MockOutcome::TransportError => Err("connection refused".into()),
        }
    }
}

// ---------------------------------------------------------------------------
// User / token helpers
// ---------------------------------------------------------------------------

/// Create a user directly in the database and return the row plus a valid
/// bearer token for it.
pub async fn create_test_user(pool: &PgPool, email: &str, role: &str) -> (User, String) {
    let password_hash = hash_password("test_password_123!").expect("hashing should succeed");
    let user = UserRepo::create(
        pool,
        &CreateUser {
            email: email.to_string(),
            full_name: "Test User".to_string(),
            password_hash,
            role: role.to_string(),
        },
    )
    .await
    .expect("user creation should succeed");

    let token = generate_access_token(user.id, role, &test_config().jwt)
        .expect("token generation should succeed");

    (user, token)
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn get(app: Router, path: &str, token: Option<&str>) -> Response {
    let mut builder = Request::builder().method("GET").uri(path);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    app.oneshot(builder.body(Body::empty()).unwrap())
        .await
        .unwrap()
}

pub async fn request_json(
    app: Router,
    method: &str,
    path: &str,
    body: serde_json::Value,
    token: Option<&str>,
) -> Response {
    let mut builder = Request::builder()
        .method(method)
        .uri(path)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    app.oneshot(builder.body(Body::from(body.to_string())).unwrap())
        .await
        .unwrap()
}

pub async fn post_json(
    app: Router,
    path: &str,
    body: serde_json::Value,
    token: Option<&str>,
) -> Response {
    request_json(app, "POST", path, body, token).await
}

pub async fn patch_json(
    app: Router,
    path: &str,
    body: serde_json::Value,
    token: Option<&str>,
) -> Response {
    request_json(app, "PATCH", path, body, token).await
}

pub async fn delete(app: Router, path: &str, token: Option<&str>) -> Response {
    let mut builder = Request::builder().method("DELETE").uri(path);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    app.oneshot(builder.body(Body::empty()).unwrap())
        .await
        .unwrap()
}

/// Collect a response body as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).expect("response body should be JSON")
}

/// Assert a response status and return the parsed JSON body.
pub async fn expect_json(response: Response, status: StatusCode) -> serde_json::Value {
    assert_eq!(response.status(), status);
    body_json(response).await
}

// ---------------------------------------------------------------------------
// Ledger polling
// ---------------------------------------------------------------------------

/// Wait for the detached webhook task to write its ledger row.
///
/// The notifier runs on a spawned task the handler never awaits, so tests
/// poll briefly instead of asserting immediately.
pub async fn wait_for_ledger_rows(
    pool: &PgPool,
    event_type: &str,
    related_entity_id: DbId,
    expected: usize,
) -> Vec<agriops_db::models::notification_log::NotificationLog> {
    for _ in 0..50 {
        let rows = agriops_db::repositories::NotificationLogRepo::list_for_entity(
            pool,
            event_type,
            related_entity_id,
        )
        .await
        .expect("ledger query should succeed");
        if rows.len() >= expected {
            return rows;
        }
        tokio::time::sleep(Duration::from_millis(20)).await;
    }
    panic!("ledger rows for {event_type}/{related_entity_id} did not appear in time");
}
