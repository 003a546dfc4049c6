//! Incident reporting tests, including the detached incident webhook.

mod common;

use std::sync::Arc;

use axum::http::StatusCode;
use serde_json::json;
use sqlx::PgPool;

use agriops_api::notifications::{WebhookConfig, WebhookNotifier};
use agriops_core::notifications::LEDGER_INCIDENT_WEBHOOK;
use agriops_core::roles::{ROLE_ADMIN, ROLE_SUPERVISOR, ROLE_WORKER};
use agriops_db::models::field::CreateField;
use agriops_db::repositories::FieldRepo;

use common::{
    build_test_app, build_test_app_with_notifier, create_test_user, expect_json, get, patch_json,
    post_json, wait_for_ledger_rows, MockOutcome, MockTransport,
};

async fn seed_field(pool: &PgPool) -> i64 {
    FieldRepo::create(
        pool,
        &CreateField {
            name: "North Block".to_string(),
            crop_type: "sugarcane".to_string(),
            warning_threshold: None,
            critical_threshold: None,
        },
    )
    .await
    .unwrap()
    .id
}

#[sqlx::test(migrations = "../db/migrations")]
async fn worker_reports_incident_in_open_status(pool: PgPool) {
    let (_, token) = create_test_user(&pool, "worker@farm.test", ROLE_WORKER).await;
    let field_id = seed_field(&pool).await;

    let response = post_json(
        build_test_app(pool.clone()),
        "/api/v1/incidents",
        json!({
            "field_id": field_id,
            "incident_type": "EQUIPMENT_FAILURE",
            "severity": "HIGH",
            "description": "Pump 2 seized"
        }),
        Some(&token),
    )
    .await;
    let body = expect_json(response, StatusCode::CREATED).await;
    assert_eq!(body["data"]["status"], "OPEN");
    assert_eq!(body["data"]["incident_type"], "EQUIPMENT_FAILURE");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn incident_creation_fires_webhook(pool: PgPool) {
    let (_, token) = create_test_user(&pool, "worker@farm.test", ROLE_WORKER).await;
    let field_id = seed_field(&pool).await;

    let transport = Arc::new(MockTransport::new(MockOutcome::Success));
    let notifier = Arc::new(WebhookNotifier::new(
        pool.clone(),
        WebhookConfig {
            irrigation_url: None,
            incident_url: Some("https://hooks.example.test/incident".to_string()),
        },
        transport.clone(),
    ));
    let app = build_test_app_with_notifier(pool.clone(), notifier);

    let body = expect_json(
        post_json(
            app,
            "/api/v1/incidents",
            json!({
                "field_id": field_id,
                "incident_type": "CROP_DISEASE",
                "severity": "MEDIUM",
                "description": "Rust spots on leaves"
            }),
            Some(&token),
        )
        .await,
        StatusCode::CREATED,
    )
    .await;
    let incident_id = body["data"]["id"].as_i64().unwrap();

    let ledger = wait_for_ledger_rows(&pool, LEDGER_INCIDENT_WEBHOOK, incident_id, 1).await;
    assert_eq!(ledger[0].delivery_status, "DELIVERED");

    let (_, payload) = transport.calls.lock().unwrap().remove(0);
    assert_eq!(payload["eventType"], "INCIDENT_CREATED");
    assert_eq!(payload["data"]["field"]["name"], "North Block");
    assert_eq!(payload["data"]["severity"], "MEDIUM");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn incident_rejects_unknown_type_and_severity(pool: PgPool) {
    let (_, token) = create_test_user(&pool, "worker@farm.test", ROLE_WORKER).await;
    let field_id = seed_field(&pool).await;

    let bad_type = post_json(
        build_test_app(pool.clone()),
        "/api/v1/incidents",
        json!({
            "field_id": field_id,
            "incident_type": "ALIEN_INVASION",
            "severity": "HIGH",
            "description": "Hmm"
        }),
        Some(&token),
    )
    .await;
    assert_eq!(bad_type.status(), StatusCode::BAD_REQUEST);

    let bad_severity = post_json(
        build_test_app(pool.clone()),
        "/api/v1/incidents",
        json!({
            "field_id": field_id,
            "incident_type": "CROP_DISEASE",
            "severity": "EXTREME",
            "description": "Hmm"
        }),
        Some(&token),
    )
    .await;
    assert_eq!(bad_severity.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn admin_cannot_report_incidents(pool: PgPool) {
    let (_, token) = create_test_user(&pool, "admin@farm.test", ROLE_ADMIN).await;
    let field_id = seed_field(&pool).await;

    let response = post_json(
        build_test_app(pool.clone()),
        "/api/v1/incidents",
        json!({
            "field_id": field_id,
            "incident_type": "EQUIPMENT_FAILURE",
            "severity": "LOW",
            "description": "Broken gauge"
        }),
        Some(&token),
    )
    .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn supervisor_moves_incident_through_statuses(pool: PgPool) {
    let (_, worker_token) = create_test_user(&pool, "worker@farm.test", ROLE_WORKER).await;
    let (_, sup_token) = create_test_user(&pool, "sup@farm.test", ROLE_SUPERVISOR).await;
    let field_id = seed_field(&pool).await;

    let created = expect_json(
        post_json(
            build_test_app(pool.clone()),
            "/api/v1/incidents",
            json!({
                "field_id": field_id,
                "incident_type": "IRRIGATION_FAILURE",
                "severity": "HIGH",
                "description": "Valve stuck closed"
            }),
            Some(&worker_token),
        )
        .await,
        StatusCode::CREATED,
    )
    .await;
    let id = created["data"]["id"].as_i64().unwrap();

    let in_progress = expect_json(
        patch_json(
            build_test_app(pool.clone()),
            &format!("/api/v1/incidents/{id}/status"),
            json!({ "status": "IN_PROGRESS" }),
            Some(&sup_token),
        )
        .await,
        StatusCode::OK,
    )
    .await;
    assert_eq!(in_progress["data"]["status"], "IN_PROGRESS");

    let resolved = expect_json(
        patch_json(
            build_test_app(pool.clone()),
            &format!("/api/v1/incidents/{id}/status"),
            json!({ "status": "RESOLVED" }),
            Some(&sup_token),
        )
        .await,
        StatusCode::OK,
    )
    .await;
    assert_eq!(resolved["data"]["status"], "RESOLVED");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn worker_cannot_update_incident_status(pool: PgPool) {
    let (_, worker_token) = create_test_user(&pool, "worker@farm.test", ROLE_WORKER).await;
    let field_id = seed_field(&pool).await;

    let created = expect_json(
        post_json(
            build_test_app(pool.clone()),
            "/api/v1/incidents",
            json!({
                "field_id": field_id,
                "incident_type": "IRRIGATION_FAILURE",
                "severity": "HIGH",
                "description": "Valve stuck closed"
            }),
            Some(&worker_token),
        )
        .await,
        StatusCode::CREATED,
    )
    .await;
    let id = created["data"]["id"].as_i64().unwrap();

    let response = patch_json(
        build_test_app(pool.clone()),
        &format!("/api/v1/incidents/{id}/status"),
        json!({ "status": "RESOLVED" }),
        Some(&worker_token),
    )
    .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn listing_includes_field_and_reporter_names(pool: PgPool) {
    let (_, worker_token) = create_test_user(&pool, "worker@farm.test", ROLE_WORKER).await;
    let field_id = seed_field(&pool).await;

    expect_json(
        post_json(
            build_test_app(pool.clone()),
            "/api/v1/incidents",
            json!({
                "field_id": field_id,
                "incident_type": "EMERGENCY_EVENT",
                "severity": "HIGH",
                "description": "Flooding at the gate"
            }),
            Some(&worker_token),
        )
        .await,
        StatusCode::CREATED,
    )
    .await;

    let body = expect_json(
        get(build_test_app(pool.clone()), "/api/v1/incidents", Some(&worker_token)).await,
        StatusCode::OK,
    )
    .await;
    let incidents = body["data"].as_array().unwrap();
    assert_eq!(incidents.len(), 1);
    assert_eq!(incidents[0]["field_name"], "North Block");
    assert_eq!(incidents[0]["reported_by_name"], "Test User");
}
