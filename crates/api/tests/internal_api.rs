//! Internal reporting surface tests: shared-token auth and summary counts.

mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use sqlx::PgPool;
use tower::ServiceExt;

use agriops_core::roles::ROLE_WORKER;
use agriops_db::models::field::CreateField;
use agriops_db::models::incident::CreateIncident;
use agriops_db::models::task::CreateTask;
use agriops_db::repositories::{FieldRepo, IncidentRepo, IrrigationLogRepo, TaskRepo};

use common::{
    body_json, build_test_app, build_test_app_with_config, create_test_user, test_config,
    TEST_INTERNAL_TOKEN,
};

async fn get_summary(pool: &PgPool, token: Option<&str>) -> axum::response::Response {
    let mut builder = Request::builder().method("GET").uri("/internal/daily-summary");
    if let Some(token) = token {
        builder = builder.header("x-internal-token", token);
    }
    build_test_app(pool.clone())
        .oneshot(builder.body(Body::empty()).unwrap())
        .await
        .unwrap()
}

#[sqlx::test(migrations = "../db/migrations")]
async fn summary_requires_the_shared_token(pool: PgPool) {
    let missing = get_summary(&pool, None).await;
    assert_eq!(missing.status(), StatusCode::UNAUTHORIZED);

    let wrong = get_summary(&pool, Some("not-the-token")).await;
    assert_eq!(wrong.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn unset_token_disables_the_route_entirely(pool: PgPool) {
    let mut config = test_config();
    config.internal_api_token = None;
    let app = build_test_app_with_config(pool.clone(), config);

    let response = app
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/internal/daily-summary")
                .header("x-internal-token", TEST_INTERNAL_TOKEN)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn summary_counts_incidents_tasks_and_critical_fields(pool: PgPool) {
    let (worker, _) = create_test_user(&pool, "worker@farm.test", ROLE_WORKER).await;
    let field = FieldRepo::create(
        &pool,
        &CreateField {
            name: "North Block".to_string(),
            crop_type: "sugarcane".to_string(),
            warning_threshold: None,
            critical_threshold: None,
        },
    )
    .await
    .unwrap();

    let open = IncidentRepo::create(
        &pool,
        worker.id,
        &CreateIncident {
            field_id: field.id,
            incident_type: "CROP_DISEASE".to_string(),
            severity: "LOW".to_string(),
            description: "Spots".to_string(),
        },
    )
    .await
    .unwrap();
    let resolved = IncidentRepo::create(
        &pool,
        worker.id,
        &CreateIncident {
            field_id: field.id,
            incident_type: "EQUIPMENT_FAILURE".to_string(),
            severity: "LOW".to_string(),
            description: "Fixed already".to_string(),
        },
    )
    .await
    .unwrap();
    IncidentRepo::update_status(&pool, resolved.id, "RESOLVED")
        .await
        .unwrap();
    assert_eq!(open.status, "OPEN");

    TaskRepo::create(
        &pool,
        &CreateTask {
            field_id: field.id,
            incident_id: None,
            title: "Irrigate".to_string(),
            description: "Now".to_string(),
            priority: Some("CRITICAL".to_string()),
        },
    )
    .await
    .unwrap();

    // One reading at the critical threshold marks the field critical.
    IrrigationLogRepo::create(&pool, field.id, 15.0, worker.id)
        .await
        .unwrap();

    let response = get_summary(&pool, Some(TEST_INTERNAL_TOKEN)).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["data"]["total_incidents"], 2);
    assert_eq!(body["data"]["open_incidents"], 1);
    assert_eq!(body["data"]["pending_tasks"], 1);
    assert_eq!(body["data"]["critical_fields"], 1);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn empty_database_yields_zero_counts(pool: PgPool) {
    let response = get_summary(&pool, Some(TEST_INTERNAL_TOKEN)).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["data"]["total_incidents"], 0);
    assert_eq!(body["data"]["open_incidents"], 0);
    assert_eq!(body["data"]["pending_tasks"], 0);
    assert_eq!(body["data"]["critical_fields"], 0);
}
