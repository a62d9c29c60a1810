mod common;
mod support;

use actix_web::http::StatusCode;
use actix_web::test;
use backend::entities::users::{self, UserRole};
use backend::state::app_state::AppState;
use backend::state::security_config::SecurityConfig;
use backend_test_support::problem_details::assert_problem_details_from_service_response;
use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};
use serde_json::{json, Value};
use support::auth::bearer_header;
use support::create_test_app;
use support::factory;

#[actix_web::test]
async fn admin_status_for_someone_else_is_403_before_any_store_access() {
    let security = SecurityConfig::default();
    let auth = bearer_header("a@x.com", &security);

    // No database at all: the ownership check must fire first
    let state = AppState::without_db(security);
    let app = create_test_app(state)
        .with_bistro_routes()
        .build()
        .await
        .unwrap();

    let req = test::TestRequest::get()
        .uri("/user/admin/b@x.com")
        .insert_header(("Authorization", auth))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_problem_details_from_service_response(resp, "FORBIDDEN", StatusCode::FORBIDDEN, None)
        .await;
}

#[actix_web::test]
async fn admin_status_reports_true_for_admin_row() {
    let security = SecurityConfig::default();
    let auth = bearer_header("boss@bistro.test", &security);

    let conn = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![factory::user(1, "boss@bistro.test", UserRole::Admin)]])
        .into_connection();
    let state = AppState::new(conn, security);
    let app = create_test_app(state)
        .with_bistro_routes()
        .build()
        .await
        .unwrap();

    let req = test::TestRequest::get()
        .uri("/user/admin/boss@bistro.test")
        .insert_header(("Authorization", auth))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({ "admin": true }));
}

#[actix_web::test]
async fn admin_status_reports_false_when_no_row_exists() {
    let security = SecurityConfig::default();
    let auth = bearer_header("new@bistro.test", &security);

    let conn = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([Vec::<users::Model>::new()])
        .into_connection();
    let state = AppState::new(conn, security);
    let app = create_test_app(state)
        .with_bistro_routes()
        .build()
        .await
        .unwrap();

    let req = test::TestRequest::get()
        .uri("/user/admin/new@bistro.test")
        .insert_header(("Authorization", auth))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({ "admin": false }));
}

#[actix_web::test]
async fn create_user_inserts_on_first_post() {
    let conn = MockDatabase::new(DatabaseBackend::Postgres)
        .append_exec_results([MockExecResult {
            last_insert_id: 5,
            rows_affected: 1,
        }])
        .append_query_results([vec![factory::user(5, "diner@bistro.test", UserRole::Standard)]])
        .into_connection();
    let state = AppState::new(conn, SecurityConfig::default());
    let app = create_test_app(state)
        .with_bistro_routes()
        .build()
        .await
        .unwrap();

    let req = test::TestRequest::post()
        .uri("/user")
        .set_json(json!({ "email": "diner@bistro.test", "name": "Diner" }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({ "created": true, "email": "diner@bistro.test" }));
}

#[actix_web::test]
async fn create_user_is_idempotent_on_email_conflict() {
    // Conflict: insert affects zero rows, the existing row is returned
    let conn = MockDatabase::new(DatabaseBackend::Postgres)
        .append_exec_results([MockExecResult {
            last_insert_id: 0,
            rows_affected: 0,
        }])
        .append_query_results([vec![factory::user(5, "diner@bistro.test", UserRole::Standard)]])
        .into_connection();
    let state = AppState::new(conn, SecurityConfig::default());
    let app = create_test_app(state)
        .with_bistro_routes()
        .build()
        .await
        .unwrap();

    let req = test::TestRequest::post()
        .uri("/user")
        .set_json(json!({ "email": "diner@bistro.test" }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({ "created": false, "email": "diner@bistro.test" }));
}

#[actix_web::test]
async fn create_user_with_empty_email_is_400_without_touching_the_store() {
    let state = AppState::without_db(SecurityConfig::default());
    let app = create_test_app(state)
        .with_bistro_routes()
        .build()
        .await
        .unwrap();

    let req = test::TestRequest::post()
        .uri("/user")
        .set_json(json!({ "email": "" }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_problem_details_from_service_response(
        resp,
        "INVALID_EMAIL",
        StatusCode::BAD_REQUEST,
        None,
    )
    .await;
}

#[actix_web::test]
async fn delete_user_reports_rows_deleted() {
    let security = SecurityConfig::default();
    let auth = bearer_header("boss@bistro.test", &security);

    let conn = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![factory::user(1, "boss@bistro.test", UserRole::Admin)]])
        .append_exec_results([MockExecResult {
            last_insert_id: 0,
            rows_affected: 1,
        }])
        .into_connection();
    let state = AppState::new(conn, security);
    let app = create_test_app(state)
        .with_bistro_routes()
        .build()
        .await
        .unwrap();

    let req = test::TestRequest::delete()
        .uri("/users/42")
        .insert_header(("Authorization", auth))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({ "deleted": 1 }));
}

#[actix_web::test]
async fn promote_missing_user_reports_zero_updates() {
    let security = SecurityConfig::default();
    let auth = bearer_header("boss@bistro.test", &security);

    let conn = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![factory::user(1, "boss@bistro.test", UserRole::Admin)]])
        .append_exec_results([MockExecResult {
            last_insert_id: 0,
            rows_affected: 0,
        }])
        .into_connection();
    let state = AppState::new(conn, security);
    let app = create_test_app(state)
        .with_bistro_routes()
        .build()
        .await
        .unwrap();

    let req = test::TestRequest::patch()
        .uri("/users/admin/999")
        .insert_header(("Authorization", auth))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({ "updated": 0 }));
}

#[actix_web::test]
async fn promoted_user_passes_the_admin_check() {
    let security = SecurityConfig::default();
    let boss_auth = bearer_header("boss@bistro.test", &security);
    let diner_auth = bearer_header("diner@bistro.test", &security);

    // Promote consumes the gate row plus one exec; the follow-up
    // self-check reads the now-admin row.
    let conn = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([
            vec![factory::user(1, "boss@bistro.test", UserRole::Admin)],
            vec![factory::user(7, "diner@bistro.test", UserRole::Admin)],
        ])
        .append_exec_results([MockExecResult {
            last_insert_id: 0,
            rows_affected: 1,
        }])
        .into_connection();
    let state = AppState::new(conn, security);
    let app = create_test_app(state)
        .with_bistro_routes()
        .build()
        .await
        .unwrap();

    let req = test::TestRequest::patch()
        .uri("/users/admin/7")
        .insert_header(("Authorization", boss_auth))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({ "updated": 1 }));

    let req = test::TestRequest::get()
        .uri("/user/admin/diner@bistro.test")
        .insert_header(("Authorization", diner_auth))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({ "admin": true }));
}

#[actix_web::test]
async fn promote_user_reports_one_update() {
    let security = SecurityConfig::default();
    let auth = bearer_header("boss@bistro.test", &security);

    let conn = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![factory::user(1, "boss@bistro.test", UserRole::Admin)]])
        .append_exec_results([MockExecResult {
            last_insert_id: 0,
            rows_affected: 1,
        }])
        .into_connection();
    let state = AppState::new(conn, security);
    let app = create_test_app(state)
        .with_bistro_routes()
        .build()
        .await
        .unwrap();

    let req = test::TestRequest::patch()
        .uri("/users/admin/7")
        .insert_header(("Authorization", auth))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({ "updated": 1 }));
}
