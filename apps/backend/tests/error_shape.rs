mod common;
mod support;

use actix_web::http::StatusCode;
use actix_web::test;
use backend::state::app_state::AppState;
use backend::state::security_config::SecurityConfig;
use backend_test_support::problem_details::assert_problem_details_from_service_response;
use serde_json::Value;
use support::create_test_app;

#[actix_web::test]
async fn unmatched_route_is_404_problem() {
    let state = AppState::without_db(SecurityConfig::default());
    let app = create_test_app(state)
        .with_bistro_routes()
        .build()
        .await
        .unwrap();

    let req = test::TestRequest::get().uri("/definitely/not/a/route").to_request();
    let resp = test::call_service(&app, req).await;

    assert_problem_details_from_service_response(
        resp,
        "NOT_FOUND",
        StatusCode::NOT_FOUND,
        Some("Route not found"),
    )
    .await;
}

#[actix_web::test]
async fn store_free_state_yields_503_on_db_routes() {
    let state = AppState::without_db(SecurityConfig::default());
    let app = create_test_app(state)
        .with_bistro_routes()
        .build()
        .await
        .unwrap();

    let req = test::TestRequest::get().uri("/menu").to_request();
    let resp = test::call_service(&app, req).await;

    assert_problem_details_from_service_response(
        resp,
        "DB_UNAVAILABLE",
        StatusCode::SERVICE_UNAVAILABLE,
        Some("Database is not configured"),
    )
    .await;
}

/// Full body shape: all six RFC 7807 fields, the bistro type URL, a
/// humanized title, and trace id parity with the response header.
#[actix_web::test]
async fn problem_body_carries_every_contract_field() {
    let state = AppState::without_db(SecurityConfig::default());
    let app = create_test_app(state)
        .with_bistro_routes()
        .build()
        .await
        .unwrap();

    let req = test::TestRequest::get().uri("/reviews").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);

    let headers = resp.headers().clone();
    let trace_id = headers
        .get("x-trace-id")
        .expect("x-trace-id header should be present")
        .to_str()
        .unwrap()
        .to_string();
    assert!(!trace_id.is_empty());

    let content_type = headers.get("content-type").unwrap().to_str().unwrap();
    assert!(content_type.starts_with("application/problem+json"));

    let body = test::read_body(resp).await;
    let problem: Value = serde_json::from_slice(&body).unwrap();

    for key in ["type", "title", "status", "detail", "code", "trace_id"] {
        assert!(problem.get(key).is_some(), "{key} field should be present");
    }

    assert_eq!(problem["code"], "DB_UNAVAILABLE");
    assert_eq!(problem["status"], 503);
    assert_eq!(problem["title"], "Db Unavailable");
    let type_value = problem["type"].as_str().unwrap();
    assert!(
        type_value.starts_with("https://bistro.app/errors/"),
        "type should use the bistro error namespace, got {type_value}"
    );

    common::assert_trace_id_matches(&problem, &trace_id);
}
