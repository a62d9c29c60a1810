mod common;
mod support;

use actix_web::http::StatusCode;
use actix_web::test;
use backend::state::app_state::AppState;
use backend::state::security_config::SecurityConfig;
use backend_test_support::problem_details::assert_problem_details_from_service_response;
use support::auth::{bearer_header, mint_expired_token};
use support::create_test_app;

// The role gate fails closed long before any store access, so none of
// these tests need a database.

#[actix_web::test]
async fn missing_authorization_header_is_401() {
    let state = AppState::without_db(SecurityConfig::default());
    let app = create_test_app(state)
        .with_bistro_routes()
        .build()
        .await
        .unwrap();

    let req = test::TestRequest::get().uri("/users").to_request();
    let resp = test::call_service(&app, req).await;

    let www_auth = resp
        .headers()
        .get("WWW-Authenticate")
        .expect("401 must carry WWW-Authenticate");
    assert_eq!(www_auth.to_str().unwrap(), "Bearer");

    assert_problem_details_from_service_response(
        resp,
        "UNAUTHORIZED_MISSING_BEARER",
        StatusCode::UNAUTHORIZED,
        None,
    )
    .await;
}

#[actix_web::test]
async fn malformed_authorization_headers_are_401() {
    let state = AppState::without_db(SecurityConfig::default());
    let app = create_test_app(state)
        .with_bistro_routes()
        .build()
        .await
        .unwrap();

    let malformed_headers = vec!["Token abc123", "Bearer", "Bearer ", "Basic abc123", "abc123"];

    for header_value in malformed_headers {
        let req = test::TestRequest::get()
            .uri("/users")
            .insert_header(("Authorization", header_value))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_problem_details_from_service_response(
            resp,
            "UNAUTHORIZED_MISSING_BEARER",
            StatusCode::UNAUTHORIZED,
            None,
        )
        .await;
    }
}

#[actix_web::test]
async fn garbage_token_is_401_invalid() {
    let state = AppState::without_db(SecurityConfig::default());
    let app = create_test_app(state)
        .with_bistro_routes()
        .build()
        .await
        .unwrap();

    let req = test::TestRequest::get()
        .uri("/users")
        .insert_header(("Authorization", "Bearer not.a.jwt"))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_problem_details_from_service_response(
        resp,
        "UNAUTHORIZED_INVALID_JWT",
        StatusCode::UNAUTHORIZED,
        None,
    )
    .await;
}

#[actix_web::test]
async fn expired_token_is_401_expired() {
    let security = SecurityConfig::default();
    let expired = mint_expired_token("admin@bistro.test", &security);

    let state = AppState::without_db(security);
    let app = create_test_app(state)
        .with_bistro_routes()
        .build()
        .await
        .unwrap();

    let req = test::TestRequest::get()
        .uri("/users")
        .insert_header(("Authorization", format!("Bearer {expired}")))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_problem_details_from_service_response(
        resp,
        "UNAUTHORIZED_EXPIRED_JWT",
        StatusCode::UNAUTHORIZED,
        None,
    )
    .await;
}

#[actix_web::test]
async fn token_signed_with_other_secret_is_401_invalid() {
    let other_security = SecurityConfig::new("a-different-secret".as_bytes());
    let foreign_header = bearer_header("admin@bistro.test", &other_security);

    let state = AppState::without_db(SecurityConfig::default());
    let app = create_test_app(state)
        .with_bistro_routes()
        .build()
        .await
        .unwrap();

    let req = test::TestRequest::get()
        .uri("/users")
        .insert_header(("Authorization", foreign_header))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_problem_details_from_service_response(
        resp,
        "UNAUTHORIZED_INVALID_JWT",
        StatusCode::UNAUTHORIZED,
        None,
    )
    .await;
}
