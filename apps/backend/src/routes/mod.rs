use actix_web::{web, HttpResponse};
use serde::Serialize;

use crate::error::AppError;

pub mod auth;
pub mod carts;
pub mod menu;
pub mod payments;
pub mod reviews;
pub mod users;

/// Row-count body for DELETE endpoints.
#[derive(Debug, Serialize)]
pub struct DeletedCount {
    pub deleted: u64,
}

/// Row-count body for PATCH endpoints.
#[derive(Debug, Serialize)]
pub struct UpdatedCount {
    pub updated: u64,
}

/// Wires the full route surface plus extractor error handling, so tests
/// and `main.rs` assemble exactly the same app.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(|err, _req| {
        AppError::bad_request("INVALID_JSON", err.to_string()).into()
    }));
    cfg.app_data(web::PathConfig::default().error_handler(|err, _req| {
        AppError::bad_request("INVALID_PATH_PARAMETER", err.to_string()).into()
    }));
    cfg.app_data(web::QueryConfig::default().error_handler(|err, _req| {
        AppError::bad_request("INVALID_QUERY_PARAMETER", err.to_string()).into()
    }));

    crate::health::configure_routes(cfg);
    auth::configure_routes(cfg);
    users::configure_routes(cfg);
    menu::configure_routes(cfg);
    reviews::configure_routes(cfg);
    carts::configure_routes(cfg);
    payments::configure_routes(cfg);

    cfg.default_service(web::route().to(not_found));
}

async fn not_found() -> Result<HttpResponse, AppError> {
    Err(AppError::not_found("NOT_FOUND", "Route not found"))
}
