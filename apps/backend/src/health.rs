use actix_web::{web, HttpResponse};
use migration::get_latest_migration_version;
use sea_orm::ConnectionTrait;
use serde::Serialize;
use time::OffsetDateTime;

use crate::error::AppError;
use crate::infra::db::require_db;
use crate::state::app_state::AppState;

/// Plain-text liveness banner on `/`.
async fn banner() -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().body("bistro boss is sitting"))
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: String,
    app_version: String,
    db: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    db_error: Option<String>,
    schema_version: Option<String>,
    time: String,
}

/// Readiness probe: reports DB reachability and the latest applied
/// migration. Always 200; the body says what is degraded.
async fn health(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let app_version = env!("CARGO_PKG_VERSION").to_string();

    let now = OffsetDateTime::now_utc();
    let time = now
        .format(&time::format_description::well_known::Rfc3339)
        .unwrap_or_else(|_| "unknown".to_string());

    let (db, db_error, schema_version) = match require_db(&app_state) {
        Ok(conn) => {
            let ping = conn
                .query_one(sea_orm::Statement::from_string(
                    conn.get_database_backend(),
                    "SELECT 1 as health_check".to_string(),
                ))
                .await;
            match ping {
                Ok(_) => {
                    let schema_version =
                        get_latest_migration_version(conn).await.unwrap_or(None);
                    ("ok".to_string(), None, schema_version)
                }
                Err(e) => (
                    "unavailable".to_string(),
                    Some(format!("DB query failed: {e}")),
                    None,
                ),
            }
        }
        Err(e) => (
            "unavailable".to_string(),
            Some(format!("DB unavailable: {e}")),
            None,
        ),
    };

    Ok(HttpResponse::Ok().json(HealthResponse {
        status: "ok".to_string(),
        app_version,
        db,
        db_error,
        schema_version,
        time,
    }))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(banner))
        .route("/health", web::get().to(health));
}
