use actix_web::{web, HttpResponse, Result};
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::extractors::admin_user::AdminUser;
use crate::extractors::current_user::CurrentUser;
use crate::infra::db::require_db;
use crate::routes::{DeletedCount, UpdatedCount};
use crate::services::users as users_service;
use crate::state::app_state::AppState;

#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    #[serde(default)]
    pub email: String,
    pub name: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct CreateUserResponse {
    pub created: bool,
    pub email: String,
}

#[derive(Debug, Serialize)]
pub struct AdminStatusResponse {
    pub admin: bool,
}

/// List every user record. Admin only.
async fn list_users(
    _admin: AdminUser,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    let users = users_service::list_users(db).await?;
    Ok(HttpResponse::Ok().json(users))
}

/// Self-service admin probe. Any signed-in user may ask about their own
/// email only; a missing row is `{"admin": false}`, not an error.
async fn admin_status(
    current_user: CurrentUser,
    path: web::Path<String>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let email = path.into_inner();

    // Ownership check runs before any store access.
    if email != current_user.email {
        return Err(AppError::forbidden());
    }

    let db = require_db(&app_state)?;
    let admin = users_service::is_admin(db, &email).await?;

    Ok(HttpResponse::Ok().json(AdminStatusResponse { admin }))
}

/// Create a user record on first sign-in. Re-posting the same email is
/// fine and reports `created: false`.
async fn create_user(
    req: web::Json<CreateUserRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    if req.email.trim().is_empty() {
        return Err(AppError::bad_request(
            "INVALID_EMAIL",
            "Email cannot be empty".to_string(),
        ));
    }

    let db = require_db(&app_state)?;
    let req = req.into_inner();
    let (user, created) = users_service::ensure_user(db, &req.email, req.name).await?;

    Ok(HttpResponse::Ok().json(CreateUserResponse {
        created,
        email: user.email,
    }))
}

async fn delete_user(
    _admin: AdminUser,
    path: web::Path<i64>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    let deleted = users_service::delete_user(db, path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(DeletedCount { deleted }))
}

async fn promote_admin(
    _admin: AdminUser,
    path: web::Path<i64>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    let updated = users_service::promote_to_admin(db, path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(UpdatedCount { updated }))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/users").route(web::get().to(list_users)))
        .service(web::resource("/user").route(web::post().to(create_user)))
        .service(web::resource("/user/admin/{email}").route(web::get().to(admin_status)))
        .service(web::resource("/users/{id}").route(web::delete().to(delete_user)))
        .service(web::resource("/users/admin/{id}").route(web::patch().to(promote_admin)));
}
