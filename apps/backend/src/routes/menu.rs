use actix_web::{web, HttpResponse, Result};

use crate::error::AppError;
use crate::extractors::admin_user::AdminUser;
use crate::infra::db::require_db;
use crate::routes::{DeletedCount, UpdatedCount};
use crate::services::menu::{self as menu_service, MenuItemInput};
use crate::state::app_state::AppState;

async fn list_menu(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    let items = menu_service::list_items(db).await?;
    Ok(HttpResponse::Ok().json(items))
}

/// Fetch one menu item. An absent id is `null`, not 404; the storefront
/// treats both the same way.
async fn get_menu_item(
    path: web::Path<i64>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    let item = menu_service::get_item(db, path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(item))
}

async fn create_menu_item(
    _admin: AdminUser,
    input: web::Json<MenuItemInput>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    let item = menu_service::create_item(db, input.into_inner()).await?;
    Ok(HttpResponse::Ok().json(item))
}

async fn update_menu_item(
    _admin: AdminUser,
    path: web::Path<i64>,
    input: web::Json<MenuItemInput>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    let updated = menu_service::update_item(db, path.into_inner(), input.into_inner()).await?;
    Ok(HttpResponse::Ok().json(UpdatedCount { updated }))
}

async fn delete_menu_item(
    _admin: AdminUser,
    path: web::Path<i64>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    let deleted = menu_service::delete_item(db, path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(DeletedCount { deleted }))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/menu")
            .route(web::get().to(list_menu))
            .route(web::post().to(create_menu_item)),
    )
    .service(
        web::resource("/menu/{id}")
            .route(web::get().to(get_menu_item))
            .route(web::patch().to(update_menu_item))
            .route(web::delete().to(delete_menu_item)),
    );
}
