use actix_web::{web, HttpResponse, Result};
use serde::Deserialize;

use crate::error::AppError;
use crate::infra::db::require_db;
use crate::routes::DeletedCount;
use crate::services::carts::{self as carts_service, CartItemInput};
use crate::state::app_state::AppState;

/// Cart line as the storefront posts it (camelCase, the client's shape).
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddCartItemRequest {
    pub menu_item_id: i64,
    pub email: String,
    pub name: String,
    pub image: String,
    pub price: f64,
}

#[derive(Debug, Deserialize)]
pub struct CartQuery {
    pub email: String,
}

async fn list_cart(
    query: web::Query<CartQuery>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    let items = carts_service::list_by_email(db, &query.email).await?;
    Ok(HttpResponse::Ok().json(items))
}

async fn add_cart_item(
    req: web::Json<AddCartItemRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    let req = req.into_inner();
    let item = carts_service::add_item(
        db,
        CartItemInput {
            menu_item_id: req.menu_item_id,
            email: req.email,
            name: req.name,
            image: req.image,
            price: req.price,
        },
    )
    .await?;
    Ok(HttpResponse::Ok().json(item))
}

async fn remove_cart_item(
    path: web::Path<i64>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    let deleted = carts_service::remove_item(db, path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(DeletedCount { deleted }))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/carts")
            .route(web::get().to(list_cart))
            .route(web::post().to(add_cart_item)),
    )
    .service(web::resource("/carts/{id}").route(web::delete().to(remove_cart_item)));
}
