use actix_web::{web, HttpResponse, Result};

use crate::error::AppError;
use crate::infra::db::require_db;
use crate::services::reviews as reviews_service;
use crate::state::app_state::AppState;

async fn list_reviews(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    let reviews = reviews_service::list_reviews(db).await?;
    Ok(HttpResponse::Ok().json(reviews))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/reviews").route(web::get().to(list_reviews)));
}
