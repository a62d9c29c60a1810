use actix_web::{web, HttpResponse, Result};
use serde::{Deserialize, Serialize};

use crate::entities::payments::Model as Payment;
use crate::error::AppError;
use crate::infra::db::require_db;
use crate::infra::stripe::{cents_from_price, require_payments};
use crate::services::payments::{self as payments_service, PaymentInput};
use crate::state::app_state::AppState;

#[derive(Debug, Deserialize)]
pub struct CreateIntentRequest {
    pub price: f64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateIntentResponse {
    pub client_secret: String,
}

/// Payment record as the storefront posts it after the card flow settles.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordPaymentRequest {
    pub email: String,
    pub price: f64,
    pub transaction_id: String,
    #[serde(default = "default_status")]
    pub status: String,
    #[serde(default)]
    pub cart_item_ids: Vec<i64>,
    #[serde(default)]
    pub menu_item_ids: Vec<i64>,
}

fn default_status() -> String {
    "pending".to_string()
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRecordedResponse {
    pub payment: Payment,
    pub deleted_cart_items: u64,
}

/// Ask the card provider for a payment intent. The price is validated
/// before the provider handle is even looked at, so a bad price is 400
/// whether or not payments are configured.
async fn create_payment_intent(
    req: web::Json<CreateIntentRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let amount_cents = cents_from_price(req.price)?;
    let provider = require_payments(&app_state)?;

    let intent = provider.create_payment_intent(amount_cents).await?;

    Ok(HttpResponse::Ok().json(CreateIntentResponse {
        client_secret: intent.client_secret,
    }))
}

async fn record_payment(
    req: web::Json<RecordPaymentRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    let req = req.into_inner();

    let (payment, deleted_cart_items) = payments_service::record_payment(
        db,
        PaymentInput {
            email: req.email,
            price: req.price,
            transaction_id: req.transaction_id,
            status: req.status,
            cart_item_ids: req.cart_item_ids,
            menu_item_ids: req.menu_item_ids,
        },
    )
    .await?;

    Ok(HttpResponse::Ok().json(PaymentRecordedResponse {
        payment,
        deleted_cart_items,
    }))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/create-payment-intent").route(web::post().to(create_payment_intent)))
        .service(web::resource("/payments").route(web::post().to(record_payment)));
}
