//! Thin client for the payment provider's payment-intent API.

use std::fmt;

use serde::Deserialize;

use crate::error::AppError;
use crate::state::app_state::AppState;

const DEFAULT_API_BASE: &str = "https://api.stripe.com";

/// Client for creating payment intents. Construction requires a secret key;
/// when none is configured the app runs without a provider and the payment
/// routes answer 503.
#[derive(Clone)]
pub struct PaymentProvider {
    client: reqwest::Client,
    secret_key: String,
    api_base: String,
}

impl fmt::Debug for PaymentProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PaymentProvider")
            .field("api_base", &self.api_base)
            .field("secret_key", &"[REDACTED]")
            .finish()
    }
}

/// The subset of the provider's payment-intent object we consume.
#[derive(Debug, Deserialize)]
pub struct PaymentIntent {
    pub id: String,
    pub client_secret: String,
}

impl PaymentProvider {
    pub fn new(secret_key: impl Into<String>, api_base: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            secret_key: secret_key.into(),
            api_base: api_base.into(),
        }
    }

    /// Build a provider from `STRIPE_SECRET_KEY` / `STRIPE_API_BASE`.
    /// Returns `None` when no secret key is configured.
    pub fn from_env() -> Option<Self> {
        let secret_key = std::env::var("STRIPE_SECRET_KEY")
            .ok()
            .filter(|s| !s.is_empty())?;
        let api_base =
            std::env::var("STRIPE_API_BASE").unwrap_or_else(|_| DEFAULT_API_BASE.to_string());
        Some(Self::new(secret_key, api_base))
    }

    /// Create a card payment intent for the given amount in cents.
    pub async fn create_payment_intent(&self, amount_cents: i64) -> Result<PaymentIntent, AppError> {
        let url = format!("{}/v1/payment_intents", self.api_base);
        let amount = amount_cents.to_string();
        let params = [
            ("amount", amount.as_str()),
            ("currency", "usd"),
            ("payment_method_types[]", "card"),
        ];

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.secret_key)
            .form(&params)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let snippet: String = body.chars().take(200).collect();
            return Err(AppError::upstream_payments(format!(
                "Payment provider returned {status}: {snippet}"
            )));
        }

        let intent = response.json::<PaymentIntent>().await?;
        Ok(intent)
    }
}

/// Convert a dish price to an integer amount in cents.
///
/// Truncates toward zero after scaling, so 10.99 maps to 1098 exactly as the
/// storefront client computed it. Non-finite and non-positive prices are
/// rejected before any provider call.
pub fn cents_from_price(price: f64) -> Result<i64, AppError> {
    if !price.is_finite() || price <= 0.0 {
        return Err(AppError::validation(
            "INVALID_PRICE",
            format!("Price must be a positive number, got {price}"),
        ));
    }
    Ok((price * 100.0).trunc() as i64)
}

/// Centralized helper to access the payment provider from AppState.
pub fn require_payments(state: &AppState) -> Result<&PaymentProvider, AppError> {
    state
        .payments()
        .ok_or_else(|| AppError::payments_unavailable("Payment provider is not configured".to_string()))
}
