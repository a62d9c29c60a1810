use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, NotSet, QueryFilter, Set, TransactionTrait};
use tracing::info;

use crate::entities::payments::{self, Model as Payment};
use crate::error::AppError;
use crate::logging::pii::Redacted;

pub struct PaymentInput {
    pub email: String,
    pub price: f64,
    pub transaction_id: String,
    pub status: String,
    pub cart_item_ids: Vec<i64>,
    pub menu_item_ids: Vec<i64>,
}

/// Record a completed payment and clear the consumed cart rows as one
/// transaction. Returns the stored payment and how many cart rows went away.
pub async fn record_payment(
    conn: &impl TransactionTrait,
    input: PaymentInput,
) -> Result<(Payment, u64), AppError> {
    let cart_ids_json = serde_json::json!(input.cart_item_ids);
    let menu_ids_json = serde_json::json!(input.menu_item_ids);

    let txn = conn.begin().await?;

    let payment_active = payments::ActiveModel {
        id: NotSet,
        email: Set(input.email.clone()),
        price: Set(input.price),
        transaction_id: Set(input.transaction_id),
        status: Set(input.status),
        cart_item_ids: Set(cart_ids_json),
        menu_item_ids: Set(menu_ids_json),
        created_at: Set(time::OffsetDateTime::now_utc()),
    };

    let payment = payment_active.insert(&txn).await?;

    // An empty id list must not turn into an unfiltered DELETE.
    let deleted = if input.cart_item_ids.is_empty() {
        0
    } else {
        crate::entities::cart_items::Entity::delete_many()
            .filter(crate::entities::cart_items::Column::Id.is_in(input.cart_item_ids))
            .exec(&txn)
            .await?
            .rows_affected
    };

    txn.commit().await?;

    info!(
        email = %Redacted(&input.email),
        payment_id = payment.id,
        deleted_cart_items = deleted,
        "payment recorded"
    );

    Ok((payment, deleted))
}
