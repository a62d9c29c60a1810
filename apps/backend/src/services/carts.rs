use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, NotSet, QueryFilter, QueryOrder,
    Set,
};

use crate::entities::cart_items::{self, Model as CartItem};
use crate::error::AppError;

/// One cart line as the storefront submits it. The dish fields are
/// denormalized on purpose: the cart keeps what the customer saw.
#[derive(Debug, Clone)]
pub struct CartItemInput {
    pub menu_item_id: i64,
    pub email: String,
    pub name: String,
    pub image: String,
    pub price: f64,
}

pub async fn list_by_email(
    conn: &impl ConnectionTrait,
    email: &str,
) -> Result<Vec<CartItem>, AppError> {
    Ok(cart_items::Entity::find()
        .filter(cart_items::Column::Email.eq(email))
        .order_by_asc(cart_items::Column::Id)
        .all(conn)
        .await?)
}

pub async fn add_item(
    conn: &impl ConnectionTrait,
    input: CartItemInput,
) -> Result<CartItem, AppError> {
    let item_active = cart_items::ActiveModel {
        id: NotSet,
        menu_item_id: Set(input.menu_item_id),
        email: Set(input.email),
        name: Set(input.name),
        image: Set(input.image),
        price: Set(input.price),
        created_at: Set(time::OffsetDateTime::now_utc()),
    };

    Ok(item_active.insert(conn).await?)
}

pub async fn remove_item(conn: &impl ConnectionTrait, id: i64) -> Result<u64, AppError> {
    let result = cart_items::Entity::delete_many()
        .filter(cart_items::Column::Id.eq(id))
        .exec(conn)
        .await?;
    Ok(result.rows_affected)
}
