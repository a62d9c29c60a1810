use sea_orm::{ConnectionTrait, EntityTrait, QueryOrder};

use crate::entities::reviews::{self, Model as Review};
use crate::error::AppError;

pub async fn list_reviews(conn: &impl ConnectionTrait) -> Result<Vec<Review>, AppError> {
    Ok(reviews::Entity::find()
        .order_by_asc(reviews::Column::Id)
        .all(conn)
        .await?)
}
