use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "payments")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub email: String,
    pub price: f64,
    #[sea_orm(column_name = "transaction_id")]
    pub transaction_id: String,
    pub status: String,
    /// Cart rows consumed by this payment, kept as a JSON id array
    #[sea_orm(column_name = "cart_item_ids")]
    pub cart_item_ids: Json,
    #[sea_orm(column_name = "menu_item_ids")]
    pub menu_item_ids: Json,
    #[sea_orm(column_name = "created_at")]
    pub created_at: OffsetDateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
