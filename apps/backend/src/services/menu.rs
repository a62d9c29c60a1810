use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, NotSet, QueryFilter, QueryOrder,
    Set,
};
use tracing::info;

use crate::entities::menu_items::{self, Model as MenuItem};
use crate::error::AppError;

/// Field set shared by create and full update. Every field is required;
/// partial edits are not part of the dashboard contract.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct MenuItemInput {
    pub name: String,
    pub recipe: String,
    pub image: String,
    pub category: String,
    pub price: f64,
}

pub async fn list_items(conn: &impl ConnectionTrait) -> Result<Vec<MenuItem>, AppError> {
    Ok(menu_items::Entity::find()
        .order_by_asc(menu_items::Column::Id)
        .all(conn)
        .await?)
}

pub async fn get_item(
    conn: &impl ConnectionTrait,
    id: i64,
) -> Result<Option<MenuItem>, AppError> {
    Ok(menu_items::Entity::find_by_id(id).one(conn).await?)
}

pub async fn create_item(
    conn: &impl ConnectionTrait,
    input: MenuItemInput,
) -> Result<MenuItem, AppError> {
    let item_active = menu_items::ActiveModel {
        id: NotSet,
        name: Set(input.name),
        recipe: Set(input.recipe),
        image: Set(input.image),
        category: Set(input.category),
        price: Set(input.price),
        created_at: Set(time::OffsetDateTime::now_utc()),
    };

    let item = item_active.insert(conn).await?;

    info!(menu_item_id = item.id, category = %item.category, "menu item created");
    Ok(item)
}

/// Replace every editable column on the item; returns rows updated (0 or 1).
pub async fn update_item(
    conn: &impl ConnectionTrait,
    id: i64,
    input: MenuItemInput,
) -> Result<u64, AppError> {
    let result = menu_items::Entity::update_many()
        .col_expr(menu_items::Column::Name, Expr::val(input.name).into())
        .col_expr(menu_items::Column::Recipe, Expr::val(input.recipe).into())
        .col_expr(menu_items::Column::Image, Expr::val(input.image).into())
        .col_expr(
            menu_items::Column::Category,
            Expr::val(input.category).into(),
        )
        .col_expr(menu_items::Column::Price, Expr::val(input.price).into())
        .filter(menu_items::Column::Id.eq(id))
        .exec(conn)
        .await?;
    Ok(result.rows_affected)
}

pub async fn delete_item(conn: &impl ConnectionTrait, id: i64) -> Result<u64, AppError> {
    let result = menu_items::Entity::delete_many()
        .filter(menu_items::Column::Id.eq(id))
        .exec(conn)
        .await?;
    Ok(result.rows_affected)
}
