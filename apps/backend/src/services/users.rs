use sea_orm::sea_query::{Alias, Expr, OnConflict};
use sea_orm::{ColumnTrait, ConnectionTrait, EntityTrait, NotSet, QueryFilter, QueryOrder, Set};
use tracing::info;

use crate::entities::users::{self, Model as User, UserRole};
use crate::error::AppError;
use crate::logging::pii::Redacted;

/// Ensures a user row exists for the email, creating one if necessary.
/// Idempotent: re-posting the same email returns the existing row.
/// Returns the row plus whether this call inserted it.
pub async fn ensure_user(
    conn: &impl ConnectionTrait,
    email: &str,
    name: Option<String>,
) -> Result<(User, bool), AppError> {
    let now = time::OffsetDateTime::now_utc();

    let user_active = users::ActiveModel {
        id: NotSet,
        email: Set(email.to_string()),
        name: Set(name),
        role: Set(UserRole::Standard),
        created_at: Set(now),
        updated_at: Set(now),
    };

    let rows = users::Entity::insert(user_active)
        .on_conflict(
            OnConflict::column(users::Column::Email)
                .do_nothing()
                .to_owned(),
        )
        .exec_without_returning(conn)
        .await?;

    let inserted = rows == 1;
    let user = users::Entity::find()
        .filter(users::Column::Email.eq(email))
        .one(conn)
        .await?
        .ok_or_else(|| AppError::db("users.email not found after ensure".to_string()))?;

    if inserted {
        info!(email = %Redacted(email), user_id = user.id, "user created");
    }

    Ok((user, inserted))
}

pub async fn list_users(conn: &impl ConnectionTrait) -> Result<Vec<User>, AppError> {
    Ok(users::Entity::find()
        .order_by_asc(users::Column::Id)
        .all(conn)
        .await?)
}

pub async fn find_by_email(
    conn: &impl ConnectionTrait,
    email: &str,
) -> Result<Option<User>, AppError> {
    Ok(users::Entity::find()
        .filter(users::Column::Email.eq(email))
        .one(conn)
        .await?)
}

/// True when the email maps to a user row carrying the admin role.
/// A missing row is simply `false`; this powers the status probe, not a gate.
pub async fn is_admin(conn: &impl ConnectionTrait, email: &str) -> Result<bool, AppError> {
    let user = find_by_email(conn, email).await?;
    Ok(matches!(user, Some(u) if u.role == UserRole::Admin))
}

/// Delete a user by id; returns the number of rows removed (0 or 1).
pub async fn delete_user(conn: &impl ConnectionTrait, id: i64) -> Result<u64, AppError> {
    let result = users::Entity::delete_many()
        .filter(users::Column::Id.eq(id))
        .exec(conn)
        .await?;
    Ok(result.rows_affected)
}

/// Set the admin role on a user by id; returns the number of rows updated.
pub async fn promote_to_admin(conn: &impl ConnectionTrait, id: i64) -> Result<u64, AppError> {
    let now = time::OffsetDateTime::now_utc();
    let result = users::Entity::update_many()
        .col_expr(
            users::Column::Role,
            Expr::val(UserRole::Admin).cast_as(Alias::new("user_role")),
        )
        .col_expr(users::Column::UpdatedAt, Expr::val(now).into())
        .filter(users::Column::Id.eq(id))
        .exec(conn)
        .await?;

    if result.rows_affected > 0 {
        info!(user_id = id, "user promoted to admin");
    }

    Ok(result.rows_affected)
}
