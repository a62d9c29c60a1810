use sea_orm::{Database, DatabaseConnection};

use crate::config::db::{db_url, DbOwner, DbProfile};
use crate::error::AppError;
use crate::state::app_state::AppState;

/// Unified database connector that supports both profiles and owners.
/// This function does NOT run any migrations; schema lifecycle belongs to
/// the migration CLI.
pub async fn connect_db(
    profile: DbProfile,
    owner: DbOwner,
) -> Result<DatabaseConnection, AppError> {
    let database_url = db_url(profile, owner)?;

    let conn = Database::connect(&database_url).await?;
    Ok(conn)
}

/// Centralized helper to access the database connection from AppState.
///
/// This is the canonical way to reach the database from application code.
/// Returns a borrowed connection, or `AppError::DbUnavailable` when the
/// state was built without one.
pub fn require_db(state: &AppState) -> Result<&DatabaseConnection, AppError> {
    state
        .db()
        .ok_or_else(|| AppError::db_unavailable("Database is not configured".to_string()))
}
