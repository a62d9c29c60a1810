use sea_orm::DatabaseConnection;

use crate::config::db::{DbOwner, DbProfile};
use crate::error::AppError;
use crate::infra::db::connect_db;
use crate::infra::stripe::PaymentProvider;
use crate::state::app_state::AppState;
use crate::state::security_config::SecurityConfig;

/// Builder for creating AppState instances (used in both tests and main).
pub struct StateBuilder {
    security_config: SecurityConfig,
    db_profile: Option<DbProfile>,
    existing_db: Option<DatabaseConnection>,
    payments: Option<PaymentProvider>,
}

impl StateBuilder {
    pub fn new() -> Self {
        Self {
            security_config: SecurityConfig::default(),
            db_profile: None,
            existing_db: None,
            payments: None,
        }
    }

    /// Connect to the database for the given profile during `build()`.
    pub fn with_db(mut self, profile: DbProfile) -> Self {
        self.db_profile = Some(profile);
        self
    }

    /// Use an already-established connection (tests pass mock connections here).
    pub fn with_existing_db(mut self, conn: DatabaseConnection) -> Self {
        self.existing_db = Some(conn);
        self
    }

    pub fn with_security(mut self, security_config: SecurityConfig) -> Self {
        self.security_config = security_config;
        self
    }

    pub fn with_payments(mut self, payments: PaymentProvider) -> Self {
        self.payments = Some(payments);
        self
    }

    pub async fn build(self) -> Result<AppState, AppError> {
        let state = if let Some(conn) = self.existing_db {
            AppState::new(conn, self.security_config)
        } else if let Some(profile) = self.db_profile {
            let conn = connect_db(profile, DbOwner::App).await?;
            AppState::new(conn, self.security_config)
        } else {
            AppState::without_db(self.security_config)
        };

        Ok(match self.payments {
            Some(provider) => state.with_payments(provider),
            None => state,
        })
    }
}

impl Default for StateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub fn build_state() -> StateBuilder {
    StateBuilder::new()
}
