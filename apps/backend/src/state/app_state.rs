use std::sync::Arc;

use sea_orm::DatabaseConnection;

use super::security_config::SecurityConfig;
use crate::infra::stripe::PaymentProvider;

/// Application state containing shared resources.
///
/// The database and payment provider are both optional so the app can come
/// up degraded: routes that need a missing collaborator answer 503 instead
/// of the process refusing to start.
///
/// The connection sits behind `Arc` because `DatabaseConnection` is not
/// `Clone` when sea-orm's `mock` feature is enabled (as it is for tests).
#[derive(Debug, Clone)]
pub struct AppState {
    db: Option<Arc<DatabaseConnection>>,
    security: SecurityConfig,
    payments: Option<PaymentProvider>,
}

impl AppState {
    pub fn new(db: DatabaseConnection, security: SecurityConfig) -> Self {
        Self {
            db: Some(Arc::new(db)),
            security,
            payments: None,
        }
    }

    /// State without a database connection. Used by tests and by startup
    /// paths that must answer health checks before the DB is reachable.
    pub fn without_db(security: SecurityConfig) -> Self {
        Self {
            db: None,
            security,
            payments: None,
        }
    }

    pub fn with_payments(mut self, payments: PaymentProvider) -> Self {
        self.payments = Some(payments);
        self
    }

    pub fn db(&self) -> Option<&DatabaseConnection> {
        self.db.as_deref()
    }

    pub fn security(&self) -> &SecurityConfig {
        &self.security
    }

    pub fn payments(&self) -> Option<&PaymentProvider> {
        self.payments.as_ref()
    }
}
