use std::sync::Arc;

use tracing::info;

use crate::config::Config;
use crate::infra::db::{PostgresProvider, SqliteProvider};
use crate::infra::repositories::{
    postgres_booking_repo::PostgresBookingRepo, postgres_event_repo::PostgresEventRepo,
    sqlite_booking_repo::SqliteBookingRepo, sqlite_event_repo::SqliteEventRepo,
};
use crate::state::AppState;

/// Assembles the application state. The backend family is picked from the
/// URL scheme; nothing dials here, the providers connect on first use.
pub fn bootstrap_state(config: &Config) -> AppState {
    let is_postgres = config
        .database_url
        .as_deref()
        .is_some_and(|url| url.starts_with("postgres://") || url.starts_with("postgresql://"));

    if is_postgres {
        info!("Using PostgreSQL backend (connection deferred to first use)");

        let provider = Arc::new(PostgresProvider::new(config.database_url.clone()));

        AppState {
            config: config.clone(),
            event_repo: Arc::new(PostgresEventRepo::new(provider.clone())),
            booking_repo: Arc::new(PostgresBookingRepo::new(provider)),
        }
    } else {
        info!("Using SQLite backend (connection deferred to first use)");

        let provider = Arc::new(SqliteProvider::new(config.database_url.clone()));

        AppState {
            config: config.clone(),
            event_repo: Arc::new(SqliteEventRepo::new(provider.clone())),
            booking_repo: Arc::new(SqliteBookingRepo::new(provider)),
        }
    }
}
