use std::str::FromStr;
use std::time::Duration;

use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
use sqlx::{ConnectOptions, PgPool, SqlitePool};
use tokio::sync::OnceCell;
use tracing::info;
use tracing::log::LevelFilter;

use crate::error::AppError;

/// Lazily-initialized, memoized SQLite pool. The first `get()` dials and
/// migrates; concurrent first callers await the same in-flight attempt and
/// later callers get the cached handle.
pub struct SqliteProvider {
    database_url: Option<String>,
    pool: OnceCell<SqlitePool>,
}

impl SqliteProvider {
    pub fn new(database_url: Option<String>) -> Self {
        Self {
            database_url,
            pool: OnceCell::new(),
        }
    }

    pub async fn get(&self) -> Result<&SqlitePool, AppError> {
        self.pool.get_or_try_init(|| self.dial()).await
    }

    async fn dial(&self) -> Result<SqlitePool, AppError> {
        let url = self.database_url.as_deref().ok_or_else(|| {
            AppError::Config("DATABASE_URL must be set before any persistence operation".to_string())
        })?;

        info!("Initializing SQLite connection with WAL Mode...");

        let opts = SqliteConnectOptions::from_str(url)
            .map_err(|_| AppError::Config(format!("invalid SQLite connection string '{}'", url)))?
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .busy_timeout(Duration::from_secs(5))
            .log_statements(LevelFilter::Debug)
            .log_slow_statements(LevelFilter::Warn, Duration::from_millis(500));

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(opts)
            .await
            .map_err(AppError::Database)?;

        sqlx::migrate!("./migrations/sqlite")
            .run(&pool)
            .await
            .map_err(|e| AppError::Database(e.into()))?;

        Ok(pool)
    }
}

/// Postgres counterpart of [`SqliteProvider`].
pub struct PostgresProvider {
    database_url: Option<String>,
    pool: OnceCell<PgPool>,
}

impl PostgresProvider {
    pub fn new(database_url: Option<String>) -> Self {
        Self {
            database_url,
            pool: OnceCell::new(),
        }
    }

    pub async fn get(&self) -> Result<&PgPool, AppError> {
        self.pool.get_or_try_init(|| self.dial()).await
    }

    async fn dial(&self) -> Result<PgPool, AppError> {
        let url = self.database_url.as_deref().ok_or_else(|| {
            AppError::Config("DATABASE_URL must be set before any persistence operation".to_string())
        })?;

        info!("Initializing PostgreSQL connection...");

        let opts: PgConnectOptions = url
            .parse()
            .map_err(|_| AppError::Config(format!("invalid Postgres connection string '{}'", url)))?;
        let opts = opts
            .log_statements(LevelFilter::Debug)
            .log_slow_statements(LevelFilter::Warn, Duration::from_millis(500));

        let pool = PgPoolOptions::new()
            .max_connections(10)
            .connect_with(opts)
            .await
            .map_err(AppError::Database)?;

        sqlx::migrate!("./migrations/postgres")
            .run(&pool)
            .await
            .map_err(|e| AppError::Database(e.into()))?;

        Ok(pool)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[tokio::test]
    async fn test_missing_database_url_fails_with_config_error() {
        let provider = SqliteProvider::new(None);

        assert!(matches!(provider.get().await, Err(AppError::Config(_))));
        // nothing was cached, a later call fails the same way
        assert!(matches!(provider.get().await, Err(AppError::Config(_))));
    }

    #[tokio::test]
    async fn test_concurrent_first_calls_share_one_pool() {
        let db_filename = format!("test_provider_{}.db", Uuid::new_v4());
        let provider = SqliteProvider::new(Some(format!("sqlite://{}?mode=rwc", db_filename)));

        let (a, b, c) = tokio::join!(provider.get(), provider.get(), provider.get());
        let a = a.expect("first caller should connect");
        let b = b.expect("second caller should connect");
        let c = c.expect("third caller should connect");

        assert!(std::ptr::eq(a, b));
        assert!(std::ptr::eq(b, c));

        // later callers reuse the cached handle without re-dialing
        let d = provider.get().await.unwrap();
        assert!(std::ptr::eq(a, d));

        a.close().await;
        let _ = std::fs::remove_file(&db_filename);
        let _ = std::fs::remove_file(format!("{}-wal", db_filename));
        let _ = std::fs::remove_file(format!("{}-shm", db_filename));
    }
}
