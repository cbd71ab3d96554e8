//! Database connection management.

use std::path::Path;

use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions};
use tracing::{debug, info};

use crate::config::DatabaseConfig;
use crate::error::DbResult;
use crate::schema;

/// Handle to the conference database.
///
/// Cheap to clone; all clones share the same pool. Construct one at process
/// start and pass it to the DAOs explicitly.
#[derive(Debug, Clone)]
pub struct ConferenceDb {
    pool: SqlitePool,
}

impl ConferenceDb {
    /// Open or create the conference database at the given path.
    ///
    /// This will:
    /// 1. Create the database file if it doesn't exist
    /// 2. Run any pending migrations
    /// 3. Validate the declared table descriptors against the live schema
    /// 4. Configure SQLite for desktop use (WAL mode, etc.)
    pub async fn open(path: impl AsRef<Path>) -> DbResult<Self> {
        Self::open_with(path, 5).await
    }

    /// Open the database described by a [`DatabaseConfig`].
    pub async fn open_from_config(config: &DatabaseConfig) -> DbResult<Self> {
        Self::open_with(config.conference_db(), config.max_connections).await
    }

    async fn open_with(path: impl AsRef<Path>, max_connections: u32) -> DbResult<Self> {
        let path = path.as_ref();

        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            if !parent.exists() {
                std::fs::create_dir_all(parent)?;
            }
        }

        info!("Opening conference database: {}", path.to_string_lossy());

        let options = SqliteConnectOptions::new()
            .filename(path)
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .pragma("cache_size", "-64000") // 64MB cache
            .pragma("synchronous", "NORMAL") // Safe with WAL
            .pragma("temp_store", "MEMORY")
            .pragma("foreign_keys", "ON");

        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections) // SQLite is single-writer, but readers can parallelize
            .connect_with(options)
            .await?;

        debug!("Database connection established");

        Self::run_migrations(&pool).await?;
        schema::verify_schema(&pool).await?;

        Ok(Self { pool })
    }

    /// Open an in-memory database (for testing).
    pub async fn open_in_memory() -> DbResult<Self> {
        let options = SqliteConnectOptions::new()
            .filename(":memory:")
            .journal_mode(SqliteJournalMode::Wal)
            .pragma("foreign_keys", "ON");

        let pool = SqlitePoolOptions::new()
            .max_connections(1) // In-memory must be single connection to share state
            .connect_with(options)
            .await?;

        Self::run_migrations(&pool).await?;
        schema::verify_schema(&pool).await?;

        Ok(Self { pool })
    }

    /// Run database migrations.
    async fn run_migrations(pool: &SqlitePool) -> DbResult<()> {
        debug!("Running database migrations");
        sqlx::migrate!("./migrations").run(pool).await?;
        info!("Database migrations complete");
        Ok(())
    }

    /// Get a reference to the connection pool.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Close the database connection.
    pub async fn close(&self) {
        self.pool.close().await;
    }

    /// Check if the database is healthy.
    pub async fn health_check(&self) -> DbResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    /// Get database statistics.
    pub async fn stats(&self) -> DbResult<DbStats> {
        let fields: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM field")
            .fetch_one(&self.pool)
            .await?;

        let conferences: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM conference")
            .fetch_one(&self.pool)
            .await?;

        let calls: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM conference_call")
            .fetch_one(&self.pool)
            .await?;

        Ok(DbStats {
            field_count: fields.0 as u64,
            conference_count: conferences.0 as u64,
            conference_call_count: calls.0 as u64,
        })
    }
}

/// Database statistics.
#[derive(Debug, Clone)]
pub struct DbStats {
    pub field_count: u64,
    pub conference_count: u64,
    pub conference_call_count: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_open_in_memory() {
        let db = ConferenceDb::open_in_memory().await.unwrap();
        db.health_check().await.unwrap();

        let stats = db.stats().await.unwrap();
        assert_eq!(stats.field_count, 0);
        assert_eq!(stats.conference_count, 0);
        assert_eq!(stats.conference_call_count, 0);
    }

    #[tokio::test]
    async fn test_open_from_config() {
        let dir = tempfile::tempdir().unwrap();
        let config = DatabaseConfig {
            path: dir.path().to_path_buf(),
            max_connections: 2,
        };

        let db = ConferenceDb::open_from_config(&config).await.unwrap();
        db.health_check().await.unwrap();
        db.close().await;

        assert!(config.conference_db().exists());
    }

    #[tokio::test]
    async fn test_open_file_backed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("conference.db");

        let db = ConferenceDb::open(&path).await.unwrap();
        db.health_check().await.unwrap();
        db.close().await;

        assert!(path.exists());
    }
}
