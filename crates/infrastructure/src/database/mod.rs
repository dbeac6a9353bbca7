use sqlx::migrate::Migrator;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;
use std::time::Duration;

static MIGRATOR: Migrator = sqlx::migrate!("../../migrations");

pub const IN_MEMORY_DATABASE: &str = "sqlite::memory:";

/// Opens the pool and brings the schema up to date.
///
/// `database_path` is either a file path or `sqlite::memory:`. An in-memory
/// database only exists inside its one connection, so that connection is
/// pinned for the lifetime of the pool.
pub async fn create_pool(
    database_path: &str,
    max_connections: u32,
) -> Result<SqlitePool, sqlx::Error> {
    let pool = if database_path == IN_MEMORY_DATABASE {
        let options = SqliteConnectOptions::from_str(IN_MEMORY_DATABASE)?.foreign_keys(true);
        SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await?
    } else {
        let options = SqliteConnectOptions::from_str(&format!("sqlite://{}", database_path))?
            .create_if_missing(true)
            .foreign_keys(true)
            .journal_mode(SqliteJournalMode::Wal)
            .busy_timeout(Duration::from_secs(5));
        SqlitePoolOptions::new()
            .max_connections(max_connections.max(1))
            .connect_with(options)
            .await?
    };

    MIGRATOR.run(&pool).await?;

    Ok(pool)
}
