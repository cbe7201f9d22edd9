//! Database connection and session management

use std::str::FromStr;

use sqlx::{
    Sqlite, SqlitePool, Transaction,
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
};

use crate::config::DatabaseConfig;

/// A unit of work against the database.
///
/// Dropping a session without calling [`Transaction::commit`] rolls it back,
/// so the connection is released on every exit path.
pub type Session = Transaction<'static, Sqlite>;

/// Create a new database connection pool, creating the database file if needed
pub async fn create_pool(config: &DatabaseConfig) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(&config.url)?.create_if_missing(true);

    SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .connect_with(options)
        .await
}

/// Ensure the contests table exists. Safe to call on every startup.
pub async fn init_schema(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS contests (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            class_level INTEGER NOT NULL,
            year INTEGER NOT NULL,
            pre_number INTEGER NOT NULL,
            contest_url TEXT NOT NULL,
            solution_url TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}

/// Begin a new session on a pooled connection
pub async fn open_session(pool: &SqlitePool) -> Result<Session, sqlx::Error> {
    pool.begin().await
}

/// Test database connection
pub async fn test_connection(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}
