//! Database initialization: pragmas, schema and the reset-on-start policy.

use sqlx::sqlite::{SqliteConnection, SqlitePool, SqlitePoolOptions};
use std::path::Path;
use tracing::info;

use super::seed::seed_sample_data;

/// Initialize the SQLite database with schema, pragmas and seed data.
///
/// With `reset_on_start` set, both tables are dropped and recreated and
/// the fixed sample rows are reinserted. Otherwise tables are created
/// only if absent and sample rows are inserted only into an empty store.
pub async fn init_db(db_path: &str, reset_on_start: bool) -> Result<SqlitePool, sqlx::Error> {
    if let Some(parent) = Path::new(db_path).parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).ok();
        }
    }

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .after_connect(|conn, _meta| Box::pin(async move { configure_pragmas_conn(conn).await }))
        .connect(&format!("sqlite:{}?mode=rwc", db_path))
        .await?;

    if reset_on_start {
        drop_tables(&pool).await?;
    }

    run_migrations(&pool).await?;

    if student_table_is_empty(&pool).await? {
        seed_sample_data(&pool).await?;
    }

    info!("Database initialized successfully at {}", db_path);
    Ok(pool)
}

/// Apply the embedded schema, statement by statement.
async fn run_migrations(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    info!("Running database migrations...");
    let schema_sql = include_str!("schema.sql");

    for statement in schema_sql.split(';') {
        let trimmed = statement.trim();
        if !trimmed.is_empty() {
            sqlx::query(trimmed).execute(pool).await?;
        }
    }

    info!("Migrations completed successfully");
    Ok(())
}

/// Drop both tables. Contact first, it references student.
async fn drop_tables(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    info!("Reset requested, dropping existing tables...");
    sqlx::query("DROP TABLE IF EXISTS student_contact")
        .execute(pool)
        .await?;
    sqlx::query("DROP TABLE IF EXISTS student")
        .execute(pool)
        .await?;
    Ok(())
}

async fn student_table_is_empty(pool: &SqlitePool) -> Result<bool, sqlx::Error> {
    let row: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM student")
        .fetch_one(pool)
        .await?;
    Ok(row.0 == 0)
}

/// Configure SQLite pragmas for optimal performance and reliability.
async fn configure_pragmas_conn(conn: &mut SqliteConnection) -> Result<(), sqlx::Error> {
    use sqlx::Row;

    sqlx::query("PRAGMA foreign_keys = ON")
        .execute(&mut *conn)
        .await?;

    // journal_mode returns the actual mode set; must use fetch to get result
    let row = sqlx::query("PRAGMA journal_mode = WAL")
        .fetch_one(&mut *conn)
        .await?;
    let journal_mode: String = row.get(0);
    info!("SQLite journal_mode set to: {}", journal_mode);

    sqlx::query("PRAGMA busy_timeout = 5000")
        .execute(&mut *conn)
        .await?;
    sqlx::query("PRAGMA synchronous = NORMAL")
        .execute(&mut *conn)
        .await?;

    Ok(())
}
