use anyhow::Result;
use sqlx::{Pool, Sqlite, migrate::MigrateDatabase, sqlite::SqlitePoolOptions};
use std::time::Duration;

pub mod report_store;
pub mod user_store;

pub use report_store::ReportStore;
pub use user_store::UserStore;

pub type DbPool = Pool<Sqlite>;

/// Initialize the database connection pool
pub async fn init_db_pool(database_url: &str, max_connections: u32) -> Result<DbPool> {
    // Create the database if it doesn't exist
    if !Sqlite::database_exists(database_url).await.unwrap_or(false) {
        tracing::info!("Creating database {}", database_url);
        Sqlite::create_database(database_url).await?;
    }

    // Create connection pool
    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections)
        .acquire_timeout(Duration::from_secs(3))
        .connect(database_url)
        .await?;

    // Run migrations
    setup_database(&pool).await?;

    Ok(pool)
}

/// Set up the database schema
async fn setup_database(pool: &DbPool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS reports (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            department TEXT NOT NULL,
            date TEXT NOT NULL,
            employee_count INTEGER NOT NULL DEFAULT 0,
            maternity_leave INTEGER NOT NULL DEFAULT 0,
            other_leave INTEGER NOT NULL DEFAULT 0,
            actual_worked INTEGER NOT NULL DEFAULT 0,
            direct_labor INTEGER NOT NULL DEFAULT 0,
            indirect_labor INTEGER NOT NULL DEFAULT 0,
            loaned_out INTEGER NOT NULL DEFAULT 0,
            overtime_workers INTEGER NOT NULL DEFAULT 0,
            phone_count INTEGER NOT NULL DEFAULT 0
        );
        "#,
    )
    .execute(pool)
    .await?;

    // The natural key; the upsert's ON CONFLICT clause targets this index
    sqlx::query(
        r#"
        CREATE UNIQUE INDEX IF NOT EXISTS idx_reports_department_date
            ON reports (department, date);
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS users (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            username TEXT NOT NULL UNIQUE,
            password_hash TEXT NOT NULL
        );
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}
