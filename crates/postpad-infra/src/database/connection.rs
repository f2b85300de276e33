//! Database connection management.

use std::path::Path;
use std::time::Duration;

use sea_orm::{ConnectOptions, Database, DbConn, DbErr};
use sea_orm_migration::MigratorTrait;

use super::migration::Migrator;

/// Open the SQLite database at the given path, creating the file lazily
/// on first access, and bring the schema up to date.
pub async fn connect(db_file: &Path) -> Result<DbConn, DbErr> {
    let url = format!("sqlite://{}?mode=rwc", db_file.display());
    connect_url(&url).await
}

/// Open an in-memory database. Contents are lost when the connection is
/// dropped; used by tests.
pub async fn connect_in_memory() -> Result<DbConn, DbErr> {
    connect_url("sqlite::memory:").await
}

async fn connect_url(url: &str) -> Result<DbConn, DbErr> {
    // Single connection: the store assumes one local writer and SQLite
    // serializes access at the file level anyway
    let opts = ConnectOptions::new(url)
        .max_connections(1)
        .connect_timeout(Duration::from_secs(10))
        .sqlx_logging(true)
        .to_owned();

    let conn = Database::connect(opts).await?;
    tracing::info!(%url, "Database connected");

    Migrator::up(&conn, None).await?;

    Ok(conn)
}
