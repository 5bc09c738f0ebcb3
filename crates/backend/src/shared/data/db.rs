use anyhow::Context;
use once_cell::sync::OnceCell;
use sea_orm::{Database, DatabaseConnection};

use super::schema;
use crate::shared::config::{get_database_path, Config};
use crate::shared::error::{AppError, AppResult};

static DB_CONN: OnceCell<DatabaseConnection> = OnceCell::new();

pub async fn initialize_database(config: &Config) -> anyhow::Result<()> {
    let db_file = get_database_path(config);
    if let Some(parent) = db_file.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Cannot create database directory {}", parent.display()))?;
    }

    // Normalize path separators and ensure proper URL form on Windows
    let normalized = db_file.to_string_lossy().replace('\\', "/");
    let needs_leading_slash = !normalized.starts_with('/') && normalized.contains(':');
    let prefix = if needs_leading_slash { "/" } else { "" };
    let db_url = format!("sqlite://{}{}?mode=rwc", prefix, normalized);

    tracing::info!("Opening database at {}", db_file.display());
    let conn = Database::connect(&db_url)
        .await
        .with_context(|| format!("Cannot open database {}", db_url))?;

    schema::bootstrap(&conn, config.database.auto_provision).await?;

    DB_CONN
        .set(conn)
        .map_err(|_| anyhow::anyhow!("Database connection is already initialized"))?;
    Ok(())
}

pub fn get_connection() -> AppResult<&'static DatabaseConnection> {
    DB_CONN.get().ok_or_else(|| {
        AppError::Internal(anyhow::anyhow!("Database connection has not been initialized"))
    })
}

/// Fresh in-memory database for tests, bootstrapped like production
#[cfg(test)]
pub async fn connect_in_memory(auto_provision: bool) -> DatabaseConnection {
    use sea_orm::ConnectOptions;

    let mut options = ConnectOptions::new("sqlite::memory:".to_string());
    options
        .max_connections(1)
        .min_connections(1)
        .sqlx_logging(false);
    let conn = Database::connect(options)
        .await
        .expect("in-memory sqlite should open");
    schema::bootstrap(&conn, auto_provision)
        .await
        .expect("bootstrap should succeed");
    conn
}
