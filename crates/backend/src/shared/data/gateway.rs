//! Shared plumbing of the per-collection repositories.

use contracts::shared::listing::Listing;
use sea_orm::{DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, Select};

use crate::shared::error::{AppError, AppResult};

/// Maps a database error of `table` to the API taxonomy. A missing table
/// becomes `NotProvisioned`; everything else stays a database error.
pub fn classify(table: &str, err: DbErr) -> AppError {
    if err.to_string().contains("no such table") {
        tracing::warn!("Collection {} is not provisioned", table);
        AppError::NotProvisioned {
            table: table.to_string(),
        }
    } else {
        AppError::Database(err)
    }
}

pub trait TableResult<T> {
    fn for_table(self, table: &str) -> AppResult<T>;
}

impl<T> TableResult<T> for Result<T, DbErr> {
    fn for_table(self, table: &str) -> AppResult<T> {
        self.map_err(|err| classify(table, err))
    }
}

/// Runs a filtered, ordered select together with its row count
pub async fn fetch_listing<E>(
    db: &DatabaseConnection,
    table: &str,
    select: Select<E>,
) -> AppResult<Listing<E::Model>>
where
    E: EntityTrait,
    E::Model: Send + Sync,
{
    let total = select.clone().count(db).await.for_table(table)?;
    let items = select.all(db).await.for_table(table)?;
    Ok(Listing::new(items, total))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data::db::connect_in_memory;
    use crate::shared::data::schema::ORDERS;
    use sea_orm::{ConnectionTrait, DatabaseBackend, Statement};

    #[tokio::test]
    async fn missing_table_is_not_provisioned() {
        let db = connect_in_memory(false).await;
        let err = db
            .query_all(Statement::from_string(
                DatabaseBackend::Sqlite,
                "SELECT * FROM orders".to_string(),
            ))
            .await
            .for_table(ORDERS)
            .unwrap_err();

        assert!(matches!(err, AppError::NotProvisioned { ref table } if table == "orders"));
    }

    #[tokio::test]
    async fn other_errors_stay_database_errors() {
        let db = connect_in_memory(true).await;
        let err = db
            .query_all(Statement::from_string(
                DatabaseBackend::Sqlite,
                "SELECT missing_column FROM orders".to_string(),
            ))
            .await
            .for_table(ORDERS)
            .unwrap_err();

        assert!(matches!(err, AppError::Database(_)));
    }
}
