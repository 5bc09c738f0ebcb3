use anyhow::Result;
use sea_orm::DatabaseConnection;

use crate::shared::config::AdminConfig;
use crate::system::admins::{repository, service};

/// Ensure an admin exists (create from config if the table is empty)
pub async fn ensure_admin_exists(db: &DatabaseConnection, config: &AdminConfig) -> Result<()> {
    let count = repository::count(db).await?;
    if count > 0 {
        return Ok(());
    }

    tracing::info!("No admins found. Creating the configured admin account...");
    let full_name = config.full_name.clone().filter(|n| !n.trim().is_empty());
    let admin = service::create(db, &config.email, &config.password, full_name).await?;

    tracing::warn!("═══════════════════════════════════════════════");
    tracing::warn!("  Default admin created!");
    tracing::warn!("  Email: {}", admin.email);
    tracing::warn!("  Password: the [admin] password from config.toml");
    tracing::warn!("  Admin ID: {}", admin.id);
    tracing::warn!("  ⚠️  PLEASE CHANGE THE PASSWORD IMMEDIATELY!");
    tracing::warn!("═══════════════════════════════════════════════");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data::db::connect_in_memory;

    fn config() -> AdminConfig {
        AdminConfig {
            email: "admin@xtremeplay.sa".into(),
            password: "ChangeMe123!".into(),
            full_name: Some("Park Manager".into()),
        }
    }

    #[tokio::test]
    async fn seeds_only_into_an_empty_table() {
        let db = connect_in_memory(false).await;
        ensure_admin_exists(&db, &config()).await.unwrap();
        ensure_admin_exists(&db, &config()).await.unwrap();
        assert_eq!(repository::count(&db).await.unwrap(), 1);

        let admin = service::verify_credentials(&db, "admin@xtremeplay.sa", "ChangeMe123!")
            .await
            .unwrap();
        assert_eq!(admin.full_name.as_deref(), Some("Park Manager"));
    }
}
