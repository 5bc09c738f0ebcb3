use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use sea_orm::{DatabaseConnection, QueryFilter, Set};

use crate::shared::data::gateway::TableResult;
use crate::shared::data::schema::PASSWORD_RESETS;
use crate::shared::error::AppResult;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "admin_password_resets")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub admin_id: i64,
    pub token_hash: String,
    pub expires_at: chrono::DateTime<chrono::Utc>,
    pub used_at: Option<chrono::DateTime<chrono::Utc>>,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

pub async fn insert(
    db: &DatabaseConnection,
    admin_id: i64,
    token_hash: String,
    expires_at: DateTime<Utc>,
) -> AppResult<Model> {
    let active = ActiveModel {
        admin_id: Set(admin_id),
        token_hash: Set(token_hash),
        expires_at: Set(expires_at),
        used_at: Set(None),
        created_at: Set(Utc::now()),
        ..Default::default()
    };
    active.insert(db).await.for_table(PASSWORD_RESETS)
}

/// Unused token with this hash, expired or not
pub async fn find_unused(db: &DatabaseConnection, token_hash: &str) -> AppResult<Option<Model>> {
    Entity::find()
        .filter(Column::TokenHash.eq(token_hash))
        .filter(Column::UsedAt.is_null())
        .one(db)
        .await
        .for_table(PASSWORD_RESETS)
}

pub async fn mark_used(db: &DatabaseConnection, model: Model) -> AppResult<()> {
    let mut active: ActiveModel = model.into();
    active.used_at = Set(Some(Utc::now()));
    active.update(db).await.for_table(PASSWORD_RESETS)?;
    Ok(())
}
