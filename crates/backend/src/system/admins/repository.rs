use chrono::Utc;
use contracts::system::auth::AdminInfo;
use sea_orm::entity::prelude::*;
use sea_orm::{DatabaseConnection, PaginatorTrait, QueryFilter, Set};

use crate::shared::data::gateway::TableResult;
use crate::shared::data::schema::ADMINS;
use crate::shared::error::AppResult;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "admins")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub email: String,
    pub password_hash: String,
    pub full_name: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub last_login_at: Option<chrono::DateTime<chrono::Utc>>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for AdminInfo {
    fn from(m: Model) -> Self {
        AdminInfo {
            id: m.id,
            email: m.email,
            full_name: m.full_name,
        }
    }
}

/// Emails are stored and compared trimmed and lowercased
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

pub async fn count(db: &DatabaseConnection) -> AppResult<u64> {
    Entity::find().count(db).await.for_table(ADMINS)
}

pub async fn get_by_id(db: &DatabaseConnection, id: i64) -> AppResult<Option<Model>> {
    Entity::find_by_id(id).one(db).await.for_table(ADMINS)
}

pub async fn get_by_email(db: &DatabaseConnection, email: &str) -> AppResult<Option<Model>> {
    Entity::find()
        .filter(Column::Email.eq(normalize_email(email)))
        .one(db)
        .await
        .for_table(ADMINS)
}

pub async fn insert(
    db: &DatabaseConnection,
    email: &str,
    password_hash: String,
    full_name: Option<String>,
) -> AppResult<Model> {
    let active = ActiveModel {
        email: Set(normalize_email(email)),
        password_hash: Set(password_hash),
        full_name: Set(full_name),
        created_at: Set(Utc::now()),
        last_login_at: Set(None),
        ..Default::default()
    };
    active.insert(db).await.for_table(ADMINS)
}

pub async fn touch_last_login(db: &DatabaseConnection, model: Model) -> AppResult<Model> {
    let mut active: ActiveModel = model.into();
    active.last_login_at = Set(Some(Utc::now()));
    active.update(db).await.for_table(ADMINS)
}

pub async fn set_password_hash(db: &DatabaseConnection, model: Model, password_hash: String) -> AppResult<()> {
    let mut active: ActiveModel = model.into();
    active.password_hash = Set(password_hash);
    active.update(db).await.for_table(ADMINS)?;
    Ok(())
}
