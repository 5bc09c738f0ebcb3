use chrono::Utc;
use contracts::domain::a003_pricing_item::aggregate::{PricingItem, PricingUpdateDto};
use sea_orm::entity::prelude::*;
use sea_orm::{Condition, DatabaseConnection, QueryFilter, QueryOrder, Set};

use crate::shared::data::gateway::TableResult;
use crate::shared::data::schema::PRICING;
use crate::shared::error::{AppError, AppResult};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "pricing")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub key: String,
    pub title_en: String,
    pub title_ar: String,
    pub price_en: String,
    pub price_ar: String,
    pub updated_at: Option<chrono::DateTime<chrono::Utc>>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for PricingItem {
    fn from(m: Model) -> Self {
        PricingItem {
            id: m.id,
            key: m.key,
            title_en: m.title_en,
            title_ar: m.title_ar,
            price_en: m.price_en,
            price_ar: m.price_ar,
            updated_at: m.updated_at,
        }
    }
}

/// Rows in id order. An empty key list selects every row; otherwise the
/// matching keyed rows plus every unkeyed row, which cards match by title.
pub async fn list(db: &DatabaseConnection, keys: &[String]) -> AppResult<Vec<PricingItem>> {
    let mut select = Entity::find().order_by_asc(Column::Id);
    if !keys.is_empty() {
        select = select.filter(
            Condition::any()
                .add(Column::Key.is_in(keys.iter().cloned()))
                .add(Column::Key.eq("")),
        );
    }
    let rows = select.all(db).await.for_table(PRICING)?;
    Ok(rows.into_iter().map(Into::into).collect())
}

pub async fn update(db: &DatabaseConnection, id: i64, dto: &PricingUpdateDto) -> AppResult<PricingItem> {
    let model = Entity::find_by_id(id)
        .one(db)
        .await
        .for_table(PRICING)?
        .ok_or_else(|| AppError::NotFound(format!("Pricing row {}", id)))?;

    let mut active: ActiveModel = model.into();
    active.title_en = Set(dto.title_en.trim().to_string());
    active.title_ar = Set(dto.title_ar.trim().to_string());
    active.price_en = Set(dto.price_en.trim().to_string());
    active.price_ar = Set(dto.price_ar.trim().to_string());
    active.updated_at = Set(Some(Utc::now()));
    let model = active.update(db).await.for_table(PRICING)?;
    Ok(model.into())
}
