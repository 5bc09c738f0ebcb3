use chrono::Utc;
use contracts::domain::a002_gallery_image::aggregate::GalleryImage;
use contracts::shared::listing::Listing;
use sea_orm::entity::prelude::*;
use sea_orm::{DatabaseConnection, QueryOrder, Set};

use crate::shared::data::gateway::{fetch_listing, TableResult};
use crate::shared::data::schema::GALLERY_IMAGES;
use crate::shared::error::{AppError, AppResult};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "gallery_images")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub url: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for GalleryImage {
    fn from(m: Model) -> Self {
        GalleryImage {
            id: m.id,
            url: m.url,
            created_at: m.created_at,
        }
    }
}

/// Newest first
pub async fn list(db: &DatabaseConnection) -> AppResult<Listing<GalleryImage>> {
    let select = Entity::find()
        .order_by_desc(Column::CreatedAt)
        .order_by_desc(Column::Id);
    let listing = fetch_listing(db, GALLERY_IMAGES, select).await?;
    Ok(listing.map(Into::into))
}

pub async fn insert(db: &DatabaseConnection, url: &str) -> AppResult<GalleryImage> {
    let active = ActiveModel {
        url: Set(url.to_string()),
        created_at: Set(Utc::now()),
        ..Default::default()
    };
    let model = active.insert(db).await.for_table(GALLERY_IMAGES)?;
    Ok(model.into())
}

async fn find(db: &DatabaseConnection, id: i64) -> AppResult<Model> {
    Entity::find_by_id(id)
        .one(db)
        .await
        .for_table(GALLERY_IMAGES)?
        .ok_or_else(|| AppError::NotFound(format!("Gallery image {}", id)))
}

pub async fn update(db: &DatabaseConnection, id: i64, url: &str) -> AppResult<GalleryImage> {
    let mut active: ActiveModel = find(db, id).await?.into();
    active.url = Set(url.to_string());
    let model = active.update(db).await.for_table(GALLERY_IMAGES)?;
    Ok(model.into())
}

pub async fn delete(db: &DatabaseConnection, id: i64) -> AppResult<()> {
    let result = Entity::delete_by_id(id)
        .exec(db)
        .await
        .for_table(GALLERY_IMAGES)?;
    if result.rows_affected == 0 {
        return Err(AppError::NotFound(format!("Gallery image {}", id)));
    }
    Ok(())
}
