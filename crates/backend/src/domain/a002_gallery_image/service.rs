use contracts::domain::a002_gallery_image::aggregate::{GalleryImage, GalleryImageDto};
use contracts::shared::listing::Listing;
use sea_orm::DatabaseConnection;

use super::repository;
use crate::shared::error::{AppError, AppResult};

pub async fn list(db: &DatabaseConnection) -> AppResult<Listing<GalleryImage>> {
    repository::list(db).await
}

pub async fn create(db: &DatabaseConnection, dto: GalleryImageDto) -> AppResult<GalleryImage> {
    dto.validate().map_err(AppError::Validation)?;
    let image = repository::insert(db, dto.url.trim()).await?;
    tracing::info!("Gallery image {} added", image.id);
    Ok(image)
}

pub async fn update(db: &DatabaseConnection, id: i64, dto: GalleryImageDto) -> AppResult<GalleryImage> {
    dto.validate().map_err(AppError::Validation)?;
    repository::update(db, id, dto.url.trim()).await
}

pub async fn delete(db: &DatabaseConnection, id: i64) -> AppResult<()> {
    repository::delete(db, id).await?;
    tracing::info!("Gallery image {} deleted", id);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data::db::connect_in_memory;
    use contracts::domain::a002_gallery_image::aggregate::resolve_public_gallery;
    use contracts::shared::catalog::GALLERY_FALLBACK;

    fn dto(url: &str) -> GalleryImageDto {
        GalleryImageDto { url: url.into() }
    }

    #[tokio::test]
    async fn create_update_and_list() {
        let db = connect_in_memory(true).await;
        let first = create(&db, dto("https://cdn.example/1.jpg")).await.unwrap();
        create(&db, dto("https://cdn.example/2.jpg")).await.unwrap();

        let updated = update(&db, first.id, dto("https://cdn.example/1b.jpg")).await.unwrap();
        assert_eq!(updated.url, "https://cdn.example/1b.jpg");

        let listing = list(&db).await.unwrap();
        assert_eq!(listing.total, 2);
        assert_eq!(listing.items[0].url, "https://cdn.example/2.jpg");
    }

    #[tokio::test]
    async fn deleting_last_image_brings_back_fallback() {
        let db = connect_in_memory(true).await;
        let only = create(&db, dto("https://cdn.example/only.jpg")).await.unwrap();
        delete(&db, only.id).await.unwrap();

        let rows = list(&db).await.unwrap().items;
        let urls = resolve_public_gallery(Ok(rows));
        assert_eq!(urls.len(), GALLERY_FALLBACK.len());
    }

    #[tokio::test]
    async fn missing_ids_are_not_found() {
        let db = connect_in_memory(true).await;
        assert!(matches!(delete(&db, 99).await, Err(AppError::NotFound(_))));
        assert!(matches!(
            update(&db, 99, dto("https://cdn.example/x.jpg")).await,
            Err(AppError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn bad_url_is_rejected_before_storage() {
        let db = connect_in_memory(true).await;
        assert!(matches!(create(&db, dto("")).await, Err(AppError::Validation(_))));
    }
}
