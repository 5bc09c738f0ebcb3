use axum::{extract::Path, http::StatusCode, Json};
use contracts::domain::a002_gallery_image::aggregate::{GalleryImage, GalleryImageDto};
use contracts::shared::listing::Listing;

use crate::domain::a002_gallery_image;
use crate::shared::data::db::get_connection;
use crate::shared::error::AppResult;

/// GET /api/gallery
pub async fn list() -> AppResult<Json<Listing<GalleryImage>>> {
    let listing = a002_gallery_image::service::list(get_connection()?).await?;
    Ok(Json(listing))
}

/// POST /api/gallery
pub async fn create(
    Json(dto): Json<GalleryImageDto>,
) -> AppResult<(StatusCode, Json<GalleryImage>)> {
    let image = a002_gallery_image::service::create(get_connection()?, dto).await?;
    Ok((StatusCode::CREATED, Json(image)))
}

/// PUT /api/gallery/:id
pub async fn update(
    Path(id): Path<i64>,
    Json(dto): Json<GalleryImageDto>,
) -> AppResult<Json<GalleryImage>> {
    let image = a002_gallery_image::service::update(get_connection()?, id, dto).await?;
    Ok(Json(image))
}

/// DELETE /api/gallery/:id
pub async fn delete(Path(id): Path<i64>) -> AppResult<StatusCode> {
    a002_gallery_image::service::delete(get_connection()?, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
