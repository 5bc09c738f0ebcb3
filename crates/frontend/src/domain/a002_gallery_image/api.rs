use contracts::domain::a002_gallery_image::aggregate::{GalleryImage, GalleryImageDto};
use contracts::shared::gateway::GatewayError;
use contracts::shared::listing::Listing;
use gloo_net::http::Method;

use crate::shared::gateway;

pub async fn fetch_images() -> Result<Vec<GalleryImage>, GatewayError> {
    gateway::get_json::<Listing<GalleryImage>>("/api/gallery", None)
        .await
        .map(|listing| listing.items)
}

pub async fn create_image(url: String, token: &str) -> Result<GalleryImage, GatewayError> {
    gateway::send_json(Method::POST, "/api/gallery", &GalleryImageDto { url }, Some(token)).await
}

pub async fn update_image(id: i64, url: String, token: &str) -> Result<GalleryImage, GatewayError> {
    let path = format!("/api/gallery/{}", id);
    gateway::send_json(Method::PUT, &path, &GalleryImageDto { url }, Some(token)).await
}

pub async fn delete_image(id: i64, token: &str) -> Result<(), GatewayError> {
    gateway::delete(&format!("/api/gallery/{}", id), Some(token)).await
}
