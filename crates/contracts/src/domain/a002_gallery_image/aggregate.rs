use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::catalog::GALLERY_FALLBACK;
use crate::shared::gateway::GatewayError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GalleryImage {
    pub id: i64,
    pub url: String,
    pub created_at: DateTime<Utc>,
}

/// Insert/update payload
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GalleryImageDto {
    pub url: String,
}

impl GalleryImageDto {
    pub fn validate(&self) -> Result<(), String> {
        let url = self.url.trim();
        if url.is_empty() {
            return Err("Image URL is required".into());
        }
        if !(url.starts_with("https://") || url.starts_with("http://") || url.starts_with('/')) {
            return Err("Image URL must be absolute (http/https) or site-relative".into());
        }
        Ok(())
    }
}

/// URLs shown on the public gallery: live rows when there are any, the
/// bundled set when the collection is empty or the call failed.
pub fn resolve_public_gallery(fetched: Result<Vec<GalleryImage>, GatewayError>) -> Vec<String> {
    match fetched {
        Ok(rows) if !rows.is_empty() => rows.into_iter().map(|row| row.url).collect(),
        _ => GALLERY_FALLBACK.iter().map(|url| url.to_string()).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn image(id: i64, url: &str) -> GalleryImage {
        GalleryImage {
            id,
            url: url.into(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn live_rows_win_over_fallback() {
        let urls = resolve_public_gallery(Ok(vec![image(2, "/img/b.jpg"), image(1, "/img/a.jpg")]));
        assert_eq!(urls, vec!["/img/b.jpg", "/img/a.jpg"]);
    }

    #[test]
    fn empty_collection_shows_fallback() {
        let urls = resolve_public_gallery(Ok(Vec::new()));
        assert_eq!(urls.len(), GALLERY_FALLBACK.len());
    }

    #[test]
    fn unprovisioned_collection_shows_fallback() {
        let urls = resolve_public_gallery(Err(GatewayError::NotProvisioned {
            table: "gallery_images".into(),
        }));
        assert_eq!(urls[0], GALLERY_FALLBACK[0]);
    }

    #[test]
    fn url_must_look_like_a_link() {
        assert!(GalleryImageDto { url: "https://cdn.example/a.jpg".into() }.validate().is_ok());
        assert!(GalleryImageDto { url: "  ".into() }.validate().is_err());
        assert!(GalleryImageDto { url: "javascript:alert(1)".into() }.validate().is_err());
    }
}
