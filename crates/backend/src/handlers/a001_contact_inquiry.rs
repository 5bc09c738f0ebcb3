use axum::{http::StatusCode, Json};
use contracts::domain::a001_contact_inquiry::aggregate::{ContactInquiry, ContactInquiryDto};
use contracts::shared::listing::Listing;

use crate::domain::a001_contact_inquiry;
use crate::shared::data::db::get_connection;
use crate::shared::error::AppResult;

/// POST /api/contacts
pub async fn create(
    Json(dto): Json<ContactInquiryDto>,
) -> AppResult<(StatusCode, Json<ContactInquiry>)> {
    let inquiry = a001_contact_inquiry::service::create(get_connection()?, dto).await?;
    Ok((StatusCode::CREATED, Json(inquiry)))
}

/// GET /api/contacts
pub async fn list() -> AppResult<Json<Listing<ContactInquiry>>> {
    let listing = a001_contact_inquiry::service::list(get_connection()?).await?;
    Ok(Json(listing))
}
