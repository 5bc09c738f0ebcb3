use contracts::domain::a001_contact_inquiry::aggregate::{ContactInquiry, ContactInquiryDto};
use contracts::shared::gateway::GatewayError;
use contracts::shared::listing::Listing;
use gloo_net::http::Method;

use crate::shared::gateway;

pub async fn create_inquiry(dto: &ContactInquiryDto) -> Result<ContactInquiry, GatewayError> {
    gateway::send_json(Method::POST, "/api/contacts", dto, None).await
}

pub async fn fetch_inquiries(token: &str) -> Result<Listing<ContactInquiry>, GatewayError> {
    gateway::get_json("/api/contacts", Some(token)).await
}
