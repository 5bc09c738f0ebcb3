use contracts::domain::a003_pricing_item::aggregate::{keys_param, PricingItem, PricingUpdateDto};
use contracts::shared::gateway::GatewayError;
use gloo_net::http::Method;

use crate::shared::gateway;

/// Rows for the given pricing keys; an empty slice asks for every row
pub async fn fetch_pricing(keys: &[&str]) -> Result<Vec<PricingItem>, GatewayError> {
    let path = if keys.is_empty() {
        "/api/pricing".to_string()
    } else {
        format!(
            "/api/pricing?keys={}",
            urlencoding::encode(&keys_param(keys.iter().copied()))
        )
    };
    gateway::get_json(&path, None).await
}

pub async fn update_pricing(
    id: i64,
    dto: &PricingUpdateDto,
    token: &str,
) -> Result<PricingItem, GatewayError> {
    gateway::send_json(Method::PUT, &format!("/api/pricing/{}", id), dto, Some(token)).await
}

/// SQL that creates and seeds the pricing collection
pub async fn fetch_provisioning_sql(token: &str) -> Result<String, GatewayError> {
    gateway::get_text("/api/pricing/schema", Some(token)).await
}
