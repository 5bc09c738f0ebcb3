use axum::{
    extract::{Path, Query},
    http::header,
    response::IntoResponse,
    Json,
};
use contracts::domain::a003_pricing_item::aggregate::{
    parse_keys_param, PricingItem, PricingUpdateDto,
};
use serde::Deserialize;

use crate::domain::a003_pricing_item;
use crate::shared::data::db::get_connection;
use crate::shared::error::AppResult;

#[derive(Debug, Default, Deserialize)]
pub struct PricingQuery {
    /// Comma separated pricing keys; absent means every row
    pub keys: Option<String>,
}

/// GET /api/pricing?keys=a,b
pub async fn list(Query(query): Query<PricingQuery>) -> AppResult<Json<Vec<PricingItem>>> {
    let keys = query
        .keys
        .as_deref()
        .map(parse_keys_param)
        .unwrap_or_default();
    let items = a003_pricing_item::service::list(get_connection()?, &keys).await?;
    Ok(Json(items))
}

/// PUT /api/pricing/:id
pub async fn update(
    Path(id): Path<i64>,
    Json(dto): Json<PricingUpdateDto>,
) -> AppResult<Json<PricingItem>> {
    let item = a003_pricing_item::service::update(get_connection()?, id, dto).await?;
    Ok(Json(item))
}

/// GET /api/pricing/schema
pub async fn schema() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        a003_pricing_item::service::provisioning_sql(),
    )
}
