use axum::{
    extract::{Path, Query},
    http::StatusCode,
    Json,
};
use contracts::domain::a004_order::aggregate::{
    NewOrderDto, Order, OrderCreated, OrderStatus, OrderStatusUpdate,
};
use contracts::shared::listing::Listing;
use serde::Deserialize;

use crate::domain::a004_order;
use crate::shared::data::db::get_connection;
use crate::shared::error::AppResult;

#[derive(Debug, Default, Deserialize)]
pub struct OrdersQuery {
    pub status: Option<OrderStatus>,
}

/// POST /api/orders
pub async fn create(Json(dto): Json<NewOrderDto>) -> AppResult<(StatusCode, Json<OrderCreated>)> {
    let created = a004_order::service::create(get_connection()?, dto).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// GET /api/orders?status=pending
pub async fn list(Query(query): Query<OrdersQuery>) -> AppResult<Json<Listing<Order>>> {
    let listing = a004_order::service::list(get_connection()?, query.status).await?;
    Ok(Json(listing))
}

/// POST /api/orders/:id/status
pub async fn change_status(
    Path(id): Path<i64>,
    Json(update): Json<OrderStatusUpdate>,
) -> AppResult<Json<Order>> {
    let order = a004_order::service::change_status(get_connection()?, id, update.status).await?;
    Ok(Json(order))
}
