use contracts::domain::a004_order::aggregate::{
    NewOrderDto, Order, OrderCreated, OrderStatus, OrderStatusUpdate,
};
use contracts::shared::gateway::GatewayError;
use contracts::shared::listing::Listing;
use contracts::usecases::u501_checkout::OrderGateway;
use gloo_net::http::Method;

use crate::shared::gateway;

/// Order store reached over HTTP
pub struct HttpOrderGateway;

impl OrderGateway for HttpOrderGateway {
    async fn insert_order(&self, order: &NewOrderDto) -> Result<OrderCreated, GatewayError> {
        gateway::send_json(Method::POST, "/api/orders", order, None).await
    }
}

pub async fn fetch_orders(token: &str) -> Result<Listing<Order>, GatewayError> {
    gateway::get_json("/api/orders", Some(token)).await
}

pub async fn change_status(id: i64, status: OrderStatus, token: &str) -> Result<Order, GatewayError> {
    let path = format!("/api/orders/{}/status", id);
    gateway::send_json(Method::POST, &path, &OrderStatusUpdate { status }, Some(token)).await
}
