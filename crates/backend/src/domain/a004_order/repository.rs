use chrono::Utc;
use contracts::domain::a004_order::aggregate::{NewOrderDto, Order, OrderStatus, PaymentMethod};
use contracts::shared::listing::Listing;
use sea_orm::entity::prelude::*;
use sea_orm::sea_query::Expr;
use sea_orm::{DatabaseConnection, QueryFilter, QueryOrder, Set};

use crate::shared::data::gateway::{fetch_listing, TableResult};
use crate::shared::data::schema::ORDERS;
use crate::shared::error::{AppError, AppResult};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "orders")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: String,
    /// JSON snapshot of the cart lines
    pub items: String,
    pub total: i64,
    pub status: String,
    pub payment_method: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Order {
    fn from(m: Model) -> Self {
        let items = serde_json::from_str(&m.items).unwrap_or_else(|e| {
            tracing::warn!("Order {} has unreadable items: {}", m.id, e);
            Vec::new()
        });
        Order {
            id: m.id,
            customer_name: m.customer_name,
            customer_email: m.customer_email,
            customer_phone: m.customer_phone,
            items,
            total: m.total,
            status: OrderStatus::parse(&m.status).unwrap_or_default(),
            payment_method: PaymentMethod::Cash,
            created_at: m.created_at,
        }
    }
}

pub async fn insert(db: &DatabaseConnection, dto: &NewOrderDto) -> AppResult<Order> {
    let items = serde_json::to_string(&dto.items).map_err(anyhow::Error::from)?;
    let active = ActiveModel {
        customer_name: Set(dto.customer_name.trim().to_string()),
        customer_email: Set(dto.customer_email.trim().to_string()),
        customer_phone: Set(dto.customer_phone.trim().to_string()),
        items: Set(items),
        total: Set(dto.total),
        status: Set(dto.status.as_str().to_string()),
        payment_method: Set(dto.payment_method.as_str().to_string()),
        created_at: Set(Utc::now()),
        ..Default::default()
    };
    let model = active.insert(db).await.for_table(ORDERS)?;
    Ok(model.into())
}

/// Newest first, optionally restricted to one status
pub async fn list(db: &DatabaseConnection, status: Option<OrderStatus>) -> AppResult<Listing<Order>> {
    let mut select = Entity::find()
        .order_by_desc(Column::CreatedAt)
        .order_by_desc(Column::Id);
    if let Some(status) = status {
        select = select.filter(Column::Status.eq(status.as_str()));
    }
    let listing = fetch_listing(db, ORDERS, select).await?;
    Ok(listing.map(Into::into))
}

pub async fn get(db: &DatabaseConnection, id: i64) -> AppResult<Order> {
    Entity::find_by_id(id)
        .one(db)
        .await
        .for_table(ORDERS)?
        .map(Into::into)
        .ok_or_else(|| AppError::NotFound(format!("Order {}", id)))
}

/// Moves the order from `from` to `to` in one statement. Returns `false`
/// when no row still had status `from`.
pub async fn set_status(
    db: &DatabaseConnection,
    id: i64,
    from: OrderStatus,
    to: OrderStatus,
) -> AppResult<bool> {
    let result = Entity::update_many()
        .col_expr(Column::Status, Expr::value(to.as_str()))
        .filter(Column::Id.eq(id))
        .filter(Column::Status.eq(from.as_str()))
        .exec(db)
        .await
        .for_table(ORDERS)?;
    Ok(result.rows_affected > 0)
}
