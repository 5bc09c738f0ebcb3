use contracts::domain::a004_order::aggregate::{NewOrderDto, Order, OrderCreated, OrderStatus};
use contracts::shared::listing::Listing;
use sea_orm::DatabaseConnection;

use super::repository;
use crate::shared::error::{AppError, AppResult};

/// Stores a checkout. The payload is re-validated and its total recomputed.
pub async fn create(db: &DatabaseConnection, dto: NewOrderDto) -> AppResult<OrderCreated> {
    dto.validate().map_err(AppError::Validation)?;
    let order = repository::insert(db, &dto).await?;
    tracing::info!(
        "Order {} placed: {} item(s), {} SR, cash on arrival",
        order.id,
        order.items.len(),
        order.total
    );
    Ok(OrderCreated { id: order.id })
}

pub async fn list(db: &DatabaseConnection, status: Option<OrderStatus>) -> AppResult<Listing<Order>> {
    repository::list(db, status).await
}

/// Moves a pending order to completed or cancelled
pub async fn change_status(db: &DatabaseConnection, id: i64, next: OrderStatus) -> AppResult<Order> {
    let order = repository::get(db, id).await?;
    if !order.status.can_transition_to(next) {
        return Err(AppError::InvalidTransition {
            from: order.status,
            to: next,
        });
    }
    if !repository::set_status(db, id, order.status, next).await? {
        // changed or deleted since the read above
        let current = repository::get(db, id).await?;
        tracing::warn!("Order {} moved to {} before it could be marked {}", id, current.status, next);
        return Err(AppError::InvalidTransition {
            from: current.status,
            to: next,
        });
    }
    tracing::info!("Order {} marked {}", id, next);
    repository::get(db, id).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data::db::connect_in_memory;
    use contracts::domain::a004_order::aggregate::PaymentMethod;
    use contracts::shared::cart::{CartItem, ItemKind};

    fn dto(quantity: u32) -> NewOrderDto {
        let mut item = CartItem::new("party-xtreme-package", "Xtreme Package", "باقة إكستريم", 99, ItemKind::Package);
        item.quantity = quantity;
        NewOrderDto {
            customer_name: "Huda".into(),
            customer_email: "huda@example.com".into(),
            customer_phone: "0551234567".into(),
            items: vec![item],
            total: 99 * i64::from(quantity),
            status: OrderStatus::Pending,
            payment_method: PaymentMethod::Cash,
        }
    }

    #[tokio::test]
    async fn checkout_is_stored_with_snapshot() {
        let db = connect_in_memory(true).await;
        let created = create(&db, dto(3)).await.unwrap();

        let listing = list(&db, None).await.unwrap();
        assert_eq!(listing.total, 1);
        let order = &listing.items[0];
        assert_eq!(order.id, created.id);
        assert_eq!(order.total, 297);
        assert_eq!(order.items[0].quantity, 3);
        assert_eq!(order.status, OrderStatus::Pending);
    }

    #[tokio::test]
    async fn tampered_total_is_rejected() {
        let db = connect_in_memory(true).await;
        let mut tampered = dto(2);
        tampered.total = 1;
        assert!(matches!(create(&db, tampered).await, Err(AppError::Validation(_))));
    }

    #[tokio::test]
    async fn double_submit_creates_two_orders() {
        let db = connect_in_memory(true).await;
        let a = create(&db, dto(1)).await.unwrap();
        let b = create(&db, dto(1)).await.unwrap();
        assert_ne!(a.id, b.id);
        assert_eq!(list(&db, None).await.unwrap().total, 2);
    }

    #[tokio::test]
    async fn completing_one_order_leaves_others_untouched() {
        let db = connect_in_memory(true).await;
        let first = create(&db, dto(1)).await.unwrap();
        let second = create(&db, dto(2)).await.unwrap();

        let done = change_status(&db, first.id, OrderStatus::Completed).await.unwrap();
        assert_eq!(done.status, OrderStatus::Completed);

        let other = repository::get(&db, second.id).await.unwrap();
        assert_eq!(other.status, OrderStatus::Pending);
        assert_eq!(other.total, 198);

        let pending = list(&db, Some(OrderStatus::Pending)).await.unwrap();
        assert_eq!(pending.total, 1);
        assert_eq!(pending.items[0].id, second.id);
    }

    #[tokio::test]
    async fn final_states_do_not_move() {
        let db = connect_in_memory(true).await;
        let order = create(&db, dto(1)).await.unwrap();
        change_status(&db, order.id, OrderStatus::Cancelled).await.unwrap();

        let err = change_status(&db, order.id, OrderStatus::Completed).await.unwrap_err();
        assert!(matches!(
            err,
            AppError::InvalidTransition { from: OrderStatus::Cancelled, to: OrderStatus::Completed }
        ));
    }

    #[tokio::test]
    async fn status_write_only_applies_to_the_status_it_read() {
        let db = connect_in_memory(true).await;
        let order = create(&db, dto(1)).await.unwrap();

        assert!(repository::set_status(&db, order.id, OrderStatus::Pending, OrderStatus::Completed)
            .await
            .unwrap());
        // a second writer that also read `pending` loses
        assert!(!repository::set_status(&db, order.id, OrderStatus::Pending, OrderStatus::Cancelled)
            .await
            .unwrap());
        assert_eq!(repository::get(&db, order.id).await.unwrap().status, OrderStatus::Completed);

        let err = change_status(&db, order.id, OrderStatus::Cancelled).await.unwrap_err();
        assert!(matches!(
            err,
            AppError::InvalidTransition { from: OrderStatus::Completed, to: OrderStatus::Cancelled }
        ));
    }

    #[tokio::test]
    async fn unknown_order_is_not_found() {
        let db = connect_in_memory(true).await;
        let err = change_status(&db, 404, OrderStatus::Completed).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn unprovisioned_orders_surface_typed_error() {
        let db = connect_in_memory(false).await;
        let err = create(&db, dto(1)).await.unwrap_err();
        assert!(matches!(err, AppError::NotProvisioned { ref table } if table == "orders"));
    }
}
