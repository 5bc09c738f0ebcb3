use serde::{Deserialize, Serialize};

use super::aggregate::{Order, OrderStatus};

/// Figures of the admin overview tab, derived from live rows
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminOverview {
    pub orders_total: u64,
    pub pending: u64,
    pub completed: u64,
    pub cancelled: u64,
    /// Sum of totals of orders that were not cancelled, in SR
    pub revenue: i64,
    pub inquiries: u64,
}

impl AdminOverview {
    pub fn from_rows(orders: &[Order], inquiries: u64) -> Self {
        let mut overview = AdminOverview {
            orders_total: orders.len() as u64,
            inquiries,
            ..Default::default()
        };
        for order in orders {
            match order.status {
                OrderStatus::Pending => overview.pending += 1,
                OrderStatus::Completed => overview.completed += 1,
                OrderStatus::Cancelled => overview.cancelled += 1,
            }
            if order.status != OrderStatus::Cancelled {
                overview.revenue += order.total;
            }
        }
        overview
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a004_order::aggregate::PaymentMethod;
    use chrono::Utc;

    fn order(id: i64, total: i64, status: OrderStatus) -> Order {
        Order {
            id,
            customer_name: "Noor".into(),
            customer_email: "noor@example.com".into(),
            customer_phone: "0500000001".into(),
            items: Vec::new(),
            total,
            status,
            payment_method: PaymentMethod::Cash,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn counts_and_revenue_skip_cancelled() {
        let orders = vec![
            order(1, 99, OrderStatus::Pending),
            order(2, 139, OrderStatus::Completed),
            order(3, 500, OrderStatus::Cancelled),
        ];
        let overview = AdminOverview::from_rows(&orders, 4);

        assert_eq!(overview.orders_total, 3);
        assert_eq!((overview.pending, overview.completed, overview.cancelled), (1, 1, 1));
        assert_eq!(overview.revenue, 238);
        assert_eq!(overview.inquiries, 4);
    }

    #[test]
    fn empty_rows_give_zeroes() {
        assert_eq!(AdminOverview::from_rows(&[], 0), AdminOverview::default());
    }
}
