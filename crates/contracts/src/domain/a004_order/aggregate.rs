use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::shared::cart::{checked_cart_total, CartItem};
use crate::shared::lang::{Language, Text};

// ============================================================================
// Status
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    #[default]
    Pending,
    Completed,
    Cancelled,
}

impl OrderStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Completed => "completed",
            OrderStatus::Cancelled => "cancelled",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "pending" => Some(OrderStatus::Pending),
            "completed" => Some(OrderStatus::Completed),
            "cancelled" => Some(OrderStatus::Cancelled),
            _ => None,
        }
    }

    /// Only pending orders move, and only to a final state
    pub fn can_transition_to(self, next: OrderStatus) -> bool {
        matches!(
            (self, next),
            (OrderStatus::Pending, OrderStatus::Completed) | (OrderStatus::Pending, OrderStatus::Cancelled)
        )
    }

    pub fn label(self, lang: Language) -> &'static str {
        let text = match self {
            OrderStatus::Pending => Text::new("Pending", "قيد الانتظار"),
            OrderStatus::Completed => Text::new("Completed", "مكتمل"),
            OrderStatus::Cancelled => Text::new("Cancelled", "ملغي"),
        };
        text.get(lang)
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    #[default]
    Cash,
}

impl PaymentMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            PaymentMethod::Cash => "cash",
        }
    }
}

// ============================================================================
// Aggregate
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: i64,
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: String,
    /// Snapshot of the cart at checkout time
    pub items: Vec<CartItem>,
    pub total: i64,
    pub status: OrderStatus,
    pub payment_method: PaymentMethod,
    pub created_at: DateTime<Utc>,
}

impl Order {
    pub fn confirmation_code(&self) -> String {
        confirmation_code(self.id)
    }
}

/// Checkout payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewOrderDto {
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: String,
    pub items: Vec<CartItem>,
    pub total: i64,
    #[serde(default)]
    pub status: OrderStatus,
    #[serde(default)]
    pub payment_method: PaymentMethod,
}

impl NewOrderDto {
    pub fn validate(&self) -> Result<(), String> {
        if self.customer_name.trim().is_empty()
            || self.customer_email.trim().is_empty()
            || self.customer_phone.trim().is_empty()
        {
            return Err("Name, email and phone are required".into());
        }
        if self.items.is_empty() {
            return Err("Order has no items".into());
        }
        if self.items.iter().any(|item| item.quantity == 0 || item.price < 0) {
            return Err("Every item needs a positive quantity and a price".into());
        }
        if self.status != OrderStatus::Pending {
            return Err("New orders must be pending".into());
        }
        let Some(expected) = checked_cart_total(&self.items) else {
            return Err("Order total is out of range".into());
        };
        if self.total != expected {
            return Err(format!("Total {} does not match items ({})", self.total, expected));
        }
        Ok(())
    }
}

/// Response of a successful checkout insert
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderCreated {
    pub id: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderStatusUpdate {
    pub status: OrderStatus,
}

/// Order number shown to the customer: the id zero-padded to six digits
pub fn confirmation_code(id: i64) -> String {
    format!("{:06}", id)
}

/// Locally generated six digit code for orders that could not be stored
pub fn random_confirmation_code() -> String {
    format!("{:06}", Uuid::new_v4().as_u128() % 1_000_000)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::cart::ItemKind;

    fn dto() -> NewOrderDto {
        let mut item = CartItem::new("party-xtreme-package", "Xtreme Package", "باقة إكستريم", 99, ItemKind::Package);
        item.quantity = 3;
        NewOrderDto {
            customer_name: "Ali".into(),
            customer_email: "ali@example.com".into(),
            customer_phone: "0550000000".into(),
            items: vec![item],
            total: 297,
            status: OrderStatus::Pending,
            payment_method: PaymentMethod::Cash,
        }
    }

    #[test]
    fn only_pending_orders_transition() {
        assert!(OrderStatus::Pending.can_transition_to(OrderStatus::Completed));
        assert!(OrderStatus::Pending.can_transition_to(OrderStatus::Cancelled));
        assert!(!OrderStatus::Completed.can_transition_to(OrderStatus::Pending));
        assert!(!OrderStatus::Cancelled.can_transition_to(OrderStatus::Completed));
        assert!(!OrderStatus::Pending.can_transition_to(OrderStatus::Pending));
    }

    #[test]
    fn codes_are_six_digits() {
        assert_eq!(confirmation_code(42), "000042");
        for _ in 0..50 {
            let code = random_confirmation_code();
            assert_eq!(code.len(), 6);
            assert!(code.chars().all(|c| c.is_ascii_digit()));
        }
    }

    #[test]
    fn payload_total_must_match_items() {
        assert!(dto().validate().is_ok());

        let mut wrong = dto();
        wrong.total = 1;
        assert!(wrong.validate().is_err());
    }

    #[test]
    fn overflowing_items_are_rejected_not_wrapped() {
        let mut order = dto();
        order.items[0].price = i64::MAX;
        order.items[0].quantity = 2;
        // the value a wrapping multiply would produce
        order.total = i64::MAX.wrapping_mul(2);
        assert_eq!(order.validate(), Err("Order total is out of range".to_string()));
    }

    #[test]
    fn payload_needs_items_and_contact() {
        let mut empty = dto();
        empty.items.clear();
        empty.total = 0;
        assert!(empty.validate().is_err());

        let mut nameless = dto();
        nameless.customer_name = " ".into();
        assert!(nameless.validate().is_err());
    }

    #[test]
    fn wire_shape_uses_lowercase_enums() {
        let json = serde_json::to_value(dto()).unwrap();
        assert_eq!(json["status"], "pending");
        assert_eq!(json["payment_method"], "cash");
        assert_eq!(json["items"][0]["nameEn"], "Xtreme Package");
    }
}
