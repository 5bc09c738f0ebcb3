use serde::{Deserialize, Serialize};

use crate::domain::a004_order::aggregate::{NewOrderDto, OrderStatus, PaymentMethod};
use crate::shared::cart::{cart_total, CartItem};

/// Customer details entered on the cart page
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutForm {
    pub name: String,
    pub email: String,
    pub phone: String,
}

impl CheckoutForm {
    pub fn is_complete(&self) -> bool {
        [&self.name, &self.email, &self.phone]
            .iter()
            .all(|field| !field.trim().is_empty())
    }

    /// Builds the cash-on-arrival order for the given cart lines
    pub fn to_order(&self, items: &[CartItem]) -> NewOrderDto {
        NewOrderDto {
            customer_name: self.name.trim().to_string(),
            customer_email: self.email.trim().to_string(),
            customer_phone: self.phone.trim().to_string(),
            items: items.to_vec(),
            total: cart_total(items),
            status: OrderStatus::Pending,
            payment_method: PaymentMethod::Cash,
        }
    }
}
