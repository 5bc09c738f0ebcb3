use crate::domain::a004_order::aggregate::{
    confirmation_code, random_confirmation_code, NewOrderDto, OrderCreated,
};
use crate::shared::cart::CartItem;
use crate::shared::gateway::GatewayError;
use crate::shared::session::Session;

use super::request::CheckoutForm;

/// Write side of the order store as seen by the checkout
pub trait OrderGateway {
    async fn insert_order(&self, order: &NewOrderDto) -> Result<OrderCreated, GatewayError>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckoutOutcome {
    /// Empty cart, nothing was sent
    Skipped,
    /// Form incomplete, nothing was sent
    Incomplete,
    /// Order accepted, or the order store is not provisioned and the
    /// confirmation code was generated locally
    Confirmed { code: String, stored: bool },
    /// Any other failure. The cart is kept.
    Failed { reason: String },
}

impl CheckoutOutcome {
    pub fn is_confirmed(&self) -> bool {
        matches!(self, CheckoutOutcome::Confirmed { .. })
    }

    /// Applies the outcome to the session: a confirmed checkout empties the cart
    pub fn apply_to(&self, session: &mut Session) {
        if self.is_confirmed() {
            session.clear_cart();
        }
    }
}

/// Submits the cart as a cash-on-arrival order.
///
/// Nothing is retried and nothing guards against a second submit.
pub async fn submit_checkout<G: OrderGateway>(
    gateway: &G,
    form: &CheckoutForm,
    items: &[CartItem],
) -> CheckoutOutcome {
    if items.is_empty() {
        return CheckoutOutcome::Skipped;
    }
    if !form.is_complete() {
        return CheckoutOutcome::Incomplete;
    }

    let order = form.to_order(items);
    match gateway.insert_order(&order).await {
        Ok(created) => CheckoutOutcome::Confirmed {
            code: confirmation_code(created.id),
            stored: true,
        },
        Err(GatewayError::NotProvisioned { .. }) => CheckoutOutcome::Confirmed {
            code: random_confirmation_code(),
            stored: false,
        },
        Err(err) => CheckoutOutcome::Failed {
            reason: err.to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::shared::api_error::ApiErrorCode;
    use crate::shared::cart::ItemKind;

    /// Records inserted orders and answers with a scripted result
    struct FakeGateway {
        answer: Result<OrderCreated, GatewayError>,
        inserted: RefCell<Vec<NewOrderDto>>,
    }

    impl FakeGateway {
        fn answering(answer: Result<OrderCreated, GatewayError>) -> Self {
            Self {
                answer,
                inserted: RefCell::new(Vec::new()),
            }
        }
    }

    impl OrderGateway for FakeGateway {
        async fn insert_order(&self, order: &NewOrderDto) -> Result<OrderCreated, GatewayError> {
            self.inserted.borrow_mut().push(order.clone());
            self.answer.clone()
        }
    }

    fn form() -> CheckoutForm {
        CheckoutForm {
            name: "Jayed".into(),
            email: "jayed@example.com".into(),
            phone: "123456789".into(),
        }
    }

    fn xtreme() -> CartItem {
        CartItem::new("party-xtreme-package", "Xtreme Package", "باقة إكستريم", 99, ItemKind::Package)
    }

    fn is_six_digits(code: &str) -> bool {
        code.len() == 6 && code.chars().all(|c| c.is_ascii_digit())
    }

    #[tokio::test]
    async fn empty_cart_sends_nothing() {
        let gateway = FakeGateway::answering(Ok(OrderCreated { id: 1 }));
        let outcome = submit_checkout(&gateway, &form(), &[]).await;

        assert_eq!(outcome, CheckoutOutcome::Skipped);
        assert!(gateway.inserted.borrow().is_empty());
    }

    #[tokio::test]
    async fn incomplete_form_sends_nothing() {
        let gateway = FakeGateway::answering(Ok(OrderCreated { id: 1 }));
        let mut incomplete = form();
        incomplete.phone = " ".into();

        let outcome = submit_checkout(&gateway, &incomplete, &[xtreme()]).await;
        assert_eq!(outcome, CheckoutOutcome::Incomplete);
        assert!(gateway.inserted.borrow().is_empty());
    }

    #[tokio::test]
    async fn stored_order_gets_padded_id_and_clears_cart() {
        let mut session = Session::new();
        session.add_to_cart(xtreme(), false);
        session.add_to_cart(xtreme(), true);
        session.add_to_cart(xtreme(), true);
        assert_eq!(session.cart().total(), 297);

        let gateway = FakeGateway::answering(Ok(OrderCreated { id: 57 }));
        let outcome = submit_checkout(&gateway, &form(), session.cart().items()).await;
        outcome.apply_to(&mut session);

        assert_eq!(
            outcome,
            CheckoutOutcome::Confirmed { code: "000057".into(), stored: true }
        );
        assert!(session.cart().is_empty());

        let sent = gateway.inserted.borrow();
        assert_eq!(sent[0].total, 297);
        assert_eq!(sent[0].items[0].quantity, 3);
        assert_eq!(sent[0].payment_method.as_str(), "cash");
    }

    #[tokio::test]
    async fn unprovisioned_store_still_confirms_with_local_code() {
        let mut session = Session::new();
        session.add_to_cart(xtreme(), true);

        let gateway = FakeGateway::answering(Err(GatewayError::NotProvisioned {
            table: "orders".into(),
        }));
        let outcome = submit_checkout(&gateway, &form(), session.cart().items()).await;
        outcome.apply_to(&mut session);

        match &outcome {
            CheckoutOutcome::Confirmed { code, stored } => {
                assert!(is_six_digits(code));
                assert!(!stored);
            }
            other => panic!("unexpected outcome: {:?}", other),
        }
        assert!(session.cart().is_empty());
    }

    #[tokio::test]
    async fn other_failures_keep_the_cart() {
        let mut session = Session::new();
        session.add_to_cart(xtreme(), true);

        let gateway = FakeGateway::answering(Err(GatewayError::Api {
            code: ApiErrorCode::Internal,
            message: "disk full".into(),
        }));
        let outcome = submit_checkout(&gateway, &form(), session.cart().items()).await;
        outcome.apply_to(&mut session);

        assert!(matches!(outcome, CheckoutOutcome::Failed { .. }));
        assert_eq!(session.cart_count(), 1);
    }

    #[tokio::test]
    async fn network_failure_keeps_the_cart() {
        let mut session = Session::new();
        session.add_to_cart(xtreme(), true);

        let gateway = FakeGateway::answering(Err(GatewayError::Network("offline".into())));
        let outcome = submit_checkout(&gateway, &form(), session.cart().items()).await;
        outcome.apply_to(&mut session);

        assert_eq!(
            outcome,
            CheckoutOutcome::Failed { reason: "network error: offline".into() }
        );
        assert_eq!(session.cart_count(), 1);
    }
}
