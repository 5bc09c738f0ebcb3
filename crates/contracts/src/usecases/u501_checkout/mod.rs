pub mod flow;
pub mod request;

pub use flow::{submit_checkout, CheckoutOutcome, OrderGateway};
pub use request::CheckoutForm;
