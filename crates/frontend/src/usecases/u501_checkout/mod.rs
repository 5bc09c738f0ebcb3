pub mod view;

pub use view::CheckoutPanel;
