pub mod api_error;
pub mod cart;
pub mod catalog;
pub mod gateway;
pub mod lang;
pub mod listing;
pub mod page;
pub mod session;
