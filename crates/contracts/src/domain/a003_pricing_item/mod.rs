pub mod aggregate;
pub mod overlay;
