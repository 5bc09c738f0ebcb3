pub mod dashboard;
pub mod overview;
