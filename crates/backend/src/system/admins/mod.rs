pub mod repository;
pub mod reset_repository;
pub mod service;
