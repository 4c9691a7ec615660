pub mod auth_service;
pub mod customer_service;

pub use auth_service::*;
pub use customer_service::*;
