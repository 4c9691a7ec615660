pub mod auth;
pub mod common;
pub mod customer;
pub mod reward;

pub use auth::*;
pub use common::*;
pub use customer::*;
pub use reward::*;
