pub mod jwt;
pub mod phone_hash;

pub use jwt::*;
pub use phone_hash::*;
