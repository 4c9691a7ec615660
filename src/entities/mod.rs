pub mod customers;
pub mod transactions;

pub use customers as customer_entity;
pub use transactions as transaction_entity;
