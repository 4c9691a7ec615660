//! Store capabilities used by the services.
//!
//! Services only see these traits; `SeaOrmStore` backs them with Postgres and
//! tests use the in-memory store.

pub mod sea_orm_store;

#[cfg(test)]
pub mod memory;

pub use sea_orm_store::SeaOrmStore;

use crate::entities::{customer_entity, transaction_entity};
use crate::error::AppResult;
use crate::models::TimeFrame;
use async_trait::async_trait;
use chrono::NaiveDate;
use rust_decimal::Decimal;

/// A customer not yet persisted. `phone` must already be hashed.
#[derive(Debug, Clone)]
pub struct NewCustomer {
    pub name: String,
    pub phone: String,
    pub transactions: Vec<NewTransaction>,
}

#[derive(Debug, Clone)]
pub struct NewTransaction {
    pub date: NaiveDate,
    pub product: String,
    pub amount: Decimal,
}

/// A customer together with the transactions written alongside it.
#[derive(Debug, Clone)]
pub struct SavedCustomer {
    pub customer: customer_entity::Model,
    pub transactions: Vec<transaction_entity::Model>,
}

#[async_trait]
pub trait CustomerStore: Send + Sync {
    /// Persist the customer and its transactions as one unit.
    async fn save(&self, customer: NewCustomer) -> AppResult<SavedCustomer>;

    async fn find_by_id(&self, id: i64) -> AppResult<Option<customer_entity::Model>>;

    async fn find_all(&self) -> AppResult<Vec<customer_entity::Model>>;

    /// Customers sharing the given name, lowest id first.
    async fn find_by_name(&self, name: &str) -> AppResult<Vec<customer_entity::Model>>;
}

#[async_trait]
pub trait TransactionStore: Send + Sync {
    async fn find_by_customer_id(
        &self,
        customer_id: i64,
    ) -> AppResult<Vec<transaction_entity::Model>>;

    /// Both ends of `range` are inclusive.
    async fn find_by_customer_id_and_date_range(
        &self,
        customer_id: i64,
        range: TimeFrame,
    ) -> AppResult<Vec<transaction_entity::Model>>;
}
