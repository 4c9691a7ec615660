use super::{CustomerStore, NewCustomer, SavedCustomer, TransactionStore};
use crate::entities::{customer_entity, transaction_entity};
use crate::error::AppResult;
use crate::models::TimeFrame;
use async_trait::async_trait;
use chrono::NaiveDate;
use tokio::sync::RwLock;

// 与 SQL BETWEEN 一致，两端都包含
fn in_range(range: &TimeFrame, date: NaiveDate) -> bool {
    range.start_date <= date && date <= range.end_date
}

#[derive(Default)]
struct State {
    customers: Vec<customer_entity::Model>,
    transactions: Vec<transaction_entity::Model>,
    next_customer_id: i64,
    next_transaction_id: i64,
}

/// Vec-backed store for service and handler tests.
#[derive(Default)]
pub struct InMemoryStore {
    state: RwLock<State>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CustomerStore for InMemoryStore {
    async fn save(&self, new_customer: NewCustomer) -> AppResult<SavedCustomer> {
        let mut state = self.state.write().await;

        state.next_customer_id += 1;
        let customer = customer_entity::Model {
            id: state.next_customer_id,
            name: new_customer.name,
            phone: new_customer.phone,
        };

        let mut saved = Vec::with_capacity(new_customer.transactions.len());
        for tx in new_customer.transactions {
            state.next_transaction_id += 1;
            saved.push(transaction_entity::Model {
                id: state.next_transaction_id,
                customer_id: customer.id,
                date: tx.date,
                product: tx.product,
                amount: tx.amount,
            });
        }

        state.customers.push(customer.clone());
        state.transactions.extend(saved.iter().cloned());

        Ok(SavedCustomer {
            customer,
            transactions: saved,
        })
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<customer_entity::Model>> {
        let state = self.state.read().await;
        Ok(state.customers.iter().find(|c| c.id == id).cloned())
    }

    async fn find_all(&self) -> AppResult<Vec<customer_entity::Model>> {
        Ok(self.state.read().await.customers.clone())
    }

    async fn find_by_name(&self, name: &str) -> AppResult<Vec<customer_entity::Model>> {
        let state = self.state.read().await;
        Ok(state
            .customers
            .iter()
            .filter(|c| c.name == name)
            .cloned()
            .collect())
    }
}

#[async_trait]
impl TransactionStore for InMemoryStore {
    async fn find_by_customer_id(
        &self,
        customer_id: i64,
    ) -> AppResult<Vec<transaction_entity::Model>> {
        let state = self.state.read().await;
        Ok(state
            .transactions
            .iter()
            .filter(|t| t.customer_id == customer_id)
            .cloned()
            .collect())
    }

    async fn find_by_customer_id_and_date_range(
        &self,
        customer_id: i64,
        range: TimeFrame,
    ) -> AppResult<Vec<transaction_entity::Model>> {
        let state = self.state.read().await;
        Ok(state
            .transactions
            .iter()
            .filter(|t| t.customer_id == customer_id && in_range(&range, t.date))
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_in_range_includes_both_ends() {
        let range = TimeFrame::new(date(2025, 8, 1), date(2025, 8, 31));
        assert!(in_range(&range, date(2025, 8, 1)));
        assert!(in_range(&range, date(2025, 8, 31)));
        assert!(!in_range(&range, date(2025, 7, 31)));
        assert!(!in_range(&range, date(2025, 9, 1)));
    }
}
