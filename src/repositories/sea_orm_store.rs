use super::{CustomerStore, NewCustomer, SavedCustomer, TransactionStore};
use crate::entities::{customer_entity as customers, transaction_entity as transactions};
use crate::error::AppResult;
use crate::models::TimeFrame;
use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
    TransactionTrait,
};

#[derive(Clone)]
pub struct SeaOrmStore {
    pool: DatabaseConnection,
}

impl SeaOrmStore {
    pub fn new(pool: DatabaseConnection) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CustomerStore for SeaOrmStore {
    async fn save(&self, new_customer: NewCustomer) -> AppResult<SavedCustomer> {
        let txn = self.pool.begin().await?;

        let customer = customers::ActiveModel {
            name: Set(new_customer.name),
            phone: Set(new_customer.phone),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        let mut saved = Vec::with_capacity(new_customer.transactions.len());
        for tx in new_customer.transactions {
            let model = transactions::ActiveModel {
                customer_id: Set(customer.id),
                date: Set(tx.date),
                product: Set(tx.product),
                amount: Set(tx.amount),
                ..Default::default()
            }
            .insert(&txn)
            .await?;
            saved.push(model);
        }

        // 客户与消费记录在同一事务中提交
        txn.commit().await?;

        Ok(SavedCustomer {
            customer,
            transactions: saved,
        })
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<customers::Model>> {
        Ok(customers::Entity::find_by_id(id).one(&self.pool).await?)
    }

    async fn find_all(&self) -> AppResult<Vec<customers::Model>> {
        Ok(customers::Entity::find()
            .order_by_asc(customers::Column::Id)
            .all(&self.pool)
            .await?)
    }

    async fn find_by_name(&self, name: &str) -> AppResult<Vec<customers::Model>> {
        Ok(customers::Entity::find()
            .filter(customers::Column::Name.eq(name))
            .order_by_asc(customers::Column::Id)
            .all(&self.pool)
            .await?)
    }
}

#[async_trait]
impl TransactionStore for SeaOrmStore {
    async fn find_by_customer_id(&self, customer_id: i64) -> AppResult<Vec<transactions::Model>> {
        Ok(transactions::Entity::find()
            .filter(transactions::Column::CustomerId.eq(customer_id))
            .order_by_asc(transactions::Column::Id)
            .all(&self.pool)
            .await?)
    }

    async fn find_by_customer_id_and_date_range(
        &self,
        customer_id: i64,
        range: TimeFrame,
    ) -> AppResult<Vec<transactions::Model>> {
        Ok(transactions::Entity::find()
            .filter(transactions::Column::CustomerId.eq(customer_id))
            .filter(transactions::Column::Date.between(range.start_date, range.end_date))
            .order_by_asc(transactions::Column::Id)
            .all(&self.pool)
            .await?)
    }
}
