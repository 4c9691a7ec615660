use crate::error::{AppError, AppResult};
use crate::models::*;
use crate::repositories::{CustomerStore, NewCustomer, NewTransaction, TransactionStore};
use crate::rewards::{ranged_view, summary_view, tally};
use crate::utils::hash_phone;
use std::sync::Arc;

const NO_TRANSACTIONS_MESSAGE: &str = "No transactions found";

#[derive(Clone)]
pub struct CustomerService {
    customers: Arc<dyn CustomerStore>,
    transactions: Arc<dyn TransactionStore>,
    phone_hash_cost: u32,
}

impl CustomerService {
    pub fn new(
        customers: Arc<dyn CustomerStore>,
        transactions: Arc<dyn TransactionStore>,
        phone_hash_cost: u32,
    ) -> Self {
        Self {
            customers,
            transactions,
            phone_hash_cost,
        }
    }

    /// 创建客户（可附带初始消费记录）
    ///
    /// 手机号先哈希再保存，响应中返回的也是哈希值
    pub async fn create_customer(
        &self,
        request: CreateCustomerRequest,
    ) -> AppResult<CustomerResponse> {
        if request.name.trim().is_empty() {
            return Err(AppError::ValidationError("Name must not be empty".to_string()));
        }
        if request.phone.trim().is_empty() {
            return Err(AppError::ValidationError("Phone must not be empty".to_string()));
        }

        let phone = hash_phone(&request.phone, self.phone_hash_cost)?;
        let transactions = request
            .transactions
            .unwrap_or_default()
            .into_iter()
            .map(|tx| NewTransaction {
                date: tx.date,
                product: tx.product,
                amount: tx.amount,
            })
            .collect();

        let saved = self
            .customers
            .save(NewCustomer {
                name: request.name,
                phone,
                transactions,
            })
            .await?;

        log::info!(
            "Created customer {} with {} transactions",
            saved.customer.id,
            saved.transactions.len()
        );

        Ok(CustomerResponse::new(saved.customer, saved.transactions))
    }

    /// 获取客户的消费记录及积分
    pub async fn get_customer_transactions(
        &self,
        customer_id: i64,
    ) -> AppResult<Vec<TransactionRewardResponse>> {
        let transactions = self.transactions.find_by_customer_id(customer_id).await?;

        Ok(tally(transactions)
            .transactions
            .into_iter()
            .map(Into::into)
            .collect())
    }

    /// 所有客户的积分汇总
    pub async fn get_reward_summary(&self) -> AppResult<Vec<SummaryResponse>> {
        let customers = self.customers.find_all().await?;

        let mut summaries = Vec::with_capacity(customers.len());
        for customer in customers {
            let transactions = self.transactions.find_by_customer_id(customer.id).await?;
            summaries.push(summary_view(&customer, transactions));
        }

        Ok(summaries)
    }

    /// 指定时间段内的客户积分
    pub async fn get_rewards_for_customer(
        &self,
        customer_id: i64,
        time_frame: TimeFrame,
    ) -> AppResult<RewardResponse> {
        let customer = self
            .customers
            .find_by_id(customer_id)
            .await?
            .ok_or_else(|| {
                log::warn!("Rewards requested for unknown customer {customer_id}");
                AppError::NotFound(format!("Customer not found: {customer_id}"))
            })?;

        let transactions = self
            .transactions
            .find_by_customer_id_and_date_range(customer_id, time_frame)
            .await?;

        if transactions.is_empty() {
            log::warn!(
                "No transactions for customer {customer_id} between {} and {}",
                time_frame.start_date,
                time_frame.end_date
            );
            return Err(AppError::NoData(NO_TRANSACTIONS_MESSAGE.to_string()));
        }

        Ok(ranged_view(&customer, transactions, time_frame))
    }
}
