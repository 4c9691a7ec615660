use super::aggregator::tally;
use crate::entities::{customer_entity, transaction_entity};
use crate::models::{RewardResponse, SummaryResponse, TimeFrame, TransactionRewardResponse};
use std::collections::BTreeMap;

/// Fields shared by the summary and ranged response shapes.
#[derive(Debug, Clone)]
pub struct AggregateView {
    pub customer_id: i64,
    pub name: String,
    pub phone: String,
    pub transactions: Vec<TransactionRewardResponse>,
    pub monthly_rewards: BTreeMap<String, i64>,
    pub total_rewards: i64,
    pub time_frame: Option<TimeFrame>,
}

pub fn assemble(
    customer: &customer_entity::Model,
    transactions: Vec<transaction_entity::Model>,
    time_frame: Option<TimeFrame>,
) -> AggregateView {
    let result = tally(transactions);

    AggregateView {
        customer_id: customer.id,
        name: customer.name.clone(),
        phone: customer.phone.clone(),
        transactions: result.transactions.into_iter().map(Into::into).collect(),
        monthly_rewards: result.monthly_points,
        total_rewards: result.total_points,
        time_frame,
    }
}

/// Summary entry for one customer over every transaction passed in.
pub fn summary_view(
    customer: &customer_entity::Model,
    transactions: Vec<transaction_entity::Model>,
) -> SummaryResponse {
    let view = assemble(customer, transactions, None);
    SummaryResponse {
        customer_id: view.customer_id,
        name: view.name,
        phone: view.phone,
        transactions: view.transactions,
        monthly_rewards: view.monthly_rewards,
        total_rewards: view.total_rewards,
    }
}

/// Rewards for one customer, echoing the requested window.
pub fn ranged_view(
    customer: &customer_entity::Model,
    transactions: Vec<transaction_entity::Model>,
    time_frame: TimeFrame,
) -> RewardResponse {
    let view = assemble(customer, transactions, Some(time_frame));
    RewardResponse {
        customer_id: view.customer_id,
        name: view.name,
        phone: view.phone,
        transactions: view.transactions,
        monthly_rewards: view.monthly_rewards,
        total_rewards: view.total_rewards,
        time_frame,
    }
}
