use crate::rewards::ScoredTransaction;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use utoipa::ToSchema;

/// A transaction as shown on reward endpoints, with its computed points.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TransactionRewardResponse {
    pub date: NaiveDate,
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    pub product: String,
    pub reward_points: i64,
}

impl From<ScoredTransaction> for TransactionRewardResponse {
    fn from(s: ScoredTransaction) -> Self {
        Self {
            date: s.transaction.date,
            amount: s.transaction.amount,
            product: s.transaction.product,
            reward_points: s.points,
        }
    }
}

/// Inclusive date window of a ranged rewards query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TimeFrame {
    #[schema(example = "2025-08-01")]
    pub start_date: NaiveDate,
    #[schema(example = "2025-08-31")]
    pub end_date: NaiveDate,
}

impl TimeFrame {
    pub fn new(start_date: NaiveDate, end_date: NaiveDate) -> Self {
        Self {
            start_date,
            end_date,
        }
    }
}

/// Query string of `GET /customers/{id}/rewards`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RewardsQuery {
    #[schema(example = "2025-08-01")]
    pub start_date: NaiveDate,
    #[schema(example = "2025-08-31")]
    pub end_date: NaiveDate,
}

impl From<RewardsQuery> for TimeFrame {
    fn from(q: RewardsQuery) -> Self {
        TimeFrame::new(q.start_date, q.end_date)
    }
}

/// One entry of the all-customers summary.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SummaryResponse {
    pub customer_id: i64,
    pub name: String,
    pub phone: String,
    pub transactions: Vec<TransactionRewardResponse>,
    /// "YYYY-MM" -> points
    pub monthly_rewards: BTreeMap<String, i64>,
    pub total_rewards: i64,
}

/// Rewards of one customer inside a date window.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RewardResponse {
    pub customer_id: i64,
    pub name: String,
    pub phone: String,
    pub transactions: Vec<TransactionRewardResponse>,
    pub monthly_rewards: BTreeMap<String, i64>,
    pub total_rewards: i64,
    pub time_frame: TimeFrame,
}
