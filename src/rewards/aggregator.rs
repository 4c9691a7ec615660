use super::calculator::reward_points;
use crate::entities::transaction_entity;
use chrono::NaiveDate;
use std::collections::BTreeMap;

/// A stored transaction paired with the points it earns.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredTransaction {
    pub transaction: transaction_entity::Model,
    pub points: i64,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RewardTally {
    /// Same order as the input.
    pub transactions: Vec<ScoredTransaction>,
    /// Only months that actually have transactions get an entry.
    pub monthly_points: BTreeMap<String, i64>,
    pub total_points: i64,
}

/// Calendar month label, e.g. `2025-08`.
pub fn month_label(date: NaiveDate) -> String {
    date.format("%Y-%m").to_string()
}

/// Scores each transaction and sums the points per month and overall.
pub fn tally<I>(transactions: I) -> RewardTally
where
    I: IntoIterator<Item = transaction_entity::Model>,
{
    let mut result = RewardTally::default();

    for tx in transactions {
        let points = reward_points(tx.amount);
        result.total_points = result.total_points.saturating_add(points);

        let month = result.monthly_points.entry(month_label(tx.date)).or_insert(0);
        *month = month.saturating_add(points);

        result.transactions.push(ScoredTransaction {
            transaction: tx,
            points,
        });
    }

    result
}
