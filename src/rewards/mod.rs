//! Reward arithmetic.
//!
//! Points are always derived from the stored `amount` at read time; nothing in
//! this module touches the database.

pub mod aggregator;
pub mod assembler;
pub mod calculator;

pub use aggregator::{RewardTally, ScoredTransaction, month_label, tally};
pub use assembler::{AggregateView, assemble, ranged_view, summary_view};
pub use calculator::reward_points;
