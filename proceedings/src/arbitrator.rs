//! Records shown on the arbitrator view.

use dispute_types::CaseId;
use dispute_utils::format_duration;
use serde::{Deserialize, Serialize};

/// An arbitrator's track record. Amounts are display strings.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArbitratorStats {
    pub total_cases: u32,
    pub active_cases: u32,
    pub completed_cases: u32,
    /// Percentage, 0..=100.
    pub success_rate: u8,
    pub staked_amount: String,
    pub earnings: String,
}

/// How much work a case is expected to be.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Complexity {
    Low,
    Medium,
    High,
}

/// A pending case offered to the arbitrator for review.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArbitratorCase {
    pub id: CaseId,
    pub title: String,
    pub amount: String,
    pub created: String,
    pub description: String,
    pub complexity: Complexity,
    /// Seconds until the review window closes.
    pub time_left_secs: u64,
}

impl ArbitratorCase {
    /// Remaining review time, e.g. `2d 0h`.
    pub fn time_left(&self) -> String {
        format_duration(self.time_left_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn time_left_is_human_readable() {
        let case = ArbitratorCase {
            id: CaseId::from("2"),
            title: "Payment Dispute #456".into(),
            amount: "1.2 ETH".into(),
            created: "2024-03-14".into(),
            description: "Payment settlement dispute for services rendered".into(),
            complexity: Complexity::High,
            time_left_secs: 24 * 3600,
        };
        assert_eq!(case.time_left(), "1d 0h");
    }
}
