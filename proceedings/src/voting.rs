//! Vote display.

use dispute_types::VoteTally;
use serde::Serialize;

/// What the voting view shows for a case.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VoteSummary {
    #[serde(flatten)]
    pub tally: VoteTally,
    /// Whether the current wallet has already voted on this case.
    pub has_voted: bool,
    pub for_share_bps: u32,
}

impl VoteSummary {
    pub fn new(tally: VoteTally, has_voted: bool) -> Self {
        Self {
            tally,
            has_voted,
            for_share_bps: tally.for_share_bps(),
        }
    }

    /// `for` share as a percentage with one decimal, e.g. `66.6%`.
    pub fn for_percent(&self) -> String {
        format!("{}.{}%", self.for_share_bps / 100, (self.for_share_bps % 100) / 10)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percent_rounds_down_to_one_decimal() {
        let summary = VoteSummary::new(VoteTally::new(10, 5), false);
        assert_eq!(summary.for_share_bps, 6666);
        assert_eq!(summary.for_percent(), "66.6%");
        assert_eq!(VoteSummary::new(VoteTally::default(), false).for_percent(), "0.0%");
        assert_eq!(VoteSummary::new(VoteTally::new(1, 0), true).for_percent(), "100.0%");
    }

    #[test]
    fn serializes_flat() {
        let json = serde_json::to_value(VoteSummary::new(VoteTally::new(10, 5), true)).unwrap();
        assert_eq!(json["for"], 10);
        assert_eq!(json["against"], 5);
        assert_eq!(json["hasVoted"], true);
        assert_eq!(json["forShareBps"], 6666);
    }
}
