//! Ballots and vote tallies.

use crate::error::DisputeError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A vote on a case.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Ballot {
    For,
    Against,
}

impl Ballot {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::For => "for",
            Self::Against => "against",
        }
    }
}

impl fmt::Display for Ballot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Ballot {
    type Err = DisputeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "for" | "yes" => Ok(Self::For),
            "against" | "no" => Ok(Self::Against),
            _ => Err(DisputeError::InvalidBallot(s.to_string())),
        }
    }
}

/// Running vote counts for a case.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoteTally {
    #[serde(rename = "for")]
    pub votes_for: u32,
    #[serde(rename = "against")]
    pub votes_against: u32,
}

impl VoteTally {
    pub fn new(votes_for: u32, votes_against: u32) -> Self {
        Self {
            votes_for,
            votes_against,
        }
    }

    pub fn total(&self) -> u32 {
        self.votes_for.saturating_add(self.votes_against)
    }

    /// Count one more ballot.
    pub fn record(&mut self, ballot: Ballot) {
        match ballot {
            Ballot::For => self.votes_for = self.votes_for.saturating_add(1),
            Ballot::Against => self.votes_against = self.votes_against.saturating_add(1),
        }
    }

    /// Share of `for` votes in basis points (e.g. 6666 = 66.66%); 0 with no votes.
    pub fn for_share_bps(&self) -> u32 {
        let total = self.total() as u64;
        if total == 0 {
            return 0;
        }
        ((self.votes_for as u64 * 10_000) / total) as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_increments_the_chosen_side() {
        let mut tally = VoteTally::new(10, 5);
        tally.record(Ballot::For);
        assert_eq!(tally, VoteTally::new(11, 5));
        tally.record(Ballot::Against);
        assert_eq!(tally, VoteTally::new(11, 6));
        assert_eq!(tally.total(), 17);
    }

    #[test]
    fn share_of_empty_tally_is_zero() {
        assert_eq!(VoteTally::default().for_share_bps(), 0);
    }

    #[test]
    fn share_is_in_basis_points() {
        assert_eq!(VoteTally::new(10, 5).for_share_bps(), 6666);
        assert_eq!(VoteTally::new(3, 0).for_share_bps(), 10_000);
    }

    #[test]
    fn ballot_parses_aliases() {
        assert_eq!("FOR".parse::<Ballot>(), Ok(Ballot::For));
        assert_eq!("no".parse::<Ballot>(), Ok(Ballot::Against));
        assert!("maybe".parse::<Ballot>().is_err());
    }

    #[test]
    fn tally_serializes_as_for_and_against() {
        let json = serde_json::to_value(VoteTally::new(10, 5)).unwrap();
        assert_eq!(json, serde_json::json!({ "for": 10, "against": 5 }));
    }
}
