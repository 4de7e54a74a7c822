//! Case status and the status selector used when listing cases.
//!
//! Statuses are assigned once, when a case is recorded, and never transition
//! programmatically.

use crate::error::DisputeError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The status of a dispute case.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CaseStatus {
    /// Filed, awaiting an arbitrator.
    Pending,
    /// Under review.
    Active,
    /// A ruling has been issued.
    Resolved,
    /// Archived.
    Closed,
}

impl CaseStatus {
    /// Every status, in display order.
    pub const ALL: [CaseStatus; 4] = [
        CaseStatus::Pending,
        CaseStatus::Active,
        CaseStatus::Resolved,
        CaseStatus::Closed,
    ];

    /// Upper-case display name (`PENDING`, `ACTIVE`, ...).
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::Active => "ACTIVE",
            Self::Resolved => "RESOLVED",
            Self::Closed => "CLOSED",
        }
    }
}

impl fmt::Display for CaseStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for CaseStatus {
    type Err = DisputeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| DisputeError::InvalidStatus(s.to_string()))
    }
}

/// Status selector for case listings: everything, or exactly one status.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum StatusFilter {
    #[default]
    All,
    Only(CaseStatus),
}

impl StatusFilter {
    /// All selectors in the order a filter bar shows them.
    pub const CHOICES: [StatusFilter; 5] = [
        StatusFilter::All,
        StatusFilter::Only(CaseStatus::Pending),
        StatusFilter::Only(CaseStatus::Active),
        StatusFilter::Only(CaseStatus::Resolved),
        StatusFilter::Only(CaseStatus::Closed),
    ];

    /// Whether a case with `status` passes this selector.
    pub fn admits(&self, status: CaseStatus) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => *wanted == status,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::All => "ALL",
            Self::Only(status) => status.as_str(),
        }
    }
}

impl From<CaseStatus> for StatusFilter {
    fn from(status: CaseStatus) -> Self {
        Self::Only(status)
    }
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for StatusFilter {
    type Err = DisputeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(Self::All);
        }
        s.parse::<CaseStatus>().map(Self::Only)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_parses_case_insensitively() {
        assert_eq!("pending".parse::<CaseStatus>(), Ok(CaseStatus::Pending));
        assert_eq!("Resolved".parse::<CaseStatus>(), Ok(CaseStatus::Resolved));
        assert_eq!(" CLOSED ".parse::<CaseStatus>(), Ok(CaseStatus::Closed));
    }

    #[test]
    fn unknown_status_is_rejected() {
        let err = "ARCHIVED".parse::<CaseStatus>().unwrap_err();
        assert_eq!(err, DisputeError::InvalidStatus("ARCHIVED".into()));
    }

    #[test]
    fn filter_parses_all_and_single_statuses() {
        assert_eq!("all".parse::<StatusFilter>(), Ok(StatusFilter::All));
        assert_eq!(
            "active".parse::<StatusFilter>(),
            Ok(StatusFilter::Only(CaseStatus::Active))
        );
        assert!("everything".parse::<StatusFilter>().is_err());
    }

    #[test]
    fn all_admits_every_status() {
        for status in CaseStatus::ALL {
            assert!(StatusFilter::All.admits(status));
        }
    }

    #[test]
    fn only_admits_exactly_one_status() {
        let filter = StatusFilter::Only(CaseStatus::Pending);
        assert!(filter.admits(CaseStatus::Pending));
        assert!(!filter.admits(CaseStatus::Active));
        assert!(!filter.admits(CaseStatus::Resolved));
        assert!(!filter.admits(CaseStatus::Closed));
    }

    #[test]
    fn status_serializes_upper_case() {
        let json = serde_json::to_string(&CaseStatus::Resolved).unwrap();
        assert_eq!(json, "\"RESOLVED\"");
    }

    #[test]
    fn filter_choices_start_with_all() {
        let names: Vec<_> = StatusFilter::CHOICES.iter().map(|f| f.as_str()).collect();
        assert_eq!(names, ["ALL", "PENDING", "ACTIVE", "RESOLVED", "CLOSED"]);
    }
}
