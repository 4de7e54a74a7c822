//! Case records.

use crate::address::PartyAddress;
use crate::status::CaseStatus;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque unique identifier of a case within a collection.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CaseId(String);

impl CaseId {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CaseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

impl From<&str> for CaseId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for CaseId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// The two sides of a dispute.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parties {
    pub plaintiff: PartyAddress,
    pub defendant: PartyAddress,
}

/// A dispute case as shown in listings.
///
/// `created_at` and `stake` are display strings: they are never parsed,
/// validated or used in arithmetic.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Case {
    pub id: CaseId,
    pub title: String,
    pub status: CaseStatus,
    pub created_at: String,
    pub stake: String,
    pub parties: Parties,
}

/// One line of a case's history.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineEntry {
    pub date: String,
    pub event: String,
}

impl TimelineEntry {
    pub fn new(date: impl Into<String>, event: impl Into<String>) -> Self {
        Self {
            date: date.into(),
            event: event.into(),
        }
    }
}

/// A case together with its summary and timeline, as shown on the detail view.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseDetail {
    #[serde(flatten)]
    pub case: Case,
    pub summary: String,
    pub timeline: Vec<TimelineEntry>,
}

impl CaseDetail {
    pub fn id(&self) -> &CaseId {
        &self.case.id
    }
}
