//! Evidence records attached to a case.

use crate::address::PartyAddress;
use serde::{Deserialize, Serialize};

/// What kind of artifact a piece of evidence is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EvidenceKind {
    Document,
    Image,
}

/// Review state of a piece of evidence.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EvidenceStatus {
    Pending,
    Verified,
}

/// A piece of evidence submitted to a case.
///
/// `timestamp` and `hash` are display strings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Evidence {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: EvidenceKind,
    pub title: String,
    pub description: String,
    pub submitted_by: PartyAddress,
    pub timestamp: String,
    pub hash: String,
    pub status: EvidenceStatus,
}
