//! Records shown on the dashboard and profile views.

use dispute_types::PartyAddress;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ActivityKind {
    CaseCreated,
    EvidenceSubmitted,
    CaseResolved,
    StakeAdded,
}

/// One entry of the recent-activity feed. `age` is display text (`2h ago`).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    pub id: u32,
    #[serde(rename = "type")]
    pub kind: ActivityKind,
    pub message: String,
    pub age: String,
}

/// Headline numbers and recent activity.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub active_cases: usize,
    pub pending_evidence: usize,
    pub total_staked: String,
    pub recent_activity: Vec<Activity>,
}

/// The connected user's profile card.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub address: PartyAddress,
    pub ens_name: String,
    pub total_cases: u32,
    pub reputation: f32,
    pub joined_date: String,
}
