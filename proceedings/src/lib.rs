//! Case proceedings.
//!
//! The rules applied when users act on a case (submitting evidence, voting,
//! chatting, filing a new case) and the records shown on the arbitrator and
//! dashboard views. Everything here is synchronous and storage-agnostic; the
//! service crate wires it to a store.

pub mod arbitrator;
pub mod chat;
pub mod dashboard;
pub mod error;
pub mod evidence;
pub mod filing;
pub mod voting;

pub use arbitrator::{ArbitratorCase, ArbitratorStats, Complexity};
pub use chat::{compose_message, LOCAL_SENDER};
pub use dashboard::{Activity, ActivityKind, DashboardSummary, Profile};
pub use error::ProceedingsError;
pub use evidence::{
    evidence_hash, prepare_evidence, short_hash, CaseEvidence, EvidenceCounts, EvidenceRepository,
};
pub use filing::CaseDraft;
pub use voting::VoteSummary;
