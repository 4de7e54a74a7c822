//! Fundamental types for the dispute resolution core.
//!
//! This crate defines the records shared across every other crate in the workspace:
//! cases and their status, party addresses, evidence, ballots, chat messages and
//! timestamps.

pub mod address;
pub mod case;
pub mod chat;
pub mod error;
pub mod evidence;
pub mod status;
pub mod time;
pub mod vote;

pub use address::PartyAddress;
pub use case::{Case, CaseDetail, CaseId, Parties, TimelineEntry};
pub use chat::ChatMessage;
pub use error::DisputeError;
pub use evidence::{Evidence, EvidenceKind, EvidenceStatus};
pub use status::{CaseStatus, StatusFilter};
pub use time::{Clock, SystemClock, Timestamp};
pub use vote::{Ballot, VoteTally};
