//! Storage traits for dispute records.
//!
//! Every backend implements these traits and the rest of the workspace
//! depends only on the traits. Records live in memory for the lifetime of
//! the store that holds them; the only thing ever written to disk is a flag
//! (see [`FileFlagStore`]).

pub mod case;
pub mod chat;
pub mod error;
pub mod evidence;
pub mod flag;
pub mod memory;
pub mod vote;

pub use case::{next_numeric_id, CaseStore};
pub use chat::ChatStore;
pub use error::StoreError;
pub use evidence::EvidenceStore;
pub use flag::{FileFlagStore, FlagStore, MemoryFlagStore};
pub use memory::MemoryStore;
pub use vote::VoteStore;

/// Everything a dispute service needs from a record backend.
pub trait DisputeStore: CaseStore + EvidenceStore + VoteStore + ChatStore + Send + Sync {}

impl<T> DisputeStore for T where T: CaseStore + EvidenceStore + VoteStore + ChatStore + Send + Sync {}
