//! In-memory record store.

use crate::{CaseStore, ChatStore, EvidenceStore, StoreError, VoteStore};
use dispute_types::{
    Ballot, Case, CaseDetail, CaseId, ChatMessage, Evidence, PartyAddress, VoteTally,
};
use std::collections::{HashMap, HashSet};
use std::sync::{Mutex, MutexGuard};

/// Thread-safe in-memory store for cases and everything attached to them.
///
/// Each instance owns its own data; two stores never observe each other's writes.
pub struct MemoryStore {
    cases: Mutex<Vec<CaseDetail>>,
    evidence: Mutex<HashMap<CaseId, Vec<Evidence>>>,
    tallies: Mutex<HashMap<CaseId, VoteTally>>,
    voters: Mutex<HashMap<CaseId, HashSet<PartyAddress>>>,
    messages: Mutex<HashMap<CaseId, Vec<ChatMessage>>>,
}

fn lock<T>(mutex: &Mutex<T>) -> Result<MutexGuard<'_, T>, StoreError> {
    mutex
        .lock()
        .map_err(|e| StoreError::Backend(format!("lock poisoned: {e}")))
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            cases: Mutex::new(Vec::new()),
            evidence: Mutex::new(HashMap::new()),
            tallies: Mutex::new(HashMap::new()),
            voters: Mutex::new(HashMap::new()),
            messages: Mutex::new(HashMap::new()),
        }
    }

    fn ensure_case(&self, id: &CaseId) -> Result<(), StoreError> {
        if lock(&self.cases)?.iter().any(|detail| detail.id() == id) {
            Ok(())
        } else {
            Err(StoreError::NotFound(format!("case {id}")))
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl CaseStore for MemoryStore {
    fn list_cases(&self) -> Result<Vec<Case>, StoreError> {
        Ok(lock(&self.cases)?
            .iter()
            .map(|detail| detail.case.clone())
            .collect())
    }

    fn get_detail(&self, id: &CaseId) -> Result<CaseDetail, StoreError> {
        lock(&self.cases)?
            .iter()
            .find(|detail| detail.id() == id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(format!("case {id}")))
    }

    fn insert_case(&self, detail: &CaseDetail) -> Result<(), StoreError> {
        let mut cases = lock(&self.cases)?;
        if cases.iter().any(|existing| existing.id() == detail.id()) {
            return Err(StoreError::Duplicate(format!("case {}", detail.id())));
        }
        tracing::debug!(case = %detail.id(), "inserting case");
        cases.push(detail.clone());
        Ok(())
    }

    fn case_count(&self) -> Result<usize, StoreError> {
        Ok(lock(&self.cases)?.len())
    }
}

impl EvidenceStore for MemoryStore {
    fn list_evidence(&self, case: &CaseId) -> Result<Vec<Evidence>, StoreError> {
        self.ensure_case(case)?;
        Ok(lock(&self.evidence)?.get(case).cloned().unwrap_or_default())
    }

    fn add_evidence(&self, case: &CaseId, evidence: &Evidence) -> Result<(), StoreError> {
        self.ensure_case(case)?;
        tracing::debug!(case = %case, evidence = %evidence.id, "adding evidence");
        lock(&self.evidence)?
            .entry(case.clone())
            .or_default()
            .insert(0, evidence.clone());
        Ok(())
    }
}

impl VoteStore for MemoryStore {
    fn get_tally(&self, case: &CaseId) -> Result<VoteTally, StoreError> {
        self.ensure_case(case)?;
        Ok(lock(&self.tallies)?.get(case).copied().unwrap_or_default())
    }

    fn put_tally(&self, case: &CaseId, tally: VoteTally) -> Result<(), StoreError> {
        self.ensure_case(case)?;
        lock(&self.tallies)?.insert(case.clone(), tally);
        Ok(())
    }

    fn has_voted(&self, case: &CaseId, voter: &PartyAddress) -> Result<bool, StoreError> {
        self.ensure_case(case)?;
        Ok(lock(&self.voters)?
            .get(case)
            .is_some_and(|voters| voters.contains(voter)))
    }

    fn record_vote(
        &self,
        case: &CaseId,
        voter: &PartyAddress,
        ballot: Ballot,
    ) -> Result<VoteTally, StoreError> {
        self.ensure_case(case)?;
        // Voters before tallies, always.
        let mut voters = lock(&self.voters)?;
        let mut tallies = lock(&self.tallies)?;
        if !voters.entry(case.clone()).or_default().insert(voter.clone()) {
            return Err(StoreError::AlreadyVoted {
                case: case.to_string(),
                voter: voter.to_string(),
            });
        }
        let tally = tallies.entry(case.clone()).or_default();
        tally.record(ballot);
        tracing::debug!(case = %case, %ballot, "vote recorded");
        Ok(*tally)
    }
}

impl ChatStore for MemoryStore {
    fn list_messages(&self, case: &CaseId) -> Result<Vec<ChatMessage>, StoreError> {
        self.ensure_case(case)?;
        Ok(lock(&self.messages)?.get(case).cloned().unwrap_or_default())
    }

    fn add_message(&self, case: &CaseId, message: &ChatMessage) -> Result<(), StoreError> {
        self.ensure_case(case)?;
        lock(&self.messages)?
            .entry(case.clone())
            .or_default()
            .insert(0, message.clone());
        Ok(())
    }
}
