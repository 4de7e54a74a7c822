//! Nullable store that fails every operation.
//!
//! Stands in for a backend that is down, so callers' failure paths can be tested.

use dispute_store::{
    CaseStore, ChatStore, EvidenceStore, FlagStore, StoreError, VoteStore,
};
use dispute_types::{
    Ballot, Case, CaseDetail, CaseId, ChatMessage, Evidence, PartyAddress, VoteTally,
};

/// A store whose every call returns [`StoreError::Backend`].
#[derive(Clone, Debug)]
pub struct FailingStore {
    reason: String,
}

impl FailingStore {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }

    fn fail<T>(&self) -> Result<T, StoreError> {
        Err(StoreError::Backend(self.reason.clone()))
    }
}

impl Default for FailingStore {
    fn default() -> Self {
        Self::new("backend unavailable")
    }
}

impl CaseStore for FailingStore {
    fn list_cases(&self) -> Result<Vec<Case>, StoreError> {
        self.fail()
    }

    fn get_detail(&self, _id: &CaseId) -> Result<CaseDetail, StoreError> {
        self.fail()
    }

    fn insert_case(&self, _detail: &CaseDetail) -> Result<(), StoreError> {
        self.fail()
    }
}

impl EvidenceStore for FailingStore {
    fn list_evidence(&self, _case: &CaseId) -> Result<Vec<Evidence>, StoreError> {
        self.fail()
    }

    fn add_evidence(&self, _case: &CaseId, _evidence: &Evidence) -> Result<(), StoreError> {
        self.fail()
    }
}

impl VoteStore for FailingStore {
    fn get_tally(&self, _case: &CaseId) -> Result<VoteTally, StoreError> {
        self.fail()
    }

    fn put_tally(&self, _case: &CaseId, _tally: VoteTally) -> Result<(), StoreError> {
        self.fail()
    }

    fn has_voted(&self, _case: &CaseId, _voter: &PartyAddress) -> Result<bool, StoreError> {
        self.fail()
    }

    fn record_vote(
        &self,
        _case: &CaseId,
        _voter: &PartyAddress,
        _ballot: Ballot,
    ) -> Result<VoteTally, StoreError> {
        self.fail()
    }
}

impl ChatStore for FailingStore {
    fn list_messages(&self, _case: &CaseId) -> Result<Vec<ChatMessage>, StoreError> {
        self.fail()
    }

    fn add_message(&self, _case: &CaseId, _message: &ChatMessage) -> Result<(), StoreError> {
        self.fail()
    }
}

impl FlagStore for FailingStore {
    fn get_flag(&self, _key: &str) -> Result<Option<String>, StoreError> {
        self.fail()
    }

    fn set_flag(&self, _key: &str, _value: &str) -> Result<(), StoreError> {
        self.fail()
    }

    fn remove_flag(&self, _key: &str) -> Result<(), StoreError> {
        self.fail()
    }
}
