//! Evidence storage trait.

use crate::StoreError;
use dispute_types::{CaseId, Evidence};

pub trait EvidenceStore {
    /// Evidence for a case, newest first.
    fn list_evidence(&self, case: &CaseId) -> Result<Vec<Evidence>, StoreError>;

    /// Put `evidence` at the front of the case's list.
    fn add_evidence(&self, case: &CaseId, evidence: &Evidence) -> Result<(), StoreError>;
}
