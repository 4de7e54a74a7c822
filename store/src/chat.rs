//! Chat storage trait.

use crate::StoreError;
use dispute_types::{CaseId, ChatMessage};

pub trait ChatStore {
    /// Messages for a case, newest first.
    fn list_messages(&self, case: &CaseId) -> Result<Vec<ChatMessage>, StoreError>;

    /// Put `message` at the front of the case's thread.
    fn add_message(&self, case: &CaseId, message: &ChatMessage) -> Result<(), StoreError>;
}
