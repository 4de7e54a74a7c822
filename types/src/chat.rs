//! Case chat messages.

use serde::{Deserialize, Serialize};

/// A message in a case's discussion thread.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: String,
    pub sender: String,
    pub text: String,
    pub timestamp: String,
}
