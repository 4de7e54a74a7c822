//! Party address type.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An address-like identifier for a party or wallet, e.g. `0x1234...5678`.
///
/// Addresses are opaque: they are displayed as given and never validated.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PartyAddress(String);

impl PartyAddress {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Return the raw address string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PartyAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PartyAddress {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for PartyAddress {
    fn from(s: String) -> Self {
        Self(s)
    }
}
