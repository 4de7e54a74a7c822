//! Vote storage trait.

use crate::StoreError;
use dispute_types::{Ballot, CaseId, PartyAddress, VoteTally};

pub trait VoteStore {
    /// Current tally for a case. A case nobody has voted on has a zero tally.
    fn get_tally(&self, case: &CaseId) -> Result<VoteTally, StoreError>;

    /// Overwrite the tally of a case (used when loading seed data).
    fn put_tally(&self, case: &CaseId, tally: VoteTally) -> Result<(), StoreError>;

    fn has_voted(&self, case: &CaseId, voter: &PartyAddress) -> Result<bool, StoreError>;

    /// Count `ballot` for `voter` and return the new tally.
    ///
    /// A second vote by the same voter on the same case fails with
    /// [`StoreError::AlreadyVoted`] and leaves the tally untouched.
    fn record_vote(
        &self,
        case: &CaseId,
        voter: &PartyAddress,
        ballot: Ballot,
    ) -> Result<VoteTally, StoreError>;
}
