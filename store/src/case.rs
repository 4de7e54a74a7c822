//! Case storage trait.

use crate::StoreError;
use dispute_types::{Case, CaseDetail, CaseId};

/// Trait for case storage operations.
///
/// Listings preserve insertion order. Records are never updated in place.
pub trait CaseStore {
    /// All cases, in the order they were inserted.
    fn list_cases(&self) -> Result<Vec<Case>, StoreError>;

    /// The full record for one case.
    fn get_detail(&self, id: &CaseId) -> Result<CaseDetail, StoreError>;

    /// Append a new case. Fails with [`StoreError::Duplicate`] if the id is taken.
    fn insert_case(&self, detail: &CaseDetail) -> Result<(), StoreError>;

    fn get_case(&self, id: &CaseId) -> Result<Case, StoreError> {
        self.get_detail(id).map(|detail| detail.case)
    }

    fn exists(&self, id: &CaseId) -> Result<bool, StoreError> {
        match self.get_detail(id) {
            Ok(_) => Ok(true),
            Err(StoreError::NotFound(_)) => Ok(false),
            Err(e) => Err(e),
        }
    }

    fn case_count(&self) -> Result<usize, StoreError> {
        self.list_cases().map(|cases| cases.len())
    }

    /// One past the largest numeric id in the store (`"1"` when there is none).
    ///
    /// Ids that are not decimal numbers are ignored.
    fn next_case_id(&self) -> Result<CaseId, StoreError> {
        let cases = self.list_cases()?;
        next_numeric_id(cases.iter().map(|case| case.id.as_str())).map(CaseId::new)
    }
}

/// One past the largest decimal id among `ids` (`"1"` when there is none).
///
/// Fails with [`StoreError::Exhausted`] when the largest id is `u64::MAX`.
pub fn next_numeric_id<'a>(
    ids: impl IntoIterator<Item = &'a str>,
) -> Result<String, StoreError> {
    let max = ids
        .into_iter()
        .filter_map(|id| id.parse::<u64>().ok())
        .max()
        .unwrap_or(0);
    max.checked_add(1)
        .map(|next| next.to_string())
        .ok_or_else(|| StoreError::Exhausted(max.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_id_is_one_past_the_largest_number() {
        assert_eq!(next_numeric_id(std::iter::empty()).unwrap(), "1");
        assert_eq!(next_numeric_id(["1", "7", "x", "3"]).unwrap(), "8");
    }

    #[test]
    fn next_id_after_u64_max_is_exhausted() {
        let max = u64::MAX.to_string();
        let err = next_numeric_id(["3", max.as_str()]).unwrap_err();
        assert!(matches!(err, StoreError::Exhausted(ref last) if *last == max));
    }
}
