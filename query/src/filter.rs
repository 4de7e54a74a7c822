//! The filter/search evaluator.

use dispute_types::{Case, StatusFilter};

/// Which fields the query text is matched against.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SearchMode {
    /// Case-insensitive substring of the title.
    #[default]
    Title,
    /// Case-insensitive substring of the title, or verbatim substring of the id.
    TitleOrId,
}

/// A search over a case collection.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CaseQuery {
    text: String,
    needle: String,
    status: StatusFilter,
    mode: SearchMode,
}

impl CaseQuery {
    pub fn new(text: impl Into<String>, status: StatusFilter) -> Self {
        let text = text.into();
        let needle = text.to_lowercase();
        Self {
            text,
            needle,
            status,
            mode: SearchMode::Title,
        }
    }

    /// Matches every case.
    pub fn all() -> Self {
        Self::default()
    }

    pub fn with_mode(mut self, mode: SearchMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn status(&self) -> StatusFilter {
        self.status
    }

    pub fn mode(&self) -> SearchMode {
        self.mode
    }

    fn matches_text(&self, case: &Case) -> bool {
        if self.needle.is_empty() {
            return true;
        }
        let in_title = case.title.to_lowercase().contains(&self.needle);
        match self.mode {
            SearchMode::Title => in_title,
            SearchMode::TitleOrId => in_title || case.id.as_str().contains(self.text.as_str()),
        }
    }

    /// Whether `case` passes both the text and the status predicate.
    pub fn matches(&self, case: &Case) -> bool {
        self.status.admits(case.status) && self.matches_text(case)
    }

    /// The matching cases, in input order.
    pub fn apply(&self, cases: &[Case]) -> Vec<Case> {
        cases.iter().filter(|c| self.matches(c)).cloned().collect()
    }

    /// Like [`apply`](Self::apply) but borrowing from the input.
    pub fn apply_ref<'a>(&self, cases: &'a [Case]) -> Vec<&'a Case> {
        cases.iter().filter(|c| self.matches(c)).collect()
    }
}

/// Filter `cases` by title `query` and `status`, preserving order.
pub fn filter_cases(cases: &[Case], query: &str, status: StatusFilter) -> Vec<Case> {
    CaseQuery::new(query, status).apply(cases)
}

#[cfg(test)]
mod tests {
    use super::*;
    use dispute_types::{CaseId, CaseStatus, Parties};

    fn case(id: &str, title: &str, status: CaseStatus) -> Case {
        Case {
            id: CaseId::from(id),
            title: title.into(),
            status,
            created_at: "2024-03-15".into(),
            stake: "2.5 ETH".into(),
            parties: Parties {
                plaintiff: "0x1234...5678".into(),
                defendant: "0x8765...4321".into(),
            },
        }
    }

    fn sample() -> Vec<Case> {
        vec![
            case("1", "Smart Contract Dispute #123", CaseStatus::Pending),
            case("2", "NFT Ownership Dispute", CaseStatus::Active),
        ]
    }

    fn ids(cases: &[Case]) -> Vec<&str> {
        cases.iter().map(|c| c.id.as_str()).collect()
    }

    #[test]
    fn dispute_matches_both_in_order() {
        let result = filter_cases(&sample(), "dispute", StatusFilter::All);
        assert_eq!(ids(&result), ["1", "2"]);
    }

    #[test]
    fn status_mismatch_excludes_title_match() {
        let result = filter_cases(&sample(), "nft", CaseStatus::Pending.into());
        assert!(result.is_empty());
    }

    #[test]
    fn both_predicates_must_hold() {
        let result = filter_cases(&sample(), "nft", CaseStatus::Active.into());
        assert_eq!(ids(&result), ["2"]);
    }

    #[test]
    fn empty_query_matches_everything() {
        assert_eq!(filter_cases(&sample(), "", StatusFilter::All), sample());
    }

    #[test]
    fn query_is_case_insensitive() {
        let result = filter_cases(&sample(), "SMART contract", StatusFilter::All);
        assert_eq!(ids(&result), ["1"]);
    }

    #[test]
    fn no_match_is_empty_not_error() {
        assert!(filter_cases(&sample(), "escrow", StatusFilter::All).is_empty());
        assert!(filter_cases(&[], "anything", StatusFilter::All).is_empty());
    }

    #[test]
    fn title_mode_ignores_ids() {
        let cases = vec![case("CASE-9", "Escrow release", CaseStatus::Active)];
        let query = CaseQuery::new("CASE-9", StatusFilter::All);
        assert!(query.apply(&cases).is_empty());
        let by_either = query.with_mode(SearchMode::TitleOrId);
        assert_eq!(ids(&by_either.apply(&cases)), ["CASE-9"]);
    }

    #[test]
    fn title_or_id_mode_matches_ids_verbatim() {
        let cases = vec![
            case("CASE-7", "Payment Dispute #456", CaseStatus::Active),
            case("CASE-8", "Escrow release", CaseStatus::Active),
        ];
        let by_id = CaseQuery::new("CASE-8", StatusFilter::All).with_mode(SearchMode::TitleOrId);
        assert_eq!(ids(&by_id.apply(&cases)), ["CASE-8"]);

        // Ids are matched case-sensitively; titles are not.
        let lower = CaseQuery::new("case-8", StatusFilter::All).with_mode(SearchMode::TitleOrId);
        assert!(lower.apply(&cases).is_empty());

        let by_title = CaseQuery::new("#456", StatusFilter::All).with_mode(SearchMode::TitleOrId);
        assert_eq!(ids(&by_title.apply(&cases)), ["CASE-7"]);
    }

    #[test]
    fn title_or_id_still_applies_status() {
        let query = CaseQuery::new("1", CaseStatus::Active.into()).with_mode(SearchMode::TitleOrId);
        assert!(query.apply(&sample()).is_empty());
    }

    #[test]
    fn apply_ref_borrows_the_same_cases() {
        let cases = sample();
        let query = CaseQuery::new("ownership", StatusFilter::All);
        let borrowed = query.apply_ref(&cases);
        assert_eq!(borrowed.len(), 1);
        assert!(std::ptr::eq(borrowed[0], &cases[1]));
    }
}
