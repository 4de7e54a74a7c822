use proptest::prelude::*;

use dispute_query::{filter_cases, CaseQuery, SearchMode};
use dispute_types::{Case, CaseId, CaseStatus, Parties, StatusFilter};

fn arb_status() -> impl Strategy<Value = CaseStatus> {
    prop::sample::select(CaseStatus::ALL.to_vec())
}

fn arb_filter() -> impl Strategy<Value = StatusFilter> {
    prop::sample::select(StatusFilter::CHOICES.to_vec())
}

/// Titles drawn from a small alphabet so random queries actually hit.
fn arb_cases() -> impl Strategy<Value = Vec<Case>> {
    prop::collection::vec(("[a-cA-C #0-9]{0,12}", arb_status()), 0..24).prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(i, (title, status))| Case {
                id: CaseId::new((i + 1).to_string()),
                title,
                status,
                created_at: "2024-03-15".into(),
                stake: "1.0 ETH".into(),
                parties: Parties {
                    plaintiff: "0xaaaa".into(),
                    defendant: "0xbbbb".into(),
                },
            })
            .collect()
    })
}

fn is_subsequence(sub: &[Case], full: &[Case]) -> bool {
    let mut rest = full.iter();
    sub.iter().all(|wanted| rest.any(|c| c == wanted))
}

proptest! {
    /// Empty query with ALL returns the collection unchanged.
    #[test]
    fn empty_query_all_is_identity(cases in arb_cases()) {
        prop_assert_eq!(filter_cases(&cases, "", StatusFilter::All), cases);
    }

    /// Every result satisfies both predicates.
    #[test]
    fn results_satisfy_predicates(cases in arb_cases(), query in "[a-cA-C #]{0,3}", filter in arb_filter()) {
        for case in filter_cases(&cases, &query, filter) {
            prop_assert!(case.title.to_lowercase().contains(&query.to_lowercase()));
            prop_assert!(filter == StatusFilter::All || filter == StatusFilter::Only(case.status));
        }
    }

    /// Nothing that satisfies both predicates is dropped.
    #[test]
    fn results_are_complete(cases in arb_cases(), query in "[a-cA-C #]{0,3}", filter in arb_filter()) {
        let result = filter_cases(&cases, &query, filter);
        let expected = cases
            .iter()
            .filter(|c| c.title.to_lowercase().contains(&query.to_lowercase()) && filter.admits(c.status))
            .count();
        prop_assert_eq!(result.len(), expected);
    }

    /// The result is an order-preserving subsequence of the input.
    #[test]
    fn results_preserve_order(cases in arb_cases(), query in "[a-c]{0,2}", filter in arb_filter()) {
        let result = filter_cases(&cases, &query, filter);
        prop_assert!(is_subsequence(&result, &cases));
    }

    /// Filtering twice with the same query gives the same sequence.
    #[test]
    fn filtering_is_idempotent(cases in arb_cases(), query in "[a-cA-C #]{0,3}", filter in arb_filter()) {
        let once = filter_cases(&cases, &query, filter);
        let twice = filter_cases(&once, &query, filter);
        prop_assert_eq!(twice, once);
    }

    /// Matching by title or id never returns fewer cases than matching by title.
    #[test]
    fn title_or_id_is_a_superset(cases in arb_cases(), query in "[a-c0-9]{0,2}", filter in arb_filter()) {
        let by_title = CaseQuery::new(query.clone(), filter).apply(&cases);
        let by_either = CaseQuery::new(query, filter).with_mode(SearchMode::TitleOrId).apply(&cases);
        prop_assert!(is_subsequence(&by_title, &by_either));
    }
}
