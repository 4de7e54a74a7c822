//! Case search and status filtering.
//!
//! Filtering is a pure function of (query text, status selector, collection):
//! a case is kept when its title contains the query as a case-insensitive
//! substring AND its status passes the selector. Input order is preserved and
//! an empty query matches everything. There are no error conditions.

pub mod filter;

pub use filter::{filter_cases, CaseQuery, SearchMode};
