use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::nodes::NodeItem;

/// Inclusive date bounds for a search; either end may be open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DateRange {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

/// Active search filters.
///
/// The default value is the canonical empty-filter literal: empty sets, open
/// date range, no owner. `clear` resets to exactly this value.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SearchFilters {
    pub document_types: BTreeSet<String>,
    pub tags: BTreeSet<String>,
    pub date_range: DateRange,
    pub owner: Option<String>,
}

impl SearchFilters {
    /// True when no filter is active.
    pub fn is_empty(&self) -> bool {
        self == &SearchFilters::default()
    }
}

/// Partial update for [`SearchFilters`].
///
/// `None` fields are left untouched; `Some` fields replace the current value.
/// For `owner`, the outer option selects whether to touch the field and the
/// inner option is the new value, so `Some(None)` clears the owner filter.
#[derive(Debug, Clone, Default)]
pub struct SearchFilterUpdate {
    pub document_types: Option<BTreeSet<String>>,
    pub tags: Option<BTreeSet<String>>,
    pub date_range: Option<DateRange>,
    pub owner: Option<Option<String>>,
}

/// Search slice.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SearchState {
    pub query: String,
    pub results: Vec<NodeItem>,
    pub is_searching: bool,
    pub filters: SearchFilters,
}

impl SearchState {
    pub fn set_query(&mut self, query: String) {
        self.query = query;
    }

    pub fn set_searching(&mut self, searching: bool) {
        self.is_searching = searching;
    }

    /// Replace the result list. Results arriving ends the in-flight state.
    pub fn set_results(&mut self, results: Vec<NodeItem>) {
        self.results = results;
        self.is_searching = false;
    }

    /// Shallow-merge the provided filter keys, preserving the others.
    pub fn apply_filter_update(&mut self, update: SearchFilterUpdate) {
        if let Some(document_types) = update.document_types {
            self.filters.document_types = document_types;
        }
        if let Some(tags) = update.tags {
            self.filters.tags = tags;
        }
        if let Some(date_range) = update.date_range {
            self.filters.date_range = date_range;
        }
        if let Some(owner) = update.owner {
            self.filters.owner = owner;
        }
    }

    /// Reset filters to the canonical empty-filter literal.
    pub fn clear_filters(&mut self) {
        self.filters = SearchFilters::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn test_filter_update_merges_only_provided_keys() {
        let mut search = SearchState::default();
        search.apply_filter_update(SearchFilterUpdate {
            document_types: Some(BTreeSet::from(["invoice".to_string()])),
            owner: Some(Some("u1".to_string())),
            date_range: Some(DateRange {
                start: Some(date("2026-01-01")),
                end: None,
            }),
            ..Default::default()
        });

        search.apply_filter_update(SearchFilterUpdate {
            tags: Some(BTreeSet::from(["x".to_string()])),
            ..Default::default()
        });

        assert_eq!(
            search.filters.document_types,
            BTreeSet::from(["invoice".to_string()])
        );
        assert_eq!(search.filters.tags, BTreeSet::from(["x".to_string()]));
        assert_eq!(search.filters.owner.as_deref(), Some("u1"));
        assert_eq!(search.filters.date_range.start, Some(date("2026-01-01")));
    }

    #[test]
    fn test_filter_update_some_none_clears_owner() {
        let mut search = SearchState::default();
        search.apply_filter_update(SearchFilterUpdate {
            owner: Some(Some("u1".to_string())),
            ..Default::default()
        });
        assert!(search.filters.owner.is_some());

        search.apply_filter_update(SearchFilterUpdate {
            owner: Some(None),
            ..Default::default()
        });
        assert!(search.filters.owner.is_none());
    }

    #[test]
    fn test_empty_update_touches_nothing() {
        let mut search = SearchState::default();
        search.apply_filter_update(SearchFilterUpdate {
            tags: Some(BTreeSet::from(["a".to_string()])),
            ..Default::default()
        });
        let before = search.filters.clone();

        search.apply_filter_update(SearchFilterUpdate::default());

        assert_eq!(search.filters, before);
    }

    #[test]
    fn test_clear_filters_resets_to_empty_literal() {
        let mut search = SearchState::default();
        search.apply_filter_update(SearchFilterUpdate {
            document_types: Some(BTreeSet::from(["contract".to_string()])),
            tags: Some(BTreeSet::from(["legal".to_string()])),
            date_range: Some(DateRange {
                start: Some(date("2025-06-01")),
                end: Some(date("2025-12-31")),
            }),
            owner: Some(Some("u2".to_string())),
        });
        assert!(!search.filters.is_empty());

        search.clear_filters();

        assert_eq!(search.filters, SearchFilters::default());
        assert!(search.filters.is_empty());
    }

    #[test]
    fn test_set_results_clears_in_flight_flag() {
        let mut search = SearchState::default();
        search.set_searching(true);

        search.set_results(Vec::new());

        assert!(!search.is_searching);
    }
}
