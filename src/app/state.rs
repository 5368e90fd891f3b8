//! Application state and its transition function.
//!
//! [`AppState`] is the single source of truth for the item list, the search
//! term, pagination and the fetch status. It is owned by the
//! [`ItemStore`](super::store::ItemStore) and only changes through
//! [`AppState::apply`].
//!
//! # Invariants
//!
//! - `current_page` is never 0.
//! - `items_per_page` is never 0.
//! - A failed fetch leaves `items` untouched; a started fetch clears `error`.
//!
//! Filtered and paginated views are not stored here. They are derived on
//! demand by [`derive`](super::derive).

use super::transitions::{Changes, Transition};
use crate::domain::Item;

/// Number of items shown per page when the configuration does not say.
pub const DEFAULT_ITEMS_PER_PAGE: usize = 5;

/// Central application state container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    /// Full item list from the last successful fetch, in endpoint order.
    pub items: Vec<Item>,

    /// Case-insensitive substring filter applied to item names.
    pub search_term: String,

    /// 1-based page index into the filtered list.
    pub current_page: usize,

    /// Page size. Fixed for the lifetime of the state.
    pub items_per_page: usize,

    /// `true` only while a fetch is in flight.
    pub loading: bool,

    /// Message of the last failed fetch, cleared when the next one starts.
    pub error: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(DEFAULT_ITEMS_PER_PAGE)
    }
}

impl AppState {
    /// Creates the initial state: no items, empty search, page 1, idle.
    ///
    /// A page size of 0 falls back to [`DEFAULT_ITEMS_PER_PAGE`].
    ///
    /// # Example
    ///
    /// ```
    /// use item_pager::AppState;
    ///
    /// let state = AppState::new(3);
    /// assert_eq!(state.current_page, 1);
    /// assert_eq!(state.items_per_page, 3);
    /// assert!(!state.loading);
    /// ```
    #[must_use]
    pub fn new(items_per_page: usize) -> Self {
        let items_per_page = if items_per_page == 0 {
            tracing::debug!("items_per_page of 0 requested, using default");
            DEFAULT_ITEMS_PER_PAGE
        } else {
            items_per_page
        };

        Self {
            items: Vec::new(),
            search_term: String::new(),
            current_page: 1,
            items_per_page,
            loading: false,
            error: None,
        }
    }

    /// Applies a transition in place and reports which fields changed.
    ///
    /// # Example
    ///
    /// ```
    /// use item_pager::app::Transition;
    /// use item_pager::AppState;
    ///
    /// let mut state = AppState::default();
    /// let changes = state.apply(Transition::FetchFailure("Network Error".into()));
    /// assert!(changes.status);
    /// assert_eq!(state.error.as_deref(), Some("Network Error"));
    /// assert!(state.items.is_empty());
    /// ```
    pub fn apply(&mut self, transition: Transition) -> Changes {
        let mut changes = Changes::default();

        match transition {
            Transition::FetchStart => {
                changes.status = !self.loading || self.error.is_some();
                self.loading = true;
                self.error = None;
            }
            Transition::FetchSuccess(items) => {
                changes.status = self.loading;
                changes.items = self.items != items;
                self.loading = false;
                self.items = items;
            }
            Transition::FetchFailure(message) => {
                changes.status = self.loading || self.error.as_deref() != Some(message.as_str());
                self.loading = false;
                self.error = Some(message);
            }
            Transition::SetSearchTerm(term) => {
                changes.search_term = self.search_term != term;
                self.search_term = term;
            }
            Transition::ClearSearchTerm => {
                changes.search_term = !self.search_term.is_empty();
                self.search_term.clear();
            }
            Transition::SetCurrentPage(page) => {
                let page = if page == 0 {
                    tracing::debug!("page 0 requested, using page 1");
                    1
                } else {
                    page
                };
                changes.current_page = self.current_page != page;
                self.current_page = page;
            }
        }

        changes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vehicles() -> Vec<Item> {
        vec![Item::new(1, "Bus"), Item::new(2, "Car")]
    }

    #[test]
    fn fetch_start_sets_loading_and_clears_error() {
        let mut state = AppState::default();
        state.error = Some("old".into());
        state.items = vehicles();

        state.apply(Transition::FetchStart);

        assert!(state.loading);
        assert!(state.error.is_none());
        assert_eq!(state.items, vehicles());
    }

    #[test]
    fn fetch_success_replaces_items_and_keeps_search_and_page() {
        let mut state = AppState::default();
        state.items = vec![Item::new(9, "Old")];
        state.search_term = "b".into();
        state.current_page = 3;
        state.apply(Transition::FetchStart);

        let changes = state.apply(Transition::FetchSuccess(vehicles()));

        assert!(changes.items);
        assert!(!state.loading);
        assert!(state.error.is_none());
        assert_eq!(state.items, vehicles());
        assert_eq!(state.search_term, "b");
        assert_eq!(state.current_page, 3);
    }

    #[test]
    fn fetch_failure_keeps_items() {
        let mut state = AppState::default();
        state.items = vehicles();
        state.apply(Transition::FetchStart);

        state.apply(Transition::FetchFailure("Network Error".into()));

        assert!(!state.loading);
        assert_eq!(state.error.as_deref(), Some("Network Error"));
        assert_eq!(state.items, vehicles());
    }

    #[test]
    fn clear_search_term_is_idempotent() {
        let mut state = AppState::default();
        state.apply(Transition::SetSearchTerm("car".into()));

        state.apply(Transition::ClearSearchTerm);
        let once = state.clone();
        let changes = state.apply(Transition::ClearSearchTerm);

        assert_eq!(state, once);
        assert!(!changes.any());
    }

    #[test]
    fn set_current_page_accepts_out_of_range_pages() {
        let mut state = AppState::default();
        state.apply(Transition::SetCurrentPage(42));
        assert_eq!(state.current_page, 42);
    }

    #[test]
    fn set_current_page_zero_becomes_one() {
        let mut state = AppState::default();
        state.apply(Transition::SetCurrentPage(4));
        state.apply(Transition::SetCurrentPage(0));
        assert_eq!(state.current_page, 1);
    }

    #[test]
    fn zero_page_size_falls_back_to_default() {
        assert_eq!(AppState::new(0).items_per_page, DEFAULT_ITEMS_PER_PAGE);
    }
}
