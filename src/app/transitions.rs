//! The closed set of state transitions accepted by the item store.
//!
//! Every mutation of [`AppState`](super::state::AppState) goes through one of
//! these variants. Applying a transition is a pure function of the previous
//! state and the payload; see [`AppState::apply`](super::state::AppState::apply).

use crate::domain::Item;

/// A named state update applied to `AppState`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    /// A fetch has been issued: `loading` goes up and any old error is cleared.
    FetchStart,

    /// The fetch returned items. Replaces the whole list and drops `loading`.
    FetchSuccess(Vec<Item>),

    /// The fetch failed. Drops `loading` and records the message; items stay.
    FetchFailure(String),

    /// Replaces the search term.
    SetSearchTerm(String),

    /// Resets the search term to empty.
    ClearSearchTerm,

    /// Moves to the given 1-based page. Not clamped to the page count.
    SetCurrentPage(usize),
}

impl Transition {
    /// Short name used in log fields.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::FetchStart => "fetch_start",
            Self::FetchSuccess(_) => "fetch_success",
            Self::FetchFailure(_) => "fetch_failure",
            Self::SetSearchTerm(_) => "set_search_term",
            Self::ClearSearchTerm => "clear_search_term",
            Self::SetCurrentPage(_) => "set_current_page",
        }
    }
}

/// Which parts of `AppState` a transition actually modified.
///
/// Returned by `AppState::apply` so the store can skip recomputing derived
/// views and notifying subscribers when nothing moved.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Changes {
    /// `items` was replaced with a different list.
    pub items: bool,
    /// `search_term` changed value.
    pub search_term: bool,
    /// `current_page` changed value.
    pub current_page: bool,
    /// `loading` or `error` changed value.
    pub status: bool,
}

impl Changes {
    /// Returns `true` if any field changed.
    #[must_use]
    pub const fn any(self) -> bool {
        self.items || self.search_term || self.current_page || self.status
    }

    /// Returns `true` if the filtered list must be recomputed.
    #[must_use]
    pub const fn affects_filter(self) -> bool {
        self.items || self.search_term
    }

    /// Returns `true` if the current page slice must be recomputed.
    #[must_use]
    pub const fn affects_page(self) -> bool {
        self.affects_filter() || self.current_page
    }
}
