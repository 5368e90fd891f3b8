//! The item store: sole owner of `AppState`.
//!
//! [`ItemStore`] accepts [`Transition`]s, keeps a cached [`DerivedView`] in
//! step with the state and notifies subscribers after every dispatch that
//! changed something. Dispatch is synchronous; a listener always observes a
//! fully applied transition.
//!
//! # Example
//!
//! ```
//! use item_pager::app::{ItemStore, Transition};
//! use item_pager::Item;
//!
//! let mut store = ItemStore::new(5);
//! store.dispatch(Transition::FetchSuccess(vec![Item::new(1, "Bus"), Item::new(2, "Car")]));
//! store.dispatch(Transition::SetSearchTerm("car".into()));
//! assert_eq!(store.view().paginated, vec![Item::new(2, "Car")]);
//! ```

use super::derive;
use super::state::AppState;
use super::transitions::{Changes, Transition};
use crate::domain::Item;

/// Callback invoked with the new snapshot after a state-changing dispatch.
pub type Listener = Box<dyn FnMut(&AppState, &DerivedView)>;

/// Handle returned by [`ItemStore::subscribe`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Views derived from `AppState`, cached by the store.
///
/// Always equal to what [`derive`] computes from the current state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DerivedView {
    /// Items matching the search term, in list order.
    pub filtered: Vec<Item>,
    /// The part of `filtered` on the current page.
    pub paginated: Vec<Item>,
    /// Page count from the unfiltered item list.
    pub total_pages: usize,
}

impl DerivedView {
    /// Computes every derived value from scratch.
    #[must_use]
    pub fn compute(state: &AppState) -> Self {
        let filtered = derive::filtered_items(&state.items, &state.search_term);
        let paginated =
            derive::paginated_items(&filtered, state.current_page, state.items_per_page).to_vec();
        Self {
            filtered,
            paginated,
            total_pages: derive::total_pages(state.items.len(), state.items_per_page),
        }
    }

    fn refresh(&mut self, state: &AppState, changes: Changes) {
        let _span = tracing::debug_span!(
            "refresh_view",
            refilter = changes.affects_filter(),
            repage = changes.affects_page()
        )
        .entered();

        if changes.affects_filter() {
            self.filtered = derive::filtered_items(&state.items, &state.search_term);
        }
        if changes.items {
            self.total_pages = derive::total_pages(state.items.len(), state.items_per_page);
        }
        if changes.affects_page() {
            self.paginated =
                derive::paginated_items(&self.filtered, state.current_page, state.items_per_page)
                    .to_vec();
        }

        tracing::trace!(
            filtered_count = self.filtered.len(),
            page_count = self.paginated.len(),
            total_pages = self.total_pages,
            "view refreshed"
        );
    }
}

/// State container accepting only the defined transitions.
pub struct ItemStore {
    state: AppState,
    view: DerivedView,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_subscription: u64,
}

impl Default for ItemStore {
    fn default() -> Self {
        Self::from_state(AppState::default())
    }
}

impl ItemStore {
    /// Creates a store holding the initial state for the given page size.
    #[must_use]
    pub fn new(items_per_page: usize) -> Self {
        Self::from_state(AppState::new(items_per_page))
    }

    /// Creates a store around an existing state snapshot.
    ///
    /// Mostly useful for tests that need a preloaded state.
    #[must_use]
    pub fn from_state(state: AppState) -> Self {
        let view = DerivedView::compute(&state);
        Self {
            state,
            view,
            listeners: Vec::new(),
            next_subscription: 0,
        }
    }

    /// Current state snapshot.
    #[must_use]
    pub const fn state(&self) -> &AppState {
        &self.state
    }

    /// Cached derived views for the current state.
    #[must_use]
    pub const fn view(&self) -> &DerivedView {
        &self.view
    }

    /// Applies a transition and notifies subscribers if anything changed.
    ///
    /// Returns `true` when the state changed.
    pub fn dispatch(&mut self, transition: Transition) -> bool {
        let _span = tracing::debug_span!("dispatch", transition = transition.name()).entered();

        let changes = self.state.apply(transition);
        if !changes.any() {
            tracing::trace!("transition left state unchanged");
            return false;
        }

        self.view.refresh(&self.state, changes);

        for (_, listener) in &mut self.listeners {
            listener(&self.state, &self.view);
        }

        tracing::debug!(
            items = self.state.items.len(),
            current_page = self.state.current_page,
            loading = self.state.loading,
            has_error = self.state.error.is_some(),
            "state updated"
        );
        true
    }

    /// Registers a listener called after every state-changing dispatch.
    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut(&AppState, &DerivedView) + 'static,
    {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Removes a listener. Returns `false` if the id was unknown.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
        self.listeners.len() != before
    }
}

impl std::fmt::Debug for ItemStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ItemStore")
            .field("state", &self.state)
            .field("view", &self.view)
            .field("listeners", &self.listeners.len())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn fleet() -> Vec<Item> {
        ["Bus", "Car", "Bike", "Scooty", "Cycle"]
            .iter()
            .zip(1..)
            .map(|(name, id)| Item::new(id, *name))
            .collect()
    }

    #[test]
    fn cached_view_tracks_every_transition() {
        let mut store = ItemStore::new(2);
        let script = vec![
            Transition::FetchStart,
            Transition::FetchSuccess(fleet()),
            Transition::SetCurrentPage(2),
            Transition::SetSearchTerm("c".into()),
            Transition::SetCurrentPage(1),
            Transition::ClearSearchTerm,
            Transition::SetCurrentPage(9),
            Transition::FetchStart,
            Transition::FetchFailure("boom".into()),
            Transition::FetchSuccess(fleet()[..1].to_vec()),
        ];

        for transition in script {
            store.dispatch(transition);
            assert_eq!(store.view(), &DerivedView::compute(store.state()));
        }
    }

    #[test]
    fn subscribers_see_each_change() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut store = ItemStore::new(5);
        let sink = Rc::clone(&seen);
        store.subscribe(move |state, view| {
            sink.borrow_mut().push((state.loading, view.paginated.len()));
        });

        store.dispatch(Transition::FetchStart);
        store.dispatch(Transition::FetchSuccess(fleet()));

        assert_eq!(*seen.borrow(), vec![(true, 0), (false, 5)]);
    }

    #[test]
    fn no_op_dispatch_does_not_notify() {
        let calls = Rc::new(RefCell::new(0));
        let mut store = ItemStore::new(5);
        let counter = Rc::clone(&calls);
        store.subscribe(move |_, _| *counter.borrow_mut() += 1);

        assert!(!store.dispatch(Transition::ClearSearchTerm));
        assert!(!store.dispatch(Transition::SetCurrentPage(1)));
        assert_eq!(*calls.borrow(), 0);
    }

    #[test]
    fn unsubscribe_stops_notifications() {
        let calls = Rc::new(RefCell::new(0));
        let mut store = ItemStore::new(5);
        let counter = Rc::clone(&calls);
        let id = store.subscribe(move |_, _| *counter.borrow_mut() += 1);

        store.dispatch(Transition::SetSearchTerm("a".into()));
        assert!(store.unsubscribe(id));
        assert!(!store.unsubscribe(id));
        store.dispatch(Transition::SetSearchTerm("b".into()));

        assert_eq!(*calls.borrow(), 1);
    }

    #[test]
    fn total_pages_ignores_search_term() {
        let mut store = ItemStore::new(2);
        store.dispatch(Transition::FetchSuccess(fleet()));
        store.dispatch(Transition::SetSearchTerm("bike".into()));

        assert_eq!(store.view().filtered.len(), 1);
        assert_eq!(store.view().total_pages, 3);
    }
}
