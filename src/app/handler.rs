//! Interaction handlers and event dispatch.
//!
//! The three interaction handlers ([`on_search_change`], [`on_clear_search`],
//! [`on_page_select`]) are the only way user input reaches the store. Both
//! search handlers reset the page to 1 unconditionally, so the view never
//! points at a page of a stale filter.
//!
//! [`handle_event`] maps keyboard-level [`Event`]s and fetch completions onto
//! those handlers and the fetch controller, returning whether to re-render and
//! which side effects to run.
//!
//! # Example
//!
//! ```
//! use item_pager::app::{handle_event, Event, Session};
//! use item_pager::{Config, Theme};
//!
//! let mut session = Session::new(&Config::default(), Theme::default());
//! let (render, actions) = handle_event(&mut session, &Event::Startup)?;
//! assert!(render);
//! assert_eq!(actions.len(), 1);
//! # Ok::<(), item_pager::PagerError>(())
//! ```

use super::modes::InputMode;
use super::session::Session;
use super::store::ItemStore;
use super::transitions::Transition;
use super::Action;
use crate::domain::error::Result;
use crate::fetch::{FetchOutcome, FetchRequest};

/// Events produced by the plugin shim from keys and host callbacks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// The plugin may now reach the network; issue the initial fetch.
    Startup,
    /// Re-fetch the item list. Ignored while a fetch is in flight.
    Refresh,
    /// A fetch finished.
    FetchCompleted {
        /// Id of the request this answers.
        request_id: u64,
        /// What came back.
        outcome: FetchOutcome,
    },

    /// Items cannot be fetched at all (e.g. network access denied).
    FetchUnavailable(String),

    /// Enters search mode.
    SearchMode,
    /// Appends a character to the search term (search mode only).
    Char(char),
    /// Removes the last character of the search term (search mode only).
    Backspace,
    /// Leaves search mode keeping the term.
    Submit,
    /// Clears the search term and returns to normal mode.
    Escape,
    /// Clears the search term without changing mode.
    ClearSearch,

    /// Goes to the next page, if there is one.
    NextPage,
    /// Goes to the previous page, if there is one.
    PrevPage,
    /// Jumps to a page offered by the page controls.
    SelectPage(usize),

    /// Hides the plugin pane.
    CloseFocus,
}

/// Sets the search term and resets the page to 1.
///
/// Returns `true` if the store changed.
pub fn on_search_change(store: &mut ItemStore, term: String) -> bool {
    let term_changed = store.dispatch(Transition::SetSearchTerm(term));
    let page_changed = store.dispatch(Transition::SetCurrentPage(1));
    term_changed || page_changed
}

/// Clears the search term and resets the page to 1.
///
/// Returns `true` if the store changed.
pub fn on_clear_search(store: &mut ItemStore) -> bool {
    let term_changed = store.dispatch(Transition::ClearSearchTerm);
    let page_changed = store.dispatch(Transition::SetCurrentPage(1));
    term_changed || page_changed
}

/// Moves to `page`. Pages come from the rendered controls, so no clamping.
///
/// Returns `true` if the store changed.
pub fn on_page_select(store: &mut ItemStore, page: usize) -> bool {
    store.dispatch(Transition::SetCurrentPage(page))
}

/// Processes an event, mutates the session, and returns actions to execute.
///
/// The returned flag tells the runtime whether the pane must be redrawn.
///
/// # Errors
///
/// Currently infallible; the `Result` leaves room for handlers that touch
/// fallible resources.
pub fn handle_event(session: &mut Session, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    match event {
        Event::Startup => {
            let request = session.fetcher.start_once(&mut session.store);
            Ok(fetch_actions(request))
        }
        Event::Refresh => {
            let request = session.fetcher.begin(&mut session.store);
            Ok(fetch_actions(request))
        }
        Event::FetchCompleted {
            request_id,
            outcome,
        } => {
            let applied = session
                .fetcher
                .complete(&mut session.store, *request_id, outcome.clone());
            Ok((applied, vec![]))
        }
        Event::FetchUnavailable(reason) => {
            let changed = session
                .fetcher
                .fail_unavailable(&mut session.store, reason.clone());
            Ok((changed, vec![]))
        }
        Event::SearchMode => {
            tracing::debug!("entering search mode");
            session.input_mode = InputMode::Search;
            Ok((true, vec![]))
        }
        Event::Char(c) => {
            if session.input_mode != InputMode::Search {
                return Ok((false, vec![]));
            }
            let mut term = session.store.state().search_term.clone();
            term.push(*c);
            tracing::trace!(term = %term, "search term updated");
            Ok((on_search_change(&mut session.store, term), vec![]))
        }
        Event::Backspace => {
            if session.input_mode != InputMode::Search {
                return Ok((false, vec![]));
            }
            let mut term = session.store.state().search_term.clone();
            if term.pop().is_none() {
                return Ok((false, vec![]));
            }
            Ok((on_search_change(&mut session.store, term), vec![]))
        }
        Event::Submit => {
            if session.input_mode != InputMode::Search {
                return Ok((false, vec![]));
            }
            session.input_mode = InputMode::Normal;
            Ok((true, vec![]))
        }
        Event::Escape => {
            tracing::debug!(term = %session.store.state().search_term, "clearing search");
            let was_searching = session.input_mode == InputMode::Search;
            session.input_mode = InputMode::Normal;
            let cleared = on_clear_search(&mut session.store);
            Ok((was_searching || cleared, vec![]))
        }
        Event::ClearSearch => Ok((on_clear_search(&mut session.store), vec![])),
        Event::NextPage => {
            let current = session.store.state().current_page;
            if current >= session.store.view().total_pages {
                return Ok((false, vec![]));
            }
            Ok((on_page_select(&mut session.store, current + 1), vec![]))
        }
        Event::PrevPage => {
            let current = session.store.state().current_page;
            if current <= 1 {
                return Ok((false, vec![]));
            }
            Ok((on_page_select(&mut session.store, current - 1), vec![]))
        }
        Event::SelectPage(page) => {
            if !(1..=session.store.view().total_pages).contains(page) {
                tracing::debug!(page = page, "page not offered, ignoring");
                return Ok((false, vec![]));
            }
            Ok((on_page_select(&mut session.store, *page), vec![]))
        }
        Event::CloseFocus => Ok((false, vec![Action::CloseFocus])),
    }
}

fn fetch_actions(request: Option<FetchRequest>) -> (bool, Vec<Action>) {
    request.map_or_else(
        || (false, vec![]),
        |request| (true, vec![Action::FetchItems(request)]),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Item;
    use crate::ui::Theme;
    use crate::Config;

    fn loaded_session(per_page: usize) -> Session {
        let config = Config {
            items_per_page: per_page,
            ..Config::default()
        };
        let mut session = Session::new(&config, Theme::default());
        let (_, actions) = handle_event(&mut session, &Event::Startup).unwrap();
        let Some(Action::FetchItems(request)) = actions.first() else {
            panic!("startup must request a fetch");
        };
        let items = ["Bus", "Car", "Bike", "Scooty", "Cycle"]
            .iter()
            .zip(1..)
            .map(|(name, id)| Item::new(id, *name))
            .collect();
        handle_event(
            &mut session,
            &Event::FetchCompleted {
                request_id: request.id,
                outcome: FetchOutcome::Success(items),
            },
        )
        .unwrap();
        session
    }

    fn type_term(session: &mut Session, term: &str) {
        handle_event(session, &Event::SearchMode).unwrap();
        for c in term.chars() {
            handle_event(session, &Event::Char(c)).unwrap();
        }
    }

    #[test]
    fn search_change_resets_page() {
        let mut store = ItemStore::new(2);
        store.dispatch(Transition::SetCurrentPage(3));

        assert!(on_search_change(&mut store, "car".into()));

        assert_eq!(store.state().search_term, "car");
        assert_eq!(store.state().current_page, 1);
    }

    #[test]
    fn clear_search_resets_page_even_when_term_is_empty() {
        let mut store = ItemStore::new(2);
        store.dispatch(Transition::SetCurrentPage(2));

        assert!(on_clear_search(&mut store));

        assert_eq!(store.state().current_page, 1);
        assert!(!on_clear_search(&mut store));
    }

    #[test]
    fn page_select_does_not_touch_search() {
        let mut store = ItemStore::new(2);
        on_search_change(&mut store, "b".into());

        on_page_select(&mut store, 2);

        assert_eq!(store.state().search_term, "b");
        assert_eq!(store.state().current_page, 2);
    }

    #[test]
    fn startup_fetches_only_once() {
        let mut session = loaded_session(3);
        let (render, actions) = handle_event(&mut session, &Event::Startup).unwrap();
        assert!(!render);
        assert!(actions.is_empty());
    }

    #[test]
    fn refresh_is_ignored_while_loading() {
        let mut session = loaded_session(3);
        let (_, first) = handle_event(&mut session, &Event::Refresh).unwrap();
        let (_, second) = handle_event(&mut session, &Event::Refresh).unwrap();
        assert_eq!(first.len(), 1);
        assert!(second.is_empty());
    }

    #[test]
    fn typing_filters_and_resets_page() {
        let mut session = loaded_session(3);
        handle_event(&mut session, &Event::NextPage).unwrap();
        assert_eq!(session.store.state().current_page, 2);

        type_term(&mut session, "cy");

        assert_eq!(session.store.state().current_page, 1);
        assert_eq!(session.store.view().paginated, vec![Item::new(5, "Cycle")]);
    }

    #[test]
    fn chars_are_ignored_outside_search_mode() {
        let mut session = loaded_session(3);
        let (render, _) = handle_event(&mut session, &Event::Char('x')).unwrap();
        assert!(!render);
        assert!(session.store.state().search_term.is_empty());
    }

    #[test]
    fn backspace_edits_term() {
        let mut session = loaded_session(3);
        type_term(&mut session, "cx");
        assert!(session.store.view().filtered.is_empty());

        handle_event(&mut session, &Event::Backspace).unwrap();

        assert_eq!(session.store.state().search_term, "c");
        assert_eq!(session.store.view().filtered.len(), 3);
    }

    #[test]
    fn escape_clears_and_leaves_search_mode() {
        let mut session = loaded_session(3);
        type_term(&mut session, "bus");

        let (render, _) = handle_event(&mut session, &Event::Escape).unwrap();

        assert!(render);
        assert_eq!(session.input_mode, InputMode::Normal);
        assert!(session.store.state().search_term.is_empty());
    }

    #[test]
    fn submit_keeps_term() {
        let mut session = loaded_session(3);
        type_term(&mut session, "bus");

        handle_event(&mut session, &Event::Submit).unwrap();

        assert_eq!(session.input_mode, InputMode::Normal);
        assert_eq!(session.store.state().search_term, "bus");
    }

    #[test]
    fn paging_stays_within_offered_pages() {
        let mut session = loaded_session(3);

        assert!(!handle_event(&mut session, &Event::PrevPage).unwrap().0);
        assert!(handle_event(&mut session, &Event::NextPage).unwrap().0);
        assert!(!handle_event(&mut session, &Event::NextPage).unwrap().0);
        assert_eq!(session.store.state().current_page, 2);

        assert!(!handle_event(&mut session, &Event::SelectPage(3)).unwrap().0);
        assert!(handle_event(&mut session, &Event::SelectPage(1)).unwrap().0);
        assert_eq!(session.store.state().current_page, 1);
    }

    #[test]
    fn close_focus_emits_action() {
        let mut session = loaded_session(3);
        let (render, actions) = handle_event(&mut session, &Event::CloseFocus).unwrap();
        assert!(!render);
        assert_eq!(actions, vec![Action::CloseFocus]);
    }

    #[test]
    fn denied_network_access_shows_an_error_instead_of_an_empty_list() {
        let mut session = Session::new(&Config::default(), Theme::default());

        let (render, actions) = handle_event(
            &mut session,
            &Event::FetchUnavailable("Web access denied".into()),
        )
        .unwrap();

        assert!(render);
        assert!(actions.is_empty());
        assert_eq!(session.store.state().error.as_deref(), Some("Web access denied"));
        let status = session.compute_viewmodel(24, 80).status.unwrap();
        assert_eq!(status.message, "Error: Web access denied");
    }
}
