//! Zellij plugin wrapper and entry point.
//!
//! A thin layer between the `item_pager` library and Zellij: it translates
//! Zellij events into library [`Event`](item_pager::Event)s, runs
//! [`handle_event`](item_pager::handle_event), and executes the returned
//! actions against the host API.
//!
//! # Plugin Lifecycle
//!
//! 1. **Load**: parse config, initialize tracing, create the session
//! 2. **Permissions**: request `WebAccess`; once granted, send `Startup`
//! 3. **Fetch**: `FetchItems` becomes a `web_request`; the answer comes back
//!    as `WebRequestResult` tagged with the request id
//! 4. **Update**: keys become library events
//! 5. **Render**: draw the session
//!
//! # Keybindings
//!
//! Normal mode:
//! - `n` / `l` / `Right`: Next page
//! - `p` / `h` / `Left`: Previous page
//! - `1`-`9`: Jump to page
//! - `/`: Search
//! - `c`: Clear search
//! - `r`: Refetch
//! - `Esc`: Clear search
//! - `q`: Close plugin
//!
//! Search mode:
//! - Characters: Type into the search term
//! - `Backspace`: Delete last character
//! - `Enter`: Keep term, back to normal mode
//! - `Esc`: Clear term, back to normal mode

#![allow(clippy::multiple_crate_versions)]

#[cfg(target_arch = "wasm32")]
use zellij_tile::prelude::*;

#[cfg(target_arch = "wasm32")]
use plugin::State;

#[cfg(target_arch = "wasm32")]
register_plugin!(State);

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    eprintln!("item-pager is a Zellij plugin; build it for wasm32-wasip1 and load it from a layout");
}

#[cfg(target_arch = "wasm32")]
mod plugin {
    use std::collections::BTreeMap;
    use zellij_tile::prelude::*;

    use item_pager::fetch::{FetchOutcome, FetchRequest, REQUEST_ID_KEY};
    use item_pager::{handle_event, Action, Config, Event, InputMode, Session};

    /// Plugin state wrapper around the library session.
    pub struct State {
        session: Session,
    }

    impl Default for State {
        fn default() -> Self {
            Self {
                session: item_pager::initialize(&Config::default()),
            }
        }
    }

    impl ZellijPlugin for State {
        /// Parses configuration, builds the session, requests `WebAccess` and
        /// subscribes to keys, web results and the permission answer.
        fn load(&mut self, configuration: BTreeMap<String, String>) {
            let config = Config::from_zellij(&configuration);
            item_pager::observability::init_tracing(&config);

            let _guard = tracing::debug_span!("plugin_load").entered();

            tracing::debug!(endpoint = %config.endpoint, "parsed configuration");
            self.session = item_pager::initialize(&config);

            request_permission(&[PermissionType::WebAccess]);
            subscribe(&[
                EventType::Key,
                EventType::WebRequestResult,
                EventType::PermissionRequestResult,
            ]);

            tracing::debug!("plugin load complete - waiting for permissions");
        }

        /// Translates a Zellij event, runs the handler, executes actions.
        ///
        /// Returns `true` if the pane should re-render.
        fn update(&mut self, event: zellij_tile::prelude::Event) -> bool {
            let event_name = event_name(&event);
            let _guard = tracing::debug_span!(
                "plugin_update_event",
                otel.name = %format!("plugin_update::{event_name}"),
                event_type = %event_name
            )
            .entered();

            let our_event = match event {
                zellij_tile::prelude::Event::Key(ref key) => match self.map_key_event(key) {
                    Some(event) => event,
                    None => return false,
                },
                zellij_tile::prelude::Event::WebRequestResult(status, _headers, body, context) => {
                    match map_web_result(status, &body, &context) {
                        Some(event) => event,
                        None => return false,
                    }
                }
                zellij_tile::prelude::Event::PermissionRequestResult(PermissionStatus::Granted) => {
                    tracing::debug!("web access granted");
                    Event::Startup
                }
                zellij_tile::prelude::Event::PermissionRequestResult(PermissionStatus::Denied) => {
                    tracing::warn!("web access denied - items cannot be fetched");
                    Event::FetchUnavailable("Web access denied".to_string())
                }
                _ => return false,
            };

            match handle_event(&mut self.session, &our_event) {
                Ok((should_render, actions)) => {
                    tracing::debug!(
                        action_count = actions.len(),
                        should_render = should_render,
                        "event handled"
                    );
                    for action in &actions {
                        execute_action(action);
                    }
                    should_render
                }
                Err(e) => {
                    tracing::error!(error = %e, "error handling event");
                    false
                }
            }
        }

        fn render(&mut self, rows: usize, cols: usize) {
            item_pager::ui::render(&self.session, rows, cols);
        }
    }

    impl State {
        /// Maps keyboard events to library events for the current mode.
        fn map_key_event(&self, key: &KeyWithModifier) -> Option<Event> {
            tracing::trace!(bare_key = ?key.bare_key, "key event");

            if key.has_modifiers(&[KeyModifier::Ctrl]) || key.has_modifiers(&[KeyModifier::Alt]) {
                return None;
            }

            match self.session.input_mode {
                InputMode::Search => Some(match key.bare_key {
                    BareKey::Esc => Event::Escape,
                    BareKey::Enter => Event::Submit,
                    BareKey::Backspace => Event::Backspace,
                    BareKey::Char(c) => Event::Char(c),
                    _ => return None,
                }),
                InputMode::Normal => Some(match key.bare_key {
                    BareKey::Char('/') => Event::SearchMode,
                    BareKey::Char('n' | 'l') | BareKey::Right => Event::NextPage,
                    BareKey::Char('p' | 'h') | BareKey::Left => Event::PrevPage,
                    BareKey::Char(c @ '1'..='9') => {
                        Event::SelectPage(c.to_digit(10).map_or(1, |d| d as usize))
                    }
                    BareKey::Char('c') => Event::ClearSearch,
                    BareKey::Char('r') => Event::Refresh,
                    BareKey::Char('q') => Event::CloseFocus,
                    BareKey::Esc => Event::Escape,
                    _ => return None,
                }),
            }
        }
    }

    /// Maps a web request answer to `FetchCompleted`, if it is ours.
    fn map_web_result(
        status: u16,
        body: &[u8],
        context: &BTreeMap<String, String>,
    ) -> Option<Event> {
        let Some(request_id) = context
            .get(REQUEST_ID_KEY)
            .and_then(|id| id.parse::<u64>().ok())
        else {
            tracing::debug!(status = status, "web result without request id, ignoring");
            return None;
        };

        let outcome = FetchOutcome::from_response(status, body);
        tracing::debug!(
            request_id = request_id,
            status = status,
            success = outcome.is_success(),
            "web request result"
        );
        Some(Event::FetchCompleted {
            request_id,
            outcome,
        })
    }

    /// Translates library actions to Zellij API calls.
    #[tracing::instrument(level = "debug")]
    fn execute_action(action: &Action) {
        match action {
            Action::CloseFocus => hide_self(),
            Action::FetchItems(FetchRequest { id, url }) => {
                let context = BTreeMap::from([(REQUEST_ID_KEY.to_string(), id.to_string())]);
                let headers =
                    BTreeMap::from([("Accept".to_string(), "application/json".to_string())]);
                web_request(url, HttpVerb::Get, headers, vec![], context);
            }
        }
    }

    /// Short event name for span labels.
    fn event_name(event: &zellij_tile::prelude::Event) -> String {
        match event {
            zellij_tile::prelude::Event::Key(key) => format!("Key({:?})", key.bare_key),
            zellij_tile::prelude::Event::WebRequestResult(status, ..) => {
                format!("WebRequestResult({status})")
            }
            zellij_tile::prelude::Event::PermissionRequestResult(..) => {
                "PermissionRequestResult".to_string()
            }
            _ => "Other".to_string(),
        }
    }
}
