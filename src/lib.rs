//! Item pager: a Zellij plugin that fetches a list of named items from a JSON
//! endpoint and lets you filter them by name and page through the results.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Zellij Plugin Shim (main.rs)                       │  ← keys, web_request
//! └─────────────────────────────────────────────────────┘
//!                        │ Event / Action
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │
//! │  - ItemStore: state + transitions + cached views    │
//! │  - Derivation: filter, paginate, total pages        │
//! │  - Interaction handlers and key events              │
//! └─────────────────────────────────────────────────────┘
//!         │                                     │
//! ┌───────────────────┐               ┌───────────────────┐
//! │ Fetch (fetch/)    │               │ UI (ui/)          │
//! │ - request ids     │               │ - view model      │
//! │ - response → items│               │ - ANSI components │
//! └───────────────────┘               └───────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain (domain/), Infrastructure, Observability    │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Configuration
//!
//! ```kdl
//! pane {
//!     plugin location="file:/path/to/item-pager.wasm" {
//!         endpoint "https://example.com/items.json"
//!         items_per_page "5"
//!         theme "catppuccin-mocha"
//!         trace_level "info"
//!     }
//! }
//! ```
//!
//! # Lifecycle
//!
//! 1. `load`: parse [`Config`], start tracing, [`initialize`] a session,
//!    request `WebAccess`.
//! 2. Permission granted: [`Event::Startup`] issues the one initial fetch.
//! 3. `WebRequestResult`: mapped to [`Event::FetchCompleted`], which lands in
//!    the store as success or failure.
//! 4. Keys: search and paging events go through the interaction handlers.
//! 5. `render`: the session is projected into a view model and drawn.
//!
//! # Example
//!
//! ```
//! use item_pager::fetch::FetchOutcome;
//! use item_pager::{handle_event, initialize, Config, Event, Item};
//!
//! let mut session = initialize(&Config { items_per_page: 2, ..Config::default() });
//! handle_event(&mut session, &Event::Startup)?;
//!
//! let request_id = session.fetcher.in_flight().unwrap();
//! let items = vec![Item::new(1, "Bus"), Item::new(2, "Car"), Item::new(3, "Bike")];
//! handle_event(
//!     &mut session,
//!     &Event::FetchCompleted { request_id, outcome: FetchOutcome::Success(items) },
//! )?;
//!
//! assert_eq!(session.store.view().paginated.len(), 2);
//! assert_eq!(session.store.view().total_pages, 2);
//! # Ok::<(), item_pager::PagerError>(())
//! ```

#![allow(clippy::multiple_crate_versions)]

pub mod app;
pub mod domain;
pub mod fetch;
pub mod infrastructure;
pub mod observability;
pub mod ui;

pub use app::{handle_event, Action, AppState, Event, InputMode, ItemStore, Session};
pub use domain::{Item, PagerError, Result};
pub use ui::Theme;

use app::DEFAULT_ITEMS_PER_PAGE;
use std::collections::BTreeMap;

/// Endpoint used when none is configured.
pub const DEFAULT_ENDPOINT: &str = "https://run.mocky.io/v3/30dc1bfc-018d-478b-a94d-f3b42755091e";

/// Plugin configuration parsed from Zellij's KDL plugin block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// URL answering `GET` with a JSON array of `{ "id", "name" }` records.
    pub endpoint: String,

    /// Items per page, never zero. Default: 5
    pub items_per_page: usize,

    /// Built-in theme name. Ignored if `theme_file` is set.
    ///
    /// Options: `catppuccin-mocha`, `catppuccin-frappe`, `catppuccin-latte`.
    pub theme_name: Option<String>,

    /// Path to a custom TOML theme; `~` maps to the sandbox host mount.
    pub theme_file: Option<String>,

    /// `EnvFilter` directive for tracing. Default: `"info"`
    pub trace_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            items_per_page: DEFAULT_ITEMS_PER_PAGE,
            theme_name: None,
            theme_file: None,
            trace_level: None,
        }
    }
}

impl Config {
    /// Parses configuration from Zellij's configuration map.
    ///
    /// Unknown keys are ignored. An invalid `items_per_page` is logged and
    /// replaced by the default; a blank `endpoint` keeps the default URL.
    ///
    /// # Example
    ///
    /// ```
    /// use std::collections::BTreeMap;
    /// use item_pager::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("items_per_page".to_string(), "10".to_string());
    /// map.insert("theme".to_string(), "catppuccin-latte".to_string());
    ///
    /// let config = Config::from_zellij(&map);
    /// assert_eq!(config.items_per_page, 10);
    /// assert_eq!(config.theme_name.as_deref(), Some("catppuccin-latte"));
    /// ```
    #[must_use]
    pub fn from_zellij(config: &BTreeMap<String, String>) -> Self {
        let endpoint = config
            .get("endpoint")
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .map_or_else(|| DEFAULT_ENDPOINT.to_string(), String::from);

        let items_per_page = config.get("items_per_page").map_or(
            DEFAULT_ITEMS_PER_PAGE,
            |raw| {
                Self::parse_items_per_page(raw).unwrap_or_else(|e| {
                    tracing::warn!(error = %e, "using default items_per_page");
                    DEFAULT_ITEMS_PER_PAGE
                })
            },
        );

        Self {
            endpoint,
            items_per_page,
            theme_name: config.get("theme").cloned(),
            theme_file: config.get("theme_file").cloned(),
            trace_level: config.get("trace_level").cloned(),
        }
    }

    /// Parses a positive page size.
    ///
    /// # Errors
    ///
    /// Returns [`PagerError::Config`] for non-numbers and for zero.
    pub fn parse_items_per_page(raw: &str) -> Result<usize> {
        match raw.trim().parse::<usize>() {
            Ok(0) => Err(PagerError::Config(
                "items_per_page must be at least 1".to_string(),
            )),
            Ok(n) => Ok(n),
            Err(e) => Err(PagerError::Config(format!(
                "items_per_page {raw:?} is not a number: {e}"
            ))),
        }
    }

    /// Resolves the theme: `theme_file` first, then `theme`, then the default.
    /// Failures are logged and fall through to the default.
    #[must_use]
    pub fn load_theme(&self) -> Theme {
        if let Some(theme_file) = &self.theme_file {
            let path = infrastructure::expand_tilde(theme_file);
            match Theme::from_file(&path) {
                Ok(theme) => return theme,
                Err(e) => {
                    tracing::warn!(theme_file = %path, error = %e, "failed to load theme file, using default");
                }
            }
        } else if let Some(theme_name) = &self.theme_name {
            match Theme::from_name(theme_name) {
                Some(theme) => return theme,
                None => tracing::warn!(theme_name = %theme_name, "unknown theme, using default"),
            }
        }
        Theme::default()
    }
}

/// Creates the plugin session: themed, empty, with no fetch issued yet.
///
/// The initial fetch waits for [`Event::Startup`], which the shim sends once
/// Zellij grants network access.
#[must_use]
pub fn initialize(config: &Config) -> Session {
    tracing::debug!(endpoint = %config.endpoint, items_per_page = config.items_per_page, "initializing item pager");
    Session::new(config, config.load_theme())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn map(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn empty_map_gives_defaults() {
        assert_eq!(Config::from_zellij(&BTreeMap::new()), Config::default());
    }

    #[test]
    fn reads_all_keys() {
        let config = Config::from_zellij(&map(&[
            ("endpoint", " https://example.com/items "),
            ("items_per_page", "3"),
            ("theme", "catppuccin-frappe"),
            ("theme_file", "~/dusk.toml"),
            ("trace_level", "debug"),
        ]));

        assert_eq!(config.endpoint, "https://example.com/items");
        assert_eq!(config.items_per_page, 3);
        assert_eq!(config.theme_name.as_deref(), Some("catppuccin-frappe"));
        assert_eq!(config.theme_file.as_deref(), Some("~/dusk.toml"));
        assert_eq!(config.trace_level.as_deref(), Some("debug"));
    }

    #[test]
    fn invalid_page_size_falls_back() {
        for raw in ["0", "-2", "many", ""] {
            let config = Config::from_zellij(&map(&[("items_per_page", raw)]));
            assert_eq!(config.items_per_page, DEFAULT_ITEMS_PER_PAGE, "{raw:?}");
        }
        assert!(matches!(
            Config::parse_items_per_page("0"),
            Err(PagerError::Config(_))
        ));
    }

    #[test]
    fn blank_endpoint_keeps_default() {
        let config = Config::from_zellij(&map(&[("endpoint", "  ")]));
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
    }

    #[test]
    fn theme_resolution_order() {
        let named = Config {
            theme_name: Some("catppuccin-latte".into()),
            ..Config::default()
        };
        assert_eq!(named.load_theme().name, "catppuccin-latte");

        let unknown = Config {
            theme_name: Some("nope".into()),
            ..Config::default()
        };
        assert_eq!(unknown.load_theme(), Theme::default());

        let mut file = tempfile::NamedTempFile::new().unwrap();
        let custom = include_str!("../themes/catppuccin-mocha.toml")
            .replace("catppuccin-mocha", "custom");
        file.write_all(custom.as_bytes()).unwrap();

        let from_file = Config {
            theme_name: Some("catppuccin-latte".into()),
            theme_file: Some(file.path().to_string_lossy().into_owned()),
            ..Config::default()
        };
        assert_eq!(from_file.load_theme().name, "custom");
    }

    #[test]
    fn initialize_starts_idle() {
        let session = initialize(&Config::default());

        assert!(!session.store.state().loading);
        assert!(session.fetcher.in_flight().is_none());
        assert_eq!(session.store.state().items_per_page, DEFAULT_ITEMS_PER_PAGE);
    }
}
