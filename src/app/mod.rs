//! Application layer coordinating state, events, and actions.
//!
//! Sits between the plugin shim (main.rs) and the domain, fetch and UI layers.
//! Data flows one way:
//!
//! ```text
//! Keys / HTTP results → Event → handle_event → Transition → ItemStore
//!                                    │                         │
//!                                    ▼                         ▼
//!                                 Actions                DerivedView → UI
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effects emitted by the event handler
//! - [`derive`]: Pure filtering and pagination
//! - [`handler`]: Interaction handlers and event dispatch
//! - [`modes`]: Keyboard input modes
//! - [`session`]: Per-plugin bundle of store, fetch controller and UI state
//! - [`state`]: The state record and its transition function
//! - [`store`]: State container with cached views and subscriptions
//! - [`transitions`]: The closed set of state transitions

pub mod actions;
pub mod derive;
pub mod handler;
pub mod modes;
pub mod session;
pub mod state;
pub mod store;
pub mod transitions;

pub use actions::Action;
pub use handler::{handle_event, on_clear_search, on_page_select, on_search_change, Event};
pub use modes::InputMode;
pub use session::Session;
pub use state::{AppState, DEFAULT_ITEMS_PER_PAGE};
pub use store::{DerivedView, ItemStore, SubscriptionId};
pub use transitions::{Changes, Transition};
