//! Actions representing side effects to be executed by the plugin runtime.
//!
//! The event handler never talks to Zellij. It returns a `Vec<Action>` and the
//! shim in `main.rs` turns each one into host calls, in order.

use crate::fetch::FetchRequest;

/// Commands the plugin runtime must carry out after an event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Hides the plugin pane.
    CloseFocus,

    /// Issues an HTTP GET for the item list.
    ///
    /// The request id must come back in the response context under
    /// [`REQUEST_ID_KEY`](crate::fetch::REQUEST_ID_KEY).
    FetchItems(FetchRequest),
}
