//! Fetch lifecycle for the remote item list.
//!
//! The plugin cannot block on HTTP. A fetch is split into a request, which the
//! plugin shim hands to Zellij's `web_request`, and an outcome, which comes back
//! later as a `WebRequestResult` event. The controller ties the two together and
//! drives the store through start, success and failure.
//!
//! - [`controller`]: request bookkeeping and store transitions
//! - [`outcome`]: mapping an HTTP response to success or failure

pub mod controller;
pub mod outcome;

pub use controller::{FetchController, FetchRequest, REQUEST_ID_KEY};
pub use outcome::FetchOutcome;
