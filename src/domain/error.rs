//! Error types for the item pager.
//!
//! [`PagerError`] is the crate-wide error and [`Result`] the matching alias.
//! Only one error ever reaches the user: a failed fetch, which the store keeps
//! as a plain message string. The other variants cover configuration, theme
//! and payload problems that are logged and recovered from.

use thiserror::Error;

/// The main error type for item pager operations.
///
/// # Examples
///
/// ```
/// use item_pager::PagerError;
///
/// let err = PagerError::Fetch("Network Error".to_string());
/// assert_eq!(err.to_string(), "Network Error");
/// ```
#[derive(Debug, Error)]
pub enum PagerError {
    /// Fetching the item list failed.
    ///
    /// Displayed verbatim, so the message carries no prefix.
    #[error("{0}")]
    Fetch(String),

    /// The endpoint answered with a body that is not a list of items.
    #[error("Malformed payload: {0}")]
    Payload(#[from] serde_json::Error),

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Theme parsing or loading failed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// Configuration is invalid.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// A specialized `Result` type for item pager operations.
pub type Result<T> = std::result::Result<T, PagerError>;
