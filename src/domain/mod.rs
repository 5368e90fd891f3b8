//! Domain layer for the item pager.
//!
//! Holds the types the rest of the crate agrees on, free of Zellij APIs and
//! rendering concerns.
//!
//! - [`error`]: Error types and result alias
//! - [`item`]: The `Item` record fetched from the remote endpoint

pub mod error;
pub mod item;

pub use error::{PagerError, Result};
pub use item::Item;
