//! Input mode state for keyboard handling.
//!
//! The plugin reads keys in one of two modes:
//! - **Normal**: single keys are commands (page, refresh, quit)
//! - **Search**: printable keys edit the search term
//!
//! # Example
//!
//! ```
//! use item_pager::app::InputMode;
//!
//! let mode = InputMode::default();
//! assert_eq!(mode, InputMode::Normal);
//! ```

/// Current input handling mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InputMode {
    /// Default command mode.
    ///
    /// Available keybindings: n/p or arrows (page), 1-9 (jump to page),
    /// / (search), c (clear search), r (refetch), q (quit).
    #[default]
    Normal,

    /// Typing into the search bar.
    ///
    /// Printable keys and backspace edit the term, Enter keeps it, Esc clears it.
    Search,
}
