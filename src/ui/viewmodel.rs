//! View model types representing renderable UI state.
//!
//! View models are computed from a [`Session`](crate::app::Session) by
//! `Session::compute_viewmodel` and consumed by the renderer. They carry no
//! logic, only display-ready data, which keeps the projection testable without
//! a terminal.

/// Complete UI view model for rendering.
///
/// When `status` is set the renderer shows only the header, the status panel
/// and the footer. Otherwise it shows the search bar, the item rows and the
/// page controls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UIViewModel {
    /// Header information (title, freshness).
    pub header: HeaderInfo,

    /// Footer information (keybindings).
    pub footer: FooterInfo,

    /// Loading or error panel replacing the list.
    pub status: Option<StatusPanel>,

    /// Search bar (present whenever the list is shown).
    pub search_bar: Option<SearchBarInfo>,

    /// Rows of the current page that fit on screen.
    pub display_items: Vec<DisplayItem>,

    /// Message shown instead of rows when the page is empty.
    pub notice: Option<String>,

    /// Page buttons (present whenever the list is shown).
    pub pagination: Option<PaginationInfo>,
}

/// Display information for one item row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayItem {
    /// Item id, formatted.
    pub id: String,

    /// Display name, truncated to the available width.
    pub name: String,

    /// Character ranges of `name` matching the search term.
    pub highlight_ranges: Vec<(usize, usize)>,
}

/// Header display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderInfo {
    /// Title with item counts.
    pub title: String,

    /// Right-aligned freshness hint, e.g. "updated 3m ago".
    pub updated: Option<String>,
}

/// Footer display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterInfo {
    /// Keybinding help text.
    pub keybindings: String,
}

/// Kind of status panel, selecting its color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    /// A fetch is in flight.
    Loading,
    /// The last fetch failed.
    Error,
}

/// Centered status message shown instead of the list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusPanel {
    /// What kind of status this is.
    pub kind: StatusKind,

    /// Primary message (e.g. "Loading...").
    pub message: String,

    /// Secondary hint (e.g. "Press r to retry").
    pub subtitle: String,
}

/// Search bar display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchBarInfo {
    /// Current search term.
    pub query: String,

    /// Whether keys currently go to the search bar.
    pub is_focused: bool,
}

/// Page controls display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationInfo {
    /// One button per page, `1..=total_pages`.
    pub buttons: Vec<PageButton>,
}

/// A single page-select button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageButton {
    /// 1-based page number.
    pub number: usize,

    /// Whether this is the current page.
    pub is_current: bool,
}
