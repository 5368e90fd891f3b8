//! Composable UI component renderers.
//!
//! Each component draws one part of the pane into a [`Canvas`] and returns the
//! next free row.
//!
//! # Components
//!
//! - [`header`]: Title bar with item counts and freshness
//! - [`footer`]: Keybinding hints
//! - [`search`]: Search input box
//! - [`table`]: Item rows (ID, NAME) and the empty-page notice
//! - [`pagination`]: Page buttons
//! - [`status`]: Loading and error panel
//!
//! # Layouts
//!
//! - [`render_list_layout`]: Header + `SearchBar` + Table + Pages + Footer
//! - [`render_status_layout`]: Header + Status + Footer

mod footer;
mod header;
mod pagination;
mod search;
mod status;
mod table;

use crate::ui::helpers::Canvas;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{StatusPanel, UIViewModel};

use footer::render_footer;
use header::render_header;
use pagination::render_pagination;
use search::render_search_bar;
use status::render_status;
use table::{render_notice, render_table_headers, render_table_rows};

/// Row of the header; row 1 stays blank.
const FIRST_ROW: usize = 2;

/// Renders a horizontal border line at `row`.
///
/// # Returns
///
/// The next available row position (row + 1)
fn render_border(canvas: &mut Canvas, row: usize, color: &str, cols: usize) -> usize {
    canvas.position_cursor(row, 1);
    canvas.write(&Theme::fg(color));
    canvas.write(&"─".repeat(cols));
    canvas.write(Theme::reset());
    row + 1
}

/// Draws the bottom border and footer anchored to the last rows of the pane.
fn render_bottom(canvas: &mut Canvas, vm: &UIViewModel, theme: &Theme, cols: usize, rows: usize) {
    let footer_row = rows.saturating_sub(1);
    let border_row = footer_row.saturating_sub(1);

    render_border(canvas, border_row, &theme.colors.border, cols);
    render_footer(canvas, footer_row, &vm.footer, theme, cols);
}

/// Renders the list layout.
///
/// ```text
/// [blank line]
/// [Header]
/// [Border]
/// [Search Bar - 3 lines]
/// [Table Headers]
/// [Table Rows | Notice]
/// [padding]
/// [Page buttons]
/// [Border]
/// [Footer]
/// ```
pub fn render_list_layout(canvas: &mut Canvas, vm: &UIViewModel, theme: &Theme, cols: usize, rows: usize) {
    let mut current_row = render_header(canvas, FIRST_ROW, &vm.header, theme, cols);
    current_row = render_border(canvas, current_row, &theme.colors.border, cols);

    if let Some(search) = &vm.search_bar {
        current_row = render_search_bar(canvas, current_row, search, theme, cols);
    }

    current_row = render_table_headers(canvas, current_row, theme);
    current_row = render_table_rows(canvas, current_row, &vm.display_items, theme, cols);
    if let Some(notice) = &vm.notice {
        current_row = render_notice(canvas, current_row, notice, theme);
    }

    if let Some(pagination) = &vm.pagination {
        let pagination_row = rows.saturating_sub(3).max(current_row);
        render_pagination(canvas, pagination_row, pagination, theme, cols);
    }

    render_bottom(canvas, vm, theme, cols, rows);
}

/// Renders the status layout: header, a centered status panel, footer.
pub fn render_status_layout(
    canvas: &mut Canvas,
    vm: &UIViewModel,
    status: &StatusPanel,
    theme: &Theme,
    cols: usize,
    rows: usize,
) {
    let mut current_row = render_header(canvas, FIRST_ROW, &vm.header, theme, cols);
    current_row = render_border(canvas, current_row, &theme.colors.border, cols);

    let middle = rows.saturating_sub(2) / 2;
    render_status(canvas, middle.max(current_row + 1), status, theme, cols);

    render_bottom(canvas, vm, theme, cols, rows);
}
