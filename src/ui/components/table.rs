//! Item table renderer: an ID column and a NAME column with match highlights.

use crate::app::session::ID_COLUMN_WIDTH;
use crate::ui::helpers::{self, text_width, Canvas};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::DisplayItem;

/// Left indent of every table line.
const INDENT: usize = 2;

/// Renders the column headers.
///
/// # Returns
///
/// The next available row position (row + 1)
pub fn render_table_headers(canvas: &mut Canvas, row: usize, theme: &Theme) -> usize {
    canvas.position_cursor(row, 1);
    canvas.write(Theme::bold());
    canvas.write(&Theme::fg(&theme.colors.text_dim));
    canvas.pad(INDENT);
    canvas.write(&format!("{:<width$}{}", "ID", "NAME", width = ID_COLUMN_WIDTH));
    canvas.write(Theme::reset());
    row + 1
}

/// Renders one line per item.
///
/// # Returns
///
/// The next available row position (row + number of items)
pub fn render_table_rows(
    canvas: &mut Canvas,
    row: usize,
    items: &[DisplayItem],
    theme: &Theme,
    cols: usize,
) -> usize {
    items.iter().fold(row, |current_row, item| {
        render_table_row(canvas, current_row, item, theme, cols)
    })
}

fn render_table_row(
    canvas: &mut Canvas,
    row: usize,
    item: &DisplayItem,
    theme: &Theme,
    cols: usize,
) -> usize {
    canvas.position_cursor(row, 1);
    canvas.pad(INDENT);

    canvas.write(&Theme::fg(&theme.colors.text_dim));
    canvas.write(&format!("{:<width$}", item.id, width = ID_COLUMN_WIDTH));

    let text_color = &theme.colors.text_normal;
    canvas.write(&Theme::fg(text_color));
    helpers::render_highlighted_text(canvas, &item.name, &item.highlight_ranges, theme, text_color);

    let line_len = INDENT + ID_COLUMN_WIDTH.max(text_width(&item.id)) + text_width(&item.name);
    canvas.pad(cols.saturating_sub(line_len));
    canvas.write(Theme::reset());
    row + 1
}

/// Renders a dimmed single-line notice in place of the rows.
///
/// # Returns
///
/// The next available row position (row + 1)
pub fn render_notice(canvas: &mut Canvas, row: usize, notice: &str, theme: &Theme) -> usize {
    canvas.position_cursor(row, 1);
    canvas.write(Theme::dim());
    canvas.write(&Theme::fg(&theme.colors.text_dim));
    canvas.pad(INDENT);
    canvas.write(notice);
    canvas.write(Theme::reset());
    row + 1
}
