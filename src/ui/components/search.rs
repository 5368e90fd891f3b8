//! Search bar component renderer.
//!
//! A 3-line bordered box holding the current term. When focused the border
//! takes the accent color and a block cursor follows the term; unfocused, the
//! border is dimmed and an empty term shows a hint.

use crate::ui::helpers::{text_width, Canvas};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::SearchBarInfo;

/// Horizontal margin for the search box (spaces on left and right).
const SEARCH_BOX_MARGIN: usize = 5;

/// Renders the search box at `row`.
///
/// # Returns
///
/// The next available row position (row + 3)
///
/// # Layout
///
/// ```text
/// [margin] ┌─────────────┐ [margin]
/// [margin] │ Search: ... │ [margin]
/// [margin] └─────────────┘ [margin]
/// ```
pub fn render_search_bar(
    canvas: &mut Canvas,
    row: usize,
    search: &SearchBarInfo,
    theme: &Theme,
    cols: usize,
) -> usize {
    let box_width = cols.saturating_sub(SEARCH_BOX_MARGIN * 2);
    let inner_width = box_width.saturating_sub(2);
    let border = if search.is_focused {
        Theme::fg(&theme.colors.search_bar_border)
    } else {
        Theme::fg(&theme.colors.border)
    };

    canvas.position_cursor(row, 1);
    canvas.pad(SEARCH_BOX_MARGIN);
    canvas.write(&border);
    canvas.write(&format!("┌{}┐", "─".repeat(inner_width)));
    canvas.write(Theme::reset());

    let (text, text_color) = match (search.query.is_empty(), search.is_focused) {
        (true, false) => (" Press / to search".to_string(), &theme.colors.text_dim),
        (_, true) => (format!(" Search: {}█", search.query), &theme.colors.text_normal),
        (false, false) => (format!(" Search: {}", search.query), &theme.colors.text_normal),
    };
    let text: String = text.chars().take(inner_width).collect();

    canvas.position_cursor(row + 1, 1);
    canvas.pad(SEARCH_BOX_MARGIN);
    canvas.write(&border);
    canvas.write("│");
    canvas.write(&Theme::fg(text_color));
    canvas.write(&text);
    canvas.pad(inner_width.saturating_sub(text_width(&text)));
    canvas.write(&border);
    canvas.write("│");
    canvas.write(Theme::reset());

    canvas.position_cursor(row + 2, 1);
    canvas.pad(SEARCH_BOX_MARGIN);
    canvas.write(&border);
    canvas.write(&format!("└{}┘", "─".repeat(inner_width)));
    canvas.write(Theme::reset());

    row + 3
}
