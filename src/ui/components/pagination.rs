//! Page button row: `[1] [2] [3]`, current page highlighted.

use crate::ui::helpers::{text_width, Canvas};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::PaginationInfo;

/// Renders one button per page, centered. Buttons that do not fit the pane
/// width are replaced by a trailing `…`.
///
/// # Returns
///
/// The next available row position (row + 1)
pub fn render_pagination(
    canvas: &mut Canvas,
    row: usize,
    pagination: &PaginationInfo,
    theme: &Theme,
    cols: usize,
) -> usize {
    canvas.position_cursor(row, 1);
    if pagination.buttons.is_empty() {
        return row + 1;
    }

    let labels: Vec<String> = pagination
        .buttons
        .iter()
        .map(|button| format!("[{}]", button.number))
        .collect();

    let mut width = 0;
    let mut shown = 0;
    for label in &labels {
        let next = width + text_width(label) + usize::from(shown > 0);
        if next + 2 > cols && shown > 0 {
            break;
        }
        width = next;
        shown += 1;
    }
    let truncated = shown < labels.len();
    let total_width = width + if truncated { 2 } else { 0 };

    canvas.pad(cols.saturating_sub(total_width) / 2);
    for (index, (button, label)) in pagination.buttons.iter().zip(&labels).take(shown).enumerate() {
        if index > 0 {
            canvas.write(" ");
        }
        if button.is_current {
            canvas.write(Theme::bold());
            canvas.write(&Theme::fg(&theme.colors.selection_fg));
            canvas.write(&Theme::bg(&theme.colors.selection_bg));
        } else {
            canvas.write(&Theme::fg(&theme.colors.text_normal));
        }
        canvas.write(label);
        canvas.write(Theme::reset());
    }
    if truncated {
        canvas.write(&Theme::fg(&theme.colors.text_dim));
        canvas.write(" …");
        canvas.write(Theme::reset());
    }

    row + 1
}
