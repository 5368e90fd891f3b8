//! Header component renderer.

use crate::ui::helpers::{text_width, Canvas};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::HeaderInfo;

/// Right margin kept after the freshness hint.
const RIGHT_MARGIN: usize = 2;

/// Renders the title centered and the freshness hint right-aligned.
///
/// When the pane is too narrow for both, the hint is dropped.
///
/// # Returns
///
/// The next available row position (row + 1)
pub fn render_header(
    canvas: &mut Canvas,
    row: usize,
    header: &HeaderInfo,
    theme: &Theme,
    cols: usize,
) -> usize {
    let title_len = text_width(&header.title);
    let padding = cols.saturating_sub(title_len) / 2;

    canvas.position_cursor(row, 1);
    canvas.write(Theme::bold());
    canvas.write(&Theme::fg(&theme.colors.header_fg));
    if let Some(bg) = &theme.colors.header_bg {
        canvas.write(&Theme::bg(bg));
    }

    canvas.pad(padding);
    canvas.write(&header.title);

    let used = padding + title_len;
    match header.updated.as_deref() {
        Some(updated) if used + text_width(updated) + RIGHT_MARGIN + 1 <= cols => {
            let gap = cols - used - text_width(updated) - RIGHT_MARGIN;
            canvas.pad(gap);
            canvas.write(Theme::reset());
            canvas.write(&Theme::fg(&theme.colors.text_dim));
            if let Some(bg) = &theme.colors.header_bg {
                canvas.write(&Theme::bg(bg));
            }
            canvas.write(updated);
            canvas.pad(RIGHT_MARGIN);
        }
        _ => canvas.pad(cols.saturating_sub(used)),
    }

    canvas.write(Theme::reset());
    row + 1
}
