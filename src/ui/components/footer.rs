//! Footer component renderer.

use crate::ui::helpers::Canvas;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::FooterInfo;

/// Renders the keybinding hints centered and dimmed.
///
/// # Returns
///
/// The next available row position (row + 1)
pub fn render_footer(
    canvas: &mut Canvas,
    row: usize,
    footer: &FooterInfo,
    theme: &Theme,
    cols: usize,
) -> usize {
    canvas.position_cursor(row, 1);
    canvas.write(Theme::dim());
    canvas.write(&Theme::fg(&theme.colors.text_dim));
    canvas.write_centered(&footer.keybindings, cols);
    canvas.write(Theme::reset());
    row + 1
}
