//! Loading / error panel shown in place of the list.

use crate::ui::helpers::Canvas;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{StatusKind, StatusPanel};

/// Renders the status message and its subtitle centered at `row`.
///
/// # Returns
///
/// The next available row position (row + 2)
pub fn render_status(
    canvas: &mut Canvas,
    row: usize,
    status: &StatusPanel,
    theme: &Theme,
    cols: usize,
) -> usize {
    let color = match status.kind {
        StatusKind::Loading => &theme.colors.loading_fg,
        StatusKind::Error => &theme.colors.error_fg,
    };

    canvas.position_cursor(row, 1);
    canvas.write(Theme::bold());
    canvas.write(&Theme::fg(color));
    canvas.write_centered(&status.message, cols);
    canvas.write(Theme::reset());

    canvas.position_cursor(row + 1, 1);
    canvas.write(Theme::dim());
    canvas.write(&Theme::fg(&theme.colors.text_dim));
    canvas.write_centered(&status.subtitle, cols);
    canvas.write(Theme::reset());

    row + 2
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_uses_error_color() {
        let theme = Theme::default();
        let status = StatusPanel {
            kind: StatusKind::Error,
            message: "Error: Network Error".into(),
            subtitle: "Press r to retry".into(),
        };
        let mut canvas = Canvas::new();

        render_status(&mut canvas, 6, &status, &theme, 60);

        assert!(canvas.as_str().contains(&Theme::fg(&theme.colors.error_fg)));
        assert!(canvas.as_str().contains("Error: Network Error"));
    }
}
