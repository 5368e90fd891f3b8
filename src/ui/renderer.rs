//! Top-level rendering coordinator.
//!
//! Rendering is two steps: [`Session::compute_viewmodel`] projects state into
//! a [`UIViewModel`], then [`render_frame`] draws it into a string. [`render`]
//! does both and writes the frame to stdout, which Zellij shows in the pane.

use crate::app::Session;
use crate::ui::components;
use crate::ui::helpers::Canvas;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::UIViewModel;

/// Renders the session to stdout for a `rows` x `cols` pane.
pub fn render(session: &Session, rows: usize, cols: usize) {
    let _span = tracing::trace_span!("render", rows, cols).entered();

    let viewmodel = session.compute_viewmodel(rows, cols);
    print!("{}", render_frame(&viewmodel, &session.theme, rows, cols));
}

/// Draws a view model into an ANSI frame.
///
/// A status panel (loading or error) replaces the list layout entirely.
///
/// # Example
///
/// ```
/// use item_pager::app::Session;
/// use item_pager::ui::render_frame;
/// use item_pager::{Config, Theme};
///
/// let session = Session::new(&Config::default(), Theme::default());
/// let vm = session.compute_viewmodel(24, 80);
/// let frame = render_frame(&vm, &session.theme, 24, 80);
/// assert!(frame.contains("No items"));
/// ```
#[must_use]
pub fn render_frame(vm: &UIViewModel, theme: &Theme, rows: usize, cols: usize) -> String {
    let mut canvas = Canvas::new();

    match &vm.status {
        Some(status) => components::render_status_layout(&mut canvas, vm, status, theme, cols, rows),
        None => components::render_list_layout(&mut canvas, vm, theme, cols, rows),
    }

    canvas.into_string()
}
