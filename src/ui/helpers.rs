//! Shared rendering utilities.
//!
//! Components draw into a [`Canvas`], an in-memory ANSI buffer, instead of
//! printing directly. The renderer flushes the finished frame to stdout in one
//! write, and tests inspect the buffer.

use crate::ui::theme::Theme;

/// An ANSI frame under construction.
#[derive(Debug, Default, Clone)]
pub struct Canvas {
    buf: String,
}

impl Canvas {
    /// Creates an empty canvas.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Moves the cursor to a 1-indexed `row`/`col`.
    pub fn position_cursor(&mut self, row: usize, col: usize) {
        self.buf.push_str(&format!("\u{1b}[{row};{col}H"));
    }

    /// Appends raw text or escape sequences.
    pub fn write(&mut self, text: &str) {
        self.buf.push_str(text);
    }

    /// Appends `count` spaces.
    pub fn pad(&mut self, count: usize) {
        self.buf.extend(std::iter::repeat(' ').take(count));
    }

    /// Writes `text` centered in `cols`, padding both sides to fill the line.
    pub fn write_centered(&mut self, text: &str, cols: usize) {
        let len = text_width(text);
        let left = cols.saturating_sub(len) / 2;
        self.pad(left);
        self.write(text);
        self.pad(cols.saturating_sub(left + len));
    }

    /// The frame so far.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.buf
    }

    /// Consumes the canvas, returning the frame.
    #[must_use]
    pub fn into_string(self) -> String {
        self.buf
    }
}

/// Display width of `text`, counted in chars.
#[must_use]
pub fn text_width(text: &str) -> usize {
    text.chars().count()
}

/// Writes `text` with the given character ranges highlighted.
///
/// `base_fg` is restored after every highlighted section. Ranges are
/// half-open char indices, sorted and non-overlapping; out-of-bounds ends are
/// clipped.
///
/// # Example
///
/// ```
/// use item_pager::ui::helpers::{render_highlighted_text, Canvas};
/// use item_pager::Theme;
///
/// let theme = Theme::default();
/// let mut canvas = Canvas::new();
/// render_highlighted_text(&mut canvas, "Scooty", &[(0, 2)], &theme, &theme.colors.text_normal);
/// assert!(canvas.as_str().ends_with("ooty"));
/// ```
pub fn render_highlighted_text(
    canvas: &mut Canvas,
    text: &str,
    ranges: &[(usize, usize)],
    theme: &Theme,
    base_fg: &str,
) {
    if ranges.is_empty() {
        canvas.write(text);
        return;
    }

    let chars: Vec<char> = text.chars().collect();
    let mut current_pos = 0;

    for &(start, end) in ranges {
        let start = start.clamp(current_pos, chars.len());
        let end = end.clamp(start, chars.len());

        canvas.write(&chars[current_pos..start].iter().collect::<String>());

        canvas.write(&Theme::fg(&theme.colors.match_highlight_fg));
        canvas.write(&Theme::bg(&theme.colors.match_highlight_bg));
        canvas.write(&chars[start..end].iter().collect::<String>());
        canvas.write(Theme::reset());
        canvas.write(&Theme::fg(base_fg));

        current_pos = end;
    }

    canvas.write(&chars[current_pos..].iter().collect::<String>());
}

/// Formats an elapsed number of seconds as a short relative time.
///
/// # Example
///
/// ```
/// use item_pager::ui::helpers::format_elapsed;
///
/// assert_eq!(format_elapsed(5), "just now");
/// assert_eq!(format_elapsed(180), "3m ago");
/// ```
#[must_use]
pub fn format_elapsed(seconds: i64) -> String {
    const MINUTE: i64 = 60;
    const HOUR: i64 = 60 * MINUTE;
    const DAY: i64 = 24 * HOUR;

    match seconds {
        s if s < MINUTE => "just now".to_string(),
        s if s < HOUR => format!("{}m ago", s / MINUTE),
        s if s < DAY => format!("{}h ago", s / HOUR),
        s => format!("{}d ago", s / DAY),
    }
}
