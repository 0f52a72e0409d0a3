//! Subtitle line splitting and bottom-anchored centered drawing.

use smallvec::SmallVec;

use crate::gfx::canvas::{Align, Canvas, Palette, TextStyle};

/// Split subtitle text into at most two display lines on `\n`.
///
/// The first line ends at the first newline; the second at the next newline
/// or end of string. Any further lines are dropped.
pub fn split_lines(text: &str) -> SmallVec<[&str; 2]> {
    text.splitn(3, '\n').take(2).collect()
}

/// Draw the subtitle centered horizontally and anchored above the bottom of
/// the surface: one line height up for a single line, two for a pair. Each
/// line gets the usual one-pixel drop shadow.
pub fn render_subtitle<C: Canvas + ?Sized>(
    canvas: &mut C,
    style: &TextStyle,
    palette: Palette,
    text: &str,
) {
    let lines = split_lines(text);
    if lines.is_empty() {
        return;
    }

    let line_h = canvas.text_height(style) as i32;
    let x = canvas.width() as i32 / 2;
    let mut y = canvas.height() as i32 - lines.len() as i32 * line_h;

    for line in lines {
        canvas.draw_text(
            style,
            x + 1,
            y + 1,
            Align::CENTER_ABOVE,
            palette.black,
            palette.white,
            line,
        );
        canvas.draw_text(style, x, y, Align::CENTER_ABOVE, palette.white, palette.black, line);
        y += line_h;
    }
}
