//! OSD text layout and drawing.
//!
//! Two paths: format-escaped strings go through the escape tokenizer and the
//! cursor-driven layout; everything else is drawn as a plain run with the
//! regular style. Every run is drawn twice, a one-pixel drop shadow in the
//! background color followed by the foreground fill.

use std::borrow::Cow;

use crate::gfx::canvas::{Align, Canvas, Palette, TextStyle};
use crate::osd::escape::{
    Directive, EscapeTokens, FORMAT_MARKER_0, FORMAT_MARKER_1, ICON_MARKER, Token,
};
use crate::osd::state::{ICON_PAUSE, ICON_PLAY};

/// The session's OSD and subtitle text styles.
#[derive(Clone, Copy, Debug)]
pub struct OsdStyles {
    pub regular: TextStyle,
    pub bold: TextStyle,
    pub subtitle: TextStyle,
}

/// Render the current OSD text onto the surface.
pub fn render_osd_text<C: Canvas + ?Sized>(
    canvas: &mut C,
    styles: &OsdStyles,
    palette: Palette,
    text: &[u8],
) {
    let Some(&first) = text.first() else {
        return;
    };

    match first {
        FORMAT_MARKER_0 | FORMAT_MARKER_1 => {
            render_tagged(canvas, styles, palette, &text[1..]);
        }
        ICON_MARKER => {
            let plain = substitute_icon(&text[1..]);
            render_plain(canvas, &styles.regular, palette, &plain);
        }
        _ => {
            render_plain(canvas, &styles.regular, palette, &String::from_utf8_lossy(text));
        }
    }
}

/// Escape-driven layout: cursor starts at `(lineHeight, lineHeight)`, literal
/// runs advance it by their rendered width, `\N` starts a new line, `\h`
/// indents by one average glyph width.
fn render_tagged<C: Canvas + ?Sized>(
    canvas: &mut C,
    styles: &OsdStyles,
    palette: Palette,
    text: &[u8],
) {
    let line_h = canvas.text_height(&styles.regular) as i32;
    let glyph_w = canvas.text_avg_width(&styles.regular) as i32;
    let mut x = line_h;
    let mut y = line_h;

    for token in EscapeTokens::new(text) {
        match token {
            Token::Directive(Directive::Newline) => {
                x = line_h;
                y += line_h;
            }
            Token::Directive(Directive::Indent) => {
                x += glyph_w;
            }
            Token::Literal { text, bold } => {
                let style = if bold { &styles.bold } else { &styles.regular };
                canvas.draw_text(
                    style,
                    x + 1,
                    y + 1,
                    Align::RIGHT_BELOW,
                    palette.black,
                    palette.white,
                    text,
                );
                x += canvas.draw_text(
                    style,
                    x,
                    y,
                    Align::RIGHT_BELOW,
                    palette.white,
                    palette.black,
                    text,
                ) as i32;
            }
        }
    }
}

/// Unformatted path: one shadowed run anchored at `(lineHeight, lineHeight)`.
fn render_plain<C: Canvas + ?Sized>(
    canvas: &mut C,
    style: &TextStyle,
    palette: Palette,
    text: &str,
) {
    let h = canvas.text_height(style) as i32;
    canvas.draw_text(
        style,
        h + 1,
        h + 1,
        Align::RIGHT_BELOW,
        palette.black,
        palette.white,
        text,
    );
    canvas.draw_text(style, h, h, Align::RIGHT_BELOW, palette.white, palette.black, text);
}

/// Replace the leading icon code with its glyph, returning a transformed
/// copy of the remaining text. The caller's buffer is never mutated.
pub(crate) fn substitute_icon(text: &[u8]) -> String {
    let (glyph, rest) = match text.split_first() {
        Some((&ICON_PLAY, rest)) => ('>', rest),
        Some((&ICON_PAUSE, rest)) => ('"', rest),
        Some((&code, rest)) => {
            tracing::warn!(code, "unrecognized OSD icon code, substituting space");
            (' ', rest)
        }
        None => return String::new(),
    };

    let mut out = String::with_capacity(1 + rest.len());
    out.push(glyph);
    match String::from_utf8_lossy(rest) {
        Cow::Borrowed(s) => out.push_str(s),
        Cow::Owned(s) => out.push_str(&s),
    }
    out
}
