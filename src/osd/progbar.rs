//! Playback progress bar with chapter-stop ticks.

use crate::gfx::canvas::{Canvas, Palette, TextStyle};
use crate::osd::state::ProgbarState;

/// Draw the progress bar near the bottom of the surface.
///
/// Geometry: inset by one OSD line height on the sides, four subtitle line
/// heights up from the bottom, one OSD line height tall. Drawn back to
/// front: nested borders, proportional fill, playhead tick, stop ticks.
pub fn render_progbar<C: Canvas + ?Sized>(
    canvas: &mut C,
    osd_style: &TextStyle,
    sub_style: &TextStyle,
    palette: Palette,
    state: &ProgbarState,
) {
    if state.symbol.is_none() {
        return;
    }

    let text_h = canvas.text_height(osd_style) as i32;
    let sub_h = canvas.text_height(sub_style) as i32;

    let x = text_h;
    let y = canvas.height() as i32 - 4 * sub_h;
    let w = canvas.width() as i32 - 2 * text_h;
    let h = text_h;
    if w <= 0 || h <= 0 {
        return;
    }

    canvas.rect(x - 2, y - 2, w as u32 + 4, h as u32 + 4, palette.white);
    canvas.rect(x - 1, y - 1, w as u32 + 2, h as u32 + 2, palette.black);
    canvas.rect(x, y, w as u32, h as u32, palette.white);

    let fill_w = (w as f32 * state.value) as i32;
    canvas.fill_rect(x, y, fill_w.max(0) as u32, h as u32, palette.white);
    canvas.vline(x + fill_w, y, h as u32, palette.black);

    for &stop in &state.stops {
        let stop_x = x + (w as f32 * stop) as i32;
        canvas.vline(stop_x - 1, y, h as u32, palette.white);
        canvas.vline(stop_x, y, h as u32, palette.black);
        canvas.vline(stop_x + 1, y, h as u32, palette.white);
    }
}
