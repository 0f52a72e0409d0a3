//! Host-player OSD state, seen through a read-only trait boundary.

use crate::gfx::frame::Frame;

/// Single-byte icon codes carried after an [`ICON_MARKER`] byte.
///
/// [`ICON_MARKER`]: crate::osd::escape::ICON_MARKER
pub const ICON_PLAY: u8 = 0x01;
pub const ICON_PAUSE: u8 = 0x02;

/// Progress-bar state supplied fresh by the host each frame.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProgbarState {
    /// Icon code the bar is shown for; `None` hides the bar entirely.
    pub symbol: Option<u8>,
    /// Playback position as a fraction of the bar width, `0..=1`.
    pub value: f32,
    /// Chapter stops as fractions of the bar width, ordered ascending.
    pub stops: Vec<f32>,
}

impl ProgbarState {
    /// A hidden bar.
    pub fn hidden() -> Self {
        Self::default()
    }
}

/// The host player's OSD state for the frame being drawn.
///
/// All lookups are read-only; the driver queries this once per draw call.
pub trait OsdSource {
    /// Current OSD text, possibly starting with a format-escape or icon
    /// marker byte. `None` or empty means no OSD text this frame.
    fn osd_text(&self) -> Option<&[u8]>;

    /// Current progress-bar state.
    fn progbar(&self) -> ProgbarState;

    /// Subtitle text for the given presentation timestamp, newline-separated.
    fn sub_text(&self, pts: f64) -> Option<String>;

    /// Host-composited OSD path: render the host's own OSD onto the scaled
    /// frame before it is blitted to the surface.
    fn draw_on_frame(&self, frame: &mut Frame, pts: f64);
}
