//! Frame compositing: aspect-preserving fit, letterboxing, scaled-buffer
//! cache and the per-frame draw sequence.
//!
//! Per drawn frame the sequence is scale, letterbox, optional host OSD,
//! blit (with dither on low-depth grayscale), optional self-composited OSD.
//! The caller then flips the surface.

use smallvec::SmallVec;

use crate::foundation::error::{VoError, VoResult};
use crate::gfx::canvas::{Canvas, Dither};
use crate::gfx::frame::Frame;
use crate::gfx::pixel::{FrameFormat, Pixel};
use crate::gfx::scale::Scaler;

/// Axis-aligned rectangle in surface coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RectXywh {
    pub x: i32,
    pub y: i32,
    pub w: u32,
    pub h: u32,
}

impl RectXywh {
    pub fn is_empty(self) -> bool {
        self.w == 0 || self.h == 0
    }
}

/// Largest dimensions that fit `frame` inside `surface` while preserving
/// aspect ratio. Both results are at least 1 and at most the surface size;
/// the limiting dimension matches the surface exactly.
pub fn fit_scale(frame: (u32, u32), surface: (u32, u32)) -> (u32, u32) {
    let (fw, fh) = (frame.0.max(1) as u64, frame.1.max(1) as u64);
    let (sw, sh) = (surface.0.max(1) as u64, surface.1.max(1) as u64);

    // Width-limited iff sw/fw <= sh/fh, compared without floats.
    let (w, h) = if sw * fh <= sh * fw {
        (sw, (fh * sw / fw).max(1))
    } else {
        ((fw * sh / fh).max(1), sh)
    };
    (w as u32, h as u32)
}

/// Centered placement of a `scaled`-sized image on a `surface`-sized canvas.
pub fn center_offsets(surface: (u32, u32), scaled: (u32, u32)) -> (u32, u32) {
    (
        surface.0.saturating_sub(scaled.0) / 2,
        surface.1.saturating_sub(scaled.1) / 2,
    )
}

/// The four border strips around a centered image at `(x_off, y_off)`.
///
/// Strips are disjoint and, together with the image rectangle, tile the
/// surface exactly: full-width top and bottom bands, plus side bands spanning
/// only the image rows.
pub fn letterbox_rects(
    surface: (u32, u32),
    scaled: (u32, u32),
    off: (u32, u32),
) -> SmallVec<[RectXywh; 4]> {
    let (sw, sh) = surface;
    let (iw, ih) = scaled;
    let (x, y) = (off.0, off.1);

    let rects = [
        // top
        RectXywh {
            x: 0,
            y: 0,
            w: sw,
            h: y,
        },
        // bottom
        RectXywh {
            x: 0,
            y: (y + ih) as i32,
            w: sw,
            h: sh.saturating_sub(y + ih),
        },
        // left
        RectXywh {
            x: 0,
            y: y as i32,
            w: x,
            h: ih,
        },
        // right
        RectXywh {
            x: (x + iw) as i32,
            y: y as i32,
            w: sw.saturating_sub(x + iw),
            h: ih,
        },
    ];

    rects.into_iter().filter(|r| !r.is_empty()).collect()
}

/// Single-slot cache for the scaled frame buffer, keyed by source frame size
/// and surface size. Replaced wholesale on any size change, never partially
/// mutated.
#[derive(Debug, Default)]
pub struct ScaledCache {
    slot: Option<(CacheKey, Frame)>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct CacheKey {
    format: FrameFormat,
    frame: (u32, u32),
    surface: (u32, u32),
}

impl ScaledCache {
    /// Get the scaled buffer for the given source/surface sizes, discarding
    /// and reallocating it if either changed since the last call.
    pub fn ensure(
        &mut self,
        format: FrameFormat,
        frame: (u32, u32),
        surface: (u32, u32),
    ) -> VoResult<&mut Frame> {
        let key = CacheKey {
            format,
            frame,
            surface,
        };
        let stale = match &self.slot {
            Some((k, _)) => *k != key,
            None => true,
        };
        if stale {
            // Free the old buffer before allocating its replacement.
            self.slot = None;
            let (w, h) = fit_scale(frame, surface);
            let buf = Frame::alloc(format, w, h)?;
            self.slot = Some((key, buf));
        }
        let (_, buf) = self
            .slot
            .as_mut()
            .ok_or_else(|| VoError::draw("scaled cache slot missing after ensure"))?;
        Ok(buf)
    }

    /// Drop the cached buffer; the next [`ensure`](Self::ensure) reallocates.
    pub fn invalidate(&mut self) {
        self.slot = None;
    }
}

/// One composited frame: scale into the cache, letterbox, host OSD hook,
/// blit with optional dithering. Self-composited OSD is layered on by the
/// caller afterwards, directly on the surface.
#[allow(clippy::too_many_arguments)]
pub fn composite_frame<C, S, F>(
    canvas: &mut C,
    scaler: &mut S,
    cache: &mut ScaledCache,
    format: FrameFormat,
    current: &Frame,
    frame_size: (u32, u32),
    border: Pixel,
    host_osd: F,
) -> VoResult<()>
where
    C: Canvas + ?Sized,
    S: Scaler + ?Sized,
    F: FnOnce(&mut Frame),
{
    let surface = (canvas.width(), canvas.height());
    let scaled = cache.ensure(format, frame_size, surface)?;
    scaler.scale(scaled, current)?;

    // Visible region may be smaller than the scaled buffer if the surface
    // shrank between reconfigurations.
    let w = scaled.width().min(surface.0);
    let h = scaled.height().min(surface.1);
    let off = center_offsets(surface, (w, h));

    // Borders first, so a resize never flashes stale garbage around the image.
    for r in letterbox_rects(surface, (w, h), off) {
        canvas.fill_rect(r.x, r.y, r.w, r.h, border);
    }

    host_osd(&mut *scaled);

    let dither = if canvas.pixel_type().is_low_depth_gray() {
        Dither::ErrorDiffusion
    } else {
        Dither::None
    };
    canvas.blit_frame(scaled, w, h, off.0 as i32, off.1 as i32, dither)
}
