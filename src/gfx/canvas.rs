//! Drawing surface consumed from the graphics backend.
//!
//! The compositor and the OSD renderers never touch pixels directly; they go
//! through this trait, which mirrors the primitive set of a software graphics
//! library (fill, rectangle, vertical line, blit, styled text). The backend
//! owns the surface; callers borrow it for the duration of one draw call.

use crate::foundation::error::VoResult;
use crate::gfx::frame::Frame;
use crate::gfx::pixel::{Pixel, PixelType};

/// Opaque font-face handle minted by the backend's font lookup.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FaceId(pub u32);

/// Font weight requested from the backend at face lookup time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FontWeight {
    Regular,
    Bold,
}

/// A font face plus integer pixel-scaling multipliers.
///
/// Immutable for the session: two of these exist for OSD (regular, bold) and
/// one for subtitles with the configured multiplier.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TextStyle {
    pub face: FaceId,
    pub xmul: u32,
    pub ymul: u32,
}

impl TextStyle {
    pub fn new(face: FaceId) -> Self {
        Self {
            face,
            xmul: 1,
            ymul: 1,
        }
    }

    pub fn with_mul(face: FaceId, mul: u32) -> Self {
        Self {
            face,
            xmul: mul,
            ymul: mul,
        }
    }
}

/// Horizontal placement of a text run relative to its anchor point.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HAlign {
    Left,
    Center,
    Right,
}

/// Vertical placement of a text run relative to its anchor point.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VAlign {
    Above,
    Below,
}

/// Anchor semantics for [`Canvas::draw_text`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Align {
    pub h: HAlign,
    pub v: VAlign,
}

impl Align {
    /// Run extends rightward and below the anchor. Used by OSD text.
    pub const RIGHT_BELOW: Self = Self {
        h: HAlign::Right,
        v: VAlign::Below,
    };

    /// Run is centered on the anchor and sits above it. Used by subtitles.
    pub const CENTER_ABOVE: Self = Self {
        h: HAlign::Center,
        v: VAlign::Above,
    };
}

/// Dither mode for frame blits.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Dither {
    /// Straight copy with inline pixel-encoding conversion.
    None,
    /// Error-diffusion dither down to the surface's low-depth encoding.
    ErrorDiffusion,
}

/// Pixel surface plus the backend's drawing primitives.
///
/// Width, height and pixel type are fixed for the lifetime of the borrow;
/// the pixel type is fixed at backend initialization.
pub trait Canvas {
    fn width(&self) -> u32;
    fn height(&self) -> u32;
    fn pixel_type(&self) -> PixelType;

    /// Resolve an RGB triple to the surface's native pixel value.
    fn rgb_to_pixel(&self, r: u8, g: u8, b: u8) -> Pixel;

    /// Fill the whole surface.
    fn fill(&mut self, color: Pixel);

    /// Fill an axis-aligned rectangle. Zero-sized rectangles are no-ops.
    fn fill_rect(&mut self, x: i32, y: i32, w: u32, h: u32, color: Pixel);

    /// Draw a one-pixel rectangle outline.
    fn rect(&mut self, x: i32, y: i32, w: u32, h: u32, color: Pixel);

    /// Draw a one-pixel vertical line of height `h` starting at `(x, y)`.
    fn vline(&mut self, x: i32, y: i32, h: u32, color: Pixel);

    /// Copy the top-left `src_w` x `src_h` region of `src` to `(dst_x, dst_y)`,
    /// converting from the frame format to the surface encoding. With
    /// [`Dither::ErrorDiffusion`] the conversion goes through the backend's
    /// dither filter.
    fn blit_frame(
        &mut self,
        src: &Frame,
        src_w: u32,
        src_h: u32,
        dst_x: i32,
        dst_y: i32,
        dither: Dither,
    ) -> VoResult<()>;

    /// Line height of the style in surface pixels.
    fn text_height(&self, style: &TextStyle) -> u32;

    /// Average glyph advance of the style in surface pixels.
    fn text_avg_width(&self, style: &TextStyle) -> u32;

    /// Draw a text run anchored at `(x, y)` and return its rendered width.
    ///
    /// `fg` fills the glyphs, `bg` is the style's background hint; a no-op
    /// for empty runs.
    fn draw_text(
        &mut self,
        style: &TextStyle,
        x: i32,
        y: i32,
        align: Align,
        fg: Pixel,
        bg: Pixel,
        text: &str,
    ) -> u32;
}

/// Foreground/background pixel pair resolved once at initialization.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    pub white: Pixel,
    pub black: Pixel,
}

impl Palette {
    /// Resolve the white/black pair against a canvas.
    pub fn resolve<C: Canvas + ?Sized>(canvas: &C) -> Self {
        Self {
            white: canvas.rgb_to_pixel(0xff, 0xff, 0xff),
            black: canvas.rgb_to_pixel(0x00, 0x00, 0x00),
        }
    }
}
