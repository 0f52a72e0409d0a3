//! Surface pixel encodings and player-side frame formats.
//!
//! A backend surface carries one [`PixelType`] for its whole lifetime; the
//! player delivers decoded frames in a [`FrameFormat`]. The two namespaces
//! meet in [`negotiate`], which picks the frame format the scaler should
//! produce for a given surface encoding.

use serde::{Deserialize, Serialize};

/// Pixel encoding of a backend surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PixelType {
    /// 1-bit grayscale.
    G1,
    /// 2-bit grayscale.
    G2,
    /// 4-bit grayscale.
    G4,
    /// 8-bit grayscale.
    G8,
    /// 16-bit grayscale.
    G16,
    /// Packed 16-bit RGB.
    Rgb565,
    /// Packed 24-bit RGB.
    Rgb888,
    /// 32-bit RGB with a padding byte.
    Xrgb8888,
}

impl PixelType {
    /// Grayscale encodings below 8 bits per pixel. Blitting a higher-precision
    /// frame onto such a surface goes through the error-diffusion dither.
    pub fn is_low_depth_gray(self) -> bool {
        matches!(self, Self::G1 | Self::G2 | Self::G4)
    }

    /// Any grayscale encoding.
    pub fn is_gray(self) -> bool {
        matches!(self, Self::G1 | Self::G2 | Self::G4 | Self::G8 | Self::G16)
    }
}

/// Pixel layout of a decoded or scaled video frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FrameFormat {
    /// 8-bit luma.
    Y8,
    /// 16-bit luma.
    Y16,
    /// Packed 16-bit RGB.
    Rgb565,
    /// 24-bit BGR.
    Bgr24,
    /// 32-bit BGR with a padding byte.
    Bgr0,
}

impl FrameFormat {
    /// Bytes per pixel of the packed layout.
    pub fn bytes_per_pixel(self) -> usize {
        match self {
            Self::Y8 => 1,
            Self::Y16 | Self::Rgb565 => 2,
            Self::Bgr24 => 3,
            Self::Bgr0 => 4,
        }
    }
}

/// Opaque color value in the surface's native encoding, produced by
/// [`Canvas::rgb_to_pixel`](crate::gfx::canvas::Canvas::rgb_to_pixel).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Pixel(pub u32);

/// Outcome of pixel-format negotiation at initialization.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Negotiated {
    /// Format the scaler must produce for this surface.
    pub frame_format: FrameFormat,
    /// Whether OSD defaults to being composited by this driver rather than
    /// the host's OSD path. Sub-8-bit grayscale surfaces render text poorly
    /// through the host path, so they self-composite by default.
    pub self_composited_osd: bool,
}

/// Map a surface pixel encoding to the frame format delivered to the blit.
pub fn negotiate(pixel_type: PixelType) -> Negotiated {
    let (frame_format, self_composited_osd) = match pixel_type {
        PixelType::G1 | PixelType::G2 | PixelType::G4 | PixelType::G8 => (FrameFormat::Y8, true),
        PixelType::G16 => (FrameFormat::Y16, false),
        PixelType::Xrgb8888 => (FrameFormat::Bgr0, false),
        PixelType::Rgb565 => (FrameFormat::Rgb565, false),
        PixelType::Rgb888 => (FrameFormat::Bgr24, false),
    };
    Negotiated {
        frame_format,
        self_composited_osd,
    }
}
