//! Frame rescaling seam.
//!
//! Scaling and pixel-format conversion are external collaborators; the
//! compositor only ever calls [`Scaler::scale`] with a pre-allocated
//! destination frame. [`ImageScaler`] is the built-in resampler covering the
//! packed formats the `image` crate can express; hosts with a full software
//! scaler plug in their own implementation.

use image::imageops::{self, FilterType};
use image::{ImageBuffer, Luma, Rgb, Rgba};

use crate::foundation::error::{VoError, VoResult};
use crate::gfx::frame::Frame;
use crate::gfx::pixel::FrameFormat;

/// Writes a source frame into a destination frame of possibly different
/// dimensions and format.
pub trait Scaler {
    /// Whether this scaler can produce `dst` output from `src` input.
    /// Drives the driver's query-format answer.
    fn supports(&self, dst: FrameFormat, src: FrameFormat) -> bool;

    /// Rescale `src` into `dst`, filling it completely. The destination
    /// geometry is taken from `dst` itself.
    fn scale(&mut self, dst: &mut Frame, src: &Frame) -> VoResult<()>;
}

/// Resampling scaler backed by `image::imageops`.
///
/// Handles same-format rescaling for Y8, BGR24 and BGR0 frames (channel
/// order is irrelevant to resampling). Y16 and RGB565 need a real converter
/// and are reported unsupported.
#[derive(Debug, Default)]
pub struct ImageScaler;

impl Scaler for ImageScaler {
    fn supports(&self, dst: FrameFormat, src: FrameFormat) -> bool {
        dst == src
            && matches!(
                src,
                FrameFormat::Y8 | FrameFormat::Bgr24 | FrameFormat::Bgr0
            )
    }

    fn scale(&mut self, dst: &mut Frame, src: &Frame) -> VoResult<()> {
        if !self.supports(dst.format(), src.format()) {
            return Err(VoError::unsupported(format!(
                "image scaler cannot convert {:?} to {:?}",
                src.format(),
                dst.format()
            )));
        }

        let (dw, dh) = (dst.width(), dst.height());
        match src.format() {
            FrameFormat::Y8 => {
                let buf = buffer::<Luma<u8>>(src)?;
                let out = imageops::resize(&buf, dw, dh, FilterType::Triangle);
                dst.data_mut().copy_from_slice(&out.into_raw());
            }
            FrameFormat::Bgr24 => {
                let buf = buffer::<Rgb<u8>>(src)?;
                let out = imageops::resize(&buf, dw, dh, FilterType::Triangle);
                dst.data_mut().copy_from_slice(&out.into_raw());
            }
            FrameFormat::Bgr0 => {
                let buf = buffer::<Rgba<u8>>(src)?;
                let out = imageops::resize(&buf, dw, dh, FilterType::Triangle);
                dst.data_mut().copy_from_slice(&out.into_raw());
            }
            FrameFormat::Y16 | FrameFormat::Rgb565 => {
                return Err(VoError::unsupported("format rejected by supports()"));
            }
        }
        Ok(())
    }
}

fn buffer<P>(frame: &Frame) -> VoResult<ImageBuffer<P, Vec<u8>>>
where
    P: image::Pixel<Subpixel = u8>,
{
    ImageBuffer::from_raw(frame.width(), frame.height(), frame.data().to_vec())
        .ok_or_else(|| VoError::draw("frame buffer does not match its geometry"))
}
