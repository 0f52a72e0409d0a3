use crate::foundation::error::{VoError, VoResult};
use crate::gfx::pixel::FrameFormat;

/// Owned pixel buffer for a decoded or rescaled video frame.
///
/// Rows are tightly packed: `stride == width * bytes_per_pixel`. The scaled
/// frame buffer held by the compositor is always a `Frame`; decoded frames
/// handed in by the host use the same type.
#[derive(Clone, Debug)]
pub struct Frame {
    format: FrameFormat,
    width: u32,
    height: u32,
    stride: usize,
    data: Vec<u8>,
}

impl Frame {
    /// Allocate a zero-filled frame.
    ///
    /// Allocation failure is reported as a recoverable [`VoError::Draw`]
    /// rather than aborting: the caller drops the frame and keeps playing.
    pub fn alloc(format: FrameFormat, width: u32, height: u32) -> VoResult<Self> {
        if width == 0 || height == 0 {
            return Err(VoError::draw("frame dimensions must be non-zero"));
        }
        let stride = (width as usize)
            .checked_mul(format.bytes_per_pixel())
            .ok_or_else(|| VoError::draw("frame stride overflow"))?;
        let len = stride
            .checked_mul(height as usize)
            .ok_or_else(|| VoError::draw("frame size overflow"))?;

        let mut data = Vec::new();
        data.try_reserve_exact(len)
            .map_err(|_| VoError::draw(format!("failed to allocate {len}-byte frame buffer")))?;
        data.resize(len, 0);

        Ok(Self {
            format,
            width,
            height,
            stride,
            data,
        })
    }

    /// Wrap host-supplied pixel data. The buffer length must match the
    /// packed geometry exactly.
    pub fn from_data(format: FrameFormat, width: u32, height: u32, data: Vec<u8>) -> VoResult<Self> {
        if width == 0 || height == 0 {
            return Err(VoError::draw("frame dimensions must be non-zero"));
        }
        let stride = width as usize * format.bytes_per_pixel();
        if data.len() != stride * height as usize {
            return Err(VoError::draw(format!(
                "frame data length {} does not match {}x{} {:?}",
                data.len(),
                width,
                height,
                format,
            )));
        }
        Ok(Self {
            format,
            width,
            height,
            stride,
            data,
        })
    }

    pub fn format(&self) -> FrameFormat {
        self.format
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn stride(&self) -> usize {
        self.stride
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Consume the frame, returning the raw buffer.
    pub fn into_data(self) -> Vec<u8> {
        self.data
    }
}
