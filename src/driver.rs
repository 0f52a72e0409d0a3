//! The video-output driver exposed to the host player.
//!
//! Single-threaded and synchronous: one frame is fully composited and
//! presented before the next begins. The only suspension point is the
//! bounded event wait, interruptible through the wakeup channel.

use std::time::Duration;

use crate::backend::Backend;
use crate::compose::{ScaledCache, composite_frame};
use crate::config::{Options, OsdMode};
use crate::foundation::error::{VoError, VoResult};
use crate::gfx::canvas::{Canvas, FontWeight, Palette, TextStyle};
use crate::gfx::frame::Frame;
use crate::gfx::pixel::{FrameFormat, negotiate};
use crate::gfx::scale::Scaler;
use crate::input::classify::{Classified, InputAction, classify};
use crate::input::keymap::{Key, MouseButton};
use crate::osd::progbar::render_progbar;
use crate::osd::state::OsdSource;
use crate::osd::subtitle::render_subtitle;
use crate::osd::text::{OsdStyles, render_osd_text};
use crate::wakeup::{WakeupHandle, wakeup_channel};

/// The player's abstract input queue.
pub trait InputSink {
    fn put_key(&mut self, key: Key);
    fn put_mouse_button(&mut self, button: MouseButton, down: bool);
    fn set_mouse_pos(&mut self, x: i32, y: i32);
}

/// Generic control dispatch requests from the host.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ControlRequest<'a> {
    SetCursorVisibility(bool),
    UpdateWindowTitle(&'a str),
    CheckEvents,
    OptionsChanged,
    PlaybackStateChanged,
}

/// Reply to a control request. Unhandled requests are reported as
/// not-implemented, never as errors.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ControlReply {
    Handled,
    NotImplemented,
}

/// Software video-output driver instance.
pub struct SoftVo<B: Backend, S: Scaler> {
    backend: B,
    scaler: S,
    frame_format: FrameFormat,
    self_composited_osd: bool,
    styles: OsdStyles,
    palette: Palette,
    /// Currently played frame size before rescaling.
    frame_size: (u32, u32),
    cache: ScaledCache,
    wakeup: WakeupHandle,
}

impl<B: Backend, S: Scaler> std::fmt::Debug for SoftVo<B, S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SoftVo")
            .field("frame_format", &self.frame_format)
            .field("self_composited_osd", &self.self_composited_osd)
            .field("frame_size", &self.frame_size)
            .finish_non_exhaustive()
    }
}

impl<B: Backend, S: Scaler> SoftVo<B, S> {
    /// Initialize the driver on an already-opened backend.
    ///
    /// Fails when the options are invalid or the surface's pixel encoding
    /// cannot be mapped to a frame format the scaler supports.
    pub fn new(mut backend: B, scaler: S, options: &Options) -> VoResult<Self> {
        options.validate()?;

        let pixel_type = backend.pixel_type();
        let negotiated = negotiate(pixel_type);
        if !scaler.supports(negotiated.frame_format, negotiated.frame_format) {
            return Err(VoError::init(format!(
                "no scaler support for {:?} required by surface encoding {:?}",
                negotiated.frame_format, pixel_type
            )));
        }
        tracing::info!(
            ?pixel_type,
            frame_format = ?negotiated.frame_format,
            "mapped surface encoding to frame format"
        );

        let self_composited_osd = match options.osd_mode {
            OsdMode::Auto => negotiated.self_composited_osd,
            OsdMode::SelfComposited => true,
            OsdMode::HostComposited => false,
        };

        let regular = backend.load_face(&options.osd_font, FontWeight::Regular)?;
        let bold = backend.load_face(&options.osd_font, FontWeight::Bold)?;
        let sub = backend.load_face(&options.sub_font, FontWeight::Regular)?;
        let styles = OsdStyles {
            regular: TextStyle::new(regular),
            bold: TextStyle::new(bold),
            subtitle: TextStyle::with_mul(sub, options.sub_font_mul),
        };

        let palette = Palette::resolve(backend.canvas());

        let (wakeup, rx) = wakeup_channel();
        backend.register_wakeup(rx);

        Ok(Self {
            backend,
            scaler,
            frame_format: negotiated.frame_format,
            self_composited_osd,
            styles,
            palette,
            frame_size: (0, 0),
            cache: ScaledCache::default(),
            wakeup,
        })
    }

    /// Whether the host may deliver frames in `format`.
    pub fn query_format(&self, format: FrameFormat) -> bool {
        self.scaler.supports(self.frame_format, format)
    }

    /// Frame format the scaled buffer is kept in.
    pub fn frame_format(&self) -> FrameFormat {
        self.frame_format
    }

    /// A clonable handle other threads use to interrupt the event wait.
    pub fn wakeup_handle(&self) -> WakeupHandle {
        self.wakeup.clone()
    }

    /// Adopt a new source frame size: resize the window to match and rebuild
    /// the scaled buffer for whatever surface size the backend settles on.
    #[tracing::instrument(skip(self))]
    pub fn reconfig(&mut self, frame_w: u32, frame_h: u32) -> VoResult<()> {
        if frame_w == 0 || frame_h == 0 {
            return Err(VoError::unsupported("zero-sized source frame"));
        }
        tracing::info!(frame_w, frame_h, "reconfiguring");
        self.frame_size = (frame_w, frame_h);
        self.backend.resize(frame_w, frame_h)?;
        let surface = self.backend.surface_size();
        self.cache
            .ensure(self.frame_format, self.frame_size, surface)?;
        Ok(())
    }

    /// Composite and draw one frame onto the surface. The caller presents it
    /// with [`flip`](Self::flip) afterwards.
    #[tracing::instrument(skip(self, current, osd))]
    pub fn draw_frame(&mut self, current: &Frame, pts: f64, osd: &dyn OsdSource) -> VoResult<()> {
        if self.frame_size == (0, 0) {
            return Err(VoError::draw("draw_frame before reconfig"));
        }

        let host_osd = !self.self_composited_osd;
        composite_frame(
            self.backend.canvas(),
            &mut self.scaler,
            &mut self.cache,
            self.frame_format,
            current,
            self.frame_size,
            self.palette.black,
            |scaled| {
                if host_osd {
                    osd.draw_on_frame(scaled, pts);
                }
            },
        )?;

        if self.self_composited_osd {
            self.draw_osd(osd, pts);
        }
        Ok(())
    }

    /// Self-composited OSD layer: text, progress bar, then subtitles for the
    /// current presentation timestamp.
    fn draw_osd(&mut self, osd: &dyn OsdSource, pts: f64) {
        let canvas = self.backend.canvas();

        if let Some(text) = osd.osd_text()
            && !text.is_empty()
        {
            render_osd_text(&mut *canvas, &self.styles, self.palette, text);
        }

        let progbar = osd.progbar();
        render_progbar(
            &mut *canvas,
            &self.styles.regular,
            &self.styles.subtitle,
            self.palette,
            &progbar,
        );

        if let Some(sub) = osd.sub_text(pts)
            && !sub.is_empty()
        {
            render_subtitle(canvas, &self.styles.subtitle, self.palette, &sub);
        }
    }

    /// Present the composited surface.
    pub fn flip(&mut self) {
        self.backend.flip();
    }

    /// Bounded wait for backend events, then classify and dispatch the queue.
    ///
    /// A printable-character key stops the drain for this cycle; a resize
    /// rebuilds the scaled buffer, acknowledges the backend and forces a
    /// black-fill-and-present so no stale content flashes.
    pub fn wait_events(&mut self, timeout: Duration, sink: &mut dyn InputSink) -> VoResult<()> {
        self.backend.wait_timeout(timeout);

        while let Some(event) = self.backend.poll_event() {
            match classify(&event) {
                Classified::Input(InputAction::Key(key)) => sink.put_key(key),
                Classified::Input(InputAction::MouseButton { button, down }) => {
                    sink.put_mouse_button(button, down);
                }
                Classified::Input(InputAction::MousePos { x, y }) => sink.set_mouse_pos(x, y),
                Classified::Text(ch) => {
                    sink.put_key(Key::Char(ch));
                    return Ok(());
                }
                Classified::Resize { w, h } => self.handle_resize(w, h)?,
                Classified::DrainWakeup => self.backend.drain_wakeup(),
                Classified::Ignored => {}
            }
        }
        Ok(())
    }

    fn handle_resize(&mut self, w: u32, h: u32) -> VoResult<()> {
        if self.frame_size != (0, 0) {
            self.cache.ensure(self.frame_format, self.frame_size, (w, h))?;
        }
        self.backend.resize_ack();
        let black = self.palette.black;
        self.backend.canvas().fill(black);
        self.backend.flip();
        Ok(())
    }

    /// Generic control dispatch. Unhandled requests are logged and reported
    /// as [`ControlReply::NotImplemented`]; never fatal.
    pub fn control(&mut self, request: ControlRequest<'_>) -> ControlReply {
        match request {
            ControlRequest::SetCursorVisibility(visible) => {
                self.backend.set_cursor(visible);
                ControlReply::Handled
            }
            ControlRequest::UpdateWindowTitle(title) => {
                self.backend.set_caption(title);
                ControlReply::Handled
            }
            ControlRequest::CheckEvents => ControlReply::NotImplemented,
            other => {
                tracing::debug!(?other, "unimplemented control request");
                ControlReply::NotImplemented
            }
        }
    }

    /// Tear down, returning the backend to the caller. Dropping the driver
    /// releases everything as well; this exists for hosts that reuse the
    /// backend across output instances.
    pub fn into_backend(self) -> B {
        self.backend
    }
}
