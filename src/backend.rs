//! Graphics-backend collaborator: window, surface, fonts and the event queue.
//!
//! Everything the driver needs from the windowing side of a software
//! graphics library. Implementations wrap a real backend (framebuffer, X11,
//! SDL, ...); tests use a recording fake.

use std::time::Duration;

use crate::foundation::error::VoResult;
use crate::gfx::canvas::{Canvas, FaceId, FontWeight};
use crate::gfx::pixel::PixelType;
use crate::input::keymap::Keycode;
use crate::wakeup::WakeupReceiver;

/// Window-system event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SysEvent {
    /// The window was asked to close.
    Quit,
    /// The surface was resized to the given dimensions.
    Resize { w: u32, h: u32 },
}

/// A key or pointer-button transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KeyEvent {
    pub code: Keycode,
    /// Press (`true`) or release.
    pub down: bool,
    /// Printable character payload, if the backend decoded one.
    pub ch: Option<char>,
}

/// Raw event polled from the backend queue.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Event {
    Sys(SysEvent),
    /// Absolute pointer position in surface coordinates.
    PointerMotion { x: i32, y: i32 },
    Key(KeyEvent),
    /// The registered wakeup channel was signaled.
    Wakeup,
}

/// The graphics backend the driver renders through.
pub trait Backend {
    type Canvas: Canvas;

    /// The output surface. Geometry is stable between resize events.
    fn canvas(&mut self) -> &mut Self::Canvas;

    /// Pixel encoding of the surface, fixed at backend initialization.
    fn pixel_type(&self) -> PixelType;

    /// Current surface dimensions.
    fn surface_size(&self) -> (u32, u32);

    /// Look up a font face by family name and weight, falling back to the
    /// backend default family when the name is unknown.
    fn load_face(&mut self, family: &str, weight: FontWeight) -> VoResult<FaceId>;

    /// Ask the window system for a new surface size. The actual size arrives
    /// later as a [`SysEvent::Resize`] event.
    fn resize(&mut self, w: u32, h: u32) -> VoResult<()>;

    /// Acknowledge a resize event; the backend swaps in the new surface.
    fn resize_ack(&mut self);

    /// Present the surface to the display.
    fn flip(&mut self);

    fn set_caption(&mut self, title: &str);

    fn set_cursor(&mut self, visible: bool);

    /// Register the wakeup receiver. The backend must end a
    /// [`wait_timeout`](Self::wait_timeout) early when it is signaled and
    /// then yield [`Event::Wakeup`] from [`poll_event`](Self::poll_event).
    fn register_wakeup(&mut self, rx: WakeupReceiver);

    /// Drop queued wakeup signals after an [`Event::Wakeup`] was handled.
    fn drain_wakeup(&mut self);

    /// Block until an event arrives, the wakeup channel is signaled, or the
    /// timeout elapses.
    fn wait_timeout(&mut self, timeout: Duration);

    /// Pop the next queued event, if any.
    fn poll_event(&mut self) -> Option<Event>;
}
