//! Software video-output backend for media players.
//!
//! Bridges a player's playback pipeline to a software graphics library:
//! aspect-preserving frame compositing with letterboxing, OSD text with a
//! style-tag escape interpreter, two-line subtitles, a chapter-aware
//! progress bar, and translation of raw backend input events into the
//! player's abstract key namespace.
//!
//! The graphics backend, the frame scaler and the host's OSD state are
//! collaborators behind the [`Backend`], [`Scaler`] and [`OsdSource`]
//! traits; the driver itself is [`SoftVo`].

#![forbid(unsafe_code)]

pub mod backend;
pub mod compose;
pub mod config;
pub mod driver;
pub mod foundation;
pub mod gfx;
pub mod input;
pub mod osd;
pub mod wakeup;

pub use backend::{Backend, Event, KeyEvent, SysEvent};
pub use compose::{RectXywh, ScaledCache, center_offsets, fit_scale, letterbox_rects};
pub use config::{Options, OsdMode};
pub use driver::{ControlReply, ControlRequest, InputSink, SoftVo};
pub use foundation::error::{VoError, VoResult};
pub use gfx::canvas::{Align, Canvas, Dither, FaceId, FontWeight, HAlign, Palette, TextStyle, VAlign};
pub use gfx::frame::Frame;
pub use gfx::pixel::{FrameFormat, Negotiated, Pixel, PixelType, negotiate};
pub use gfx::scale::{ImageScaler, Scaler};
pub use input::classify::{Classified, InputAction, classify};
pub use input::keymap::{KEYMAP, Key, Keycode, MouseButton, lookup_key};
pub use osd::escape::{Directive, EscapeTokens, Token};
pub use osd::state::{ICON_PAUSE, ICON_PLAY, OsdSource, ProgbarState};
pub use osd::text::OsdStyles;
pub use wakeup::{WakeupHandle, WakeupReceiver, wakeup_channel};
