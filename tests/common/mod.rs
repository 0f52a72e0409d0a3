//! Recording fakes shared by the integration tests: a canvas that logs every
//! primitive call, a backend with a scripted event queue, a permissive
//! scaler and a scripted OSD source.

#![allow(dead_code)]

use std::cell::Cell;
use std::collections::VecDeque;
use std::time::Duration;

use softvo::{
    Align, Backend, Canvas, Dither, Event, FaceId, FontWeight, Frame, FrameFormat, Key, Keycode,
    MouseButton, OsdSource, Pixel, PixelType, ProgbarState, Scaler, VoResult, WakeupReceiver,
};

pub const CHAR_W: u32 = 6;
pub const LINE_H: u32 = 8;

#[derive(Clone, Debug, PartialEq)]
pub enum Op {
    Fill {
        color: Pixel,
    },
    FillRect {
        x: i32,
        y: i32,
        w: u32,
        h: u32,
        color: Pixel,
    },
    Rect {
        x: i32,
        y: i32,
        w: u32,
        h: u32,
        color: Pixel,
    },
    Vline {
        x: i32,
        y: i32,
        h: u32,
        color: Pixel,
    },
    Blit {
        src_w: u32,
        src_h: u32,
        dst_x: i32,
        dst_y: i32,
        dither: Dither,
    },
    Text {
        face: FaceId,
        x: i32,
        y: i32,
        align: Align,
        fg: Pixel,
        text: String,
    },
}

pub struct FakeCanvas {
    pub width: u32,
    pub height: u32,
    pub pixel_type: PixelType,
    pub ops: Vec<Op>,
}

impl FakeCanvas {
    pub fn new(width: u32, height: u32, pixel_type: PixelType) -> Self {
        Self {
            width,
            height,
            pixel_type,
            ops: Vec::new(),
        }
    }

    pub fn texts(&self) -> Vec<&Op> {
        self.ops
            .iter()
            .filter(|op| matches!(op, Op::Text { .. }))
            .collect()
    }
}

pub fn rgb(r: u8, g: u8, b: u8) -> Pixel {
    Pixel((r as u32) << 16 | (g as u32) << 8 | b as u32)
}

pub const WHITE: Pixel = Pixel(0x00ff_ffff);
pub const BLACK: Pixel = Pixel(0);

impl Canvas for FakeCanvas {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn pixel_type(&self) -> PixelType {
        self.pixel_type
    }

    fn rgb_to_pixel(&self, r: u8, g: u8, b: u8) -> Pixel {
        rgb(r, g, b)
    }

    fn fill(&mut self, color: Pixel) {
        self.ops.push(Op::Fill { color });
    }

    fn fill_rect(&mut self, x: i32, y: i32, w: u32, h: u32, color: Pixel) {
        self.ops.push(Op::FillRect { x, y, w, h, color });
    }

    fn rect(&mut self, x: i32, y: i32, w: u32, h: u32, color: Pixel) {
        self.ops.push(Op::Rect { x, y, w, h, color });
    }

    fn vline(&mut self, x: i32, y: i32, h: u32, color: Pixel) {
        self.ops.push(Op::Vline { x, y, h, color });
    }

    fn blit_frame(
        &mut self,
        src: &Frame,
        src_w: u32,
        src_h: u32,
        dst_x: i32,
        dst_y: i32,
        dither: Dither,
    ) -> VoResult<()> {
        let _ = src;
        self.ops.push(Op::Blit {
            src_w,
            src_h,
            dst_x,
            dst_y,
            dither,
        });
        Ok(())
    }

    fn text_height(&self, style: &softvo::TextStyle) -> u32 {
        LINE_H * style.ymul
    }

    fn text_avg_width(&self, style: &softvo::TextStyle) -> u32 {
        CHAR_W * style.xmul
    }

    fn draw_text(
        &mut self,
        style: &softvo::TextStyle,
        x: i32,
        y: i32,
        align: Align,
        fg: Pixel,
        _bg: Pixel,
        text: &str,
    ) -> u32 {
        self.ops.push(Op::Text {
            face: style.face,
            x,
            y,
            align,
            fg,
            text: text.to_string(),
        });
        text.chars().count() as u32 * CHAR_W * style.xmul
    }
}

pub struct FakeBackend {
    pub canvas: FakeCanvas,
    pub events: VecDeque<Event>,
    pub wakeup: Option<WakeupReceiver>,
    pub faces: Vec<(String, FontWeight)>,
    pub resizes: Vec<(u32, u32)>,
    pub resize_acks: u32,
    pub flips: u32,
    pub captions: Vec<String>,
    pub cursor_visible: Option<bool>,
    pub wakeup_drains: u32,
}

impl FakeBackend {
    pub fn new(width: u32, height: u32, pixel_type: PixelType) -> Self {
        Self {
            canvas: FakeCanvas::new(width, height, pixel_type),
            events: VecDeque::new(),
            wakeup: None,
            faces: Vec::new(),
            resizes: Vec::new(),
            resize_acks: 0,
            flips: 0,
            captions: Vec::new(),
            cursor_visible: None,
            wakeup_drains: 0,
        }
    }

    pub fn queue(&mut self, event: Event) {
        self.events.push_back(event);
    }
}

impl Backend for FakeBackend {
    type Canvas = FakeCanvas;

    fn canvas(&mut self) -> &mut FakeCanvas {
        &mut self.canvas
    }

    fn pixel_type(&self) -> PixelType {
        self.canvas.pixel_type
    }

    fn surface_size(&self) -> (u32, u32) {
        (self.canvas.width, self.canvas.height)
    }

    fn load_face(&mut self, family: &str, weight: FontWeight) -> VoResult<FaceId> {
        self.faces.push((family.to_string(), weight));
        Ok(FaceId(self.faces.len() as u32 - 1))
    }

    fn resize(&mut self, w: u32, h: u32) -> VoResult<()> {
        self.resizes.push((w, h));
        Ok(())
    }

    fn resize_ack(&mut self) {
        self.resize_acks += 1;
    }

    fn flip(&mut self) {
        self.flips += 1;
    }

    fn set_caption(&mut self, title: &str) {
        self.captions.push(title.to_string());
    }

    fn set_cursor(&mut self, visible: bool) {
        self.cursor_visible = Some(visible);
    }

    fn register_wakeup(&mut self, rx: WakeupReceiver) {
        self.wakeup = Some(rx);
    }

    fn drain_wakeup(&mut self) {
        self.wakeup_drains += 1;
        if let Some(rx) = &self.wakeup {
            rx.drain();
        }
    }

    fn wait_timeout(&mut self, timeout: Duration) {
        // Scripted queue: only honor the wakeup channel, never sleep.
        if self.events.is_empty()
            && let Some(rx) = &self.wakeup
        {
            let _ = timeout;
            if rx.signaled() {
                self.events.push_back(Event::Wakeup);
            }
        }
    }

    fn poll_event(&mut self) -> Option<Event> {
        self.events.pop_front()
    }
}

/// Scaler accepting any same-format pair, filling the destination with 0xAB.
#[derive(Default)]
pub struct AnyScaler;

impl Scaler for AnyScaler {
    fn supports(&self, _dst: FrameFormat, _src: FrameFormat) -> bool {
        true
    }

    fn scale(&mut self, dst: &mut Frame, _src: &Frame) -> VoResult<()> {
        dst.data_mut().fill(0xab);
        Ok(())
    }
}

/// Scripted OSD source.
#[derive(Default)]
pub struct StubOsd {
    pub text: Option<Vec<u8>>,
    pub progbar: ProgbarState,
    pub sub: Option<String>,
    pub host_draws: Cell<u32>,
}

impl OsdSource for StubOsd {
    fn osd_text(&self) -> Option<&[u8]> {
        self.text.as_deref()
    }

    fn progbar(&self) -> ProgbarState {
        self.progbar.clone()
    }

    fn sub_text(&self, _pts: f64) -> Option<String> {
        self.sub.clone()
    }

    fn draw_on_frame(&self, _frame: &mut Frame, _pts: f64) {
        self.host_draws.set(self.host_draws.get() + 1);
    }
}

/// Input sink recording every dispatched action in order.
#[derive(Default)]
pub struct RecordingSink {
    pub keys: Vec<Key>,
    pub buttons: Vec<(MouseButton, bool)>,
    pub positions: Vec<(i32, i32)>,
}

impl softvo::InputSink for RecordingSink {
    fn put_key(&mut self, key: Key) {
        self.keys.push(key);
    }

    fn put_mouse_button(&mut self, button: MouseButton, down: bool) {
        self.buttons.push((button, down));
    }

    fn set_mouse_pos(&mut self, x: i32, y: i32) {
        self.positions.push((x, y));
    }
}

/// Convenience key event constructor.
pub fn key_event(code: Keycode, down: bool, ch: Option<char>) -> Event {
    Event::Key(softvo::KeyEvent { code, down, ch })
}
