//! Pure classification of raw backend events into player input actions.

use crate::backend::{Event, KeyEvent, SysEvent};
use crate::input::keymap::{Key, Keycode, MouseButton, lookup_key};

/// An abstract input action destined for the player's input queue.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputAction {
    Key(Key),
    MouseButton { button: MouseButton, down: bool },
    MousePos { x: i32, y: i32 },
}

/// Classifier verdict for one raw event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Classified {
    /// Forward an action to the input sink.
    Input(InputAction),
    /// A printable character; forwarded as [`Key::Char`] and the event loop
    /// stops processing further queued events this wait cycle.
    Text(char),
    /// Surface resized: the compositor must reconfigure before the next draw.
    Resize { w: u32, h: u32 },
    /// Wake-up signal: drain the wakeup channel, emit nothing.
    DrainWakeup,
    /// Unmapped or irrelevant event, dropped silently.
    Ignored,
}

/// Map one raw backend event to zero or one abstract action.
pub fn classify(event: &Event) -> Classified {
    match event {
        Event::Sys(SysEvent::Quit) => Classified::Input(InputAction::Key(Key::CloseWindow)),
        Event::Sys(SysEvent::Resize { w, h }) => Classified::Resize { w: *w, h: *h },
        Event::PointerMotion { x, y } => Classified::Input(InputAction::MousePos { x: *x, y: *y }),
        Event::Key(key) => classify_key(key),
        Event::Wakeup => Classified::DrainWakeup,
    }
}

fn classify_key(key: &KeyEvent) -> Classified {
    match key.code {
        Keycode::BtnLeft => Classified::Input(InputAction::MouseButton {
            button: MouseButton::Left,
            down: key.down,
        }),
        Keycode::BtnRight => Classified::Input(InputAction::MouseButton {
            button: MouseButton::Right,
            down: key.down,
        }),
        code => {
            if !key.down {
                return Classified::Ignored;
            }
            // A printable character payload wins over the table lookup.
            if let Some(ch) = key.ch
                && !ch.is_control()
            {
                return Classified::Text(ch);
            }
            match lookup_key(code) {
                Some(mapped) => Classified::Input(InputAction::Key(mapped)),
                None => Classified::Ignored,
            }
        }
    }
}
