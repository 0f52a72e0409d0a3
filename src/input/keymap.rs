//! Backend and player key namespaces plus the static mapping between them.

/// Key codes in the graphics backend's namespace.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Keycode {
    Pause,
    Esc,
    Backspace,
    Tab,
    Enter,
    Menu,
    Print,
    Cancel,

    Left,
    Right,
    Up,
    Down,

    Insert,
    Delete,
    Home,
    End,
    PageUp,
    PageDown,

    /// Function keys F1..=F24.
    Fn(u8),

    KpPlus,
    KpMinus,
    KpAsterisk,
    KpSlash,
    KpEnter,
    /// Keypad digits 0..=9.
    Kp(u8),
    KpDot,

    BtnLeft,
    BtnRight,

    /// Any backend key with no entry in the mapping table.
    Other(u32),
}

/// Abstract key codes in the player's input namespace.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    Pause,
    Esc,
    Backspace,
    Tab,
    Enter,
    Menu,
    Print,
    Cancel,

    Left,
    Right,
    Up,
    Down,

    Insert,
    Delete,
    Home,
    End,
    PageUp,
    PageDown,

    Fn(u8),

    KpAdd,
    KpSubtract,
    KpMultiply,
    KpDivide,
    KpEnter,
    Kp(u8),
    KpDecimal,

    /// Window-close request from the windowing system.
    CloseWindow,
    /// A printable character delivered directly by the backend.
    Char(char),
}

/// Pointer buttons the classifier reports separately from keys.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MouseButton {
    Left,
    Right,
}

/// Backend-to-player key mapping, searched linearly, first match wins.
/// Entries are unique per backend key code by construction.
pub static KEYMAP: &[(Keycode, Key)] = &[
    (Keycode::Pause, Key::Pause),
    (Keycode::Esc, Key::Esc),
    (Keycode::Backspace, Key::Backspace),
    (Keycode::Tab, Key::Tab),
    (Keycode::Enter, Key::Enter),
    (Keycode::Menu, Key::Menu),
    (Keycode::Print, Key::Print),
    (Keycode::Cancel, Key::Cancel),
    (Keycode::Left, Key::Left),
    (Keycode::Right, Key::Right),
    (Keycode::Up, Key::Up),
    (Keycode::Down, Key::Down),
    (Keycode::Insert, Key::Insert),
    (Keycode::Delete, Key::Delete),
    (Keycode::Home, Key::Home),
    (Keycode::End, Key::End),
    (Keycode::PageUp, Key::PageUp),
    (Keycode::PageDown, Key::PageDown),
    (Keycode::Fn(1), Key::Fn(1)),
    (Keycode::Fn(2), Key::Fn(2)),
    (Keycode::Fn(3), Key::Fn(3)),
    (Keycode::Fn(4), Key::Fn(4)),
    (Keycode::Fn(5), Key::Fn(5)),
    (Keycode::Fn(6), Key::Fn(6)),
    (Keycode::Fn(7), Key::Fn(7)),
    (Keycode::Fn(8), Key::Fn(8)),
    (Keycode::Fn(9), Key::Fn(9)),
    (Keycode::Fn(10), Key::Fn(10)),
    (Keycode::Fn(11), Key::Fn(11)),
    (Keycode::Fn(12), Key::Fn(12)),
    (Keycode::Fn(13), Key::Fn(13)),
    (Keycode::Fn(14), Key::Fn(14)),
    (Keycode::Fn(15), Key::Fn(15)),
    (Keycode::Fn(16), Key::Fn(16)),
    (Keycode::Fn(17), Key::Fn(17)),
    (Keycode::Fn(18), Key::Fn(18)),
    (Keycode::Fn(19), Key::Fn(19)),
    (Keycode::Fn(20), Key::Fn(20)),
    (Keycode::Fn(21), Key::Fn(21)),
    (Keycode::Fn(22), Key::Fn(22)),
    (Keycode::Fn(23), Key::Fn(23)),
    (Keycode::Fn(24), Key::Fn(24)),
    (Keycode::KpPlus, Key::KpAdd),
    (Keycode::KpMinus, Key::KpSubtract),
    (Keycode::KpAsterisk, Key::KpMultiply),
    (Keycode::KpSlash, Key::KpDivide),
    (Keycode::KpEnter, Key::KpEnter),
    (Keycode::Kp(0), Key::Kp(0)),
    (Keycode::Kp(1), Key::Kp(1)),
    (Keycode::Kp(2), Key::Kp(2)),
    (Keycode::Kp(3), Key::Kp(3)),
    (Keycode::Kp(4), Key::Kp(4)),
    (Keycode::Kp(5), Key::Kp(5)),
    (Keycode::Kp(6), Key::Kp(6)),
    (Keycode::Kp(7), Key::Kp(7)),
    (Keycode::Kp(8), Key::Kp(8)),
    (Keycode::Kp(9), Key::Kp(9)),
    (Keycode::KpDot, Key::KpDecimal),
];

/// Look up a backend key in [`KEYMAP`]; `None` drops the event silently.
pub fn lookup_key(code: Keycode) -> Option<Key> {
    KEYMAP
        .iter()
        .find(|(from, _)| *from == code)
        .map(|&(_, to)| to)
}
