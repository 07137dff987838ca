//! Host-facing input event model consumed by interactive components.
//!
//! The host framework translates its terminal backend events into `Event`
//! values and delivers them one at a time; components answer with a
//! handled / not-handled bool so unhandled events can bubble to the
//! surrounding focus and navigation logic.

use std::borrow::Cow;
use std::fmt;

/// A single event delivered to a component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Key(KeyEvent),
    /// Committed text from a paste or IME composition. Treated as one
    /// character-sequence insertion.
    Text(String),
    Mouse(MouseEvent),
    /// Terminal resize (columns, rows).
    Resize(u16, u16),
    FocusGained,
    FocusLost,
}

impl Event {
    pub const RETURN: Event = Event::Key(KeyEvent::plain(KeyCode::Enter));
    pub const BACKSPACE: Event = Event::Key(KeyEvent::plain(KeyCode::Backspace));
    pub const DELETE: Event = Event::Key(KeyEvent::plain(KeyCode::Delete));
    pub const ARROW_UP: Event = Event::Key(KeyEvent::plain(KeyCode::Up));
    pub const ARROW_DOWN: Event = Event::Key(KeyEvent::plain(KeyCode::Down));
    pub const ARROW_LEFT: Event = Event::Key(KeyEvent::plain(KeyCode::Left));
    pub const ARROW_RIGHT: Event = Event::Key(KeyEvent::plain(KeyCode::Right));
    pub const ESCAPE: Event = Event::Key(KeyEvent::plain(KeyCode::Esc));

    /// Unmodified key press of a printable character.
    pub fn character(c: char) -> Self {
        Event::Key(KeyEvent::plain(KeyCode::Char(c)))
    }

    pub fn key(code: KeyCode, mods: KeyModifiers) -> Self {
        Event::Key(KeyEvent { code, mods })
    }

    fn key_code(&self) -> Option<KeyCode> {
        match self {
            Event::Key(k) => Some(k.code),
            _ => None,
        }
    }

    pub fn is_return(&self) -> bool {
        self.key_code() == Some(KeyCode::Enter)
    }

    pub fn is_backspace(&self) -> bool {
        self.key_code() == Some(KeyCode::Backspace)
    }

    pub fn is_arrow_up(&self) -> bool {
        self.key_code() == Some(KeyCode::Up)
    }

    pub fn is_arrow_down(&self) -> bool {
        self.key_code() == Some(KeyCode::Down)
    }

    /// The printable character sequence this event carries, if any.
    ///
    /// A key press qualifies when it is a non-control character without CTRL
    /// or ALT held (SHIFT is part of the character). A text commit qualifies
    /// when it is non-empty and its only control characters are line breaks;
    /// `\r\n` and lone `\r` come back as `\n`.
    pub fn printable(&self) -> Option<Cow<'_, str>> {
        match self {
            Event::Key(KeyEvent {
                code: KeyCode::Char(c),
                mods,
            }) if !c.is_control() && !mods.intersects(KeyModifiers::CTRL | KeyModifiers::ALT) => {
                Some(Cow::Owned(c.to_string()))
            }
            Event::Text(s)
                if !s.is_empty() && s.chars().all(|c| matches!(c, '\n' | '\r') || !c.is_control()) =>
            {
                if s.contains('\r') {
                    Some(Cow::Owned(s.replace("\r\n", "\n").replace('\r', "\n")))
                } else {
                    Some(Cow::Borrowed(s.as_str()))
                }
            }
            _ => None,
        }
    }

    pub fn is_character(&self) -> bool {
        self.printable().is_some()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyEvent {
    pub code: KeyCode,
    pub mods: KeyModifiers,
}

impl KeyEvent {
    pub const fn plain(code: KeyCode) -> Self {
        Self {
            code,
            mods: KeyModifiers::empty(),
        }
    }
}

/// Normalized logical keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    Char(char),
    Enter,
    Esc,
    Backspace,
    Delete,
    Tab,
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
}

bitflags::bitflags! {
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct KeyModifiers: u8 {
        const CTRL = 0b0000_0001;
        const ALT  = 0b0000_0010;
        const SHIFT= 0b0000_0100;
    }
}

impl fmt::Display for KeyEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}{:?}", self.code, self.mods)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MouseEvent {
    pub kind: MouseEventKind,
    pub column: u16,
    pub row: u16,
    pub mods: KeyModifiers,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseEventKind {
    Down(MouseButton),
    Up(MouseButton),
    Drag(MouseButton),
    ScrollUp,
    ScrollDown,
    Moved,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Middle,
    Right,
}
