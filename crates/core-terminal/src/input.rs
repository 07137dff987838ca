//! crossterm -> `core_events` translation.
//!
//! Key releases and repeats-as-release (Windows) are dropped; only presses
//! reach the control. Keys with no logical counterpart yield `None`.

use core_events::{Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use crossterm::event::{
    Event as CEvent, KeyCode as CKey, KeyEvent as CKeyEvent, KeyEventKind, KeyModifiers as CMods,
    MouseButton as CButton, MouseEvent as CMouseEvent, MouseEventKind as CMouseKind,
};

pub fn map_mods(m: CMods) -> KeyModifiers {
    let mut out = KeyModifiers::empty();
    if m.contains(CMods::CONTROL) {
        out |= KeyModifiers::CTRL;
    }
    if m.contains(CMods::ALT) {
        out |= KeyModifiers::ALT;
    }
    if m.contains(CMods::SHIFT) {
        out |= KeyModifiers::SHIFT;
    }
    out
}

fn map_key(k: &CKeyEvent) -> Option<KeyEvent> {
    if k.kind == KeyEventKind::Release {
        return None;
    }
    let code = match k.code {
        CKey::Char(c) => KeyCode::Char(c),
        CKey::Enter => KeyCode::Enter,
        CKey::Esc => KeyCode::Esc,
        CKey::Backspace => KeyCode::Backspace,
        CKey::Delete => KeyCode::Delete,
        CKey::Tab => KeyCode::Tab,
        CKey::Up => KeyCode::Up,
        CKey::Down => KeyCode::Down,
        CKey::Left => KeyCode::Left,
        CKey::Right => KeyCode::Right,
        CKey::Home => KeyCode::Home,
        CKey::End => KeyCode::End,
        _ => return None,
    };
    Some(KeyEvent {
        code,
        mods: map_mods(k.modifiers),
    })
}

fn map_button(b: CButton) -> MouseButton {
    match b {
        CButton::Left => MouseButton::Left,
        CButton::Middle => MouseButton::Middle,
        CButton::Right => MouseButton::Right,
    }
}

fn map_mouse(m: &CMouseEvent) -> Option<MouseEvent> {
    let kind = match m.kind {
        CMouseKind::Down(b) => MouseEventKind::Down(map_button(b)),
        CMouseKind::Up(b) => MouseEventKind::Up(map_button(b)),
        CMouseKind::Drag(b) => MouseEventKind::Drag(map_button(b)),
        CMouseKind::Moved => MouseEventKind::Moved,
        CMouseKind::ScrollUp => MouseEventKind::ScrollUp,
        CMouseKind::ScrollDown => MouseEventKind::ScrollDown,
        _ => return None,
    };
    Some(MouseEvent {
        kind,
        column: m.column,
        row: m.row,
        mods: map_mods(m.modifiers),
    })
}

pub fn translate(ev: &CEvent) -> Option<Event> {
    match ev {
        CEvent::Key(k) => map_key(k).map(Event::Key),
        CEvent::Mouse(m) => map_mouse(m).map(Event::Mouse),
        CEvent::Paste(s) => {
            tracing::trace!(target: "input.paste", chunk_len = s.len(), "paste");
            Some(Event::Text(s.clone()))
        }
        CEvent::Resize(w, h) => Some(Event::Resize(*w, *h)),
        CEvent::FocusGained => Some(Event::FocusGained),
        CEvent::FocusLost => Some(Event::FocusLost),
    }
}
