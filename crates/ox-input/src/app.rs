//! Demo application state: one input control plus host-side focus, hover and
//! key bindings the control leaves unhandled.

use core_events::{Event, KeyCode, KeyModifiers, MouseEventKind};
use core_render::{Element, text, vbox};
use core_widget::{Component, Input, InputOption, TextRef};
use std::cell::Cell;
use std::rc::Rc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct App {
    input: Input,
    content: TextRef,
    focused: bool,
    changes: Rc<Cell<u32>>,
    enters: Rc<Cell<u32>>,
}

impl App {
    pub fn new(option: InputOption) -> Self {
        let changes = Rc::new(Cell::new(0));
        let enters = Rc::new(Cell::new(0));
        let (c, e) = (changes.clone(), enters.clone());
        let option = option
            .on_change(move || c.set(c.get() + 1))
            .on_enter(move || e.set(e.get() + 1));
        let content = option.content.clone();
        Self {
            input: Input::new(option),
            content,
            focused: true,
            changes,
            enters,
        }
    }

    pub fn input(&self) -> &Input {
        &self.input
    }

    pub fn focused(&self) -> bool {
        self.focused
    }

    pub fn changes(&self) -> u32 {
        self.changes.get()
    }

    pub fn enters(&self) -> u32 {
        self.enters.get()
    }

    /// Header, the control, and a status line with counters (never content).
    pub fn view(&mut self) -> Element {
        let status = format!(
            "bytes={} cursor={} changes={} enters={}{}",
            self.content.len(),
            self.input.cursor(),
            self.changes.get(),
            self.enters.get(),
            if self.focused { "" } else { " (unfocused)" },
        );
        vbox(vec![
            text("ox-input  Esc quits, click to focus").dim(),
            self.input.render(self.focused),
            text(status).dim(),
        ])
    }

    pub fn handle(&mut self, event: &Event) -> Flow {
        if let Event::Key(k) = event {
            let ctrl = k.mods.contains(KeyModifiers::CTRL);
            if k.code == KeyCode::Esc || (ctrl && k.code == KeyCode::Char('c')) {
                return Flow::Quit;
            }
        }
        if let Event::Mouse(m) = event {
            let inside = self.input.control_region().contains(m.column, m.row);
            match m.kind {
                MouseEventKind::Moved => self.input.set_hovered(inside),
                MouseEventKind::Down(_) => self.focused = inside,
                _ => {}
            }
            return Flow::Continue;
        }
        match event {
            Event::FocusLost => self.focused = false,
            Event::FocusGained => self.focused = true,
            _ => {}
        }
        if !self.focused {
            return Flow::Continue;
        }
        if !self.input.on_event(event) {
            self.fallback(event);
        }
        Flow::Continue
    }

    /// Keys the control propagates: Delete and horizontal motions.
    fn fallback(&mut self, event: &Event) {
        let Event::Key(k) = event else {
            return;
        };
        let word = k.mods.contains(KeyModifiers::CTRL);
        let moved = match k.code {
            KeyCode::Delete => self.input.edit(|s| s.delete_forward()),
            KeyCode::Left if word => self.input.edit(|s| s.move_word_left()),
            KeyCode::Right if word => self.input.edit(|s| s.move_word_right()),
            KeyCode::Left => self.input.edit(|s| s.move_left()),
            KeyCode::Right => self.input.edit(|s| s.move_right()),
            KeyCode::Home => self.input.edit(|s| {
                let mut any = false;
                while s.move_left() {
                    any = true;
                }
                any
            }),
            KeyCode::End => self.input.edit(|s| {
                let mut any = false;
                while s.move_right() {
                    any = true;
                }
                any
            }),
            _ => false,
        };
        tracing::trace!(target: "runtime", key = %k, moved, "fallback_key");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_events::{KeyEvent, MouseButton, MouseEvent};
    use core_render::Canvas;

    fn app(content: &str) -> App {
        App::new(InputOption::default().with_content(TextRef::new(content)))
    }

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> Event {
        Event::Mouse(MouseEvent {
            kind,
            column,
            row,
            mods: KeyModifiers::empty(),
        })
    }

    #[test]
    fn typing_counts_changes() {
        let mut a = app("");
        a.handle(&Event::character('a'));
        a.handle(&Event::Text("bc".into()));
        a.handle(&Event::RETURN);
        assert_eq!(a.content.get(), "abc");
        assert_eq!(a.changes(), 2);
        assert_eq!(a.enters(), 1);
    }

    #[test]
    fn multiline_paste_reaches_the_control() {
        let mut option = InputOption::default();
        option.multiline = true;
        let mut a = App::new(option);
        a.handle(&Event::Text("a\nb".into()));
        assert_eq!(a.content.get(), "a\nb");
        assert_eq!(a.changes(), 1);
        assert_eq!(a.enters(), 0);
    }

    #[test]
    fn escape_and_ctrl_c_quit() {
        let mut a = app("");
        assert_eq!(a.handle(&Event::Key(KeyEvent::plain(KeyCode::Esc))), Flow::Quit);
        assert_eq!(
            a.handle(&Event::key(KeyCode::Char('c'), KeyModifiers::CTRL)),
            Flow::Quit
        );
    }

    #[test]
    fn hover_and_click_use_last_frame_region() {
        let mut a = app("hey");
        let _ = Canvas::render(&a.view(), 20, 3);
        a.handle(&mouse(MouseEventKind::Moved, 1, 1));
        assert!(a.input().hovered());
        a.handle(&mouse(MouseEventKind::Moved, 1, 2));
        assert!(!a.input().hovered());
        a.handle(&mouse(MouseEventKind::Down(MouseButton::Left), 0, 0));
        assert!(!a.focused());
        a.handle(&Event::character('x'));
        assert_eq!(a.content.get(), "hey");
        a.handle(&mouse(MouseEventKind::Down(MouseButton::Left), 3, 1));
        assert!(a.focused());
    }

    #[test]
    fn unhandled_keys_fall_back_to_host_bindings() {
        let mut a = app("one two");
        a.handle(&Event::key(KeyCode::Left, KeyModifiers::CTRL));
        assert_eq!(a.input().cursor(), 4);
        a.handle(&Event::Key(KeyEvent::plain(KeyCode::Delete)));
        assert_eq!(a.content.get(), "one wo");
        a.handle(&Event::Key(KeyEvent::plain(KeyCode::Home)));
        assert_eq!(a.input().cursor(), 0);
        a.handle(&Event::ARROW_RIGHT);
        assert_eq!(a.input().cursor(), 1);
        a.handle(&Event::Key(KeyEvent::plain(KeyCode::End)));
        assert_eq!(a.input().cursor(), 6);
    }
}
