//! The `Input` control: an `InputOption` plus per-control cursor and hover
//! state, exposed through `Component`.
//!
//! The content buffer is borrowed only inside `edit`; `render` works on a
//! copy. Callbacks fire after the borrow is released, so an on-change handler
//! may read the buffer it was notified about, and a transform may write to it.

use crate::component::Component;
use crate::option::InputOption;
use crate::render::{HitRegions, RenderState, render_input};
use core_actions::{EditObserver, EditPolicy, EditSession, dispatch};
use core_events::Event;
use core_render::{Element, Rect};
use core_text::motion;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Notice {
    Change,
    Enter,
}

/// Collects callbacks raised during an edit so they can run afterwards.
#[derive(Default)]
struct Deferred(Vec<Notice>);

impl EditObserver for Deferred {
    fn on_change(&mut self) {
        self.0.push(Notice::Change);
    }
    fn on_enter(&mut self) {
        self.0.push(Notice::Enter);
    }
}

#[derive(Debug)]
pub struct Input {
    option: InputOption,
    cursor: usize,
    hovered: bool,
    regions: HitRegions,
}

impl Input {
    /// The cursor starts at the end of the current content.
    pub fn new(option: InputOption) -> Self {
        let cursor = option.content.len();
        Self {
            option,
            cursor,
            hovered: false,
            regions: HitRegions::default(),
        }
    }

    pub fn option(&self) -> &InputOption {
        &self.option
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Stored as given; clamped on the next event or render.
    pub fn set_cursor(&mut self, cursor: usize) {
        self.cursor = cursor;
    }

    pub fn hovered(&self) -> bool {
        self.hovered
    }

    /// Whole-control region from the last rasterized frame.
    pub fn control_region(&self) -> Rect {
        self.regions.control.get()
    }

    /// Cursor cell region from the last rasterized frame; empty when no cursor
    /// cell was drawn.
    pub fn cursor_region(&self) -> Rect {
        self.regions.cursor.get()
    }

    fn policy(&self) -> EditPolicy {
        EditPolicy {
            multiline: self.option.multiline,
            insert: (self.option.insert)(),
            max_len: self.option.max_len,
        }
    }

    /// Run `f` on an edit session over the shared buffer, then fire the
    /// callbacks it raised in order.
    pub fn edit<R>(&mut self, f: impl FnOnce(&mut EditSession<'_>) -> R) -> R {
        let policy = self.policy();
        let content = self.option.content.clone();
        let mut deferred = Deferred::default();
        let out = {
            let mut buf = content.borrow_mut();
            let mut session = EditSession::new(&mut buf, &mut self.cursor, policy, &mut deferred);
            f(&mut session)
        };
        for notice in deferred.0 {
            match notice {
                Notice::Change => (self.option.on_change)(),
                Notice::Enter => (self.option.on_enter)(),
            }
        }
        out
    }
}

impl Component for Input {
    fn render(&mut self, focused: bool) -> Element {
        self.regions.cursor.set(Rect::default());
        let content = self.option.content.get();
        self.cursor = motion::clamp(&content, self.cursor);
        let state = RenderState {
            focused,
            hovered: self.hovered,
        };
        render_input(&content, self.cursor, state, &self.option, &self.regions)
    }

    fn on_event(&mut self, event: &Event) -> bool {
        let result = self.edit(|session| dispatch(event, session));
        tracing::trace!(target: "widget.input", handled = result.handled, dirty = result.dirty, cursor = self.cursor, "event");
        result.handled
    }

    fn set_hovered(&mut self, hovered: bool) {
        self.hovered = hovered;
    }
}
