//! Text edit operations over a borrowed content buffer and cursor.
//!
//! An `EditSession` is created per event: it borrows the content and cursor
//! for the duration of one call and re-clamps the cursor on construction,
//! because the host may have mutated the buffer since the last event. Every
//! operation leaves the cursor on a code point boundary in
//! `[0, content.len()]`.
//!
//! Logging policy: edit events record byte counts and offsets only, never the
//! inserted or removed text (inputs may hold passwords).

use core_text::{floor_boundary, motion, next_boundary, prev_boundary};

/// Unit in which the maximum input length is measured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LengthUnit {
    /// Raw UTF-8 bytes.
    #[default]
    Bytes,
    /// Unicode scalar values.
    CodePoints,
}

/// Upper bound on content length, checked before every insertion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MaxLength {
    pub limit: usize,
    pub unit: LengthUnit,
}

impl MaxLength {
    pub const fn unbounded() -> Self {
        Self {
            limit: usize::MAX,
            unit: LengthUnit::Bytes,
        }
    }

    pub const fn bytes(limit: usize) -> Self {
        Self {
            limit,
            unit: LengthUnit::Bytes,
        }
    }

    pub const fn code_points(limit: usize) -> Self {
        Self {
            limit,
            unit: LengthUnit::CodePoints,
        }
    }

    pub fn measure(&self, content: &str) -> usize {
        match self.unit {
            LengthUnit::Bytes => content.len(),
            LengthUnit::CodePoints => content.chars().count(),
        }
    }

    /// True once no further insertion is accepted.
    pub fn reached(&self, content: &str) -> bool {
        self.measure(content) >= self.limit
    }

    /// Longest prefix of `seq` that fits in the room left by `content`, cut
    /// on a code point boundary.
    pub fn fit<'s>(&self, content: &str, seq: &'s str) -> &'s str {
        let room = self.limit.saturating_sub(self.measure(content));
        let end = match self.unit {
            LengthUnit::Bytes => floor_boundary(seq.as_bytes(), room),
            LengthUnit::CodePoints => seq.char_indices().nth(room).map_or(seq.len(), |(i, _)| i),
        };
        &seq[..end]
    }
}

impl Default for MaxLength {
    fn default() -> Self {
        Self::unbounded()
    }
}

/// Per-event editing policy, resolved from the control's options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EditPolicy {
    pub multiline: bool,
    /// `true` inserts before the cursor; `false` overwrites the glyph at it.
    pub insert: bool,
    pub max_len: MaxLength,
}

impl Default for EditPolicy {
    fn default() -> Self {
        Self {
            multiline: false,
            insert: true,
            max_len: MaxLength::unbounded(),
        }
    }
}

/// Callbacks fired by edit operations. Panics propagate to the caller.
pub trait EditObserver {
    /// After every accepted mutation.
    fn on_change(&mut self) {}
    /// On Return, whether or not a newline was inserted.
    fn on_enter(&mut self) {}
}

/// Observer that ignores everything.
pub struct NoopObserver;

impl EditObserver for NoopObserver {}

pub struct EditSession<'a> {
    content: &'a mut String,
    cursor: &'a mut usize,
    policy: EditPolicy,
    observer: &'a mut dyn EditObserver,
    mutations: u32,
}

impl<'a> EditSession<'a> {
    pub fn new(
        content: &'a mut String,
        cursor: &'a mut usize,
        policy: EditPolicy,
        observer: &'a mut dyn EditObserver,
    ) -> Self {
        *cursor = motion::clamp(content.as_str(), *cursor);
        Self {
            content,
            cursor,
            policy,
            observer,
            mutations: 0,
        }
    }

    pub fn content(&self) -> &str {
        self.content.as_str()
    }

    pub fn cursor(&self) -> usize {
        *self.cursor
    }

    pub fn policy(&self) -> &EditPolicy {
        &self.policy
    }

    /// Number of content mutations performed through this session.
    pub fn mutations(&self) -> u32 {
        self.mutations
    }

    fn at_end(&self) -> bool {
        *self.cursor == self.content.len()
    }

    /// Remove `[cursor, next boundary)` without notifying; returns bytes removed.
    fn erase_forward(&mut self) -> usize {
        let start = *self.cursor;
        let end = next_boundary(self.content.as_bytes(), start);
        self.content.replace_range(start..end, "");
        self.mutations += 1;
        end - start
    }

    /// Insert `seq` at the cursor (or replace the glyph under it in overwrite
    /// mode). Rejected without mutation once the maximum length is reached;
    /// the keystroke still counts as handled.
    ///
    /// A single code point is accepted whole while below the limit. Longer
    /// sequences (pastes, IME commits) are cut to the remaining room, and in
    /// single-line mode their newlines are dropped.
    pub fn insert_character(&mut self, seq: &str) -> bool {
        let flattened;
        let seq = if !self.policy.multiline && seq.contains('\n') {
            flattened = seq.replace('\n', "");
            flattened.as_str()
        } else {
            seq
        };
        let max = self.policy.max_len;
        let offered = seq.len();
        let seq = if max.reached(self.content.as_str()) {
            ""
        } else if seq.chars().nth(1).is_none() {
            seq
        } else {
            max.fit(self.content.as_str(), seq)
        };
        if seq.is_empty() {
            tracing::trace!(
                target: "actions.edit",
                op = "insert_rejected",
                len = self.content.len(),
                limit = max.limit,
                offered,
                "edit"
            );
            return true;
        }
        let before = *self.cursor;
        let mut replaced = 0;
        if !self.policy.insert
            && !self.at_end()
            && self.content.as_bytes()[*self.cursor] != b'\n'
        {
            replaced = self.erase_forward();
        }
        self.content.insert_str(*self.cursor, seq);
        *self.cursor += seq.len();
        self.mutations += 1;
        tracing::trace!(
            target: "actions.edit",
            op = "insert",
            bytes = seq.len(),
            dropped = offered - seq.len(),
            replaced,
            cursor = before,
            to_cursor = *self.cursor,
            "edit"
        );
        self.observer.on_change();
        true
    }

    /// Backspace. Not handled at the start of content so the host can use it
    /// (e.g. to move focus).
    pub fn delete_backward(&mut self) -> bool {
        if *self.cursor == 0 {
            return false;
        }
        let end = *self.cursor;
        let start = prev_boundary(self.content.as_bytes(), end);
        self.content.replace_range(start..end, "");
        *self.cursor = start;
        self.mutations += 1;
        tracing::trace!(target: "actions.edit", op = "delete_backward", bytes = end - start, cursor = end, to_cursor = start, "edit");
        self.observer.on_change();
        true
    }

    /// Delete the glyph under the cursor. Not handled at end of content.
    pub fn delete_forward(&mut self) -> bool {
        if self.at_end() {
            return false;
        }
        let removed = self.erase_forward();
        tracing::trace!(target: "actions.edit", op = "delete_forward", bytes = removed, cursor = *self.cursor, "edit");
        self.observer.on_change();
        true
    }

    /// Return: inserts a newline in multiline mode (subject to the length
    /// limit), then fires on-enter unconditionally.
    pub fn handle_return(&mut self) -> bool {
        if self.policy.multiline {
            self.insert_character("\n");
        }
        tracing::trace!(target: "actions.edit", op = "return", multiline = self.policy.multiline, "edit");
        self.observer.on_enter();
        true
    }

    /// Vertical movement is left to an outer viewport; the cursor does not
    /// move. Not handled only at end of content so the event can bubble.
    pub fn handle_arrow_up(&mut self) -> bool {
        !self.at_end()
    }

    pub fn handle_arrow_down(&mut self) -> bool {
        !self.at_end()
    }

    /// Horizontal motions. Not routed by the dispatcher; hosts bind them.
    pub fn move_left(&mut self) -> bool {
        self.move_to(motion::left(self.content.as_str(), *self.cursor))
    }

    pub fn move_right(&mut self) -> bool {
        self.move_to(motion::right(self.content.as_str(), *self.cursor))
    }

    pub fn move_word_left(&mut self) -> bool {
        self.move_to(motion::word_left(self.content.as_str(), *self.cursor))
    }

    pub fn move_word_right(&mut self) -> bool {
        self.move_to(motion::word_right(self.content.as_str(), *self.cursor))
    }

    fn move_to(&mut self, to: usize) -> bool {
        if to == *self.cursor {
            return false;
        }
        tracing::trace!(target: "actions.edit", op = "motion", cursor = *self.cursor, to_cursor = to, "edit");
        *self.cursor = to;
        true
    }
}
