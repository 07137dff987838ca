//! Cursor motion helpers over a content string and a global byte cursor.
//!
//! These are free of widget state: they take the content plus a cursor and
//! return the new cursor. Every returned offset is a code point boundary in
//! `[0, content.len()]`.

use crate::glyph::{floor_boundary, next_boundary, prev_boundary};
use crate::word::is_word_at;

/// Clamp `cursor` into `[0, content.len()]`, rounding down onto a code point
/// boundary when it lands inside a multi-byte encoding.
pub fn clamp(content: &str, cursor: usize) -> usize {
    floor_boundary(content.as_bytes(), cursor)
}

/// One glyph to the left (stays at 0).
pub fn left(content: &str, cursor: usize) -> usize {
    prev_boundary(content.as_bytes(), clamp(content, cursor))
}

/// One glyph to the right (stays at end).
pub fn right(content: &str, cursor: usize) -> usize {
    next_boundary(content.as_bytes(), clamp(content, cursor))
}

/// Move to the start of the word before the cursor: first skip non-word
/// glyphs to the left, then word glyphs.
pub fn word_left(content: &str, cursor: usize) -> usize {
    let bytes = content.as_bytes();
    let mut pos = clamp(content, cursor);
    while pos > 0 {
        let prev = prev_boundary(bytes, pos);
        if is_word_at(bytes, prev) {
            break;
        }
        pos = prev;
    }
    while pos > 0 {
        let prev = prev_boundary(bytes, pos);
        if !is_word_at(bytes, prev) {
            break;
        }
        pos = prev;
    }
    pos
}

/// Move just past the end of the word after the cursor: first skip non-word
/// glyphs to the right, then word glyphs.
pub fn word_right(content: &str, cursor: usize) -> usize {
    let bytes = content.as_bytes();
    let mut pos = clamp(content, cursor);
    while pos < bytes.len() && !is_word_at(bytes, pos) {
        pos = next_boundary(bytes, pos);
    }
    while pos < bytes.len() && is_word_at(bytes, pos) {
        pos = next_boundary(bytes, pos);
    }
    pos
}
