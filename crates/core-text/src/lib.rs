//! Unicode-aware text primitives for the input control.
//!
//! Content is plain UTF-8 addressed by byte offsets. Everything here is pure
//! and allocation-light: glyphs and lines are derived on demand and never
//! cached, so callers can re-run them after any external mutation.
//!
//! Modules:
//! - `glyph`: decode one code point at a byte offset, display width, previous /
//!   next code point boundary. Malformed input degrades to "no progress".
//! - `word`: word-break classification of a code point (`is_word_forming`).
//! - `lines`: newline splitting and global cursor -> (line, offset) location.
//! - `motion`: cursor clamping plus glyph / word motions built on the above.

pub mod glyph;
pub mod lines;
pub mod motion;
pub mod word;

pub use glyph::{
    Glyph, decode_at, floor_boundary, glyph_at, glyph_width, glyphs, next_boundary, prev_boundary,
    str_width, width_of,
};
pub use lines::{LineCursor, locate, split_lines};
pub use word::{WordBreakProperty, is_word_forming, word_break_property};
