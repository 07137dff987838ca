//! Code point decoding, display width and boundary navigation over raw bytes.
//!
//! All helpers take `&[u8]` so they stay total on arbitrary input: a malformed
//! or truncated sequence never panics, it yields "no progress" (`None` from
//! [`decode_at`], width `0` from [`glyph_width`]). Callers that loop over a
//! buffer must treat `None` as zero-width and step with [`next_boundary`],
//! which always makes progress.
//!
//! Invariants:
//! * [`next_boundary`] and [`prev_boundary`] never return an offset inside a
//!   multi-byte encoding for any input offset in `[0, len]`.
//! * Widths are terminal columns: `2` for East-Asian wide / fullwidth code
//!   points, `1` otherwise.

use unicode_width::UnicodeWidthChar;

/// One decoded code point plus its byte span and display width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyph {
    pub ch: char,
    pub start: usize, // inclusive
    pub end: usize,   // exclusive
    pub width: u16,
}

impl Glyph {
    #[inline]
    pub fn len(&self) -> usize {
        self.end - self.start
    }
}

#[inline]
fn is_continuation(b: u8) -> bool {
    b & 0b1100_0000 == 0b1000_0000
}

/// Encoded length announced by a leading byte (`0` for bytes that cannot lead).
#[inline]
fn sequence_len(lead: u8) -> usize {
    match lead {
        0x00..=0x7F => 1,
        0xC2..=0xDF => 2,
        0xE0..=0xEF => 3,
        0xF0..=0xF4 => 4,
        _ => 0,
    }
}

/// Decode the code point starting at `offset`, returning it with the offset
/// just past its encoding. `None` when `offset` is at/after the end, points at
/// a continuation byte, or starts a malformed / truncated sequence.
pub fn decode_at(buf: &[u8], offset: usize) -> Option<(char, usize)> {
    let lead = *buf.get(offset)?;
    let len = sequence_len(lead);
    if len == 0 {
        tracing::trace!(target: "text.glyph", offset, byte = lead, "invalid_lead_byte");
        return None;
    }
    let end = offset.checked_add(len)?;
    let bytes = buf.get(offset..end)?;
    let ch = std::str::from_utf8(bytes).ok()?.chars().next()?;
    Some((ch, end))
}

/// Display width of a decoded code point: `2` for full-width, `1` otherwise.
#[inline]
pub fn width_of(ch: char) -> u16 {
    if ch.width() == Some(2) { 2 } else { 1 }
}

/// Display width of the glyph at `offset`; `0` when decoding fails.
pub fn glyph_width(buf: &[u8], offset: usize) -> u16 {
    decode_at(buf, offset).map_or(0, |(ch, _)| width_of(ch))
}

/// Decode the glyph starting at `offset` (see [`decode_at`]).
pub fn glyph_at(buf: &[u8], offset: usize) -> Option<Glyph> {
    let (ch, end) = decode_at(buf, offset)?;
    Some(Glyph {
        ch,
        start: offset,
        end,
        width: width_of(ch),
    })
}

/// Smallest offset greater than `offset` that starts a code point, or
/// `buf.len()` when none remains. Continuation bytes are never boundaries.
pub fn next_boundary(buf: &[u8], offset: usize) -> usize {
    if offset >= buf.len() {
        return buf.len();
    }
    let mut i = offset + 1;
    while i < buf.len() && is_continuation(buf[i]) {
        i += 1;
    }
    i
}

/// Largest offset smaller than `offset` that starts a code point, or `0`.
pub fn prev_boundary(buf: &[u8], offset: usize) -> usize {
    let mut i = offset.min(buf.len());
    while i > 0 {
        i -= 1;
        if !is_continuation(buf[i]) {
            return i;
        }
    }
    0
}

/// Round `offset` down onto a boundary (clamping to `buf.len()` first).
pub fn floor_boundary(buf: &[u8], offset: usize) -> usize {
    let mut i = offset.min(buf.len());
    while i > 0 && i < buf.len() && is_continuation(buf[i]) {
        i -= 1;
    }
    i
}

/// Sum of glyph widths across `s` in terminal columns.
pub fn str_width(s: &str) -> usize {
    s.chars().map(|c| width_of(c) as usize).sum()
}

/// Iterate decoded glyphs of a string slice.
pub fn glyphs(s: &str) -> impl Iterator<Item = Glyph> + '_ {
    s.char_indices().map(|(start, ch)| Glyph {
        ch,
        start,
        end: start + ch.len_utf8(),
        width: width_of(ch),
    })
}
