//! Line splitting and cursor location over newline-delimited content.
//!
//! Lines are borrowed views into the content and are recomputed on demand;
//! nothing here caches. Offsets are bytes.

/// A cursor resolved against a sequence of lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LineCursor {
    pub line: usize,
    /// Byte offset within `line`, in `[0, line.len()]`.
    pub offset: usize,
}

/// Split `content` on `\n`. A trailing newline yields a final empty line so
/// the position after it stays editable; joining the result with `"\n"`
/// reproduces `content` exactly.
///
/// Renderers special-case empty content (placeholder path) and never call
/// this with `""`; for completeness it returns a single empty line.
pub fn split_lines(content: &str) -> Vec<&str> {
    content.split('\n').collect()
}

/// Resolve a global byte `cursor` to `(line, offset)`. Each line consumes its
/// length plus one separator byte; a remainder equal to a line's length
/// belongs to the end of that line rather than the start of the next.
///
/// Cursors past the end resolve to the end of the last line.
pub fn locate(cursor: usize, lines: &[&str]) -> LineCursor {
    let mut remainder = cursor;
    for (idx, line) in lines.iter().enumerate() {
        if remainder <= line.len() {
            return LineCursor {
                line: idx,
                offset: remainder,
            };
        }
        remainder -= line.len() + 1;
    }
    match lines.last() {
        Some(last) => LineCursor {
            line: lines.len() - 1,
            offset: last.len(),
        },
        None => LineCursor::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_newline_adds_editable_line() {
        assert_eq!(split_lines("line1\n"), vec!["line1", ""]);
        assert_eq!(split_lines("a\n\nb"), vec!["a", "", "b"]);
        assert_eq!(split_lines("a\n\n"), vec!["a", "", ""]);
        assert_eq!(split_lines("\n"), vec!["", ""]);
        assert_eq!(split_lines("solo"), vec!["solo"]);
    }

    #[test]
    fn locate_ties_resolve_to_line_end() {
        let lines = split_lines("ab\ncd");
        assert_eq!(locate(0, &lines), LineCursor { line: 0, offset: 0 });
        assert_eq!(locate(2, &lines), LineCursor { line: 0, offset: 2 });
        assert_eq!(locate(3, &lines), LineCursor { line: 1, offset: 0 });
        assert_eq!(locate(5, &lines), LineCursor { line: 1, offset: 2 });
    }

    #[test]
    fn locate_after_trailing_newline() {
        let lines = split_lines("line1\n");
        assert_eq!(locate(5, &lines), LineCursor { line: 0, offset: 5 });
        assert_eq!(locate(6, &lines), LineCursor { line: 1, offset: 0 });
    }

    #[test]
    fn locate_out_of_range_pins_to_last_line_end() {
        let lines = split_lines("ab\ncd");
        assert_eq!(locate(42, &lines), LineCursor { line: 1, offset: 2 });
        assert_eq!(locate(3, &[]), LineCursor::default());
    }
}
