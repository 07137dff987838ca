//! Property tests for boundary safety, clamping and the split/join round trip.

use core_text::glyph::floor_boundary;
use core_text::{locate, motion, next_boundary, prev_boundary, split_lines};
use proptest::prelude::*;

fn text_strategy() -> impl Strategy<Value = String> {
    // Mix ASCII, newlines, 2/3/4 byte code points and wide glyphs.
    prop::collection::vec(
        prop_oneof![
            Just('a'),
            Just(' '),
            Just('\n'),
            Just('é'),
            Just('漢'),
            Just('😀'),
            Just('\u{0301}'),
            any::<char>(),
        ],
        0..40,
    )
    .prop_map(|chars| chars.into_iter().collect())
}

proptest! {
    #[test]
    fn clamp_stays_in_range_and_on_boundary(s in text_strategy(), cursor in 0usize..200) {
        let c = motion::clamp(&s, cursor);
        prop_assert!(c <= s.len());
        prop_assert!(s.is_char_boundary(c));
    }

    #[test]
    fn boundaries_never_split_code_points(s in text_strategy(), offset in 0usize..200) {
        let b = s.as_bytes();
        let o = offset.min(b.len());
        let next = next_boundary(b, o);
        let prev = prev_boundary(b, o);
        prop_assert!(s.is_char_boundary(next));
        prop_assert!(s.is_char_boundary(prev));
        prop_assert!(prev <= o);
        if o < b.len() {
            prop_assert!(next > o);
        } else {
            prop_assert_eq!(next, b.len());
        }
    }

    #[test]
    fn boundaries_on_raw_bytes_stay_in_range(bytes in prop::collection::vec(any::<u8>(), 0..32), offset in 0usize..40) {
        let o = offset.min(bytes.len());
        prop_assert!(next_boundary(&bytes, o) <= bytes.len());
        prop_assert!(prev_boundary(&bytes, o) <= o);
        prop_assert!(floor_boundary(&bytes, offset) <= bytes.len());
    }

    #[test]
    fn split_join_round_trip(s in text_strategy()) {
        prop_assume!(!s.is_empty());
        let lines = split_lines(&s);
        prop_assert_eq!(lines.join("\n"), s);
    }

    #[test]
    fn locate_stays_within_line(s in text_strategy(), cursor in 0usize..200) {
        prop_assume!(!s.is_empty());
        let lines = split_lines(&s);
        let c = motion::clamp(&s, cursor);
        let at = locate(c, &lines);
        prop_assert!(at.line < lines.len());
        prop_assert!(at.offset <= lines[at.line].len());
        // Re-deriving the global offset from (line, offset) is exact.
        let global: usize = lines[..at.line].iter().map(|l| l.len() + 1).sum::<usize>() + at.offset;
        prop_assert_eq!(global, c);
    }

    #[test]
    fn word_motions_land_on_boundaries(s in text_strategy(), cursor in 0usize..200) {
        let l = motion::word_left(&s, cursor);
        let r = motion::word_right(&s, cursor);
        prop_assert!(s.is_char_boundary(l));
        prop_assert!(s.is_char_boundary(r));
        prop_assert!(l <= motion::clamp(&s, cursor));
        prop_assert!(r >= motion::clamp(&s, cursor));
    }
}

#[test]
fn scenario_trailing_newline_split() {
    assert_eq!(split_lines("line1\n"), vec!["line1", ""]);
}
