//! Word-break classification of single code points.
//!
//! Categories follow the Unicode word-break property names. The tables below
//! carry the ranges that matter for cursor-level word navigation; anything
//! alphabetic that falls outside them is `ALetter`, everything else `Other`.

use crate::glyph::decode_at;

#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WordBreakProperty {
    ALetter,
    CR,
    DoubleQuote,
    Extend,
    ExtendNumLet,
    Format,
    HebrewLetter,
    Katakana,
    LF,
    MidLetter,
    MidNum,
    MidNumLet,
    Newline,
    Numeric,
    RegionalIndicator,
    SingleQuote,
    WSegSpace,
    ZWJ,
    Other,
}

type Ranges = &'static [(char, char)];

const NEWLINE: Ranges = &[
    ('\u{000B}', '\u{000C}'),
    ('\u{0085}', '\u{0085}'),
    ('\u{2028}', '\u{2029}'),
];

const EXTEND: Ranges = &[
    ('\u{0300}', '\u{036F}'),
    ('\u{0483}', '\u{0489}'),
    ('\u{0591}', '\u{05BD}'),
    ('\u{0610}', '\u{061A}'),
    ('\u{064B}', '\u{065F}'),
    ('\u{0670}', '\u{0670}'),
    ('\u{06D6}', '\u{06DC}'),
    ('\u{0900}', '\u{0903}'),
    ('\u{093A}', '\u{094F}'),
    ('\u{1AB0}', '\u{1AFF}'),
    ('\u{1DC0}', '\u{1DFF}'),
    ('\u{200C}', '\u{200C}'),
    ('\u{20D0}', '\u{20FF}'),
    ('\u{FE00}', '\u{FE0F}'),
    ('\u{FE20}', '\u{FE2F}'),
    ('\u{1F3FB}', '\u{1F3FF}'),
    ('\u{E0020}', '\u{E007F}'),
    ('\u{E0100}', '\u{E01EF}'),
];

const FORMAT: Ranges = &[
    ('\u{00AD}', '\u{00AD}'),
    ('\u{0600}', '\u{0605}'),
    ('\u{061C}', '\u{061C}'),
    ('\u{06DD}', '\u{06DD}'),
    ('\u{070F}', '\u{070F}'),
    ('\u{200E}', '\u{200F}'),
    ('\u{202A}', '\u{202E}'),
    ('\u{2060}', '\u{2064}'),
    ('\u{2066}', '\u{206F}'),
    ('\u{FEFF}', '\u{FEFF}'),
    ('\u{FFF9}', '\u{FFFB}'),
    ('\u{E0001}', '\u{E0001}'),
];

const KATAKANA: Ranges = &[
    ('\u{3031}', '\u{3035}'),
    ('\u{309B}', '\u{309C}'),
    ('\u{30A0}', '\u{30FA}'),
    ('\u{30FC}', '\u{30FF}'),
    ('\u{31F0}', '\u{31FF}'),
    ('\u{32D0}', '\u{32FE}'),
    ('\u{3300}', '\u{3357}'),
    ('\u{FF66}', '\u{FF9D}'),
];

const HEBREW_LETTER: Ranges = &[
    ('\u{05D0}', '\u{05EA}'),
    ('\u{05EF}', '\u{05F2}'),
    ('\u{FB1D}', '\u{FB1D}'),
    ('\u{FB1F}', '\u{FB28}'),
    ('\u{FB2A}', '\u{FB4F}'),
];

// Decimal digits (Nd) and the Arabic decimal separator. Other numeric code
// points (fractions, roman numerals, circled digits) are not `Numeric`.
const NUMERIC: Ranges = &[
    ('0', '9'),
    ('\u{0660}', '\u{0669}'),
    ('\u{066B}', '\u{066B}'),
    ('\u{06F0}', '\u{06F9}'),
    ('\u{07C0}', '\u{07C9}'),
    ('\u{0966}', '\u{096F}'),
    ('\u{09E6}', '\u{09EF}'),
    ('\u{0A66}', '\u{0A6F}'),
    ('\u{0AE6}', '\u{0AEF}'),
    ('\u{0B66}', '\u{0B6F}'),
    ('\u{0BE6}', '\u{0BEF}'),
    ('\u{0C66}', '\u{0C6F}'),
    ('\u{0CE6}', '\u{0CEF}'),
    ('\u{0D66}', '\u{0D6F}'),
    ('\u{0DE6}', '\u{0DEF}'),
    ('\u{0E50}', '\u{0E59}'),
    ('\u{0ED0}', '\u{0ED9}'),
    ('\u{0F20}', '\u{0F29}'),
    ('\u{1040}', '\u{1049}'),
    ('\u{1090}', '\u{1099}'),
    ('\u{17E0}', '\u{17E9}'),
    ('\u{1810}', '\u{1819}'),
    ('\u{1946}', '\u{194F}'),
    ('\u{19D0}', '\u{19D9}'),
    ('\u{1A80}', '\u{1A89}'),
    ('\u{1A90}', '\u{1A99}'),
    ('\u{1B50}', '\u{1B59}'),
    ('\u{1BB0}', '\u{1BB9}'),
    ('\u{1C40}', '\u{1C49}'),
    ('\u{1C50}', '\u{1C59}'),
    ('\u{A620}', '\u{A629}'),
    ('\u{A8D0}', '\u{A8D9}'),
    ('\u{A900}', '\u{A909}'),
    ('\u{A9D0}', '\u{A9D9}'),
    ('\u{A9F0}', '\u{A9F9}'),
    ('\u{AA50}', '\u{AA59}'),
    ('\u{ABF0}', '\u{ABF9}'),
    ('\u{FF10}', '\u{FF19}'),
    ('\u{104A0}', '\u{104A9}'),
    ('\u{11066}', '\u{1106F}'),
    ('\u{1E950}', '\u{1E959}'),
    ('\u{1FBF0}', '\u{1FBF9}'),
];

const MID_NUM_LET: Ranges = &[
    ('.', '.'),
    ('\u{2018}', '\u{2019}'),
    ('\u{2024}', '\u{2024}'),
    ('\u{FE52}', '\u{FE52}'),
    ('\u{FF07}', '\u{FF07}'),
    ('\u{FF0E}', '\u{FF0E}'),
];

const MID_LETTER: Ranges = &[
    (':', ':'),
    ('\u{00B7}', '\u{00B7}'),
    ('\u{0387}', '\u{0387}'),
    ('\u{055F}', '\u{055F}'),
    ('\u{05F4}', '\u{05F4}'),
    ('\u{2027}', '\u{2027}'),
    ('\u{FE13}', '\u{FE13}'),
    ('\u{FE55}', '\u{FE55}'),
    ('\u{FF1A}', '\u{FF1A}'),
];

const MID_NUM: Ranges = &[
    (',', ','),
    (';', ';'),
    ('\u{037E}', '\u{037E}'),
    ('\u{0589}', '\u{0589}'),
    ('\u{060C}', '\u{060D}'),
    ('\u{066C}', '\u{066C}'),
    ('\u{07F8}', '\u{07F8}'),
    ('\u{2044}', '\u{2044}'),
    ('\u{FE10}', '\u{FE10}'),
    ('\u{FE14}', '\u{FE14}'),
    ('\u{FE50}', '\u{FE50}'),
    ('\u{FE54}', '\u{FE54}'),
    ('\u{FF0C}', '\u{FF0C}'),
    ('\u{FF1B}', '\u{FF1B}'),
];

const EXTEND_NUM_LET: Ranges = &[
    ('_', '_'),
    ('\u{202F}', '\u{202F}'),
    ('\u{203F}', '\u{2040}'),
    ('\u{2054}', '\u{2054}'),
    ('\u{FE33}', '\u{FE34}'),
    ('\u{FE4D}', '\u{FE4F}'),
    ('\u{FF3F}', '\u{FF3F}'),
];

const WSEG_SPACE: Ranges = &[
    (' ', ' '),
    ('\u{1680}', '\u{1680}'),
    ('\u{2000}', '\u{2006}'),
    ('\u{2008}', '\u{200A}'),
    ('\u{205F}', '\u{205F}'),
    ('\u{3000}', '\u{3000}'),
];

#[inline]
fn in_ranges(ranges: Ranges, ch: char) -> bool {
    ranges.iter().any(|&(lo, hi)| (lo..=hi).contains(&ch))
}

/// Map a code point onto its word-break category.
pub fn word_break_property(ch: char) -> WordBreakProperty {
    use WordBreakProperty::*;
    match ch {
        '\r' => return CR,
        '\n' => return LF,
        '\'' => return SingleQuote,
        '"' => return DoubleQuote,
        '\u{200D}' => return ZWJ,
        '\u{1F1E6}'..='\u{1F1FF}' => return RegionalIndicator,
        _ => {}
    }
    let tables: [(Ranges, WordBreakProperty); 11] = [
        (NEWLINE, Newline),
        (NUMERIC, Numeric),
        (EXTEND, Extend),
        (FORMAT, Format),
        (KATAKANA, Katakana),
        (HEBREW_LETTER, HebrewLetter),
        (MID_NUM_LET, MidNumLet),
        (MID_LETTER, MidLetter),
        (MID_NUM, MidNum),
        (EXTEND_NUM_LET, ExtendNumLet),
        (WSEG_SPACE, WSegSpace),
    ];
    for (ranges, prop) in tables {
        if in_ranges(ranges, ch) {
            return prop;
        }
    }
    if ch.is_alphabetic() { ALetter } else { Other }
}

/// True for letter / numeric / syllabic categories.
pub fn is_word_forming(ch: char) -> bool {
    matches!(
        word_break_property(ch),
        WordBreakProperty::ALetter
            | WordBreakProperty::HebrewLetter
            | WordBreakProperty::Katakana
            | WordBreakProperty::Numeric
    )
}

/// Whether the glyph starting at `offset` is word-forming. Undecodable
/// positions are never part of a word.
pub fn is_word_at(buf: &[u8], offset: usize) -> bool {
    decode_at(buf, offset).is_some_and(|(ch, _)| is_word_forming(ch))
}
