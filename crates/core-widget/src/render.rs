//! Pure renderer for the input control.
//!
//! `render_input` depends only on its arguments: the content and cursor, the
//! focus and hover flags, the option, and the two hit-test slots to tag. It
//! never mutates anything; layout and slot resolution happen later in the
//! rasterizer.

use crate::option::{InputOption, TransformState};
use core_render::{Element, Reflect, hbox, text, vbox};
use core_text::{locate, motion, next_boundary, split_lines};

/// Hit-test slots written by the rasterizer: the whole control and the
/// cursor cell.
#[derive(Debug, Clone, Default)]
pub struct HitRegions {
    pub control: Reflect,
    pub cursor: Reflect,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RenderState {
    pub focused: bool,
    pub hovered: bool,
}

/// Cursor cell style: "selected" when idle, underline cursor once focused or
/// hovered. Insert/overwrite mode does not change it.
fn cursor_style(e: Element, state: RenderState) -> Element {
    if !state.focused && !state.hovered {
        e.select()
    } else {
        e.cursor_underline()
    }
}

/// Replace every code point with `mask`.
pub fn mask_text(s: &str, mask: char) -> String {
    s.chars().map(|_| mask).collect()
}

fn line_text(s: &str, option: &InputOption) -> Element {
    if option.password {
        text(mask_text(s, option.mask()))
    } else {
        text(s)
    }
}

fn cursor_line(
    line: &str,
    offset: usize,
    state: RenderState,
    option: &InputOption,
    regions: &HitRegions,
) -> Element {
    if offset >= line.len() {
        return hbox(vec![
            line_text(line, option),
            cursor_style(text(" "), state).reflect(&regions.cursor),
        ])
        .xflex();
    }
    let end = next_boundary(line.as_bytes(), offset);
    hbox(vec![
        line_text(&line[..offset], option),
        cursor_style(line_text(&line[offset..end], option), state).reflect(&regions.cursor),
        line_text(&line[end..], option),
    ])
    .xflex()
}

pub fn render_input(
    content: &str,
    cursor: usize,
    state: RenderState,
    option: &InputOption,
    regions: &HitRegions,
) -> Element {
    // Copied so the transform may write to the placeholder buffer.
    let placeholder = option.placeholder.get();
    if content.is_empty() && !placeholder.is_empty() {
        tracing::trace!(target: "widget.input", path = "placeholder", focused = state.focused, hovered = state.hovered, "render");
        let mut element = cursor_style(text(placeholder.as_str()), state).xflex().frame();
        if state.focused {
            element = element.focus();
        }
        return (option.transform)(TransformState {
            element,
            hovered: state.hovered,
            focused: state.focused,
            is_placeholder: true,
        })
        .reflect(&regions.control);
    }

    let cursor = motion::clamp(content, cursor);
    let rows: Vec<Element> = if content.is_empty() {
        vec![cursor_line("", 0, state, option, regions)]
    } else {
        let lines = split_lines(content);
        let at = locate(cursor, &lines);
        lines
            .iter()
            .enumerate()
            .map(|(i, line)| {
                if i == at.line {
                    cursor_line(line, at.offset, state, option, regions)
                } else {
                    line_text(line, option)
                }
            })
            .collect()
    };
    tracing::trace!(target: "widget.input", path = "lines", lines = rows.len(), focused = state.focused, hovered = state.hovered, "render");

    (option.transform)(TransformState {
        element: vbox(rows).frame(),
        hovered: state.hovered,
        focused: state.focused,
        is_placeholder: false,
    })
    .xflex()
    .reflect(&regions.control)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text_ref::TextRef;
    use core_render::Decoration;
    use pretty_assertions::assert_eq;

    fn plain() -> InputOption {
        InputOption::default().with_transform(|s| s.element)
    }

    fn cursor_cell<'a>(e: &'a Element, regions: &HitRegions) -> Option<&'a Element> {
        e.find(&|n| n.is_tagged_with(&regions.cursor))
    }

    #[test]
    fn placeholder_idle_is_selected_without_cursor_cell() {
        let regions = HitRegions::default();
        let opt = plain().with_placeholder(TextRef::new("Name"));
        let e = render_input("", 0, RenderState::default(), &opt, &regions);
        assert_eq!(e.plain_text(), "Name");
        assert!(e.has(Decoration::SELECT));
        assert!(!e.has(Decoration::CURSOR_UNDERLINE));
        assert!(e.is_tagged_with(&regions.control));
        assert!(cursor_cell(&e, &regions).is_none());
    }

    #[test]
    fn placeholder_focused_uses_cursor_style_and_focus() {
        let regions = HitRegions::default();
        let opt = plain().with_placeholder(TextRef::new("Name"));
        let state = RenderState { focused: true, hovered: false };
        let e = render_input("", 0, state, &opt, &regions);
        assert!(e.has(Decoration::CURSOR_UNDERLINE | Decoration::FOCUS));
        assert!(!e.has(Decoration::SELECT));
    }

    #[test]
    fn only_the_placeholder_path_is_marked_focusable() {
        let regions = HitRegions::default();
        let state = RenderState { focused: true, hovered: false };
        let e = render_input("ab", 1, state, &plain(), &regions);
        assert!(e.find(&|n| n.has(Decoration::FOCUS)).is_none());
    }

    #[test]
    fn empty_without_placeholder_shows_cursor_cell() {
        let regions = HitRegions::default();
        let e = render_input("", 0, RenderState::default(), &plain(), &regions);
        let cell = cursor_cell(&e, &regions).expect("cursor cell");
        assert_eq!(cell.plain_text(), " ");
        assert_eq!(e.plain_text(), " ");
    }

    #[test]
    fn cursor_at_end_appends_blank_cell() {
        let regions = HitRegions::default();
        let state = RenderState { focused: true, hovered: false };
        let e = render_input("ab", 2, state, &plain(), &regions);
        assert_eq!(e.plain_text(), "ab ");
        let cell = cursor_cell(&e, &regions).expect("cursor cell");
        assert!(cell.has(Decoration::CURSOR_UNDERLINE));
    }

    #[test]
    fn cursor_mid_line_splits_around_glyph() {
        let regions = HitRegions::default();
        let e = render_input("a漢b", 1, RenderState::default(), &plain(), &regions);
        let cell = cursor_cell(&e, &regions).expect("cursor cell");
        assert_eq!(cell.plain_text(), "漢");
        assert!(cell.has(Decoration::SELECT));
        assert_eq!(e.plain_text(), "a漢b");
    }

    #[test]
    fn cursor_on_second_line_after_trailing_newline() {
        let regions = HitRegions::default();
        let e = render_input("line1\n", 6, RenderState::default(), &plain(), &regions);
        assert_eq!(e.plain_text(), "line1\n ");
    }

    #[test]
    fn tie_break_keeps_cursor_at_end_of_first_line() {
        let regions = HitRegions::default();
        let e = render_input("ab\ncd", 2, RenderState::default(), &plain(), &regions);
        assert_eq!(e.plain_text(), "ab \ncd");
    }

    #[test]
    fn password_masks_every_code_point_on_every_line() {
        let regions = HitRegions::default();
        let mut opt = plain().with_mask('•').expect("one-column mask");
        opt.password = true;
        let e = render_input("漢é\nxy", 1, RenderState::default(), &opt, &regions);
        assert_eq!(e.plain_text(), "••\n••");
        let cell = cursor_cell(&e, &regions).expect("cursor cell");
        assert_eq!(cell.plain_text(), "•");
    }

    #[test]
    fn stale_cursor_is_clamped() {
        let regions = HitRegions::default();
        let e = render_input("ab", 99, RenderState::default(), &plain(), &regions);
        assert_eq!(e.plain_text(), "ab ");
    }

    #[test]
    fn transform_sees_placeholder_flag() {
        let regions = HitRegions::default();
        let opt = InputOption::default()
            .with_placeholder(TextRef::new("hint"))
            .with_transform(|s| if s.is_placeholder { text("P") } else { text("C") });
        assert_eq!(render_input("", 0, RenderState::default(), &opt, &regions).plain_text(), "P");
        assert_eq!(render_input("x", 1, RenderState::default(), &opt, &regions).plain_text(), "C");
    }
}
