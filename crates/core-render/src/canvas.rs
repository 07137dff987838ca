//! Rasterizer: lays out an `Element` tree into a `Frame`.
//!
//! Layout is deliberately small: text is one row wide as its glyph widths,
//! `hbox` places children left to right and hands spare columns to `XFLEX`
//! children, `vbox` stacks children and gives each the full width. Children
//! never escape their parent's box. Every `Reflect` slot on a drawn element
//! receives that element's final rectangle, including empty ones, so stale
//! hit regions cannot survive a frame in which their element shrank away.

use crate::element::{Decoration, Element, Node, Rect};
use crate::{CellFlags, Frame};
use core_text::glyphs;
use crossterm::style::Color;

#[derive(Debug, Clone, Copy, Default)]
struct Style {
    flags: CellFlags,
    fg: Option<Color>,
    bg: Option<Color>,
}

impl Style {
    fn merge(self, e: &Element) -> Self {
        Style {
            flags: self.flags | cell_flags(e.decorations()),
            fg: e.fg().or(self.fg),
            bg: e.bg().or(self.bg),
        }
    }
}

fn cell_flags(d: Decoration) -> CellFlags {
    let mut out = CellFlags::empty();
    if d.contains(Decoration::DIM) {
        out |= CellFlags::DIM;
    }
    if d.contains(Decoration::BOLD) {
        out |= CellFlags::BOLD;
    }
    if d.contains(Decoration::INVERTED) {
        out |= CellFlags::REVERSE;
    }
    if d.contains(Decoration::UNDERLINE) {
        out |= CellFlags::UNDERLINE;
    }
    if d.contains(Decoration::CURSOR_UNDERLINE) {
        out |= CellFlags::CURSOR;
    }
    out
}

/// Natural (width, height) of an element in cells.
pub fn measure(e: &Element) -> (u16, u16) {
    match e.node() {
        Node::Text(s) => (to_u16(core_text::str_width(s)), 1),
        Node::HBox(children) => children.iter().map(measure).fold((0, 0), |(w, h), (cw, ch)| {
            (w.saturating_add(cw), h.max(ch))
        }),
        Node::VBox(children) => children.iter().map(measure).fold((0, 0), |(w, h), (cw, ch)| {
            (w.max(cw), h.saturating_add(ch))
        }),
    }
}

fn to_u16(n: usize) -> u16 {
    u16::try_from(n).unwrap_or(u16::MAX)
}

pub struct Canvas {
    frame: Frame,
}

impl Canvas {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            frame: Frame::new(width, height),
        }
    }

    /// Rasterize `root` into a fresh `width` x `height` frame.
    pub fn render(root: &Element, width: u16, height: u16) -> Frame {
        let mut canvas = Canvas::new(width, height);
        canvas.draw(root, Rect::new(0, 0, width, height));
        canvas.into_frame()
    }

    /// Draw `e` inside `allotted`, returning the rectangle it occupied.
    pub fn draw(&mut self, e: &Element, allotted: Rect) -> Rect {
        self.draw_styled(e, allotted, Style::default())
    }

    pub fn into_frame(self) -> Frame {
        self.frame
    }

    fn draw_styled(&mut self, e: &Element, allotted: Rect, parent: Style) -> Rect {
        let (mw, mh) = measure(e);
        let width = if e.has(Decoration::XFLEX) {
            allotted.width
        } else {
            mw.min(allotted.width)
        };
        let rect = Rect::new(allotted.x, allotted.y, width, mh.min(allotted.height));
        let style = parent.merge(e);

        self.frame.style_rect(rect, style.flags, style.fg, style.bg);
        if e.has(Decoration::CURSOR_UNDERLINE) && !rect.is_empty() {
            self.frame.cursor = Some((rect.x, rect.y));
        }

        match e.node() {
            Node::Text(s) => self.draw_text(s, rect, style),
            Node::HBox(children) => self.draw_hbox(children, rect, style),
            Node::VBox(children) => self.draw_vbox(children, rect, style),
        }

        for slot in e.reflects() {
            slot.set(rect);
        }
        rect
    }

    fn draw_text(&mut self, s: &str, rect: Rect, style: Style) {
        if rect.is_empty() {
            return;
        }
        let right = rect.x as u32 + rect.width as u32;
        let mut x = rect.x as u32;
        for g in glyphs(s) {
            if x + g.width as u32 > right {
                break;
            }
            let mut buf = [0u8; 4];
            let col = x as u16;
            self.frame
                .set_cluster(col, rect.y, g.ch.encode_utf8(&mut buf), g.width, style.flags);
            for dx in 0..g.width {
                if let Some(cell) = self.frame.cell_mut(col + dx, rect.y) {
                    cell.fg = style.fg;
                    cell.bg = style.bg;
                }
            }
            x += g.width as u32;
        }
    }

    fn draw_hbox(&mut self, children: &[Element], rect: Rect, style: Style) {
        let widths: Vec<u16> = children.iter().map(|c| measure(c).0).collect();
        let natural: u32 = widths.iter().map(|&w| w as u32).sum();
        let flex_count = children
            .iter()
            .filter(|c| c.has(Decoration::XFLEX))
            .count() as u32;
        let spare = (rect.width as u32).saturating_sub(natural);

        let mut x = rect.x as u32;
        let right = rect.x as u32 + rect.width as u32;
        let mut flex_seen = 0u32;
        for (child, &w) in children.iter().zip(&widths) {
            let mut cw = w as u32;
            if child.has(Decoration::XFLEX) && flex_count > 0 {
                // Earlier flex children absorb the remainder.
                let share = spare / flex_count + u32::from(flex_seen < spare % flex_count);
                cw += share;
                flex_seen += 1;
            }
            let cw = cw.min(right.saturating_sub(x));
            let slot = Rect::new(x as u16, rect.y, cw as u16, rect.height);
            self.draw_styled(child, slot, style);
            x += cw;
        }
    }

    fn draw_vbox(&mut self, children: &[Element], rect: Rect, style: Style) {
        let mut y = rect.y as u32;
        let bottom = rect.y as u32 + rect.height as u32;
        for child in children {
            let h = (bottom.saturating_sub(y)) as u16;
            let slot = Rect::new(rect.x, y as u16, rect.width, h);
            let used = self.draw_styled(child, slot, style);
            y += used.height as u32;
        }
    }
}
