//! Display fragments, cell grid and terminal emission.
//!
//! Components describe what to show as an `Element` tree (see `element`).
//! A host turns that into pixels-in-cells with the `canvas` rasterizer, which
//! lays the tree out into a `Frame` and resolves every `Reflect` hit-test slot,
//! then emits the frame through `writer`.
//!
//! Invariants:
//! - Leader: width >= 1, `cluster` non-empty.
//! - Continuation: width == 0, `cluster` empty.
//! - Continuations immediately follow their leader horizontally; no gaps.
//! - Styling flags applied over spans mark leader + continuations, but
//!   emission derives printable content solely from leaders.

use bitflags::bitflags;

pub mod canvas;
pub mod element;
pub mod writer;

pub use canvas::Canvas;
pub use crossterm::style::Color;
pub use element::{Decoration, Element, Node, Rect, Reflect, hbox, text, vbox};

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct CellFlags: u8 {
        const REVERSE   = 0b0000_0001;
        const CURSOR    = 0b0000_0010; // cell is under the terminal cursor
        const UNDERLINE = 0b0000_0100;
        const DIM       = 0b0000_1000;
        const BOLD      = 0b0001_0000;
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    /// Code point text (leader cells only). Empty for continuation cells.
    pub cluster: String,
    /// Visual width in terminal columns. `0` designates a continuation cell.
    pub width: u8,
    pub flags: CellFlags,
    pub fg: Option<Color>,
    pub bg: Option<Color>,
}

impl Cell {
    #[inline]
    pub fn leader(cluster: &str, width: u16, flags: CellFlags) -> Self {
        Self {
            cluster: cluster.to_string(),
            width: width.max(1) as u8,
            flags,
            fg: None,
            bg: None,
        }
    }
    #[inline]
    pub fn continuation(flags: CellFlags) -> Self {
        Self {
            cluster: String::new(),
            width: 0,
            flags,
            fg: None,
            bg: None,
        }
    }
    #[inline]
    pub fn is_leader(&self) -> bool {
        self.width > 0
    }
    #[inline]
    pub fn visual_width(&self) -> u16 {
        self.width as u16
    }
    #[inline]
    pub fn cluster(&self) -> &str {
        &self.cluster
    }
}

impl Default for Cell {
    fn default() -> Self {
        // Default is a single space leader cell for blank areas.
        Cell {
            cluster: " ".to_string(),
            width: 1,
            flags: CellFlags::empty(),
            fg: None,
            bg: None,
        }
    }
}

/// Cell grid produced by one rasterization pass.
#[derive(Debug, Clone)]
pub struct Frame {
    pub width: u16,
    pub height: u16,
    pub cells: Vec<Cell>,
    /// Terminal cursor position requested by a `CURSOR_UNDERLINE` element.
    pub cursor: Option<(u16, u16)>,
}

impl Frame {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::default(); (width as usize) * (height as usize)],
            cursor: None,
        }
    }

    #[inline]
    fn index(&self, x: u16, y: u16) -> Option<usize> {
        if x < self.width && y < self.height {
            Some(y as usize * self.width as usize + x as usize)
        } else {
            None
        }
    }

    pub fn cell(&self, x: u16, y: u16) -> Option<&Cell> {
        let idx = self.index(x, y)?;
        Some(&self.cells[idx])
    }

    pub fn cell_mut(&mut self, x: u16, y: u16) -> Option<&mut Cell> {
        let idx = self.index(x, y)?;
        Some(&mut self.cells[idx])
    }

    /// Set a glyph at (x,y) and populate continuation cells for its width.
    /// Glyphs that would straddle the right edge are dropped.
    pub fn set_cluster(&mut self, x: u16, y: u16, cluster: &str, width: u16, flags: CellFlags) {
        if x >= self.width || y >= self.height {
            return;
        }
        let w = width.max(1);
        if w > self.width - x {
            return;
        }
        if let Some(idx) = self.index(x, y) {
            self.cells[idx] = Cell::leader(cluster, w, flags);
        }
        for dx in 1..w {
            if let Some(c_idx) = self.index(x + dx, y) {
                self.cells[c_idx] = Cell::continuation(flags);
            }
        }
    }

    /// Apply additional flags and colors over every cell of `rect`.
    pub fn style_rect(
        &mut self,
        rect: Rect,
        flags: CellFlags,
        fg: Option<Color>,
        bg: Option<Color>,
    ) {
        for dy in 0..rect.height {
            for dx in 0..rect.width {
                let (x, y) = (rect.x.saturating_add(dx), rect.y.saturating_add(dy));
                if let Some(cell) = self.cell_mut(x, y) {
                    cell.flags |= flags;
                    if fg.is_some() {
                        cell.fg = fg;
                    }
                    if bg.is_some() {
                        cell.bg = bg;
                    }
                }
            }
        }
    }

    /// Iterate leader cells of a row, yielding (cell, start_x).
    pub fn row_leaders(&self, y: u16) -> impl Iterator<Item = (&Cell, u16)> + '_ {
        let width = self.width;
        let start = y as usize * width as usize;
        let mut x = 0u16;
        std::iter::from_fn(move || {
            if y >= self.height {
                return None;
            }
            while x < width {
                let cell = &self.cells[start + x as usize];
                if cell.is_leader() {
                    let out = (cell, x);
                    x = x.saturating_add(cell.visual_width());
                    return Some(out);
                }
                x += 1;
            }
            None
        })
    }

    /// Row text with trailing blanks trimmed (testing / diagnostics only).
    pub fn row_text(&self, y: u16) -> String {
        let s: String = self.row_leaders(y).map(|(c, _)| c.cluster()).collect();
        s.trim_end().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wide_glyph_gets_continuation() {
        let mut f = Frame::new(4, 1);
        f.set_cluster(0, 0, "漢", 2, CellFlags::empty());
        f.set_cluster(2, 0, "a", 1, CellFlags::REVERSE);
        assert!(f.cell(0, 0).unwrap().is_leader());
        assert!(!f.cell(1, 0).unwrap().is_leader());
        assert_eq!(f.row_text(0), "漢a");
        let leaders: Vec<u16> = f.row_leaders(0).map(|(_, x)| x).collect();
        assert_eq!(leaders, vec![0, 2, 3]);
    }

    #[test]
    fn wide_glyph_clipped_at_edge() {
        let mut f = Frame::new(3, 1);
        f.set_cluster(2, 0, "漢", 2, CellFlags::empty());
        assert_eq!(f.cell(2, 0).unwrap().cluster(), " ");
    }

    #[test]
    fn style_rect_merges_flags() {
        let mut f = Frame::new(3, 2);
        f.style_rect(Rect::new(1, 1, 5, 5), CellFlags::DIM, None, Some(Color::DarkGrey));
        assert_eq!(f.cell(0, 0).unwrap().flags, CellFlags::empty());
        assert!(f.cell(2, 1).unwrap().flags.contains(CellFlags::DIM));
        assert_eq!(f.cell(2, 1).unwrap().bg, Some(Color::DarkGrey));
    }
}
