//! Terminal writer: translates a `Frame` into queued crossterm commands.
//!
//! Design invariants:
//! * Commands preserve ordering; nothing is flushed mid-frame.
//! * All positions are absolute (0,0) origin; caller ensures bounds.
//! * Only leader cells print; continuation cells are covered by their leader.
//! * Attribute changes are emitted only when a cell's style differs from the
//!   previous printed cell, and every row ends with an attribute reset.
//! * The writer owns no global state; it is a short-lived object per frame.

use crate::{CellFlags, Frame};
use anyhow::Result;
use crossterm::{
    cursor::{Hide, MoveTo, SetCursorStyle, Show},
    queue,
    style::{Attribute, Color, Print, SetAttribute, SetBackgroundColor, SetForegroundColor},
    terminal::{Clear, ClearType},
};
use std::io::Write;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    MoveTo(u16, u16),
    ClearLine,
    Print(String),
    Style {
        flags: CellFlags,
        fg: Option<Color>,
        bg: Option<Color>,
    },
    ResetStyle,
    /// Show an underline-shaped cursor at (x, y).
    ShowCursor(u16, u16),
    HideCursor,
}

#[derive(Default)]
pub struct Writer {
    cmds: Vec<Command>,
}

impl Writer {
    pub fn new() -> Self {
        Self { cmds: Vec::new() }
    }

    pub fn commands(&self) -> &[Command] {
        &self.cmds
    }

    /// Queue a full repaint of `frame` with its top row placed at `origin_row`.
    pub fn paint(&mut self, frame: &Frame, origin_row: u16) {
        self.cmds.push(Command::HideCursor);
        for y in 0..frame.height {
            self.cmds.push(Command::MoveTo(0, origin_row.saturating_add(y)));
            self.cmds.push(Command::ClearLine);
            let mut current: Option<(CellFlags, Option<Color>, Option<Color>)> = None;
            let mut run = String::new();
            for (cell, _) in frame.row_leaders(y) {
                let style = (cell.flags, cell.fg, cell.bg);
                if current != Some(style) {
                    if !run.is_empty() {
                        self.cmds.push(Command::Print(std::mem::take(&mut run)));
                    }
                    self.cmds.push(Command::ResetStyle);
                    self.cmds.push(Command::Style {
                        flags: cell.flags,
                        fg: cell.fg,
                        bg: cell.bg,
                    });
                    current = Some(style);
                }
                run.push_str(cell.cluster());
            }
            if !run.is_empty() {
                self.cmds.push(Command::Print(run));
            }
            self.cmds.push(Command::ResetStyle);
        }
        if let Some((x, y)) = frame.cursor {
            self.cmds
                .push(Command::ShowCursor(x, origin_row.saturating_add(y)));
        }
        tracing::trace!(target: "render.writer", commands = self.cmds.len(), rows = frame.height, "paint");
    }

    pub fn flush<W: Write>(self, out: &mut W) -> Result<()> {
        for c in self.cmds {
            match c {
                Command::MoveTo(x, y) => {
                    queue!(out, MoveTo(x, y))?;
                }
                Command::ClearLine => {
                    // Caller guarantees a preceding MoveTo(0, y).
                    queue!(out, Clear(ClearType::CurrentLine))?;
                }
                Command::Print(s) => {
                    queue!(out, Print(s))?;
                }
                Command::Style { flags, fg, bg } => {
                    if flags.contains(CellFlags::REVERSE) {
                        queue!(out, SetAttribute(Attribute::Reverse))?;
                    }
                    if flags.contains(CellFlags::UNDERLINE) {
                        queue!(out, SetAttribute(Attribute::Underlined))?;
                    }
                    if flags.contains(CellFlags::DIM) {
                        queue!(out, SetAttribute(Attribute::Dim))?;
                    }
                    if flags.contains(CellFlags::BOLD) {
                        queue!(out, SetAttribute(Attribute::Bold))?;
                    }
                    if let Some(fg) = fg {
                        queue!(out, SetForegroundColor(fg))?;
                    }
                    if let Some(bg) = bg {
                        queue!(out, SetBackgroundColor(bg))?;
                    }
                }
                Command::ResetStyle => {
                    queue!(out, SetAttribute(Attribute::Reset))?;
                }
                Command::ShowCursor(x, y) => {
                    queue!(out, MoveTo(x, y), SetCursorStyle::SteadyUnderScore, Show)?;
                }
                Command::HideCursor => {
                    queue!(out, Hide)?;
                }
            }
        }
        out.flush()?;
        Ok(())
    }
}
