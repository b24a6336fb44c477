//! Terminal writer: batches primitive terminal operations for one frame and
//! flushes them in a single write.
//!
//! * Commands preserve ordering; no flushing mid-frame.
//! * All positions are absolute with a (0,0) origin.
//! * A style change is emitted only when the flags of consecutive cells differ.

use crate::{CellFlags, Frame};
use anyhow::Result;
use crossterm::{
    cursor::MoveTo,
    queue,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor},
};
use std::io::Write;

#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    MoveTo(u16, u16),
    Style(CellFlags),
    Print(String),
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

    pub fn move_to(&mut self, x: u16, y: u16) {
        self.cmds.push(Command::MoveTo(x, y));
    }

    pub fn style(&mut self, flags: CellFlags) {
        self.cmds.push(Command::Style(flags));
    }

    pub fn print<S: Into<String>>(&mut self, s: S) {
        let s: String = s.into();
        if s.is_empty() {
            return;
        }
        // Merge with a preceding print to keep the command list short.
        if let Some(Command::Print(prev)) = self.cmds.last_mut() {
            prev.push_str(&s);
        } else {
            self.cmds.push(Command::Print(s));
        }
    }

    /// Queue every row of `frame`, dropping glyphs beyond `visible_cols`.
    pub fn emit_frame(&mut self, frame: &Frame, visible_cols: u16) {
        for y in 0..frame.height {
            self.move_to(0, y);
            let mut current: Option<CellFlags> = None;
            for (ch, w, flags, x) in frame.row_leaders(y) {
                if x + w > visible_cols {
                    break;
                }
                if current != Some(flags) {
                    self.style(flags);
                    current = Some(flags);
                }
                self.print(ch.to_string());
            }
        }
        self.style(CellFlags::empty());
    }

    pub fn flush_to<W: Write>(self, out: &mut W) -> Result<()> {
        for c in self.cmds {
            match c {
                Command::MoveTo(x, y) => {
                    queue!(out, MoveTo(x, y))?;
                }
                Command::Style(flags) => apply_style(out, flags)?,
                Command::Print(s) => {
                    queue!(out, Print(s))?;
                }
            }
        }
        out.flush()?;
        Ok(())
    }
}

fn apply_style<W: Write>(out: &mut W, flags: CellFlags) -> Result<()> {
    queue!(out, SetAttribute(Attribute::Reset), ResetColor)?;
    if flags.contains(CellFlags::CURSOR) || flags.contains(CellFlags::STATUS) {
        queue!(out, SetAttribute(Attribute::Reverse))?;
        return Ok(());
    }
    if flags.contains(CellFlags::SELECTED) {
        queue!(out, SetForegroundColor(Color::Black), SetBackgroundColor(Color::DarkGrey))?;
    } else if flags.contains(CellFlags::MATCHED) {
        queue!(out, SetForegroundColor(Color::Black), SetBackgroundColor(Color::Yellow))?;
    } else if flags.contains(CellFlags::CURRENT_LINE) {
        queue!(out, SetForegroundColor(Color::Grey))?;
    } else if flags.contains(CellFlags::GUTTER) {
        queue!(out, SetForegroundColor(Color::DarkGrey))?;
    } else if flags.contains(CellFlags::FILLER) {
        queue!(out, SetForegroundColor(Color::Blue))?;
    }
    Ok(())
}
