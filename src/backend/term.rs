//! Crossterm terminal backend.
//!
//! A thin binding: raw mode plus alternate screen on entry, restored on
//! shutdown, and queued cell writes flushed by `present()`. There is no
//! diffing or double buffering here — the engine hands over final cell
//! content and this backend forwards it.

use std::io::{self, Stdout, Write};

use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::style::{Color as CtColor, Print, ResetColor, SetBackgroundColor, SetForegroundColor};
use crossterm::terminal::{
    self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::{execute, queue};

use super::Backend;
use crate::types::{CellStyle, Color};

/// Terminal-backed grid writer.
pub struct TermBackend {
    out: Stdout,
    active: bool,
}

impl TermBackend {
    /// Take over the terminal: raw mode, alternate screen, hidden cursor.
    pub fn new() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        let mut out = io::stdout();
        execute!(out, EnterAlternateScreen, Hide, Clear(ClearType::All))?;
        log::trace!("terminal backend up");
        Ok(Self { out, active: true })
    }

    fn restore(&mut self) {
        if !self.active {
            return;
        }
        self.active = false;
        // Restore in reverse order of setup; keep going on failure so a
        // broken pipe can't leave the terminal in raw mode.
        execute!(self.out, Show, LeaveAlternateScreen).ok();
        terminal::disable_raw_mode().ok();
        log::trace!("terminal backend down");
    }
}

impl Backend for TermBackend {
    fn size(&mut self) -> (i32, i32) {
        match terminal::size() {
            Ok((w, h)) => (w as i32, h as i32),
            Err(err) => {
                log::warn!("terminal size query failed: {err}");
                (0, 0)
            }
        }
    }

    fn draw_char(&mut self, x: i32, y: i32, ch: char, style: CellStyle) {
        if x < 0 || y < 0 || x > u16::MAX as i32 || y > u16::MAX as i32 {
            return;
        }
        queue!(self.out, MoveTo(x as u16, y as u16)).ok();
        queue_style(&mut self.out, style);
        queue!(self.out, Print(ch), ResetColor).ok();
    }

    fn draw_str(&mut self, x: i32, y: i32, s: &str, style: CellStyle) {
        if y < 0 || x > u16::MAX as i32 || y > u16::MAX as i32 {
            return;
        }
        // Negative start columns were clipped upstream; anything left that
        // still starts off-screen is dropped whole.
        if x < 0 {
            return;
        }
        queue!(self.out, MoveTo(x as u16, y as u16)).ok();
        queue_style(&mut self.out, style);
        queue!(self.out, Print(s), ResetColor).ok();
    }

    fn clear(&mut self) {
        queue!(self.out, Clear(ClearType::All)).ok();
    }

    fn present(&mut self) {
        if let Err(err) = self.out.flush() {
            log::warn!("terminal flush failed: {err}");
        }
    }

    fn shutdown(&mut self) {
        self.restore();
    }
}

impl Drop for TermBackend {
    fn drop(&mut self) {
        self.restore();
    }
}

fn queue_style(out: &mut Stdout, style: CellStyle) {
    if let Some(fg) = style.fg {
        queue!(out, SetForegroundColor(to_crossterm(fg))).ok();
    }
    if let Some(bg) = style.bg {
        queue!(out, SetBackgroundColor(to_crossterm(bg))).ok();
    }
}

fn to_crossterm(color: Color) -> CtColor {
    match color {
        Color::Black => CtColor::Black,
        Color::Red => CtColor::DarkRed,
        Color::Green => CtColor::DarkGreen,
        Color::Yellow => CtColor::DarkYellow,
        Color::Blue => CtColor::DarkBlue,
        Color::Magenta => CtColor::DarkMagenta,
        Color::Cyan => CtColor::DarkCyan,
        Color::White => CtColor::Grey,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_mapping_is_one_to_one() {
        let colors = [
            Color::Black,
            Color::Red,
            Color::Green,
            Color::Yellow,
            Color::Blue,
            Color::Magenta,
            Color::Cyan,
            Color::White,
        ];
        let mapped: Vec<_> = colors.iter().map(|&c| to_crossterm(c)).collect();
        for (i, a) in mapped.iter().enumerate() {
            for b in mapped.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
    }
}
