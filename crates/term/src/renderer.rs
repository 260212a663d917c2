//! TerminalRenderer: flushes a screen buffer to a real terminal.
//!
//! Draws are diffed against the previous frame and encoded as changed runs,
//! so a steady game only writes the cells that moved.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor},
    terminal, QueueableCommand,
};

use crate::screen::{Rgb, Screen, Style};

pub struct TerminalRenderer {
    stdout: io::Stdout,
    last: Option<Screen>,
    buf: Vec<u8>,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            last: None,
            buf: Vec::with_capacity(64 * 1024),
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(cursor::Hide)?;
        self.buf.queue(terminal::DisableLineWrap)?;
        self.flush_buf()?;
        Ok(())
    }

    pub fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf.queue(ResetColor)?;
        self.buf.queue(SetAttribute(Attribute::Reset))?;
        self.buf.queue(terminal::EnableLineWrap)?;
        self.buf.queue(cursor::Show)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        self.flush_buf()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Force the next draw to be a full redraw.
    ///
    /// Useful on terminal resize events.
    pub fn invalidate(&mut self) {
        self.last = None;
    }

    /// Draw a screen, swapping it into internal state.
    ///
    /// Callers should keep one `Screen` and pass it in every frame. The
    /// renderer diffs against the previous frame and then swaps buffers so
    /// the caller can reuse the old one without cloning.
    pub fn draw_swap(&mut self, screen: &mut Screen) -> Result<()> {
        if self.last.is_none() {
            self.last = Some(Screen::new(screen.width(), screen.height()));
        }

        // Take previous out to avoid borrow conflicts (no cloning).
        let mut prev = self.last.take().unwrap();
        let needs_full = prev.width() != screen.width() || prev.height() != screen.height();

        self.buf.clear();
        if needs_full {
            encode_full_into(screen, &mut self.buf)?;
            prev.resize(screen.width(), screen.height());
        } else {
            encode_diff_into(&prev, screen, &mut self.buf)?;
        }
        self.flush_buf()?;

        // Swap current into prev so next frame can diff without cloning.
        std::mem::swap(&mut prev, screen);
        self.last = Some(prev);
        Ok(())
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()?;
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Encode a full-frame redraw into `out`.
///
/// This builds a sequence of crossterm commands without writing to stdout.
pub fn encode_full_into(screen: &Screen, out: &mut Vec<u8>) -> Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;
    out.queue(cursor::MoveTo(0, 0))?;

    let mut current_style: Option<Style> = None;
    for y in 0..screen.height() {
        for x in 0..screen.width() {
            let glyph = screen.get(x, y).unwrap_or_default();
            if current_style != Some(glyph.style) {
                apply_style_into(out, glyph.style)?;
                current_style = Some(glyph.style);
            }
            out.queue(Print(glyph.ch))?;
        }
        if y + 1 < screen.height() {
            out.queue(Print("\r\n"))?;
        }
    }

    out.queue(ResetColor)?;
    out.queue(SetAttribute(Attribute::Reset))?;
    Ok(())
}

/// Encode a diff redraw (changed runs) into `out`.
pub fn encode_diff_into(prev: &Screen, next: &Screen, out: &mut Vec<u8>) -> Result<()> {
    let mut current_style: Option<Style> = None;

    for_each_changed_run(prev, next, |x, y, len| {
        out.queue(cursor::MoveTo(x, y))?;
        for dx in 0..len {
            let glyph = next.get(x + dx, y).unwrap_or_default();
            if current_style != Some(glyph.style) {
                apply_style_into(out, glyph.style)?;
                current_style = Some(glyph.style);
            }
            out.queue(Print(glyph.ch))?;
        }
        Ok(())
    })?;

    out.queue(ResetColor)?;
    out.queue(SetAttribute(Attribute::Reset))?;
    Ok(())
}

fn apply_style_into(out: &mut Vec<u8>, style: Style) -> Result<()> {
    out.queue(SetForegroundColor(rgb_to_color(style.fg)))?;
    out.queue(SetBackgroundColor(rgb_to_color(style.bg)))?;
    out.queue(SetAttribute(Attribute::Reset))?;
    if style.dim {
        out.queue(SetAttribute(Attribute::Dim))?;
    }
    Ok(())
}

fn rgb_to_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

fn for_each_changed_run(
    prev: &Screen,
    next: &Screen,
    mut f: impl FnMut(u16, u16, u16) -> Result<()>,
) -> Result<()> {
    if prev.width() != next.width() || prev.height() != next.height() {
        // Size changed: treat everything as dirty in a single pass (row runs).
        for y in 0..next.height() {
            f(0, y, next.width())?;
        }
        return Ok(());
    }

    let w = next.width();
    let h = next.height();

    for y in 0..h {
        let mut x = 0;
        while x < w {
            let a = prev.get(x, y).unwrap_or_default();
            let b = next.get(x, y).unwrap_or_default();
            if a == b {
                x += 1;
                continue;
            }

            let start = x;
            x += 1;
            while x < w {
                let a2 = prev.get(x, y).unwrap_or_default();
                let b2 = next.get(x, y).unwrap_or_default();
                if a2 == b2 {
                    break;
                }
                x += 1;
            }
            let len = x - start;
            f(start, y, len)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::screen::{Glyph, Style};

    #[test]
    fn style_maps_to_rgb_color() {
        let style = Style::default();
        assert_eq!(
            rgb_to_color(style.fg),
            Color::Rgb {
                r: style.fg.r,
                g: style.fg.g,
                b: style.fg.b
            }
        );
    }

    #[test]
    fn changed_run_iterator_coalesces_adjacent_cells() {
        let style = Style::default();
        let a = Screen::new(5, 1);
        let mut b = Screen::new(5, 1);

        // Change cells [1..=3] into X.
        for x in 1..=3 {
            b.set(x, 0, Glyph { ch: 'X', style });
        }

        let mut runs = Vec::new();
        for_each_changed_run(&a, &b, |x, y, len| {
            runs.push((x, y, len));
            Ok(())
        })
        .unwrap();
        assert_eq!(runs, vec![(1, 0, 3)]);
    }

    #[test]
    fn size_change_marks_every_row_dirty() {
        let a = Screen::new(3, 2);
        let b = Screen::new(5, 2);

        let mut runs = Vec::new();
        for_each_changed_run(&a, &b, |x, y, len| {
            runs.push((x, y, len));
            Ok(())
        })
        .unwrap();
        assert_eq!(runs, vec![(0, 0, 5), (0, 1, 5)]);
    }
}
