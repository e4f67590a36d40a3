//! Terminal presenter for overlay frames.
//!
//! Draws the overlay as a full-screen grid of text: a frame boundary, the
//! title with its accent mark and the status line with its indicator dot.
//! Layer opacity is applied by blending each color into the backdrop.

use std::io::Write;

use curtain_common::{Color, RenderError};

use crate::overlay::{OverlayFrame, OverlayStyle, StatusLayer, TitleLayer};

const INDICATOR: char = '●';
const FRAME_EDGE: char = '─';
/// Layers below this opacity are left out of plain output.
const PLAIN_VISIBLE: f32 = 0.5;
/// Blur above which text is drawn dim.
const SOFT_BLUR_PX: f32 = 4.0;
/// Pixels of motion per terminal row.
const PX_PER_ROW: f32 = 16.0;

/// Rendering collaborator that draws overlay frames.
pub trait Presenter {
    fn present(&mut self, frame: &OverlayFrame, style: &OverlayStyle) -> Result<(), RenderError>;

    /// Remove the overlay and restore the surface for the application.
    fn clear(&mut self) -> Result<(), RenderError>;
}

/// Draws frames to a terminal (or any writer) as ANSI truecolor text.
///
/// In plain mode no escape codes are written and a frame is only emitted
/// when its visible text differs from the previous one.
pub struct TerminalPresenter<W: Write> {
    out: W,
    cols: u16,
    rows: u16,
    ansi: bool,
    last_plain: Option<String>,
    cursor_hidden: bool,
}

impl<W: Write> TerminalPresenter<W> {
    pub fn new(out: W, cols: u16, rows: u16) -> Self {
        Self {
            out,
            cols: cols.max(1),
            rows: rows.max(1),
            ansi: true,
            last_plain: None,
            cursor_hidden: false,
        }
    }

    pub fn plain(out: W, cols: u16, rows: u16) -> Self {
        Self {
            ansi: false,
            ..Self::new(out, cols, rows)
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn title_row(&self, title: &TitleLayer) -> usize {
        let center = (self.rows as usize / 2).saturating_sub(1);
        offset_row(center, title.offset_y, self.rows)
    }

    fn status_row(&self, status: &StatusLayer) -> usize {
        let center = self.rows as usize / 2 + 1;
        offset_row(center, status.offset_y, self.rows)
    }

    fn present_ansi(&mut self, frame: &OverlayFrame, style: &OverlayStyle) -> Result<(), RenderError> {
        let backdrop = style.glow.over(style.background, frame.atmosphere.opacity);
        let cols = self.cols as usize;
        let mut buf = String::with_capacity(cols * self.rows as usize * 4);

        if !self.cursor_hidden {
            buf.push_str("\x1b[?25l");
            self.cursor_hidden = true;
        }
        buf.push_str("\x1b[H");

        let title_row = frame.title.as_ref().map(|t| self.title_row(t));
        let status_row = frame.status.as_ref().map(|s| self.status_row(s));
        let edge_rows = [1usize, (self.rows as usize).saturating_sub(2)];

        for row in 0..self.rows as usize {
            push_bg(&mut buf, backdrop);
            let mut line = Vec::new();

            if let (Some(title), Some(r)) = (&frame.title, title_row) {
                if r == row {
                    let opacity = title.opacity * frame.opacity;
                    let text = spaced(&style.title, title.letter_spacing_em);
                    line.push((text, style.text.over(backdrop, opacity), title.blur + frame.blur));
                    line.push((
                        style.title_mark.clone(),
                        style.accent.over(backdrop, opacity),
                        title.blur + frame.blur,
                    ));
                }
            }
            if let (Some(status), Some(r)) = (&frame.status, status_row) {
                if r == row && title_row != Some(row) {
                    let opacity = status.opacity * frame.opacity;
                    line.push((
                        INDICATOR.to_string(),
                        style.accent.over(backdrop, opacity * status.indicator_opacity),
                        frame.blur,
                    ));
                    line.push((
                        format!("  {}", style.status_text),
                        style.text.over(backdrop, opacity),
                        frame.blur,
                    ));
                }
            }

            if line.is_empty() && edge_rows.contains(&row) && self.rows > 4 {
                let edge = style
                    .text
                    .over(backdrop, frame.frame_opacity * frame.opacity);
                let inset = cols.min(4);
                buf.push_str(&" ".repeat(inset));
                push_fg(&mut buf, edge);
                buf.extend(std::iter::repeat(FRAME_EDGE).take(cols.saturating_sub(inset * 2)));
                buf.push_str(&" ".repeat(inset));
            } else {
                let width: usize = line.iter().map(|(text, _, _)| text.chars().count()).sum();
                let pad = cols.saturating_sub(width) / 2;
                buf.push_str(&" ".repeat(pad));
                let mut used = pad;
                for (text, color, blur) in &line {
                    push_fg(&mut buf, *color);
                    buf.push_str(if *blur > SOFT_BLUR_PX { "\x1b[2m" } else { "\x1b[22m" });
                    let room = cols.saturating_sub(used);
                    let clipped: String = text.chars().take(room).collect();
                    used += clipped.chars().count();
                    buf.push_str(&clipped);
                }
                buf.push_str("\x1b[22m");
                buf.push_str(&" ".repeat(cols.saturating_sub(used)));
            }

            buf.push_str("\x1b[0m");
            if row + 1 < self.rows as usize {
                buf.push_str("\r\n");
            }
        }

        self.out.write_all(buf.as_bytes())?;
        self.out.flush()?;
        Ok(())
    }

    fn present_plain(&mut self, frame: &OverlayFrame, style: &OverlayStyle) -> Result<(), RenderError> {
        let mut lines = Vec::new();
        if let Some(title) = &frame.title {
            if title.opacity * frame.opacity >= PLAIN_VISIBLE {
                lines.push(format!("{}{}", style.title, style.title_mark));
            }
        }
        if let Some(status) = &frame.status {
            // Status tops out below full opacity; judge it against its own peak.
            let peak = style.status_opacity.max(f32::EPSILON);
            if status.opacity * frame.opacity / peak >= PLAIN_VISIBLE {
                lines.push(format!("{INDICATOR} {}", style.status_text));
            }
        }

        let text = lines.join("\n");
        if self.last_plain.as_deref() == Some(text.as_str()) {
            return Ok(());
        }
        if !text.is_empty() {
            writeln!(self.out, "{text}")?;
            self.out.flush()?;
        }
        self.last_plain = Some(text);
        Ok(())
    }
}

impl<W: Write> Presenter for TerminalPresenter<W> {
    fn present(&mut self, frame: &OverlayFrame, style: &OverlayStyle) -> Result<(), RenderError> {
        if self.ansi {
            self.present_ansi(frame, style)
        } else {
            self.present_plain(frame, style)
        }
    }

    fn clear(&mut self) -> Result<(), RenderError> {
        if self.ansi {
            self.out.write_all(b"\x1b[0m\x1b[2J\x1b[H")?;
            if self.cursor_hidden {
                self.out.write_all(b"\x1b[?25h")?;
                self.cursor_hidden = false;
            }
            self.out.flush()?;
        }
        self.last_plain = None;
        Ok(())
    }
}

fn push_fg(buf: &mut String, c: Color) {
    buf.push_str(&format!("\x1b[38;2;{};{};{}m", c.r, c.g, c.b));
}

fn push_bg(buf: &mut String, c: Color) {
    buf.push_str(&format!("\x1b[48;2;{};{};{}m", c.r, c.g, c.b));
}

/// Row for a layer resting at `center` and displaced by `offset_px`.
fn offset_row(center: usize, offset_px: f32, rows: u16) -> usize {
    let shift = (offset_px / PX_PER_ROW).round().max(0.0) as usize;
    (center + shift).min((rows as usize).saturating_sub(1))
}

/// Widen positive tracking into a space between letters.
fn spaced(text: &str, letter_spacing_em: f32) -> String {
    if letter_spacing_em <= 0.0 {
        return text.to_string();
    }
    let mut out = String::with_capacity(text.len() * 2);
    for (i, ch) in text.chars().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        out.push(ch);
    }
    out
}
