use std::io;

use log::{debug, trace};

use super::glyph::{self, BrailleDots, CELL_HEIGHT, CELL_WIDTH};
use super::raster;
use super::PixelBuffer;
use crate::error::CanvasError;
use crate::terminal::{Background, Foreground, Terminal};

/// One non-blank character cell handed to a [`GlyphSink`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlyphCell<'a> {
    pub col: u16,
    pub row: u16,
    pub grid_width: u16,
    pub grid_height: u16,
    /// The Braille glyph, UTF-8 encoded.
    pub glyph: &'a str,
}

/// Receiver for callback-mode rendering. Closures taking a [`GlyphCell`]
/// implement it.
pub trait GlyphSink {
    fn put(&mut self, cell: GlyphCell<'_>);
}

impl<F> GlyphSink for F
where
    F: FnMut(GlyphCell<'_>),
{
    fn put(&mut self, cell: GlyphCell<'_>) {
        self(cell)
    }
}

/// A rectangle of terminal cells backed by a pixel buffer at twice the
/// horizontal and four times the vertical resolution.
#[derive(Debug, Clone)]
pub struct BrailleCanvas {
    left: u16,
    top: u16,
    width: u16,
    height: u16,
    pub foreground: Foreground,
    pub background: Background,
    pixels: PixelBuffer,
}

impl BrailleCanvas {
    /// Place a `width` x `height` cell canvas with its top-left corner at
    /// cell `(left, top)`. All pixels start off.
    pub fn new(left: u16, top: u16, width: u16, height: u16) -> Result<Self, CanvasError> {
        let pixels = PixelBuffer::new(
            usize::from(width) * CELL_WIDTH,
            usize::from(height) * CELL_HEIGHT,
        )?;

        debug!(
            "Created {}x{} canvas at ({}, {}) with {}x{} pixels",
            width,
            height,
            left,
            top,
            pixels.width(),
            pixels.height()
        );

        Ok(Self {
            left,
            top,
            width,
            height,
            foreground: Foreground::default(),
            background: Background::default(),
            pixels,
        })
    }

    /// Rebuild a canvas from Braille text, one line per character row.
    /// Characters outside the Braille block leave their cell empty.
    pub fn from_text(left: u16, top: u16, text: &str) -> Result<Self, CanvasError> {
        let rows: Vec<&str> = text.lines().collect();
        let cols = rows.iter().map(|line| line.chars().count()).max().unwrap_or(0);

        let too_large = || CanvasError::TooLarge {
            width: cols.saturating_mul(CELL_WIDTH),
            height: rows.len().saturating_mul(CELL_HEIGHT),
        };
        let width = u16::try_from(cols).map_err(|_| too_large())?;
        let height = u16::try_from(rows.len()).map_err(|_| too_large())?;

        let mut canvas = Self::new(left, top, width, height)?;
        for (row, line) in rows.iter().enumerate() {
            for (col, ch) in line.chars().enumerate() {
                glyph::decode_cell(&mut canvas.pixels, row, col, u32::from(ch));
            }
        }
        Ok(canvas)
    }

    pub fn left(&self) -> u16 {
        self.left
    }

    pub fn top(&self) -> u16 {
        self.top
    }

    /// Width in character cells.
    pub fn width(&self) -> u16 {
        self.width
    }

    /// Height in character cells.
    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn pixel_width(&self) -> usize {
        self.pixels.width()
    }

    pub fn pixel_height(&self) -> usize {
        self.pixels.height()
    }

    pub fn pixels(&self) -> &PixelBuffer {
        &self.pixels
    }

    pub fn set_style(&mut self, foreground: Foreground, background: Background) {
        self.foreground = foreground;
        self.background = background;
    }

    /// Turn every pixel off.
    pub fn wipe(&mut self) {
        self.pixels.clear();
    }

    pub fn set_pixel(&mut self, x: u16, y: u16) {
        self.pixels.set(x.into(), y.into());
    }

    pub fn get_pixel(&self, x: u16, y: u16) -> u8 {
        self.pixels.get(x.into(), y.into())
    }

    pub fn stroke_line(&mut self, x0: u16, y0: u16, x1: u16, y1: u16) {
        raster::stroke_line(&mut self.pixels, x0, y0, x1, y1);
    }

    pub fn stroke_rectangle(&mut self, x: u16, y: u16, w: u16, h: u16) {
        raster::stroke_rectangle(&mut self.pixels, x, y, w, h);
    }

    pub fn fill_rectangle(&mut self, x: u16, y: u16, w: u16, h: u16) {
        raster::fill_rectangle(&mut self.pixels, x, y, w, h);
    }

    pub fn stroke_circle(&mut self, cx: u16, cy: u16, r: u16) {
        raster::stroke_circle(&mut self.pixels, cx, cy, r);
    }

    pub fn fill_circle(&mut self, cx: u16, cy: u16, r: u16) {
        raster::fill_circle(&mut self.pixels, cx, cy, r);
    }

    /// Braille codepoint of character cell `(row, col)`.
    pub fn glyph_at(&self, row: u16, col: u16) -> u32 {
        glyph::encode_cell(&self.pixels, row.into(), col.into())
    }

    /// Callback mode with a closure. See [`BrailleCanvas::render_into`].
    pub fn render_with<F>(&self, mut sink: F)
    where
        F: FnMut(GlyphCell<'_>),
    {
        self.render_into(&mut sink);
    }

    /// Hand every non-blank cell, row by row, to `sink`. Blank cells are
    /// skipped. Cursor and style are left to the caller.
    pub fn render_into<S: GlyphSink + ?Sized>(&self, sink: &mut S) {
        let mut utf8 = [0u8; 4];
        for row in 0..self.height {
            for col in 0..self.width {
                let dots = BrailleDots::from_block(&self.pixels, row.into(), col.into());
                if dots.is_blank() {
                    continue;
                }

                sink.put(GlyphCell {
                    col,
                    row,
                    grid_width: self.width,
                    grid_height: self.height,
                    glyph: dots.to_char().encode_utf8(&mut utf8),
                });
            }
        }
    }

    /// Each character row as text. Blank cells become an ASCII space.
    pub fn lines(&self) -> impl Iterator<Item = String> + '_ {
        (0..self.height).map(move |row| self.line(row))
    }

    /// All rows joined with `\n`.
    pub fn to_text(&self) -> String {
        self.lines().collect::<Vec<_>>().join("\n")
    }

    fn line(&self, row: u16) -> String {
        // Braille glyphs are three bytes in UTF-8
        let mut line = String::with_capacity(usize::from(self.width) * 3);
        for col in 0..self.width {
            let dots = BrailleDots::from_block(&self.pixels, row.into(), col.into());
            if dots.is_blank() {
                line.push(' ');
            } else {
                line.push(dots.to_char());
            }
        }
        line
    }

    /// Direct mode: redraw the whole canvas at its place on `terminal`.
    ///
    /// The cursor position is saved first and restored at the end, also
    /// when a write fails; the first error is returned.
    pub fn render<T: Terminal + ?Sized>(&self, terminal: &mut T) -> io::Result<()> {
        trace!(
            "Rendering {}x{} canvas at ({}, {})",
            self.width,
            self.height,
            self.left,
            self.top
        );

        terminal.save_cursor_position()?;
        let drawn = self.draw_rows(terminal);
        let restored = terminal
            .restore_cursor_position()
            .and_then(|()| terminal.flush());
        drawn.and(restored)
    }

    fn draw_rows<T: Terminal + ?Sized>(&self, terminal: &mut T) -> io::Result<()> {
        terminal.set_style(self.foreground, self.background)?;
        terminal.clear_area(self.left, self.top, self.width, self.height)?;

        for (row, line) in self.lines().enumerate() {
            let y = self.top.saturating_add(row as u16);
            terminal.set_cursor_position(self.left, y)?;
            terminal.write_text(&line)?;
        }
        Ok(())
    }
}
