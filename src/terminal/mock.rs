use std::io;

use super::{Background, Foreground, Terminal};

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Op {
    MoveTo(u16, u16),
    Save,
    Restore,
    Style(Foreground, Background),
    Clear(u16, u16, u16, u16),
    Write(String),
    Flush,
}

/// Records every call so tests can assert on the exact sequence.
#[derive(Debug, Default)]
pub(crate) struct RecordingTerminal {
    pub(crate) ops: Vec<Op>,
}

impl RecordingTerminal {
    pub(crate) fn writes(&self) -> Vec<&str> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                Op::Write(text) => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl Terminal for RecordingTerminal {
    fn size(&self) -> io::Result<(u16, u16)> {
        Ok((80, 24))
    }

    fn set_cursor_position(&mut self, x: u16, y: u16) -> io::Result<()> {
        self.ops.push(Op::MoveTo(x, y));
        Ok(())
    }

    fn save_cursor_position(&mut self) -> io::Result<()> {
        self.ops.push(Op::Save);
        Ok(())
    }

    fn restore_cursor_position(&mut self) -> io::Result<()> {
        self.ops.push(Op::Restore);
        Ok(())
    }

    fn set_style(&mut self, foreground: Foreground, background: Background) -> io::Result<()> {
        self.ops.push(Op::Style(foreground, background));
        Ok(())
    }

    fn clear_area(&mut self, x: u16, y: u16, width: u16, height: u16) -> io::Result<()> {
        self.ops.push(Op::Clear(x, y, width, height));
        Ok(())
    }

    fn write_text(&mut self, text: &str) -> io::Result<()> {
        self.ops.push(Op::Write(text.to_string()));
        Ok(())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.ops.push(Op::Flush);
        Ok(())
    }
}

/// Fails on the first write, for error propagation tests.
#[derive(Debug, Default)]
pub(crate) struct BrokenTerminal {
    pub(crate) restored: bool,
}

impl Terminal for BrokenTerminal {
    fn size(&self) -> io::Result<(u16, u16)> {
        Ok((80, 24))
    }

    fn set_cursor_position(&mut self, _x: u16, _y: u16) -> io::Result<()> {
        Ok(())
    }

    fn save_cursor_position(&mut self) -> io::Result<()> {
        Ok(())
    }

    fn restore_cursor_position(&mut self) -> io::Result<()> {
        self.restored = true;
        Ok(())
    }

    fn set_style(&mut self, _foreground: Foreground, _background: Background) -> io::Result<()> {
        Ok(())
    }

    fn clear_area(&mut self, _x: u16, _y: u16, _width: u16, _height: u16) -> io::Result<()> {
        Ok(())
    }

    fn write_text(&mut self, _text: &str) -> io::Result<()> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "terminal closed"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
