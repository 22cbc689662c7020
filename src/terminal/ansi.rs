use std::io::{self, Stdout, Write};

use crossterm::cursor::{MoveTo, RestorePosition, SavePosition};
use crossterm::queue;
use crossterm::style::{Attribute, Print, SetAttribute, SetBackgroundColor, SetForegroundColor};

use super::{Background, Foreground, Terminal};

/// [`Terminal`] that queues crossterm commands onto any writer. Nothing
/// reaches the screen until [`Terminal::flush`].
pub struct AnsiTerminal<W: Write> {
    out: W,
    size: Option<(u16, u16)>,
}

impl AnsiTerminal<Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> AnsiTerminal<W> {
    pub fn new(out: W) -> Self {
        Self { out, size: None }
    }

    /// Report a fixed size instead of querying the tty, for writers that
    /// are not a terminal.
    pub fn with_size(mut self, columns: u16, rows: u16) -> Self {
        self.size = Some((columns, rows));
        self
    }

    pub fn get_ref(&self) -> &W {
        &self.out
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Terminal for AnsiTerminal<W> {
    fn size(&self) -> io::Result<(u16, u16)> {
        match self.size {
            Some(size) => Ok(size),
            None => crossterm::terminal::size(),
        }
    }

    fn set_cursor_position(&mut self, x: u16, y: u16) -> io::Result<()> {
        queue!(self.out, MoveTo(x, y))
    }

    fn save_cursor_position(&mut self) -> io::Result<()> {
        queue!(self.out, SavePosition)
    }

    fn restore_cursor_position(&mut self) -> io::Result<()> {
        queue!(self.out, RestorePosition)
    }

    fn set_style(&mut self, foreground: Foreground, background: Background) -> io::Result<()> {
        queue!(self.out, SetAttribute(Attribute::Reset))?;
        if foreground.is_bold() {
            queue!(self.out, SetAttribute(Attribute::Bold))?;
        }
        queue!(
            self.out,
            SetForegroundColor(foreground.color()),
            SetBackgroundColor(background.color())
        )
    }

    fn clear_area(&mut self, x: u16, y: u16, width: u16, height: u16) -> io::Result<()> {
        let blank = " ".repeat(usize::from(width));
        for row in 0..height {
            queue!(self.out, MoveTo(x, y.saturating_add(row)), Print(&blank))?;
        }
        Ok(())
    }

    fn write_text(&mut self, text: &str) -> io::Result<()> {
        self.out.write_all(text.as_bytes())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn output(terminal: AnsiTerminal<Vec<u8>>) -> String {
        String::from_utf8(terminal.into_inner()).unwrap()
    }

    #[test]
    fn cursor_commands() {
        let mut terminal = AnsiTerminal::new(Vec::new());
        terminal.save_cursor_position().unwrap();
        terminal.set_cursor_position(2, 1).unwrap();
        terminal.restore_cursor_position().unwrap();

        assert_eq!(output(terminal), "\x1b7\x1b[2;3H\x1b8");
    }

    #[test]
    fn clear_area_writes_spaces_per_row() {
        let mut terminal = AnsiTerminal::new(Vec::new());
        terminal.clear_area(1, 1, 3, 2).unwrap();

        assert_eq!(output(terminal), "\x1b[2;2H   \x1b[3;2H   ");
    }

    #[test]
    fn style_resets_before_colouring() {
        let mut terminal = AnsiTerminal::new(Vec::new());
        terminal.set_style(Foreground::White, Background::Black).unwrap();

        let text = output(terminal);
        assert!(text.starts_with("\x1b[0m\x1b[1m"));
        // crossterm drops colour codes when NO_COLOR is set
        if std::env::var_os("NO_COLOR").is_none() {
            assert!(text.contains("\x1b[38;5;7m"));
            assert!(text.ends_with("\x1b[48;5;0m"));
        }
    }

    #[test]
    fn fixed_size_skips_the_tty() {
        let terminal = AnsiTerminal::new(Vec::new()).with_size(80, 24);
        assert_eq!(terminal.size().unwrap(), (80, 24));
    }
}
