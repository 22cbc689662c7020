//! Terminal output collaborator used by direct-mode rendering.

mod ansi;
#[cfg(test)]
pub(crate) mod mock;
mod style;

pub use ansi::AnsiTerminal;
pub use style::{Background, Foreground};

use std::io;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::renderer::BrailleCanvas;

/// Screen operations a canvas needs to draw itself. Coordinates are zero
/// based character cells.
pub trait Terminal {
    /// `(columns, rows)` of the visible screen.
    fn size(&self) -> io::Result<(u16, u16)>;

    fn set_cursor_position(&mut self, x: u16, y: u16) -> io::Result<()>;

    fn save_cursor_position(&mut self) -> io::Result<()>;

    fn restore_cursor_position(&mut self) -> io::Result<()>;

    fn set_style(&mut self, foreground: Foreground, background: Background) -> io::Result<()>;

    /// Overwrite a `width` x `height` block with spaces in the current style.
    fn clear_area(&mut self, x: u16, y: u16, width: u16, height: u16) -> io::Result<()>;

    /// Write already encoded text at the cursor.
    fn write_text(&mut self, text: &str) -> io::Result<()>;

    fn flush(&mut self) -> io::Result<()>;

    /// One-time preparation before the first render.
    fn setup(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// A terminal shared between threads. The mutex serialises whole renders so
/// escape sequences from different canvases never interleave.
pub struct SharedTerminal<T> {
    inner: Arc<Mutex<T>>,
}

impl<T> Clone for SharedTerminal<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T: Terminal> SharedTerminal<T> {
    pub fn new(terminal: T) -> Self {
        Self {
            inner: Arc::new(Mutex::new(terminal)),
        }
    }

    /// Exclusive access for the lifetime of the guard. A poisoned lock is
    /// taken over: every render re-establishes cursor and style itself.
    pub fn lock(&self) -> MutexGuard<'_, T> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Draw `canvas` while holding the lock, cursor save/restore included.
    pub fn render_canvas(&self, canvas: &BrailleCanvas) -> io::Result<()> {
        let mut terminal = self.lock();
        canvas.render(&mut *terminal)
    }
}
