//! Braille canvas: 2x4 pixel blocks packed into Unicode Braille glyphs for
//! drawing lines, rectangles and circles in a text terminal.

pub mod cli;
pub mod demo;
pub mod error;
pub mod renderer;
pub mod terminal;
pub mod theme;

pub use error::CanvasError;
pub use renderer::{BrailleCanvas, GlyphCell, GlyphSink, PixelBuffer};
pub use terminal::{AnsiTerminal, Background, Foreground, SharedTerminal, Terminal};
pub use theme::Theme;
