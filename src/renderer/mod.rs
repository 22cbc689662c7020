mod canvas;
pub mod glyph;
mod pixels;
pub mod raster;

pub use canvas::{BrailleCanvas, GlyphCell, GlyphSink};
pub use glyph::{BrailleDots, BRAILLE_BLANK};
pub use pixels::PixelBuffer;
