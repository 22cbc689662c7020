use bitflags::bitflags;

use super::PixelBuffer;

/// Pixels per Braille cell, horizontally.
pub const CELL_WIDTH: usize = 2;
/// Pixels per Braille cell, vertically.
pub const CELL_HEIGHT: usize = 4;
/// U+2800, the Braille pattern with no dots raised.
pub const BRAILLE_BLANK: u32 = 0x2800;

/// Bit weight of each pixel in a 2x4 block, indexed `[row][column]`.
/// Dots 7 and 8 (bottom row) are 0x40/0x80, not a continuation of the columns.
pub const DOT_WEIGHTS: [[u8; CELL_WIDTH]; CELL_HEIGHT] = [
    [0x01, 0x08],
    [0x02, 0x10],
    [0x04, 0x20],
    [0x40, 0x80],
];

bitflags! {
    /// Raised dots of one Braille cell, numbered the Unicode way:
    ///
    /// ```text
    /// 1 4
    /// 2 5
    /// 3 6
    /// 7 8
    /// ```
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct BrailleDots: u8 {
        const DOT_1 = 0x01;
        const DOT_2 = 0x02;
        const DOT_3 = 0x04;
        const DOT_4 = 0x08;
        const DOT_5 = 0x10;
        const DOT_6 = 0x20;
        const DOT_7 = 0x40;
        const DOT_8 = 0x80;
    }
}

impl BrailleDots {
    /// Read the block of character cell `(row, col)`.
    pub fn from_block(buffer: &PixelBuffer, row: usize, col: usize) -> Self {
        let x = col * CELL_WIDTH;
        let y = row * CELL_HEIGHT;

        let mut bits = 0u8;
        for (dy, weights) in DOT_WEIGHTS.iter().enumerate() {
            for (dx, weight) in weights.iter().enumerate() {
                bits |= weight * buffer.get(x + dx, y + dy);
            }
        }
        Self::from_bits_retain(bits)
    }

    /// `None` for anything outside U+2800..=U+28FF.
    pub fn from_codepoint(codepoint: u32) -> Option<Self> {
        let offset = codepoint.checked_sub(BRAILLE_BLANK)?;
        u8::try_from(offset).ok().map(Self::from_bits_retain)
    }

    pub fn to_codepoint(self) -> u32 {
        BRAILLE_BLANK + u32::from(self.bits())
    }

    pub fn to_char(self) -> char {
        // every offset 0..=255 from U+2800 is a valid scalar value
        char::from_u32(self.to_codepoint()).unwrap_or(' ')
    }

    pub fn is_blank(self) -> bool {
        self.is_empty()
    }
}

/// Codepoint for character cell `(row, col)`. `BRAILLE_BLANK` iff all eight
/// pixels of the block are off.
pub fn encode_cell(buffer: &PixelBuffer, row: usize, col: usize) -> u32 {
    BrailleDots::from_block(buffer, row, col).to_codepoint()
}

/// Inverse of [`encode_cell`]: raise the pixels of cell `(row, col)` that the
/// codepoint has dots for. Non-Braille codepoints leave the block untouched.
pub fn decode_cell(buffer: &mut PixelBuffer, row: usize, col: usize, codepoint: u32) {
    let Some(dots) = BrailleDots::from_codepoint(codepoint) else {
        return;
    };

    let x = col * CELL_WIDTH;
    let y = row * CELL_HEIGHT;
    for (dy, weights) in DOT_WEIGHTS.iter().enumerate() {
        for (dx, &weight) in weights.iter().enumerate() {
            if dots.bits() & weight != 0 {
                buffer.set(x + dx, y + dy);
            }
        }
    }
}
