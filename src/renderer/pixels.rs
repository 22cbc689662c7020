use crate::error::CanvasError;

/// Flat monochrome pixel grid. Every cell holds 0 (off) or 1 (on).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PixelBuffer {
    data: Vec<u8>,
    width: usize,
    height: usize,
}

impl PixelBuffer {
    /// Allocate a zeroed buffer. Allocation failure is returned rather than
    /// aborting the process.
    pub fn new(width: usize, height: usize) -> Result<Self, CanvasError> {
        let pixels = width
            .checked_mul(height)
            .ok_or(CanvasError::TooLarge { width, height })?;

        let mut data = Vec::new();
        data.try_reserve_exact(pixels)
            .map_err(|source| CanvasError::Allocation { pixels, source })?;
        data.resize(pixels, 0);

        Ok(Self {
            data,
            width,
            height,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Turn a pixel on. Out-of-range coordinates are ignored.
    #[inline]
    pub fn set(&mut self, x: usize, y: usize) {
        if x < self.width && y < self.height {
            self.data[y * self.width + x] = 1;
        }
    }

    /// Turn a pixel on without the per-axis bounds check. The caller
    /// guarantees `x < width` and `y < height`. Debug builds assert it;
    /// an index past the end of the buffer panics in any build.
    #[inline]
    pub fn set_unchecked(&mut self, x: usize, y: usize) {
        debug_assert!(x < self.width && y < self.height);
        self.data[y * self.width + x] = 1;
    }

    /// Read a pixel, 0 for anything outside the buffer.
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> u8 {
        if x < self.width && y < self.height {
            self.data[y * self.width + x]
        } else {
            0
        }
    }

    /// Whether `(x, y)` lies inside the buffer. Signed so rasterizers can ask
    /// about points left of or above the origin.
    #[inline]
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height
    }

    /// Set a signed point if it lies inside the buffer.
    #[inline]
    pub(crate) fn plot(&mut self, x: i32, y: i32) {
        if self.contains(x, y) {
            self.set_unchecked(x as usize, y as usize);
        }
    }

    pub fn clear(&mut self) {
        self.data.fill(0);
    }

    /// Number of pixels currently on.
    pub fn lit_count(&self) -> usize {
        self.data.iter().filter(|&&p| p != 0).count()
    }
}
