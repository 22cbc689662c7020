use std::collections::TryReserveError;

use thiserror::Error;

/// Errors raised while creating a canvas. Drawing never fails: coordinates
/// outside the canvas are clipped.
#[derive(Debug, Error)]
pub enum CanvasError {
    #[error("canvas of {width}x{height} pixels does not fit in memory")]
    TooLarge { width: usize, height: usize },

    #[error("failed to allocate {pixels} pixels for canvas")]
    Allocation {
        pixels: usize,
        #[source]
        source: TryReserveError,
    },
}
