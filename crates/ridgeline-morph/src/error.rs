//! Error types for morphological operations

use thiserror::Error;

/// Errors from binarization and thinning
#[derive(Error, Debug)]
pub enum MorphError {
    /// Error from core operations
    #[error("core error: {0}")]
    Core(#[from] ridgeline_core::Error),

    /// A raster handed to a binary operation holds a gray level other
    /// than pure ink or pure background
    #[error("pixel {index} has value {value}, expected 0 or 255")]
    NotBinary { index: usize, value: u8 },
}

/// Result type for morphological operations
pub type MorphResult<T> = Result<T, MorphError>;
