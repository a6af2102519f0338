//! Error types for ridgeline-core
//!
//! One error enum covers everything the core crate can reject, so
//! downstream crates fold it into their own error types with a single
//! `#[from]` variant.

use thiserror::Error;

/// Ridgeline core error type
#[derive(Error, Debug)]
pub enum Error {
    /// A raster dimension is zero or otherwise unusable
    #[error("bad raster dimensions {width}x{height}")]
    InvalidDimension { width: u32, height: u32 },

    /// Pixel buffer length does not match the dimensions
    #[error("pixel buffer holds {actual} bytes where {expected} are needed")]
    BufferSize { expected: usize, actual: usize },

    /// Access past the end of a buffer
    #[error("index {index} past the end of a buffer of {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    /// A parameter is outside its accepted range
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Result type alias for core operations
pub type Result<T> = std::result::Result<T, Error>;
