//! Error types for ridgeline-enhance

use thiserror::Error;

/// Errors that can occur during decomposition and equalization
#[derive(Debug, Error)]
pub enum EnhanceError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] ridgeline_core::Error),

    /// The equalized sequence cannot be packaged as a single-row raster
    #[error("equalized output of {pixels} pixels does not fit a single-row raster")]
    RowTooWide { pixels: usize },
}

/// Result type for enhancement operations
pub type EnhanceResult<T> = Result<T, EnhanceError>;
