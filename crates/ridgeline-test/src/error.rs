//! Errors raised by the regression harness

use thiserror::Error;

/// Harness failures, as opposed to failed checks.
///
/// A failed comparison is recorded in `RegParams` and reported at
/// cleanup; these errors mean the harness itself could not run.
#[derive(Debug, Error)]
pub enum TestError {
    /// An image could not be written into the regout directory
    #[error("could not write image '{path}': {message}")]
    ImageWrite { path: String, message: String },

    /// Filesystem trouble while reading or installing golden files
    #[error("I/O failure: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias for harness operations
pub type TestResult<T> = Result<T, TestError>;
