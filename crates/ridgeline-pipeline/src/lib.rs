//! ridgeline-pipeline - Fingerprint preprocessing driver
//!
//! This crate chains the Ridgeline stages into a single entry point:
//!
//! - Histogram equalization (`ridgeline-enhance`)
//! - Threshold binarization and skeleton thinning (`ridgeline-morph`)
//! - A pluggable minutiae-extraction boundary for host applications
//!
//! The driver takes an 8-bit grayscale raster and produces a skeleton
//! raster of the same geometry; an optional [`MinutiaeExtractor`] then
//! turns the skeleton into an annotated raster.

pub mod driver;
mod error;
pub mod extract;

pub use error::{PipelineError, PipelineResult};

// Re-export commonly used items
pub use driver::{PreprocessOptions, preprocess, preprocess_and_extract};
pub use extract::MinutiaeExtractor;
