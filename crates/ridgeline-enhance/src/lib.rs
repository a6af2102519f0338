//! ridgeline-enhance - Contrast enhancement for fingerprint images
//!
//! This crate provides the enhancement stages of the preprocessing
//! pipeline:
//!
//! - Intensity decomposition into real and imaginary planes
//! - Histogram equalization over the magnitude distribution
//! - A geometry-preserving wrapper combining the two

pub mod decompose;
pub mod equalize;
mod error;

pub use error::{EnhanceError, EnhanceResult};

// Re-export commonly used functions
pub use decompose::decompose_intensity;
pub use equalize::{RemapLut, equalize_gray, equalize_histogram, remap_lut};
