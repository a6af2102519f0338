//! ridgeline-morph - Binarization and skeleton thinning
//!
//! This crate provides the binary stages of the preprocessing pipeline:
//!
//! - Threshold binarization of grayscale rasters
//! - Iterative two-pass thinning down to one-pixel skeletons
//! - Foreground mask extraction with binary validation
//!
//! Binary rasters use the ink-on-white convention: 0 is foreground
//! (ink) and 255 is background. Operations that require binary input
//! reject anything else with [`MorphError::NotBinary`].

pub mod binarize;
mod error;
pub mod mask;
pub mod thin;

pub use error::{MorphError, MorphResult};

/// Gray level of an ink (foreground) pixel in a binary raster.
pub const FOREGROUND: u8 = 0;

/// Gray level of a background pixel in a binary raster.
pub const BACKGROUND: u8 = 255;

// Re-export commonly used functions
pub use binarize::binarize;
pub use mask::{binary_mask, foreground_count};
pub use thin::{ThinPass, thin_binary, thin_in_place, thin_pass};
