//! Ridgeline - Fingerprint image preprocessing for Rust
//!
//! Ridgeline turns raw grayscale fingerprint captures into one-pixel
//! ridge skeletons ready for minutiae extraction.
//!
//! # Overview
//!
//! The pipeline runs three stages over an 8-bit grayscale raster:
//!
//! - Histogram equalization to normalize contrast
//! - Threshold binarization to ink-on-white
//! - Iterative thinning down to the ridge skeleton
//!
//! plus PNG/PGM I/O for moving rasters in and out of files.
//!
//! # Example
//!
//! ```
//! use ridgeline::pipeline::{preprocess, PreprocessOptions};
//! use ridgeline::Raster;
//!
//! // An evenly lit capture with a dark blob of ink in the middle.
//! let mut pixels = vec![192u8; 81];
//! for y in 2..7 {
//!     for x in 2..7 {
//!         pixels[y * 9 + x] = 48;
//!     }
//! }
//! let capture = Raster::from_vec(9, 9, pixels).unwrap();
//!
//! let skeleton = preprocess(&capture, &PreprocessOptions::default()).unwrap();
//! assert_eq!(skeleton.width(), 9);
//! // The blob collapses to a single ridge point at its center.
//! assert_eq!(skeleton.get_pixel(4, 4), Some(0));
//! assert_eq!(skeleton.data().iter().filter(|&&p| p == 0).count(), 1);
//! ```

// Re-export core types (primary data structures used everywhere)
pub use ridgeline_core::*;

// Re-export domain crates as modules to avoid name conflicts
pub use ridgeline_enhance as enhance;
pub use ridgeline_io as io;
pub use ridgeline_morph as morph;
pub use ridgeline_pipeline as pipeline;
