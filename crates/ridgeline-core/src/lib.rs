//! Ridgeline Core - Basic data structures for fingerprint preprocessing
//!
//! This crate provides the fundamental data structures used throughout
//! the Ridgeline fingerprint preprocessing library:
//!
//! - [`Raster`] / [`RasterMut`] - The grayscale image container
//!   (immutable / mutable)
//! - [`Decomposition`] - Two-component per-pixel intensity planes
//! - [`Histogram`] - 256-bin intensity histogram with cumulative sums
//!
//! The pipeline stages themselves live in the `ridgeline-enhance`,
//! `ridgeline-morph`, and `ridgeline-pipeline` crates; file decoding and
//! encoding live in `ridgeline-io`.

pub mod decompose;
pub mod error;
pub mod histogram;
pub mod raster;

pub use decompose::Decomposition;
pub use error::{Error, Result};
pub use histogram::{BUCKETS, Histogram, bucket_of};
pub use raster::{Raster, RasterMut};
