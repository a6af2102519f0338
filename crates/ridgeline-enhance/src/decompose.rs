//! Intensity decomposition
//!
//! Converts a grayscale raster into the two-component representation the
//! equalizer consumes. This is deliberately not a Fourier transform: the
//! real plane is the pixel intensity normalized to [0, 1] and the
//! imaginary plane is identically zero. The pipeline contract documents
//! this pass-through behavior; downstream code must not assume any
//! frequency-domain meaning.

use crate::error::EnhanceResult;
use ridgeline_core::{Decomposition, Raster};

/// Decompose a raster into normalized real and zero imaginary planes.
///
/// For every pixel `p`, the real component is `p / 255.0` and the
/// imaginary component is `0.0`, index-aligned with the source buffer.
/// The source geometry is carried on the result.
///
/// # Errors
///
/// Propagates [`ridgeline_core::Error`] from plane validation; with a
/// well-formed raster this cannot fire, since the planes are built to
/// the raster's own pixel count.
pub fn decompose_intensity(raster: &Raster) -> EnhanceResult<Decomposition> {
    let real: Vec<f64> = raster.data().iter().map(|&p| p as f64 / 255.0).collect();
    let imaginary = vec![0.0f64; real.len()];
    Ok(Decomposition::new(
        raster.width(),
        raster.height(),
        real,
        imaginary,
    )?)
}
