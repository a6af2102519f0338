//! Histogram equalization
//!
//! Builds a 256-entry remap table from the cumulative magnitude
//! distribution and applies it to every pixel. The output of
//! [`equalize_histogram`] is a single-row raster holding the remapped
//! pixels in source order; callers that want the original geometry back
//! use [`equalize_gray`] or reshape the row themselves.

use crate::decompose::decompose_intensity;
use crate::error::{EnhanceError, EnhanceResult};
use ridgeline_core::{Decomposition, Histogram, Raster, bucket_of};

/// Lookup table mapping a histogram bucket to its equalized gray level.
pub type RemapLut = [u8; 256];

/// Build the equalization lookup table for a magnitude histogram.
///
/// Entry `b` is `255 * cumulative(b) / total`, rounded half up and
/// clamped to the byte range. The table is nondecreasing in `b`, and the
/// highest occupied bucket always maps to 255. An empty histogram maps
/// every bucket to zero.
pub fn remap_lut(histogram: &Histogram) -> RemapLut {
    let total = histogram.total();
    let mut lut = [0u8; 256];
    let mut cumulative = 0u64;
    for (bucket, entry) in lut.iter_mut().enumerate() {
        cumulative += histogram.count(bucket as u8);
        let target = (255.0 * cumulative as f64 / total as f64 + 0.5) as i32;
        *entry = target.clamp(0, 255) as u8;
    }
    lut
}

/// Equalize the magnitude plane of a decomposition.
///
/// Computes per-pixel magnitudes, histograms them, and remaps each pixel
/// through the table from [`remap_lut`]. The result is a raster of
/// height 1 whose width is the source pixel count, preserving source
/// pixel order.
///
/// # Errors
///
/// Returns [`EnhanceError::RowTooWide`] when the pixel count does not
/// fit the width field of a raster.
pub fn equalize_histogram(decomposition: &Decomposition) -> EnhanceResult<Raster> {
    let magnitudes = decomposition.magnitudes();
    let histogram = Histogram::from_magnitudes(&magnitudes);
    let lut = remap_lut(&histogram);

    let pixels: Vec<u8> = magnitudes
        .iter()
        .map(|&m| lut[bucket_of(m) as usize])
        .collect();
    let width = u32::try_from(pixels.len())
        .map_err(|_| EnhanceError::RowTooWide { pixels: pixels.len() })?;
    Ok(Raster::from_vec(width, 1, pixels)?)
}

/// Equalize a grayscale raster, preserving its geometry.
///
/// Runs [`decompose_intensity`] and [`equalize_histogram`], then folds
/// the single-row result back into the source shape.
///
/// # Example
///
/// ```
/// use ridgeline_core::Raster;
/// use ridgeline_enhance::equalize_gray;
///
/// let flat = Raster::filled(4, 4, 128).unwrap();
/// let out = equalize_gray(&flat).unwrap();
/// assert_eq!(out.width(), 4);
/// assert!(out.data().iter().all(|&p| p == 255));
/// ```
pub fn equalize_gray(raster: &Raster) -> EnhanceResult<Raster> {
    let decomposition = decompose_intensity(raster)?;
    let row = equalize_histogram(&decomposition)?;
    Ok(row.with_shape(raster.width(), raster.height())?)
}
