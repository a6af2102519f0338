//! Pipeline driver
//!
//! Chains the enhancement and morphology stages into the one call
//! hosting applications use: grayscale in, skeleton out.

use crate::error::{PipelineError, PipelineResult};
use crate::extract::MinutiaeExtractor;
use ridgeline_core::Raster;
use ridgeline_enhance::equalize_gray;
use ridgeline_morph::{binarize, thin_binary};

/// Knobs for the preprocessing chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PreprocessOptions {
    /// Binarization threshold; gray levels below it become ink.
    pub threshold: u8,
}

impl Default for PreprocessOptions {
    fn default() -> Self {
        Self { threshold: 128 }
    }
}

/// Run the preprocessing chain on a grayscale raster.
///
/// Equalizes contrast over the full image, binarizes at
/// `options.threshold`, and thins the ink down to a one-pixel-wide
/// skeleton. The output keeps the input geometry and holds only pure
/// ink (0) and background (255) levels.
///
/// # Example
///
/// ```
/// use ridgeline_core::Raster;
/// use ridgeline_pipeline::{preprocess, PreprocessOptions};
///
/// let raster = Raster::filled(8, 8, 100).unwrap();
/// let skeleton = preprocess(&raster, &PreprocessOptions::default()).unwrap();
/// // A featureless input equalizes to white and yields a blank skeleton.
/// assert!(skeleton.data().iter().all(|&p| p == 255));
/// ```
pub fn preprocess(raster: &Raster, options: &PreprocessOptions) -> PipelineResult<Raster> {
    let equalized = equalize_gray(raster)?;
    let binary = binarize(&equalized, options.threshold)?;
    Ok(thin_binary(&binary)?)
}

/// Preprocess a raster and hand the skeleton to a minutiae extractor.
///
/// The extractor sees the finished skeleton, never the raw input, and
/// its annotated raster is returned as the pipeline result.
///
/// # Errors
///
/// Propagates preprocessing errors, and wraps extractor failures in
/// [`PipelineError::Extraction`].
pub fn preprocess_and_extract<E: MinutiaeExtractor>(
    raster: &Raster,
    options: &PreprocessOptions,
    extractor: &E,
) -> PipelineResult<Raster> {
    let skeleton = preprocess(raster, options)?;
    extractor
        .extract(&skeleton)
        .map_err(|e| PipelineError::Extraction(e.to_string()))
}
