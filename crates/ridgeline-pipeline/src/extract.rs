//! Minutiae extractor boundary

use ridgeline_core::Raster;

/// External minutiae detection plugged in behind the preprocessing
/// chain.
///
/// Implementations receive the thinned skeleton and return an annotated
/// raster of the same scene, for example with ridge endings and
/// bifurcations marked. Nothing else crosses this boundary: the driver
/// folds extractor failures into
/// [`PipelineError::Extraction`](crate::PipelineError::Extraction) and
/// never hands an extractor anything but the finished skeleton.
pub trait MinutiaeExtractor {
    /// Error type reported by this extractor.
    type Error: std::error::Error;

    /// Scan a one-pixel-wide skeleton for minutiae.
    fn extract(&self, skeleton: &Raster) -> Result<Raster, Self::Error>;
}
