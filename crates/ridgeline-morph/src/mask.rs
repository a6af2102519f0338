//! Foreground mask extraction
//!
//! Helpers for reading a binary raster as a boolean ink mask, with the
//! validation every binary consumer in this crate relies on.

use crate::{BACKGROUND, FOREGROUND, MorphError, MorphResult};
use ridgeline_core::Raster;

/// Extract the ink mask of a binary raster.
///
/// Index `i` of the mask is `true` when pixel `i` is ink. The raster is
/// validated first, so the mask is trustworthy for minutiae scanning.
///
/// # Errors
///
/// Returns [`MorphError::NotBinary`] naming the first offending pixel
/// when the raster holds any value other than 0 or 255.
pub fn binary_mask(raster: &Raster) -> MorphResult<Vec<bool>> {
    check_binary(raster.data())?;
    Ok(raster.data().iter().map(|&p| p == FOREGROUND).collect())
}

/// Count the ink pixels of a binary raster.
///
/// # Errors
///
/// Returns [`MorphError::NotBinary`] for non-binary input.
pub fn foreground_count(raster: &Raster) -> MorphResult<usize> {
    Ok(binary_mask(raster)?.iter().filter(|&&ink| ink).count())
}

/// Reject rasters holding any gray level other than pure ink or pure
/// background.
pub(crate) fn check_binary(data: &[u8]) -> MorphResult<()> {
    for (index, &value) in data.iter().enumerate() {
        if value != FOREGROUND && value != BACKGROUND {
            return Err(MorphError::NotBinary { index, value });
        }
    }
    Ok(())
}
