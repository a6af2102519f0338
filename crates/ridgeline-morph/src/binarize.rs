//! Threshold binarization
//!
//! Splits a grayscale raster into pure ink and pure background, the
//! representation every other operation in this crate works on.

use crate::{BACKGROUND, FOREGROUND, MorphResult};
use ridgeline_core::Raster;

/// Binarize a grayscale raster with a fixed threshold.
///
/// Pixels strictly below `threshold` become ink ([`FOREGROUND`], 0);
/// pixels at or above it become [`BACKGROUND`] (255). A threshold of 0
/// therefore produces an all-background raster, and a threshold of 255
/// keeps only pure-white pixels out of the ink.
///
/// # Example
///
/// ```
/// use ridgeline_core::Raster;
/// use ridgeline_morph::binarize;
///
/// let raster = Raster::from_vec(3, 1, vec![10, 128, 200]).unwrap();
/// let binary = binarize(&raster, 128).unwrap();
/// assert_eq!(binary.data(), &[0, 255, 255]);
/// ```
pub fn binarize(raster: &Raster, threshold: u8) -> MorphResult<Raster> {
    let pixels: Vec<u8> = raster
        .data()
        .iter()
        .map(|&p| if p < threshold { FOREGROUND } else { BACKGROUND })
        .collect();
    Ok(Raster::from_vec(raster.width(), raster.height(), pixels)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mask::binary_mask;

    #[test]
    fn test_binarize_splits_at_threshold() {
        let raster = Raster::from_vec(4, 1, vec![0, 127, 128, 255]).unwrap();
        let binary = binarize(&raster, 128).unwrap();
        assert_eq!(binary.data(), &[FOREGROUND, FOREGROUND, BACKGROUND, BACKGROUND]);
    }

    #[test]
    fn test_binarize_threshold_zero_is_all_background() {
        let raster = Raster::from_vec(2, 2, vec![0, 1, 128, 255]).unwrap();
        let binary = binarize(&raster, 0).unwrap();
        assert!(binary.data().iter().all(|&p| p == BACKGROUND));
    }

    #[test]
    fn test_binarize_threshold_max_keeps_only_white_out() {
        let raster = Raster::from_vec(3, 1, vec![0, 254, 255]).unwrap();
        let binary = binarize(&raster, 255).unwrap();
        assert_eq!(binary.data(), &[FOREGROUND, FOREGROUND, BACKGROUND]);
    }

    #[test]
    fn test_binarize_uniform_midgray_flips_across_threshold() {
        let raster = Raster::filled(4, 4, 128).unwrap();
        let at = binarize(&raster, 128).unwrap();
        assert!(at.data().iter().all(|&p| p == BACKGROUND));
        let above = binarize(&raster, 129).unwrap();
        assert!(above.data().iter().all(|&p| p == FOREGROUND));
    }

    #[test]
    fn test_binarize_output_passes_binary_check() {
        let pixels: Vec<u8> = (0..=255u8).collect();
        let raster = Raster::from_vec(16, 16, pixels).unwrap();
        let binary = binarize(&raster, 77).unwrap();
        assert!(binary_mask(&binary).is_ok());
    }

    #[test]
    fn test_binarize_preserves_geometry() {
        let raster = Raster::filled(5, 3, 60).unwrap();
        let binary = binarize(&raster, 128).unwrap();
        assert_eq!(binary.width(), 5);
        assert_eq!(binary.height(), 3);
    }
}
