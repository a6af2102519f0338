//! Decomposition - the two-component intensity representation
//!
//! A `Decomposition` holds the "real" and "imaginary" planes produced by
//! the intensity decomposition stage, index-aligned with the source
//! raster. The imaginary plane is zero in the shipped pipeline (the
//! decomposition is a normalized pass-through, not a Fourier transform),
//! but the magnitude computation treats both planes uniformly so the two
//! components stay interchangeable.

use crate::error::{Error, Result};

/// Two-component per-pixel decomposition of a grayscale raster
///
/// Both planes are stored row-major with no padding, one `f64` per source
/// pixel, and the source geometry is carried along so downstream stages
/// can restore the two-dimensional layout.
#[derive(Debug, Clone)]
pub struct Decomposition {
    /// Source width in pixels
    width: u32,
    /// Source height in pixels
    height: u32,
    /// Real component, one value per pixel in [0, 1]
    real: Vec<f64>,
    /// Imaginary component, one value per pixel
    imaginary: Vec<f64>,
}

impl Decomposition {
    /// Create a decomposition from its two component planes.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0, or
    /// [`Error::BufferSize`] if either plane's length differs from
    /// `width * height`.
    pub fn new(width: u32, height: u32, real: Vec<f64>, imaginary: Vec<f64>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        let expected = (width as usize) * (height as usize);
        if real.len() != expected {
            return Err(Error::BufferSize {
                expected,
                actual: real.len(),
            });
        }
        if imaginary.len() != expected {
            return Err(Error::BufferSize {
                expected,
                actual: imaginary.len(),
            });
        }
        Ok(Decomposition {
            width,
            height,
            real,
            imaginary,
        })
    }

    /// Get the source image width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the source image height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get the number of per-pixel samples in each plane.
    #[inline]
    pub fn pixel_count(&self) -> usize {
        self.real.len()
    }

    /// Get the real component plane.
    #[inline]
    pub fn real(&self) -> &[f64] {
        &self.real
    }

    /// Get the imaginary component plane.
    #[inline]
    pub fn imaginary(&self) -> &[f64] {
        &self.imaginary
    }

    /// Compute the per-pixel magnitude, `sqrt(real^2 + imaginary^2)`.
    ///
    /// With the zero imaginary plane of the shipped decomposition this
    /// reduces to the real component, but the computation does not rely
    /// on that.
    pub fn magnitudes(&self) -> Vec<f64> {
        self.real
            .iter()
            .zip(&self.imaginary)
            .map(|(&re, &im)| (re * re + im * im).sqrt())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_validates_plane_lengths() {
        assert!(Decomposition::new(2, 2, vec![0.0; 4], vec![0.0; 4]).is_ok());
        assert!(matches!(
            Decomposition::new(2, 2, vec![0.0; 3], vec![0.0; 4]),
            Err(Error::BufferSize {
                expected: 4,
                actual: 3
            })
        ));
        assert!(matches!(
            Decomposition::new(2, 2, vec![0.0; 4], vec![0.0; 5]),
            Err(Error::BufferSize {
                expected: 4,
                actual: 5
            })
        ));
    }

    #[test]
    fn test_new_rejects_zero_dimensions() {
        assert!(Decomposition::new(0, 2, vec![], vec![]).is_err());
        assert!(Decomposition::new(2, 0, vec![], vec![]).is_err());
    }

    #[test]
    fn test_magnitudes_zero_imaginary() {
        let dec = Decomposition::new(2, 1, vec![0.25, 1.0], vec![0.0, 0.0]).unwrap();
        assert_eq!(dec.magnitudes(), vec![0.25, 1.0]);
    }

    #[test]
    fn test_magnitudes_both_components() {
        // 3-4-5 triangle scaled into [0, 1]
        let dec = Decomposition::new(1, 1, vec![0.3], vec![0.4]).unwrap();
        let mags = dec.magnitudes();
        assert!((mags[0] - 0.5).abs() < 1e-12);
    }
}
