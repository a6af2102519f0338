//! Raster - the grayscale image container
//!
//! `Raster` is the image type every pipeline stage consumes and produces:
//! 8-bit grayscale, one byte per pixel, row-major, top-to-bottom, with
//! `width * height == data.len()` guaranteed at construction.
//!
//! # Ownership model
//!
//! `Raster` uses `Arc` for efficient cloning (shared ownership). To modify
//! pixel data, convert to `RasterMut` via [`Raster::try_into_mut`] or
//! [`Raster::to_mut`], then convert back with `Into<Raster>`. Pipeline
//! stages take `&Raster` and return a fresh `Raster`; only the thinner
//! mutates, and it requires an exclusively-owned `RasterMut`.

use crate::error::{Error, Result};
use std::sync::Arc;

/// Internal raster data
#[derive(Debug)]
struct RasterData {
    /// Width in pixels
    width: u32,
    /// Height in pixels
    height: u32,
    /// One byte per pixel, row-major
    data: Vec<u8>,
}

impl RasterData {
    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        (y as usize) * (self.width as usize) + (x as usize)
    }
}

/// Immutable grayscale raster
///
/// Cheap to clone: the pixel buffer is shared via `Arc`.
///
/// # Examples
///
/// ```
/// use ridgeline_core::Raster;
///
/// let raster = Raster::new(640, 480).unwrap();
/// assert_eq!(raster.width(), 640);
/// assert_eq!(raster.height(), 480);
/// assert_eq!(raster.pixel_count(), 640 * 480);
/// ```
#[derive(Debug, Clone)]
pub struct Raster {
    inner: Arc<RasterData>,
}

impl Raster {
    /// Create a new raster with all pixels set to zero.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        Self::filled(width, height, 0)
    }

    /// Create a new raster with every pixel set to `value`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0.
    pub fn filled(width: u32, height: u32, value: u8) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        let len = (width as usize) * (height as usize);
        Ok(Raster {
            inner: Arc::new(RasterData {
                width,
                height,
                data: vec![value; len],
            }),
        })
    }

    /// Create a raster from an existing pixel buffer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0, or
    /// [`Error::BufferSize`] if `data.len() != width * height`.
    pub fn from_vec(width: u32, height: u32, data: Vec<u8>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        let expected = (width as usize) * (height as usize);
        if data.len() != expected {
            return Err(Error::BufferSize {
                expected,
                actual: data.len(),
            });
        }
        Ok(Raster {
            inner: Arc::new(RasterData {
                width,
                height,
                data,
            }),
        })
    }

    /// Get the image width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    /// Get the image height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    /// Get the total number of pixels (`width * height`).
    #[inline]
    pub fn pixel_count(&self) -> usize {
        self.inner.data.len()
    }

    /// Get the pixel buffer.
    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.inner.data
    }

    /// Get the number of strong references to this raster.
    #[inline]
    pub fn ref_count(&self) -> usize {
        Arc::strong_count(&self.inner)
    }

    /// Get a pixel value at (x, y).
    ///
    /// Returns `None` if coordinates are out of bounds.
    #[inline]
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<u8> {
        if x >= self.inner.width || y >= self.inner.height {
            return None;
        }
        Some(self.inner.data[self.inner.index(x, y)])
    }

    /// Get one row of pixels.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row(&self, y: u32) -> &[u8] {
        let start = (y as usize) * (self.inner.width as usize);
        &self.inner.data[start..start + self.inner.width as usize]
    }

    /// Create a new zero-filled raster with the same dimensions.
    pub fn create_template(&self) -> Self {
        Raster {
            inner: Arc::new(RasterData {
                width: self.inner.width,
                height: self.inner.height,
                data: vec![0u8; self.inner.data.len()],
            }),
        }
    }

    /// Check if two rasters have the same width and height.
    pub fn sizes_equal(&self, other: &Raster) -> bool {
        self.inner.width == other.inner.width && self.inner.height == other.inner.height
    }

    /// Reinterpret the same pixel buffer under a new geometry.
    ///
    /// The pixel count must not change; this is how callers restore the
    /// original two-dimensional layout after the equalizer's single-row
    /// output.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0, or
    /// [`Error::BufferSize`] if `width * height` differs from the current
    /// pixel count.
    pub fn with_shape(&self, width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        let expected = (width as usize) * (height as usize);
        if expected != self.inner.data.len() {
            return Err(Error::BufferSize {
                expected,
                actual: self.inner.data.len(),
            });
        }
        Ok(Raster {
            inner: Arc::new(RasterData {
                width,
                height,
                data: self.inner.data.clone(),
            }),
        })
    }

    /// Create a deep copy of this raster.
    ///
    /// Unlike `clone()` which shares data via `Arc`, this creates a
    /// completely independent copy.
    pub fn deep_clone(&self) -> Self {
        Raster {
            inner: Arc::new(RasterData {
                width: self.inner.width,
                height: self.inner.height,
                data: self.inner.data.clone(),
            }),
        }
    }

    /// Try to get mutable access to the pixel data.
    ///
    /// Succeeds only if there is exactly one reference to the data.
    /// If successful, returns a [`RasterMut`] that allows modification.
    pub fn try_into_mut(self) -> std::result::Result<RasterMut, Self> {
        match Arc::try_unwrap(self.inner) {
            Ok(data) => Ok(RasterMut { inner: data }),
            Err(arc) => Err(Raster { inner: arc }),
        }
    }

    /// Create a mutable copy of this raster.
    ///
    /// Always creates a new copy that can be modified.
    pub fn to_mut(&self) -> RasterMut {
        RasterMut {
            inner: RasterData {
                width: self.inner.width,
                height: self.inner.height,
                data: self.inner.data.clone(),
            },
        }
    }
}

/// Mutable raster
///
/// Allows modification of pixel data. Convert back to an immutable
/// [`Raster`] using `Into<Raster>`. Exclusive access is enforced at
/// compile time; there is no way to mutate a shared buffer.
#[derive(Debug)]
pub struct RasterMut {
    inner: RasterData,
}

impl RasterMut {
    /// Get the image width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    /// Get the image height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    /// Get the total number of pixels.
    #[inline]
    pub fn pixel_count(&self) -> usize {
        self.inner.data.len()
    }

    /// Get the pixel buffer.
    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.inner.data
    }

    /// Get mutable access to the pixel buffer.
    #[inline]
    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.inner.data
    }

    /// Get a pixel value at (x, y).
    ///
    /// Returns `None` if coordinates are out of bounds.
    #[inline]
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<u8> {
        if x >= self.inner.width || y >= self.inner.height {
            return None;
        }
        Some(self.inner.data[self.inner.index(x, y)])
    }

    /// Set a pixel value at (x, y).
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] if coordinates are out of bounds.
    pub fn set_pixel(&mut self, x: u32, y: u32, value: u8) -> Result<()> {
        if x >= self.inner.width || y >= self.inner.height {
            return Err(Error::IndexOutOfBounds {
                index: (y as usize) * (self.inner.width as usize) + (x as usize),
                len: self.inner.data.len(),
            });
        }
        let idx = self.inner.index(x, y);
        self.inner.data[idx] = value;
        Ok(())
    }

    /// Get one row of pixels.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row(&self, y: u32) -> &[u8] {
        let start = (y as usize) * (self.inner.width as usize);
        &self.inner.data[start..start + self.inner.width as usize]
    }

    /// Get mutable access to one row of pixels.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row_mut(&mut self, y: u32) -> &mut [u8] {
        let start = (y as usize) * (self.inner.width as usize);
        let width = self.inner.width as usize;
        &mut self.inner.data[start..start + width]
    }

    /// Set every pixel to `value`.
    pub fn fill(&mut self, value: u8) {
        self.inner.data.fill(value);
    }
}

impl From<RasterMut> for Raster {
    fn from(raster: RasterMut) -> Self {
        Raster {
            inner: Arc::new(raster.inner),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ========== construction tests ==========

    #[test]
    fn test_new_zero_filled() {
        let raster = Raster::new(4, 3).unwrap();
        assert_eq!(raster.width(), 4);
        assert_eq!(raster.height(), 3);
        assert_eq!(raster.pixel_count(), 12);
        assert!(raster.data().iter().all(|&v| v == 0));
    }

    #[test]
    fn test_new_rejects_zero_dimensions() {
        assert!(matches!(
            Raster::new(0, 10),
            Err(Error::InvalidDimension { width: 0, height: 10 })
        ));
        assert!(matches!(
            Raster::new(10, 0),
            Err(Error::InvalidDimension { width: 10, height: 0 })
        ));
    }

    #[test]
    fn test_filled() {
        let raster = Raster::filled(2, 2, 255).unwrap();
        assert_eq!(raster.data(), &[255, 255, 255, 255]);
    }

    #[test]
    fn test_from_vec() {
        let raster = Raster::from_vec(2, 2, vec![1, 2, 3, 4]).unwrap();
        assert_eq!(raster.get_pixel(0, 0), Some(1));
        assert_eq!(raster.get_pixel(1, 0), Some(2));
        assert_eq!(raster.get_pixel(0, 1), Some(3));
        assert_eq!(raster.get_pixel(1, 1), Some(4));
    }

    #[test]
    fn test_from_vec_rejects_bad_length() {
        let err = Raster::from_vec(3, 3, vec![0; 8]).unwrap_err();
        assert!(matches!(
            err,
            Error::BufferSize {
                expected: 9,
                actual: 8
            }
        ));
    }

    // ========== access tests ==========

    #[test]
    fn test_get_pixel_out_of_bounds() {
        let raster = Raster::new(4, 4).unwrap();
        assert_eq!(raster.get_pixel(4, 0), None);
        assert_eq!(raster.get_pixel(0, 4), None);
        assert_eq!(raster.get_pixel(3, 3), Some(0));
    }

    #[test]
    fn test_row() {
        let raster = Raster::from_vec(3, 2, vec![1, 2, 3, 4, 5, 6]).unwrap();
        assert_eq!(raster.row(0), &[1, 2, 3]);
        assert_eq!(raster.row(1), &[4, 5, 6]);
    }

    #[test]
    fn test_set_pixel() {
        let mut raster = Raster::new(3, 3).unwrap().to_mut();
        raster.set_pixel(1, 2, 77).unwrap();
        assert_eq!(raster.get_pixel(1, 2), Some(77));
        assert!(raster.set_pixel(3, 0, 1).is_err());
        assert!(raster.set_pixel(0, 3, 1).is_err());
    }

    #[test]
    fn test_row_mut_and_fill() {
        let mut raster = Raster::new(2, 2).unwrap().to_mut();
        raster.fill(9);
        assert_eq!(raster.data(), &[9, 9, 9, 9]);
        raster.row_mut(1).copy_from_slice(&[5, 6]);
        let raster: Raster = raster.into();
        assert_eq!(raster.data(), &[9, 9, 5, 6]);
    }

    // ========== ownership tests ==========

    #[test]
    fn test_clone_shares_data() {
        let raster = Raster::new(8, 8).unwrap();
        let other = raster.clone();
        assert_eq!(raster.ref_count(), 2);
        assert_eq!(other.ref_count(), 2);
    }

    #[test]
    fn test_try_into_mut_fails_when_shared() {
        let raster = Raster::new(8, 8).unwrap();
        let _other = raster.clone();
        assert!(raster.try_into_mut().is_err());
    }

    #[test]
    fn test_try_into_mut_succeeds_when_unique() {
        let raster = Raster::new(8, 8).unwrap();
        let mut raster = raster.try_into_mut().unwrap();
        raster.set_pixel(0, 0, 42).unwrap();
        let raster: Raster = raster.into();
        assert_eq!(raster.get_pixel(0, 0), Some(42));
    }

    #[test]
    fn test_to_mut_leaves_original_untouched() {
        let raster = Raster::new(2, 2).unwrap();
        let mut copy = raster.to_mut();
        copy.fill(1);
        assert!(raster.data().iter().all(|&v| v == 0));
        let copy: Raster = copy.into();
        assert!(copy.data().iter().all(|&v| v == 1));
    }

    #[test]
    fn test_deep_clone_is_independent() {
        let raster = Raster::new(4, 4).unwrap();
        let copy = raster.deep_clone();
        assert_eq!(raster.ref_count(), 1);
        assert_eq!(copy.ref_count(), 1);
        assert!(raster.sizes_equal(&copy));
    }

    // ========== shape tests ==========

    #[test]
    fn test_with_shape_restores_geometry() {
        let flat = Raster::from_vec(6, 1, vec![1, 2, 3, 4, 5, 6]).unwrap();
        let shaped = flat.with_shape(3, 2).unwrap();
        assert_eq!(shaped.width(), 3);
        assert_eq!(shaped.height(), 2);
        assert_eq!(shaped.row(0), &[1, 2, 3]);
        assert_eq!(shaped.row(1), &[4, 5, 6]);
    }

    #[test]
    fn test_with_shape_rejects_pixel_count_change() {
        let raster = Raster::new(4, 4).unwrap();
        assert!(raster.with_shape(5, 3).is_err());
        assert!(raster.with_shape(0, 16).is_err());
    }

    #[test]
    fn test_create_template() {
        let raster = Raster::filled(3, 5, 200).unwrap();
        let template = raster.create_template();
        assert!(template.sizes_equal(&raster));
        assert!(template.data().iter().all(|&v| v == 0));
    }
}
