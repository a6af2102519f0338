//! Histogram support for grayscale rasters and magnitude sequences
//!
//! The equalization stage and several regression checks share the same
//! 256-bin bucketing: a magnitude in [0, 1] is scaled by 255, truncated
//! toward zero, and clamped into [0, 255]. Byte-valued pixels normalized
//! to [0, 1] land exactly back in their own bucket under IEEE f64
//! arithmetic, so the bucketing is lossless for raster data.

use crate::error::{Error, Result};
use crate::raster::Raster;

/// Number of histogram buckets (one per 8-bit intensity level)
pub const BUCKETS: usize = 256;

/// Map a magnitude to its histogram bucket.
///
/// Scales by 255, truncates toward zero, and clamps into [0, 255].
/// Out-of-range and non-finite magnitudes clamp rather than wrap, so the
/// mapping is total.
#[inline]
pub fn bucket_of(magnitude: f64) -> u8 {
    let scaled = (magnitude * 255.0) as i32;
    scaled.clamp(0, 255) as u8
}

/// 256-bin intensity histogram
///
/// Counts are `u64` so cumulative sums cannot overflow for any
/// representable raster.
#[derive(Debug, Clone)]
pub struct Histogram {
    counts: [u64; BUCKETS],
}

impl Histogram {
    /// Create an empty histogram.
    pub fn new() -> Self {
        Histogram {
            counts: [0; BUCKETS],
        }
    }

    /// Build a histogram from a magnitude sequence.
    ///
    /// Each magnitude is bucketed with [`bucket_of`].
    pub fn from_magnitudes(magnitudes: &[f64]) -> Self {
        let mut hist = Histogram::new();
        for &mag in magnitudes {
            hist.increment(bucket_of(mag));
        }
        hist
    }

    /// Add one sample to `bucket`.
    #[inline]
    pub fn increment(&mut self, bucket: u8) {
        self.counts[bucket as usize] += 1;
    }

    /// Get the bucket counts.
    #[inline]
    pub fn counts(&self) -> &[u64; BUCKETS] {
        &self.counts
    }

    /// Get the count for one bucket.
    #[inline]
    pub fn count(&self, bucket: u8) -> u64 {
        self.counts[bucket as usize]
    }

    /// Get the total number of samples.
    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// Compute the cumulative histogram (prefix sums).
    ///
    /// The result is monotonically non-decreasing and its last entry
    /// equals [`Histogram::total`].
    pub fn cumulative(&self) -> [u64; BUCKETS] {
        let mut cumulative = [0u64; BUCKETS];
        let mut running = 0u64;
        for (bucket, &count) in self.counts.iter().enumerate() {
            running += count;
            cumulative[bucket] = running;
        }
        cumulative
    }
}

impl Default for Histogram {
    fn default() -> Self {
        Self::new()
    }
}

impl Raster {
    /// Get the grayscale histogram of the raster.
    ///
    /// Counts the occurrence of each pixel value.
    ///
    /// # Arguments
    ///
    /// * `factor` - Subsampling factor. Use 1 to count all pixels,
    ///   2 to count every other pixel in each direction, etc.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] if `factor` is 0.
    ///
    /// # Example
    ///
    /// ```
    /// use ridgeline_core::Raster;
    ///
    /// let raster = Raster::new(100, 100).unwrap();
    /// let hist = raster.gray_histogram(1).unwrap();
    /// assert_eq!(hist.count(0), 100 * 100);
    /// ```
    pub fn gray_histogram(&self, factor: u32) -> Result<Histogram> {
        if factor == 0 {
            return Err(Error::InvalidParameter("factor must be >= 1".to_string()));
        }

        let mut hist = Histogram::new();
        let width = self.width();
        let height = self.height();

        let mut y = 0;
        while y < height {
            let line = self.row(y);
            let mut x = 0;
            while x < width {
                hist.increment(line[x as usize]);
                x += factor;
            }
            y += factor;
        }

        Ok(hist)
    }
}
