//! Synthetic test images
//!
//! Deterministic fixtures for unit and regression tests, replacing
//! checked-in sample files. Binary fixtures use the workspace ink
//! convention: 0 is foreground, 255 is background.
//!
//! All generators panic on zero dimensions; fixtures are always built
//! from literal sizes in test code.

use rand::rngs::StdRng;
use rand::{RngExt, SeedableRng};
use ridgeline_core::Raster;

/// Diagonal ramp covering the full gray range from the top-left (0)
/// to the bottom-right corner (255).
pub fn gradient(width: u32, height: u32) -> Raster {
    let span = (width + height).saturating_sub(2).max(1);
    let mut pixels = Vec::with_capacity(width as usize * height as usize);
    for y in 0..height {
        for x in 0..width {
            pixels.push(((x + y) * 255 / span) as u8);
        }
    }
    Raster::from_vec(width, height, pixels).expect("valid fixture dimensions")
}

/// Background canvas with a solid ink rectangle.
///
/// The rectangle is clipped to the canvas.
pub fn ink_rect(
    width: u32,
    height: u32,
    left: u32,
    top: u32,
    rect_width: u32,
    rect_height: u32,
) -> Raster {
    let mut out = Raster::filled(width, height, 255)
        .expect("valid fixture dimensions")
        .to_mut();
    for y in top..(top.saturating_add(rect_height)).min(height) {
        for x in left..(left.saturating_add(rect_width)).min(width) {
            let _ = out.set_pixel(x, y, 0);
        }
    }
    out.into()
}

/// Background canvas with a filled ink disk.
pub fn filled_disk(width: u32, height: u32, cx: i64, cy: i64, radius: i64) -> Raster {
    let mut out = Raster::filled(width, height, 255)
        .expect("valid fixture dimensions")
        .to_mut();
    for y in 0..height {
        for x in 0..width {
            let dx = x as i64 - cx;
            let dy = y as i64 - cy;
            if dx * dx + dy * dy <= radius * radius {
                let _ = out.set_pixel(x, y, 0);
            }
        }
    }
    out.into()
}

/// Vertical ridge pattern: dark ridges one period wide separated by
/// two-period valleys, a crude stand-in for inked fingerprint ridges.
///
/// The pattern is inset from the canvas edge by a one-period light
/// margin, the way a capture leaves an empty rim around the print.
pub fn ridge_stripes(width: u32, height: u32, period: u32) -> Raster {
    let period = period.max(1);
    let margin = period;
    let mut pixels = Vec::with_capacity(width as usize * height as usize);
    for y in 0..height {
        for x in 0..width {
            let inside = x >= margin
                && x < width.saturating_sub(margin)
                && y >= margin
                && y < height.saturating_sub(margin);
            let value = if inside && ((x - margin) / period) % 3 == 0 {
                64
            } else {
                192
            };
            pixels.push(value);
        }
    }
    Raster::from_vec(width, height, pixels).expect("valid fixture dimensions")
}

/// Seeded uniform gray noise.
pub fn noise(width: u32, height: u32, seed: u64) -> Raster {
    let mut rng = StdRng::seed_from_u64(seed);
    let pixels: Vec<u8> = (0..width as usize * height as usize)
        .map(|_| rng.random())
        .collect();
    Raster::from_vec(width, height, pixels).expect("valid fixture dimensions")
}

/// Seeded binary noise with roughly `ink_fraction` of pixels as ink.
pub fn binary_noise(width: u32, height: u32, ink_fraction: f64, seed: u64) -> Raster {
    let mut rng = StdRng::seed_from_u64(seed);
    let pixels: Vec<u8> = (0..width as usize * height as usize)
        .map(|_| if rng.random_bool(ink_fraction) { 0 } else { 255 })
        .collect();
    Raster::from_vec(width, height, pixels).expect("valid fixture dimensions")
}
