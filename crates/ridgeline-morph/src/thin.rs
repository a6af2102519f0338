//! Skeleton thinning
//!
//! Iterative two-pass thinning for ink-on-white binary rasters. Each
//! iteration runs two subpasses that peel one layer of boundary pixels
//! from opposite sides, so ridges collapse toward their medial line
//! while staying connected. Deletions within a pass are deferred: every
//! candidate is judged against the raster as it stood when the pass
//! began, then all doomed pixels are cleared at once.

use crate::mask::check_binary;
use crate::{BACKGROUND, FOREGROUND, MorphResult};
use ridgeline_core::{Raster, RasterMut};

/// Neighbor cycle around a pixel: E, NE, N, NW, W, SW, S, SE.
const NEIGHBOR_OFFSETS: [(i32, i32); 8] = [
    (1, 0),
    (1, -1),
    (0, -1),
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Which of the two boundary-peeling subpasses to run.
///
/// The first pass deletes along the east and south boundaries, the
/// second along the west and north. Alternating them keeps the skeleton
/// centered instead of migrating toward one corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThinPass {
    First,
    Second,
}

/// Run a single thinning subpass over a binary raster.
///
/// Returns the number of pixels cleared. This is the raw subiteration:
/// it assumes the raster is already binary and judges every interior
/// pixel once; pixels on the one-pixel border are never candidates, so
/// every neighbor read stays inside the buffer. Callers normally want
/// [`thin_in_place`], which validates, guards tiny rasters, and
/// alternates passes until convergence.
pub fn thin_pass(raster: &mut RasterMut, pass: ThinPass) -> usize {
    let width = raster.width() as i32;
    let height = raster.height() as i32;

    let mut doomed = Vec::new();
    {
        let data = raster.data();
        let is_ink =
            |x: i32, y: i32| data[y as usize * width as usize + x as usize] == FOREGROUND;

        for y in 1..height - 1 {
            for x in 1..width - 1 {
                let index = y as usize * width as usize + x as usize;
                if data[index] != FOREGROUND {
                    continue;
                }
                let mut background = [false; 8];
                for (i, &(dx, dy)) in NEIGHBOR_OFFSETS.iter().enumerate() {
                    background[i] = !is_ink(x + dx, y + dy);
                }
                if deletable(&background, pass) {
                    doomed.push(index);
                }
            }
        }
    }

    let data = raster.data_mut();
    for &index in &doomed {
        data[index] = BACKGROUND;
    }
    doomed.len()
}

/// Decide whether a pixel with the given background flags (in neighbor
/// cycle order) may be deleted by `pass`.
fn deletable(background: &[bool; 8], pass: ThinPass) -> bool {
    let count = background.iter().filter(|&&bg| bg).count();
    if !(2..=6).contains(&count) {
        return false;
    }

    let mut transitions = 0;
    for i in 0..8 {
        if background[i] && !background[(i + 1) % 8] {
            transitions += 1;
        }
    }
    if transitions != 1 {
        return false;
    }

    // Cycle order is E, NE, N, NW, W, SW, S, SE.
    let east = background[0];
    let north = background[2];
    let west = background[4];
    let south = background[6];
    match pass {
        ThinPass::First => (north || east || south) && (east || south || west),
        ThinPass::Second => (north || east || west) && (north || south || west),
    }
}

/// Thin a binary raster to its skeleton, in place.
///
/// Alternates [`ThinPass::First`] and [`ThinPass::Second`] until an
/// iteration deletes nothing, and returns the number of iterations run,
/// counting that final deletion-free sweep. An interior ink pixel (the
/// one-pixel border is never touched) is deleted when, reading its
/// eight neighbors in the cycle E, NE, N, NW, W, SW, S, SE:
///
/// - its background neighbor count is between 2 and 6,
/// - exactly one background-to-ink transition occurs around the cycle,
/// - and the pass-specific directional test holds (first pass: a
///   background pixel among N/E/S and among E/S/W; second pass: among
///   N/E/W and among N/S/W).
///
/// Termination is guaranteed: every iteration before the last clears at
/// least one pixel. A raster narrower or shorter than 3 pixels has no
/// interior to thin and is returned unchanged after a single
/// deletion-free iteration.
///
/// # Errors
///
/// Returns [`crate::MorphError::NotBinary`] when the raster holds any
/// value other than 0 or 255; the raster is not modified in that case.
pub fn thin_in_place(raster: &mut RasterMut) -> MorphResult<u32> {
    check_binary(raster.data())?;
    if raster.width() < 3 || raster.height() < 3 {
        return Ok(1);
    }

    let mut iterations = 0u32;
    loop {
        iterations += 1;
        let deleted = thin_pass(raster, ThinPass::First) + thin_pass(raster, ThinPass::Second);
        if deleted == 0 {
            return Ok(iterations);
        }
    }
}

/// Thin a binary raster to its skeleton, returning a new raster.
///
/// Convenience wrapper over [`thin_in_place`] for callers that do not
/// hold a mutable raster.
///
/// # Errors
///
/// Returns [`crate::MorphError::NotBinary`] for non-binary input.
pub fn thin_binary(raster: &Raster) -> MorphResult<Raster> {
    let mut out = raster.to_mut();
    thin_in_place(&mut out)?;
    Ok(out.into())
}
