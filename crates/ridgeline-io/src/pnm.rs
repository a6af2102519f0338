//! PNM (Portable Any Map) format support
//!
//! Reads and writes binary PGM (P5), the netpbm grayscale format.
//! The other netpbm variants (P1/P2/P3/P4/P6) are detected by
//! [`crate::detect_format`] but rejected here, since rasters carry
//! 8-bit grayscale only.

use crate::{IoError, IoResult};
use ridgeline_core::Raster;
use std::io::{BufRead, Write};

/// Read the next header token, skipping whitespace and `#` comments.
fn next_token<R: BufRead>(reader: &mut R) -> IoResult<String> {
    let mut token = Vec::new();
    let mut byte = [0u8; 1];
    loop {
        if reader.read(&mut byte)? == 0 {
            break;
        }
        let b = byte[0];
        if b == b'#' && token.is_empty() {
            // Comment runs to end of line.
            while reader.read(&mut byte)? == 1 && byte[0] != b'\n' {}
            continue;
        }
        if b.is_ascii_whitespace() {
            if token.is_empty() {
                continue;
            }
            // The delimiter after the token is consumed, which is what
            // the raster data following the maxval token relies on.
            break;
        }
        token.push(b);
    }
    if token.is_empty() {
        return Err(IoError::InvalidData(
            "unexpected end of PGM header".to_string(),
        ));
    }
    String::from_utf8(token)
        .map_err(|_| IoError::InvalidData("non-ASCII bytes in PGM header".to_string()))
}

fn next_number<R: BufRead>(reader: &mut R, what: &str) -> IoResult<u32> {
    let token = next_token(reader)?;
    token
        .parse()
        .map_err(|_| IoError::InvalidData(format!("invalid PGM {}: {:?}", what, token)))
}

/// Read a binary PGM (P5) image from a reader.
///
/// Sources with a maxval below 255 are rescaled to the full byte
/// range; maxvals above 255 (16-bit PGM) are rejected.
pub fn read_pgm<R: BufRead>(mut reader: R) -> IoResult<Raster> {
    let magic = next_token(&mut reader)?;
    if magic != "P5" {
        return Err(IoError::UnsupportedFormat(format!(
            "unsupported PNM variant: {:?} (only binary PGM is supported)",
            magic
        )));
    }

    let width = next_number(&mut reader, "width")?;
    let height = next_number(&mut reader, "height")?;
    let maxval = next_number(&mut reader, "maxval")?;
    if maxval == 0 {
        return Err(IoError::InvalidData("PGM maxval must be nonzero".to_string()));
    }
    if maxval > 255 {
        return Err(IoError::UnsupportedFormat(format!(
            "16-bit PGM (maxval {}) is not supported",
            maxval
        )));
    }

    let count = width as usize * height as usize;
    let mut pixels = vec![0u8; count];
    reader
        .read_exact(&mut pixels)
        .map_err(|e| IoError::InvalidData(format!("truncated PGM pixel data: {}", e)))?;

    if maxval != 255 {
        for p in pixels.iter_mut() {
            *p = ((*p as u32 * 255 + maxval / 2) / maxval) as u8;
        }
    }

    Ok(Raster::from_vec(width, height, pixels)?)
}

/// Write a raster as binary PGM (P5) with maxval 255.
pub fn write_pgm<W: Write>(raster: &Raster, mut writer: W) -> IoResult<()> {
    write!(writer, "P5\n{} {}\n255\n", raster.width(), raster.height())?;
    writer.write_all(raster.data())?;
    Ok(())
}
