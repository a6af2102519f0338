//! Image format detection
//!
//! Sniffs the format from the first bytes of a file rather than its
//! extension, so mislabeled captures still land in the right decoder.

use crate::{IoError, IoResult};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Eight-byte signature opening every PNG file.
const PNG_SIGNATURE: [u8; 8] = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];

/// Image file format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ImageFormat {
    /// Unknown format
    #[default]
    Unknown,
    /// PNG format
    Png,
    /// PNM format (PGM for grayscale rasters)
    Pnm,
}

impl ImageFormat {
    /// File extension written for this format.
    pub fn extension(self) -> &'static str {
        match self {
            Self::Unknown => "dat",
            Self::Png => "png",
            Self::Pnm => "pgm",
        }
    }
}

/// Detect the format of an image file by reading its header.
pub fn detect_format<P: AsRef<Path>>(path: P) -> IoResult<ImageFormat> {
    let mut header = [0u8; 8];
    let filled = File::open(path)?.read(&mut header)?;
    detect_format_from_bytes(&header[..filled])
}

/// Detect an image format from its leading bytes.
///
/// Two bytes are enough for the netpbm family; fewer than two is
/// reported as [`IoError::InvalidData`].
pub fn detect_format_from_bytes(data: &[u8]) -> IoResult<ImageFormat> {
    if data.starts_with(&PNG_SIGNATURE) {
        return Ok(ImageFormat::Png);
    }
    match data {
        [] | [_] => Err(IoError::InvalidData(
            "not enough data to detect format".to_string(),
        )),
        // Any netpbm variant counts as PNM here; the reader decides
        // which variants it can actually decode.
        [b'P', variant, ..] if (b'1'..=b'6').contains(variant) => Ok(ImageFormat::Pnm),
        _ => Err(IoError::UnsupportedFormat(
            "unknown image format".to_string(),
        )),
    }
}
