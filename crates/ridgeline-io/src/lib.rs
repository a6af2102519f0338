//! ridgeline-io - Image I/O for Ridgeline
//!
//! This crate moves rasters in and out of image files:
//!
//! - PNG (any color type in, 8-bit grayscale out)
//! - Binary PGM (P5)
//! - Format detection from magic numbers
//!
//! Formats are feature-gated; `pnm` and `png-format` are on by
//! default. Decoding always lands in an 8-bit grayscale [`Raster`],
//! which is the only pixel representation the rest of the workspace
//! handles.

mod error;
mod format;
#[cfg(feature = "png-format")]
pub mod png;
#[cfg(feature = "pnm")]
pub mod pnm;

pub use error::{IoError, IoResult};
pub use format::{ImageFormat, detect_format, detect_format_from_bytes};

use ridgeline_core::Raster;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

/// Read an image from a file path, detecting its format.
///
/// # Errors
///
/// Fails with [`IoError::UnsupportedFormat`] when the file is not in a
/// format this build supports, and with the decoder's error when the
/// content is damaged.
pub fn read_image<P: AsRef<Path>>(path: P) -> IoResult<Raster> {
    let format = detect_format(&path)?;
    let reader = BufReader::new(File::open(&path)?);
    match format {
        #[cfg(feature = "png-format")]
        ImageFormat::Png => png::read_png(reader),
        #[cfg(feature = "pnm")]
        ImageFormat::Pnm => pnm::read_pgm(reader),
        other => Err(IoError::UnsupportedFormat(format!(
            "no reader for {:?} in this build",
            other
        ))),
    }
}

/// Write a raster to a file path in the given format.
pub fn write_image<P: AsRef<Path>>(
    raster: &Raster,
    path: P,
    format: ImageFormat,
) -> IoResult<()> {
    let mut writer = BufWriter::new(File::create(&path)?);
    match format {
        #[cfg(feature = "png-format")]
        ImageFormat::Png => png::write_png(raster, &mut writer)?,
        #[cfg(feature = "pnm")]
        ImageFormat::Pnm => pnm::write_pgm(raster, &mut writer)?,
        other => {
            return Err(IoError::UnsupportedFormat(format!(
                "no writer for {:?} in this build",
                other
            )));
        }
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_file_roundtrip() {
        let dir = std::env::temp_dir();
        let raster = Raster::from_vec(4, 2, vec![0, 30, 60, 90, 120, 150, 180, 210]).unwrap();

        for (format, name) in [
            (ImageFormat::Png, "ridgeline_io_roundtrip.png"),
            (ImageFormat::Pnm, "ridgeline_io_roundtrip.pgm"),
        ] {
            let path = dir.join(name);
            write_image(&raster, &path, format).unwrap();
            assert_eq!(detect_format(&path).unwrap(), format);
            let restored = read_image(&path).unwrap();
            assert_eq!(restored.data(), raster.data(), "{:?}", format);
            let _ = std::fs::remove_file(&path);
        }
    }

    #[test]
    fn test_read_image_missing_file() {
        let missing = std::env::temp_dir().join("ridgeline_io_does_not_exist.png");
        assert!(matches!(read_image(&missing), Err(IoError::Io(_))));
    }
}
