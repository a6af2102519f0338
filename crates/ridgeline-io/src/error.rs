//! I/O error types
//!
//! All readers and writers surface one `IoError` type. Format modules
//! map their underlying library errors into it, so a caller moving
//! rasters in and out of files handles a single error enum.

use thiserror::Error;

/// Error raised while moving images in and out of files.
#[derive(Error, Debug)]
pub enum IoError {
    /// The format is unknown, or support for it is compiled out
    #[error("unsupported format: {0}")]
    UnsupportedFormat(String),

    /// The file content does not hold together as image data
    #[error("invalid image data: {0}")]
    InvalidData(String),

    /// A format library failed while decoding
    #[error("decode error: {0}")]
    DecodeError(String),

    /// A format library failed while encoding
    #[error("encode error: {0}")]
    EncodeError(String),

    /// Error from the filesystem or the underlying stream
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A decoded image failed raster validation
    #[error("core error: {0}")]
    Core(#[from] ridgeline_core::Error),
}

/// Alias for results carrying [`IoError`].
pub type IoResult<T> = Result<T, IoError>;
