//! Error types for the preprocessing pipeline

use thiserror::Error;

/// Errors from running the preprocessing chain
#[derive(Error, Debug)]
pub enum PipelineError {
    /// Error from core operations
    #[error("core error: {0}")]
    Core(#[from] ridgeline_core::Error),

    /// The enhancement stage failed
    #[error("enhancement failed: {0}")]
    Enhance(#[from] ridgeline_enhance::EnhanceError),

    /// The binarization or thinning stage failed
    #[error("morphology failed: {0}")]
    Morph(#[from] ridgeline_morph::MorphError),

    /// The plugged-in minutiae extractor reported a failure
    #[error("minutiae extraction failed: {0}")]
    Extraction(String),
}

/// Result type for pipeline operations
pub type PipelineResult<T> = Result<T, PipelineError>;
