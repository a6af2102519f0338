//! ridgeline-test - Regression harness for Ridgeline
//!
//! Drives golden-file regression tests in one of three modes, picked
//! by the `REGTEST_MODE` environment variable:
//!
//! - `generate` writes fresh golden files
//! - `display` runs the checks without any golden comparison
//! - anything else compares results against the checked-in goldens
//!
//! [`images`] supplies deterministic synthetic fixtures, so no sample
//! captures need to live in the repository.
//!
//! # Usage
//!
//! ```ignore
//! use ridgeline_test::{RegParams, images};
//!
//! let mut rp = RegParams::new("thin1");
//! let disk = images::filled_disk(13, 13, 6, 6, 5);
//! rp.compare_values(5.0, iterations as f64, 0.0);
//! assert!(rp.cleanup());
//! ```

mod error;
pub mod images;
mod params;

pub use error::{TestError, TestResult};
pub use params::{RegParams, RegTestMode};

/// Path of `tail` under the workspace root.
fn workspace_path(tail: &str) -> String {
    // This crate sits at crates/ridgeline-test inside the workspace.
    format!("{}/../../{tail}", env!("CARGO_MANIFEST_DIR"))
}

/// Directory holding the golden files.
pub fn golden_dir() -> String {
    workspace_path("tests/golden")
}

/// Directory test output lands in before comparison.
pub fn regout_dir() -> String {
    workspace_path("tests/regout")
}
