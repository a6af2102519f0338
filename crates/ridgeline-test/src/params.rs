//! Regression test state and check operations

use crate::error::{TestError, TestResult};
use crate::{golden_dir, regout_dir};
use ridgeline_core::Raster;
use ridgeline_io::ImageFormat;
use std::fs;
use std::path::Path;

/// How golden files are treated for a test run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RegTestMode {
    /// Write fresh golden files
    Generate,
    /// Check results against golden files (the default)
    #[default]
    Compare,
    /// Run checks without consulting golden files
    Display,
}

impl RegTestMode {
    /// Read the mode from the `REGTEST_MODE` environment variable.
    ///
    /// Anything other than "generate" or "display" (case-insensitive)
    /// falls back to [`RegTestMode::Compare`].
    pub fn from_env() -> Self {
        let raw = std::env::var("REGTEST_MODE").unwrap_or_default();
        if raw.eq_ignore_ascii_case("generate") {
            Self::Generate
        } else if raw.eq_ignore_ascii_case("display") {
            Self::Display
        } else {
            Self::Compare
        }
    }
}

/// State for one named regression test
///
/// Tracks the test's mode, running check index, and the failures
/// recorded so far. Every `compare_*` call claims the next index, so
/// golden files keep their numbering as long as checks are not
/// reordered.
pub struct RegParams {
    /// Test name, also the stem of its golden and regout files
    pub name: String,
    /// Index claimed by the most recent check
    index: usize,
    /// Mode for this run
    pub mode: RegTestMode,
    /// True until any check fails
    success: bool,
    /// Failure messages collected so far
    failures: Vec<String>,
}

impl RegParams {
    /// Start a named regression test.
    ///
    /// Reads the mode from `REGTEST_MODE` and makes sure the golden
    /// and regout directories exist.
    pub fn new(name: &str) -> Self {
        let mode = RegTestMode::from_env();

        let _ = fs::create_dir_all(golden_dir());
        let _ = fs::create_dir_all(regout_dir());

        eprintln!();
        eprintln!("================================================");
        eprintln!("================   {name}_reg   ================");
        eprintln!("================================================");
        eprintln!("Mode: {mode:?}");

        Self {
            name: name.to_string(),
            index: 0,
            mode,
            success: true,
            failures: Vec::new(),
        }
    }

    /// Index of the last check.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Whether golden comparison is disabled for this run.
    pub fn display(&self) -> bool {
        self.mode == RegTestMode::Display
    }

    /// Record a failed check and keep going.
    fn fail(&mut self, message: String) -> bool {
        eprintln!("{message}");
        self.failures.push(message);
        self.success = false;
        false
    }

    /// Path of the numbered file `stem.NN.ext` under `dir`.
    fn numbered_path(&self, dir: &str, stem: &str, ext: &str) -> String {
        format!("{dir}/{stem}.{index:02}.{ext}", index = self.index)
    }

    /// Check a numeric result against its expected value.
    ///
    /// Passes when the two values agree within `delta`.
    pub fn compare_values(&mut self, expected: f64, actual: f64, delta: f64) -> bool {
        self.index += 1;
        let diff = (expected - actual).abs();
        if diff <= delta {
            return true;
        }
        self.fail(format!(
            "Failure in {name}_reg: value comparison for index {index}\n\
             difference = {diff} but allowed delta = {delta}\n\
             expected = {expected}, actual = {actual}",
            name = self.name,
            index = self.index,
        ))
    }

    /// Check two rasters for exact equality.
    ///
    /// Passes when dimensions and every pixel match; the first
    /// differing pixel is reported by coordinate.
    pub fn compare_rasters(&mut self, first: &Raster, second: &Raster) -> bool {
        self.index += 1;

        if !first.sizes_equal(second) {
            return self.fail(format!(
                "Failure in {}_reg: raster comparison for index {} - dimension mismatch \
                 ({}x{} vs {}x{})",
                self.name,
                self.index,
                first.width(),
                first.height(),
                second.width(),
                second.height()
            ));
        }

        let width = first.width();
        match first
            .data()
            .iter()
            .zip(second.data())
            .position(|(a, b)| a != b)
        {
            None => true,
            Some(at) => {
                let (x, y) = (at as u32 % width, at as u32 / width);
                self.fail(format!(
                    "Failure in {}_reg: raster comparison for index {} - pixel mismatch \
                     at ({}, {}): {} vs {}",
                    self.name,
                    self.index,
                    x,
                    y,
                    first.data()[at],
                    second.data()[at]
                ))
            }
        }
    }

    /// Check two byte strings for equality.
    pub fn compare_strings(&mut self, data1: &[u8], data2: &[u8]) -> bool {
        self.index += 1;
        if data1 == data2 {
            return true;
        }
        self.fail(format!(
            "Failure in {name}_reg: string comparison for index {index}\n\
             sizes: {len1} vs {len2}",
            name = self.name,
            index = self.index,
            len1 = data1.len(),
            len2 = data2.len(),
        ))
    }

    /// Write a raster into the regout directory and check it against
    /// the golden file for the claimed index.
    pub fn write_raster_and_check(
        &mut self,
        raster: &Raster,
        format: ImageFormat,
    ) -> TestResult<()> {
        self.index += 1;

        let local_path = self.numbered_path(&regout_dir(), &self.name, format.extension());
        ridgeline_io::write_image(raster, &local_path, format).map_err(|e| {
            TestError::ImageWrite {
                path: local_path.clone(),
                message: e.to_string(),
            }
        })?;

        self.check_file(&local_path)
    }

    /// Check a file against the golden file for the current index.
    ///
    /// Generate mode installs the file as the new golden copy; compare
    /// mode first compares bytes and falls back to decoded pixels, so
    /// a re-encoded image still passes.
    fn check_file(&mut self, local_path: &str) -> TestResult<()> {
        if self.mode == RegTestMode::Display {
            return Ok(());
        }

        let ext = Path::new(local_path)
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("");
        let golden_stem = format!("{}_golden", self.name);
        let golden_path = self.numbered_path(&golden_dir(), &golden_stem, ext);

        if self.mode == RegTestMode::Generate {
            fs::copy(local_path, &golden_path)?;
            eprintln!("Generated: {golden_path}");
            return Ok(());
        }

        if !Path::new(&golden_path).exists() {
            self.fail(format!(
                "Failure in {}_reg: golden file not found: {}",
                self.name, golden_path
            ));
            return Ok(());
        }

        let matches = fs::read(local_path)? == fs::read(&golden_path)?
            || decoded_pixels_match(local_path, &golden_path);
        if !matches {
            self.fail(format!(
                "Failure in {}_reg, index {}: comparing {} with {}",
                self.name, self.index, local_path, golden_path
            ));
        }

        Ok(())
    }

    /// Finish the test and print the verdict.
    ///
    /// Returns `true` when every check passed.
    pub fn cleanup(self) -> bool {
        if self.success {
            eprintln!("SUCCESS: {}_reg", self.name);
        } else {
            eprintln!("FAILURE: {}_reg", self.name);
            for failure in &self.failures {
                eprintln!("  {failure}");
            }
        }
        eprintln!();

        self.success
    }

    /// Whether every check so far has passed.
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Messages for the checks that failed.
    pub fn failures(&self) -> &[String] {
        &self.failures
    }
}

/// Whether two image files decode to the same pixels.
fn decoded_pixels_match(path_a: &str, path_b: &str) -> bool {
    let (Ok(a), Ok(b)) = (
        ridgeline_io::read_image(path_a),
        ridgeline_io::read_image(path_b),
    ) else {
        return false;
    };
    a.sizes_equal(&b) && a.data() == b.data()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_from_env() {
        // The env var cannot be toggled safely from parallel tests, so
        // only check that from_env lands on some valid mode.
        let mode = RegTestMode::from_env();
        assert!(matches!(
            mode,
            RegTestMode::Compare | RegTestMode::Generate | RegTestMode::Display
        ));
    }

    #[test]
    fn test_compare_values_match() {
        let mut rp = RegParams::new("params");
        assert!(rp.compare_values(100.0, 100.0, 0.0));
        assert!(rp.is_success());
    }

    #[test]
    fn test_compare_values_within_delta() {
        let mut rp = RegParams::new("params");
        assert!(rp.compare_values(100.0, 100.5, 1.0));
        assert!(rp.is_success());
    }

    #[test]
    fn test_compare_values_mismatch() {
        let mut rp = RegParams::new("params");
        assert!(!rp.compare_values(100.0, 200.0, 0.0));
        assert!(!rp.is_success());
        assert_eq!(rp.failures().len(), 1);
    }

    #[test]
    fn test_compare_rasters_reports_mismatch() {
        let mut rp = RegParams::new("params");
        let a = Raster::from_vec(2, 2, vec![0, 1, 2, 3]).unwrap();
        let b = Raster::from_vec(2, 2, vec![0, 1, 9, 3]).unwrap();
        assert!(!rp.compare_rasters(&a, &b));
        let c = Raster::from_vec(2, 2, vec![0, 1, 2, 3]).unwrap();
        assert!(rp.compare_rasters(&a, &c));
    }

    #[test]
    fn test_compare_strings() {
        let mut rp = RegParams::new("params");
        assert!(rp.compare_strings(b"same", b"same"));
        assert!(!rp.compare_strings(b"same", b"different"));
    }

    #[test]
    fn test_index_advances_per_check() {
        let mut rp = RegParams::new("params");
        assert_eq!(rp.index(), 0);
        rp.compare_values(1.0, 1.0, 0.0);
        rp.compare_strings(b"a", b"a");
        assert_eq!(rp.index(), 2);
    }
}
