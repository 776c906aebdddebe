//! Regression test parameters and operations

use crate::error::{TestError, TestResult};
use ifc_core::{ColorVolume, Mask, Matrix};

/// Regression test parameters
///
/// This structure tracks the state of a regression test, including
/// the test name, current index, and success status.
pub struct RegParams {
    /// Name of the test (e.g., "resize")
    pub test_name: String,
    /// Current test index (incremented before each test)
    index: usize,
    /// Overall success status
    success: bool,
    /// Recorded failures
    failures: Vec<String>,
}

impl RegParams {
    /// Create new regression test parameters
    ///
    /// # Arguments
    ///
    /// * `test_name` - Name of the test (e.g., "resize")
    pub fn new(test_name: &str) -> Self {
        eprintln!();
        eprintln!("////////////////////////////////////////////////");
        eprintln!("////////////////   {}_reg   ///////////////", test_name);
        eprintln!("////////////////////////////////////////////////");

        Self {
            test_name: test_name.to_string(),
            index: 0,
            success: true,
            failures: Vec::new(),
        }
    }

    /// Get the current test index
    pub fn index(&self) -> usize {
        self.index
    }

    fn fail(&mut self, msg: String) -> bool {
        eprintln!("{}", msg);
        self.failures.push(msg);
        self.success = false;
        false
    }

    /// Compare two floating-point values
    ///
    /// # Arguments
    ///
    /// * `expected` - Expected value
    /// * `actual` - Actual computed value
    /// * `delta` - Maximum allowed difference
    ///
    /// # Returns
    ///
    /// `true` if values match within delta, `false` otherwise.
    pub fn compare_values(&mut self, expected: f64, actual: f64, delta: f64) -> bool {
        self.index += 1;
        let diff = (expected - actual).abs();

        if diff > delta {
            let msg = format!(
                "Failure in {}_reg: value comparison for index {}\n\
                 difference = {} but allowed delta = {}\n\
                 expected = {}, actual = {}",
                self.test_name, self.index, diff, delta, expected, actual
            );
            self.fail(msg)
        } else {
            true
        }
    }

    /// Compare two matrices for exact equality of shape and elements
    ///
    /// Masks are not compared; use [`compare_mask`](Self::compare_mask).
    pub fn compare_matrix(&mut self, expected: &Matrix, actual: &Matrix) -> bool {
        self.index += 1;

        if expected.dimensions() != actual.dimensions() {
            let msg = format!(
                "Failure in {}_reg: matrix comparison for index {} - dimension mismatch: \
                 expected {}x{}, actual {}x{}",
                self.test_name,
                self.index,
                expected.rows(),
                expected.cols(),
                actual.rows(),
                actual.cols()
            );
            return self.fail(msg);
        }

        let cols = expected.cols() as usize;
        let mismatch = expected
            .data()
            .iter()
            .zip(actual.data())
            .position(|(a, b)| a != b);
        if let Some(i) = mismatch {
            let msg = format!(
                "Failure in {}_reg: matrix comparison for index {} - element mismatch at ({}, {})",
                self.test_name,
                self.index,
                i / cols,
                i % cols
            );
            return self.fail(msg);
        }

        true
    }

    /// Compare two color volumes, allowing `delta` per component
    pub fn compare_volume(&mut self, expected: &ColorVolume, actual: &ColorVolume, delta: f64) -> bool {
        self.index += 1;

        if expected.shape() != actual.shape() {
            let msg = format!(
                "Failure in {}_reg: volume comparison for index {} - shape mismatch: \
                 expected {:?}, actual {:?}",
                self.test_name,
                self.index,
                expected.shape(),
                actual.shape()
            );
            return self.fail(msg);
        }

        let mismatch = expected
            .data()
            .iter()
            .zip(actual.data())
            .position(|(a, b)| (a - b).abs() > delta);
        if let Some(i) = mismatch {
            let msg = format!(
                "Failure in {}_reg: volume comparison for index {} - component {} differs by more than {}",
                self.test_name, self.index, i, delta
            );
            return self.fail(msg);
        }

        true
    }

    /// Check that `actual` carries the same mask payload as `expected`
    pub fn compare_mask(&mut self, expected: &Matrix, actual: Option<&Mask>) -> bool {
        self.index += 1;

        if expected.mask() != actual {
            let msg = format!(
                "Failure in {}_reg: mask comparison for index {}",
                self.test_name, self.index
            );
            return self.fail(msg);
        }

        true
    }

    /// Clean up and report results
    ///
    /// # Returns
    ///
    /// `true` if all tests passed, `false` if any failed.
    pub fn cleanup(self) -> bool {
        if self.success {
            eprintln!("SUCCESS: {}_reg", self.test_name);
        } else {
            eprintln!("FAILURE: {}_reg", self.test_name);
            for failure in &self.failures {
                eprintln!("  {}", failure);
            }
        }
        eprintln!();

        self.success
    }

    /// Like [`cleanup`](Self::cleanup), but returns the failure as an error.
    pub fn finish(self) -> TestResult<()> {
        let count = self.failures.len();
        let test_name = self.test_name.clone();
        if self.cleanup() {
            Ok(())
        } else {
            Err(TestError::Failed { test_name, count })
        }
    }

    /// Check if all tests have passed so far
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Get list of failures
    pub fn failures(&self) -> &[String] {
        &self.failures
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compare_values_success() {
        let mut rp = RegParams::new("test");
        assert!(rp.compare_values(100.0, 100.0, 0.0));
        assert!(rp.is_success());
    }

    #[test]
    fn test_compare_values_within_delta() {
        let mut rp = RegParams::new("test");
        assert!(rp.compare_values(100.0, 100.5, 1.0));
        assert!(rp.is_success());
    }

    #[test]
    fn test_compare_values_failure() {
        let mut rp = RegParams::new("test");
        assert!(!rp.compare_values(100.0, 200.0, 0.0));
        assert!(!rp.is_success());
        assert_eq!(rp.failures().len(), 1);
    }

    #[test]
    fn test_compare_matrix() {
        let mut rp = RegParams::new("test");
        let a = Matrix::from_rows(&[[1.0, 2.0], [3.0, 4.0]]).unwrap();
        let b = Matrix::from_rows(&[[1.0, 2.0], [3.0, 5.0]]).unwrap();
        let c = Matrix::new(2, 3).unwrap();
        assert!(rp.compare_matrix(&a, &a.clone()));
        assert!(!rp.compare_matrix(&a, &b));
        assert!(rp.failures()[0].contains("(1, 1)"));
        assert!(!rp.compare_matrix(&a, &c));
        assert_eq!(rp.index(), 3);
        assert!(rp.finish().is_err());
    }
}
