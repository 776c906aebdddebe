//! ifc-test - Regression test framework for the ifc crates
//!
//! Each integration test creates a [`RegParams`], runs a numbered series
//! of comparisons, and asserts on [`RegParams::cleanup`]. Failures are
//! collected instead of panicking at the first mismatch, so one run
//! reports every broken comparison.
//!
//! # Usage
//!
//! ```
//! use ifc_test::RegParams;
//!
//! let mut rp = RegParams::new("crop");
//! rp.compare_values(4.0, 4.0, 0.0);
//! assert!(rp.cleanup());
//! ```

mod error;
mod params;

pub use error::{TestError, TestResult};
pub use params::RegParams;

use ifc_core::Matrix;

/// Build a `rows x cols` matrix whose element `(r, c)` is `r * cols + c`.
///
/// Distinct values make it easy to check where a region came from.
pub fn numbered_matrix(rows: u32, cols: u32) -> TestResult<Matrix> {
    Matrix::from_fn(rows, cols, |r, c| f64::from(r * cols + c)).map_err(|source| {
        TestError::Fixture {
            name: format!("numbered {rows}x{cols}"),
            source,
        }
    })
}

/// Build a `rows x cols` matrix of intensities spread evenly over `[0, 1]`.
pub fn gradient_matrix(rows: u32, cols: u32) -> TestResult<Matrix> {
    let last = f64::from((rows * cols).saturating_sub(1).max(1));
    Matrix::from_fn(rows, cols, |r, c| f64::from(r * cols + c) / last).map_err(|source| {
        TestError::Fixture {
            name: format!("gradient {rows}x{cols}"),
            source,
        }
    })
}
