//! Error types for the test framework

use thiserror::Error;

/// Errors that can occur during regression testing
#[derive(Debug, Error)]
pub enum TestError {
    /// One or more comparisons failed
    #[error("{test_name}_reg: {count} comparison(s) failed")]
    Failed { test_name: String, count: usize },

    /// Fixture construction failed
    #[error("failed to build fixture '{name}': {source}")]
    Fixture {
        name: String,
        #[source]
        source: ifc_core::Error,
    },
}

/// Result type for test operations
pub type TestResult<T> = Result<T, TestError>;
