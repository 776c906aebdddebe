//! Error types for ifc-transform

use thiserror::Error;

/// Errors that can occur during geometric transformations
#[derive(Debug, Error)]
pub enum TransformError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] ifc_core::Error),

    /// Invalid noise or padding parameters
    #[error("invalid parameters: {0}")]
    InvalidParameters(String),
}

/// Result type for transform operations
pub type TransformResult<T> = Result<T, TransformError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_core_error_wraps() {
        let err: TransformError = ifc_core::Error::InvalidDimension { rows: 0, cols: 3 }.into();
        assert!(matches!(err, TransformError::Core(ifc_core::Error::InvalidDimension { .. })));
        assert!(err.to_string().starts_with("core error: "));
    }
}
