//! Error types for ifc-color

use thiserror::Error;

/// Errors that can occur during color mapping
#[derive(Debug, Error)]
pub enum ColorError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] ifc_core::Error),

    /// HSV component outside `[0, 1]`
    #[error("invalid hsv color: h={h}, s={s}, v={v}")]
    InvalidInput { h: f64, s: f64, v: f64 },

    /// Hue sector outside `0..6`; indicates a conversion bug
    #[error("bad hsv to rgb color conversion: sector {0}")]
    Internal(i64),
}

/// Result type for color operations
pub type ColorResult<T> = Result<T, ColorError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_core_error_wraps() {
        let err: ColorError = ifc_core::Error::InvalidDimension { rows: 0, cols: 3 }.into();
        assert!(matches!(err, ColorError::Core(ifc_core::Error::InvalidDimension { .. })));
        assert!(err.to_string().starts_with("core error: "));
    }
}
