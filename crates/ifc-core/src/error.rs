//! Error types for ifc-core
//!
//! Provides a unified error type for matrix construction and element
//! access. Geometry and color crates wrap it in their own error enums.

use thiserror::Error;

/// ifc-core error type
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid matrix dimensions
    #[error("invalid matrix dimensions: {rows}x{cols}")]
    InvalidDimension { rows: u32, cols: u32 },

    /// Index out of bounds
    #[error("index out of bounds: ({row}, {col}) in {rows}x{cols} matrix")]
    IndexOutOfBounds {
        row: u32,
        col: u32,
        rows: u32,
        cols: u32,
    },

    /// Data length does not match the requested shape
    #[error("data length {len} doesn't match {rows}x{cols}")]
    DataLength { len: usize, rows: u32, cols: u32 },

    /// Rows passed to `from_rows` have different lengths
    #[error("ragged rows: row {row} has {len} elements, expected {expected}")]
    RaggedRows {
        row: usize,
        len: usize,
        expected: usize,
    },

    /// Invalid parameter value
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Result type alias for ifc-core operations
pub type Result<T> = std::result::Result<T, Error>;
