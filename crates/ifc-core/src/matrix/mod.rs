//! Matrix - Single-channel double-precision frame
//!
//! `Matrix` is a 2D array of `f64` values holding one channel of an
//! acquired imaging flow cytometry frame. It may carry an opaque
//! [`Mask`] that transforms forward unchanged.
//!
//! # Examples
//!
//! ```
//! use ifc_core::Matrix;
//!
//! // Create a 3x4 frame (3 rows, 4 columns)
//! let mut mat = Matrix::new(3, 4).unwrap();
//!
//! mat.set(1, 2, 0.5).unwrap();
//! assert_eq!(mat.get(1, 2).unwrap(), 0.5);
//! assert_eq!(mat.dimensions(), (3, 4));
//! ```

mod mask;

pub use mask::Mask;

use crate::error::{Error, Result};

/// Double-precision single-channel matrix
///
/// # Memory Layout
///
/// Data is stored in row-major order with no padding. The element at
/// `(row, col)` is at index `row * cols + col`.
///
/// Both dimensions are always at least 1.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    /// Number of rows (frame height)
    rows: u32,
    /// Number of columns (frame width)
    cols: u32,
    /// Element data (row-major, no padding)
    data: Vec<f64>,
    /// Side-channel forwarded by transforms
    mask: Option<Mask>,
}

impl Matrix {
    /// Create a new matrix with all elements set to zero
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidDimension` if `rows` or `cols` is 0.
    pub fn new(rows: u32, cols: u32) -> Result<Self> {
        Self::new_with_value(rows, cols, 0.0)
    }

    /// Create a new matrix with all elements set to `value`
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidDimension` if `rows` or `cols` is 0.
    ///
    /// # Examples
    ///
    /// ```
    /// use ifc_core::Matrix;
    ///
    /// let mat = Matrix::new_with_value(2, 2, 0.25).unwrap();
    /// assert!(mat.data().iter().all(|&v| v == 0.25));
    /// ```
    pub fn new_with_value(rows: u32, cols: u32, value: f64) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(Error::InvalidDimension { rows, cols });
        }
        Ok(Self::filled(rows, cols, value))
    }

    /// Create a matrix from row-major data
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidDimension` for a zero dimension and
    /// `Error::DataLength` if `data.len() != rows * cols`.
    pub fn from_data(rows: u32, cols: u32, data: Vec<f64>) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(Error::InvalidDimension { rows, cols });
        }
        if data.len() != (rows as usize) * (cols as usize) {
            return Err(Error::DataLength {
                len: data.len(),
                rows,
                cols,
            });
        }
        Ok(Matrix {
            rows,
            cols,
            data,
            mask: None,
        })
    }

    /// Create a matrix from a slice of rows
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidDimension` if there are no rows or the rows
    /// are empty, and `Error::RaggedRows` if row lengths differ.
    ///
    /// # Examples
    ///
    /// ```
    /// use ifc_core::Matrix;
    ///
    /// let mat = Matrix::from_rows(&[[0.0, 1.0], [2.0, 3.0], [4.0, 5.0]]).unwrap();
    /// assert_eq!(mat.dimensions(), (3, 2));
    /// assert_eq!(mat.get(2, 1).unwrap(), 5.0);
    /// ```
    pub fn from_rows<R: AsRef<[f64]>>(rows: &[R]) -> Result<Self> {
        let expected = rows.first().map_or(0, |r| r.as_ref().len());
        let mut data = Vec::with_capacity(rows.len() * expected);
        for (i, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != expected {
                return Err(Error::RaggedRows {
                    row: i,
                    len: row.len(),
                    expected,
                });
            }
            data.extend_from_slice(row);
        }
        let nrows = u32::try_from(rows.len())
            .map_err(|_| Error::InvalidParameter(format!("too many rows: {}", rows.len())))?;
        let ncols = u32::try_from(expected)
            .map_err(|_| Error::InvalidParameter(format!("too many columns: {expected}")))?;
        Self::from_data(nrows, ncols, data)
    }

    /// Create a matrix whose element `(row, col)` is `f(row, col)`
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidDimension` if `rows` or `cols` is 0.
    pub fn from_fn<F>(rows: u32, cols: u32, mut f: F) -> Result<Self>
    where
        F: FnMut(u32, u32) -> f64,
    {
        if rows == 0 || cols == 0 {
            return Err(Error::InvalidDimension { rows, cols });
        }
        let mut data = Vec::with_capacity((rows as usize) * (cols as usize));
        for row in 0..rows {
            for col in 0..cols {
                data.push(f(row, col));
            }
        }
        Ok(Matrix {
            rows,
            cols,
            data,
            mask: None,
        })
    }

    /// Allocate without the dimension check.
    fn filled(rows: u32, cols: u32, value: f64) -> Self {
        debug_assert!(rows > 0 && cols > 0);
        Matrix {
            rows,
            cols,
            data: vec![value; (rows as usize) * (cols as usize)],
            mask: None,
        }
    }

    /// Number of rows (frame height)
    #[inline]
    pub fn rows(&self) -> u32 {
        self.rows
    }

    /// Number of columns (frame width)
    #[inline]
    pub fn cols(&self) -> u32 {
        self.cols
    }

    /// Dimensions as `(rows, cols)`
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.rows, self.cols)
    }

    /// Total number of elements
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Always `false`; a matrix has at least one element.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[inline]
    fn index(&self, row: u32, col: u32) -> usize {
        (row as usize) * (self.cols as usize) + (col as usize)
    }

    fn check_bounds(&self, row: u32, col: u32) -> Result<()> {
        if row >= self.rows || col >= self.cols {
            return Err(Error::IndexOutOfBounds {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(())
    }

    /// Get the element at `(row, col)`.
    pub fn get(&self, row: u32, col: u32) -> Result<f64> {
        self.check_bounds(row, col)?;
        Ok(self.data[self.index(row, col)])
    }

    /// Set the element at `(row, col)`.
    pub fn set(&mut self, row: u32, col: u32, value: f64) -> Result<()> {
        self.check_bounds(row, col)?;
        let idx = self.index(row, col);
        self.data[idx] = value;
        Ok(())
    }

    /// Raw read-only data access (row-major).
    pub fn data(&self) -> &[f64] {
        &self.data
    }

    /// Consume the matrix and return its row-major data.
    pub fn into_data(self) -> Vec<f64> {
        self.data
    }

    /// Get a row as a slice
    ///
    /// # Panics
    ///
    /// Panics if `row >= self.rows()`.
    pub fn row(&self, row: u32) -> &[f64] {
        let start = (row as usize) * (self.cols as usize);
        &self.data[start..start + self.cols as usize]
    }

    /// Get a row as a mutable slice
    ///
    /// # Panics
    ///
    /// Panics if `row >= self.rows()`.
    pub fn row_mut(&mut self, row: u32) -> &mut [f64] {
        let start = (row as usize) * (self.cols as usize);
        let end = start + self.cols as usize;
        &mut self.data[start..end]
    }

    /// Iterate over rows.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[f64]> {
        self.data.chunks_exact(self.cols as usize)
    }

    /// Copy a rectangular region into a new matrix.
    ///
    /// The region starts at `(row, col)` and spans `rows x cols`. The
    /// result carries no mask.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidDimension` for an empty region and
    /// `Error::InvalidParameter` if the region extends past the matrix.
    pub fn submatrix(&self, row: u32, col: u32, rows: u32, cols: u32) -> Result<Matrix> {
        if rows == 0 || cols == 0 {
            return Err(Error::InvalidDimension { rows, cols });
        }
        let fits_rows = row.checked_add(rows).is_some_and(|end| end <= self.rows);
        let fits_cols = col.checked_add(cols).is_some_and(|end| end <= self.cols);
        if !fits_rows || !fits_cols {
            return Err(Error::InvalidParameter(format!(
                "region {rows}x{cols} at ({row}, {col}) exceeds {}x{} matrix",
                self.rows, self.cols
            )));
        }

        let mut data = Vec::with_capacity((rows as usize) * (cols as usize));
        for r in row..row + rows {
            let start = self.index(r, col);
            data.extend_from_slice(&self.data[start..start + cols as usize]);
        }
        Ok(Matrix {
            rows,
            cols,
            data,
            mask: None,
        })
    }

    // ------------------------------------------------------------------------
    // Mask side-channel
    // ------------------------------------------------------------------------

    /// The attached mask, if any.
    #[inline]
    pub fn mask(&self) -> Option<&Mask> {
        self.mask.as_ref()
    }

    /// Returns `true` if a mask is attached.
    #[inline]
    pub fn has_mask(&self) -> bool {
        self.mask.is_some()
    }

    /// Attach (or clear) the mask.
    pub fn set_mask(&mut self, mask: Option<Mask>) {
        self.mask = mask;
    }

    /// Builder form of [`set_mask`](Self::set_mask).
    pub fn with_mask(mut self, mask: Mask) -> Self {
        self.mask = Some(mask);
        self
    }

    /// Detach and return the mask.
    pub fn take_mask(&mut self) -> Option<Mask> {
        self.mask.take()
    }

    /// Minimum and maximum over all elements, as `(min, max)`.
    pub fn min_max(&self) -> (f64, f64) {
        self.data
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
                (lo.min(v), hi.max(v))
            })
    }

    /// Mean of all elements.
    pub fn mean(&self) -> f64 {
        self.data.iter().sum::<f64>() / self.data.len() as f64
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matrix_creation() {
        let mat = Matrix::new(20, 10).unwrap();
        assert_eq!(mat.rows(), 20);
        assert_eq!(mat.cols(), 10);
        assert_eq!(mat.dimensions(), (20, 10));
        assert_eq!(mat.len(), 200);
        assert!(mat.data().iter().all(|&v| v == 0.0));
        assert!(!mat.has_mask());
    }

    #[test]
    fn test_matrix_invalid_dimensions() {
        assert!(Matrix::new(0, 10).is_err());
        assert!(Matrix::new(10, 0).is_err());
        assert!(Matrix::new_with_value(0, 0, 1.0).is_err());
        assert!(Matrix::from_fn(0, 3, |_, _| 0.0).is_err());
    }

    #[test]
    fn test_matrix_from_data_row_major() {
        let mat = Matrix::from_data(2, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
        assert_eq!(mat.get(0, 0).unwrap(), 1.0);
        assert_eq!(mat.get(0, 2).unwrap(), 3.0);
        assert_eq!(mat.get(1, 0).unwrap(), 4.0);
        assert_eq!(mat.get(1, 2).unwrap(), 6.0);
        assert_eq!(mat.row(1), &[4.0, 5.0, 6.0]);
    }

    #[test]
    fn test_matrix_from_data_wrong_size() {
        let err = Matrix::from_data(2, 3, vec![1.0; 5]).unwrap_err();
        assert!(matches!(err, Error::DataLength { len: 5, .. }));
    }

    #[test]
    fn test_matrix_from_rows() {
        let mat = Matrix::from_rows(&[vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
        assert_eq!(mat.data(), &[1.0, 2.0, 3.0, 4.0]);

        let ragged = Matrix::from_rows(&[vec![1.0, 2.0], vec![3.0]]);
        assert!(matches!(ragged, Err(Error::RaggedRows { row: 1, .. })));

        let empty: [Vec<f64>; 0] = [];
        assert!(Matrix::from_rows(&empty).is_err());
    }

    #[test]
    fn test_matrix_from_fn() {
        let mat = Matrix::from_fn(3, 4, |r, c| (r * 10 + c) as f64).unwrap();
        assert_eq!(mat.get(2, 3).unwrap(), 23.0);
        assert_eq!(mat.get(1, 0).unwrap(), 10.0);
    }

    #[test]
    fn test_matrix_access_out_of_bounds() {
        let mut mat = Matrix::new(4, 5).unwrap();
        assert!(mat.get(4, 0).is_err());
        assert!(mat.get(0, 5).is_err());
        assert!(mat.set(4, 5, 1.0).is_err());
    }

    #[test]
    fn test_matrix_row_mut() {
        let mut mat = Matrix::new(2, 3).unwrap();
        mat.row_mut(1).copy_from_slice(&[7.0, 8.0, 9.0]);
        assert_eq!(mat.get(1, 1).unwrap(), 8.0);
        assert_eq!(mat.iter_rows().count(), 2);
    }

    #[test]
    fn test_submatrix() {
        let mat = Matrix::from_fn(5, 5, |r, c| (r * 5 + c) as f64).unwrap();
        let sub = mat.submatrix(1, 2, 2, 3).unwrap();
        assert_eq!(sub.dimensions(), (2, 3));
        assert_eq!(sub.data(), &[7.0, 8.0, 9.0, 12.0, 13.0, 14.0]);

        assert!(mat.submatrix(4, 0, 2, 1).is_err());
        assert!(mat.submatrix(0, 0, 0, 1).is_err());
        assert!(mat.submatrix(u32::MAX, 0, 2, 1).is_err());
    }

    #[test]
    fn test_mask_attach_and_equality() {
        let mask = Mask::new(vec![true, false]);
        let a = Matrix::new(1, 2).unwrap().with_mask(mask.clone());
        let b = Matrix::new(1, 2).unwrap().with_mask(mask.clone());
        assert_eq!(a, b);

        let c = Matrix::new(1, 2).unwrap();
        assert_ne!(a, c);

        let mut d = b.clone();
        assert_eq!(d.take_mask(), Some(mask));
        assert!(!d.has_mask());
    }

    #[test]
    fn test_min_max_mean() {
        let mat = Matrix::from_rows(&[[0.0, 4.0], [2.0, -2.0]]).unwrap();
        assert_eq!(mat.min_max(), (-2.0, 4.0));
        assert_eq!(mat.mean(), 1.0);
    }
}
