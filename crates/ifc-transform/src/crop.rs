//! Centered cropping
//!
//! Removes an evenly split margin from any axis whose target is smaller
//! than the frame. Axes with a target of `0`, or a target at least as
//! large as the frame, are kept at full size.

use crate::TransformResult;
use crate::margin::Margins;
use ifc_core::Matrix;

/// Crop a matrix to at most `height x width`, keeping the center.
///
/// The result has `min(height or rows, rows)` rows and
/// `min(width or cols, cols)` columns. The margin removed from an axis is
/// `(source - target) / 2` on the leading edge, with the remainder taken
/// from the trailing edge. Any mask on `mat` is carried over.
///
/// A request that does not shrink any axis returns a copy of `mat`.
///
/// # Arguments
///
/// * `mat` - Input matrix
/// * `height` - Target number of rows, `0` for no change
/// * `width` - Target number of columns, `0` for no change
///
/// # Examples
///
/// ```
/// use ifc_core::Matrix;
/// use ifc_transform::crop;
///
/// let mat = Matrix::from_fn(10, 10, |r, c| (r * 10 + c) as f64).unwrap();
/// let out = crop(&mat, 4, 4).unwrap();
/// assert_eq!(out.dimensions(), (4, 4));
/// assert_eq!(out.get(0, 0).unwrap(), 33.0);
/// ```
pub fn crop(mat: &Matrix, height: u32, width: u32) -> TransformResult<Matrix> {
    let (rows, cols) = mat.dimensions();

    // Nothing to crop on either axis
    if (cols <= width && rows <= height)
        || (cols <= width && height == 0)
        || (rows <= height && width == 0)
    {
        tracing::debug!(rows, cols, height, width, "crop: no change requested");
        return Ok(mat.clone());
    }

    let (top, out_rows) = if height > 0 && height < rows {
        (Margins::centered(rows, height).leading, height)
    } else {
        (0, rows)
    };
    let (left, out_cols) = if width > 0 && width < cols {
        (Margins::centered(cols, width).leading, width)
    } else {
        (0, cols)
    };

    tracing::debug!(
        rows,
        cols,
        out_rows,
        out_cols,
        top,
        left,
        "crop: extracting centered region"
    );

    let mut out = mat.submatrix(top, left, out_rows, out_cols)?;
    out.set_mask(mat.mask().cloned());
    Ok(out)
}
