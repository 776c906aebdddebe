//! Centered padding
//!
//! Grows any axis whose target is larger than the frame, placing the
//! source in the middle of the output. The added border is either a
//! constant background or independent normal draws, one per padded cell.
//!
//! # Noise draw order
//!
//! Column padding draws one column at a time (`rows` values each), the
//! leading columns left to right followed by the trailing columns. Row
//! padding draws one row at a time (`cols` values each), top rows then
//! bottom rows. With a seeded [`NoiseSource`] the output is therefore
//! reproducible cell for cell.

use crate::TransformResult;
use crate::margin::Margins;
use crate::noise::{NoiseSource, draw};
use ifc_core::Matrix;

/// Pad a matrix to at least `height x width` with a constant background.
///
/// Each output axis is `max(source, target)` long. The source is written
/// into the centered window; the margin added on the leading edge is
/// `(output - source) / 2` and the trailing edge receives the remainder.
/// Any mask on `mat` is carried over.
///
/// A request that does not grow any axis returns a copy of `mat`.
///
/// # Examples
///
/// ```
/// use ifc_core::Matrix;
/// use ifc_transform::expand_without_noise;
///
/// let mat = Matrix::new_with_value(1, 1, 1.0).unwrap();
/// let out = expand_without_noise(&mat, 3, 2, 0.0).unwrap();
/// assert_eq!(out.data(), &[0.0, 0.0, 1.0, 0.0, 0.0, 0.0]);
/// ```
pub fn expand_without_noise(
    mat: &Matrix,
    height: u32,
    width: u32,
    background: f64,
) -> TransformResult<Matrix> {
    let (rows, cols) = mat.dimensions();
    if rows >= height && cols >= width {
        tracing::debug!(rows, cols, height, width, "expand: no change requested");
        return Ok(mat.clone());
    }

    let out_rows = rows.max(height);
    let out_cols = cols.max(width);
    let top = Margins::centered(rows, out_rows).leading;
    let left = Margins::centered(cols, out_cols).leading;
    tracing::debug!(
        rows,
        cols,
        out_rows,
        out_cols,
        top,
        left,
        background,
        "expand: constant background padding"
    );

    let mut out = Matrix::new_with_value(out_rows, out_cols, background)?;
    let (start, end) = (left as usize, (left + cols) as usize);
    for (r, src) in mat.iter_rows().enumerate() {
        out.row_mut(top + r as u32)[start..end].copy_from_slice(src);
    }
    out.set_mask(mat.mask().cloned());
    Ok(out)
}

/// Pad rows with normal noise until the matrix has `height` rows.
///
/// Added cells are independent draws from `N(background, sd²)`; the
/// source rows are copied unchanged into the centered band. Any mask on
/// `mat` is carried over. Returns a copy of `mat` if it already has at
/// least `height` rows.
///
/// # Errors
///
/// Returns `TransformError::InvalidParameters` if the noise source rejects
/// `background` or `sd`, or returns the wrong number of draws.
pub fn expand_row_with_noise<N>(
    mat: &Matrix,
    height: u32,
    background: f64,
    sd: f64,
    noise: &mut N,
) -> TransformResult<Matrix>
where
    N: NoiseSource + ?Sized,
{
    let (rows, cols) = mat.dimensions();
    if rows >= height {
        return Ok(mat.clone());
    }

    let margins = Margins::centered(rows, height);
    tracing::debug!(
        rows,
        height,
        top = margins.leading,
        bottom = margins.trailing,
        background,
        sd,
        "expand: noise row padding"
    );

    let mut data = Vec::with_capacity((height as usize) * (cols as usize));
    for _ in 0..margins.leading {
        data.extend(draw(noise, cols as usize, background, sd)?);
    }
    data.extend_from_slice(mat.data());
    for _ in 0..margins.trailing {
        data.extend(draw(noise, cols as usize, background, sd)?);
    }

    let mut out = Matrix::from_data(height, cols, data)?;
    out.set_mask(mat.mask().cloned());
    Ok(out)
}

/// Pad columns with normal noise until the matrix has `width` columns.
///
/// Column counterpart of [`expand_row_with_noise`].
///
/// # Errors
///
/// Returns `TransformError::InvalidParameters` if the noise source rejects
/// `background` or `sd`, or returns the wrong number of draws.
pub fn expand_col_with_noise<N>(
    mat: &Matrix,
    width: u32,
    background: f64,
    sd: f64,
    noise: &mut N,
) -> TransformResult<Matrix>
where
    N: NoiseSource + ?Sized,
{
    let (rows, cols) = mat.dimensions();
    if cols >= width {
        return Ok(mat.clone());
    }

    let margins = Margins::centered(cols, width);
    tracing::debug!(
        cols,
        width,
        left = margins.leading,
        right = margins.trailing,
        background,
        sd,
        "expand: noise column padding"
    );

    let mut out = Matrix::new(rows, width)?;
    let trailing_start = margins.leading + cols;
    let noise_cols = (0..margins.leading).chain(trailing_start..width);
    for col in noise_cols {
        let draws = draw(noise, rows as usize, background, sd)?;
        for (row, value) in draws.into_iter().enumerate() {
            out.row_mut(row as u32)[col as usize] = value;
        }
    }

    let (start, end) = (margins.leading as usize, trailing_start as usize);
    for (r, src) in mat.iter_rows().enumerate() {
        out.row_mut(r as u32)[start..end].copy_from_slice(src);
    }
    out.set_mask(mat.mask().cloned());
    Ok(out)
}

/// Pad a matrix to at least `height x width` with normal noise.
///
/// Columns are padded first, then rows are padded on the widened result,
/// so the top and bottom noise bands span the full output width.
///
/// # Errors
///
/// Returns `TransformError::InvalidParameters` if the noise source rejects
/// `background` or `sd`.
pub fn expand_with_noise<N>(
    mat: &Matrix,
    height: u32,
    width: u32,
    background: f64,
    sd: f64,
    noise: &mut N,
) -> TransformResult<Matrix>
where
    N: NoiseSource + ?Sized,
{
    let widened = expand_col_with_noise(mat, width, background, sd, noise)?;
    expand_row_with_noise(&widened, height, background, sd, noise)
}
