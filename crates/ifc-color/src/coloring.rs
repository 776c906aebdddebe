//! Tinting of grayscale matrices
//!
//! Each element of a normalized intensity matrix becomes the HSV value of
//! one pixel, while hue and saturation are fixed for the whole frame. The
//! result keeps per-pixel intensity and carries the channel's display tint.
//!
//! # Examples
//!
//! ```
//! use ifc_color::matrix_hsv_to_rgb;
//! use ifc_core::{Channel, Matrix};
//!
//! let mat = Matrix::from_rows(&[[0.0, 1.0]]).unwrap();
//! let vol = matrix_hsv_to_rgb(&mat, 0.0, 0.0).unwrap();
//! assert_eq!(vol.shape(), (1, 2, 3));
//! assert_eq!(vol.plane(Channel::Red), &[0.0, 1.0]);
//! ```

use crate::ColorResult;
use crate::colorspace::{Hsv, hsv_to_rgb};
use ifc_core::{ColorVolume, Matrix};

/// Render `mat` as an RGB volume tinted with hue `h` and saturation `s`.
///
/// Every element is used as the HSV value of its pixel. The output has
/// shape `(rows, cols, 3)` with planes in R, G, B order, each the shape of
/// `mat`. Any mask on `mat` is carried over.
///
/// # Errors
///
/// Returns `ColorError::InvalidInput` if `h` or `s` is outside `[0, 1]`,
/// or at the first element (in row-major order) outside `[0, 1]`. No
/// partial volume is returned.
pub fn matrix_hsv_to_rgb(mat: &Matrix, h: f64, s: f64) -> ColorResult<ColorVolume> {
    let (rows, cols) = mat.dimensions();
    tracing::debug!(rows, cols, h, s, "tinting matrix");

    let len = mat.len();
    let mut data = vec![0.0; len * 3];
    let (red, rest) = data.split_at_mut(len);
    let (green, blue) = rest.split_at_mut(len);

    for (i, &v) in mat.data().iter().enumerate() {
        let rgb = hsv_to_rgb(Hsv::new(h, s, v))?;
        red[i] = rgb.r;
        green[i] = rgb.g;
        blue[i] = rgb.b;
    }

    let mut volume = ColorVolume::from_data(rows, cols, data)?;
    volume.set_mask(mat.mask().cloned());
    Ok(volume)
}
