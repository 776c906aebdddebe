//! Crop-then-pad resizing
//!
//! Brings a frame to an exact target shape without interpolation: axes
//! larger than the target are cropped around the center, then axes
//! smaller than the target are padded around the center.
//!
//! # Examples
//!
//! ```
//! use ifc_core::Matrix;
//! use ifc_transform::{GaussianNoise, ResizeOptions, resize_with_options};
//!
//! let frame = Matrix::new_with_value(50, 20, 1.0).unwrap();
//! let opts = ResizeOptions::new(32, 32).noise(0.0, 0.5);
//! let out = resize_with_options(&frame, &opts, &mut GaussianNoise::seeded(1)).unwrap();
//! assert_eq!(out.dimensions(), (32, 32));
//! ```

use crate::TransformResult;
use crate::crop::crop;
use crate::expand::{expand_with_noise, expand_without_noise};
use crate::noise::{GaussianNoise, NoiseSource};
use ifc_core::Matrix;

/// How padded cells are filled
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PadFill {
    /// Every padded cell gets the same background value
    Constant(f64),
    /// Every padded cell gets an independent draw from `N(mean, sd²)`
    Noise { mean: f64, sd: f64 },
}

impl Default for PadFill {
    fn default() -> Self {
        PadFill::Noise { mean: 0.0, sd: 0.0 }
    }
}

/// Options for [`resize_with_options`]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ResizeOptions {
    /// Target number of rows (0 = keep)
    pub height: u32,
    /// Target number of columns (0 = keep)
    pub width: u32,
    /// Fill for padded cells
    pub fill: PadFill,
}

impl ResizeOptions {
    /// Options for a `height x width` target with the default fill
    pub fn new(height: u32, width: u32) -> Self {
        Self {
            height,
            width,
            ..Default::default()
        }
    }

    /// Pad with a constant background
    pub fn constant(mut self, background: f64) -> Self {
        self.fill = PadFill::Constant(background);
        self
    }

    /// Pad with normal noise
    pub fn noise(mut self, mean: f64, sd: f64) -> Self {
        self.fill = PadFill::Noise { mean, sd };
        self
    }
}

/// Resize a matrix to `height x width` by cropping then padding.
///
/// The output has exactly `height` rows (or the source row count when
/// `height` is 0) and likewise for columns. Any mask on `mat` is carried
/// over, whichever path ran. Noise padding draws from
/// [`GaussianNoise::from_entropy`]; use [`resize_with_options`] to supply a
/// seeded source.
///
/// # Arguments
///
/// * `mat` - Input matrix
/// * `height` - Target number of rows, `0` for no change
/// * `width` - Target number of columns, `0` for no change
/// * `add_noise` - Pad with `N(background, sd²)` draws instead of a constant
/// * `background` - Padding value, or the noise mean when `add_noise` is set
/// * `sd` - Noise standard deviation (ignored without `add_noise`)
///
/// # Errors
///
/// Returns `TransformError::InvalidParameters` for invalid noise
/// parameters when padding with noise is required.
pub fn resize(
    mat: &Matrix,
    height: u32,
    width: u32,
    add_noise: bool,
    background: f64,
    sd: f64,
) -> TransformResult<Matrix> {
    let opts = ResizeOptions::new(height, width);
    let opts = if add_noise {
        opts.noise(background, sd)
    } else {
        opts.constant(background)
    };
    resize_with_options(mat, &opts, &mut GaussianNoise::from_entropy())
}

/// Resize a matrix according to `opts`, drawing padding noise from `noise`.
///
/// See [`resize`] for the shape and mask guarantees.
pub fn resize_with_options<N>(
    mat: &Matrix,
    opts: &ResizeOptions,
    noise: &mut N,
) -> TransformResult<Matrix>
where
    N: NoiseSource + ?Sized,
{
    tracing::debug!(
        rows = mat.rows(),
        cols = mat.cols(),
        height = opts.height,
        width = opts.width,
        fill = ?opts.fill,
        "resize"
    );

    let cropped = crop(mat, opts.height, opts.width)?;
    let mut out = match opts.fill {
        PadFill::Constant(background) => {
            expand_without_noise(&cropped, opts.height, opts.width, background)?
        }
        PadFill::Noise { mean, sd } => {
            expand_with_noise(&cropped, opts.height, opts.width, mean, sd, noise)?
        }
    };
    out.set_mask(mat.mask().cloned());
    Ok(out)
}
