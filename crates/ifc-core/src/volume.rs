//! ColorVolume - Three-plane RGB rendering of a matrix
//!
//! A `ColorVolume` has shape `rows x cols x 3`. Planes are stored one
//! after another in R, G, B order; each plane is row-major with the same
//! shape as the matrix it was rendered from.

use crate::error::{Error, Result};
use crate::matrix::{Mask, Matrix};

/// Plane selector for [`ColorVolume`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    Red,
    Green,
    Blue,
}

impl Channel {
    /// All channels in plane order.
    pub const ALL: [Channel; 3] = [Channel::Red, Channel::Green, Channel::Blue];

    /// Plane index (0 = red, 1 = green, 2 = blue).
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Channel::Red => 0,
            Channel::Green => 1,
            Channel::Blue => 2,
        }
    }
}

/// RGB volume with components in `[0, 1]`
#[derive(Debug, Clone, PartialEq)]
pub struct ColorVolume {
    rows: u32,
    cols: u32,
    /// R plane, then G plane, then B plane
    data: Vec<f64>,
    mask: Option<Mask>,
}

impl ColorVolume {
    /// Build a volume from three planes of identical shape.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidParameter` if the plane shapes differ.
    pub fn from_planes(red: Matrix, green: Matrix, blue: Matrix) -> Result<Self> {
        let dims = red.dimensions();
        for plane in [&green, &blue] {
            if plane.dimensions() != dims {
                return Err(Error::InvalidParameter(format!(
                    "plane shape {}x{} differs from {}x{}",
                    plane.rows(),
                    plane.cols(),
                    dims.0,
                    dims.1
                )));
            }
        }
        let mut data = red.into_data();
        data.extend_from_slice(green.data());
        data.extend_from_slice(blue.data());
        Ok(ColorVolume {
            rows: dims.0,
            cols: dims.1,
            data,
            mask: None,
        })
    }

    /// Build a volume from plane-major data (`rows * cols * 3` values).
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidDimension` for a zero dimension and
    /// `Error::DataLength` if the data does not hold exactly three planes.
    pub fn from_data(rows: u32, cols: u32, data: Vec<f64>) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(Error::InvalidDimension { rows, cols });
        }
        if data.len() != (rows as usize) * (cols as usize) * 3 {
            return Err(Error::DataLength {
                len: data.len(),
                rows,
                cols,
            });
        }
        Ok(ColorVolume {
            rows,
            cols,
            data,
            mask: None,
        })
    }

    #[inline]
    pub fn rows(&self) -> u32 {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> u32 {
        self.cols
    }

    /// Shape as `(rows, cols, 3)`.
    #[inline]
    pub fn shape(&self) -> (u32, u32, u32) {
        (self.rows, self.cols, 3)
    }

    #[inline]
    fn plane_len(&self) -> usize {
        (self.rows as usize) * (self.cols as usize)
    }

    /// One plane as a row-major slice.
    pub fn plane(&self, channel: Channel) -> &[f64] {
        let len = self.plane_len();
        let start = channel.index() * len;
        &self.data[start..start + len]
    }

    /// Raw plane-major data.
    pub fn data(&self) -> &[f64] {
        &self.data
    }

    /// Component of `channel` at `(row, col)`.
    pub fn get(&self, row: u32, col: u32, channel: Channel) -> Result<f64> {
        if row >= self.rows || col >= self.cols {
            return Err(Error::IndexOutOfBounds {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            });
        }
        let idx = (row as usize) * (self.cols as usize) + col as usize;
        Ok(self.plane(channel)[idx])
    }

    /// `[r, g, b]` at `(row, col)`.
    pub fn pixel(&self, row: u32, col: u32) -> Result<[f64; 3]> {
        Ok([
            self.get(row, col, Channel::Red)?,
            self.get(row, col, Channel::Green)?,
            self.get(row, col, Channel::Blue)?,
        ])
    }

    /// Pixel-interleaved copy: `[r, g, b, r, g, b, ...]` in row-major
    /// pixel order.
    pub fn to_interleaved(&self) -> Vec<f64> {
        let len = self.plane_len();
        let (r, rest) = self.data.split_at(len);
        let (g, b) = rest.split_at(len);
        let mut out = Vec::with_capacity(len * 3);
        for i in 0..len {
            out.extend_from_slice(&[r[i], g[i], b[i]]);
        }
        out
    }

    /// Pixel-interleaved 8-bit copy for display.
    ///
    /// Each component is scaled by 255, rounded and clamped to `0..=255`.
    pub fn to_rgb8(&self) -> Vec<u8> {
        self.to_interleaved()
            .into_iter()
            .map(|v| (v * 255.0).round().clamp(0.0, 255.0) as u8)
            .collect()
    }

    /// The attached mask, if any.
    #[inline]
    pub fn mask(&self) -> Option<&Mask> {
        self.mask.as_ref()
    }

    /// Attach (or clear) the mask.
    pub fn set_mask(&mut self, mask: Option<Mask>) {
        self.mask = mask;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn planes() -> (Matrix, Matrix, Matrix) {
        (
            Matrix::from_rows(&[[0.1, 0.2], [0.3, 0.4]]).unwrap(),
            Matrix::from_rows(&[[0.5, 0.6], [0.7, 0.8]]).unwrap(),
            Matrix::from_rows(&[[0.0, 1.0], [1.0, 0.0]]).unwrap(),
        )
    }

    #[test]
    fn test_from_planes_layout() {
        let (r, g, b) = planes();
        let vol = ColorVolume::from_planes(r, g, b).unwrap();
        assert_eq!(vol.shape(), (2, 2, 3));
        assert_eq!(vol.plane(Channel::Green), &[0.5, 0.6, 0.7, 0.8]);
        assert_eq!(vol.get(1, 0, Channel::Red).unwrap(), 0.3);
        assert_eq!(vol.pixel(0, 1).unwrap(), [0.2, 0.6, 1.0]);
        assert!(vol.get(2, 0, Channel::Blue).is_err());
    }

    #[test]
    fn test_from_planes_shape_mismatch() {
        let (r, g, _) = planes();
        let b = Matrix::new(1, 2).unwrap();
        assert!(ColorVolume::from_planes(r, g, b).is_err());
    }

    #[test]
    fn test_interleaved_and_rgb8() {
        let vol = ColorVolume::from_data(1, 2, vec![0.0, 1.0, 0.5, 0.5, 1.0, 0.0]).unwrap();
        assert_eq!(vol.to_interleaved(), vec![0.0, 0.5, 1.0, 1.0, 0.5, 0.0]);
        assert_eq!(vol.to_rgb8(), vec![0, 128, 255, 255, 128, 0]);
    }

    #[test]
    fn test_from_data_wrong_length() {
        assert!(ColorVolume::from_data(2, 2, vec![0.0; 4]).is_err());
        assert!(ColorVolume::from_data(0, 2, vec![]).is_err());
    }
}
