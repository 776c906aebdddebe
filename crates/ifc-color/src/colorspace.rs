//! Color space conversion
//!
//! HSV -> RGB using the hexagonal decomposition of Foley and Van Dam
//! (see also Alvy Ray Smith, "Color Gamut Transform Pairs", SIGGRAPH '78).
//! All components are `f64` in `[0, 1]`; a hue of `1.0` is the same color
//! as `0.0`.

use crate::{ColorError, ColorResult};

/// HSV color representation
///
/// - `h`: Hue in range [0.0, 1.0] (where 1.0 wraps to 0.0)
/// - `s`: Saturation in range [0.0, 1.0]
/// - `v`: Value in range [0.0, 1.0]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Hsv {
    pub h: f64,
    pub s: f64,
    pub v: f64,
}

impl Hsv {
    /// Create a new HSV color
    pub fn new(h: f64, s: f64, v: f64) -> Self {
        Self { h, s, v }
    }

    /// Returns `true` if every component lies in `[0, 1]`.
    ///
    /// NaN components are never valid.
    pub fn is_valid(&self) -> bool {
        [self.h, self.s, self.v]
            .iter()
            .all(|c| (0.0..=1.0).contains(c))
    }

    /// Convert to RGB. See [`hsv_to_rgb`].
    pub fn to_rgb(self) -> ColorResult<Rgb> {
        hsv_to_rgb(self)
    }
}

/// RGB color with components in [0.0, 1.0]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Rgb {
    /// Create a new RGB color
    pub fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Components as `[r, g, b]`
    pub fn to_array(self) -> [f64; 3] {
        [self.r, self.g, self.b]
    }
}

/// Convert HSV values to RGB
///
/// With `t = 6h`, the hue sector is `floor(t) mod 6` and `f = t - floor(t)`.
/// From `p = v(1 - s)`, `q = v(1 - sf)` and `t = v(1 - s(1 - f))` the sector
/// picks `(v,t,p)`, `(q,v,p)`, `(p,v,t)`, `(p,q,v)`, `(t,p,v)` or `(v,p,q)`.
///
/// # Errors
///
/// Returns `ColorError::InvalidInput` if any component is outside
/// `[0, 1]` (or NaN). Out-of-range values are never clamped.
///
/// # Examples
///
/// ```
/// use ifc_color::{Hsv, Rgb, hsv_to_rgb};
///
/// // Saturation 0 is gray
/// assert_eq!(hsv_to_rgb(Hsv::new(0.3, 0.0, 0.4)).unwrap(), Rgb::new(0.4, 0.4, 0.4));
/// // Hue 0, full saturation is pure red
/// assert_eq!(hsv_to_rgb(Hsv::new(0.0, 1.0, 1.0)).unwrap(), Rgb::new(1.0, 0.0, 0.0));
/// assert!(hsv_to_rgb(Hsv::new(1.01, 0.5, 0.5)).is_err());
/// ```
pub fn hsv_to_rgb(hsv: Hsv) -> ColorResult<Rgb> {
    if !hsv.is_valid() {
        return Err(ColorError::InvalidInput {
            h: hsv.h,
            s: hsv.s,
            v: hsv.v,
        });
    }
    let Hsv { h, s, v } = hsv;

    let scaled = h * 6.0;
    let whole = scaled.floor();
    let f = scaled - whole;
    let p = v * (1.0 - s);
    let q = v * (1.0 - s * f);
    let t = v * (1.0 - s * (1.0 - f));

    let (r, g, b) = match (whole as i64) % 6 {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        5 => (v, p, q),
        sector => return Err(ColorError::Internal(sector)),
    };
    Ok(Rgb { r, g, b })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rgb(h: f64, s: f64, v: f64) -> Rgb {
        hsv_to_rgb(Hsv::new(h, s, v)).unwrap()
    }

    fn assert_close(actual: Rgb, expected: (f64, f64, f64)) {
        let (r, g, b) = expected;
        assert!(
            (actual.r - r).abs() < 1e-12 && (actual.g - g).abs() < 1e-12 && (actual.b - b).abs() < 1e-12,
            "{actual:?} != {expected:?}"
        );
    }

    #[test]
    fn test_default_is_black() {
        assert_eq!(rgb(0.0, 0.0, 0.0), Rgb::default());
        assert_eq!(Hsv::default().to_rgb().unwrap(), Rgb::new(0.0, 0.0, 0.0));
    }

    #[test]
    fn test_zero_saturation_is_gray() {
        for v in [0.0, 0.1, 0.5, 0.77, 1.0] {
            assert_eq!(rgb(0.0, 0.0, v), Rgb::new(v, v, v));
        }
    }

    #[test]
    fn test_primary_and_secondary_colors() {
        assert_close(rgb(0.0, 1.0, 1.0), (1.0, 0.0, 0.0));
        assert_close(rgb(1.0 / 6.0, 1.0, 1.0), (1.0, 1.0, 0.0));
        assert_close(rgb(2.0 / 6.0, 1.0, 1.0), (0.0, 1.0, 0.0));
        assert_close(rgb(0.5, 1.0, 1.0), (0.0, 1.0, 1.0));
        assert_close(rgb(4.0 / 6.0, 1.0, 1.0), (0.0, 0.0, 1.0));
        assert_close(rgb(5.0 / 6.0, 1.0, 1.0), (1.0, 0.0, 1.0));
    }

    #[test]
    fn test_hue_one_wraps_to_red() {
        assert_eq!(rgb(1.0, 1.0, 1.0), rgb(0.0, 1.0, 1.0));
        assert_eq!(rgb(1.0, 0.4, 0.6), rgb(0.0, 0.4, 0.6));
    }

    #[test]
    fn test_each_sector_formula() {
        // h = 0.25 -> t = 1.5, sector 1, f = 0.5
        let (s, v) = (0.5, 0.8);
        let p = v * (1.0 - s);
        let q = v * (1.0 - s * 0.5);
        assert_close(rgb(0.25, s, v), (q, v, p));

        // h = 0.75 -> t = 4.5, sector 4, f = 0.5
        let t = v * (1.0 - s * 0.5);
        assert_close(rgb(0.75, s, v), (t, p, v));
    }

    #[test]
    fn test_out_of_range_rejected() {
        for (h, s, v) in [
            (-0.01, 0.5, 0.5),
            (1.01, 0.5, 0.5),
            (0.5, -0.1, 0.5),
            (0.5, 1.5, 0.5),
            (0.5, 0.5, -1.0),
            (0.5, 0.5, 2.0),
            (f64::NAN, 0.5, 0.5),
        ] {
            let err = hsv_to_rgb(Hsv::new(h, s, v)).unwrap_err();
            assert!(matches!(err, ColorError::InvalidInput { .. }), "{h} {s} {v}");
            assert!(err.to_string().starts_with("invalid hsv color"));
        }
    }

    #[test]
    fn test_components_stay_in_unit_range() {
        for hi in 0..=20 {
            for si in 0..=4 {
                let c = rgb(hi as f64 / 20.0, si as f64 / 4.0, 0.9);
                for x in c.to_array() {
                    assert!((0.0..=1.0).contains(&x), "{c:?}");
                }
            }
        }
    }
}
