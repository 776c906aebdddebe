//! Random sources for noise padding
//!
//! Padding an acquired frame with a flat background leaves a visible
//! frame edge; padding with noise drawn around the camera background keeps
//! the padded border statistically close to real background pixels.
//!
//! The padding code only sees the [`NoiseSource`] trait, so tests can
//! substitute a deterministic source.

use crate::{TransformError, TransformResult};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand_distr::{Distribution, Normal};

/// Source of normally distributed values
pub trait NoiseSource {
    /// Draw `count` independent values from `N(mean, sd²)`.
    ///
    /// # Errors
    ///
    /// Returns `TransformError::InvalidParameters` if `mean` is not finite
    /// or `sd` is negative or not finite.
    fn normal(&mut self, count: usize, mean: f64, sd: f64) -> TransformResult<Vec<f64>>;
}

impl<N: NoiseSource + ?Sized> NoiseSource for &mut N {
    fn normal(&mut self, count: usize, mean: f64, sd: f64) -> TransformResult<Vec<f64>> {
        (**self).normal(count, mean, sd)
    }
}

/// Validate normal distribution parameters.
pub(crate) fn check_params(mean: f64, sd: f64) -> TransformResult<()> {
    if !mean.is_finite() {
        return Err(TransformError::InvalidParameters(format!(
            "noise mean must be finite, got {mean}"
        )));
    }
    if !sd.is_finite() || sd < 0.0 {
        return Err(TransformError::InvalidParameters(format!(
            "noise standard deviation must be finite and >= 0, got {sd}"
        )));
    }
    Ok(())
}

/// Draw exactly `count` values, rejecting a source that returns fewer or more.
pub(crate) fn draw<N>(noise: &mut N, count: usize, mean: f64, sd: f64) -> TransformResult<Vec<f64>>
where
    N: NoiseSource + ?Sized,
{
    let draws = noise.normal(count, mean, sd)?;
    if draws.len() != count {
        return Err(TransformError::InvalidParameters(format!(
            "noise source returned {} values, expected {count}",
            draws.len()
        )));
    }
    Ok(draws)
}

/// Gaussian noise backed by [`StdRng`]
///
/// # Examples
///
/// ```
/// use ifc_transform::{GaussianNoise, NoiseSource};
///
/// let mut a = GaussianNoise::seeded(7);
/// let mut b = GaussianNoise::seeded(7);
/// assert_eq!(a.normal(4, 10.0, 2.0).unwrap(), b.normal(4, 10.0, 2.0).unwrap());
/// ```
#[derive(Debug)]
pub struct GaussianNoise {
    rng: StdRng,
}

impl GaussianNoise {
    /// Reproducible source: the same seed yields the same draws.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Source seeded from the thread-local generator.
    pub fn from_entropy() -> Self {
        Self::seeded(rand::random())
    }
}

impl NoiseSource for GaussianNoise {
    fn normal(&mut self, count: usize, mean: f64, sd: f64) -> TransformResult<Vec<f64>> {
        check_params(mean, sd)?;
        let dist = Normal::new(mean, sd)
            .map_err(|e| TransformError::InvalidParameters(format!("normal({mean}, {sd}): {e}")))?;
        Ok((0..count).map(|_| dist.sample(&mut self.rng)).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_is_reproducible() {
        let mut a = GaussianNoise::seeded(42);
        let mut b = GaussianNoise::seeded(42);
        let da = a.normal(100, 5.0, 1.5).unwrap();
        let db = b.normal(100, 5.0, 1.5).unwrap();
        assert_eq!(da, db);
        assert_eq!(da.len(), 100);
    }

    #[test]
    fn test_different_seeds_differ() {
        let da = GaussianNoise::seeded(1).normal(16, 0.0, 1.0).unwrap();
        let db = GaussianNoise::seeded(2).normal(16, 0.0, 1.0).unwrap();
        assert_ne!(da, db);
    }

    #[test]
    fn test_zero_sd_returns_mean() {
        let draws = GaussianNoise::seeded(3).normal(10, 12.5, 0.0).unwrap();
        assert!(draws.iter().all(|&v| v == 12.5));
    }

    #[test]
    fn test_sample_statistics() {
        let draws = GaussianNoise::seeded(99).normal(20_000, 100.0, 4.0).unwrap();
        let n = draws.len() as f64;
        let mean = draws.iter().sum::<f64>() / n;
        let var = draws.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;
        assert!((mean - 100.0).abs() < 0.2, "mean = {mean}");
        assert!((var.sqrt() - 4.0).abs() < 0.2, "sd = {}", var.sqrt());
    }

    #[test]
    fn test_invalid_parameters() {
        let mut noise = GaussianNoise::seeded(0);
        assert!(noise.normal(1, 0.0, -1.0).is_err());
        assert!(noise.normal(1, 0.0, f64::NAN).is_err());
        assert!(noise.normal(1, f64::INFINITY, 1.0).is_err());
    }

    #[test]
    fn test_draw_checks_count() {
        struct Short;
        impl NoiseSource for Short {
            fn normal(&mut self, count: usize, mean: f64, _sd: f64) -> TransformResult<Vec<f64>> {
                Ok(vec![mean; count.saturating_sub(1)])
            }
        }

        assert!(matches!(
            draw(&mut Short, 3, 0.0, 1.0),
            Err(TransformError::InvalidParameters(_))
        ));
        assert_eq!(draw(&mut GaussianNoise::seeded(4), 3, 0.0, 1.0).unwrap().len(), 3);
    }

    #[test]
    fn test_zero_count() {
        let draws = GaussianNoise::seeded(0).normal(0, 0.0, 1.0).unwrap();
        assert!(draws.is_empty());
    }
}
