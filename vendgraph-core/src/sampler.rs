//! Distance configuration and sampling.
//!
//! Distances are drawn uniformly from `[min_distance, max_distance)` meters
//! with a fixed number of fractional digits. The whole-meter part and the
//! fractional part are drawn independently so every representable value in
//! the range is equally likely.

use rand::Rng;

use crate::{Result, error::GeneratorError};

/// Default lower bound (inclusive) for sampled distances, in meters.
pub const DEFAULT_MIN_DISTANCE: u32 = 30;
/// Default upper bound (exclusive) for sampled distances, in meters.
pub const DEFAULT_MAX_DISTANCE: u32 = 500;
/// Default number of fractional digits on sampled distances.
pub const DEFAULT_PRECISION: u32 = 2;
/// Largest supported number of fractional digits.
pub const MAX_PRECISION: u32 = 6;

/// Validated range and resolution of generated edge weights.
///
/// # Examples
/// ```
/// use vendgraph_core::DistanceBounds;
///
/// let bounds = DistanceBounds::default();
/// assert_eq!(bounds.min_distance(), 30);
/// assert_eq!(bounds.max_distance(), 500);
/// assert_eq!(bounds.precision(), 2);
/// assert!(bounds.contains(30.0));
/// assert!(!bounds.contains(500.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DistanceBounds {
    min_distance: u32,
    max_distance: u32,
    precision: u32,
}

impl Default for DistanceBounds {
    fn default() -> Self {
        Self {
            min_distance: DEFAULT_MIN_DISTANCE,
            max_distance: DEFAULT_MAX_DISTANCE,
            precision: DEFAULT_PRECISION,
        }
    }
}

impl DistanceBounds {
    /// Validates and constructs distance bounds.
    ///
    /// # Errors
    /// Returns [`GeneratorError::InvalidDistanceBounds`] unless
    /// `0 < min_distance < max_distance`, and
    /// [`GeneratorError::InvalidPrecision`] when `precision` exceeds
    /// [`MAX_PRECISION`].
    ///
    /// # Examples
    /// ```
    /// use vendgraph_core::{DistanceBounds, GeneratorError};
    ///
    /// assert!(DistanceBounds::new(10, 20, 1).is_ok());
    /// assert_eq!(
    ///     DistanceBounds::new(20, 20, 1),
    ///     Err(GeneratorError::InvalidDistanceBounds { min: 20, max: 20 }),
    /// );
    /// ```
    pub fn new(min_distance: u32, max_distance: u32, precision: u32) -> Result<Self> {
        if min_distance == 0 || max_distance <= min_distance {
            return Err(GeneratorError::InvalidDistanceBounds {
                min: min_distance,
                max: max_distance,
            });
        }
        if precision > MAX_PRECISION {
            return Err(GeneratorError::InvalidPrecision {
                got: precision,
                max: MAX_PRECISION,
            });
        }
        Ok(Self {
            min_distance,
            max_distance,
            precision,
        })
    }

    /// Inclusive lower bound in meters.
    #[must_use]
    pub const fn min_distance(&self) -> u32 {
        self.min_distance
    }

    /// Exclusive upper bound in meters.
    #[must_use]
    pub const fn max_distance(&self) -> u32 {
        self.max_distance
    }

    /// Number of fractional digits carried by sampled distances.
    #[must_use]
    pub const fn precision(&self) -> u32 {
        self.precision
    }

    /// Returns `true` when `weight` lies in `[min_distance, max_distance)`.
    #[must_use]
    pub fn contains(&self, weight: f64) -> bool {
        weight >= f64::from(self.min_distance) && weight < f64::from(self.max_distance)
    }

    /// Number of fractional steps per meter, `10^precision`.
    const fn steps_per_meter(&self) -> u32 {
        10_u32.pow(self.precision)
    }
}

/// Draws edge weights within a set of [`DistanceBounds`].
///
/// # Examples
/// ```
/// use rand::{SeedableRng, rngs::SmallRng};
/// use vendgraph_core::{DistanceBounds, DistanceSampler};
///
/// let sampler = DistanceSampler::new(DistanceBounds::default());
/// let mut rng = SmallRng::seed_from_u64(7);
/// let distance = sampler.sample(&mut rng);
/// assert!((30.0..500.0).contains(&distance));
/// assert!(((distance * 100.0).round() - distance * 100.0).abs() < 1e-6);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DistanceSampler {
    bounds: DistanceBounds,
}

impl DistanceSampler {
    /// Creates a sampler drawing from `bounds`.
    #[must_use]
    pub const fn new(bounds: DistanceBounds) -> Self {
        Self { bounds }
    }

    /// Bounds this sampler draws from.
    #[must_use]
    pub const fn bounds(&self) -> &DistanceBounds {
        &self.bounds
    }

    /// Draws one distance from `rng`.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        let meters = rng.gen_range(self.bounds.min_distance..self.bounds.max_distance);
        let steps = self.bounds.steps_per_meter();
        let fraction = rng.gen_range(0..steps);
        f64::from(meters) + f64::from(fraction) / f64::from(steps)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rand::{SeedableRng, rngs::SmallRng};
    use rstest::rstest;

    #[rstest]
    #[case::zero_minimum(0, 10)]
    #[case::empty_range(10, 10)]
    #[case::inverted_range(50, 10)]
    fn new_rejects_invalid_ranges(#[case] min: u32, #[case] max: u32) {
        let err = DistanceBounds::new(min, max, 2).expect_err("range must be rejected");
        assert_eq!(err, GeneratorError::InvalidDistanceBounds { min, max });
    }

    #[rstest]
    fn new_rejects_excessive_precision() {
        let err = DistanceBounds::new(30, 500, MAX_PRECISION + 1).expect_err("precision");
        assert_eq!(
            err,
            GeneratorError::InvalidPrecision {
                got: MAX_PRECISION + 1,
                max: MAX_PRECISION,
            }
        );
    }

    #[rstest]
    #[case(0)]
    #[case(2)]
    #[case(MAX_PRECISION)]
    fn samples_stay_in_range_with_requested_resolution(#[case] precision: u32) {
        let bounds = DistanceBounds::new(30, 500, precision).expect("bounds are valid");
        let sampler = DistanceSampler::new(bounds);
        let mut rng = SmallRng::seed_from_u64(1234);
        let scale = 10_f64.powi(i32::try_from(precision).expect("small precision"));
        for _ in 0..2_000 {
            let distance = sampler.sample(&mut rng);
            assert!(bounds.contains(distance), "{distance} escaped the bounds");
            let scaled = distance * scale;
            assert!((scaled.round() - scaled).abs() < 1e-6, "{distance} has extra digits");
        }
    }

    #[rstest]
    fn samples_cover_the_whole_range() {
        let bounds = DistanceBounds::new(1, 3, 1).expect("bounds are valid");
        let sampler = DistanceSampler::new(bounds);
        let mut rng = SmallRng::seed_from_u64(99);
        let samples: Vec<f64> = (0..1_000).map(|_| sampler.sample(&mut rng)).collect();
        assert!(samples.iter().any(|value| *value < 1.5));
        assert!(samples.iter().any(|value| *value >= 2.5));
        assert!(samples.iter().all(|value| (1.0..3.0).contains(value)));
    }
}
