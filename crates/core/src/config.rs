use thiserror::Error;

use crate::Interval;

/// Guard threshold used by [`Config::new`] when `h_min` allows it.
pub const DEFAULT_GUARD_THRESHOLD: f64 = 1e-3;

/// Configuration for a derivative exploration scene.
///
/// Every field is validated on construction, so a `Config` in hand always
/// describes ranges the scene builder can work with: `h` is bounded away from
/// zero and the near-zero step guard sits strictly below that bound.
///
/// Start from [`Config::new`] (or [`Config::default`]) and chain the `with_*`
/// methods to adjust the optional settings. Each of them re-validates.
///
/// # Example
///
/// ```
/// use tangent_core::Config;
///
/// let config = Config::new([0.3, 2.7], [0.01, 2.0])?
///     .with_curve([-0.5, 4.0], 500)?
///     .with_guard_threshold(1e-3)?;
///
/// assert_eq!(config.x_range().max(), 2.7);
/// # Ok::<(), tangent_core::ConfigError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Config {
    x_range: Interval,
    h_range: Interval,
    tangent_half_extent: f64,
    secant_extent: f64,
    guard_threshold: f64,
    initial_x: f64,
    initial_h: f64,
    curve_domain: Interval,
    curve_samples: usize,
}

/// Errors that can occur when validating a scene config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} must be finite")]
    NotFinite(&'static str),

    #[error("h_min must be strictly positive")]
    StepNotPositive,

    #[error("guard_threshold must be non-negative and smaller than h_min")]
    Guard,

    #[error("{0} must be non-negative")]
    NegativeExtent(&'static str),

    #[error("curve_samples must be at least 2")]
    CurveSamples,
}

impl Default for Config {
    fn default() -> Self {
        // Known-good values, unwrap is safe
        Self::new([0.2, 3.0], [0.01, 2.0]).unwrap()
    }
}

impl Config {
    /// Creates a config from the `x` and `h` ranges, with default extents,
    /// initial values and curve sampling.
    ///
    /// The guard threshold is [`DEFAULT_GUARD_THRESHOLD`], lowered to a tenth
    /// of `h_min` for smaller step ranges. Reversed bounds are swapped.
    ///
    /// # Errors
    ///
    /// Returns an error if a bound is not finite or if `h_min` is not
    /// strictly positive.
    pub fn new(x_range: [f64; 2], h_range: [f64; 2]) -> Result<Self, ConfigError> {
        let h_range = Interval::from(h_range);
        Self {
            x_range: x_range.into(),
            h_range,
            tangent_half_extent: 1.5,
            secant_extent: 0.5,
            guard_threshold: DEFAULT_GUARD_THRESHOLD.min(h_range.min() / 10.0),
            initial_x: 1.5,
            initial_h: 1.0,
            curve_domain: Interval::new(-1.0, 4.0),
            curve_samples: 500,
        }
        .validate()
    }

    /// Sets how far the tangent extends on each side of the point, and how
    /// far the secant extends beyond its two sample points.
    ///
    /// # Errors
    ///
    /// Returns an error if either extent is negative or not finite.
    pub fn with_extents(
        mut self,
        tangent_half_extent: f64,
        secant_extent: f64,
    ) -> Result<Self, ConfigError> {
        self.tangent_half_extent = tangent_half_extent;
        self.secant_extent = secant_extent;
        self.validate()
    }

    /// Sets the step size below which the secant slope is taken to be the
    /// tangent slope.
    ///
    /// # Errors
    ///
    /// Returns an error if the threshold is negative, not finite, or not
    /// smaller than `h_min`.
    pub fn with_guard_threshold(mut self, guard_threshold: f64) -> Result<Self, ConfigError> {
        self.guard_threshold = guard_threshold;
        self.validate()
    }

    /// Sets the starting `x` and `h`.
    ///
    /// Values outside their ranges are clamped when a state is created.
    ///
    /// # Errors
    ///
    /// Returns an error if either value is not finite.
    pub fn with_initial(mut self, x: f64, h: f64) -> Result<Self, ConfigError> {
        self.initial_x = x;
        self.initial_h = h;
        self.validate()
    }

    /// Sets the domain and sample count of the cached curve.
    ///
    /// # Errors
    ///
    /// Returns an error if a bound is not finite or fewer than two samples
    /// are requested.
    pub fn with_curve(mut self, domain: [f64; 2], samples: usize) -> Result<Self, ConfigError> {
        self.curve_domain = domain.into();
        self.curve_samples = samples;
        self.validate()
    }

    fn validate(self) -> Result<Self, ConfigError> {
        if !self.x_range.is_finite() {
            return Err(ConfigError::NotFinite("x_range"));
        }
        if !self.h_range.is_finite() {
            return Err(ConfigError::NotFinite("h_range"));
        }
        if self.h_range.min() <= 0.0 {
            return Err(ConfigError::StepNotPositive);
        }
        if !self.guard_threshold.is_finite()
            || self.guard_threshold < 0.0
            || self.guard_threshold >= self.h_range.min()
        {
            return Err(ConfigError::Guard);
        }
        for (name, extent) in [
            ("tangent_half_extent", self.tangent_half_extent),
            ("secant_extent", self.secant_extent),
        ] {
            if !extent.is_finite() {
                return Err(ConfigError::NotFinite(name));
            }
            if extent < 0.0 {
                return Err(ConfigError::NegativeExtent(name));
            }
        }
        if !self.initial_x.is_finite() {
            return Err(ConfigError::NotFinite("initial_x"));
        }
        if !self.initial_h.is_finite() {
            return Err(ConfigError::NotFinite("initial_h"));
        }
        if !self.curve_domain.is_finite() {
            return Err(ConfigError::NotFinite("curve_domain"));
        }
        if self.curve_samples < 2 {
            return Err(ConfigError::CurveSamples);
        }

        Ok(self)
    }

    /// Returns the allowed range of the evaluation point.
    #[must_use]
    pub fn x_range(&self) -> Interval {
        self.x_range
    }

    /// Returns the allowed range of the step size.
    #[must_use]
    pub fn h_range(&self) -> Interval {
        self.h_range
    }

    /// Returns how far the tangent extends on each side of the point.
    #[must_use]
    pub fn tangent_half_extent(&self) -> f64 {
        self.tangent_half_extent
    }

    /// Returns how far the secant extends beyond its sample points.
    #[must_use]
    pub fn secant_extent(&self) -> f64 {
        self.secant_extent
    }

    /// Returns the step size below which the secant slope is not divided out.
    #[must_use]
    pub fn guard_threshold(&self) -> f64 {
        self.guard_threshold
    }

    /// Returns the starting evaluation point.
    #[must_use]
    pub fn initial_x(&self) -> f64 {
        self.initial_x
    }

    /// Returns the starting step size.
    #[must_use]
    pub fn initial_h(&self) -> f64 {
        self.initial_h
    }

    /// Returns the domain of the cached curve.
    #[must_use]
    pub fn curve_domain(&self) -> Interval {
        self.curve_domain
    }

    /// Returns the number of cached curve samples.
    #[must_use]
    pub fn curve_samples(&self) -> usize {
        self.curve_samples
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn default_matches_the_square_explorer() {
        let config = Config::default();

        assert_eq!(config.x_range(), Interval::new(0.2, 3.0));
        assert_eq!(config.h_range(), Interval::new(0.01, 2.0));
        assert_eq!(config.tangent_half_extent(), 1.5);
        assert_eq!(config.secant_extent(), 0.5);
        assert_relative_eq!(config.guard_threshold(), DEFAULT_GUARD_THRESHOLD);
        assert_eq!(config.curve_samples(), 500);
    }

    #[test]
    fn rejects_non_positive_h_min() {
        assert_eq!(
            Config::new([0.0, 1.0], [0.0, 2.0]),
            Err(ConfigError::StepNotPositive)
        );
        assert_eq!(
            Config::new([0.0, 1.0], [-0.5, 2.0]),
            Err(ConfigError::StepNotPositive)
        );
    }

    #[test]
    fn rejects_non_finite_ranges() {
        assert_eq!(
            Config::new([0.0, f64::INFINITY], [0.01, 2.0]),
            Err(ConfigError::NotFinite("x_range"))
        );
        assert_eq!(
            Config::new([0.0, 1.0], [f64::NAN, 2.0]),
            Err(ConfigError::NotFinite("h_range"))
        );
    }

    #[test]
    fn small_h_min_lowers_the_default_guard() {
        let config = Config::new([0.2, 3.0], [1e-4, 2.0]).unwrap();
        assert_relative_eq!(config.guard_threshold(), 1e-5);

        let config = Config::new([0.2, 3.0], [1e-6, 2.0])
            .and_then(|c| c.with_guard_threshold(0.0))
            .unwrap();
        assert_eq!(config.guard_threshold(), 0.0);
        assert_eq!(config.h_range().min(), 1e-6);
    }

    #[test]
    fn guard_must_sit_below_h_min() {
        let config = Config::default();

        assert_eq!(config.with_guard_threshold(0.01), Err(ConfigError::Guard));
        assert_eq!(config.with_guard_threshold(-1e-6), Err(ConfigError::Guard));
        assert!(config.with_guard_threshold(0.0).is_ok());
        assert!(config.with_guard_threshold(0.009).is_ok());
    }

    #[test]
    fn rejects_negative_extents() {
        let config = Config::default();

        assert_eq!(
            config.with_extents(-1.0, 0.5),
            Err(ConfigError::NegativeExtent("tangent_half_extent"))
        );
        assert_eq!(
            config.with_extents(1.5, f64::NAN),
            Err(ConfigError::NotFinite("secant_extent"))
        );
    }

    #[test]
    fn curve_needs_two_samples() {
        let config = Config::default();

        assert_eq!(
            config.with_curve([-1.0, 4.0], 1),
            Err(ConfigError::CurveSamples)
        );
        assert_eq!(
            config.with_curve([-1.0, 4.0], 2).map(|c| c.curve_samples()),
            Ok(2)
        );
    }

    #[test]
    fn reversed_ranges_are_swapped() {
        let config = Config::new([3.0, 0.2], [2.0, 0.01]).unwrap();

        assert_eq!(config.x_range(), Interval::new(0.2, 3.0));
        assert_eq!(config.h_range().min(), 0.01);
    }
}
