/// Differences below this are treated as zero when the tangent is flat.
const NEGLIGIBLE_DIFFERENCE: f64 = 1e-9;

/// How closely the secant slope approximates the tangent slope.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ConvergenceMetric {
    /// The slope of the secant through `x` and `x + h`.
    pub secant_slope: f64,

    /// The derivative at `x`.
    pub tangent_slope: f64,

    /// `|secant_slope - tangent_slope|`.
    pub absolute_difference: f64,

    /// `100 · (1 - absolute_difference / |tangent_slope|)`.
    ///
    /// When the tangent is flat, this is 100 if the difference is negligible
    /// and 0 otherwise. Not clamped: a secant far from the tangent reads
    /// negative.
    pub percent_convergence: f64,
}

impl ConvergenceMetric {
    /// Compares a secant slope against the tangent slope.
    #[must_use]
    pub fn new(secant_slope: f64, tangent_slope: f64) -> Self {
        let absolute_difference = (secant_slope - tangent_slope).abs();
        let percent_convergence = if tangent_slope == 0.0 {
            if absolute_difference <= NEGLIGIBLE_DIFFERENCE {
                100.0
            } else {
                0.0
            }
        } else {
            100.0 * (1.0 - absolute_difference / tangent_slope.abs())
        };

        Self {
            secant_slope,
            tangent_slope,
            absolute_difference,
            percent_convergence,
        }
    }

    /// Buckets the convergence percentage for display.
    #[must_use]
    pub fn level(&self) -> ConvergenceLevel {
        if self.percent_convergence > 95.0 {
            ConvergenceLevel::Converged
        } else if self.percent_convergence > 80.0 {
            ConvergenceLevel::Close
        } else {
            ConvergenceLevel::Far
        }
    }
}

/// A coarse reading of [`ConvergenceMetric::percent_convergence`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ConvergenceLevel {
    /// Above 95%.
    Converged,

    /// Above 80%, up to 95%.
    Close,

    /// 80% or below.
    Far,
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn percent_is_relative_to_tangent_magnitude() {
        let metric = ConvergenceMetric::new(3.01, 3.0);

        assert_relative_eq!(metric.absolute_difference, 0.01, epsilon = 1e-12);
        assert_relative_eq!(metric.percent_convergence, 99.666_666_666, epsilon = 1e-6);
        assert_eq!(metric.level(), ConvergenceLevel::Converged);
    }

    #[test]
    fn negative_tangent_slope_uses_its_magnitude() {
        let metric = ConvergenceMetric::new(-2.2, -2.0);

        assert_relative_eq!(metric.percent_convergence, 90.0, epsilon = 1e-9);
        assert_eq!(metric.level(), ConvergenceLevel::Close);
    }

    #[test]
    fn flat_tangent_with_matching_secant_is_converged() {
        let metric = ConvergenceMetric::new(0.0, 0.0);

        assert_eq!(metric.absolute_difference, 0.0);
        assert_eq!(metric.percent_convergence, 100.0);
    }

    #[test]
    fn flat_tangent_with_distant_secant_is_not_converged() {
        let metric = ConvergenceMetric::new(0.5, 0.0);

        assert_eq!(metric.percent_convergence, 0.0);
        assert_eq!(metric.level(), ConvergenceLevel::Far);
    }

    #[test]
    fn far_secant_reads_negative() {
        let metric = ConvergenceMetric::new(10.0, 2.0);

        assert_relative_eq!(metric.percent_convergence, -300.0);
        assert_eq!(metric.level(), ConvergenceLevel::Far);
    }
}
