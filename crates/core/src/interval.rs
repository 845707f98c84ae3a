/// A closed interval `[min, max]` on the real line.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Interval {
    min: f64,
    max: f64,
}

impl Interval {
    /// Creates an interval from two bounds.
    ///
    /// If the bounds are reversed, they are automatically swapped.
    #[must_use]
    pub fn new(a: f64, b: f64) -> Self {
        let (min, max) = if a <= b { (a, b) } else { (b, a) };
        Self { min, max }
    }

    /// Returns the lower bound.
    #[must_use]
    pub fn min(&self) -> f64 {
        self.min
    }

    /// Returns the upper bound.
    #[must_use]
    pub fn max(&self) -> f64 {
        self.max
    }

    /// Returns the width of the interval.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.max - self.min
    }

    /// Returns `true` if `value` lies within the interval, bounds included.
    #[must_use]
    pub fn contains(&self, value: f64) -> bool {
        self.min <= value && value <= self.max
    }

    /// Returns `true` if both bounds are finite.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.min.is_finite() && self.max.is_finite()
    }

    /// Clamps `value` into the interval.
    ///
    /// A NaN `value` is returned unchanged.
    #[must_use]
    pub fn clamp(&self, value: f64) -> f64 {
        if value < self.min {
            self.min
        } else if value > self.max {
            self.max
        } else {
            value
        }
    }
}

impl From<[f64; 2]> for Interval {
    fn from([a, b]: [f64; 2]) -> Self {
        Self::new(a, b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_are_ordered_on_construction() {
        let interval = Interval::new(3.0, -1.0);

        assert_eq!(interval.min(), -1.0);
        assert_eq!(interval.max(), 3.0);
        assert_eq!(interval.width(), 4.0);
    }

    #[test]
    fn clamp_pins_values_to_the_nearest_bound() {
        let interval = Interval::from([0.2, 3.0]);

        assert_eq!(interval.clamp(-5.0), 0.2);
        assert_eq!(interval.clamp(1.5), 1.5);
        assert_eq!(interval.clamp(f64::INFINITY), 3.0);
        assert_eq!(interval.clamp(f64::NEG_INFINITY), 0.2);
    }

    #[test]
    fn contains_includes_both_bounds() {
        let interval = Interval::new(0.01, 2.0);

        assert!(interval.contains(0.01));
        assert!(interval.contains(2.0));
        assert!(!interval.contains(0.0));
        assert!(!interval.contains(f64::NAN));
    }
}
