use crate::FunctionPair;

/// A point in the plane.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// Creates a new point.
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Samples the function at `x`, giving `(x, f(x))`.
    #[must_use]
    pub fn on<F: FunctionPair + ?Sized>(function: &F, x: f64) -> Self {
        Self::new(x, function.evaluate(x))
    }
}

impl From<Point> for [f64; 2] {
    fn from(point: Point) -> Self {
        [point.x, point.y]
    }
}

/// A labeled line through a point, cut to a finite horizontal extent.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct LineSegment {
    /// The left end.
    pub p1: Point,

    /// The right end.
    pub p2: Point,

    /// The slope of the line.
    pub slope: f64,

    /// A legend label, such as `"Tangent (slope = 6.75)"`.
    pub label: String,
}

impl LineSegment {
    /// Builds the segment of the line through `anchor` with `slope` that
    /// spans `[x1, x2]`.
    ///
    /// End points come from the point-slope form, not from the curve.
    #[must_use]
    pub fn through(anchor: Point, slope: f64, [x1, x2]: [f64; 2], name: &str) -> Self {
        let at = |x: f64| Point::new(x, anchor.y + slope * (x - anchor.x));
        Self {
            p1: at(x1),
            p2: at(x2),
            slope,
            label: format!("{name} (slope = {slope:.2})"),
        }
    }
}

/// An unlabeled guide segment between two points.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Segment {
    pub start: Point,
    pub end: Point,
}

impl Segment {
    /// Creates a new segment.
    #[must_use]
    pub fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    /// Returns the signed horizontal run, `end.x - start.x`.
    #[must_use]
    pub fn run(&self) -> f64 {
        self.end.x - self.start.x
    }

    /// Returns the signed vertical rise, `end.y - start.y`.
    #[must_use]
    pub fn rise(&self) -> f64 {
        self.end.y - self.start.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::Square;

    #[test]
    fn point_on_samples_the_function() {
        assert_eq!(Point::on(&Square, 3.0), Point::new(3.0, 9.0));
    }

    #[test]
    fn line_uses_point_slope_form() {
        let line = LineSegment::through(Point::new(1.0, 1.0), 2.0, [-0.5, 2.5], "Tangent");

        assert_eq!(line.p1, Point::new(-0.5, -2.0));
        assert_eq!(line.p2, Point::new(2.5, 4.0));
        assert_eq!(line.slope, 2.0);
        assert_eq!(line.label, "Tangent (slope = 2.00)");
    }

    #[test]
    fn segment_rise_and_run() {
        let segment = Segment::new(Point::new(1.5, 3.375), Point::new(2.5, 15.625));

        assert_eq!(segment.run(), 1.0);
        assert_eq!(segment.rise(), 12.25);
    }
}
