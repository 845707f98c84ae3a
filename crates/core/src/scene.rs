use std::sync::Arc;

use tracing::debug;

use crate::{
    Config, ConvergenceMetric, FunctionPair, LineSegment, ParameterState, Point, Preset, Segment,
};

/// Everything needed to draw one frame of the exploration.
///
/// A snapshot is rebuilt from scratch on every parameter change, except for
/// `curve`, which is sampled once per [`Scene`] and shared by reference.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct RenderSnapshot {
    /// The sampled curve, in increasing `x`.
    pub curve: Arc<[Point]>,

    /// The tangent at the evaluation point.
    pub tangent: LineSegment,

    /// The secant through both sample points, if the overlay is shown.
    pub secant: Option<LineSegment>,

    /// `(x, f(x))`.
    pub main_point: Point,

    /// `(x + h, f(x + h))`, if the overlay is shown.
    pub secondary_point: Option<Point>,

    /// Horizontal run from the main point to below or above the second one.
    pub delta_x: Segment,

    /// Vertical rise up (or down) to the second point.
    pub delta_y: Segment,

    /// Secant against tangent slope.
    pub metric: ConvergenceMetric,

    /// The step size the snapshot was built with.
    pub h: f64,
}

impl RenderSnapshot {
    /// Returns `f(x + h) - f(x)`.
    #[must_use]
    pub fn delta_y(&self) -> f64 {
        self.delta_y.rise()
    }

    /// Returns `true` if the secant overlay is shown.
    #[must_use]
    pub fn shows_secant(&self) -> bool {
        self.secant.is_some()
    }
}

/// A fixed function, its config and its cached curve.
///
/// [`Scene::build`] turns a [`ParameterState`] into a [`RenderSnapshot`]. It
/// holds no mutable state, so one scene can serve any number of states.
#[derive(Debug, Clone)]
pub struct Scene<F> {
    function: F,
    config: Config,
    curve: Arc<[Point]>,
}

impl<F: FunctionPair> Scene<F> {
    /// Creates a scene and samples its curve.
    pub fn new(function: F, config: Config) -> Self {
        let curve = sample_curve(&function, &config);
        debug!(
            function = function.label(),
            samples = curve.len(),
            "sampled curve"
        );
        Self {
            function,
            config,
            curve,
        }
    }

    /// Returns the function pair.
    pub fn function(&self) -> &F {
        &self.function
    }

    /// Returns the config.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Returns the cached curve.
    pub fn curve(&self) -> &Arc<[Point]> {
        &self.curve
    }

    /// Returns a fresh state at the config's initial values.
    pub fn initial_state(&self) -> ParameterState {
        ParameterState::new(&self.config)
    }

    /// Returns the slope of the secant through `x` and `x + h`.
    ///
    /// Below the guard threshold the quotient is not formed and the tangent
    /// slope is returned instead, so the result never depends on dividing
    /// by a vanishing `h`.
    pub fn secant_slope(&self, x: f64, h: f64) -> f64 {
        if h < self.config.guard_threshold() {
            return self.function.derivative(x);
        }
        (self.function.evaluate(x + h) - self.function.evaluate(x)) / h
    }

    /// Builds the snapshot for `state`.
    ///
    /// `state` must come from this scene's config (or one with the same
    /// ranges). Passing an out-of-range state is a bug in the caller.
    pub fn build(&self, state: &ParameterState) -> RenderSnapshot {
        let config = &self.config;
        let (x, h) = (state.x(), state.h());
        debug_assert!(config.x_range().contains(x), "x = {x} is out of range");
        debug_assert!(config.h_range().contains(h), "h = {h} is out of range");

        let main_point = Point::on(&self.function, x);
        let tangent_slope = self.function.derivative(x);

        let half = config.tangent_half_extent();
        let tangent =
            LineSegment::through(main_point, tangent_slope, [x - half, x + half], "Tangent");

        let second = Point::on(&self.function, x + h);
        let secant_slope = self.secant_slope(x, h);

        let corner = Point::new(second.x, main_point.y);
        let delta_x = Segment::new(main_point, corner);
        let delta_y = Segment::new(corner, second);

        let metric = ConvergenceMetric::new(secant_slope, tangent_slope);

        let (secant, secondary_point) = if state.show_secant() {
            let extent = config.secant_extent();
            let span = [x - extent, second.x + extent];
            let secant = LineSegment::through(main_point, secant_slope, span, "Secant");
            (Some(secant), Some(second))
        } else {
            (None, None)
        };

        debug!(
            x,
            h,
            tangent_slope,
            secant_slope,
            difference = metric.absolute_difference,
            "built snapshot"
        );

        RenderSnapshot {
            curve: Arc::clone(&self.curve),
            tangent,
            secant,
            main_point,
            secondary_point,
            delta_x,
            delta_y,
            metric,
            h,
        }
    }
}

impl Scene<Preset> {
    /// Creates a scene for a preset with its tuned config.
    pub fn from_preset(preset: Preset) -> Self {
        Self::new(preset, preset.config())
    }
}

#[allow(clippy::cast_precision_loss)]
fn sample_curve<F: FunctionPair>(function: &F, config: &Config) -> Arc<[Point]> {
    let domain = config.curve_domain();
    let last = (config.curve_samples() - 1) as f64;
    (0..config.curve_samples())
        .map(|i| {
            let x = domain.min() + domain.width() * (i as f64 / last);
            Point::on(function, x)
        })
        .collect()
}
