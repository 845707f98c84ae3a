use tracing::{trace, warn};

use crate::{Config, Interval};

/// The user-adjustable parameters of a scene.
///
/// `x` and `h` always lie within the ranges of the [`Config`] the state was
/// created from. The only way to change them is through [`set_x`] and
/// [`set_h`], which clamp out-of-range requests instead of rejecting them.
///
/// Each control surface owns its own state. Nothing is shared between
/// sessions.
///
/// [`set_x`]: ParameterState::set_x
/// [`set_h`]: ParameterState::set_h
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParameterState {
    x: f64,
    h: f64,
    show_secant: bool,
    x_range: Interval,
    h_range: Interval,
}

impl ParameterState {
    /// Creates a state at the config's initial values with the secant shown.
    #[must_use]
    pub fn new(config: &Config) -> Self {
        let x_range = config.x_range();
        let h_range = config.h_range();
        Self {
            x: x_range.clamp(config.initial_x()),
            h: h_range.clamp(config.initial_h()),
            show_secant: true,
            x_range,
            h_range,
        }
    }

    /// Returns the evaluation point.
    #[must_use]
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Returns the step size.
    #[must_use]
    pub fn h(&self) -> f64 {
        self.h
    }

    /// Returns `true` if the secant overlay is visible.
    #[must_use]
    pub fn show_secant(&self) -> bool {
        self.show_secant
    }

    /// Returns the range `x` is clamped to.
    #[must_use]
    pub fn x_range(&self) -> Interval {
        self.x_range
    }

    /// Returns the range `h` is clamped to.
    #[must_use]
    pub fn h_range(&self) -> Interval {
        self.h_range
    }

    /// Moves the evaluation point, clamping into range.
    ///
    /// A NaN request is ignored.
    pub fn set_x(&mut self, value: f64) {
        if let Some(x) = clamp_request("x", value, self.x_range) {
            self.x = x;
        }
    }

    /// Changes the step size, clamping into range.
    ///
    /// A NaN request is ignored.
    pub fn set_h(&mut self, value: f64) {
        if let Some(h) = clamp_request("h", value, self.h_range) {
            self.h = h;
        }
    }

    /// Flips the secant overlay visibility.
    pub fn toggle_secant_visibility(&mut self) {
        self.show_secant = !self.show_secant;
    }

    /// Shows or hides the secant overlay.
    pub fn set_secant_visible(&mut self, visible: bool) {
        self.show_secant = visible;
    }
}

fn clamp_request(parameter: &'static str, value: f64, range: Interval) -> Option<f64> {
    if value.is_nan() {
        warn!(parameter, "ignoring NaN parameter request");
        return None;
    }

    let clamped = range.clamp(value);
    if clamped != value {
        trace!(parameter, requested = value, clamped, "clamped parameter request");
    }
    Some(clamped)
}

#[cfg(test)]
mod tests {
    use super::*;

    use proptest::prelude::*;

    fn state() -> ParameterState {
        ParameterState::new(&Config::default())
    }

    #[test]
    fn starts_at_initial_values() {
        let state = state();

        assert_eq!(state.x(), 1.5);
        assert_eq!(state.h(), 1.0);
        assert!(state.show_secant());
    }

    #[test]
    fn initial_values_are_clamped() {
        let config = Config::default().with_initial(10.0, 0.0).unwrap();
        let state = ParameterState::new(&config);

        assert_eq!(state.x(), 3.0);
        assert_eq!(state.h(), 0.01);
    }

    #[test]
    fn set_h_never_reaches_zero() {
        let mut state = state();

        state.set_h(0.0);
        assert_eq!(state.h(), 0.01);

        state.set_h(-3.0);
        assert_eq!(state.h(), 0.01);

        state.set_h(f64::NEG_INFINITY);
        assert_eq!(state.h(), 0.01);
    }

    #[test]
    fn nan_requests_leave_state_unchanged() {
        let mut state = state();
        let before = state;

        state.set_x(f64::NAN);
        state.set_h(f64::NAN);

        assert_eq!(state, before);
    }

    #[test]
    fn toggle_flips_visibility() {
        let mut state = state();

        state.toggle_secant_visibility();
        assert!(!state.show_secant());

        state.toggle_secant_visibility();
        assert!(state.show_secant());

        state.set_secant_visible(false);
        state.set_secant_visible(false);
        assert!(!state.show_secant());
    }

    #[test]
    fn setters_are_independent() {
        let mut state = state();

        state.set_x(2.0);
        state.set_h(0.25);
        state.set_x(0.5);

        assert_eq!(state.x(), 0.5);
        assert_eq!(state.h(), 0.25);
    }

    proptest! {
        #[test]
        fn set_x_obeys_clamping_law(v in -1e6_f64..1e6) {
            let mut state = state();
            state.set_x(v);
            prop_assert_eq!(state.x(), v.clamp(0.2, 3.0));
        }

        #[test]
        fn set_h_obeys_clamping_law(v in -1e6_f64..1e6) {
            let mut state = state();
            state.set_h(v);
            prop_assert_eq!(state.h(), v.clamp(0.01, 2.0));
        }

        #[test]
        fn setters_are_idempotent(x in -10.0_f64..10.0, h in -10.0_f64..10.0) {
            let mut once = state();
            once.set_x(x);
            once.set_h(h);

            let mut twice = once;
            twice.set_x(x);
            twice.set_h(h);

            prop_assert_eq!(once, twice);
        }
    }
}
