use std::{fmt, str::FromStr};

use thiserror::Error;

use crate::Config;

/// A fixed function paired with its analytic derivative.
///
/// Both methods must be total and pure. Values of `x` outside the configured
/// parameter range still evaluate normally; clamping is the job of
/// [`ParameterState`](crate::ParameterState).
pub trait FunctionPair {
    /// Evaluates `f(x)`.
    fn evaluate(&self, x: f64) -> f64;

    /// Evaluates `f'(x)`.
    fn derivative(&self, x: f64) -> f64;

    /// A display label for the function, such as `"f(x) = x²"`.
    fn label(&self) -> &str;

    /// A display label for the derivative, such as `"f'(x) = 2x"`.
    fn derivative_label(&self) -> &str;
}

/// `f(x) = x²`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Square;

impl FunctionPair for Square {
    fn evaluate(&self, x: f64) -> f64 {
        x * x
    }

    fn derivative(&self, x: f64) -> f64 {
        2.0 * x
    }

    fn label(&self) -> &str {
        "f(x) = x²"
    }

    fn derivative_label(&self) -> &str {
        "f'(x) = 2x"
    }
}

/// `f(x) = x³`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cube;

impl FunctionPair for Cube {
    fn evaluate(&self, x: f64) -> f64 {
        x * x * x
    }

    fn derivative(&self, x: f64) -> f64 {
        3.0 * x * x
    }

    fn label(&self) -> &str {
        "f(x) = x³"
    }

    fn derivative_label(&self) -> &str {
        "f'(x) = 3x²"
    }
}

/// A function pair built from two closures.
///
/// The caller is responsible for `derivative` actually being the derivative
/// of `function`; nothing is checked.
///
/// # Example
///
/// ```
/// use tangent_core::{Closure, FunctionPair};
///
/// let sine = Closure::new(f64::sin, f64::cos, "f(x) = sin x", "f'(x) = cos x");
/// assert_eq!(sine.derivative(0.0), 1.0);
/// ```
#[derive(Clone)]
pub struct Closure<F, D> {
    function: F,
    derivative: D,
    label: String,
    derivative_label: String,
}

impl<F, D> Closure<F, D>
where
    F: Fn(f64) -> f64,
    D: Fn(f64) -> f64,
{
    /// Creates a function pair from a function, its derivative and their labels.
    pub fn new(
        function: F,
        derivative: D,
        label: impl Into<String>,
        derivative_label: impl Into<String>,
    ) -> Self {
        Self {
            function,
            derivative,
            label: label.into(),
            derivative_label: derivative_label.into(),
        }
    }
}

impl<F, D> FunctionPair for Closure<F, D>
where
    F: Fn(f64) -> f64,
    D: Fn(f64) -> f64,
{
    fn evaluate(&self, x: f64) -> f64 {
        (self.function)(x)
    }

    fn derivative(&self, x: f64) -> f64 {
        (self.derivative)(x)
    }

    fn label(&self) -> &str {
        &self.label
    }

    fn derivative_label(&self) -> &str {
        &self.derivative_label
    }
}

impl<F, D> fmt::Debug for Closure<F, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Closure")
            .field("label", &self.label)
            .field("derivative_label", &self.derivative_label)
            .finish_non_exhaustive()
    }
}

/// One of the built-in function pairs, selectable by name.
///
/// Each preset also carries the parameter ranges and curve domain that suit
/// its shape (see [`Preset::config`]).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Preset {
    /// `f(x) = x²`
    #[default]
    Square,

    /// `f(x) = x³`
    Cube,
}

/// Returned when parsing a [`Preset`] from an unrecognized name.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown function `{0}`, expected one of: square, cube")]
pub struct UnknownPreset(String);

impl Preset {
    /// All presets, in display order.
    pub const ALL: [Preset; 2] = [Preset::Square, Preset::Cube];

    /// Returns the name used to select this preset.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Preset::Square => "square",
            Preset::Cube => "cube",
        }
    }

    /// Returns the scene config tuned for this preset.
    #[must_use]
    pub fn config(self) -> Config {
        // Known-good values, unwrap is safe
        match self {
            Preset::Square => Config::default(),
            Preset::Cube => Config::new([0.3, 2.7], [0.01, 2.0])
                .and_then(|config| config.with_curve([-0.5, 4.0], 500))
                .unwrap(),
        }
    }
}

impl FunctionPair for Preset {
    fn evaluate(&self, x: f64) -> f64 {
        match self {
            Preset::Square => Square.evaluate(x),
            Preset::Cube => Cube.evaluate(x),
        }
    }

    fn derivative(&self, x: f64) -> f64 {
        match self {
            Preset::Square => Square.derivative(x),
            Preset::Cube => Cube.derivative(x),
        }
    }

    fn label(&self) -> &str {
        match self {
            Preset::Square => Square.label(),
            Preset::Cube => Cube.label(),
        }
    }

    fn derivative_label(&self) -> &str {
        match self {
            Preset::Square => Square.derivative_label(),
            Preset::Cube => Cube.derivative_label(),
        }
    }
}

impl FromStr for Preset {
    type Err = UnknownPreset;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Preset::ALL
            .into_iter()
            .find(|preset| preset.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownPreset(s.to_owned()))
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
