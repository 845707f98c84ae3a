use std::fmt;

use crate::{ConvergenceLevel, FunctionPair, RenderSnapshot};

/// The info panel text for a snapshot, one entry per line.
///
/// Secant lines are only included while the overlay is shown.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Summary {
    pub lines: Vec<String>,
    pub level: ConvergenceLevel,
}

impl Summary {
    /// Describes `snapshot` using the labels of `function`.
    pub fn new<F: FunctionPair + ?Sized>(snapshot: &RenderSnapshot, function: &F) -> Self {
        let point = snapshot.main_point;
        let metric = &snapshot.metric;

        let mut lines = vec![
            format!("Point:  x = {:.2}, f(x) = {:.2}", point.x, point.y),
            format!(
                "{} = {:.2} (tangent slope)",
                function.derivative_label(),
                metric.tangent_slope
            ),
        ];

        if snapshot.shows_secant() {
            lines.push(format!(
                "h = {:.2}, secant slope = {:.2}",
                snapshot.h, metric.secant_slope
            ));
            lines.push(format!("Difference: {:.4}", metric.absolute_difference));
            lines.push(format!("Convergence: {:.2}%", metric.percent_convergence));
        }

        Self {
            lines,
            level: metric.level(),
        }
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.lines.join("\n"))
    }
}
