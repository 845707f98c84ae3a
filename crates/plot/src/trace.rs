//! Conversion of snapshots into plottable traces.

use tangent_core::{FunctionPair, Interval, Preset, RenderSnapshot, Segment};

/// What a trace depicts, which decides how it is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraceKind {
    Curve,
    Tangent,
    Secant,
    Guide,
    MainPoint,
    SecondPoint,
}

impl TraceKind {
    /// Returns `true` for traces drawn as markers rather than lines.
    #[must_use]
    pub fn is_marker(self) -> bool {
        matches!(self, TraceKind::MainPoint | TraceKind::SecondPoint)
    }

    /// Returns `true` for traces listed in the legend.
    ///
    /// Guides are labeled in place instead.
    #[must_use]
    pub fn in_legend(self) -> bool {
        self != TraceKind::Guide
    }
}

/// A named series of points.
#[derive(Debug, Clone, PartialEq)]
pub struct Trace {
    pub name: String,
    pub kind: TraceKind,
    pub points: Vec<[f64; 2]>,
}

impl Trace {
    fn new(name: impl Into<String>, kind: TraceKind, points: Vec<[f64; 2]>) -> Self {
        Self {
            name: name.into(),
            kind,
            points,
        }
    }

    fn guide(name: String, segment: Segment) -> Self {
        Self::new(
            name,
            TraceKind::Guide,
            vec![segment.start.into(), segment.end.into()],
        )
    }
}

/// Flattens a snapshot into traces, in drawing order.
///
/// The main point comes last so it sits on top of everything else. Secant,
/// guides and second point are only produced while the overlay is shown.
pub fn traces<F: FunctionPair + ?Sized>(snapshot: &RenderSnapshot, function: &F) -> Vec<Trace> {
    let mut traces = vec![
        Trace::new(
            function.label(),
            TraceKind::Curve,
            snapshot.curve.iter().copied().map(Into::into).collect(),
        ),
        Trace::new(
            snapshot.tangent.label.as_str(),
            TraceKind::Tangent,
            vec![snapshot.tangent.p1.into(), snapshot.tangent.p2.into()],
        ),
    ];

    if let (Some(secant), Some(second)) = (&snapshot.secant, snapshot.secondary_point) {
        traces.push(Trace::new(
            secant.label.as_str(),
            TraceKind::Secant,
            vec![secant.p1.into(), secant.p2.into()],
        ));
        traces.push(Trace::guide(
            format!("Δx = {:.2}", snapshot.h),
            snapshot.delta_x,
        ));
        traces.push(Trace::guide(
            format!("Δy = {:.2}", snapshot.delta_y()),
            snapshot.delta_y,
        ));
        traces.push(Trace::new(
            format!("Point ({:.2}, {:.2})", second.x, second.y),
            TraceKind::SecondPoint,
            vec![second.into()],
        ));
    }

    let point = snapshot.main_point;
    traces.push(Trace::new(
        format!("Point ({:.2}, {:.2})", point.x, point.y),
        TraceKind::MainPoint,
        vec![point.into()],
    ));

    traces
}

/// The fixed axis ranges of the plot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub x: Interval,
    pub y: Interval,
}

impl Viewport {
    /// Creates a viewport from x and y ranges.
    #[must_use]
    pub fn new(x: [f64; 2], y: [f64; 2]) -> Self {
        Self {
            x: x.into(),
            y: y.into(),
        }
    }

    /// Returns axis ranges that frame the preset's curve near the
    /// explorable range.
    #[must_use]
    pub fn for_preset(preset: Preset) -> Self {
        match preset {
            Preset::Square => Self::new([-1.0, 4.0], [-1.0, 10.0]),
            Preset::Cube => Self::new([-0.5, 4.5], [-2.0, 20.0]),
        }
    }
}
