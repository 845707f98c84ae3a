//! Core types for exploring the derivative as the limit of secant slopes.
//!
//! A user moves an evaluation point `x` and shrinks a step size `h`. After
//! each change, the tangent line, the secant line, both sample points, the
//! rise-over-run guides and a convergence metric are rebuilt as one immutable
//! [`RenderSnapshot`] that any presentation adapter can draw.
//!
//! - [`FunctionPair`]: a fixed function and its analytic derivative
//! - [`Config`]: validated ranges, extents and the near-zero step guard
//! - [`ParameterState`]: the clamped `x`, `h` and secant visibility
//! - [`Scene`]: builds snapshots as a pure function of a state
//! - [`Explorer`]: a scene bundled with the one state an adapter owns
//! - [`Summary`]: the info panel text for a snapshot
//!
//! # Example
//!
//! ```
//! use tangent_core::{Config, Cube, Explorer, Scene};
//!
//! let mut explorer = Explorer::new(Scene::new(Cube, Config::default()));
//! explorer.set_x(1.5);
//! explorer.set_h(1.0);
//!
//! let snapshot = explorer.build();
//! assert_eq!(snapshot.metric.tangent_slope, 6.75);
//! assert_eq!(snapshot.metric.secant_slope, 12.25);
//! ```

mod config;
mod explorer;
mod function;
mod geometry;
mod interval;
mod metric;
mod scene;
mod state;
mod summary;

pub use config::{Config, ConfigError, DEFAULT_GUARD_THRESHOLD};
pub use explorer::Explorer;
pub use function::{Closure, Cube, FunctionPair, Preset, Square, UnknownPreset};
pub use geometry::{LineSegment, Point, Segment};
pub use interval::Interval;
pub use metric::{ConvergenceLevel, ConvergenceMetric};
pub use scene::{RenderSnapshot, Scene};
pub use state::ParameterState;
pub use summary::Summary;
