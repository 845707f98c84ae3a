//! Desktop window for exploring tangent and secant lines.
//!
//! [`ExplorerApp`] is an egui application that drives a
//! [`tangent_core::Explorer`] from two sliders and a checkbox, and draws each
//! snapshot with `egui_plot`. Snapshot-to-series conversion lives in
//! [`traces`] so it can be tested without opening a window.

mod app;
mod trace;

pub use app::ExplorerApp;
pub use trace::{Trace, TraceKind, Viewport, traces};
