use eframe::egui::{self, Color32, Slider};
use egui_plot::{Legend, Line, LineStyle, Plot, PlotBounds, PlotPoint, PlotPoints, Points, Text};
use tangent_core::{ConvergenceLevel, Explorer, FunctionPair, RenderSnapshot, Summary};

use crate::{Trace, TraceKind, Viewport, traces};

const BLUE: Color32 = Color32::from_rgb(0x3B, 0x82, 0xF6);
const GREEN: Color32 = Color32::from_rgb(0x10, 0xB9, 0x81);
const AMBER: Color32 = Color32::from_rgb(0xF5, 0x9E, 0x0B);
const RED: Color32 = Color32::from_rgb(0xEF, 0x44, 0x44);

const INSIGHT: &str = "As h → 0, the secant line approaches the tangent line.\n\
                       f'(x) = lim[h→0] (f(x+h) - f(x)) / h\n\
                       Drag the h slider left to see this convergence.";

/// A runnable egui application for exploring one function.
///
/// The app owns the [`Explorer`]. Each slider or checkbox change is applied
/// to it and followed by exactly one rebuild of the snapshot; frames without
/// input reuse the last snapshot.
pub struct ExplorerApp<F> {
    explorer: Explorer<F>,
    viewport: Viewport,
    snapshot: RenderSnapshot,
    traces: Vec<Trace>,
    summary: Summary,
}

impl<F: FunctionPair + 'static> ExplorerApp<F> {
    /// Creates the app at the explorer's current parameters.
    #[must_use]
    pub fn new(explorer: Explorer<F>, viewport: Viewport) -> Self {
        let snapshot = explorer.build();
        let traces = traces(&snapshot, explorer.scene().function());
        let summary = Summary::new(&snapshot, explorer.scene().function());
        Self {
            explorer,
            viewport,
            snapshot,
            traces,
            summary,
        }
    }

    /// Opens the window and blocks until it is closed.
    ///
    /// # Errors
    ///
    /// Returns an error if the native window cannot be created.
    pub fn run(self, title: &str) -> Result<(), eframe::Error> {
        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default().with_inner_size([1200.0, 800.0]),
            ..Default::default()
        };
        eframe::run_native(title, options, Box::new(|_cc| Ok(Box::new(self))))
    }

    fn refresh(&mut self) {
        let function = self.explorer.scene().function();
        self.snapshot = self.explorer.build();
        self.traces = traces(&self.snapshot, function);
        self.summary = Summary::new(&self.snapshot, function);
    }

    /// Draws the sliders and checkbox, applying any change to the explorer.
    ///
    /// Returns `true` if a parameter changed.
    fn controls(&mut self, ui: &mut egui::Ui) -> bool {
        let state = *self.explorer.state();
        let (x_range, h_range) = (state.x_range(), state.h_range());
        let (mut x, mut h, mut show_secant) = (state.x(), state.h(), state.show_secant());
        let mut changed = false;

        let x_slider = Slider::new(&mut x, x_range.min()..=x_range.max()).text("Point x");
        if ui.add(x_slider).changed() {
            self.explorer.set_x(x);
            changed = true;
        }

        let h_slider = Slider::new(&mut h, h_range.min()..=h_range.max())
            .logarithmic(true)
            .text("h (→0 for derivative)");
        if ui.add(h_slider).changed() {
            self.explorer.set_h(h);
            changed = true;
        }

        if ui.checkbox(&mut show_secant, "Show secant").changed() {
            self.explorer.toggle_secant_visibility();
            changed = true;
        }

        changed
    }

    fn info(&self, ui: &mut egui::Ui) {
        let convergence = match self.summary.level {
            ConvergenceLevel::Converged => GREEN,
            ConvergenceLevel::Close => AMBER,
            ConvergenceLevel::Far => RED,
        };

        for line in &self.summary.lines {
            let text = egui::RichText::new(line).monospace();
            if line.starts_with("Convergence") {
                ui.label(text.color(convergence).strong());
            } else {
                ui.label(text);
            }
        }

        ui.separator();
        ui.label(egui::RichText::new(INSIGHT).italics().color(GREEN));
    }

    fn plot(&self, ui: &mut egui::Ui) {
        let Viewport { x, y } = self.viewport;
        Plot::new("tangent-explorer")
            .legend(Legend::default())
            .allow_drag(false)
            .allow_zoom(false)
            .allow_scroll(false)
            .allow_double_click_reset(false)
            .show(ui, |plot_ui| {
                plot_ui.set_plot_bounds(PlotBounds::from_min_max(
                    [x.min(), y.min()],
                    [x.max(), y.max()],
                ));

                for trace in &self.traces {
                    let points: PlotPoints = trace.points.iter().copied().collect();
                    let color = color(trace.kind);

                    if trace.kind.is_marker() {
                        let radius = if trace.kind == TraceKind::MainPoint { 7.0 } else { 5.0 };
                        plot_ui.points(
                            Points::new(points)
                                .radius(radius)
                                .filled(true)
                                .color(color)
                                .name(&trace.name),
                        );
                        continue;
                    }

                    let (width, style) = match trace.kind {
                        TraceKind::Curve => (2.5, LineStyle::Solid),
                        TraceKind::Secant => (2.0, LineStyle::dashed_loose()),
                        TraceKind::Guide => (1.5, LineStyle::dotted_dense()),
                        _ => (2.0, LineStyle::Solid),
                    };
                    let line = Line::new(points).color(color).width(width).style(style);
                    if trace.kind.in_legend() {
                        plot_ui.line(line.name(&trace.name));
                    } else {
                        plot_ui.line(line);
                        let [start, end] = [trace.points[0], trace.points[1]];
                        let middle = PlotPoint::new(
                            (start[0] + end[0]) / 2.0,
                            (start[1] + end[1]) / 2.0,
                        );
                        plot_ui.text(Text::new(middle, &trace.name).color(color));
                    }
                }
            });
    }
}

impl<F: FunctionPair + 'static> eframe::App for ExplorerApp<F> {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let mut changed = false;
        egui::TopBottomPanel::bottom("controls").show(ctx, |ui| {
            ui.spacing_mut().slider_width = 400.0;
            changed = self.controls(ui);
        });
        if changed {
            self.refresh();
        }

        egui::SidePanel::right("info")
            .min_width(280.0)
            .show(ctx, |ui| self.info(ui));

        egui::CentralPanel::default().show(ctx, |ui| self.plot(ui));
    }
}

fn color(kind: TraceKind) -> Color32 {
    match kind {
        TraceKind::Curve => BLUE,
        TraceKind::Tangent => GREEN,
        TraceKind::Secant | TraceKind::Guide | TraceKind::SecondPoint => AMBER,
        TraceKind::MainPoint => RED,
    }
}
