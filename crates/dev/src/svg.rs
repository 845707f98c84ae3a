//! Server-side SVG rendering of a snapshot.

use tangent_core::{FunctionPair, Interval, Point, Preset, RenderSnapshot};

const BACKGROUND: &str = "#1F2937";
const GRID: &str = "#374151";
const AXIS: &str = "#9CA3AF";
const BLUE: &str = "#3B82F6";
const GREEN: &str = "#10B981";
const AMBER: &str = "#F59E0B";
const RED: &str = "#EF4444";

/// Maps plot coordinates onto an SVG image of fixed size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Canvas {
    x: Interval,
    y: Interval,
    width: f64,
    height: f64,
    padding: f64,
}

impl Canvas {
    /// Creates a 600×450 canvas showing the given axis ranges.
    #[must_use]
    pub fn new(x: [f64; 2], y: [f64; 2]) -> Self {
        Self {
            x: x.into(),
            y: y.into(),
            width: 600.0,
            height: 450.0,
            padding: 50.0,
        }
    }

    /// Returns a canvas framing the preset's curve near the explorable range.
    #[must_use]
    pub fn for_preset(preset: Preset) -> Self {
        match preset {
            Preset::Square => Self::new([-1.0, 4.0], [-1.0, 10.0]),
            Preset::Cube => Self::new([-0.5, 4.5], [-2.0, 20.0]),
        }
    }

    /// Converts a plot point to pixel coordinates, y pointing down.
    #[must_use]
    pub fn to_screen(&self, point: Point) -> (f64, f64) {
        let inner_width = self.width - 2.0 * self.padding;
        let inner_height = self.height - 2.0 * self.padding;
        let sx = self.padding + (point.x - self.x.min()) / self.x.width() * inner_width;
        let sy = self.height
            - self.padding
            - (point.y - self.y.min()) / self.y.width() * inner_height;
        (sx, sy)
    }

    /// Renders `snapshot` as a standalone SVG document.
    pub fn render<F: FunctionPair + ?Sized>(
        &self,
        snapshot: &RenderSnapshot,
        function: &F,
    ) -> String {
        let mut elements = vec![format!(
            r#"<rect width="{}" height="{}" rx="8" fill="{BACKGROUND}"/>"#,
            self.width, self.height
        )];

        elements.extend(self.grid());

        let curve: Vec<String> = snapshot
            .curve
            .iter()
            .filter(|point| self.y.contains(point.y))
            .map(|&point| {
                let (sx, sy) = self.to_screen(point);
                format!("{sx:.1},{sy:.1}")
            })
            .collect();
        elements.push(format!(
            r#"<polyline points="{}" fill="none" stroke="{BLUE}" stroke-width="3"/>"#,
            curve.join(" ")
        ));

        if let (Some(secant), Some(second)) = (&snapshot.secant, snapshot.secondary_point) {
            elements.push(self.line(secant.p1, secant.p2, AMBER, 2.0, Some("8,4")));
            elements.push(self.line(
                snapshot.delta_x.start,
                snapshot.delta_x.end,
                AMBER,
                1.0,
                Some("4,2"),
            ));
            elements.push(self.line(
                snapshot.delta_y.start,
                snapshot.delta_y.end,
                AMBER,
                1.0,
                Some("4,2"),
            ));
            elements.push(self.circle(second, 6.0, AMBER));

            let run = snapshot.delta_x.run();
            let (run_x, run_y) = self.to_screen(Point::new(
                snapshot.delta_x.start.x + run / 2.0,
                snapshot.delta_x.start.y,
            ));
            elements.push(text(
                run_x,
                run_y + 15.0,
                AMBER,
                11.0,
                "middle",
                &format!("Δx = {run:.2}"),
            ));
            let (rise_x, rise_y) = self.to_screen(Point::new(
                snapshot.delta_y.start.x,
                (snapshot.delta_y.start.y + snapshot.delta_y.end.y) / 2.0,
            ));
            elements.push(text(
                rise_x + 6.0,
                rise_y,
                AMBER,
                11.0,
                "start",
                &format!("Δy = {:.2}", snapshot.delta_y()),
            ));
            elements.push(text(20.0, 50.0, AMBER, 13.0, "start", &secant.label));
        }

        elements.push(self.line(
            snapshot.tangent.p1,
            snapshot.tangent.p2,
            GREEN,
            2.5,
            None,
        ));
        elements.push(self.circle(snapshot.main_point, 8.0, RED));

        elements.push(text(
            self.width - 20.0,
            30.0,
            BLUE,
            14.0,
            "end",
            function.label(),
        ));
        elements.push(text(20.0, 30.0, GREEN, 13.0, "start", &snapshot.tangent.label));

        format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}" font-family="system-ui, sans-serif">{body}</svg>"#,
            w = self.width,
            h = self.height,
            body = elements.join("")
        )
    }

    /// Grid lines at whole numbers, with the axes drawn heavier.
    fn grid(&self) -> Vec<String> {
        let mut lines = Vec::new();
        let y_step = if self.y.width() > 12.0 { 5.0 } else { 2.0 };

        let mut gx = self.x.min().ceil();
        while gx <= self.x.max() {
            let (color, width) = if gx == 0.0 { (AXIS, 2.0) } else { (GRID, 1.0) };
            lines.push(self.line(
                Point::new(gx, self.y.min()),
                Point::new(gx, self.y.max()),
                color,
                width,
                None,
            ));
            gx += 1.0;
        }

        let mut gy = (self.y.min() / y_step).ceil() * y_step;
        while gy <= self.y.max() {
            let (color, width) = if gy == 0.0 { (AXIS, 2.0) } else { (GRID, 1.0) };
            lines.push(self.line(
                Point::new(self.x.min(), gy),
                Point::new(self.x.max(), gy),
                color,
                width,
                None,
            ));
            gy += y_step;
        }

        lines
    }

    fn line(&self, a: Point, b: Point, color: &str, width: f64, dash: Option<&str>) -> String {
        let (x1, y1) = self.to_screen(a);
        let (x2, y2) = self.to_screen(b);
        let dash = dash.map_or_else(String::new, |d| format!(r#" stroke-dasharray="{d}""#));
        format!(
            r#"<line x1="{x1:.1}" y1="{y1:.1}" x2="{x2:.1}" y2="{y2:.1}" stroke="{color}" stroke-width="{width}"{dash}/>"#
        )
    }

    fn circle(&self, center: Point, radius: f64, color: &str) -> String {
        let (cx, cy) = self.to_screen(center);
        format!(
            r#"<circle cx="{cx:.1}" cy="{cy:.1}" r="{radius}" fill="{color}" stroke="white" stroke-width="2"/>"#
        )
    }
}

fn text(x: f64, y: f64, color: &str, size: f64, anchor: &str, content: &str) -> String {
    format!(
        r#"<text x="{x:.1}" y="{y:.1}" fill="{color}" font-size="{size}" text-anchor="{anchor}">{}</text>"#,
        escape(content)
    )
}

pub(crate) fn escape(content: &str) -> String {
    content
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use tangent_core::{Closure, Explorer, Scene};

    #[test]
    fn corners_map_inside_the_padding() {
        let canvas = Canvas::new([-1.0, 4.0], [-1.0, 10.0]);

        assert_eq!(canvas.to_screen(Point::new(-1.0, -1.0)), (50.0, 400.0));
        assert_eq!(canvas.to_screen(Point::new(4.0, 10.0)), (550.0, 50.0));

        let (sx, sy) = canvas.to_screen(Point::new(1.5, 4.5));
        assert_relative_eq!(sx, 300.0);
        assert_relative_eq!(sy, 225.0);
    }

    #[test]
    fn renders_full_scene() {
        let explorer = Explorer::new(Scene::from_preset(Preset::Cube));
        let snapshot = explorer.build();

        let svg = Canvas::for_preset(Preset::Cube).render(&snapshot, &Preset::Cube);

        assert!(svg.starts_with("<svg "));
        assert!(svg.ends_with("</svg>"));
        assert!(svg.contains("<polyline"));
        assert!(svg.contains("Tangent (slope = 6.75)"));
        assert!(svg.contains("Secant (slope = 12.25)"));
        assert!(svg.contains("Δx = 1.00"));
        assert!(svg.contains("f(x) = x³"));
        assert_eq!(svg.matches("<circle").count(), 2);
    }

    #[test]
    fn hidden_secant_draws_no_dashed_lines() {
        let mut explorer = Explorer::new(Scene::from_preset(Preset::Square));
        explorer.toggle_secant_visibility();

        let svg = Canvas::for_preset(Preset::Square).render(&explorer.build(), &Preset::Square);

        assert!(!svg.contains("stroke-dasharray"));
        assert!(!svg.contains("Secant"));
        assert_eq!(svg.matches("<circle").count(), 1);
    }

    #[test]
    fn labels_are_escaped() {
        let pair = Closure::new(|x: f64| x, |_: f64| 1.0, "f(x) = x <linear> & flat", "f'(x) = 1");
        let scene = Scene::new(pair, tangent_core::Config::default());
        let snapshot = scene.build(&scene.initial_state());

        let svg = Canvas::new([-1.0, 4.0], [-1.0, 4.0]).render(&snapshot, scene.function());

        assert!(svg.contains("f(x) = x &lt;linear&gt; &amp; flat"));
    }
}
