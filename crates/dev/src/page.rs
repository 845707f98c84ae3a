//! The dashboard page served at `/`.

use tangent_core::{FunctionPair, Scene};

use crate::svg::escape;

const TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>Derivative Visualization: __FUNCTION__</title>
<style>
  body { background: #111827; color: #E5E7EB; font-family: system-ui, sans-serif; margin: 0; padding: 20px; }
  h1, p.lead { text-align: center; }
  p.lead { color: #9CA3AF; }
  main { display: flex; flex-direction: column; align-items: center; gap: 16px; }
  .panel { background: #1F2937; border-radius: 10px; padding: 16px 24px; width: 560px; }
  label { display: block; font-weight: bold; margin-top: 8px; }
  input[type=range] { width: 100%; }
  pre { margin: 0; font-size: 14px; }
  .converged { color: #10B981; } .close { color: #F59E0B; } .far { color: #EF4444; }
</style>
</head>
<body>
<h1>Derivative Visualization: __FUNCTION__</h1>
<p class="lead">Watch the secant line converge to the tangent line as h → 0</p>
<main>
  <img id="plot" alt="tangent and secant plot" width="600" height="450">
  <div class="panel">
    <label for="x" style="color: #EF4444">Point Position (x): <span id="x-value"></span></label>
    <input id="x" type="range" min="__X_MIN__" max="__X_MAX__" step="0.01" value="__X_INIT__">
    <label for="h" style="color: #F59E0B">Step Size (h): <span id="h-value"></span></label>
    <input id="h" type="range" min="__H_MIN__" max="__H_MAX__" step="0.01" value="__H_INIT__">
    <label><input id="secant" type="checkbox" checked> Show secant</label>
  </div>
  <div class="panel"><pre id="info"></pre></div>
  <div class="panel">
    <p><strong style="color: #10B981">Definition:</strong> f'(x) = lim<sub>h→0</sub> [f(x+h) − f(x)] / h</p>
    <p><strong style="color: #3B82F6">For __FUNCTION__:</strong> __DERIVATIVE__ (the slope of the tangent line at any point)</p>
  </div>
</main>
<script>
  const x = document.getElementById("x");
  const h = document.getElementById("h");
  const secant = document.getElementById("secant");
  const info = document.getElementById("info");

  async function update() {
    document.getElementById("x-value").textContent = Number(x.value).toFixed(2);
    document.getElementById("h-value").textContent = Number(h.value).toFixed(2);
    const query = `x=${x.value}&h=${h.value}&secant=${secant.checked}`;
    document.getElementById("plot").src = `/scene.svg?${query}`;
    const response = await fetch(`/scene?${query}`);
    const body = await response.json();
    info.textContent = body.summary.lines.join("\n");
    info.className = body.summary.level;
  }

  for (const control of [x, h, secant]) {
    control.addEventListener("input", update);
  }
  update();
</script>
</body>
</html>
"#;

/// Renders the dashboard page with the scene's ranges and labels filled in.
pub fn render<F: FunctionPair>(scene: &Scene<F>) -> String {
    let config = scene.config();
    let function = scene.function();
    let state = scene.initial_state();

    [
        ("__FUNCTION__", escape(function.label())),
        ("__DERIVATIVE__", escape(function.derivative_label())),
        ("__X_MIN__", config.x_range().min().to_string()),
        ("__X_MAX__", config.x_range().max().to_string()),
        ("__X_INIT__", state.x().to_string()),
        ("__H_MIN__", config.h_range().min().to_string()),
        ("__H_MAX__", config.h_range().max().to_string()),
        ("__H_INIT__", state.h().to_string()),
    ]
    .into_iter()
    .fold(TEMPLATE.to_owned(), |page, (placeholder, value)| {
        page.replace(placeholder, &value)
    })
}
