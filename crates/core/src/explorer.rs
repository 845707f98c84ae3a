use crate::{FunctionPair, ParameterState, RenderSnapshot, Scene};

/// A scene together with the one parameter state a control surface owns.
///
/// This is the contract presentation adapters drive: apply each input event
/// with [`set_x`], [`set_h`] or [`toggle_secant_visibility`], then call
/// [`build`] for the snapshot to draw.
///
/// [`set_x`]: Explorer::set_x
/// [`set_h`]: Explorer::set_h
/// [`toggle_secant_visibility`]: Explorer::toggle_secant_visibility
/// [`build`]: Explorer::build
#[derive(Debug, Clone)]
pub struct Explorer<F> {
    scene: Scene<F>,
    state: ParameterState,
}

impl<F: FunctionPair> Explorer<F> {
    /// Creates an explorer at the scene's initial state.
    pub fn new(scene: Scene<F>) -> Self {
        let state = scene.initial_state();
        Self { scene, state }
    }

    /// Returns the scene.
    pub fn scene(&self) -> &Scene<F> {
        &self.scene
    }

    /// Returns the current parameters.
    pub fn state(&self) -> &ParameterState {
        &self.state
    }

    /// Moves the evaluation point, clamping into range.
    pub fn set_x(&mut self, value: f64) {
        self.state.set_x(value);
    }

    /// Changes the step size, clamping into range.
    pub fn set_h(&mut self, value: f64) {
        self.state.set_h(value);
    }

    /// Flips the secant overlay visibility.
    pub fn toggle_secant_visibility(&mut self) {
        self.state.toggle_secant_visibility();
    }

    /// Shows or hides the secant overlay.
    pub fn set_secant_visible(&mut self, visible: bool) {
        self.state.set_secant_visible(visible);
    }

    /// Builds the snapshot for the current parameters.
    pub fn build(&self) -> RenderSnapshot {
        self.scene.build(&self.state)
    }
}
