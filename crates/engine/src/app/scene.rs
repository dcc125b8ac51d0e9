use super::{Canvas, InputState};

/// Simulation driven by the loop scheduler.
///
/// `update` runs once per due fixed-step tick. `render` runs only on the
/// ticks the frame-skip policy lets through and must not mutate simulation
/// state.
pub trait Scene {
    fn update(&mut self, input: &InputState);
    fn render(&self, canvas: &mut dyn Canvas);
}
