use crate::integration::DiffEqSolver;
use crate::state::StateVector;
use crate::systems::OdeSystem;

/// Simple forward Euler solver
pub struct EulerSolver;

impl EulerSolver {
    /// Creates a new Euler solver
    pub fn new() -> Self {
        Self
    }
}

impl Default for EulerSolver {
    fn default() -> Self {
        Self::new()
    }
}

impl DiffEqSolver for EulerSolver {
    fn step(&self, system: &dyn OdeSystem, state: &StateVector, dt: f64) -> StateVector {
        let derivative = system.derivative(state);
        let components = state.components() + derivative * dt;

        StateVector::new(components, state.time() + dt)
    }

    fn name(&self) -> &str {
        "Euler"
    }
}
