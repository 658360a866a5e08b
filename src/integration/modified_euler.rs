use crate::integration::DiffEqSolver;
use crate::state::StateVector;
use crate::systems::OdeSystem;

/// Second-order modified Euler (midpoint) solver
pub struct ModifiedEulerSolver;

impl ModifiedEulerSolver {
    /// Creates a new modified Euler solver
    pub fn new() -> Self {
        Self
    }
}

impl Default for ModifiedEulerSolver {
    fn default() -> Self {
        Self::new()
    }
}

impl DiffEqSolver for ModifiedEulerSolver {
    fn step(&self, system: &dyn OdeSystem, state: &StateVector, dt: f64) -> StateVector {
        // Evaluate the slope at the midpoint of the step
        let k1 = system.derivative(state);
        let midpoint = StateVector::new(
            state.components() + &k1 * (dt * 0.5),
            state.time() + dt * 0.5,
        );
        let k2 = system.derivative(&midpoint);

        let components = state.components() + k2 * dt;

        StateVector::new(components, state.time() + dt)
    }

    fn name(&self) -> &str {
        "ModifiedEuler"
    }
}
