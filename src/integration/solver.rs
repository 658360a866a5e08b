use crate::state::StateVector;
use crate::systems::OdeSystem;

/// Trait for numerical integration methods advancing a state vector
pub trait DiffEqSolver: Send + Sync {
    /// Advances the state forward by a time increment.
    ///
    /// Pure in both inputs; the returned snapshot carries
    /// `state.time() + dt`.
    fn step(&self, system: &dyn OdeSystem, state: &StateVector, dt: f64) -> StateVector;

    /// Returns the name of the integration method
    fn name(&self) -> &str;
}
