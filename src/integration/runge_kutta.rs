use crate::integration::DiffEqSolver;
use crate::state::StateVector;
use crate::systems::OdeSystem;

/// Classic fourth-order Runge-Kutta solver for highly accurate stepping
pub struct RungeKutta4Solver;

impl RungeKutta4Solver {
    /// Creates a new Runge-Kutta solver
    pub fn new() -> Self {
        Self
    }
}

impl Default for RungeKutta4Solver {
    fn default() -> Self {
        Self::new()
    }
}

impl DiffEqSolver for RungeKutta4Solver {
    fn step(&self, system: &dyn OdeSystem, state: &StateVector, dt: f64) -> StateVector {
        let t = state.time();
        let y = state.components();

        // Step 1: slope at the start of the interval
        let k1 = system.derivative(state);

        // Step 2: slope at the midpoint using k1
        let s2 = StateVector::new(y + &k1 * (dt * 0.5), t + dt * 0.5);
        let k2 = system.derivative(&s2);

        // Step 3: slope at the midpoint using k2
        let s3 = StateVector::new(y + &k2 * (dt * 0.5), t + dt * 0.5);
        let k3 = system.derivative(&s3);

        // Step 4: slope at the end of the interval
        let s4 = StateVector::new(y + &k3 * dt, t + dt);
        let k4 = system.derivative(&s4);

        // Weighted average of the four slopes
        let slope = (k1 + k2 * 2.0 + k3 * 2.0 + k4) * (1.0 / 6.0);
        let components = y + slope * dt;

        StateVector::new(components, t + dt)
    }

    fn name(&self) -> &str {
        "RungeKutta4"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use nalgebra::DVector;

    /// Unit harmonic oscillator: x'' = -x
    struct Oscillator;

    impl OdeSystem for Oscillator {
        fn dimension(&self) -> usize {
            2
        }

        fn derivative(&self, state: &StateVector) -> DVector<f64> {
            DVector::from_row_slice(&[state.component(1), -state.component(0)])
        }
    }

    #[test]
    fn test_oscillator_accuracy() {
        let solver = RungeKutta4Solver::new();
        let mut state = StateVector::from_slice(&[1.0, 0.0], 0.0);

        let dt = 0.01;
        for _ in 0..100 {
            state = solver.step(&Oscillator, &state, dt);
        }

        // x(t) = cos t
        assert_relative_eq!(state.component(0), (1.0f64).cos(), epsilon = 1.0e-8);
        assert_relative_eq!(state.component(1), -(1.0f64).sin(), epsilon = 1.0e-8);
        assert_relative_eq!(state.time(), 1.0, epsilon = 1.0e-12);
    }
}
