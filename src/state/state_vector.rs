use nalgebra::DVector;
use std::fmt;

#[cfg(feature = "serialize")]
use serde::{Serialize, Deserialize};

/// A snapshot of the simulation at one instant: the generalized
/// coordinates (positions, velocities and any auxiliary variables, in the
/// order the simulated system defines) together with the simulation time.
///
/// A `StateVector` is never mutated once another component has observed
/// it; stepping, event location and impulse resolution all produce fresh
/// snapshots.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct StateVector {
    components: DVector<f64>,
    time: f64,
}

impl StateVector {
    /// Creates a new state vector from its components and a time
    pub fn new(components: DVector<f64>, time: f64) -> Self {
        Self { components, time }
    }

    /// Creates a new state vector from a slice of components
    pub fn from_slice(components: &[f64], time: f64) -> Self {
        Self {
            components: DVector::from_row_slice(components),
            time,
        }
    }

    /// Creates a zero state of the given dimension at time zero
    pub fn zeros(dimension: usize) -> Self {
        Self {
            components: DVector::zeros(dimension),
            time: 0.0,
        }
    }

    /// Returns the number of components
    pub fn dimension(&self) -> usize {
        self.components.len()
    }

    /// Returns the simulation time of this snapshot
    pub fn time(&self) -> f64 {
        self.time
    }

    /// Returns a single component by index
    pub fn component(&self, index: usize) -> f64 {
        self.components[index]
    }

    /// Returns the full component vector
    pub fn components(&self) -> &DVector<f64> {
        &self.components
    }

    /// Returns a copy of this state carrying a different time
    pub fn with_time(&self, time: f64) -> Self {
        Self {
            components: self.components.clone(),
            time,
        }
    }

    /// Returns a copy of this state with one component replaced
    pub fn with_component(&self, index: usize, value: f64) -> Self {
        let mut components = self.components.clone();
        components[index] = value;
        Self {
            components,
            time: self.time,
        }
    }

    /// Linearly interpolates between this state and another.
    ///
    /// `alpha` = 0 yields this state, `alpha` = 1 yields `other`. Both
    /// the components and the time are interpolated.
    pub fn lerp(&self, other: &StateVector, alpha: f64) -> Self {
        Self {
            components: self.components.lerp(&other.components, alpha),
            time: self.time + (other.time - self.time) * alpha,
        }
    }
}

impl fmt::Display for StateVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StateVector{{t: {}, [", self.time)?;
        for (i, value) in self.components.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", value)?;
        }
        write!(f, "]}}")
    }
}
