use crate::core::PairId;
use crate::state::StateVector;

/// A contact pair whose gap crossed into contact somewhere inside a step.
///
/// Produced by a detector from two bracketing states; the exact crossing
/// time is not yet known.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CollisionCandidate {
    /// The contact pair that crossed
    pub pair: PairId,

    /// The signed gap at the start of the bracket
    pub gap_before: f64,

    /// The signed gap at the end of the bracket
    pub gap_after: f64,
}

impl CollisionCandidate {
    /// Creates a new collision candidate
    pub fn new(pair: PairId, gap_before: f64, gap_after: f64) -> Self {
        Self {
            pair,
            gap_before,
            gap_after,
        }
    }
}

/// A collision candidate narrowed to a specific time within tolerance.
///
/// Created by the event locator and consumed by the impulse resolver,
/// then discarded.
#[derive(Debug, Clone)]
pub struct CollisionEvent {
    /// The contact pair that collides
    pub pair: PairId,

    /// The state at the narrowed time, on the still-separated side of
    /// the crossing
    pub state: StateVector,

    /// The residual gap at the narrowed time
    pub gap: f64,

    /// The width of the final time bracket
    pub bracket_width: f64,
}

impl CollisionEvent {
    /// Returns the simulation time the collision was narrowed to
    pub fn time(&self) -> f64 {
        self.state.time()
    }
}
