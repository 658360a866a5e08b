use crate::core::PairId;
use crate::state::StateVector;

/// Trait for the contact geometry of a simulated system.
///
/// A system exposes a fixed, deterministically ordered table of contact
/// pairs. For each pair it can evaluate a signed gap (positive while the
/// bodies are separated), the gap's time derivative, and the response of
/// the state to an instantaneous impulse along the contact normal.
pub trait ContactModel: Send + Sync {
    /// Returns the number of contact pairs in the system's pair table
    fn pair_count(&self) -> usize;

    /// Evaluates the signed separation of a pair at the given state.
    ///
    /// Positive means separated, non-positive means in contact or
    /// penetrating.
    fn gap(&self, pair: PairId, state: &StateVector) -> f64;

    /// Evaluates the time derivative of the pair's gap at the given
    /// state. Negative means the bodies are approaching.
    fn normal_velocity(&self, pair: PairId, state: &StateVector) -> f64;

    /// Returns the reduced mass of the pair along its contact normal.
    ///
    /// Contacts against immovable geometry report the moving body's full
    /// mass.
    fn effective_mass(&self, pair: PairId, state: &StateVector) -> f64;

    /// Applies an instantaneous impulse of the given magnitude along the
    /// pair's contact normal and returns the updated state.
    ///
    /// Only velocities change; positions and time are untouched.
    fn apply_normal_impulse(&self, pair: PairId, state: &StateVector, magnitude: f64)
        -> StateVector;

    /// Returns the combined coefficient of restitution for a pair
    fn restitution(&self, pair: PairId) -> f64;

    /// Returns a short human-readable label for a pair, for diagnostics
    fn describe_pair(&self, pair: PairId) -> String {
        format!("pair {}", pair.0)
    }
}
