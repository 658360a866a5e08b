use log::trace;

use crate::collision::candidate::{CollisionCandidate, CollisionEvent};
use crate::collision::model::ContactModel;
use crate::core::EngineConfig;
use crate::error::CollisionError;
use crate::integration::DiffEqSolver;
use crate::state::StateVector;
use crate::systems::OdeSystem;
use crate::Result;

/// Narrows the exact time of a collision crossing by binary search.
///
/// Given a state known to be collision-free and a later state known to be
/// in contact, the locator repeatedly re-integrates from the free side of
/// the bracket to the midpoint time and re-evaluates the candidate's gap,
/// keeping the half that still contains the sign change.
#[derive(Debug, Clone)]
pub struct EventLocator {
    /// The bracket width at which the search terminates
    time_tolerance: f64,

    /// The iteration ceiling for one search
    max_bisections: u32,
}

impl EventLocator {
    /// Creates a new event locator
    pub fn new(time_tolerance: f64, max_bisections: u32) -> Self {
        Self {
            time_tolerance,
            max_bisections,
        }
    }

    /// Creates an event locator from the engine configuration
    pub fn from_config(config: &EngineConfig) -> Self {
        Self::new(config.time_tolerance, config.max_bisections)
    }

    /// Locates the collision time of a candidate inside the bracket
    /// `[before, after]`.
    ///
    /// Returns the located event together with the number of bisection
    /// iterations performed. Fails with
    /// [`CollisionError::NoCrossingFound`] when the candidate's gap does
    /// not actually change sign across the bracket.
    pub fn locate(
        &self,
        solver: &dyn DiffEqSolver,
        system: &dyn OdeSystem,
        model: &dyn ContactModel,
        before: &StateVector,
        after: &StateVector,
        candidate: &CollisionCandidate,
    ) -> Result<(CollisionEvent, u64)> {
        let pair = candidate.pair;

        let gap_before = model.gap(pair, before);
        let gap_after = model.gap(pair, after);

        if gap_before <= 0.0 || gap_after > 0.0 {
            return Err(CollisionError::NoCrossingFound {
                pair,
                t_before: before.time(),
                t_after: after.time(),
            });
        }

        let mut lo = before.clone();
        let mut hi = after.clone();
        let mut iterations: u64 = 0;

        while hi.time() - lo.time() > self.time_tolerance
            && iterations < u64::from(self.max_bisections)
        {
            let mid_time = 0.5 * (lo.time() + hi.time());
            let mid = solver.step(system, &lo, mid_time - lo.time());
            iterations += 1;

            let gap_mid = model.gap(pair, &mid);
            trace!(
                "bisection {} for {}: t={} gap={}",
                iterations,
                model.describe_pair(pair),
                mid.time(),
                gap_mid
            );

            if gap_mid > 0.0 {
                lo = mid;
            } else {
                hi = mid;
            }
        }

        let gap = model.gap(pair, &lo);
        let bracket_width = hi.time() - lo.time();

        Ok((
            CollisionEvent {
                pair,
                state: lo,
                gap,
                bracket_width,
            },
            iterations,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use crate::collision::{CollisionDetector, GapCrossingDetector};
    use crate::core::PairId;
    use crate::integration::EulerSolver;
    use crate::systems::LinearParticles;

    #[test]
    fn test_narrows_known_crossing() {
        // Gap closes at exactly t = 0.4
        let system = LinearParticles::new(vec![1.0], vec![0.1]).with_left_wall(0.0);
        let before = system.initial_state(&[0.5], &[-1.0]);

        let solver = EulerSolver::new();
        let after = solver.step(&system, &before, 1.0);

        let candidates = GapCrossingDetector::new().detect(&system, &before, &after);
        assert_eq!(candidates.len(), 1);

        let locator = EventLocator::new(1.0e-7, 40);
        let (event, iterations) = locator
            .locate(&solver, &system, &system, &before, &after, &candidates[0])
            .unwrap();

        assert_relative_eq!(event.time(), 0.4, epsilon = 1.0e-6);
        assert!(event.gap > 0.0);
        assert!(event.bracket_width <= 1.0e-7);
        assert!(iterations > 0);
        assert!(iterations <= 40);
    }

    #[test]
    fn test_disagreement_is_reported() {
        let system = LinearParticles::new(vec![1.0], vec![0.1]).with_left_wall(0.0);
        let before = system.initial_state(&[5.0], &[1.0]);
        let after = system.initial_state(&[6.0], &[1.0]).with_time(1.0);

        // Fabricated candidate: the gap never changes sign here
        let candidate = CollisionCandidate::new(PairId(0), 1.0, -1.0);

        let locator = EventLocator::new(1.0e-7, 20);
        let result = locator.locate(
            &EulerSolver::new(),
            &system,
            &system,
            &before,
            &after,
            &candidate,
        );

        assert!(matches!(
            result,
            Err(CollisionError::NoCrossingFound { pair: PairId(0), .. })
        ));
    }
}
