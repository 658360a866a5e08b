use log::debug;

use crate::collision::{
    CollisionDetector, CollisionEvent, ContactModel, EventLocator, GapCrossingDetector,
    ImpulseResolver,
};
use crate::core::{CollisionTotals, EngineConfig, EngineEvent, EventQueue};
use crate::error::CollisionError;
use crate::integration::DiffEqSolver;
use crate::state::StateVector;
use crate::systems::OdeSystem;
use crate::Result;

/// The stage the engine is in while handling a macro-step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnginePhase {
    /// No step in progress
    Idle,

    /// Advancing the tentative state with the solver
    Stepping,

    /// Examining the step bracket for collision crossings
    Detecting,

    /// Narrowing a crossing to its collision time
    Locating,

    /// Applying restitution impulses
    Resolving,

    /// Discarding a tentative state that overshot a collision
    BackingUp,

    /// The last macro-step completed and its state was committed
    Committed,

    /// The last macro-step failed; the committed state is unchanged
    Failed,
}

/// The result of a successful macro-step
#[derive(Debug, Clone)]
pub struct AdvanceOutcome {
    /// The newly committed state
    pub state: StateVector,

    /// The statistics recorded during this call only
    pub delta: CollisionTotals,
}

/// Orchestrates continuous collision handling over a stepwise simulation.
///
/// Each macro-step advances the committed state by a requested time
/// increment: step forward, detect crossings over the bracket, back up
/// overshot steps, narrow collision times by binary search, apply
/// restitution impulses, and repeat until the target time is reached
/// collision-free. All loops are bounded by the engine configuration.
pub struct CollisionEngine<S: OdeSystem + ContactModel> {
    system: S,
    solver: Box<dyn DiffEqSolver>,
    detector: Box<dyn CollisionDetector>,
    locator: EventLocator,
    resolver: ImpulseResolver,
    config: EngineConfig,
    committed: StateVector,
    phase: EnginePhase,
    totals: CollisionTotals,
    events: EventQueue,
}

impl<S: OdeSystem + ContactModel> CollisionEngine<S> {
    /// Creates a new engine owning the given system, solver and initial
    /// state
    pub fn new(
        system: S,
        solver: Box<dyn DiffEqSolver>,
        initial_state: StateVector,
        config: EngineConfig,
    ) -> Result<Self> {
        if initial_state.dimension() != system.dimension() {
            return Err(CollisionError::InvalidParameter(format!(
                "state dimension {} does not match system dimension {}",
                initial_state.dimension(),
                system.dimension()
            )));
        }

        let locator = EventLocator::from_config(&config);
        let resolver = ImpulseResolver::from_config(&config);

        Ok(Self {
            system,
            solver,
            detector: Box::new(GapCrossingDetector::new()),
            locator,
            resolver,
            config,
            committed: initial_state,
            phase: EnginePhase::Idle,
            totals: CollisionTotals::new(),
            events: EventQueue::new(),
        })
    }

    /// Replaces the collision detector
    pub fn set_detector(&mut self, detector: Box<dyn CollisionDetector>) {
        self.detector = detector;
    }

    /// Returns the last committed state
    pub fn state(&self) -> &StateVector {
        &self.committed
    }

    /// Returns the current engine phase
    pub fn phase(&self) -> EnginePhase {
        self.phase
    }

    /// Returns the accumulated collision statistics
    pub fn totals(&self) -> &CollisionTotals {
        &self.totals
    }

    /// Returns the engine configuration
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Returns the simulated system
    pub fn system(&self) -> &S {
        &self.system
    }

    /// Returns the queue of diagnostic events
    pub fn events(&self) -> &EventQueue {
        &self.events
    }

    /// Gets the next queued diagnostic event
    pub fn next_event(&mut self) -> Option<EngineEvent> {
        self.events.pop()
    }

    /// Clears all queued diagnostic events
    pub fn clear_events(&mut self) {
        self.events.clear();
    }

    /// Resets the accumulated statistics to zero
    pub fn reset_totals(&mut self) {
        self.totals.reset();
    }

    /// Restarts the simulation from a new state, resetting statistics
    /// and queued events
    pub fn reset(&mut self, state: StateVector) -> Result<()> {
        if state.dimension() != self.system.dimension() {
            return Err(CollisionError::InvalidParameter(format!(
                "state dimension {} does not match system dimension {}",
                state.dimension(),
                self.system.dimension()
            )));
        }

        self.committed = state;
        self.phase = EnginePhase::Idle;
        self.totals.reset();
        self.events.clear();
        Ok(())
    }

    /// Advances the simulation by a time increment.
    ///
    /// On success the new state is committed and returned together with
    /// the statistics recorded during this call. On failure the
    /// previously committed state and the accumulated statistics are
    /// left untouched; the same engine can be retried with a smaller
    /// increment.
    pub fn advance(&mut self, dt: f64) -> Result<AdvanceOutcome> {
        if !dt.is_finite() || dt < 0.0 {
            return Err(CollisionError::InvalidParameter(format!(
                "time increment must be finite and non-negative, got {}",
                dt
            )));
        }

        let mut delta = CollisionTotals::new();

        // A zero increment is a no-op: nothing is stepped, nothing is
        // counted.
        if dt == 0.0 {
            self.phase = EnginePhase::Committed;
            return Ok(AdvanceOutcome {
                state: self.committed.clone(),
                delta,
            });
        }

        let target_time = self.committed.time() + dt;
        let mut current = self.committed.clone();
        let mut passes: u32 = 0;

        let outcome = 'macro_step: loop {
            if passes >= self.config.max_collision_passes {
                break Err(CollisionError::RicochetLimitExceeded { passes });
            }
            passes += 1;

            self.phase = EnginePhase::Stepping;
            let remaining = target_time - current.time();
            let tentative = self.solver.step(&self.system, &current, remaining);
            delta.add_steps(1);

            self.phase = EnginePhase::Detecting;
            let candidates = self.detector.detect(&self.system, &current, &tentative);
            if candidates.is_empty() {
                break Ok(tentative);
            }

            debug!(
                "{} crossing(s) in [{}, {}], backing up",
                candidates.len(),
                current.time(),
                tentative.time()
            );

            // The tentative state overshot at least one collision;
            // discard it and search the bracket instead.
            self.phase = EnginePhase::BackingUp;
            delta.add_backups(1);
            self.events.push(EngineEvent::Backup {
                discarded_time: tentative.time(),
            });

            self.phase = EnginePhase::Locating;
            let mut earliest: Option<CollisionEvent> = None;
            for candidate in &candidates {
                let locate_result = self.locator.locate(
                    self.solver.as_ref(),
                    &self.system,
                    &self.system,
                    &current,
                    &tentative,
                    candidate,
                );
                let (event, iterations) = match locate_result {
                    Ok(located) => located,
                    Err(error) => break 'macro_step Err(error),
                };
                delta.add_searches(iterations);

                // Ties keep the earlier candidate in pair table order
                let is_earlier = earliest
                    .as_ref()
                    .map_or(true, |best| event.time() < best.time());
                if is_earlier {
                    earliest = Some(event);
                }
            }
            let Some(event) = earliest else {
                break Ok(tentative);
            };

            self.phase = EnginePhase::Resolving;
            let (resolved, impulses) = match self.resolver.resolve(&self.system, &event) {
                Ok(resolved) => resolved,
                Err(error) => break Err(error),
            };
            delta.add_impulses(impulses);
            delta.add_collisions(1);
            self.events.push(EngineEvent::Collision {
                pair: event.pair,
                time: event.time(),
                impulses,
            });

            debug!(
                "resolved {} at t={} with {} impulse(s)",
                self.system.describe_pair(event.pair),
                event.time(),
                impulses
            );

            // Continue the macro-step from the post-impulse state; the
            // next pass re-detects over the remaining interval.
            current = resolved;
        };

        match outcome {
            Ok(state) => {
                self.committed = state;
                self.phase = EnginePhase::Committed;
                self.totals.merge(&delta);
                Ok(AdvanceOutcome {
                    state: self.committed.clone(),
                    delta,
                })
            }
            Err(error) => {
                self.phase = EnginePhase::Failed;
                Err(error)
            }
        }
    }
}
