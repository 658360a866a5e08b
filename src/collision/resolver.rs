use log::trace;

use crate::collision::candidate::CollisionEvent;
use crate::collision::model::ContactModel;
use crate::core::EngineConfig;
use crate::error::CollisionError;
use crate::state::StateVector;
use crate::Result;

/// Applies instantaneous restitution impulses to resolve a located
/// collision event.
///
/// The impulse magnitude follows the coefficient-of-restitution rule
/// along the contact normal: the post-impulse approach speed is `-e`
/// times the pre-impulse approach speed. Positions are never altered.
#[derive(Debug, Clone)]
pub struct ImpulseResolver {
    /// The maximum number of impulses applied to one event
    max_impulse_retries: u32,

    /// The approach speed below which restitution is treated as zero
    restitution_velocity_threshold: f64,

    /// The residual approach speed that counts as resolved
    approach_tolerance: f64,
}

impl ImpulseResolver {
    /// Creates a new impulse resolver
    pub fn new(
        max_impulse_retries: u32,
        restitution_velocity_threshold: f64,
        approach_tolerance: f64,
    ) -> Self {
        Self {
            max_impulse_retries,
            restitution_velocity_threshold,
            approach_tolerance,
        }
    }

    /// Creates an impulse resolver from the engine configuration
    pub fn from_config(config: &EngineConfig) -> Self {
        Self::new(
            config.max_impulse_retries,
            config.restitution_velocity_threshold,
            config.approach_tolerance,
        )
    }

    /// Resolves a collision event, returning the post-impulse state and
    /// the number of impulses applied.
    ///
    /// If the pair is still approaching beyond tolerance after the retry
    /// budget is spent, fails with
    /// [`CollisionError::ResolutionResidual`].
    pub fn resolve(
        &self,
        model: &dyn ContactModel,
        event: &CollisionEvent,
    ) -> Result<(StateVector, u64)> {
        let pair = event.pair;
        let mut state = event.state.clone();
        let mut applied: u64 = 0;

        loop {
            let normal_velocity = model.normal_velocity(pair, &state);
            if normal_velocity >= -self.approach_tolerance {
                return Ok((state, applied));
            }

            if applied >= u64::from(self.max_impulse_retries) {
                return Err(CollisionError::ResolutionResidual {
                    pair,
                    residual: normal_velocity,
                });
            }

            // Nearly resting contacts get a dead bounce so they settle
            // instead of chattering.
            let restitution = if normal_velocity.abs() < self.restitution_velocity_threshold {
                0.0
            } else {
                model.restitution(pair)
            };

            let effective_mass = model.effective_mass(pair, &state);
            let magnitude = effective_mass * (1.0 + restitution) * (-normal_velocity);

            state = model.apply_normal_impulse(pair, &state, magnitude);
            applied += 1;

            trace!(
                "impulse {} on {}: j={} v_n was {}",
                applied,
                model.describe_pair(pair),
                magnitude,
                normal_velocity
            );
        }
    }
}
