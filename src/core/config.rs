#[cfg(feature = "serialize")]
use serde::{Serialize, Deserialize};

/// Configuration parameters for the collision engine
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct EngineConfig {
    /// The time bracket width at which a binary search for a collision
    /// time terminates
    pub time_tolerance: f64,

    /// The maximum number of bisection iterations per located collision
    pub max_bisections: u32,

    /// The maximum number of impulses applied to a single collision
    /// event before resolution is considered failed
    pub max_impulse_retries: u32,

    /// The maximum number of step/detect/resolve passes within one
    /// macro-step before the ricochet limit is considered exceeded
    pub max_collision_passes: u32,

    /// The approach speed below which restitution is treated as zero,
    /// suppressing micro-bounces of nearly resting contacts
    pub restitution_velocity_threshold: f64,

    /// The residual approach speed that counts as fully resolved after
    /// an impulse
    pub approach_tolerance: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            time_tolerance: 1.0e-7,
            max_bisections: 20,
            max_impulse_retries: 10,
            max_collision_passes: 20,
            restitution_velocity_threshold: 1.0e-4,
            approach_tolerance: 1.0e-9,
        }
    }
}
