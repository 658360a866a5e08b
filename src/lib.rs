pub mod state;
pub mod systems;
pub mod integration;
pub mod collision;
pub mod core;

/// Re-export common types for easier usage
pub use crate::core::{CollisionEngine, EngineConfig, CollisionTotals, AdvanceOutcome};
pub use crate::state::StateVector;
pub use crate::integration::DiffEqSolver;
pub use crate::collision::{ContactModel, CollisionCandidate, CollisionEvent};
pub use crate::systems::OdeSystem;

/// Error types for the collision engine
pub mod error {
    use thiserror::Error;

    use crate::core::PairId;

    #[derive(Error, Debug)]
    pub enum CollisionError {
        #[error("Invalid parameter: {0}")]
        InvalidParameter(String),

        /// The detector reported a crossing for a pair but the locator
        /// found no sign change inside the bracket.
        #[error("no collision crossing found for pair {pair:?} in [{t_before}, {t_after}]")]
        NoCrossingFound {
            pair: PairId,
            t_before: f64,
            t_after: f64,
        },

        /// Impulse resolution left the pair approaching after exhausting
        /// the configured retry budget.
        #[error("pair {pair:?} still approaching at {residual} after impulse retries")]
        ResolutionResidual { pair: PairId, residual: f64 },

        /// The detect/resolve loop exceeded its pass ceiling within one
        /// macro-step.
        #[error("collision handling exceeded {passes} passes in a single step")]
        RicochetLimitExceeded { passes: u32 },
    }
}

/// Result type for collision engine operations
pub type Result<T> = std::result::Result<T, error::CollisionError>;

/// Engine version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
