pub mod config;
pub mod engine;
pub mod events;
pub mod totals;

pub use self::config::EngineConfig;
pub use self::engine::{CollisionEngine, EnginePhase, AdvanceOutcome};
pub use self::events::{EngineEvent, EventQueue};
pub use self::totals::CollisionTotals;

/// A unique identifier for a contact pair in a simulated system.
///
/// The index refers into the system's fixed pair table; the order of the
/// table is part of the system's contract and never changes during a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PairId(pub usize);
