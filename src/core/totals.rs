use std::fmt;

#[cfg(feature = "serialize")]
use serde::{Serialize, Deserialize};

/// Long term statistics about collision handling, for testing, debugging
/// and performance measurement.
///
/// All five counters are monotone between resets; `impulses` can exceed
/// `collisions` because collision handling may apply several impulses as
/// bodies ricochet back and forth during a single collision event.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct CollisionTotals {
    /// Number of binary searches done to pin down a collision time
    searches: u64,

    /// Number of impulses applied
    impulses: u64,

    /// Number of collisions handled
    collisions: u64,

    /// Number of times the differential equation solver stepped the
    /// simulation forward
    steps: u64,

    /// Number of times the simulation was restored to an earlier state
    /// because a collision was detected
    backups: u64,
}

impl CollisionTotals {
    /// Creates a new set of totals with all counters at zero
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds to the number of binary search iterations completed
    pub fn add_searches(&mut self, searches: u64) {
        self.searches += searches;
    }

    /// Adds to the number of impulses applied
    pub fn add_impulses(&mut self, impulses: u64) {
        self.impulses += impulses;
    }

    /// Adds to the number of collisions handled
    pub fn add_collisions(&mut self, collisions: u64) {
        self.collisions += collisions;
    }

    /// Adds to the number of times the solver stepped the simulation
    /// forward
    pub fn add_steps(&mut self, steps: u64) {
        self.steps += steps;
    }

    /// Adds to the number of times the simulation was backed up in time
    pub fn add_backups(&mut self, backups: u64) {
        self.backups += backups;
    }

    /// Returns the total cumulative number of binary search iterations
    pub fn get_searches(&self) -> u64 {
        self.searches
    }

    /// Returns the total cumulative number of impulses applied
    pub fn get_impulses(&self) -> u64 {
        self.impulses
    }

    /// Returns the total cumulative number of collisions handled
    pub fn get_collisions(&self) -> u64 {
        self.collisions
    }

    /// Returns the total cumulative number of solver steps done
    pub fn get_steps(&self) -> u64 {
        self.steps
    }

    /// Returns the total cumulative number of times the simulation state
    /// was moved back in time
    pub fn get_backups(&self) -> u64 {
        self.backups
    }

    /// Adds every counter of `other` into this set of totals
    pub fn merge(&mut self, other: &CollisionTotals) {
        self.searches += other.searches;
        self.impulses += other.impulses;
        self.collisions += other.collisions;
        self.steps += other.steps;
        self.backups += other.backups;
    }

    /// Returns whether every counter is zero
    pub fn is_zero(&self) -> bool {
        *self == Self::default()
    }

    /// Resets the various collision statistics to zero
    pub fn reset(&mut self) {
        self.impulses = 0;
        self.collisions = 0;
        self.steps = 0;
        self.searches = 0;
        self.backups = 0;
    }
}

impl fmt::Display for CollisionTotals {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "CollisionTotals{{searches: {}, impulses: {}, collisions: {}, steps: {}, backups: {}}}",
            self.searches, self.impulses, self.collisions, self.steps, self.backups
        )
    }
}
