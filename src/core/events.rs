use std::collections::VecDeque;

use crate::core::PairId;

/// A diagnostic record emitted by the engine while handling a macro-step
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EngineEvent {
    /// A collision was located and resolved
    Collision {
        /// The contact pair that collided
        pair: PairId,

        /// The simulation time the collision was narrowed to
        time: f64,

        /// The number of impulses applied while resolving it
        impulses: u64,
    },

    /// A tentative step was discarded because it overshot a collision
    Backup {
        /// The time of the discarded state
        discarded_time: f64,
    },
}

/// A queue of engine events, drained by the host between steps
#[derive(Debug, Default)]
pub struct EventQueue {
    events: VecDeque<EngineEvent>,
}

impl EventQueue {
    /// Creates a new empty event queue
    pub fn new() -> Self {
        Self {
            events: VecDeque::new(),
        }
    }

    /// Adds an event to the queue
    pub fn push(&mut self, event: EngineEvent) {
        self.events.push_back(event);
    }

    /// Gets the next event from the queue
    pub fn pop(&mut self) -> Option<EngineEvent> {
        self.events.pop_front()
    }

    /// Returns the number of queued events
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Returns whether the queue is empty
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Clears all events from the queue
    pub fn clear(&mut self) {
        self.events.clear();
    }

    /// Gets all collision events currently in the queue
    pub fn collision_events(&self) -> Vec<&EngineEvent> {
        self.events
            .iter()
            .filter(|e| matches!(e, EngineEvent::Collision { .. }))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_queue_order() {
        let mut queue = EventQueue::new();
        queue.push(EngineEvent::Backup { discarded_time: 1.0 });
        queue.push(EngineEvent::Collision {
            pair: PairId(0),
            time: 0.5,
            impulses: 1,
        });

        assert_eq!(queue.len(), 2);
        assert_eq!(queue.pop(), Some(EngineEvent::Backup { discarded_time: 1.0 }));
        assert!(matches!(queue.pop(), Some(EngineEvent::Collision { .. })));
        assert!(queue.is_empty());
    }
}
