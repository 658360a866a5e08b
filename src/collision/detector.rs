use crate::collision::candidate::CollisionCandidate;
use crate::collision::filter::GroupMaskFilter;
use crate::collision::model::ContactModel;
use crate::core::PairId;
use crate::state::StateVector;

/// Trait for collision detection over a pair of bracketing states
pub trait CollisionDetector: Send + Sync {
    /// Examines two states bracketing a step and returns every pair
    /// whose contact condition became satisfied between them.
    ///
    /// Must not mutate either state; candidates are returned in pair
    /// table order so detection is deterministic.
    fn detect(
        &self,
        model: &dyn ContactModel,
        before: &StateVector,
        after: &StateVector,
    ) -> Vec<CollisionCandidate>;
}

/// Detector reporting every filter-enabled pair whose signed gap crossed
/// from separated to contact between the two bracketing states.
#[derive(Debug, Default)]
pub struct GapCrossingDetector {
    /// The group/mask filter limiting which pairs are examined
    filter: GroupMaskFilter,
}

impl GapCrossingDetector {
    /// Creates a detector with every pair enabled
    pub fn new() -> Self {
        Self {
            filter: GroupMaskFilter::new(),
        }
    }

    /// Creates a detector using the given filter
    pub fn with_filter(filter: GroupMaskFilter) -> Self {
        Self { filter }
    }

    /// Returns the detector's filter
    pub fn filter(&self) -> &GroupMaskFilter {
        &self.filter
    }

    /// Returns the detector's filter for modification
    pub fn filter_mut(&mut self) -> &mut GroupMaskFilter {
        &mut self.filter
    }
}

impl CollisionDetector for GapCrossingDetector {
    fn detect(
        &self,
        model: &dyn ContactModel,
        before: &StateVector,
        after: &StateVector,
    ) -> Vec<CollisionCandidate> {
        let mut candidates = Vec::new();

        for index in 0..model.pair_count() {
            let pair = PairId(index);
            if !self.filter.is_enabled(pair) {
                continue;
            }

            let gap_before = model.gap(pair, before);
            let gap_after = model.gap(pair, after);

            // A crossing needs a separated start and a contacting end;
            // pairs already in contact at the start belong to the
            // resolver, not the detector.
            if gap_before > 0.0 && gap_after <= 0.0 {
                candidates.push(CollisionCandidate::new(pair, gap_before, gap_after));
            }
        }

        candidates
    }
}
