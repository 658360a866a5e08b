use bitflags::bitflags;

use crate::core::PairId;

bitflags! {
    /// A bit mask classifying contact pairs for detection filtering
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct ContactGroup: u32 {
        /// Default group (detected unless masked out)
        const DEFAULT = 0x0001;

        /// Contacts against immovable geometry (walls, floors)
        const WALLS   = 0x0002;

        /// Contacts between moving bodies
        const BODIES  = 0x0004;

        /// Observation-only contacts a host may tag and ignore
        const SENSOR  = 0x0008;

        /// Free-form group 5
        const GROUP5  = 0x0010;

        /// Free-form group 6
        const GROUP6  = 0x0020;

        /// Free-form group 7
        const GROUP7  = 0x0040;

        /// Free-form group 8
        const GROUP8  = 0x0080;

        /// All groups
        const ALL     = 0xFFFF_FFFF;
    }
}

impl Default for ContactGroup {
    fn default() -> Self {
        ContactGroup::DEFAULT
    }
}

/// A filter deciding which contact pairs a detector examines.
///
/// Each pair carries a group; the filter's active mask selects which
/// groups are detected. Pairs never assigned a group fall into
/// [`ContactGroup::DEFAULT`].
#[derive(Debug, Clone)]
pub struct GroupMaskFilter {
    /// The group of each pair, indexed by pair id
    groups: Vec<ContactGroup>,

    /// The groups currently enabled for detection
    active_mask: ContactGroup,
}

impl GroupMaskFilter {
    /// Creates a filter with every pair enabled
    pub fn new() -> Self {
        Self {
            groups: Vec::new(),
            active_mask: ContactGroup::ALL,
        }
    }

    /// Sets the group of a pair
    pub fn set_group(&mut self, pair: PairId, group: ContactGroup) {
        if pair.0 >= self.groups.len() {
            self.groups.resize(pair.0 + 1, ContactGroup::DEFAULT);
        }
        self.groups[pair.0] = group;
    }

    /// Gets the group of a pair
    pub fn get_group(&self, pair: PairId) -> ContactGroup {
        self.groups
            .get(pair.0)
            .copied()
            .unwrap_or(ContactGroup::DEFAULT)
    }

    /// Sets the mask of groups enabled for detection
    pub fn set_active_mask(&mut self, mask: ContactGroup) {
        self.active_mask = mask;
    }

    /// Gets the mask of groups enabled for detection
    pub fn get_active_mask(&self) -> ContactGroup {
        self.active_mask
    }

    /// Returns whether a pair should be examined by the detector
    pub fn is_enabled(&self, pair: PairId) -> bool {
        self.active_mask.intersects(self.get_group(pair))
    }
}

impl Default for GroupMaskFilter {
    fn default() -> Self {
        Self::new()
    }
}
