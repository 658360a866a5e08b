mod candidate;
mod model;
mod detector;
mod filter;
mod locator;
mod resolver;

pub use self::candidate::{CollisionCandidate, CollisionEvent};
pub use self::model::ContactModel;
pub use self::detector::{CollisionDetector, GapCrossingDetector};
pub use self::filter::{ContactGroup, GroupMaskFilter};
pub use self::locator::EventLocator;
pub use self::resolver::ImpulseResolver;
