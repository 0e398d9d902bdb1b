// Core algorithm exports
pub mod distance;
pub mod filters;
pub mod proximity;

pub use distance::{delta_length, planar_distance};
pub use filters::{distance_within_radius, matches_gender};
pub use proximity::{ProximityFilter, ScanOutcome};
