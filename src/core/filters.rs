use geo::Point;

use crate::core::distance::delta_length;
use crate::models::{Contact, QueryRequest};

/// Check the contact's gender against the request's allow-list
#[inline]
pub fn matches_gender(contact: &Contact, request: &QueryRequest) -> bool {
    request.gender_filter.allows(contact.gender)
}

/// Distance from the reference point when `position` lies inside the radius
///
/// The comparison is inclusive and uses no tolerance.
#[inline]
pub fn distance_within_radius(position: Point<f64>, request: &QueryRequest) -> Option<f64> {
    let distance = delta_length(position - request.reference);
    (distance <= request.max_distance).then_some(distance)
}
