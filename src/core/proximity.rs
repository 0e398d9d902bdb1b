use crate::core::filters::{distance_within_radius, matches_gender};
use crate::models::{Contact, QueryRequest, QueryResult, ResultOrder};

/// Outcome of one scan over a contact snapshot
#[derive(Debug, Default)]
pub struct ScanOutcome {
    pub results: Vec<QueryResult>,
    /// Contacts looked at
    pub scanned: usize,
    /// Contacts dropped for missing or non-finite coordinates
    pub skipped: usize,
}

/// Bounded spatial filter over a contact collection
///
/// # Pipeline Stages
/// 1. Coordinate integrity check (broken records are skipped with a warning)
/// 2. Gender allow-list
/// 3. Exact Euclidean distance test
///
/// Stateless: one instance can serve any number of concurrent queries.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProximityFilter;

impl ProximityFilter {
    pub fn new() -> Self {
        Self
    }

    /// Contacts within `request.max_distance` of the reference point that
    /// pass the gender filter, each with its distance.
    pub fn filter(&self, contacts: &[Contact], request: &QueryRequest) -> Vec<QueryResult> {
        self.scan(contacts, request).results
    }

    /// Same as [`filter`](Self::filter), with scan statistics
    pub fn scan(&self, contacts: &[Contact], request: &QueryRequest) -> ScanOutcome {
        let mut outcome = ScanOutcome {
            scanned: contacts.len(),
            ..ScanOutcome::default()
        };

        if request.max_distance < 0.0 {
            tracing::debug!(
                "Negative max_distance {} matches nothing",
                request.max_distance
            );
            return outcome;
        }

        for contact in contacts {
            let position = match contact.position() {
                Ok(position) => position,
                Err(gap) => {
                    tracing::warn!("Skipping contact: {}", gap);
                    outcome.skipped += 1;
                    continue;
                }
            };

            if !matches_gender(contact, request) {
                continue;
            }

            if let Some(distance) = distance_within_radius(position, request) {
                outcome.results.push(QueryResult {
                    name: contact.name.clone(),
                    distance,
                });
            }
        }

        if request.order == ResultOrder::Distance {
            outcome.results.sort_by(|a, b| {
                a.distance
                    .total_cmp(&b.distance)
                    .then_with(|| a.name.cmp(&b.name))
            });
        }

        outcome
    }
}
