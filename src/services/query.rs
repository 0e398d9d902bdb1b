use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

use crate::core::{ProximityFilter, ScanOutcome};
use crate::error::ProximityError;
use crate::models::{Envelope, QueryRequest, QueryResult};
use crate::services::source::ContactSource;

/// Close-contact query: fetch the full snapshot, then filter it
///
/// This is the failure boundary of the service. Whatever goes wrong below it
/// comes out as a failure [`Envelope`].
#[derive(Clone)]
pub struct CloseContactService {
    source: Arc<dyn ContactSource>,
    filter: ProximityFilter,
}

impl CloseContactService {
    pub fn new(source: Arc<dyn ContactSource>) -> Self {
        Self {
            source,
            filter: ProximityFilter::new(),
        }
    }

    pub fn source_name(&self) -> &'static str {
        self.source.name()
    }

    /// Run a validated query against a fresh snapshot of the contact source
    pub async fn find_close_contacts(
        &self,
        request: &QueryRequest,
    ) -> Result<Vec<QueryResult>, ProximityError> {
        request.validate()?;

        let contacts = self.source.list_all().await?;

        let filter = self.filter;
        let outcome: ScanOutcome = panic::catch_unwind(AssertUnwindSafe(|| filter.scan(&contacts, request)))
            .map_err(|payload| ProximityError::Unexpected(panic_message(payload)))?;

        tracing::info!(
            scanned = outcome.scanned,
            skipped = outcome.skipped,
            matched = outcome.results.len(),
            "Close contact scan finished (source: {})",
            self.source.name()
        );

        Ok(outcome.results)
    }

    /// Render a (possibly failed) request as a response envelope and the
    /// HTTP status code that goes with it
    pub async fn respond(
        &self,
        request: Result<QueryRequest, ProximityError>,
    ) -> (Envelope<QueryResult>, u16) {
        let result = match request {
            Ok(request) => {
                tracing::info!(
                    "Close contacts around ({}, {}) within {}",
                    request.reference.x(),
                    request.reference.y(),
                    request.max_distance
                );
                self.find_close_contacts(&request).await
            }
            Err(e) => Err(e),
        };

        match result {
            Ok(data) => (Envelope::success(data), 200),
            Err(e) => {
                match &e {
                    ProximityError::InvalidInput(_) => tracing::info!("Rejected close contact request: {}", e),
                    _ => tracing::error!("Close contact query failed: {}", e),
                }
                let status_code = e.status_code();
                (Envelope::failure(e), status_code)
            }
        }
    }
}

fn panic_message(payload: Box<dyn Any + Send>) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        message.to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "filter pass panicked".to_string()
    }
}
