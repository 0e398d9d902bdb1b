// Route exports
pub mod contacts;

use actix_web::{error, web, HttpRequest, HttpResponse};

use crate::models::{Envelope, QueryResult};

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .configure(contacts::configure),
    );
}

/// Render query-string errors as a failure envelope
pub fn handle_query_payload_error(err: error::QueryPayloadError, req: &HttpRequest) -> actix_web::Error {
    tracing::info!("Query payload error on {}: {}", req.path(), err);
    let envelope = Envelope::<QueryResult>::failure(format!("Invalid input: {}", err));
    error::InternalError::from_response(err, HttpResponse::BadRequest().json(envelope)).into()
}
