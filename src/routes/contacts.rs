use actix_web::{http::StatusCode, web, HttpResponse, Responder};
use std::sync::Arc;
use tracing::Instrument;
use validator::Validate;

use crate::error::ProximityError;
use crate::models::{
    parse_coordinate, CloseContactParams, GenderFilter, HealthResponse, QueryRequest, ResultOrder,
};
use crate::services::CloseContactService;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<CloseContactService>,
    pub default_order: ResultOrder,
}

/// Configure all contact-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route(
            "/contact/close_contact/{x_coordinate}/{y_coordinate}/{max_distance}",
            web::get().to(close_contact),
        )
        .route(
            "/contact/close_contact/{x_coordinate}/{y_coordinate}/{max_distance}/{gender}",
            web::get().to(close_contact_with_gender),
        );
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        source: state.service.source_name().to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Close contacts endpoint
///
/// GET /api/v1/contact/close_contact/{x}/{y}/{max_distance}?gender=male,female&order=distance
///
/// Response body:
/// ```json
/// {
///   "success": true,
///   "error": null,
///   "data": [{"name": "string", "distance": 1.5}]
/// }
/// ```
async fn close_contact(
    state: web::Data<AppState>,
    path: web::Path<(String, String, String)>,
    params: web::Query<CloseContactParams>,
) -> HttpResponse {
    let (x, y, max_distance) = path.into_inner();
    let params = params.into_inner();
    let request = build_request(&state, &x, &y, &max_distance, &params);
    run_query(&state, request).await
}

/// Close contacts endpoint with the gender list as the last path segment
///
/// GET /api/v1/contact/close_contact/{x}/{y}/{max_distance}/{gender}
async fn close_contact_with_gender(
    state: web::Data<AppState>,
    path: web::Path<(String, String, String, String)>,
    params: web::Query<CloseContactParams>,
) -> HttpResponse {
    let (x, y, max_distance, gender) = path.into_inner();
    let params = CloseContactParams {
        gender: Some(gender),
        order: params.into_inner().order,
    };
    let request = build_request(&state, &x, &y, &max_distance, &params);
    run_query(&state, request).await
}

fn build_request(
    state: &AppState,
    x: &str,
    y: &str,
    max_distance: &str,
    params: &CloseContactParams,
) -> Result<QueryRequest, ProximityError> {
    params
        .validate()
        .map_err(|errors| ProximityError::InvalidInput(errors.to_string()))?;

    let order = match params.order.as_deref() {
        Some(order) => order.parse::<ResultOrder>().map_err(ProximityError::InvalidInput)?,
        None => state.default_order,
    };

    let request = QueryRequest::new(
        parse_coordinate("x_coordinate", x)?,
        parse_coordinate("y_coordinate", y)?,
        parse_coordinate("max_distance", max_distance)?,
    )
    .with_genders(GenderFilter::parse(params.gender.as_deref()))
    .with_order(order);

    Ok(request)
}

async fn run_query(
    state: &AppState,
    request: Result<QueryRequest, ProximityError>,
) -> HttpResponse {
    let span = tracing::info_span!("close_contact", query_id = %uuid::Uuid::new_v4());

    let (envelope, status_code) = state.service.respond(request).instrument(span).await;

    HttpResponse::build(StatusCode::from_u16(status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR))
        .json(envelope)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Contact, Gender};
    use crate::services::InMemoryContactStore;

    fn state() -> AppState {
        let store = InMemoryContactStore::from_contacts(vec![
            Contact::new("A", 0.0, 0.0, Some(Gender::Male)),
            Contact::new("B", 3.0, 4.0, Some(Gender::Female)),
        ]);
        AppState {
            service: Arc::new(CloseContactService::new(Arc::new(store))),
            default_order: ResultOrder::Scan,
        }
    }

    #[test]
    fn test_build_request_defaults() {
        let request = build_request(&state(), "25.00", "15.00", "13.54", &CloseContactParams::default()).unwrap();

        assert_eq!(request.reference.x(), 25.0);
        assert_eq!(request.max_distance, 13.54);
        assert!(request.gender_filter.is_empty());
        assert_eq!(request.order, ResultOrder::Scan);
    }

    #[test]
    fn test_build_request_rejects_bad_order() {
        let params = CloseContactParams {
            gender: None,
            order: Some("random".to_string()),
        };
        assert!(matches!(
            build_request(&state(), "0", "0", "1", &params),
            Err(ProximityError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_build_request_rejects_non_numeric() {
        let result = build_request(&state(), "0", "north", "1", &CloseContactParams::default());
        match result {
            Err(ProximityError::InvalidInput(message)) => assert!(message.contains("y_coordinate")),
            other => panic!("unexpected: {:?}", other),
        }
    }
}
