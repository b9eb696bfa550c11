//! HTTP handler functions for the dashboard API.

use actix_web::error::{InternalError, QueryPayloadError};
use actix_web::{HttpRequest, HttpResponse, web};
use kenya_elections_analytics::{AnalyticsError, list_views, render_view};
use kenya_elections_analytics_models::ViewId;
use kenya_elections_server_models::{ApiError, ApiHealth, ViewQueryParams};

use crate::AppState;

/// `GET /api/health`
pub async fn health(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(ApiHealth {
        healthy: true,
        version: env!("CARGO_PKG_VERSION").to_string(),
        boundaries_available: state.store.boundaries_available(),
    })
}

/// `GET /api/views`
///
/// Lists every view with its label and accepted selector.
pub async fn views() -> HttpResponse {
    HttpResponse::Ok().json(list_views())
}

/// `GET /api/views/{view}`
///
/// Renders one view. `year`, `county` and `metric` are read from the query
/// string when the view accepts them.
pub async fn view(
    state: web::Data<AppState>,
    path: web::Path<String>,
    params: web::Query<ViewQueryParams>,
) -> HttpResponse {
    let Ok(view) = path.parse::<ViewId>() else {
        return HttpResponse::NotFound().json(ApiError::new(format!("Unknown view: {path}")));
    };

    let request = match params.to_request(view) {
        Ok(request) => request,
        Err(e) => {
            return HttpResponse::BadRequest().json(ApiError::new(format!(
                "Invalid metric {:?}: {e}",
                params.metric.as_deref().unwrap_or_default()
            )));
        }
    };

    match render_view(&state.store, &request) {
        Ok(result) => HttpResponse::Ok().json(result),
        Err(e) => analytics_error(view, &e),
    }
}

/// `GET /api/counties`
///
/// Statistical county names, sorted.
pub async fn counties(state: web::Data<AppState>) -> HttpResponse {
    match state.store.county_data() {
        Ok(doc) => HttpResponse::Ok().json(doc.sorted_names()),
        Err(e) => {
            log::error!("Failed to load counties: {e}");
            HttpResponse::InternalServerError().json(ApiError::new(e.to_string()))
        }
    }
}

/// `GET /api/years`
///
/// Election years present in the history document, ascending.
pub async fn years(state: web::Data<AppState>) -> HttpResponse {
    match state.store.election_history() {
        Ok(history) => HttpResponse::Ok().json(history.years()),
        Err(e) => {
            log::error!("Failed to load election years: {e}");
            HttpResponse::InternalServerError().json(ApiError::new(e.to_string()))
        }
    }
}

/// `GET /api/boundaries`
///
/// The county boundary feature collection as loaded.
pub async fn boundaries(state: web::Data<AppState>) -> HttpResponse {
    match state.store.boundaries() {
        Ok(boundaries) => HttpResponse::Ok().json(boundaries.feature_collection()),
        Err(e) => HttpResponse::ServiceUnavailable().json(ApiError::new(e.to_string())),
    }
}

/// Rejects a query string that does not deserialize (e.g. `?year=abc`)
/// with the same JSON error body as every other failure.
pub fn query_error(err: QueryPayloadError, req: &HttpRequest) -> actix_web::Error {
    log::debug!("Malformed query for {}: {err}", req.path());
    let body = ApiError::new(format!("Invalid query string: {err}"));
    InternalError::from_response(err, HttpResponse::BadRequest().json(body)).into()
}

fn analytics_error(view: ViewId, e: &AnalyticsError) -> HttpResponse {
    let body = ApiError::new(e.to_string());
    match e {
        AnalyticsError::NotFound { .. } => HttpResponse::NotFound().json(body),
        AnalyticsError::BoundariesUnavailable { .. } => {
            log::warn!("View {view} requested without boundaries: {e}");
            HttpResponse::ServiceUnavailable().json(body)
        }
        AnalyticsError::DocumentUnavailable(_) => {
            log::error!("Failed to render view {view}: {e}");
            HttpResponse::InternalServerError().json(body)
        }
    }
}
