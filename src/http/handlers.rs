//! HTTP handlers for the REST API.
//!
//! Each handler corresponds to an API endpoint and delegates to the service
//! layer for the actual computation. The moment under evaluation is always
//! derived here (host clock plus optional scrub offset) and passed down
//! explicitly, keeping the core reproducible.

use axum::{
    extract::{Path, Query, State},
    Json,
};

use super::dto::{
    BestWindowResponse, CatalogResponse, CatalogStarDto, HealthResponse, SkyQuery,
};
use super::error::AppError;
use super::state::AppState;
use crate::catalog;
use crate::models::Moment;
use crate::services;

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

/// The moment a query refers to: now in the site's civil offset, shifted by
/// the optional whole-hour scrub offset.
fn query_moment(state: &AppState, query: &SkyQuery) -> Moment {
    Moment::now_in(state.site.utc_offset()).with_hour_offset(query.hour_offset.unwrap_or(0))
}

// =============================================================================
// Health Check
// =============================================================================

/// GET /health
///
/// Health check endpoint to verify the service is running.
pub async fn health_check(State(state): State<AppState>) -> HandlerResult<HealthResponse> {
    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: "v1".to_string(),
        site: state.site.site_name.clone(),
    }))
}

// =============================================================================
// Catalog
// =============================================================================

/// GET /v1/stars
///
/// List the compiled-in bright-star catalog.
pub async fn list_stars(State(state): State<AppState>) -> HandlerResult<CatalogResponse> {
    let stars: Vec<CatalogStarDto> = state.catalog.iter().map(Into::into).collect();
    let total = stars.len();

    Ok(Json(CatalogResponse { stars, total }))
}

// =============================================================================
// Visibility Endpoints
// =============================================================================

/// GET /v1/visibility
///
/// Visible stars at the queried moment, brightest first. An empty list means
/// nothing is visible; it is not an error.
pub async fn get_visibility(
    State(state): State<AppState>,
    Query(query): Query<SkyQuery>,
) -> HandlerResult<crate::api::VisibilityReport> {
    let moment = query_moment(&state, &query);
    let mut report = services::compute_visibility_report(state.catalog, &state.site.observer, moment);

    if let Some(limit) = query.limit {
        report.stars.truncate(limit);
    }

    Ok(Json(report))
}

/// GET /v1/stars/{name}/best-window
///
/// Best observation window for one catalog star tonight. Unknown star names
/// are a 404; a star that never clears the altitude bar is a normal response
/// with `observable: false`.
pub async fn get_best_window(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Query(query): Query<SkyQuery>,
) -> HandlerResult<BestWindowResponse> {
    let star = catalog::find_star(&name)?;
    let moment = query_moment(&state, &query);
    let window = services::compute_best_window(star, &state.site.observer, moment);

    Ok(Json(BestWindowResponse {
        star: star.name.to_string(),
        observable: window.is_some(),
        window,
    }))
}

/// GET /v1/sky-map
///
/// Polar sky-chart markers for the queried moment.
pub async fn get_sky_map(
    State(state): State<AppState>,
    Query(query): Query<SkyQuery>,
) -> HandlerResult<crate::api::SkyMapData> {
    let moment = query_moment(&state, &query);
    let report = services::compute_visibility_report(state.catalog, &state.site.observer, moment);

    Ok(Json(services::project_sky_map(&report)))
}
