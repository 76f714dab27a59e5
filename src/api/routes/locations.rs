use actix_web::{web, HttpResponse};

use super::AppState;
use crate::api::dtos::{
    AddLocationsRequest, AddLocationsResponse, ErrorResponse, NearestLocationQuery,
    NearestLocationResponse, NearestLocationsResponse, NearestWithinQuery,
};
use crate::error::AppResult;
use crate::observability::ProximityQuery;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/locations")
            .route("/add", web::post().to(add_locations))
            .route("/one-nearest", web::get().to(nearest_one))
            .route("/nearest", web::get().to(nearest_within)),
    );
}

/// Stores a batch of locations atomically.
#[utoipa::path(
    post,
    path = "/api/locations/add",
    request_body = AddLocationsRequest,
    responses(
        (status = 201, description = "All locations stored", body = AddLocationsResponse),
        (status = 400, description = "Validation failed, nothing stored", body = ErrorResponse),
    ),
    tag = "locations"
)]
pub async fn add_locations(
    state: web::Data<AppState>,
    payload: web::Json<AddLocationsRequest>,
) -> AppResult<HttpResponse> {
    let items = payload.into_inner().into_new_locations()?;
    let count = state.location_service.add_locations(items).await?;
    state.metrics.record_locations_inserted(count);

    Ok(HttpResponse::Created().json(AddLocationsResponse::added(count)))
}

/// Single closest stored location to the given coordinate.
#[utoipa::path(
    get,
    path = "/api/locations/one-nearest",
    params(NearestLocationQuery),
    responses(
        (status = 200, description = "Closest location", body = NearestLocationResponse),
        (status = 204, description = "No locations stored"),
        (status = 400, description = "Invalid query", body = ErrorResponse),
    ),
    tag = "locations"
)]
pub async fn nearest_one(
    state: web::Data<AppState>,
    query: web::Query<NearestLocationQuery>,
) -> AppResult<HttpResponse> {
    let reference = query.reference()?;
    let nearest = state.location_service.nearest_one(reference).await?;
    state
        .metrics
        .record_proximity_query(ProximityQuery::NearestOne, usize::from(nearest.is_some()));

    Ok(match nearest {
        Some(location) => HttpResponse::Ok().json(NearestLocationResponse { data: location }),
        None => HttpResponse::NoContent().finish(),
    })
}

/// Stored locations within `threshold` kilometers, nearest first.
#[utoipa::path(
    get,
    path = "/api/locations/nearest",
    params(NearestWithinQuery),
    responses(
        (status = 200, description = "Matching locations in ascending distance", body = NearestLocationsResponse),
        (status = 204, description = "No location within the threshold"),
        (status = 400, description = "Invalid query", body = ErrorResponse),
    ),
    tag = "locations"
)]
pub async fn nearest_within(
    state: web::Data<AppState>,
    query: web::Query<NearestWithinQuery>,
) -> AppResult<HttpResponse> {
    let (reference, threshold_km) = query.criteria()?;
    let matches = state
        .location_service
        .nearest_within(reference, threshold_km)
        .await?;
    state
        .metrics
        .record_proximity_query(ProximityQuery::NearestWithin, matches.len());

    if matches.is_empty() {
        return Ok(HttpResponse::NoContent().finish());
    }
    Ok(HttpResponse::Ok().json(NearestLocationsResponse { data: matches }))
}
