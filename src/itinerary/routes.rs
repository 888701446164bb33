//! Itinerary route handlers

use axum::{
    extract::State,
    http::HeaderMap,
    routing::{get, post, put},
    Json, Router,
};
use uuid::Uuid;

use crate::error::Result;
use crate::routes::{auth_header, AppJson, AppPath};
use crate::AppState;

use super::expander::expand_days;
use super::requests::{ExpandDaysRequest, SaveDayRequest, TripDaysResponse};
use super::services;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/itinerary/expand", post(expand))
        .route("/api/trips/:trip_id/days", get(trip_days))
        .route("/api/trips/:trip_id/days/:day_number", put(save_day))
}

/// Lay out the days of a trip posted by the caller
pub async fn expand(
    State(state): State<AppState>,
    AppJson(request): AppJson<ExpandDaysRequest>,
) -> Result<Json<TripDaysResponse>> {
    let days = expand_days(&request.trip, &request.itineraries, &state.itinerary_defaults)?;
    Ok(Json(TripDaysResponse::new(request.trip.id, days)))
}

pub async fn trip_days(
    State(state): State<AppState>,
    AppPath(trip_id): AppPath<Uuid>,
    headers: HeaderMap,
) -> Result<Json<TripDaysResponse>> {
    let response = services::trip_days(&state, auth_header(&headers), trip_id).await?;
    Ok(Json(response))
}

pub async fn save_day(
    State(state): State<AppState>,
    AppPath((trip_id, day_number)): AppPath<(Uuid, u32)>,
    headers: HeaderMap,
    AppJson(request): AppJson<SaveDayRequest>,
) -> Result<Json<TripDaysResponse>> {
    let response =
        services::save_day(&state, auth_header(&headers), trip_id, day_number, request).await?;
    Ok(Json(response))
}
