//! Calendar route handlers

use axum::{
    extract::State,
    http::HeaderMap,
    routing::{get, post},
    Json, Router,
};

use crate::error::Result;
use crate::routes::{auth_header, AppJson, AppPath, AppQuery};
use crate::AppState;

use super::requests::{CalendarQuery, CalendarResponse, MonthGridRequest};
use super::services::{build_calendar, load_trips, local_today};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/calendar/grid", post(grid))
        .route("/api/calendar/:year/:month", get(month))
}

/// Month view over trips posted by the caller
pub async fn grid(AppJson(request): AppJson<MonthGridRequest>) -> Result<Json<CalendarResponse>> {
    let today = request.today.unwrap_or_else(local_today);
    let calendar = build_calendar(&request.trips, request.year, request.month, today, request.selected)?;
    Ok(Json(calendar))
}

/// Month view over the caller's trips from the travel API
pub async fn month(
    State(state): State<AppState>,
    AppPath((year, month)): AppPath<(i32, u32)>,
    AppQuery(query): AppQuery<CalendarQuery>,
    headers: HeaderMap,
) -> Result<Json<CalendarResponse>> {
    let trips = load_trips(&state, auth_header(&headers)).await?;
    let today = query.today.unwrap_or_else(local_today);
    let calendar = build_calendar(&trips, year, month, today, query.selected)?;
    Ok(Json(calendar))
}
