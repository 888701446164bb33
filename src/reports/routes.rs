//! Report route handlers

use axum::{
    extract::State,
    http::HeaderMap,
    routing::get,
    Json, Router,
};

use crate::error::Result;
use crate::routes::{auth_header, AppPath, AppQuery};
use crate::AppState;

use super::services::{yearly_report, ReportQuery, YearlyReportResponse};

pub fn router() -> Router<AppState> {
    Router::new().route("/api/reports/:year", get(yearly))
}

pub async fn yearly(
    State(state): State<AppState>,
    AppPath(year): AppPath<i32>,
    AppQuery(query): AppQuery<ReportQuery>,
    headers: HeaderMap,
) -> Result<Json<YearlyReportResponse>> {
    let report = yearly_report(&state, auth_header(&headers), year, query).await?;
    Ok(Json(report))
}
