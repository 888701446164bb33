//! Commission and bookkeeping route handlers

use axum::{
    extract::State,
    http::HeaderMap,
    routing::{delete, get, post},
    Json, Router,
};
use uuid::Uuid;

use crate::error::Result;
use crate::routes::{auth_header, AppJson, AppPath};
use crate::AppState;

use super::requests::{
    BalanceRequest, CalculateCommissionsRequest, RecordPaymentRequest, SaveFinancialsRequest,
};
use super::responses::{BalanceResponse, CommissionsResponse, FinancialSummaryResponse};
use super::services;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/commissions/calculate", post(calculate))
        .route("/api/commissions/balance", post(balance))
        .route(
            "/api/trips/:trip_id/financials",
            get(financials).put(save_financials),
        )
        .route("/api/trips/:trip_id/payments", post(record_payment))
        .route(
            "/api/trips/:trip_id/payments/:payment_id",
            delete(delete_payment),
        )
}

/// Live calculator: recomputed on every form change
pub async fn calculate(
    AppJson(request): AppJson<CalculateCommissionsRequest>,
) -> Result<Json<CommissionsResponse>> {
    request.validate()?;
    let response = services::commissions_response(
        request.gross_amount,
        request.net_amount,
        request.discount,
    )?;
    Ok(Json(response))
}

pub async fn balance(AppJson(request): AppJson<BalanceRequest>) -> Result<Json<BalanceResponse>> {
    request.validate()?;
    let response = services::balance_response(request.gross_amount, request.payments.iter().copied())?;
    Ok(Json(response))
}

pub async fn financials(
    State(state): State<AppState>,
    AppPath(trip_id): AppPath<Uuid>,
    headers: HeaderMap,
) -> Result<Json<FinancialSummaryResponse>> {
    let summary = services::trip_financial_summary(&state, auth_header(&headers), trip_id).await?;
    Ok(Json(summary))
}

pub async fn save_financials(
    State(state): State<AppState>,
    AppPath(trip_id): AppPath<Uuid>,
    headers: HeaderMap,
    AppJson(request): AppJson<SaveFinancialsRequest>,
) -> Result<Json<FinancialSummaryResponse>> {
    let summary = services::save_financials(&state, auth_header(&headers), trip_id, request).await?;
    Ok(Json(summary))
}

pub async fn record_payment(
    State(state): State<AppState>,
    AppPath(trip_id): AppPath<Uuid>,
    headers: HeaderMap,
    AppJson(request): AppJson<RecordPaymentRequest>,
) -> Result<Json<FinancialSummaryResponse>> {
    let summary = services::record_payment(&state, auth_header(&headers), trip_id, request).await?;
    Ok(Json(summary))
}

pub async fn delete_payment(
    State(state): State<AppState>,
    AppPath((trip_id, payment_id)): AppPath<(Uuid, Uuid)>,
    headers: HeaderMap,
) -> Result<Json<FinancialSummaryResponse>> {
    let summary =
        services::delete_payment(&state, auth_header(&headers), trip_id, payment_id).await?;
    Ok(Json(summary))
}
