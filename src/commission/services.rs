//! Commission service functions with travel API access.
//!
//! Financials and payments are always read fresh so the balance reflects
//! the latest recorded payments. Derived fields stored by the server are
//! recomputed here and compared; disagreements are reported, not fatal.

use rust_decimal::Decimal;
use serde::Serialize;
use uuid::Uuid;

use crate::error::{AppError, Result};
use crate::models::{NewPayment, Payment, SaveTripFinancials, TripFinancials};
use crate::AppState;

use super::calculators::{
    balance_due, commission_shares, compute_commissions, eur, round_money, sum_amounts,
    AmountOutOfRange, BalanceStatus,
};
use super::requests::{RecordPaymentRequest, SaveFinancialsRequest};
use super::responses::{
    BalanceResponse, CommissionBreakdown, CommissionsResponse, FinancialSummaryResponse,
};

/// A derived field whose stored value differs from the local formula
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParityMismatch {
    pub field: &'static str,
    #[serde(with = "rust_decimal::serde::str")]
    pub server: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub client: Decimal,
}

/// Signed and clamped commissions with their shares of the gross amount
pub fn commissions_response(
    gross_amount: Decimal,
    net_amount: Decimal,
    discount: Decimal,
) -> Result<CommissionsResponse, AmountOutOfRange> {
    let signed = compute_commissions(gross_amount, net_amount, discount)?;
    let clamped = signed.clamp_non_negative();

    Ok(CommissionsResponse {
        signed: CommissionBreakdown::from(&signed),
        clamped: CommissionBreakdown::from(&clamped),
        shares: commission_shares(gross_amount, &signed),
        is_loss: signed.is_loss(),
    })
}

pub fn balance_response<I>(gross_amount: Decimal, payments: I) -> Result<BalanceResponse, AmountOutOfRange>
where
    I: IntoIterator<Item = Decimal>,
{
    let paid_total = sum_amounts(payments)?;
    let balance = balance_due(gross_amount, [paid_total])?;

    Ok(BalanceResponse {
        gross_amount: eur(gross_amount),
        paid_total: eur(paid_total),
        balance_due: eur(balance),
        status: BalanceStatus::of(balance),
    })
}

/// Compare the server's derived fields with the local formulas at cent
/// precision. Fields the server did not send are skipped.
pub fn check_parity(
    financials: &TripFinancials,
    payments: &[Payment],
) -> Result<Vec<ParityMismatch>, AmountOutOfRange> {
    let local = compute_commissions(
        financials.gross_amount,
        financials.net_amount,
        financials.discount,
    )?;
    let local_balance = balance_due(financials.gross_amount, payments.iter().map(|p| p.amount))?;

    let pairs = [
        ("gross_commission", financials.gross_commission, local.gross_commission),
        ("supplier_commission", financials.supplier_commission, local.supplier_commission),
        ("agent_commission", financials.agent_commission, local.agent_commission),
        ("balance_due", financials.balance_due, local_balance),
    ];

    Ok(pairs
        .into_iter()
        .filter_map(|(field, server, client)| {
            let server = server?;
            if round_money(server, 2) == round_money(client, 2) {
                None
            } else {
                Some(ParityMismatch {
                    field,
                    server,
                    client,
                })
            }
        })
        .collect())
}

/// Assemble the bookkeeping view of a trip from fetched records
pub fn summarize(
    trip_id: Uuid,
    financials: TripFinancials,
    payments: Vec<Payment>,
) -> Result<FinancialSummaryResponse, AmountOutOfRange> {
    let parity_mismatches = check_parity(&financials, &payments)?;
    for mismatch in &parity_mismatches {
        tracing::warn!(
            trip_id = %trip_id,
            field = mismatch.field,
            server = %mismatch.server,
            client = %mismatch.client,
            "Commission parity mismatch"
        );
    }

    let commissions = commissions_response(
        financials.gross_amount,
        financials.net_amount,
        financials.discount,
    )?;
    let balance = balance_response(financials.gross_amount, payments.iter().map(|p| p.amount))?;

    Ok(FinancialSummaryResponse {
        trip_id,
        financials_id: financials.id,
        practice_number: financials.practice_number,
        booking_number: financials.booking_number,
        status: financials.status,
        gross_amount: eur(financials.gross_amount),
        net_amount: eur(financials.net_amount),
        discount: eur(financials.discount),
        confirmation_deposit: eur(financials.confirmation_deposit),
        commissions,
        balance,
        payments,
        parity_mismatches,
    })
}

/// Fetch financials and payments of a trip and summarize them
pub async fn trip_financial_summary(
    state: &AppState,
    auth: Option<&str>,
    trip_id: Uuid,
) -> Result<FinancialSummaryResponse> {
    let financials = state.api.get_trip_financials(trip_id, auth).await?;
    let payments = state.api.list_payments(financials.id, auth).await?;
    Ok(summarize(trip_id, financials, payments)?)
}

/// Record a payment, then return the recomputed summary
pub async fn record_payment(
    state: &AppState,
    auth: Option<&str>,
    trip_id: Uuid,
    request: RecordPaymentRequest,
) -> Result<FinancialSummaryResponse> {
    request.validate()?;

    let financials = state.api.get_trip_financials(trip_id, auth).await?;
    let payment = NewPayment {
        amount: request.amount,
        payment_date: request.payment_date,
        payment_type: request.payment_type,
        notes: request.notes.filter(|n| !n.trim().is_empty()),
    };
    let created = state.api.create_payment(financials.id, &payment, auth).await?;
    tracing::info!(
        trip_id = %trip_id,
        payment_id = %created.id,
        amount = %created.amount,
        "Payment recorded"
    );

    trip_financial_summary(state, auth, trip_id).await
}

/// Delete one payment of the trip, then return the recomputed summary
pub async fn delete_payment(
    state: &AppState,
    auth: Option<&str>,
    trip_id: Uuid,
    payment_id: Uuid,
) -> Result<FinancialSummaryResponse> {
    let financials = state.api.get_trip_financials(trip_id, auth).await?;
    let payments = state.api.list_payments(financials.id, auth).await?;
    if !payments.iter().any(|p| p.id == payment_id) {
        return Err(AppError::NotFound(format!(
            "payment {} on trip {}",
            payment_id, trip_id
        )));
    }

    state.api.delete_payment(payment_id, auth).await?;
    tracing::info!(trip_id = %trip_id, payment_id = %payment_id, "Payment deleted");

    trip_financial_summary(state, auth, trip_id).await
}

/// Create or fully replace the administrative record of a trip.
///
/// The server recomputes derived fields itself; the returned summary shows
/// whether it agrees.
pub async fn save_financials(
    state: &AppState,
    auth: Option<&str>,
    trip_id: Uuid,
    request: SaveFinancialsRequest,
) -> Result<FinancialSummaryResponse> {
    request.validate()?;

    let existing_id = match state.api.get_trip_financials(trip_id, auth).await {
        Ok(existing) => Some(existing.id),
        Err(AppError::NotFound(_)) => None,
        Err(e) => return Err(e),
    };

    let body = SaveTripFinancials {
        trip_id,
        practice_number: request.practice_number.trim().to_string(),
        booking_number: request.booking_number.trim().to_string(),
        gross_amount: request.gross_amount,
        net_amount: request.net_amount,
        discount: request.discount,
        practice_confirm_date: request.practice_confirm_date,
        client_departure_date: request.client_departure_date,
        confirmation_deposit: request.confirmation_deposit,
        status: request.status,
    };
    let saved = state.api.save_trip_financials(existing_id, &body, auth).await?;
    tracing::info!(
        trip_id = %trip_id,
        financials_id = %saved.id,
        created = existing_id.is_none(),
        "Trip financials saved"
    );

    let payments = state.api.list_payments(saved.id, auth).await?;
    Ok(summarize(trip_id, saved, payments)?)
}
